//! Demo app loop: events in, presenters run, the active screen rendered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

use crate::demo::config::DemoConfig;
use crate::demo::events::{AppEvent, EventHandler};
use crate::demo::presenters::{
    CounterEvent, CounterPresenter, HomeEvent, HomePresenter, InspectorEvent,
    InspectorPresenter, InspectorState, HOME_DESTINATIONS,
};
use crate::demo::screens::DemoScreen;
use crate::demo::terminal::setup_terminal;
use crate::nav::{CoreNavigator, Navigator, NavigatorExt, StateOptions};
use crate::presenter::Presenter;
use crate::stack::NavStack;

/// Options resolved from CLI and config file.
pub struct RunOptions {
    pub config: DemoConfig,
    /// Restore the stack persisted by the previous run, when present.
    pub restore: bool,
}

/// Run the demo until the root screen is popped.
pub fn run(options: RunOptions) -> anyhow::Result<()> {
    let stack = initial_stack(&options)?;
    let mut app = App::new(stack);

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(options.config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Resize(..) | AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    drop(guard);

    if let Some(path) = &options.config.state_file {
        app.navigator
            .stack()
            .snapshot_to_file(path)
            .with_context(|| format!("failed to persist stack to '{}'", path.display()))?;
        info!(path = %path.display(), "navigation stack persisted");
    }
    Ok(())
}

fn initial_stack(options: &RunOptions) -> anyhow::Result<NavStack<DemoScreen>> {
    if options.restore {
        if let Some(path) = &options.config.state_file {
            if path.exists() {
                let stack = NavStack::restore_from_file(path).with_context(|| {
                    format!("failed to restore stack from '{}'", path.display())
                })?;
                info!(depth = stack.depth(), "navigation stack restored");
                return Ok(stack);
            }
        }
    }
    Ok(NavStack::new(DemoScreen::Home))
}

struct App {
    navigator: CoreNavigator<DemoScreen>,
    quit: Arc<AtomicBool>,
    home: HomePresenter,
    counter: CounterPresenter,
    inspector: InspectorPresenter,
}

impl App {
    fn new(stack: NavStack<DemoScreen>) -> Self {
        let quit = Arc::new(AtomicBool::new(false));
        let hook = Arc::clone(&quit);
        Self {
            navigator: CoreNavigator::new(stack, move |_| hook.store(true, Ordering::Relaxed)),
            quit,
            home: HomePresenter::default(),
            counter: CounterPresenter::default(),
            inspector: InspectorPresenter::default(),
        }
    }

    fn should_quit(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    fn active_screen(&self) -> DemoScreen {
        self.navigator.stack().active().screen().clone()
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Global keys first, then the active screen's map.
        match key.code {
            KeyCode::Char('q') => {
                self.navigator.pop_root(None);
                return;
            }
            KeyCode::Char('r') => {
                self.navigator
                    .reset_root(DemoScreen::Home, StateOptions::DEFAULT);
                return;
            }
            _ => {}
        }

        match self.active_screen() {
            DemoScreen::Home => {
                let event = match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Some(HomeEvent::SelectPrevious),
                    KeyCode::Down | KeyCode::Char('j') => Some(HomeEvent::SelectNext),
                    KeyCode::Enter => Some(HomeEvent::Open),
                    KeyCode::Esc => {
                        // Popping the root quits via the root-pop hook.
                        self.navigator.pop();
                        None
                    }
                    _ => None,
                };
                if let Some(event) = event {
                    self.home.on_event(event, &mut self.navigator);
                }
            }
            DemoScreen::Counter { .. } => {
                let event = match key.code {
                    KeyCode::Up | KeyCode::Char('+') => Some(CounterEvent::Increment),
                    KeyCode::Down | KeyCode::Char('-') => Some(CounterEvent::Decrement),
                    KeyCode::Enter => Some(CounterEvent::Pick),
                    KeyCode::Esc => Some(CounterEvent::Cancel),
                    _ => None,
                };
                if let Some(event) = event {
                    self.counter.on_event(event, &mut self.navigator);
                }
            }
            DemoScreen::Inspector => {
                let event = match key.code {
                    KeyCode::Left | KeyCode::Char('h') => Some(InspectorEvent::StepBack),
                    KeyCode::Right | KeyCode::Char('l') => Some(InspectorEvent::StepForward),
                    KeyCode::Esc => Some(InspectorEvent::Close),
                    _ => None,
                };
                if let Some(event) = event {
                    self.inspector.on_event(event, &mut self.navigator);
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let breadcrumb = self
            .navigator
            .peek_back_stack()
            .iter()
            .map(screen_title)
            .collect::<Vec<_>>()
            .join(" > ");
        let paragraph = Paragraph::new(Line::from(breadcrumb))
            .block(Block::default().title("wayfinder").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect) {
        let screen = self.active_screen();
        match &screen {
            DemoScreen::Home => {
                let state = self.home.present(&screen, &mut self.navigator);
                let mut lines = Vec::new();
                for (index, name) in HOME_DESTINATIONS.iter().enumerate() {
                    if index == state.selected {
                        lines.push(Line::styled(
                            format!("> {name}"),
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                    } else {
                        lines.push(Line::from(format!("  {name}")));
                    }
                }
                lines.push(Line::from(""));
                match state.last_picked {
                    Some(value) => lines.push(Line::from(format!("last picked: {value}"))),
                    None => lines.push(Line::from("nothing picked yet")),
                }
                let paragraph = Paragraph::new(lines)
                    .block(Block::default().title("Home").borders(Borders::ALL));
                frame.render_widget(paragraph, area);
            }
            DemoScreen::Counter { .. } => {
                let state = self.counter.present(&screen, &mut self.navigator);
                let lines = vec![
                    Line::styled(
                        format!("{}", state.count),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::from(""),
                    Line::from("Enter picks this value for Home"),
                ];
                let paragraph = Paragraph::new(lines)
                    .block(Block::default().title("Counter").borders(Borders::ALL));
                frame.render_widget(paragraph, area);
            }
            DemoScreen::Inspector => {
                let state = self.inspector.present(&screen, &mut self.navigator);
                let paragraph = Paragraph::new(inspector_lines(&state))
                    .block(Block::default().title("Inspector").borders(Borders::ALL));
                frame.render_widget(paragraph, area);
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.active_screen() {
            DemoScreen::Home => "↑/↓ select · Enter open · Esc/q quit · r reset",
            DemoScreen::Counter { .. } => "↑/↓ adjust · Enter pick · Esc cancel · q quit",
            DemoScreen::Inspector => "←/→ step history · Esc close · q quit",
        };
        let paragraph =
            Paragraph::new(Line::from(hints)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

fn inspector_lines(state: &InspectorState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(format!("history length: {}", state.depth)));
    lines.push(Line::from(""));
    for entry in state.forward.iter().rev() {
        lines.push(Line::from(format!("  {entry}")));
    }
    lines.push(Line::styled(
        format!("* {}", state.active),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for entry in &state.backward {
        lines.push(Line::from(format!("  {entry}")));
    }
    lines
}

fn screen_title(screen: &DemoScreen) -> &'static str {
    match screen {
        DemoScreen::Home => "Home",
        DemoScreen::Counter { .. } => "Counter",
        DemoScreen::Inspector => "Inspector",
    }
}
