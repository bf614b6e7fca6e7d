//! Presenters for the demo screens.

use crate::demo::screens::{CounterPicked, DemoScreen, COUNTER_RESULT};
use crate::nav::Navigator;
use crate::presenter::{Presenter, ScreenEvent, ScreenState};

/// Destinations Home offers, in render order.
pub const HOME_DESTINATIONS: [&str; 2] = ["Counter", "Inspector"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    /// Index into [`HOME_DESTINATIONS`].
    pub selected: usize,
    /// Last value the counter answered with.
    pub last_picked: Option<i64>,
}

impl ScreenState for HomeState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    SelectPrevious,
    SelectNext,
    Open,
}

impl ScreenEvent for HomeEvent {}

#[derive(Default)]
pub struct HomePresenter {
    selected: usize,
    last_picked: Option<i64>,
}

impl Presenter<DemoScreen> for HomePresenter {
    type State = HomeState;
    type Event = HomeEvent;

    fn present(
        &mut self,
        _screen: &DemoScreen,
        navigator: &mut dyn Navigator<DemoScreen>,
    ) -> HomeState {
        if let Some(result) = navigator.take_result(COUNTER_RESULT) {
            if let Some(picked) = result.downcast_ref::<CounterPicked>() {
                self.last_picked = Some(picked.0);
            }
        }
        HomeState {
            selected: self.selected,
            last_picked: self.last_picked,
        }
    }

    fn on_event(&mut self, event: HomeEvent, navigator: &mut dyn Navigator<DemoScreen>) {
        match event {
            HomeEvent::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            HomeEvent::SelectNext => {
                self.selected = (self.selected + 1).min(HOME_DESTINATIONS.len() - 1);
            }
            HomeEvent::Open => match self.selected {
                0 => {
                    let start = self.last_picked.unwrap_or(0);
                    navigator.go_to_for_result(DemoScreen::Counter { start }, COUNTER_RESULT);
                }
                _ => {
                    navigator.go_to(DemoScreen::Inspector);
                }
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl ScreenState for CounterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    /// Pop, answering Home with the current value.
    Pick,
    /// Pop without an answer.
    Cancel,
}

impl ScreenEvent for CounterEvent {}

#[derive(Default)]
pub struct CounterPresenter {
    /// None until seeded from the screen's `start` on first present, and
    /// again after the counter closes.
    count: Option<i64>,
}

impl Presenter<DemoScreen> for CounterPresenter {
    type State = CounterState;
    type Event = CounterEvent;

    fn present(
        &mut self,
        screen: &DemoScreen,
        _navigator: &mut dyn Navigator<DemoScreen>,
    ) -> CounterState {
        let start = match screen {
            DemoScreen::Counter { start } => *start,
            _ => 0,
        };
        CounterState {
            count: *self.count.get_or_insert(start),
        }
    }

    fn on_event(&mut self, event: CounterEvent, navigator: &mut dyn Navigator<DemoScreen>) {
        match event {
            CounterEvent::Increment => {
                self.count = Some(self.count.unwrap_or(0) + 1);
            }
            CounterEvent::Decrement => {
                self.count = Some(self.count.unwrap_or(0) - 1);
            }
            CounterEvent::Pick => {
                let picked = self.count.take().unwrap_or(0);
                navigator.pop_with_result(Some(Box::new(CounterPicked(picked))));
            }
            CounterEvent::Cancel => {
                self.count = None;
                navigator.pop();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InspectorState {
    /// Screens above the active position, active→top, rendered form.
    pub forward: Vec<String>,
    pub active: String,
    /// Screens below the active position, active→root, rendered form.
    pub backward: Vec<String>,
    pub depth: usize,
}

impl ScreenState for InspectorState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorEvent {
    StepBack,
    StepForward,
    Close,
}

impl ScreenEvent for InspectorEvent {}

#[derive(Default)]
pub struct InspectorPresenter;

impl Presenter<DemoScreen> for InspectorPresenter {
    type State = InspectorState;
    type Event = InspectorEvent;

    fn present(
        &mut self,
        _screen: &DemoScreen,
        navigator: &mut dyn Navigator<DemoScreen>,
    ) -> InspectorState {
        match navigator.peek_nav_stack() {
            Some(list) => InspectorState {
                forward: list.forward_items().iter().map(label).collect(),
                active: label(list.active()),
                backward: list.backward_items().iter().map(label).collect(),
                depth: list.len(),
            },
            None => InspectorState::default(),
        }
    }

    fn on_event(&mut self, event: InspectorEvent, navigator: &mut dyn Navigator<DemoScreen>) {
        match event {
            InspectorEvent::StepBack => {
                navigator.backward();
            }
            InspectorEvent::StepForward => {
                navigator.forward();
            }
            InspectorEvent::Close => {
                navigator.pop();
            }
        }
    }
}

fn label(screen: &DemoScreen) -> String {
    match screen {
        DemoScreen::Home => "Home".to_string(),
        DemoScreen::Counter { start } => format!("Counter(start={start})"),
        DemoScreen::Inspector => "Inspector".to_string(),
    }
}
