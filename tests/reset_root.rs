mod common;

use common::TestScreen;
use wayfinder::{CoreNavigator, GoToNavigator, Navigator, StateOptions};

fn navigator(root: TestScreen) -> CoreNavigator<TestScreen> {
    CoreNavigator::with_root(root, |_| {})
}

#[test]
fn returns_displaced_screens_in_original_order() {
    let mut nav = navigator(TestScreen::A);
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::C);

    let displaced = nav.reset_root(TestScreen::D, StateOptions::DEFAULT);
    assert_eq!(
        displaced,
        vec![TestScreen::A, TestScreen::B, TestScreen::C]
    );
    assert_eq!(nav.peek(), Some(TestScreen::D));
    assert_eq!(nav.peek_back_stack().len(), 1);
}

#[test]
fn second_reset_to_same_root_returns_nothing() {
    let mut nav = navigator(TestScreen::A);
    nav.go_to(TestScreen::B);

    let first = nav.reset_root(TestScreen::C, StateOptions::DEFAULT);
    assert_eq!(first.len(), 2);

    let second = nav.reset_root(TestScreen::C, StateOptions::DEFAULT);
    assert!(second.is_empty());
    assert_eq!(nav.peek(), Some(TestScreen::C));
}

#[test]
fn save_and_restore_switches_between_tab_stacks() {
    let mut nav = navigator(TestScreen::Tab(1));
    nav.go_to(TestScreen::B);

    // Switch to tab 2, stashing tab 1's stack.
    nav.reset_root(TestScreen::Tab(2), StateOptions::SAVE_AND_RESTORE);
    assert_eq!(nav.peek(), Some(TestScreen::Tab(2)));
    nav.go_to(TestScreen::C);

    // Switching back restores B on top of tab 1.
    nav.reset_root(TestScreen::Tab(1), StateOptions::SAVE_AND_RESTORE);
    assert_eq!(nav.peek(), Some(TestScreen::B));
    assert_eq!(
        nav.peek_back_stack(),
        vec![TestScreen::Tab(1), TestScreen::B]
    );

    // And forward again to tab 2's stack.
    nav.reset_root(TestScreen::Tab(2), StateOptions::SAVE_AND_RESTORE);
    assert_eq!(nav.peek(), Some(TestScreen::C));
}

#[test]
fn restore_without_saved_state_starts_fresh() {
    let mut nav = navigator(TestScreen::A);
    nav.go_to(TestScreen::B);

    nav.reset_root(TestScreen::Tab(1), StateOptions::SAVE_AND_RESTORE);
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::Tab(1)]);
}

#[test]
fn clear_drops_saved_state_after_one_restore() {
    let mut nav = navigator(TestScreen::Tab(1));
    nav.go_to(TestScreen::B);
    nav.reset_root(TestScreen::Tab(2), StateOptions::SAVE_AND_RESTORE);

    // Restore tab 1 and clear its stash in the same call.
    let options = StateOptions {
        save: false,
        restore: true,
        clear: true,
    };
    nav.reset_root(TestScreen::Tab(1), options);
    assert_eq!(nav.peek(), Some(TestScreen::B));

    // The stash is gone: switching away and back starts fresh.
    nav.reset_root(TestScreen::Tab(2), StateOptions::DEFAULT);
    nav.reset_root(TestScreen::Tab(1), StateOptions { restore: true, ..StateOptions::DEFAULT });
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::Tab(1)]);
}

#[test]
fn displaced_screens_include_forward_history() {
    let mut nav = navigator(TestScreen::A);
    nav.go_to(TestScreen::B);
    nav.backward();

    let displaced = nav.reset_root(TestScreen::C, StateOptions::DEFAULT);
    // B was only reachable through forward history, but it is still
    // discarded state the caller may want to clean up.
    assert_eq!(displaced, vec![TestScreen::A, TestScreen::B]);
}
