mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{TestAnswer, TestScreen};
use wayfinder::{CoreNavigator, GoToNavigator, Navigator, NavigatorExt, StateOptions};

fn navigator() -> CoreNavigator<TestScreen> {
    CoreNavigator::with_root(TestScreen::A, |_| {})
}

#[test]
fn lifo_over_any_push_sequence() {
    let mut nav = navigator();
    for screen in [TestScreen::B, TestScreen::C, TestScreen::D] {
        assert!(nav.go_to(screen));
    }
    assert_eq!(nav.pop(), Some(TestScreen::D));
    assert_eq!(nav.pop(), Some(TestScreen::C));
    assert_eq!(nav.pop(), Some(TestScreen::B));
    assert_eq!(nav.pop(), None);
}

#[test]
fn push_pop_reset_sequence() {
    // [A] -> go B, go C -> pop yields C -> reset to D yields [A, B].
    let mut nav = navigator();
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::C);

    assert_eq!(nav.pop(), Some(TestScreen::C));
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::A, TestScreen::B]);

    let displaced = nav.reset_root(TestScreen::D, StateOptions::DEFAULT);
    assert_eq!(displaced, vec![TestScreen::A, TestScreen::B]);
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::D]);
}

#[test]
fn pop_on_fresh_root_returns_none() {
    let mut nav = navigator();
    nav.go_to(TestScreen::B);
    nav.reset_root(TestScreen::C, StateOptions::DEFAULT);
    assert_eq!(nav.pop(), None);
    assert_eq!(nav.peek(), Some(TestScreen::C));
}

#[test]
fn root_pop_hook_sees_every_root_pop() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut nav = CoreNavigator::with_root(TestScreen::A, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    nav.pop();
    nav.go_to(TestScreen::B);
    nav.pop();
    nav.pop();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn duplicate_push_is_rejected() {
    let mut nav = navigator();
    assert!(nav.go_to(TestScreen::B));
    assert!(!nav.go_to(TestScreen::B));
    assert_eq!(nav.peek_back_stack().len(), 2);
}

#[test]
fn peek_does_not_mutate() {
    let mut nav = navigator();
    nav.go_to(TestScreen::B);
    assert_eq!(nav.peek(), Some(TestScreen::B));
    assert_eq!(nav.peek(), Some(TestScreen::B));
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::A, TestScreen::B]);
}

#[test]
fn pop_until_unwinds_to_target() {
    let mut nav = navigator();
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::C);
    nav.go_to(TestScreen::D);

    let popped = nav.pop_until(|s| s == &TestScreen::B);
    assert_eq!(popped, vec![TestScreen::D, TestScreen::C]);
    assert_eq!(nav.peek(), Some(TestScreen::B));
}

#[test]
fn pop_root_keeps_final_screen_visible_for_the_hook() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let mut nav = CoreNavigator::with_root(TestScreen::A, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::C);

    nav.pop_root(None);
    // The active screen was promoted to root, so it is still what renders
    // while the hook decides what to do.
    assert_eq!(nav.peek(), Some(TestScreen::C));
    assert_eq!(nav.peek_back_stack().len(), 1);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn answer_flows_back_to_the_asking_screen() {
    let mut nav = navigator();
    nav.go_to_for_result(TestScreen::B, "pick");
    nav.pop_with_result(Some(Box::new(TestAnswer(7))));

    let answer = nav.take_result("pick").expect("answer should be waiting");
    assert_eq!(answer.downcast_ref::<TestAnswer>(), Some(&TestAnswer(7)));
}

#[test]
fn answer_is_consumed_once() {
    let mut nav = navigator();
    nav.go_to_for_result(TestScreen::B, "pick");
    nav.pop_with_result(Some(Box::new(TestAnswer(7))));

    assert!(nav.take_result("pick").is_some());
    assert!(nav.take_result("pick").is_none());
}
