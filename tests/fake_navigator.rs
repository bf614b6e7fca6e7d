mod common;

use common::{TestAnswer, TestScreen};
use wayfinder::testing::FakeNavigator;
use wayfinder::{GoToNavigator, NavStack, Navigator, StateOptions};

#[test]
fn records_navigated_screens_in_order() {
    let mut nav = FakeNavigator::new(TestScreen::A);
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::C);

    assert_eq!(nav.take_next_screen(), TestScreen::B);
    assert_eq!(nav.take_next_screen(), TestScreen::C);
    nav.expect_no_go_to_events();
}

#[test]
fn records_rejected_pushes() {
    let mut nav = FakeNavigator::new(TestScreen::A);
    nav.go_to(TestScreen::B);
    nav.go_to(TestScreen::B);

    assert!(nav.take_go_to().accepted);
    assert!(!nav.take_go_to().accepted);
}

#[test]
#[should_panic(expected = "no go_to events recorded")]
fn take_without_navigation_panics() {
    let mut nav = FakeNavigator::new(TestScreen::A);
    nav.take_next_screen();
}

#[test]
fn records_pops_with_result_flag() {
    let mut nav = FakeNavigator::new(TestScreen::A);
    nav.go_to_for_result(TestScreen::B, "pick");
    nav.pop_with_result(Some(Box::new(TestAnswer(5))));
    nav.pop();

    let go_to = nav.take_go_to();
    assert_eq!(go_to.result_key.as_deref(), Some("pick"));

    let first = nav.take_pop();
    assert_eq!(first.popped, Some(TestScreen::B));
    assert!(first.carried_result);

    // Second pop was at root: nothing popped, no result.
    let second = nav.take_pop();
    assert_eq!(second.popped, None);
    assert!(!second.carried_result);
    nav.expect_no_pop_events();
}

#[test]
fn records_reset_root_with_displaced_screens() {
    let mut nav = FakeNavigator::new(TestScreen::A);
    nav.go_to(TestScreen::B);
    nav.reset_root(TestScreen::C, StateOptions::DEFAULT);

    let event = nav.take_reset_root();
    assert_eq!(event.new_root, TestScreen::C);
    assert_eq!(event.displaced, vec![TestScreen::A, TestScreen::B]);
    nav.expect_no_reset_root_events();
}

#[test]
fn behaves_like_a_real_navigator() {
    let stack = NavStack::from_screens([TestScreen::A, TestScreen::B]).unwrap();
    let mut nav = FakeNavigator::with_stack(stack);

    assert_eq!(nav.peek(), Some(TestScreen::B));
    assert_eq!(nav.pop(), Some(TestScreen::B));
    assert_eq!(nav.peek_back_stack(), vec![TestScreen::A]);

    // Results still flow through the delegate.
    nav.go_to_for_result(TestScreen::C, "pick");
    nav.pop_with_result(Some(Box::new(TestAnswer(9))));
    let answer = nav.take_result("pick").expect("answer should be waiting");
    assert_eq!(answer.downcast_ref::<TestAnswer>(), Some(&TestAnswer(9)));
}
