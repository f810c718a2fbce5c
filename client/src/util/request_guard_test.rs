use super::*;
use futures::executor::block_on;

#[test]
fn new_guard_is_alive() {
    assert!(RequestGuard::new().is_alive());
    assert!(RequestGuard::default().is_alive());
}

#[test]
fn cancel_is_seen_by_every_clone() {
    let guard = RequestGuard::new();
    let task_view = guard.clone();
    guard.cancel();
    assert!(!task_view.is_alive());
}

#[test]
fn separate_guards_are_independent() {
    let guard = RequestGuard::new();
    let other = RequestGuard::new();
    guard.cancel();
    assert!(other.is_alive());
}

#[test]
fn settle_returns_output_while_alive() {
    let guard = RequestGuard::new();
    assert_eq!(block_on(guard.settle(async { 7 })), Some(7));
}

#[test]
fn settle_drops_output_after_cancel() {
    let guard = RequestGuard::new();
    let teardown = guard.clone();
    let outcome = block_on(guard.settle(async move {
        teardown.cancel();
        "late"
    }));
    assert_eq!(outcome, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn spawn_is_inert_outside_the_browser() {
    let hit = std::rc::Rc::new(std::cell::Cell::new(false));
    let seen = hit.clone();
    RequestGuard::new().spawn(async { 1 }, move |_| seen.set(true));
    assert!(!hit.get());
}
