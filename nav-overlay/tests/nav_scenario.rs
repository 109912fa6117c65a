//! Mobile menu walkthrough: open from the trigger, tab around, dismiss.

mod common;

use common::{FakePage, RecordingSink, TRIGGER, controller, press_tab};
use nav_overlay::{KeyOutcome, KeyPress, NavEventName, OverlayHost};
use pretty_assertions::assert_eq;

const MENU: &[&str] = &["Services", "Work", "Contact", "Close menu"];

#[test]
fn trigger_tab_cycle_escape() {
    let page = FakePage::with_panel(MENU);
    page.focus(&TRIGGER);
    let (nav, lock) = controller(page);
    let sink = RecordingSink::default();
    let log = sink.0.clone();
    let mut nav = nav.with_analytics(sink);

    nav.toggle();
    assert!(nav.is_open());
    assert!(lock.is_locked());
    assert_eq!(nav.host().active(), Some("Services"));

    let mut visited = Vec::new();
    for _ in 0..3 {
        assert_eq!(press_tab(&mut nav, false), KeyOutcome::PassThrough);
        visited.extend(nav.host().active());
    }
    assert_eq!(visited, vec!["Work", "Contact", "Close menu"]);

    // One more wraps back inside the panel instead of escaping to the page.
    assert_eq!(press_tab(&mut nav, false), KeyOutcome::FocusWrapped);
    assert_eq!(nav.host().active(), Some("Services"));

    let outcome = nav.handle_keydown(KeyPress::from_event("Escape", false));
    assert_eq!(outcome, KeyOutcome::Dismissed);
    assert!(!nav.is_open());
    assert_eq!(nav.host().active(), Some(TRIGGER));
    assert!(!lock.is_locked());
    assert_eq!(nav.host().live_listeners.get(), 0);

    let names: Vec<_> = log.borrow().iter().map(|e| e.event_name).collect();
    assert_eq!(names, vec![NavEventName::NavOpen, NavEventName::NavClose]);
}

#[test]
fn repeated_cycles_leak_no_listeners() {
    let (mut nav, lock) = controller(FakePage::with_panel(MENU));

    for _ in 0..5 {
        nav.toggle();
        press_tab(&mut nav, true);
        nav.handle_keydown(KeyPress::from_event("Escape", false));
    }

    assert_eq!(nav.host().listeners_attached.get(), 5);
    assert_eq!(nav.host().live_listeners.get(), 0);
    assert_eq!(lock.locks.get(), 5);
    assert_eq!(lock.unlocks.get(), 5);
}
