//! Recording fakes for driving the controller without a browser.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use nav_overlay::{
    AnalyticsError, AnalyticsSink, KeyOutcome, KeyPress, NavEvent, OverlayController, OverlayHost,
    ScrollLock,
};

pub const TRIGGER: &str = "menu-button";

/// In-memory document with one overlay panel.
#[derive(Default)]
pub struct FakePage {
    pub panel: RefCell<Vec<&'static str>>,
    pub active: RefCell<Option<&'static str>>,
    pub detached: RefCell<HashSet<&'static str>>,
    pub anchors: RefCell<HashSet<String>>,
    pub scrolled_to: RefCell<Vec<String>>,
    pub panel_visible: Cell<bool>,
    pub live_listeners: Rc<Cell<usize>>,
    pub listeners_attached: Cell<usize>,
}

impl FakePage {
    pub fn with_panel(nodes: &[&'static str]) -> Self {
        let page = Self::default();
        page.panel.replace(nodes.to_vec());
        page
    }

    pub fn with_anchor(self, id: &str) -> Self {
        self.anchors.borrow_mut().insert(id.to_string());
        self
    }

    pub fn active(&self) -> Option<&'static str> {
        *self.active.borrow()
    }

    pub fn detach(&self, node: &'static str) {
        self.detached.borrow_mut().insert(node);
    }

    /// Browser default for a Tab press the controller let through.
    pub fn native_tab(&self, shift: bool) {
        let panel = self.panel.borrow();
        let current = self.active().and_then(|a| panel.iter().position(|n| *n == a));
        let next = match (current, shift) {
            (Some(i), false) if i + 1 < panel.len() => Some(panel[i + 1]),
            (Some(i), true) if i > 0 => Some(panel[i - 1]),
            _ => None,
        };
        if let Some(next) = next {
            self.active.replace(Some(next));
        }
    }
}

pub struct ListenerGuard(Rc<Cell<usize>>);

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl OverlayHost for FakePage {
    type Node = &'static str;
    type Listener = ListenerGuard;

    fn focusable_nodes(&self) -> Vec<Self::Node> {
        self.panel.borrow().clone()
    }

    fn active_node(&self) -> Option<Self::Node> {
        self.active()
    }

    fn focus(&self, node: &Self::Node) {
        self.active.replace(Some(*node));
    }

    fn is_connected(&self, node: &Self::Node) -> bool {
        !self.detached.borrow().contains(node)
    }

    fn set_panel_visible(&self, visible: bool) {
        self.panel_visible.set(visible);
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        if self.anchors.borrow().contains(id) {
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        } else {
            false
        }
    }

    fn listen_keydown(&self) -> Self::Listener {
        self.live_listeners.set(self.live_listeners.get() + 1);
        self.listeners_attached.set(self.listeners_attached.get() + 1);
        ListenerGuard(self.live_listeners.clone())
    }
}

/// Counts lock/unlock calls.
#[derive(Default)]
pub struct CountingLock {
    pub locks: Cell<usize>,
    pub unlocks: Cell<usize>,
}

impl CountingLock {
    pub fn is_locked(&self) -> bool {
        self.locks.get() > self.unlocks.get()
    }
}

impl ScrollLock for CountingLock {
    fn lock(&self) {
        self.locks.set(self.locks.get() + 1);
    }

    fn unlock(&self) {
        self.unlocks.set(self.unlocks.get() + 1);
    }
}

/// Shares its event log with the test.
#[derive(Clone, Default)]
pub struct RecordingSink(pub Rc<RefCell<Vec<NavEvent>>>);

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: &NavEvent) -> Result<(), AnalyticsError> {
        self.0.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Always fails.
pub struct FailingSink;

impl AnalyticsSink for FailingSink {
    fn send(&self, _event: &NavEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Unavailable)
    }
}

pub type Nav = OverlayController<FakePage, Rc<CountingLock>>;

pub fn controller(page: FakePage) -> (Nav, Rc<CountingLock>) {
    let lock = Rc::new(CountingLock::default());
    let nav = OverlayController::new(page, TRIGGER, lock.clone());
    (nav, lock)
}

/// Press Tab, applying the browser default when the controller lets it through.
pub fn press_tab(nav: &mut Nav, shift: bool) -> KeyOutcome {
    let outcome = nav.handle_keydown(KeyPress::from_event("Tab", shift));
    if outcome == KeyOutcome::PassThrough {
        nav.host().native_tab(shift);
    }
    outcome
}
