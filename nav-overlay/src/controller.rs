//! Disclosure overlay controller.
//!
//! Two states, `Closed` (initial) and `Open`. Every transition is synchronous
//! and every operation is total: repeated opens or closes are no-ops, so the
//! scroll lock and the keydown listener are acquired and released exactly
//! once per real transition.
//!
//! ```text
//! Closed --open()--> Open
//! Open --close() | Escape | backdrop | link--> Closed
//! ```

use crate::analytics::{self, AnalyticsSink, NavEvent, NavEventName};
use crate::focus::{FocusableSet, TabDirection};
use crate::host::{OverlayHost, ScrollLock};
use crate::keys::{Key, KeyOutcome, KeyPress, LinkOutcome};
use crate::link::{Destination, NavigationLink};

/// Label attached to `nav_open`/`nav_close` events unless overridden.
pub const DEFAULT_LABEL: &str = "primary-navigation";

/// Public view of the controller's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    /// Panel hidden, page scrollable
    Closed,
    /// Panel shown, focus trapped, page scroll locked
    Open,
}

enum Phase<N, G> {
    Closed,
    Open {
        focusables: FocusableSet<N>,
        // Held only for its Drop: detaches the document keydown listener.
        _keydown: G,
    },
}

/// Drives one navigation overlay.
pub struct OverlayController<H: OverlayHost, L: ScrollLock> {
    host: H,
    scroll_lock: L,
    trigger: H::Node,
    label: String,
    analytics: Option<Box<dyn AnalyticsSink>>,
    phase: Phase<H::Node, H::Listener>,
}

impl<H: OverlayHost, L: ScrollLock> OverlayController<H, L> {
    /// Create a closed controller. `trigger` receives focus back on close.
    pub fn new(host: H, trigger: H::Node, scroll_lock: L) -> Self {
        Self {
            host,
            scroll_lock,
            trigger,
            label: DEFAULT_LABEL.to_string(),
            analytics: None,
            phase: Phase::Closed,
        }
    }

    /// Report transitions to `sink`.
    #[must_use]
    pub fn with_analytics(mut self, sink: impl AnalyticsSink + 'static) -> Self {
        self.analytics = Some(Box::new(sink));
        self
    }

    /// Label used for `nav_open`/`nav_close` events.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        match self.phase {
            Phase::Closed => OverlayState::Closed,
            Phase::Open { .. } => OverlayState::Open,
        }
    }

    /// Shorthand for `state() == OverlayState::Open`.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Focusable elements captured by the last `open()`, while open.
    pub fn focusables(&self) -> Option<&FocusableSet<H::Node>> {
        match &self.phase {
            Phase::Open { focusables, .. } => Some(focusables),
            Phase::Closed => None,
        }
    }

    /// The rendering surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Element focus returns to on close.
    pub fn trigger(&self) -> &H::Node {
        &self.trigger
    }

    /// Show the panel and trap focus inside it. No-op when already open.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }

        self.host.set_panel_visible(true);
        let focusables = FocusableSet::new(self.host.focusable_nodes());
        match focusables.first() {
            Some(first) => self.host.focus(first),
            None => tracing::debug!("overlay opened without focusable elements; focus trap inactive"),
        }
        self.scroll_lock.lock();
        let keydown = self.host.listen_keydown();

        tracing::debug!(focusables = focusables.len(), "overlay opened");
        self.phase = Phase::Open {
            focusables,
            _keydown: keydown,
        };
        self.notify(NavEventName::NavOpen, self.label.clone());
    }

    /// Hide the panel, release scroll and restore focus. No-op when already closed.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.phase = Phase::Closed;
        self.host.set_panel_visible(false);
        self.scroll_lock.unlock();
        if self.host.is_connected(&self.trigger) {
            self.host.focus(&self.trigger);
        } else {
            tracing::debug!("overlay trigger detached; focus left unmanaged");
        }

        tracing::debug!("overlay closed");
        self.notify(NavEventName::NavClose, self.label.clone());
    }

    /// Close when open, open when closed.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a document-level key press.
    ///
    /// Escape dismisses the overlay; Tab at either edge of the focusable set
    /// wraps around. Everything else is left alone.
    pub fn handle_keydown(&mut self, press: KeyPress) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match press.key {
            Key::Escape => {
                self.close();
                KeyOutcome::Dismissed
            }
            Key::Tab => self.trap_tab(TabDirection::from_shift(press.shift)),
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer activation of the dimmed area behind the panel.
    pub fn handle_backdrop_activate(&mut self) {
        self.close();
    }

    /// A link inside the panel was activated.
    ///
    /// The overlay closes first so the scroll lock does not swallow the
    /// anchor scroll.
    pub fn handle_link_activate(&mut self, link: &NavigationLink) -> LinkOutcome {
        self.notify(NavEventName::NavLinkActivate, link.label.clone());
        self.close();

        match link.destination() {
            Destination::Anchor(id) => {
                if self.host.scroll_to_anchor(id) {
                    LinkOutcome::ScrolledToAnchor
                } else {
                    tracing::debug!(anchor = id, "anchor target not found; nothing to scroll");
                    LinkOutcome::AnchorMissing
                }
            }
            Destination::Url(_) => LinkOutcome::Navigate,
        }
    }

    fn trap_tab(&self, direction: TabDirection) -> KeyOutcome {
        let Phase::Open { focusables, .. } = &self.phase else {
            return KeyOutcome::Ignored;
        };
        let active = self.host.active_node();
        match focusables.wrap_target(active.as_ref(), direction) {
            Some(target) => {
                self.host.focus(target);
                KeyOutcome::FocusWrapped
            }
            None => KeyOutcome::PassThrough,
        }
    }

    fn notify(&self, name: NavEventName, label: String) {
        analytics::notify(self.analytics.as_deref(), NavEvent::new(name, label));
    }
}

impl<H: OverlayHost, L: ScrollLock> Drop for OverlayController<H, L> {
    fn drop(&mut self) {
        // Unmounted while open: the page must not stay scroll-locked.
        if self.is_open() {
            self.phase = Phase::Closed;
            self.scroll_lock.unlock();
        }
    }
}
