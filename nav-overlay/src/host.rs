//! Collaborators the controller drives.
//!
//! A rendering surface implements [`OverlayHost`] (panel, focus, anchors,
//! key listener) and [`ScrollLock`] (document scrolling). The browser app
//! backs them with `web-sys`; tests back them with recording fakes.

/// Document-side operations for one overlay panel.
pub trait OverlayHost {
    /// Handle to a focusable element.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// Document-level keydown subscription. Dropping it detaches the listener.
    type Listener;

    /// Interactive descendants of the panel, in tab order.
    fn focusable_nodes(&self) -> Vec<Self::Node>;

    /// Element that currently has focus.
    fn active_node(&self) -> Option<Self::Node>;

    /// Move focus to `node`.
    fn focus(&self, node: &Self::Node);

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Show or hide the panel and its backdrop.
    fn set_panel_visible(&self, visible: bool);

    /// Smooth-scroll the element with this id into view.
    ///
    /// Returns `false` when no element has the id; that is not an error.
    fn scroll_to_anchor(&self, id: &str) -> bool;

    /// Start receiving keydown events for the whole document.
    fn listen_keydown(&self) -> Self::Listener;
}

/// Page scroll lock.
pub trait ScrollLock {
    /// Disable page scrolling.
    fn lock(&self);

    /// Re-enable page scrolling.
    fn unlock(&self);
}

impl<T: ScrollLock + ?Sized> ScrollLock for std::rc::Rc<T> {
    fn lock(&self) {
        (**self).lock()
    }

    fn unlock(&self) {
        (**self).unlock()
    }
}
