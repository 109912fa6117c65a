//! Keyboard input model and what the host should do with the native event.

/// Keys the overlay reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `Escape` (also the legacy `Esc` value)
    Escape,
    /// `Tab`
    Tab,
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// A key press as seen by the document-level listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// Which key
    pub key: Key,
    /// Shift modifier held
    pub shift: bool,
}

impl KeyPress {
    /// Build from the DOM `key` string and `shiftKey` flag.
    pub fn from_event(key: &str, shift: bool) -> Self {
        Self {
            key: Key::from_dom_key(key),
            shift,
        }
    }
}

/// Disposition of a key event after the overlay handled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Overlay closed or key irrelevant; nothing to do with the event
    Ignored,
    /// Overlay closed on Escape; stop propagation
    Dismissed,
    /// Focus wrapped inside the trap; prevent the default tab action
    FocusWrapped,
    /// Tab within the trap; let the browser move focus
    PassThrough,
}

impl KeyOutcome {
    /// Whether `event.preventDefault()` must be called.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::FocusWrapped)
    }

    /// Whether `event.stopPropagation()` must be called.
    pub fn stops_propagation(self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

/// Disposition of a link click inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Anchor target found and scrolled to; prevent the native jump
    ScrolledToAnchor,
    /// Anchor target missing; prevent the native jump, nothing scrolled
    AnchorMissing,
    /// Regular URL; let the browser navigate
    Navigate,
}

impl LinkOutcome {
    /// Whether `event.preventDefault()` must be called.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Navigate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_keys() {
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
        assert_eq!(Key::from_dom_key("Enter"), Key::Other);
        assert_eq!(Key::from_dom_key("tab"), Key::Other);
    }

    #[test]
    fn outcomes_map_to_event_actions() {
        assert!(KeyOutcome::FocusWrapped.prevents_default());
        assert!(!KeyOutcome::PassThrough.prevents_default());
        assert!(KeyOutcome::Dismissed.stops_propagation());
        assert!(!KeyOutcome::Ignored.stops_propagation());

        assert!(LinkOutcome::ScrolledToAnchor.prevents_default());
        assert!(LinkOutcome::AnchorMissing.prevents_default());
        assert!(!LinkOutcome::Navigate.prevents_default());
    }
}
