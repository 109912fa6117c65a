//! Best-effort analytics notifications.
//!
//! The controller reports transitions to an optional [`AnalyticsSink`].
//! Delivery failures are logged and dropped; they never reach the overlay's
//! state machine.

use serde::Serialize;
use thiserror::Error;

/// Event names understood by the analytics backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEventName {
    /// Overlay opened
    NavOpen,
    /// Overlay closed, whatever the cause
    NavClose,
    /// A link inside the overlay was activated
    NavLinkActivate,
}

impl NavEventName {
    /// Wire name, e.g. `nav_open`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NavOpen => "nav_open",
            Self::NavClose => "nav_close",
            Self::NavLinkActivate => "nav_link_activate",
        }
    }
}

/// Payload sent to the sink: `{"eventName": ..., "label": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEvent {
    /// What happened
    pub event_name: NavEventName,
    /// Overlay or link label
    pub label: String,
}

impl NavEvent {
    /// Build an event.
    pub fn new(event_name: NavEventName, label: impl Into<String>) -> Self {
        Self {
            event_name,
            label: label.into(),
        }
    }
}

/// Why a notification could not be delivered.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Transport missing in this environment
    #[error("analytics transport unavailable")]
    Unavailable,
    /// Transport refused the payload
    #[error("analytics transport rejected event: {0}")]
    Rejected(String),
    /// Payload could not be encoded
    #[error("failed to encode analytics event: {0}")]
    Encode(String),
}

/// Receiver of overlay notifications.
pub trait AnalyticsSink {
    /// Deliver one event.
    fn send(&self, event: &NavEvent) -> Result<(), AnalyticsError>;
}

/// Send `event` if a sink is configured, swallowing any failure.
pub(crate) fn notify(sink: Option<&dyn AnalyticsSink>, event: NavEvent) {
    let Some(sink) = sink else {
        return;
    };
    if let Err(err) = sink.send(&event) {
        tracing::debug!(event = event.event_name.as_str(), %err, "analytics notification dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<NavEvent>>);

    impl AnalyticsSink for Recording {
        fn send(&self, event: &NavEvent) -> Result<(), AnalyticsError> {
            self.0.borrow_mut().push(event.clone());
            Ok(())
        }
    }

    struct Broken;

    impl AnalyticsSink for Broken {
        fn send(&self, _event: &NavEvent) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Rejected("quota exceeded".into()))
        }
    }

    #[test]
    fn serializes_wire_shape() {
        let event = NavEvent::new(NavEventName::NavLinkActivate, "Pricing");
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "eventName": "nav_link_activate", "label": "Pricing" })
        );
    }

    #[test]
    fn wire_names_match_serde() {
        for name in [
            NavEventName::NavOpen,
            NavEventName::NavClose,
            NavEventName::NavLinkActivate,
        ] {
            let json = serde_json::to_string(&name).expect("serialize");
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn notify_delivers_to_sink() {
        let sink = Recording(RefCell::new(Vec::new()));
        notify(Some(&sink), NavEvent::new(NavEventName::NavOpen, "menu"));
        assert_eq!(
            *sink.0.borrow(),
            vec![NavEvent::new(NavEventName::NavOpen, "menu")]
        );
    }

    #[test]
    fn notify_swallows_failures_and_absent_sink() {
        notify(Some(&Broken), NavEvent::new(NavEventName::NavClose, "menu"));
        notify(None, NavEvent::new(NavEventName::NavClose, "menu"));
    }
}
