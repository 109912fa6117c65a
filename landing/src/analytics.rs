//! `navigator.sendBeacon` analytics sink.

use nav_overlay::{AnalyticsError, AnalyticsSink, NavEvent};

use crate::content::AnalyticsSettings;

/// Posts each event as a JSON beacon to a fixed endpoint.
pub struct BeaconSink {
    endpoint: String,
}

impl BeaconSink {
    /// `None` when no endpoint is configured.
    pub fn from_settings(settings: &AnalyticsSettings) -> Option<Self> {
        let endpoint = settings.endpoint.as_deref()?.trim();
        if endpoint.is_empty() {
            return None;
        }
        Some(Self {
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn payload(event: &NavEvent) -> Result<String, AnalyticsError> {
    serde_json::to_string(event).map_err(|e| AnalyticsError::Encode(e.to_string()))
}

impl AnalyticsSink for BeaconSink {
    fn send(&self, event: &NavEvent) -> Result<(), AnalyticsError> {
        let body = payload(event)?;
        let window = web_sys::window().ok_or(AnalyticsError::Unavailable)?;
        match window
            .navigator()
            .send_beacon_with_opt_str(&self.endpoint, Some(&body))
        {
            Ok(true) => Ok(()),
            Ok(false) => Err(AnalyticsError::Rejected("beacon not queued".into())),
            Err(err) => Err(AnalyticsError::Rejected(format!("{err:?}"))),
        }
    }
}
