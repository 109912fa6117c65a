//! Navigation link data rendered inside the overlay panel.

use serde::{Deserialize, Serialize};

/// A single entry of the navigation panel.
///
/// `destination` is either a URL (absolute or relative) or an in-page anchor
/// starting with `#`. Only the anchor form is scrolled to by the controller;
/// URLs are left to the browser's default navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    /// Visible text of the link
    pub label: String,
    /// URL or `#anchor`
    pub destination: String,
    /// Overrides the accessible name (`aria-label`) when the visible label is terse
    #[serde(default)]
    pub accessible_label: Option<String>,
}

/// Where activating a [`NavigationLink`] leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// In-page anchor, without the leading `#`
    Anchor(&'a str),
    /// Anything else: handed to the browser untouched
    Url(&'a str),
}

impl NavigationLink {
    /// Create a link without an accessible label override.
    pub fn new(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
            accessible_label: None,
        }
    }

    /// Attach an accessible label.
    #[must_use]
    pub fn with_accessible_label(mut self, label: impl Into<String>) -> Self {
        self.accessible_label = Some(label.into());
        self
    }

    /// Classify the destination.
    pub fn destination(&self) -> Destination<'_> {
        match self.destination.strip_prefix('#') {
            Some(id) => Destination::Anchor(id),
            None => Destination::Url(&self.destination),
        }
    }

    /// Anchor id without `#`, if this is an in-page link.
    pub fn anchor(&self) -> Option<&str> {
        match self.destination() {
            Destination::Anchor(id) => Some(id),
            Destination::Url(_) => None,
        }
    }

    /// Name announced by assistive technology.
    pub fn accessible_name(&self) -> &str {
        self.accessible_label.as_deref().unwrap_or(&self.label)
    }

    /// Whether the destination is usable: non-empty, and not a bare `#`.
    pub fn has_valid_destination(&self) -> bool {
        match self.destination() {
            Destination::Anchor(id) => !id.trim().is_empty(),
            Destination::Url(url) => !url.trim().is_empty(),
        }
    }
}
