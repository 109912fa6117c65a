//! # nav-overlay
//!
//! Disclosure overlay controller for navigation drawers.
//!
//! The crate owns the behaviour behind a modal-like mobile menu: the
//! open/closed lifecycle, a cyclic focus trap while open, and a dismissal
//! policy (Escape, backdrop, link activation) that always leaves the page with
//! scroll re-enabled and focus back on the trigger. Everything that touches a
//! real document goes through the [`OverlayHost`] and [`ScrollLock`] traits, so
//! the logic runs and is tested natively without a browser.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nav_overlay::{KeyPress, OverlayController};
//!
//! let mut nav = OverlayController::new(host, trigger, scroll_lock);
//! nav.toggle(); // open: focus moves into the panel, scroll is locked
//!
//! let outcome = nav.handle_keydown(KeyPress::from_event("Escape", false));
//! assert!(outcome.stops_propagation());
//! assert!(!nav.is_open());
//! ```
//!
//! ## Architecture
//!
//! - [`controller`] - the state machine and dismissal policy
//! - [`focus`] - [`FocusableSet`] and the cyclic tab rule
//! - [`host`] - collaborator traits implemented by the rendering surface
//! - [`keys`] - keyboard input model and handler outcomes
//! - [`link`] - navigation link data
//! - [`analytics`] - best-effort event notifications
//!
//! ---
//!
//! Developed by the Lumen Studio web team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytics;
pub mod controller;
pub mod focus;
pub mod host;
pub mod keys;
pub mod link;

pub use analytics::{AnalyticsError, AnalyticsSink, NavEvent, NavEventName};
pub use controller::{OverlayController, OverlayState};
pub use focus::{FocusableSet, TabDirection};
pub use host::{OverlayHost, ScrollLock};
pub use keys::{Key, KeyOutcome, KeyPress, LinkOutcome};
pub use link::{Destination, NavigationLink};
