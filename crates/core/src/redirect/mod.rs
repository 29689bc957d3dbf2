//! Admin landing view that forwards to the dashboard.
//!
//! The view owns no routing itself: navigation goes through an injected
//! [`Navigator`], so hosts and tests decide what "navigate" means.

pub mod error;
pub mod view;

pub use error::NavigationError;
pub use view::{DASHBOARD_PATH, LoadingPlaceholder, Navigator, RedirectView};
