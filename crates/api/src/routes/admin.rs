//! Admin landing page.
//!
//! `/admin` has no content of its own: it activates a [`RedirectView`] and
//! serves the loading placeholder, which refreshes to the dashboard.

use std::cell::RefCell;

use axum::{Router, extract::State, response::Html, routing::get};
use logodouman_core::redirect::{NavigationError, Navigator, RedirectView};
use tracing::debug;

use crate::{AppState, error::ApiError};

/// Creates the admin landing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin", get(admin_landing))
}

/// Records the location requested by the view so it can be written into the page.
#[derive(Debug, Default)]
struct ResponseNavigator {
    location: RefCell<Option<String>>,
}

impl ResponseNavigator {
    fn into_location(self) -> Option<String> {
        self.location.into_inner()
    }
}

impl Navigator for ResponseNavigator {
    fn navigate_to(&self, path: &str) -> Result<(), NavigationError> {
        // Only same-origin absolute paths; "//host" would leave the admin.
        if !path.starts_with('/') || path.starts_with("//") {
            return Err(NavigationError::InvalidPath(path.to_string()));
        }
        *self.location.borrow_mut() = Some(path.to_string());
        Ok(())
    }
}

/// GET `/admin` - Redirect to the dashboard.
async fn admin_landing(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let navigator = ResponseNavigator::default();
    let view = RedirectView::with_destination(&navigator, state.dashboard_path.to_string());

    view.on_activate()?;
    let placeholder = view.render();
    drop(view);

    let location = navigator
        .into_location()
        .ok_or_else(|| NavigationError::Unavailable("no location recorded".into()))?;
    debug!(destination = %location, "Redirecting admin landing page");

    Ok(Html(placeholder.to_html(&location)))
}
