//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::{AggregateCounts, Notification};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/home.html` with:
/// - The three aggregate counters (pools, guesses, users)
/// - The pool-creation form, pre-filled with `title_value`
/// - An optional notification box from a previous submission
/// - An optional invite code, displayed and staged for the clipboard
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub counts: AggregateCounts,
    pub title_value: String,
    pub notification: Option<Notification>,
    pub invite_code: Option<String>,
}

impl HomeTemplate {
    /// Page with a clean form and no notification.
    pub fn fresh(counts: AggregateCounts) -> Self {
        Self {
            counts,
            title_value: String::new(),
            notification: None,
            invite_code: None,
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// The counters are fetched from the upstream API during request handling,
/// before the page is delivered. A failed fetch fails the whole page
/// (502) instead of rendering partial or default values.
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    let counts = state.counts_service.load().await?;

    Ok(HomeTemplate::fresh(counts))
}
