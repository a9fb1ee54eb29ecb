//! Pool-creation form handler.

use axum::Form;
use axum::extract::State;
use serde::Deserialize;

use crate::domain::Notification;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::home::HomeTemplate;

const SUCCESS_MESSAGE: &str =
    "Seu bolão foi criado com sucesso! O código foi copiado para a área de transferência.";
const FAILURE_MESSAGE: &str = "Erro ao cadastrar o bolão. Tente novamente.";

/// Form payload of the landing page's create form.
///
/// The title is taken as typed. Empty and whitespace-only titles are
/// forwarded unchanged; validation, if any, happens upstream.
#[derive(Debug, Deserialize)]
pub struct CreatePoolForm {
    pub title: String,
}

/// Handles the pool-creation form submission.
///
/// # Endpoint
///
/// `POST /pools` (`application/x-www-form-urlencoded`, field `title`)
///
/// # Behavior
///
/// Forwards the title to the upstream API and re-renders the landing page
/// with the outcome:
///
/// - **Success**: success notification, the invite code displayed and staged
///   as the page's copy-to-clipboard payload, and an emptied title input.
/// - **Failure**: the error is logged, a generic error notification is
///   shown, and the submitted title is kept in the input for retry.
///
/// Concurrent submissions are not serialized here; the upstream API owns
/// any deduplication. The rendered form disables its button while a
/// submission is in flight, which closes the double-click gap in the page
/// itself.
///
/// # Errors
///
/// Re-fetching the counters for the re-rendered page can still fail; that
/// is a page-generation failure and answers 502, as on `GET /`.
pub async fn create_pool_handler(
    State(state): State<AppState>,
    Form(form): Form<CreatePoolForm>,
) -> Result<HomeTemplate, AppError> {
    match state.pool_service.create_pool(&form.title).await {
        Ok(created) => {
            tracing::info!(code = %created.code, "pool created");

            let counts = state.counts_service.load().await?;
            Ok(HomeTemplate {
                counts,
                title_value: String::new(),
                notification: Some(Notification::success(SUCCESS_MESSAGE)),
                invite_code: Some(created.code),
            })
        }
        Err(err) => {
            tracing::error!(error = %err, title = %form.title, "pool creation failed");

            let counts = state.counts_service.load().await?;
            Ok(HomeTemplate {
                counts,
                title_value: form.title,
                notification: Some(Notification::error(FAILURE_MESSAGE)),
                invite_code: None,
            })
        }
    }
}
