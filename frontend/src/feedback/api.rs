use crate::config::{CSRF_HEADER, FEEDBACK_PATH};
use crate::csrf::CsrfTokenManager;
use crate::error::ApiError;
use crate::http::Transport;
use crate::models::FeedbackForm;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    #[error("CSRF token unavailable")]
    TokenUnavailable,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FeedbackError {
    /// Text for the blocking alert shown after a failed submission.
    pub fn alert_message(&self) -> &'static str {
        match self {
            FeedbackError::TokenUnavailable => {
                "セキュリティトークンの取得に失敗しました。ページを再読み込みしてください。"
            }
            FeedbackError::Api(_) => "送信に失敗しました。もう一度お試しください。",
        }
    }
}

/// Posts the form with the CSRF header attached.
///
/// A 400 usually means the token went stale, so it is dropped and the next
/// submission fetches a fresh one. A success also drops the token; refetching
/// it is left to the caller so the confirmation is not held up by it.
pub async fn submit_feedback<T: Transport>(
    transport: &T,
    csrf: &CsrfTokenManager<T>,
    form: &FeedbackForm,
) -> Result<(), FeedbackError> {
    let token = csrf.acquire().await.ok_or(FeedbackError::TokenUnavailable)?;
    let body = serde_json::to_string(form).map_err(ApiError::from)?;

    let response = transport
        .post_json(FEEDBACK_PATH, &[(CSRF_HEADER, token.as_str())], &body)
        .await?;

    if !response.ok() {
        let error = ApiError::Status(response.status);
        if error.is_bad_request() {
            log::warn!("Feedback rejected with 400, discarding CSRF token");
            csrf.invalidate();
        }
        return Err(error.into());
    }

    log::info!("Feedback submitted");
    csrf.invalidate();
    Ok(())
}
