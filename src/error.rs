use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors raised at the fallible edges of the crate.
///
/// The decision functions themselves (locale resolution, field lookup,
/// credential validation) are total and never return these.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("invalid request: {0}")]
    BadRequest(String),
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::UnknownLocale(_) | SiteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SiteError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "ok": false, "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            SiteError::UnknownLocale("fr".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SiteError::PasswordHash("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SiteError::UnknownLocale("fr".into()).to_string(),
            "unknown locale 'fr'"
        );
    }
}
