use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request-level failures, translated to HTTP at the handler boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing or invalid field(s): {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Advisory service unavailable: {0}")]
    Advisory(#[source] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::DuplicateUsername => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Advisory(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ApiError::Validation(fields) => json!({
                "message": self.to_string(),
                "fields": fields,
            }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_offending_fields() {
        let err = ApiError::Validation(vec!["metricType", "unit"]);
        assert_eq!(err.to_string(), "Missing or invalid field(s): metricType, unit");
    }

    #[test]
    fn invalid_credentials_message_is_generic() {
        let err = ApiError::InvalidCredentials;
        assert!(!err.to_string().to_lowercase().contains("username"));
        assert!(!err.to_string().to_lowercase().contains("password"));
    }
}
