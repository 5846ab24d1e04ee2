//! Gateway errors and their HTTP rendering.

use agent_brain::BrainError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use brain_registry::RegistryError;
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure of a single request. Rendered as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Brain(#[from] BrainError),

    /// Body or query string could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// No route matched.
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Brain(BrainError::Registry(RegistryError::NotFound { .. })) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Brain(BrainError::Registry(
                RegistryError::UnregisteredLanguage { .. } | RegistryError::Validation { .. },
            )) => StatusCode::BAD_REQUEST,
            ApiError::Brain(BrainError::NoLanguagesRegistered) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Brain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Failure of the gateway process itself.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("gateway task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("failed to seed demo brain: {0}")]
    Seed(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_registry::EntityKind;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(RegistryError::not_found(EntityKind::Module, "m-1")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RegistryError::unregistered_language("xx")),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::from(RegistryError::blank("title")), StatusCode::BAD_REQUEST),
            (
                ApiError::from(BrainError::NoLanguagesRegistered),
                StatusCode::CONFLICT,
            ),
            (ApiError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::RouteNotFound, StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status, "{}", err);
        }
    }

    #[test]
    fn test_messages_pass_through() {
        let err = ApiError::from(RegistryError::not_found(EntityKind::Knowledge, "k-9"));
        assert_eq!(err.to_string(), "unknown knowledge item k-9");
        assert_eq!(ApiError::RouteNotFound.to_string(), "Not found");
    }
}
