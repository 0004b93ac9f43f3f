use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error answered to HTTP clients as `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = ?self.message, "request failed");
        }
        let body = serde_json::json!({
            "error": self.title,
            "message": self.message.unwrap_or_default(),
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::MissingField(_) => (StatusCode::BAD_REQUEST, "Missing Field"),
            ServiceError::UnknownField(_) => (StatusCode::BAD_REQUEST, "Unknown Field"),
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        let message = match e {
            ServiceError::NotFound(detail) => detail,
            other => other.to_string(),
        };
        JsonApiError::new(status, title, Some(message))
    }
}

// Malformed or non-JSON bodies are client errors like any other bad field set.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

// Record ids are integers; anything else in the path is a bad request.
impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Id", Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("seeding failed: {0:#}")]
    Seed(anyhow::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::NotFound("offer 5 not found".into()), StatusCode::NOT_FOUND),
            (ServiceError::MissingField("price".into()), StatusCode::BAD_REQUEST),
            (ServiceError::UnknownField("id".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Validation("too long".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Db("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }
}
