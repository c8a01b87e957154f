use {
    crate::domain::error::StoreError,
    axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
};

/// Newtype over the domain error so the HTTP mapping lives in the adapter
/// layer. Backend faults are downgraded to a generic 500 after logging the
/// cause; the optional override carries endpoint-specific 500 wording
/// ("Failed to create entry").
pub struct ApiError {
    error: StoreError,
    backend_message: Option<&'static str>,
}

impl ApiError {
    pub fn with_backend_message(error: StoreError, message: &'static str) -> Self {
        Self {
            error,
            backend_message: Some(message),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self {
            error,
            backend_message: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.error {
            StoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StoreError::NotFound => (
                StatusCode::NOT_FOUND,
                "No entry found with the given ID".to_string(),
            ),
            StoreError::Backend(err) => {
                tracing::error!("record store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.backend_message
                        .unwrap_or("Internal Server Error")
                        .to_string(),
                )
            }
            StoreError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, Json(body)).into_response()
    }
}
