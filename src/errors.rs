use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use std::collections::BTreeMap;

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub field_errors: Option<FieldErrors>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "validation failed".to_string(),
            field_errors: Some(errors),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
            field_errors: None,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.field_errors {
            Some(errors) => (self.status, Json(json!({ "errors": errors }))).into_response(),
            None => (self.status, self.message).into_response(),
        }
    }
}
