use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::field_error::FieldError;
use crate::codes::ResponseCode;

/// Standard success envelope
///
/// Handlers return this directly; the transport status comes from the
/// response code the envelope was built with:
///
/// ```rust,ignore
/// async fn signup(ValidJson(req): ValidJson<SignupRequest>) -> ApiResponse<String> {
///     ApiResponse::success(UserCode::SignupSuccess, req.email)
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always true for success responses
    pub success: bool,
    /// Machine-readable code
    pub code: &'static str,
    /// Human-readable message
    pub message: &'static str,
    /// Response payload, null when the operation carries no data
    pub data: Option<T>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope wrapping a payload
    pub fn success(code: impl ResponseCode, data: T) -> Self {
        Self {
            success: true,
            code: code.code(),
            message: code.message(),
            data: Some(data),
            status: code.http_status(),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a payload (`"data": null`)
    pub fn empty(code: impl ResponseCode) -> Self {
        Self {
            success: true,
            code: code.code(),
            message: code.message(),
            data: None,
            status: code.http_status(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Standard error envelope
///
/// Validation failures, domain failures and unexpected errors all funnel
/// into this shape; `errors` is only populated for validation categories.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Machine-readable code
    pub code: &'static str,
    /// Human-readable message
    pub message: &'static str,
    /// Per-field violation details, empty for non-validation failures
    pub errors: Vec<FieldError>,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorResponse {
    /// Error envelope with no field detail
    pub fn of(code: impl ResponseCode) -> Self {
        Self::with_errors(code, Vec::new())
    }

    /// Error envelope carrying field-level violations
    pub fn with_errors(code: impl ResponseCode, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            code: code.code(),
            message: code.message(),
            errors,
            status: code.http_status(),
        }
    }

    /// Transport status paired with this envelope
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
