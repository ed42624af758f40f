use axum::{
    extract::path::ErrorKind,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use validator::ValidationErrors;

use super::domain::DomainError;
use crate::codes::{CommonCode, ResponseCode};
use crate::response::{ErrorResponse, FieldError};

/// Every failure category the translator understands, most specific first.
///
/// Handlers return `Result<_, ApiError>`; extractor rejections and domain
/// errors convert into a variant via `From`, and `into_response` turns the
/// variant into the standard error envelope. Translation never fails: every
/// variant maps to exactly one status and envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed declarative field constraints
    #[error("request body validation failed")]
    BodyValidation(Vec<FieldError>),

    /// Query/form binding failed declarative field constraints
    #[error("parameter validation failed")]
    ParamValidation(Vec<FieldError>),

    /// Path or query parameter violated a constraint
    #[error("constraint violation")]
    ConstraintViolation(Vec<FieldError>),

    /// Route exists but not for this HTTP method
    #[error("HTTP method not allowed")]
    MethodNotAllowed,

    /// Request Content-Type is not supported
    #[error("unsupported media type")]
    UnsupportedMediaType,

    /// Required parameter or path variable was absent
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// Parameter could not be converted to its expected type
    #[error("parameter type mismatch: {0}")]
    TypeMismatch(String),

    /// Body could not be parsed into the expected structure
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Generic business-rule violation. Kept on the legacy CONFLICT mapping;
    /// use [`DomainError`] when a precise status is wanted.
    #[error("{0}")]
    InvalidArgument(String),

    /// Generic invalid-state signal, same CONFLICT mapping as above
    #[error("{0}")]
    InvalidState(String),

    /// Typed business failure carrying its own response code
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Anything else: surfaced as 500, detail kept server-side
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::BodyValidation(errors) => {
                warn!(errors = ?errors, "body validation failed");
                ErrorResponse::with_errors(CommonCode::BadRequest, errors)
            }
            ApiError::ParamValidation(errors) => {
                warn!(errors = ?errors, "parameter validation failed");
                ErrorResponse::with_errors(CommonCode::BadRequest, errors)
            }
            ApiError::ConstraintViolation(errors) => {
                warn!(errors = ?errors, "constraint violation");
                ErrorResponse::with_errors(CommonCode::BadRequest, errors)
            }
            ApiError::MethodNotAllowed => {
                warn!("method not allowed");
                ErrorResponse::of(CommonCode::MethodNotAllowed)
            }
            ApiError::UnsupportedMediaType => {
                warn!("unsupported media type");
                ErrorResponse::of(CommonCode::UnsupportedMediaType)
            }
            // Detail for the next three is logged, never surfaced.
            ApiError::MissingParameter(detail) => {
                warn!(detail = %detail, "missing required parameter");
                ErrorResponse::of(CommonCode::BadRequest)
            }
            ApiError::TypeMismatch(detail) => {
                warn!(detail = %detail, "parameter type mismatch");
                ErrorResponse::of(CommonCode::BadRequest)
            }
            ApiError::MalformedBody(detail) => {
                warn!(detail = %detail, "malformed request body");
                ErrorResponse::of(CommonCode::BadRequest)
            }
            ApiError::InvalidArgument(message) | ApiError::InvalidState(message) => {
                warn!(message = %message, "business rule violation");
                ErrorResponse::of(CommonCode::Conflict)
            }
            ApiError::Domain(err) => {
                warn!(code = err.code().code(), message = err.message(), "domain error");
                ErrorResponse::of(DomainCode(err))
            }
            ApiError::Internal(err) => {
                error!(error = ?err, "unhandled server error");
                ErrorResponse::of(CommonCode::InternalError)
            }
        };

        body.into_response()
    }
}

// Lets the envelope builder read code/message/status straight off the
// domain error's bound code.
#[derive(Debug)]
struct DomainCode(DomainError);

impl ResponseCode for DomainCode {
    fn code(&self) -> &'static str {
        self.0.code().code()
    }

    fn message(&self) -> &'static str {
        self.0.code().message()
    }

    fn http_status(&self) -> axum::http::StatusCode {
        self.0.code().http_status()
    }
}

/// Manual `validate()` calls in handler bodies propagate with `?`
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BodyValidation(FieldError::from_validation_errors(&errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType,
            JsonRejection::JsonSyntaxError(err) => ApiError::MalformedBody(err.body_text()),
            JsonRejection::JsonDataError(err) => ApiError::MalformedBody(err.body_text()),
            other => ApiError::MalformedBody(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let detail = rejection.body_text();
        // serde_urlencoded reports absent keys as "missing field `name`"
        if detail.contains("missing field") {
            ApiError::MissingParameter(detail)
        } else {
            ApiError::TypeMismatch(detail)
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match &rejection {
            PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
                ErrorKind::WrongNumberOfParameters { .. } => {
                    ApiError::MissingParameter(rejection.body_text())
                }
                _ => ApiError::TypeMismatch(rejection.body_text()),
            },
            PathRejection::MissingPathParams(_) => {
                ApiError::MissingParameter(rejection.body_text())
            }
            _ => ApiError::Internal(anyhow::anyhow!(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn translate(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_body_validation_maps_to_bad_request() {
        let errors = vec![FieldError::new("email", "wrongemail", "invalid email")];
        let (status, body) = translate(ApiError::BodyValidation(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_method_not_allowed_has_no_field_errors() {
        let (status, body) = translate(ApiError::MethodNotAllowed).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unsupported_media_type() {
        let (status, body) = translate(ApiError::UnsupportedMediaType).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_missing_parameter_detail_not_surfaced() {
        let (status, body) =
            translate(ApiError::MissingParameter("missing field `q`".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["message"], CommonCode::BadRequest.message());
        assert!(!body.to_string().contains("missing field"));
    }

    #[tokio::test]
    async fn test_invalid_argument_maps_to_conflict() {
        let (status, body) = translate(ApiError::invalid_argument("email taken")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");
        // Legacy mapping keeps the generic message out of the body.
        assert!(!body.to_string().contains("email taken"));
    }

    #[tokio::test]
    async fn test_domain_error_uses_bound_code() {
        let err = DomainError::new(CommonCode::NotFound, "no user with id 7");
        let (status, body) = translate(ApiError::Domain(err)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_internal_error_never_leaks_detail() {
        let err = anyhow::anyhow!("db password was hunter2");
        let (status, body) = translate(ApiError::Internal(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_translation_is_idempotent_per_failure() {
        let make = || {
            ApiError::BodyValidation(vec![FieldError::new("name", "", "name must not be blank")])
        };
        let (_, first) = translate(make()).await;
        let (_, second) = translate(make()).await;
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_validation_errors_convert_to_body_validation() {
        use validator::Validate;

        #[derive(Debug, Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "must not be blank"))]
            name: String,
        }

        let errors = Probe { name: "".into() }.validate().unwrap_err();
        match ApiError::from(errors) {
            ApiError::BodyValidation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "name");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
