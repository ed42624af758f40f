use axum::http::StatusCode;
use std::fmt;

/// Capability contract implemented by every response-code registry.
///
/// The crate ships [`CommonCode`] for cross-cutting codes; consumers define
/// additional enums for their own domains (USER_NOT_FOUND, DUPLICATED_EMAIL,
/// ...) and implement this trait on them. Code strings only need to be unique
/// within a single registry.
pub trait ResponseCode: fmt::Debug + Send + Sync {
    /// Machine-readable business code (e.g. "USER_NOT_FOUND")
    fn code(&self) -> &'static str;

    /// Human-readable message surfaced to the caller
    fn message(&self) -> &'static str;

    /// HTTP status paired with this code
    fn http_status(&self) -> StatusCode;
}

/// Cross-cutting response codes shared by every API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonCode {
    /// Request handled successfully
    Success,

    /// Request was malformed or failed validation
    BadRequest,

    /// Authentication required
    Unauthorized,

    /// Authenticated but not permitted
    Forbidden,

    /// Requested resource does not exist
    NotFound,

    /// HTTP method not supported by the route
    MethodNotAllowed,

    /// Request conflicts with current server state
    Conflict,

    /// Content-Type not supported
    UnsupportedMediaType,

    /// Unexpected server-side failure
    InternalError,
}

impl ResponseCode for CommonCode {
    fn code(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Conflict => "CONFLICT",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::Success => "Request processed successfully.",
            Self::BadRequest => "The request is invalid.",
            Self::Unauthorized => "Authentication is required.",
            Self::Forbidden => "Access is denied.",
            Self::NotFound => "The requested resource could not be found.",
            Self::MethodNotAllowed => "The HTTP method is not allowed.",
            Self::Conflict => "The request conflicts with the current state.",
            Self::UnsupportedMediaType => "The content type is not supported.",
            Self::InternalError => "An internal server error occurred.",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for CommonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CommonCode; 9] = [
        CommonCode::Success,
        CommonCode::BadRequest,
        CommonCode::Unauthorized,
        CommonCode::Forbidden,
        CommonCode::NotFound,
        CommonCode::MethodNotAllowed,
        CommonCode::Conflict,
        CommonCode::UnsupportedMediaType,
        CommonCode::InternalError,
    ];

    #[test]
    fn test_common_code_status_codes() {
        assert_eq!(CommonCode::Success.http_status(), StatusCode::OK);
        assert_eq!(CommonCode::BadRequest.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(CommonCode::Unauthorized.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(CommonCode::Forbidden.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(CommonCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CommonCode::MethodNotAllowed.http_status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(CommonCode::Conflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            CommonCode::UnsupportedMediaType.http_status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            CommonCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes_unique_within_registry() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code: {}", code.code());
        }
    }

    #[test]
    fn test_display_matches_code() {
        for code in ALL {
            assert_eq!(code.to_string(), code.code());
        }
    }
}
