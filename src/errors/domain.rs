use crate::codes::ResponseCode;

/// Typed business failure bound to a response code at construction.
///
/// This is the extension point for domain errors: consumers define their own
/// code registry and wrap it here, usually behind small constructors:
///
/// ```rust,ignore
/// fn user_not_found(id: u64) -> DomainError {
///     DomainError::new(UserCode::UserNotFound, format!("no user with id {id}"))
/// }
/// ```
///
/// The translator maps any `DomainError` to the status and envelope code of
/// the code it carries, so new variants plug in without touching shared code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    code: Box<dyn ResponseCode>,
    message: String,
}

impl DomainError {
    pub fn new(code: impl ResponseCode + 'static, message: impl Into<String>) -> Self {
        Self {
            code: Box::new(code),
            message: message.into(),
        }
    }

    /// Convenience constructor reusing the code's own message
    pub fn from_code(code: impl ResponseCode + 'static) -> Self {
        let message = code.message().to_string();
        Self {
            code: Box::new(code),
            message,
        }
    }

    pub fn code(&self) -> &dyn ResponseCode {
        self.code.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CommonCode;
    use axum::http::StatusCode;

    #[test]
    fn test_carries_bound_code() {
        let err = DomainError::new(CommonCode::NotFound, "no such user");
        assert_eq!(err.code().code(), "NOT_FOUND");
        assert_eq!(err.code().http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "no such user");
        assert_eq!(err.to_string(), "no such user");
    }

    #[test]
    fn test_from_code_uses_code_message() {
        let err = DomainError::from_code(CommonCode::Conflict);
        assert_eq!(err.message(), CommonCode::Conflict.message());
    }
}
