//! Router fallback handlers producing the standard error envelope.
//!
//! axum's built-in fallbacks answer with empty bodies; wiring these instead
//! keeps 404/405 on the same JSON contract as everything else:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/api/signup", post(signup).fallback(fallback::method_not_allowed))
//!     .fallback(fallback::not_found)
//! ```

use crate::codes::CommonCode;
use crate::response::ErrorResponse;

/// 405 fallback for `MethodRouter::fallback`
pub async fn method_not_allowed() -> ErrorResponse {
    tracing::warn!("method not allowed");
    ErrorResponse::of(CommonCode::MethodNotAllowed)
}

/// 404 fallback for `Router::fallback`
pub async fn not_found() -> ErrorResponse {
    tracing::warn!("route not found");
    ErrorResponse::of(CommonCode::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_fallback_statuses() {
        assert_eq!(method_not_allowed().await.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }
}
