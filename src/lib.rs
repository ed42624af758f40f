//! Standardized JSON response envelopes and failure translation for axum.
//!
//! Success bodies look like
//! `{"success":true,"code":"...","message":"...","data":...}` and error
//! bodies like `{"success":false,"code":"...","message":"...","errors":[...]}`.
//! Handlers return [`ApiResponse`] on success and `Result<_, ApiError>`
//! otherwise; extractor rejections, validation failures and domain errors all
//! funnel through [`ApiError`] into the same envelope.

pub mod codes;
pub mod errors;
pub mod extract;
pub mod fallback;
pub mod response;

pub use codes::{CommonCode, ResponseCode};
pub use errors::{ApiError, DomainError};
pub use extract::{ValidJson, ValidPath, ValidQuery};
pub use response::{ApiResponse, ErrorResponse, FieldError};
