//! Standard success/error response envelopes

pub mod envelope;
pub mod field_error;

pub use envelope::{ApiResponse, ErrorResponse};
pub use field_error::FieldError;
