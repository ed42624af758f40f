//! Failure types and their translation into error envelopes

pub mod api;
pub mod domain;

pub use api::ApiError;
pub use domain::DomainError;
