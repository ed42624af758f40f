//! Validating extractors wrapping axum's `Json`, `Query` and `Path`.
//!
//! Each extractor deserializes with the underlying axum extractor, then runs
//! the payload through [`validator::Validate`]. Deserialization failures and
//! constraint violations both reject with [`ApiError`], so handlers using
//! these extractors get the standard error envelope for free.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ApiError;
use crate::response::FieldError;

/// JSON body extractor with validation
///
/// ```rust,ignore
/// async fn signup(ValidJson(req): ValidJson<SignupRequest>) -> ApiResponse<String> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ApiError::BodyValidation(FieldError::from_validation_errors(&e)))?;
        Ok(ValidJson(value))
    }
}

/// Query string extractor with validation
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value
            .validate()
            .map_err(|e| ApiError::ParamValidation(FieldError::from_validation_errors(&e)))?;
        Ok(ValidQuery(value))
    }
}

/// Path parameter extractor with validation
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        value
            .validate()
            .map_err(|e| ApiError::ConstraintViolation(FieldError::from_validation_errors(&e)))?;
        Ok(ValidPath(value))
    }
}
