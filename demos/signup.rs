//! Minimal signup service wired onto the standard response envelopes.
//!
//! Run with `cargo run --example signup`, then:
//!
//! ```text
//! curl -X POST localhost:3000/api/signup \
//!   -H 'content-type: application/json' \
//!   -d '{"name":"Hong","email":"test@example.com","password":"password123"}'
//! ```

use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use response_kit::{
    fallback, ApiError, ApiResponse, DomainError, ResponseCode, ValidJson,
};

#[derive(Debug, Clone, Copy)]
enum UserCode {
    SignupSuccess,
    UserNotFound,
    DuplicatedEmail,
}

impl ResponseCode for UserCode {
    fn code(&self) -> &'static str {
        match self {
            Self::SignupSuccess => "SIGNUP_SUCCESS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::DuplicatedEmail => "DUPLICATED_EMAIL",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::SignupSuccess => "Signed up successfully.",
            Self::UserNotFound => "The user does not exist.",
            Self::DuplicatedEmail => "The email address is already registered.",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::SignupSuccess => StatusCode::OK,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::DuplicatedEmail => StatusCode::CONFLICT,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
struct SignupRequest {
    #[validate(length(min = 1, message = "name must not be blank"))]
    name: String,
    #[validate(email(message = "must be a well-formed email address"))]
    email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    password: String,
}

async fn signup(
    ValidJson(req): ValidJson<SignupRequest>,
) -> Result<ApiResponse<String>, ApiError> {
    if req.email == "taken@example.com" {
        return Err(DomainError::new(UserCode::DuplicatedEmail, "email already registered").into());
    }
    info!(name = %req.name, "new signup");
    Ok(ApiResponse::success(UserCode::SignupSuccess, req.email))
}

async fn get_user(
    axum::extract::Path(id): axum::extract::Path<u64>,
) -> Result<ApiResponse<String>, ApiError> {
    if id == 42 {
        Ok(ApiResponse::success(UserCode::SignupSuccess, "test@example.com".to_string()))
    } else {
        Err(DomainError::new(UserCode::UserNotFound, format!("no user with id {id}")).into())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,response_kit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new()
        .route(
            "/api/signup",
            post(signup).fallback(fallback::method_not_allowed),
        )
        .route("/api/users/:id", get(get_user))
        .fallback(fallback::not_found)
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("signup demo listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
