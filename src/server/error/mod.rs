//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type of the service and controller layers. It wraps
//! lower-level errors through `#[from]` conversions and implements `IntoResponse` so
//! handlers can return it directly.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// `DbErr::RecordNotUpdated` signals a failed optimistic lock and results in
    /// 409 Conflict. Everything else results in 500 Internal Server Error with the
    /// details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Metric registration or encoding error.
    #[error(transparent)]
    MetricsErr(#[from] prometheus::Error),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body is missing, not JSON, or does not match the expected shape.
    ///
    /// Results in 400 Bad Request with the rejection text, which names the offending field.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed.
    ///
    /// Results in 400 Bad Request with the rejection text.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `JsonRejection` and `PathRejection` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `DbErr::RecordNotUpdated`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::PathRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::DbErr(sea_orm::DbErr::RecordNotUpdated) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Record was updated by another transaction".to_string(),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
