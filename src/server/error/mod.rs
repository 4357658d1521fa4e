//! Error types for the SDB configuration server.
//!
//! Domain-specific errors (validation, SDB document parsing, external codec, configuration)
//! live in their own modules and are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so controllers can return them directly with `?`.

pub mod codec;
pub mod config;
pub mod sdb;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        codec::CodecError, config::ConfigError, sdb::SdbError, validation::ValidationError,
    },
};

/// Main error type for the server application.
///
/// # Error Categories
/// - Input validation (missing fields, duplicate names, invalid enumerated values)
/// - Missing records
/// - SDB document structure errors
/// - External binary codec failures
/// - Configuration errors (missing/invalid environment variables)
/// - External library errors (database, JSON, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request rejected before any write took place.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The external XML/BIN codec failed.
    #[error(transparent)]
    CodecError(#[from] CodecError),
    /// An SDB document could not be read.
    #[error(transparent)]
    SdbError(#[from] SdbError),
    /// A referenced record does not exist.
    #[error("{entity} with ID {id:?} not found")]
    NotFound { entity: &'static str, id: String },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON encode/decode error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 404 Not Found - Missing projects, builds, satellites or equipment
/// - 422 Unprocessable Entity - Unreadable SDB documents
/// - 502 Bad Gateway - External codec failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::CodecError(err) => err.into_response(),
            Self::SdbError(err) => err.into_response(),
            err @ Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
