use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the external XML/BIN codec executables.
///
/// These are always reported back to the caller; none of them is fatal to the server.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("The {0} executable is not configured")]
    ExecutableNotConfigured(&'static str),
    #[error("Codec executable not found at {0}")]
    ExecutableNotFound(PathBuf),
    #[error("Codec I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Codec did not finish within {0} seconds")]
    Timeout(u64),
    #[error("Codec exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },
    #[error("Codec finished without writing its output file")]
    OutputMissing,
    #[error("Codec produced XML that is not valid UTF-8")]
    InvalidUtf8,
}

impl IntoResponse for CodecError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
