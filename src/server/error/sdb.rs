use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Structural failures while reading an SDB document.
///
/// Missing or unknown blocks are not errors; only input that cannot be read as XML is.
#[derive(Error, Debug)]
pub enum SdbError {
    #[error("Malformed SDB document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("SDB document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Malformed SDB document: {0}")]
    Malformed(String),
    #[error("SDB document has no root element")]
    Empty,
}

impl IntoResponse for SdbError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
