use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, equipment::MAX_IF_SLOTS, UnknownValue};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{entity} with name {name:?} already exists")]
    DuplicateName { entity: &'static str, name: String },
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
    #[error("Port {0:?} is only valid for DSCR unicables")]
    PortRequiresDscr(String),
    #[error("A unicable supports at most {MAX_IF_SLOTS} IF slots, got {0}")]
    TooManyIfSlots(usize),
    #[error("Switch option {0:?} must not contain a comma")]
    SwitchOptionContainsComma(String),
    #[error("At most one Tone Burst switch and one DiSEqC switch can be assigned")]
    SwitchCombination,
    #[error("Assigned {kind} with ID {id:?} does not exist")]
    UnknownEquipment { kind: &'static str, id: String },
    #[error("Expected {expected} fields, got {found} fields")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
