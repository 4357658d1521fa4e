use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DuplicateQuery, ErrorDto, ExistsDto, SuccessDto},
        equipment::{Equipment, EquipmentFields, EquipmentKind},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::equipment::EquipmentService,
    },
};

pub static EQUIPMENT_TAG: &str = "equipment";

/// Parses the `{type}` path segment (`lnbs`, `switches`, `motors`, `unicables`).
fn parse_kind(kind: &str) -> Result<EquipmentKind, Error> {
    Ok(kind.parse::<EquipmentKind>().map_err(ValidationError::from)?)
}

fn parse_fields(kind: EquipmentKind, body: serde_json::Value) -> Result<EquipmentFields, Error> {
    EquipmentFields::from_json(kind, body)
        .map_err(|e| ValidationError::InvalidBody(e.to_string()).into())
}

/// List every record of an equipment type, oldest first
#[utoipa::path(
    get,
    path = "/api/equipment/{type}",
    tag = EQUIPMENT_TAG,
    params(("type" = String, Path, description = "lnbs, switches, motors or unicables")),
    responses(
        (status = 200, description = "Equipment records", body = Vec<Equipment>),
        (status = 400, description = "Unknown equipment type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_kind(&kind)?;

    let records = EquipmentService::new(&state.db).list(kind).await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Create an equipment record
///
/// Fields outside the type's allow-list are dropped.
#[utoipa::path(
    post,
    path = "/api/equipment/{type}",
    tag = EQUIPMENT_TAG,
    params(("type" = String, Path, description = "lnbs, switches, motors or unicables")),
    request_body = Object,
    responses(
        (status = 201, description = "Created record", body = Equipment),
        (status = 400, description = "Invalid or duplicate record", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_kind(&kind)?;
    let fields = parse_fields(kind, body)?;

    let record = EquipmentService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Update an equipment record, keeping fields absent from the body
#[utoipa::path(
    put,
    path = "/api/equipment/{type}/{id}",
    tag = EQUIPMENT_TAG,
    params(
        ("type" = String, Path, description = "lnbs, switches, motors or unicables"),
        ("id" = String, Path, description = "Record ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Updated record", body = Equipment),
        (status = 400, description = "Invalid or duplicate record", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_kind(&kind)?;
    let fields = parse_fields(kind, body)?;

    let record = EquipmentService::new(&state.db)
        .update(kind, &id, fields)
        .await?
        .ok_or_else(|| Error::not_found(kind.label(), &id))?;

    Ok((StatusCode::OK, Json(record)))
}

/// Delete an equipment record with its mappings and satellite assignments
#[utoipa::path(
    delete,
    path = "/api/equipment/{type}/{id}",
    tag = EQUIPMENT_TAG,
    params(
        ("type" = String, Path, description = "lnbs, switches, motors or unicables"),
        ("id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = SuccessDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_kind(&kind)?;

    if !EquipmentService::new(&state.db).delete(kind, &id).await? {
        return Err(Error::not_found(kind.label(), id));
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Check whether an equipment name is already in use
#[utoipa::path(
    get,
    path = "/api/equipment/{type}/check-duplicate",
    tag = EQUIPMENT_TAG,
    params(
        ("type" = String, Path, description = "lnbs, switches, motors or unicables"),
        DuplicateQuery
    ),
    responses(
        (status = 200, description = "Whether the name is taken", body = ExistsDto),
        (status = 400, description = "Unknown equipment type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_equipment_duplicate(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<DuplicateQuery>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_kind(&kind)?;

    let exists = EquipmentService::new(&state.db)
        .exists_by_name(kind, &query.name, query.exclude_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}
