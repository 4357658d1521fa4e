use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DuplicateQuery, ErrorDto, ExistsDto, SuccessDto},
        satellite::{EquipmentAssignment, Satellite, SatelliteFields},
    },
    server::{error::Error, model::app::AppState, service::satellite::SatelliteService},
};

pub static SATELLITE_TAG: &str = "satellite";

/// List satellites with their carriers and services
#[utoipa::path(
    get,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    responses(
        (status = 200, description = "Hydrated satellites, oldest first", body = Vec<Satellite>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_satellites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let satellites = SatelliteService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(satellites)))
}

#[utoipa::path(
    get,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = String, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Hydrated satellite", body = Satellite),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let satellite = SatelliteService::new(&state.db)
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("Satellite", &id))?;

    Ok((StatusCode::OK, Json(satellite)))
}

/// Create a satellite together with its carriers and services
#[utoipa::path(
    post,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    request_body = SatelliteFields,
    responses(
        (status = 201, description = "Created satellite", body = Satellite),
        (status = 400, description = "Invalid or duplicate satellite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_satellite(
    State(state): State<AppState>,
    Json(fields): Json<SatelliteFields>,
) -> Result<impl IntoResponse, Error> {
    let satellite = SatelliteService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(satellite)))
}

/// Replace a satellite and its whole carrier/service tree
#[utoipa::path(
    put,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = String, Path, description = "Satellite ID")),
    request_body = SatelliteFields,
    responses(
        (status = 200, description = "Updated satellite", body = Satellite),
        (status = 400, description = "Invalid or duplicate satellite", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_satellite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<SatelliteFields>,
) -> Result<impl IntoResponse, Error> {
    let satellite = SatelliteService::new(&state.db)
        .update(&id, fields)
        .await?
        .ok_or_else(|| Error::not_found("Satellite", &id))?;

    Ok((StatusCode::OK, Json(satellite)))
}

#[utoipa::path(
    delete,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = String, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Satellite deleted", body = SuccessDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_satellite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if !SatelliteService::new(&state.db).delete(&id).await? {
        return Err(Error::not_found("Satellite", id));
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Current equipment selection of a satellite
///
/// Without a stored LNB the first LNB in the store is reported.
#[utoipa::path(
    get,
    path = "/api/satellites/{id}/equipment",
    tag = SATELLITE_TAG,
    params(("id" = String, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Selected equipment", body = EquipmentAssignment),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let selection = SatelliteService::new(&state.db).selection(&id).await?;

    Ok((StatusCode::OK, Json(selection.into_assignment())))
}

/// Save the equipment selected for a satellite
#[utoipa::path(
    put,
    path = "/api/satellites/{id}/equipment",
    tag = SATELLITE_TAG,
    params(("id" = String, Path, description = "Satellite ID")),
    request_body = EquipmentAssignment,
    responses(
        (status = 200, description = "Updated satellite", body = Satellite),
        (status = 400, description = "Unknown equipment or invalid switch combination", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_satellite_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(assignment): Json<EquipmentAssignment>,
) -> Result<impl IntoResponse, Error> {
    let satellite = SatelliteService::new(&state.db)
        .assign_equipment(&id, assignment)
        .await?
        .ok_or_else(|| Error::not_found("Satellite", &id))?;

    Ok((StatusCode::OK, Json(satellite)))
}

#[utoipa::path(
    get,
    path = "/api/satellites/check-duplicate",
    tag = SATELLITE_TAG,
    params(DuplicateQuery),
    responses(
        (status = 200, description = "Whether the name is taken", body = ExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_satellite_duplicate(
    State(state): State<AppState>,
    Query(query): Query<DuplicateQuery>,
) -> Result<impl IntoResponse, Error> {
    let exists = SatelliteService::new(&state.db)
        .exists_by_name(&query.name, query.exclude_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}
