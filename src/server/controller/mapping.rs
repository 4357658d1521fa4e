use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        mapping::{AddMappingDto, EquipmentType, Mapping, MappingAddedDto, MappingOwner, OwnerKind},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::mapping::MappingService,
    },
};

pub static MAPPING_TAG: &str = "mapping";

/// Builds the owner from the `{ownerKind}/{ownerId}` path segments.
pub(super) fn parse_owner(kind: &str, id: String) -> Result<MappingOwner, Error> {
    let kind = kind.parse::<OwnerKind>().map_err(ValidationError::from)?;

    Ok(MappingOwner::new(kind, id))
}

/// List the equipment mapped to a project or build, in insertion order
#[utoipa::path(
    get,
    path = "/api/mappings/{ownerKind}/{ownerId}",
    tag = MAPPING_TAG,
    params(
        ("ownerKind" = String, Path, description = "project or build"),
        ("ownerId" = String, Path, description = "Project or build ID")
    ),
    responses(
        (status = 200, description = "Mappings of the owner", body = Vec<Mapping>),
        (status = 400, description = "Unknown owner kind", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_mappings(
    State(state): State<AppState>,
    Path((owner_kind, owner_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let owner = parse_owner(&owner_kind, owner_id)?;

    let mappings = MappingService::new(&state.db).list_for_owner(&owner).await?;

    Ok((StatusCode::OK, Json(mappings)))
}

/// Map a piece of equipment to a project or build
///
/// Adding an existing mapping again is a no-op reported as `added: false`.
#[utoipa::path(
    post,
    path = "/api/mappings/{ownerKind}/{ownerId}",
    tag = MAPPING_TAG,
    params(
        ("ownerKind" = String, Path, description = "project or build"),
        ("ownerId" = String, Path, description = "Project or build ID")
    ),
    request_body = AddMappingDto,
    responses(
        (status = 200, description = "Whether a new mapping was created", body = MappingAddedDto),
        (status = 400, description = "Unknown owner kind or equipment", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_mapping(
    State(state): State<AppState>,
    Path((owner_kind, owner_id)): Path<(String, String)>,
    Json(dto): Json<AddMappingDto>,
) -> Result<impl IntoResponse, Error> {
    let owner = parse_owner(&owner_kind, owner_id)?;

    let added = MappingService::new(&state.db)
        .add(&owner, dto.equipment_type, &dto.equipment_id)
        .await?;

    Ok((StatusCode::OK, Json(MappingAddedDto { added })))
}

#[utoipa::path(
    delete,
    path = "/api/mappings/{ownerKind}/{ownerId}/{equipmentType}/{equipmentId}",
    tag = MAPPING_TAG,
    params(
        ("ownerKind" = String, Path, description = "project or build"),
        ("ownerId" = String, Path, description = "Project or build ID"),
        ("equipmentType" = String, Path, description = "lnbs, switches, motors, unicables or satellites"),
        ("equipmentId" = String, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Whether a mapping was removed", body = SuccessDto),
        (status = 400, description = "Unknown owner kind or equipment type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_mapping(
    State(state): State<AppState>,
    Path((owner_kind, owner_id, equipment_type, equipment_id)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<impl IntoResponse, Error> {
    let owner = parse_owner(&owner_kind, owner_id)?;
    let equipment_type = equipment_type
        .parse::<EquipmentType>()
        .map_err(ValidationError::from)?;

    let removed = MappingService::new(&state.db)
        .remove(&owner, equipment_type, &equipment_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: removed })))
}
