use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use base64::Engine;

use crate::{
    model::{
        api::ErrorDto,
        configuration::{GenerateBinDto, ImportBinDto, ParsedConfiguration},
        mapping::MappingOwner,
    },
    server::{
        codec::CodecStatus,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{export::ExportService, import::ImportService},
    },
};

pub static BIN_TAG: &str = "bin";

/// A generated SDB document.
#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct XmlDocumentDto {
    pub xml: String,
}

async fn generate_xml(state: &AppState, owner: MappingOwner) -> Result<impl IntoResponse, Error> {
    let xml = ExportService::new(&state.db, &state.codec)
        .generate_xml(&owner)
        .await?;

    Ok((StatusCode::OK, Json(XmlDocumentDto { xml })))
}

/// Generate the SDB document of a project
#[utoipa::path(
    get,
    path = "/api/project/{id}/xml",
    tag = BIN_TAG,
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Generated document", body = XmlDocumentDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_xml(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    generate_xml(&state, MappingOwner::Project(id)).await
}

/// Generate the SDB document of a build and cache it on the build
#[utoipa::path(
    get,
    path = "/api/build/{id}/xml",
    tag = BIN_TAG,
    params(("id" = String, Path, description = "Build ID")),
    responses(
        (status = 200, description = "Generated document", body = XmlDocumentDto),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_build_xml(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    generate_xml(&state, MappingOwner::Build(id)).await
}

/// Generate the `.bin` file of a project or build
#[utoipa::path(
    post,
    path = "/api/bin/generate",
    tag = BIN_TAG,
    request_body = GenerateBinDto,
    responses(
        (status = 200, description = "Generated file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 404, description = "Project or build not found", body = ErrorDto),
        (status = 502, description = "Generator failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_bin(
    State(state): State<AppState>,
    Json(dto): Json<GenerateBinDto>,
) -> Result<impl IntoResponse, Error> {
    let owner = MappingOwner::new(dto.owner_kind, dto.owner_id);

    let bin = ExportService::new(&state.db, &state.codec)
        .generate_bin(&owner)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.bin\"", owner.id()),
            ),
        ],
        bin,
    ))
}

/// Parse a base64 encoded `.bin` file into a configuration without storing it
#[utoipa::path(
    post,
    path = "/api/bin/import",
    tag = BIN_TAG,
    request_body = ImportBinDto,
    responses(
        (status = 200, description = "Parsed configuration", body = ParsedConfiguration),
        (status = 400, description = "Invalid base64", body = ErrorDto),
        (status = 422, description = "Parser output is not a readable SDB document", body = ErrorDto),
        (status = 502, description = "Parser failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_bin(
    State(state): State<AppState>,
    Json(dto): Json<ImportBinDto>,
) -> Result<impl IntoResponse, Error> {
    let bin = base64::engine::general_purpose::STANDARD
        .decode(dto.bin_data.trim())
        .map_err(|e| ValidationError::InvalidBody(format!("binData is not valid base64: {}", e)))?;

    let configuration = ImportService::new(&state.db, &state.codec)
        .parse_bin(&bin)
        .await?;

    Ok((StatusCode::OK, Json(configuration)))
}

/// Report which codec executables are configured and present
#[utoipa::path(
    get,
    path = "/api/bin/status",
    tag = BIN_TAG,
    responses(
        (status = 200, description = "Codec executable availability", body = CodecStatus)
    ),
)]
pub async fn codec_status(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.codec.check_executables().await))
}
