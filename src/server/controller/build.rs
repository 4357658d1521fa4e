use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        project::{Build, CreateBuildDto, UpdateBuildDto},
    },
    server::{error::Error, model::app::AppState, service::build::BuildService},
};

pub static BUILD_TAG: &str = "build";

/// List the builds of a project, newest first
#[utoipa::path(
    get,
    path = "/api/projects/{id}/builds",
    tag = BUILD_TAG,
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Builds of the project", body = Vec<Build>),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_project_builds(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let builds = BuildService::new(&state.db)
        .list_for_project(&project_id)
        .await?;

    Ok((StatusCode::OK, Json(builds)))
}

#[utoipa::path(
    get,
    path = "/api/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = String, Path, description = "Build ID")),
    responses(
        (status = 200, description = "Build", body = Build),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_build(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let build = BuildService::new(&state.db)
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("Build", &id))?;

    Ok((StatusCode::OK, Json(build)))
}

#[utoipa::path(
    post,
    path = "/api/builds",
    tag = BUILD_TAG,
    request_body = CreateBuildDto,
    responses(
        (status = 201, description = "Created build", body = Build),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_build(
    State(state): State<AppState>,
    Json(dto): Json<CreateBuildDto>,
) -> Result<impl IntoResponse, Error> {
    let build = BuildService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(build)))
}

#[utoipa::path(
    put,
    path = "/api/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = String, Path, description = "Build ID")),
    request_body = UpdateBuildDto,
    responses(
        (status = 200, description = "Updated build", body = Build),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_build(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateBuildDto>,
) -> Result<impl IntoResponse, Error> {
    let build = BuildService::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or_else(|| Error::not_found("Build", &id))?;

    Ok((StatusCode::OK, Json(build)))
}

/// Delete a build together with its mappings
#[utoipa::path(
    delete,
    path = "/api/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = String, Path, description = "Build ID")),
    responses(
        (status = 200, description = "Build deleted", body = SuccessDto),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_build(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if !BuildService::new(&state.db).delete(&id).await? {
        return Err(Error::not_found("Build", id));
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
