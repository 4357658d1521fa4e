use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DuplicateQuery, ErrorDto, ExistsDto, SuccessDto},
        configuration::ImportProjectDto,
        project::{CreateProjectDto, Project, UpdateProjectDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{import::ImportService, project::ProjectService},
    },
};

pub static PROJECT_TAG: &str = "project";

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "Projects", body = Vec<Project>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let projects = ProjectService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(projects)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db)
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("Project", &id))?;

    Ok((StatusCode::OK, Json(project)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Created project", body = Project),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(dto): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Rename a project or change its description
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project ID")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db)
        .update(&id, dto)
        .await?
        .ok_or_else(|| Error::not_found("Project", &id))?;

    Ok((StatusCode::OK, Json(project)))
}

/// Delete a project with its builds and every mapping of both
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = SuccessDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if !ProjectService::new(&state.db).delete(&id).await? {
        return Err(Error::not_found("Project", id));
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

#[utoipa::path(
    get,
    path = "/api/projects/check-duplicate",
    tag = PROJECT_TAG,
    params(DuplicateQuery),
    responses(
        (status = 200, description = "Whether the name is taken", body = ExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_project_duplicate(
    State(state): State<AppState>,
    Query(query): Query<DuplicateQuery>,
) -> Result<impl IntoResponse, Error> {
    let exists = ProjectService::new(&state.db)
        .exists_by_name(&query.name, query.exclude_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// Create a project from a parsed SDB configuration
///
/// Every record in the configuration is stored and mapped to the new project.
#[utoipa::path(
    post,
    path = "/api/projects/import",
    tag = PROJECT_TAG,
    request_body = ImportProjectDto,
    responses(
        (status = 201, description = "Created project", body = Project),
        (status = 400, description = "Duplicate project name or invalid record", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_project(
    State(state): State<AppState>,
    Json(dto): Json<ImportProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project = ImportService::new(&state.db, &state.codec)
        .create_project(dto)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}
