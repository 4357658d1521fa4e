use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{Activity, RecordActivityDto},
        api::{CleanupQuery, DeletedDto, ErrorDto, LimitQuery, SuccessDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::activity::{ActivityService, DEFAULT_ACTIVITY_LIMIT},
    },
};

pub static ACTIVITY_TAG: &str = "activity";

const DEFAULT_RETENTION_DAYS: u32 = 30;

/// List activity entries, newest first
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Activity entries", body = Vec<Activity>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, Error> {
    let activities = ActivityService::new(&state.db)
        .list(query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(activities)))
}

#[utoipa::path(
    get,
    path = "/api/activities/project/{id}",
    tag = ACTIVITY_TAG,
    params(("id" = String, Path, description = "Project ID"), LimitQuery),
    responses(
        (status = 200, description = "Activity entries of the project", body = Vec<Activity>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_project_activities(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, Error> {
    let activities = ActivityService::new(&state.db)
        .list_for_project(&project_id, query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(activities)))
}

/// Record an activity entry
///
/// Recording never fails the request; `success` is false when the entry could not be stored.
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    request_body = RecordActivityDto,
    responses(
        (status = 200, description = "Whether the entry was stored", body = SuccessDto)
    ),
)]
pub async fn record_activity(
    State(state): State<AppState>,
    Json(dto): Json<RecordActivityDto>,
) -> impl IntoResponse {
    let recorded = ActivityService::new(&state.db).record(dto).await;

    (
        StatusCode::OK,
        Json(SuccessDto {
            success: recorded.is_some(),
        }),
    )
}

/// Delete activity entries older than `daysOld` days
#[utoipa::path(
    delete,
    path = "/api/activities/cleanup",
    tag = ACTIVITY_TAG,
    params(CleanupQuery),
    responses(
        (status = 200, description = "Number of deleted entries", body = DeletedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cleanup_activities(
    State(state): State<AppState>,
    Query(query): Query<CleanupQuery>,
) -> Result<impl IntoResponse, Error> {
    let deleted = ActivityService::new(&state.db)
        .cleanup(query.days_old.unwrap_or(DEFAULT_RETENTION_DAYS))
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
