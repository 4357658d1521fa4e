use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        activity::{Activity, RecordActivityDto},
        api::{CleanupQuery, LimitQuery},
    },
    server::controller::activity::{cleanup_activities, list_activities, record_activity},
};

use crate::util::{setup, state};

/// Expect a recorded entry to be listed
#[tokio::test]
async fn records_and_lists_activity() -> Result<(), TestError> {
    let test = setup().await?;

    let recorded = record_activity(
        State(state(&test)),
        Json(RecordActivityDto {
            username: "installer".to_string(),
            action: "Created project".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(recorded.status(), StatusCode::OK);

    let resp = list_activities(State(state(&test)), Query(LimitQuery { limit: None }))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let activities: Vec<Activity> = serde_json::from_slice(&body).unwrap();

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].action, "Created project");

    Ok(())
}

/// Expect cleanup with the default retention to keep fresh entries
#[tokio::test]
async fn cleanup_keeps_recent_entries() -> Result<(), TestError> {
    let test = setup().await?;
    record_activity(
        State(state(&test)),
        Json(RecordActivityDto {
            username: "installer".to_string(),
            action: "Deleted build".to_string(),
            ..Default::default()
        }),
    )
    .await;

    let result = cleanup_activities(State(state(&test)), Query(CleanupQuery { days_old: None }))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(result.into_body(), usize::MAX).await.unwrap();
    let deleted: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(deleted["deleted"], 0);

    Ok(())
}
