use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::api::DuplicateQuery,
    server::controller::equipment::{
        check_equipment_duplicate, create_equipment, delete_equipment, list_equipment,
        update_equipment,
    },
};
use serde_json::json;

use crate::util::{setup, state};

/// Expect 201 created for a new LNB
#[tokio::test]
async fn creates_lnb() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_equipment(
        State(state(&test)),
        Path("lnbs".to_string()),
        Json(json!({ "name": "Universal", "lowFrequency": "9750", "unknown": "dropped" })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 bad request for an unknown equipment type
#[tokio::test]
async fn rejects_unknown_type() -> Result<(), TestError> {
    let test = setup().await?;

    let result = list_equipment(State(state(&test)), Path("dishes".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 bad request for a duplicate LNB name
#[tokio::test]
async fn rejects_duplicate_lnb_name() -> Result<(), TestError> {
    let test = setup().await?;
    test.equipment().insert_lnb("Universal").await?;

    let result = create_equipment(
        State(state(&test)),
        Path("lnbs".to_string()),
        Json(json!({ "name": "UNIVERSAL" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 bad request for a port other than None on a non-DSCR unicable
#[tokio::test]
async fn rejects_port_without_dscr() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_equipment(
        State(state(&test)),
        Path("unicables".to_string()),
        Json(json!({ "unicableType": "DCSS", "port": "A" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 not found when updating a missing record
#[tokio::test]
async fn update_missing_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = update_equipment(
        State(state(&test)),
        Path(("motors".to_string(), "missing".to_string())),
        Json(json!({ "position": "12" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 on delete, then 404 for the same record
#[tokio::test]
async fn deletes_record_once() -> Result<(), TestError> {
    let test = setup().await?;
    let motor = test.equipment().insert_motor("Motor-1").await?;

    let first = delete_equipment(
        State(state(&test)),
        Path(("motors".to_string(), motor.id.clone())),
    )
    .await;
    let second = delete_equipment(State(state(&test)), Path(("motors".to_string(), motor.id))).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for a duplicate-name check
#[tokio::test]
async fn checks_duplicate_name() -> Result<(), TestError> {
    let test = setup().await?;
    test.equipment().insert_lnb("Universal").await?;

    let result = check_equipment_duplicate(
        State(state(&test)),
        Path("lnbs".to_string()),
        Query(DuplicateQuery {
            name: "universal".to_string(),
            exclude_id: None,
        }),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
