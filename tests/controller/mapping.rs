use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::mapping::{AddMappingDto, EquipmentType, MappingAddedDto},
    server::controller::mapping::{add_mapping, list_mappings, remove_mapping},
};

use crate::util::{setup, state};

async fn added(resp: axum::response::Response) -> bool {
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: MappingAddedDto = serde_json::from_slice(&body).unwrap();
    dto.added
}

/// Expect `added: true` then `added: false` for the same mapping
#[tokio::test]
async fn second_add_is_noop() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;
    let project = test.project().insert_project("Rooftop").await?;
    let path = || Path(("project".to_string(), project.id.clone()));
    let dto = || {
        Json(AddMappingDto {
            equipment_type: EquipmentType::Lnbs,
            equipment_id: lnb.id.clone(),
        })
    };

    let first = add_mapping(State(state(&test)), path(), dto()).await.unwrap();
    let second = add_mapping(State(state(&test)), path(), dto()).await.unwrap();

    assert!(added(first.into_response()).await);
    assert!(!added(second.into_response()).await);

    Ok(())
}

/// Expect 400 bad request when mapping equipment that does not exist
#[tokio::test]
async fn rejects_unknown_equipment() -> Result<(), TestError> {
    let test = setup().await?;
    let project = test.project().insert_project("Rooftop").await?;

    let result = add_mapping(
        State(state(&test)),
        Path(("project".to_string(), project.id)),
        Json(AddMappingDto {
            equipment_type: EquipmentType::Satellites,
            equipment_id: "missing".to_string(),
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expect 404 not found when listing mappings of a missing build
#[tokio::test]
async fn missing_owner_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = list_mappings(
        State(state(&test)),
        Path(("build".to_string(), "missing".to_string())),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 400 bad request for an unknown owner kind
#[tokio::test]
async fn rejects_unknown_owner_kind() -> Result<(), TestError> {
    let test = setup().await?;

    let result = remove_mapping(
        State(state(&test)),
        Path((
            "folder".to_string(),
            "id".to_string(),
            "lnbs".to_string(),
            "id".to_string(),
        )),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
