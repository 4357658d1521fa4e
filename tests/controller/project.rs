use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        configuration::ImportProjectDto,
        project::{CreateBuildDto, CreateProjectDto},
    },
    server::controller::{
        build::{create_build, list_project_builds},
        project::{create_project, delete_project, import_project},
    },
};

use crate::util::{astra_2e, setup, state};

/// Expect 201 created, then 400 bad request for the same name in another case
#[tokio::test]
async fn rejects_duplicate_project_name() -> Result<(), TestError> {
    let test = setup().await?;
    let dto = |name: &str| {
        Json(CreateProjectDto {
            name: name.to_string(),
            ..Default::default()
        })
    };

    let first = create_project(State(state(&test)), dto("Rooftop")).await;
    let second = create_project(State(state(&test)), dto("ROOFTOP")).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expect 404 not found when creating a build for a missing project
#[tokio::test]
async fn build_requires_project() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_build(
        State(state(&test)),
        Json(CreateBuildDto {
            project_id: "missing".to_string(),
            name: "v1".to_string(),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect the builds of a deleted project to be gone with it
#[tokio::test]
async fn delete_project_removes_builds() -> Result<(), TestError> {
    let test = setup().await?;
    let project = test.project().insert_project("Rooftop").await?;
    test.project().insert_build(&project.id, "v1").await?;

    let deleted = delete_project(State(state(&test)), Path(project.id.clone())).await;
    let builds = list_project_builds(State(state(&test)), Path(project.id)).await;

    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        builds.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 201 created for a project imported from a parsed configuration
#[tokio::test]
async fn imports_project() -> Result<(), TestError> {
    let test = setup().await?;
    let mut dto = ImportProjectDto {
        name: "Imported".to_string(),
        ..Default::default()
    };
    dto.configuration.satellites.push(astra_2e());

    let result = import_project(State(state(&test)), Json(dto)).await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}
