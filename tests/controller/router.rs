use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use sdb_test_utils::prelude::*;
use sdb_tool::server::router::routes;
use tower::ServiceExt;

use crate::util::{setup, state};

async fn get(test: &TestContext, uri: &str) -> StatusCode {
    let app = routes().with_state(state(test));

    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

/// Expect static segments like `check-duplicate` to win over `{id}`
#[tokio::test]
async fn routes_static_segments_first() -> Result<(), TestError> {
    let test = setup().await?;
    test.satellite().insert_satellite("ASTRA-2E").await?;

    assert_eq!(
        get(&test, "/api/satellites/check-duplicate?name=astra-2e").await,
        StatusCode::OK
    );
    assert_eq!(
        get(&test, "/api/equipment/lnbs/check-duplicate?name=x&excludeId=y").await,
        StatusCode::OK
    );
    assert_eq!(get(&test, "/api/projects/check-duplicate?name=x").await, StatusCode::OK);

    Ok(())
}

/// Expect JSON 404 bodies for missing records through the router
#[tokio::test]
async fn routes_missing_records_to_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    assert_eq!(get(&test, "/api/satellites/missing").await, StatusCode::NOT_FOUND);
    assert_eq!(get(&test, "/api/builds/missing").await, StatusCode::NOT_FOUND);
    assert_eq!(get(&test, "/api/project/missing/xml").await, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = setup().await?;

    assert_eq!(get(&test, "/api/docs/openapi.json").await, StatusCode::OK);

    Ok(())
}
