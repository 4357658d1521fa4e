use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        configuration::{GenerateBinDto, ImportBinDto},
        mapping::OwnerKind,
    },
    server::controller::bin::{
        generate_bin, get_build_xml, get_project_xml, import_bin, XmlDocumentDto,
    },
};

use crate::util::{setup, state};

/// Expect 200 with an SDB document named after the project
#[tokio::test]
async fn generates_project_xml() -> Result<(), TestError> {
    let test = setup().await?;
    let project = test.project().insert_project("Rooftop").await?;

    let result = get_project_xml(State(state(&test)), Path(project.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: XmlDocumentDto = serde_json::from_slice(&body).unwrap();
    assert!(dto.xml.contains("<projname>Rooftop</projname>"));

    Ok(())
}

/// Expect 404 not found for the document of a missing build
#[tokio::test]
async fn missing_build_xml_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_build_xml(State(state(&test)), Path("missing".to_string())).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 502 bad gateway when no generator executable is configured
#[tokio::test]
async fn generate_without_codec_is_bad_gateway() -> Result<(), TestError> {
    let test = setup().await?;
    let project = test.project().insert_project("Rooftop").await?;

    let result = generate_bin(
        State(state(&test)),
        Json(GenerateBinDto {
            owner_kind: OwnerKind::Project,
            owner_id: project.id,
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_GATEWAY
    );

    Ok(())
}

/// Expect 400 bad request for binData that is not base64
#[tokio::test]
async fn rejects_invalid_base64() -> Result<(), TestError> {
    let test = setup().await?;

    let result = import_bin(
        State(state(&test)),
        Json(ImportBinDto {
            bin_data: "not base64!".to_string(),
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
