use super::*;

/// Expect true right after create and false after delete
#[tokio::test]
async fn tracks_create_and_delete() -> Result<(), TestError> {
    let test = setup().await?;

    let service = EquipmentService::new(&test.db);
    let created = service
        .create(fields(EquipmentKind::Lnb, json!({ "name": "Quad" })))
        .await
        .unwrap();

    assert!(service
        .exists_by_name(EquipmentKind::Lnb, "quad", None)
        .await
        .unwrap());
    assert!(!service
        .exists_by_name(EquipmentKind::Lnb, "quad", Some(created.id()))
        .await
        .unwrap());

    service
        .delete(EquipmentKind::Lnb, created.id())
        .await
        .unwrap();

    assert!(!service
        .exists_by_name(EquipmentKind::Lnb, "Quad", None)
        .await
        .unwrap());

    Ok(())
}

/// Expect kinds identified by type to never report duplicates
#[tokio::test]
async fn ignores_unnamed_kinds() -> Result<(), TestError> {
    let test = setup().await?;
    test.equipment().insert_switch("SW", "Tone Burst").await?;

    let service = EquipmentService::new(&test.db);
    let exists = service
        .exists_by_name(EquipmentKind::Switch, "SW", None)
        .await
        .unwrap();

    assert!(!exists);

    Ok(())
}
