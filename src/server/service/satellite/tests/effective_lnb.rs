use super::*;

/// Expect the first LNB in list order when the satellite stores none
#[tokio::test]
async fn falls_back_to_first_lnb() -> Result<(), TestError> {
    let test = setup().await?;
    let first = test.equipment().insert_lnb("First").await?;
    let second = test.equipment().insert_lnb("Second").await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let fallback = service.effective_lnb(&created.id).await.unwrap();
    assert_eq!(fallback.map(|lnb| lnb.id), Some(first.id));

    service
        .assign_equipment(
            &created.id,
            EquipmentAssignment {
                lnb_id: Some(second.id.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = service.effective_lnb(&created.id).await.unwrap();
    assert_eq!(stored.map(|lnb| lnb.id), Some(second.id));

    Ok(())
}

/// Expect NotFound for a missing satellite
#[tokio::test]
async fn fails_for_missing_satellite() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let result = service.effective_lnb("missing").await;

    assert!(matches!(result, Err(Error::NotFound { .. })));

    Ok(())
}
