use super::*;

/// Expect the carrier list to be fully replaced
#[tokio::test]
async fn replaces_carriers() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let result = service
        .update(
            &created.id,
            SatelliteFields {
                carriers: vec![carrier("MUX-A", &["A1"]), carrier("MUX-B", &["B1", "B2"])],
                ..astra()
            },
        )
        .await;

    assert!(result.is_ok());
    let stored = service.get(&created.id).await.unwrap().unwrap();
    let carriers: Vec<_> = stored.carriers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(carriers, vec!["MUX-A", "MUX-B"]);
    assert_eq!(stored.carriers[1].services.len(), 2);
    assert_eq!(stored.created_at, created.created_at);

    Ok(())
}

/// Expect ids of replaced carriers and services to be kept when resubmitted
#[tokio::test]
async fn keeps_resubmitted_ids() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let mut fields = SatelliteFields::from(&created);
    fields.carriers[0].frequency = "10788".to_string();
    fields.carriers.push(CarrierFields {
        id: Some("foreign-id".to_string()),
        ..carrier("NEW", &[])
    });
    let updated = service.update(&created.id, fields).await.unwrap().unwrap();

    assert_eq!(updated.carriers[0].id, created.carriers[0].id);
    assert_eq!(
        updated.carriers[0].services[0].id,
        created.carriers[0].services[0].id
    );
    assert_eq!(updated.carriers[0].frequency, "10788");
    assert_ne!(updated.carriers[1].id, "foreign-id");

    Ok(())
}

/// Expect Ok(None) for a missing satellite
#[tokio::test]
async fn returns_none_for_missing_satellite() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let result = service.update("missing", astra()).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect a failed update to leave the stored carriers untouched
#[tokio::test]
async fn rolls_back_on_validation_error() -> Result<(), TestError> {
    let test = setup().await?;
    test.satellite().insert_satellite("HOTBIRD").await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let result = service
        .update(
            &created.id,
            SatelliteFields {
                name: "Hotbird".to_string(),
                carriers: vec![],
                ..astra()
            },
        )
        .await;

    assert!(result.is_err());
    let stored = service.get(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.carriers, created.carriers);

    Ok(())
}
