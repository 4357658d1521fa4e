use super::*;

/// Expect a valid assignment to be stored on the satellite
#[tokio::test]
async fn stores_assignment() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;
    let tone_burst = test.equipment().insert_switch("TB", "Tone Burst").await?;
    let diseqc = test.equipment().insert_switch("D", "DiSEqC 1.1").await?;
    let motor = test.equipment().insert_motor("Positioner").await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let result = service
        .assign_equipment(
            &created.id,
            EquipmentAssignment {
                lnb_id: Some(lnb.id.clone()),
                switch_ids: vec![tone_burst.id.clone(), diseqc.id.clone()],
                motor_id: Some(motor.id.clone()),
                unicable_id: None,
            },
        )
        .await;

    assert!(result.is_ok());
    let satellite = result.unwrap().unwrap();
    assert_eq!(satellite.mapped_lnb, Some(lnb.id));
    assert_eq!(satellite.mapped_switch, vec![tone_burst.id, diseqc.id]);
    assert_eq!(satellite.mapped_motor, Some(motor.id));
    assert_eq!(satellite.carriers.len(), 1);

    Ok(())
}

/// Expect two DiSEqC switches to be rejected
#[tokio::test]
async fn rejects_two_diseqc_switches() -> Result<(), TestError> {
    let test = setup().await?;
    let first = test.equipment().insert_switch("D1", "DiSEqC 1.0").await?;
    let second = test.equipment().insert_switch("D2", "DiSEqC 1.1").await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();

    let result = service
        .assign_equipment(
            &created.id,
            EquipmentAssignment {
                switch_ids: vec![first.id, second.id],
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::SwitchCombination))
    ));

    Ok(())
}

/// Expect Ok(None) for a missing satellite
#[tokio::test]
async fn returns_none_for_missing_satellite() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let result = service
        .assign_equipment("missing", EquipmentAssignment::default())
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
