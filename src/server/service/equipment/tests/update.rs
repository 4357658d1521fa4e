use super::*;

/// Expect patched fields to change and absent fields to be kept
#[tokio::test]
async fn merges_patch() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;

    let service = EquipmentService::new(&test.db);
    let result = service
        .update(
            EquipmentKind::Lnb,
            &lnb.id,
            fields(EquipmentKind::Lnb, json!({ "highFrequency": "10750" })),
        )
        .await;

    assert!(result.is_ok());
    let Some(Equipment::Lnb(updated)) = result.unwrap() else {
        panic!("expected an updated LNB");
    };
    assert_eq!(updated.high_frequency, "10750");
    assert_eq!(updated.low_frequency, lnb.low_frequency);
    assert_eq!(updated.name, "Universal");
    assert!(updated.updated_at > lnb.updated_at);

    Ok(())
}

/// Expect renaming an LNB to its own name in another case to succeed
#[tokio::test]
async fn allows_renaming_to_own_name() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;

    let service = EquipmentService::new(&test.db);
    let result = service
        .update(
            EquipmentKind::Lnb,
            &lnb.id,
            fields(EquipmentKind::Lnb, json!({ "name": "UNIVERSAL" })),
        )
        .await;

    assert!(matches!(result, Ok(Some(ref record)) if record.name() == "UNIVERSAL"));

    Ok(())
}

/// Expect Ok(None) for a missing record
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), TestError> {
    let test = setup().await?;

    let service = EquipmentService::new(&test.db);
    let result = service
        .update(
            EquipmentKind::Motor,
            "missing",
            fields(EquipmentKind::Motor, json!({ "position": "3" })),
        )
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect a patch of another kind to be rejected
#[tokio::test]
async fn rejects_mismatched_kind() -> Result<(), TestError> {
    let test = setup().await?;
    let motor = test.equipment().insert_motor("Positioner").await?;

    let service = EquipmentService::new(&test.db);
    let result = service
        .update(
            EquipmentKind::Motor,
            &motor.id,
            fields(EquipmentKind::Switch, json!({ "switchType": "Tone Burst" })),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::KindMismatch { .. }))
    ));

    Ok(())
}
