use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        equipment::{EquipmentFields, EquipmentKind, LnbFields},
        mapping::{EquipmentType, MappingOwner},
    },
    server::service::{equipment::EquipmentService, mapping::MappingService},
};

use crate::util::setup;

/// Expect a created LNB's name to be taken until the LNB is deleted
#[tokio::test]
async fn name_is_released_on_delete() -> Result<(), TestError> {
    let test = setup().await?;
    let service = EquipmentService::new(&test.db);

    let lnb = service
        .create(EquipmentFields::Lnb(LnbFields {
            name: Some("Universal".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert!(service
        .exists_by_name(EquipmentKind::Lnb, "universal", None)
        .await
        .unwrap());

    assert!(service.delete(EquipmentKind::Lnb, lnb.id()).await.unwrap());
    assert!(!service
        .exists_by_name(EquipmentKind::Lnb, "Universal", None)
        .await
        .unwrap());

    Ok(())
}

/// Expect deleting a switch to remove its mappings from every project and build
#[tokio::test]
async fn delete_removes_mappings_of_every_owner() -> Result<(), TestError> {
    let test = setup().await?;
    let switch = test.equipment().insert_switch("Switch-1", "DiSEqC 1.0").await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;
    let project = test.project().insert_project("Rooftop").await?;
    let build = test.project().insert_build(&project.id, "v1").await?;

    let mappings = MappingService::new(&test.db);
    let project_owner = MappingOwner::Project(project.id.clone());
    let build_owner = MappingOwner::Build(build.id.clone());
    for owner in [&project_owner, &build_owner] {
        mappings
            .add(owner, EquipmentType::Switches, &switch.id)
            .await
            .unwrap();
        mappings.add(owner, EquipmentType::Lnbs, &lnb.id).await.unwrap();
    }

    EquipmentService::new(&test.db)
        .delete(EquipmentKind::Switch, &switch.id)
        .await
        .unwrap();

    for owner in [&project_owner, &build_owner] {
        let remaining = mappings.list_for_owner(owner).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].equipment_type, EquipmentType::Lnbs);
    }

    Ok(())
}

/// Expect adding the same mapping twice to report one addition and store one row
#[tokio::test]
async fn mapping_add_is_idempotent() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;
    let project = test.project().insert_project("Rooftop").await?;
    let owner = MappingOwner::Project(project.id);
    let mappings = MappingService::new(&test.db);

    let first = mappings.add(&owner, EquipmentType::Lnbs, &lnb.id).await.unwrap();
    let second = mappings.add(&owner, EquipmentType::Lnbs, &lnb.id).await.unwrap();

    assert!(first);
    assert!(!second);
    let listed = mappings.list_for_owner(&owner).await.unwrap();
    assert_eq!(
        listed
            .iter()
            .filter(|m| m.equipment_type == EquipmentType::Lnbs && m.equipment_id == lnb.id)
            .count(),
        1
    );

    Ok(())
}
