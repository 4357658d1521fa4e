use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        equipment::{Equipment, EquipmentFields, LnbFields},
        mapping::{EquipmentType, MappingOwner},
        project::CreateProjectDto,
    },
    server::{
        codec::ExternalCodec,
        sdb,
        service::{
            equipment::EquipmentService, export::ExportService, import::ImportService,
            mapping::MappingService, project::ProjectService, satellite::SatelliteService,
        },
    },
};

use crate::util::{astra_2e, setup};

fn project(name: &str) -> CreateProjectDto {
    CreateProjectDto {
        name: name.to_string(),
        description: String::new(),
        created_by: "installer".to_string(),
    }
}

/// Expect a satellite and LNB created through the services to survive serialize then deserialize
#[tokio::test]
async fn astra_2e_survives_round_trip() -> Result<(), TestError> {
    let test = setup().await?;
    let codec = ExternalCodec::default();

    let lnb = EquipmentService::new(&test.db)
        .create(EquipmentFields::Lnb(LnbFields {
            name: Some("Universal".to_string()),
            low_frequency: Some("9750".to_string()),
            high_frequency: Some("10600".to_string()),
            lo1_high: Some("10600".to_string()),
            lo1_low: Some("9750".to_string()),
            band_type: Some("Ku".to_string()),
            power_control: Some("13/18V".to_string()),
            v_control: Some("On".to_string()),
            khz_option: Some("22kHz".to_string()),
        }))
        .await
        .unwrap();
    let Equipment::Lnb(lnb) = lnb else {
        panic!("expected an LNB");
    };
    let satellite = SatelliteService::new(&test.db)
        .create(astra_2e())
        .await
        .unwrap();

    let project = ProjectService::new(&test.db)
        .create(project("Rooftop"))
        .await
        .unwrap();
    let owner = MappingOwner::Project(project.id);
    let mappings = MappingService::new(&test.db);
    mappings.add(&owner, EquipmentType::Lnbs, &lnb.id).await.unwrap();
    mappings
        .add(&owner, EquipmentType::Satellites, &satellite.id)
        .await
        .unwrap();

    let xml = ExportService::new(&test.db, &codec)
        .generate_xml(&owner)
        .await
        .unwrap();
    let parsed = sdb::deserialize(&xml).unwrap();

    assert_eq!(parsed.name, "Rooftop");
    assert_eq!(parsed.lnbs, vec![LnbFields::from(&lnb)]);
    assert_eq!(parsed.satellites, vec![astra_2e()]);

    Ok(())
}

/// Expect an exported project imported under a new name to export the same document body
#[tokio::test]
async fn imported_project_exports_same_records() -> Result<(), TestError> {
    let test = setup().await?;
    let codec = ExternalCodec::default();

    let satellite = SatelliteService::new(&test.db)
        .create(astra_2e())
        .await
        .unwrap();
    let switch = test.equipment().insert_switch("Switch-1", "DiSEqC 1.0").await?;
    let original = ProjectService::new(&test.db)
        .create(project("Rooftop"))
        .await
        .unwrap();
    let owner = MappingOwner::Project(original.id);
    let mappings = MappingService::new(&test.db);
    mappings
        .add(&owner, EquipmentType::Switches, &switch.id)
        .await
        .unwrap();
    mappings
        .add(&owner, EquipmentType::Satellites, &satellite.id)
        .await
        .unwrap();

    let export = ExportService::new(&test.db, &codec);
    let xml = export.generate_xml(&owner).await.unwrap();

    let import = ImportService::new(&test.db, &codec);
    let mut configuration = import.parse_xml(&xml).unwrap();
    configuration.name = "Rooftop copy".to_string();
    let copy = import
        .create_project(sdb_tool::model::configuration::ImportProjectDto {
            name: String::new(),
            description: String::new(),
            created_by: "installer".to_string(),
            configuration,
        })
        .await
        .unwrap();

    let copied = sdb::deserialize(
        &export
            .generate_xml(&MappingOwner::Project(copy.id))
            .await
            .unwrap(),
    )
    .unwrap();
    let original = sdb::deserialize(&xml).unwrap();

    assert_eq!(copied.name, "Rooftop copy");
    assert_eq!(copied.switches, original.switches);
    assert_eq!(copied.satellites[0].name, "ASTRA-2E (2)");
    assert_eq!(copied.satellites[0].carriers, original.satellites[0].carriers);

    Ok(())
}
