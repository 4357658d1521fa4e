use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::{
        equipment::{Switch, SwitchType},
        satellite::{CarrierFields, SatelliteFields, ServiceFields},
    },
    server::service::{satellite::SatelliteService, selection::EquipmentSelection},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{astra_2e, setup};

/// Expect deleting a satellite to leave no carriers or services behind
#[tokio::test]
async fn delete_removes_carriers_and_services() -> Result<(), TestError> {
    let test = setup().await?;
    let service = SatelliteService::new(&test.db);
    let other = service
        .create(SatelliteFields {
            name: "HOTBIRD".to_string(),
            carriers: vec![CarrierFields {
                name: "RAI".to_string(),
                services: vec![ServiceFields {
                    name: "RAI 1".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        })
        .await
        .unwrap();
    let astra = service.create(astra_2e()).await.unwrap();

    assert!(service.delete(&astra.id).await.unwrap());

    assert!(service.get(&astra.id).await.unwrap().is_none());
    assert_eq!(
        entity::prelude::SatelliteCarrier::find().count(&test.db).await?,
        1
    );
    assert_eq!(
        entity::prelude::CarrierService::find().count(&test.db).await?,
        1
    );
    let other = service.get(&other.id).await.unwrap().unwrap();
    assert_eq!(other.carriers[0].services[0].name, "RAI 1");

    Ok(())
}

/// Expect toggling Tone Burst, DiSEqC 1.0, DiSEqC 1.1 to keep the Tone Burst and the last DiSEqC
#[tokio::test]
async fn switch_selection_keeps_one_of_each_type() -> Result<(), TestError> {
    let switch = |id: &str, switch_type| Switch {
        id: id.to_string(),
        switch_type: Some(switch_type),
        ..Default::default()
    };
    let switches = vec![
        switch("a", SwitchType::ToneBurst),
        switch("b", SwitchType::Diseqc10),
        switch("c", SwitchType::Diseqc11),
    ];
    let mut selection = EquipmentSelection::default();

    selection.toggle_switch("a", &switches);
    selection.toggle_switch("b", &switches);
    selection.toggle_switch("c", &switches);
    assert_eq!(selection.switch_ids(), ["a", "c"]);

    selection.toggle_switch("c", &switches);
    assert_eq!(selection.switch_ids(), ["a"]);

    Ok(())
}

/// Expect a read racing an update to see one complete carrier set, never a mix of two
#[tokio::test]
async fn concurrent_get_sees_complete_carrier_set() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .with_satellite_tables()
        .with_project_tables()
        .with_file_database()
        .build()
        .await?;
    let service = SatelliteService::new(&test.db);
    let satellite = service.create(astra_2e()).await.unwrap();

    let carrier_set = |prefix: &str, count: usize| {
        let mut fields = astra_2e();
        fields.carriers = (1..=count)
            .map(|n| CarrierFields {
                name: format!("{}-{}", prefix, n),
                services: vec![ServiceFields {
                    name: format!("{}-{}-TV", prefix, n),
                    ..Default::default()
                }],
                ..Default::default()
            })
            .collect();
        fields
    };
    let sets = [carrier_set("EAST", 4), carrier_set("WEST", 6)];
    let names = |fields: &SatelliteFields| -> Vec<String> {
        fields.carriers.iter().map(|c| c.name.clone()).collect()
    };
    let original = names(&astra_2e());
    let east = names(&sets[0]);
    let west = names(&sets[1]);

    for round in 0..20 {
        let replacement = sets[round % 2].clone();
        let (updated, read) = tokio::join!(
            service.update(&satellite.id, replacement),
            service.get(&satellite.id)
        );
        assert!(updated.unwrap().is_some());

        let read = read.unwrap().unwrap();
        let read_names: Vec<String> = read.carriers.iter().map(|c| c.name.clone()).collect();
        assert!(
            read_names == original || read_names == east || read_names == west,
            "mixed carrier set: {:?}",
            read_names
        );
        for carrier in read.carriers.iter().filter(|_| read_names != original) {
            assert_eq!(carrier.services.len(), 1);
            assert_eq!(carrier.services[0].name, format!("{}-TV", carrier.name));
        }
    }

    let last = service.get(&satellite.id).await.unwrap().unwrap();
    let last_names: Vec<String> = last.carriers.iter().map(|c| c.name.clone()).collect();
    assert_eq!(last_names, west);

    Ok(())
}
