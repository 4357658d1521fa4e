use sdb_test_utils::prelude::*;

use crate::{
    model::satellite::{CarrierFields, EquipmentAssignment, SatelliteFields, ServiceFields},
    server::{
        error::{validation::ValidationError, Error},
        service::satellite::SatelliteService,
    },
};

mod assign_equipment;
mod delete;
mod effective_lnb;
mod update;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_equipment_tables()
        .with_satellite_tables()
        .with_project_tables()
        .build()
        .await
}

fn astra() -> SatelliteFields {
    SatelliteFields {
        name: "ASTRA-2E".to_string(),
        position: "28.2E".to_string(),
        carriers: vec![CarrierFields {
            name: "BBC-MUX1".to_string(),
            frequency: "10773".to_string(),
            services: vec![
                ServiceFields {
                    name: "BBC-ONE".to_string(),
                    video_pid: "5500".to_string(),
                    ..Default::default()
                },
                ServiceFields {
                    name: "BBC-TWO".to_string(),
                    video_pid: "5600".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn carrier(name: &str, services: &[&str]) -> CarrierFields {
    CarrierFields {
        name: name.to_string(),
        services: services
            .iter()
            .map(|name| ServiceFields {
                name: name.to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
