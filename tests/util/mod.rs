//! Shared setup for integration tests.

use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::satellite::{CarrierFields, SatelliteFields, ServiceFields},
    server::model::app::AppState,
};

/// Test context with every table of the application.
pub async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_equipment_tables()
        .with_satellite_tables()
        .with_project_tables()
        .build()
        .await
}

pub fn state(test: &TestContext) -> AppState {
    test.to_app_state()
}

/// ASTRA 2E with a single carrier and service, as entered through the satellite form.
pub fn astra_2e() -> SatelliteFields {
    SatelliteFields {
        name: "ASTRA-2E".to_string(),
        position: "28.2E".to_string(),
        carriers: vec![CarrierFields {
            name: "BBC-MUX1".to_string(),
            frequency: "10773".to_string(),
            services: vec![ServiceFields {
                name: "BBC-ONE".to_string(),
                video_pid: "5500".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}
