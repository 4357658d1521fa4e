use sdb_test_utils::prelude::*;
use serde_json::json;

use crate::{
    model::equipment::{Equipment, EquipmentFields, EquipmentKind},
    server::{
        error::{validation::ValidationError, Error},
        service::equipment::EquipmentService,
    },
};

mod exists_by_name;
mod update;

fn fields(kind: EquipmentKind, value: serde_json::Value) -> EquipmentFields {
    EquipmentFields::from_json(kind, value).unwrap()
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_equipment_tables()
        .with_satellite_tables()
        .with_project_tables()
        .build()
        .await
}
