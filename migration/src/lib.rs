pub use sea_orm_migration::prelude::*;

mod m20261017_000001_equipment_lnb;
mod m20261017_000002_equipment_switch;
mod m20261017_000003_equipment_motor;
mod m20261017_000004_equipment_unicable;
mod m20261017_000005_satellite;
mod m20261017_000006_satellite_carrier;
mod m20261017_000007_carrier_service;
mod m20261017_000008_project;
mod m20261017_000009_project_build;
mod m20261017_000010_equipment_mapping;
mod m20261017_000011_activity_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_equipment_lnb::Migration),
            Box::new(m20261017_000002_equipment_switch::Migration),
            Box::new(m20261017_000003_equipment_motor::Migration),
            Box::new(m20261017_000004_equipment_unicable::Migration),
            Box::new(m20261017_000005_satellite::Migration),
            Box::new(m20261017_000006_satellite_carrier::Migration),
            Box::new(m20261017_000007_carrier_service::Migration),
            Box::new(m20261017_000008_project::Migration),
            Box::new(m20261017_000009_project_build::Migration),
            Box::new(m20261017_000010_equipment_mapping::Migration),
            Box::new(m20261017_000011_activity_log::Migration),
        ]
    }
}
