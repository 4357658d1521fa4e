//! Satellite, carrier and service row insertion.
//!
//! Carriers and services reference their parents by foreign key, insert parents first.

use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CarrierModel, SatelliteModel, ServiceModel},
    TestContext,
};

impl TestContext {
    pub fn satellite<'a>(&'a self) -> SatelliteFixtures<'a> {
        SatelliteFixtures { setup: self }
    }
}

pub struct SatelliteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SatelliteFixtures<'a> {
    pub async fn insert_satellite(&self, name: &str) -> Result<SatelliteModel, TestError> {
        Ok(factory::satellite_model(name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a carrier at `position` within the satellite.
    ///
    /// # Returns
    /// - `Ok(CarrierModel)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the satellite does not exist
    pub async fn insert_carrier(
        &self,
        satellite_id: &str,
        position: i32,
        name: &str,
    ) -> Result<CarrierModel, TestError> {
        Ok(factory::carrier_model(satellite_id, position, name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a service at `position` within the carrier.
    pub async fn insert_service(
        &self,
        carrier_id: &str,
        position: i32,
        name: &str,
    ) -> Result<ServiceModel, TestError> {
        Ok(factory::service_model(carrier_id, position, name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }
}
