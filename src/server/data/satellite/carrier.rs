use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::satellite::Carrier,
    server::model::db::{store_optional, CarrierModel},
};

pub struct CarrierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarrierRepository<'a, C> {
    /// Creates a new instance of [`CarrierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Carriers of the given satellites, ordered by satellite then insertion position
    pub async fn list_for_satellites(
        &self,
        satellite_ids: &[String],
    ) -> Result<Vec<CarrierModel>, DbErr> {
        entity::prelude::SatelliteCarrier::find()
            .filter(
                entity::satellite_carrier::Column::SatelliteId.is_in(satellite_ids.iter().cloned()),
            )
            .order_by_asc(entity::satellite_carrier::Column::SatelliteId)
            .order_by_asc(entity::satellite_carrier::Column::Position)
            .all(self.db)
            .await
    }

    /// Inserts a carrier at `position` within its satellite; `carrier.services` is ignored
    pub async fn create(
        &self,
        satellite_id: &str,
        position: i32,
        carrier: &Carrier,
        created_at: chrono::NaiveDateTime,
    ) -> Result<CarrierModel, DbErr> {
        let carrier = entity::satellite_carrier::ActiveModel {
            id: ActiveValue::Set(carrier.id.clone()),
            satellite_id: ActiveValue::Set(satellite_id.to_string()),
            position: ActiveValue::Set(position),
            name: ActiveValue::Set(carrier.name.clone()),
            frequency: ActiveValue::Set(carrier.frequency.clone()),
            polarization: ActiveValue::Set(store_optional(carrier.polarization)),
            symbol_rate: ActiveValue::Set(carrier.symbol_rate.clone()),
            fec: ActiveValue::Set(carrier.fec.clone()),
            fec_mode: ActiveValue::Set(carrier.fec_mode.clone()),
            factory_default: ActiveValue::Set(carrier.factory_default),
            created_at: ActiveValue::Set(created_at),
        };

        carrier.insert(self.db).await
    }

    /// Deletes every carrier of a satellite
    ///
    /// Services must be removed first, they reference their carrier.
    pub async fn delete_for_satellite(&self, satellite_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::SatelliteCarrier::delete_many()
            .filter(entity::satellite_carrier::Column::SatelliteId.eq(satellite_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sdb_test_utils::prelude::*;

    use crate::server::data::satellite::carrier::CarrierRepository;

    /// Expect carriers to come back in insertion position order per satellite
    #[tokio::test]
    async fn lists_by_position() -> Result<(), TestError> {
        let test = TestBuilder::new().with_satellite_tables().build().await?;
        let satellite = test.satellite().insert_satellite("HOTBIRD").await?;
        test.satellite()
            .insert_carrier(&satellite.id, 1, "Second")
            .await?;
        test.satellite()
            .insert_carrier(&satellite.id, 0, "First")
            .await?;

        let repository = CarrierRepository::new(&test.db);
        let carriers = repository
            .list_for_satellites(&[satellite.id.clone()])
            .await?;

        let names: Vec<_> = carriers.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["First", "Second"]);

        Ok(())
    }

    /// Expect only the given satellite's carriers to be deleted
    #[tokio::test]
    async fn deletes_only_owned_carriers() -> Result<(), TestError> {
        let test = TestBuilder::new().with_satellite_tables().build().await?;
        let astra = test.satellite().insert_satellite("ASTRA").await?;
        let hotbird = test.satellite().insert_satellite("HOTBIRD").await?;
        test.satellite().insert_carrier(&astra.id, 0, "A").await?;
        test.satellite().insert_carrier(&hotbird.id, 0, "H").await?;

        let repository = CarrierRepository::new(&test.db);
        let result = repository.delete_for_satellite(&astra.id).await?;

        assert_eq!(result.rows_affected, 1);
        let remaining = repository
            .list_for_satellites(&[astra.id.clone(), hotbird.id.clone()])
            .await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].satellite_id, hotbird.id);

        Ok(())
    }
}
