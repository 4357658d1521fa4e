use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::satellite::Service, server::model::db::ServiceModel};

pub struct ServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServiceRepository<'a, C> {
    /// Creates a new instance of [`ServiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Services of the given carriers, ordered by carrier then insertion position
    pub async fn list_for_carriers(
        &self,
        carrier_ids: &[String],
    ) -> Result<Vec<ServiceModel>, DbErr> {
        entity::prelude::CarrierService::find()
            .filter(entity::carrier_service::Column::CarrierId.is_in(carrier_ids.iter().cloned()))
            .order_by_asc(entity::carrier_service::Column::CarrierId)
            .order_by_asc(entity::carrier_service::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        carrier_id: &str,
        position: i32,
        service: &Service,
        created_at: chrono::NaiveDateTime,
    ) -> Result<ServiceModel, DbErr> {
        let service = entity::carrier_service::ActiveModel {
            id: ActiveValue::Set(service.id.clone()),
            carrier_id: ActiveValue::Set(carrier_id.to_string()),
            position: ActiveValue::Set(position),
            name: ActiveValue::Set(service.name.clone()),
            frequency: ActiveValue::Set(service.frequency.clone()),
            video_pid: ActiveValue::Set(service.video_pid.clone()),
            audio_pid: ActiveValue::Set(service.audio_pid.clone()),
            pcr_pid: ActiveValue::Set(service.pcr_pid.clone()),
            program_number: ActiveValue::Set(service.program_number.clone()),
            fav_group: ActiveValue::Set(service.fav_group.clone()),
            factory_default: ActiveValue::Set(service.factory_default),
            preference: ActiveValue::Set(service.preference.clone()),
            scramble: ActiveValue::Set(service.scramble),
            created_at: ActiveValue::Set(created_at),
        };

        service.insert(self.db).await
    }

    pub async fn delete_for_carriers(&self, carrier_ids: &[String]) -> Result<DeleteResult, DbErr> {
        entity::prelude::CarrierService::delete_many()
            .filter(entity::carrier_service::Column::CarrierId.is_in(carrier_ids.iter().cloned()))
            .exec(self.db)
            .await
    }
}
