use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::equipment::Motor,
    server::model::db::{store_optional, MotorModel},
};

pub struct MotorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MotorRepository<'a, C> {
    /// Creates a new instance of [`MotorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All motors in creation order, oldest first
    pub async fn list(&self) -> Result<Vec<MotorModel>, DbErr> {
        entity::prelude::EquipmentMotor::find()
            .order_by_asc(entity::equipment_motor::Column::CreatedAt)
            .order_by_asc(entity::equipment_motor::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<MotorModel>, DbErr> {
        entity::prelude::EquipmentMotor::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<MotorModel>, DbErr> {
        entity::prelude::EquipmentMotor::find()
            .filter(entity::equipment_motor::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, motor: &Motor) -> Result<MotorModel, DbErr> {
        active_model(motor).insert(self.db).await
    }

    /// Returns `Ok(None)` if no motor with the record's id exists.
    pub async fn update(&self, motor: &Motor) -> Result<Option<MotorModel>, DbErr> {
        if self.get(&motor.id).await?.is_none() {
            return Ok(None);
        }

        let motor = active_model(motor).update(self.db).await?;

        Ok(Some(motor))
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentMotor::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

fn active_model(motor: &Motor) -> entity::equipment_motor::ActiveModel {
    entity::equipment_motor::ActiveModel {
        id: ActiveValue::Set(motor.id.clone()),
        name: ActiveValue::Set(motor.name.clone()),
        motor_type: ActiveValue::Set(store_optional(motor.motor_type)),
        position: ActiveValue::Set(motor.position.clone()),
        longitude: ActiveValue::Set(motor.longitude.clone()),
        latitude: ActiveValue::Set(motor.latitude.clone()),
        east_west: ActiveValue::Set(motor.east_west.clone()),
        north_south: ActiveValue::Set(motor.north_south.clone()),
        created_at: ActiveValue::Set(motor.created_at),
        updated_at: ActiveValue::Set(motor.updated_at),
    }
}
