use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::equipment::Unicable,
    server::model::db::{store_optional, UnicableModel},
};

pub struct UnicableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnicableRepository<'a, C> {
    /// Creates a new instance of [`UnicableRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All unicables in creation order, oldest first
    pub async fn list(&self) -> Result<Vec<UnicableModel>, DbErr> {
        entity::prelude::EquipmentUnicable::find()
            .order_by_asc(entity::equipment_unicable::Column::CreatedAt)
            .order_by_asc(entity::equipment_unicable::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<UnicableModel>, DbErr> {
        entity::prelude::EquipmentUnicable::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<UnicableModel>, DbErr> {
        entity::prelude::EquipmentUnicable::find()
            .filter(entity::equipment_unicable::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, unicable: &Unicable) -> Result<UnicableModel, DbErr> {
        active_model(unicable)?.insert(self.db).await
    }

    /// Returns `Ok(None)` if no unicable with the record's id exists.
    pub async fn update(&self, unicable: &Unicable) -> Result<Option<UnicableModel>, DbErr> {
        if self.get(&unicable.id).await?.is_none() {
            return Ok(None);
        }

        let unicable = active_model(unicable)?.update(self.db).await?;

        Ok(Some(unicable))
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentUnicable::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

fn active_model(unicable: &Unicable) -> Result<entity::equipment_unicable::ActiveModel, DbErr> {
    let if_slots =
        serde_json::to_string(&unicable.if_slots).map_err(|e| DbErr::Json(e.to_string()))?;

    Ok(entity::equipment_unicable::ActiveModel {
        id: ActiveValue::Set(unicable.id.clone()),
        name: ActiveValue::Set(unicable.name.clone()),
        unicable_type: ActiveValue::Set(store_optional(unicable.unicable_type)),
        status: ActiveValue::Set(store_optional(unicable.status)),
        port: ActiveValue::Set(store_optional(unicable.port)),
        if_slots: ActiveValue::Set(if_slots),
        created_at: ActiveValue::Set(unicable.created_at),
        updated_at: ActiveValue::Set(unicable.updated_at),
    })
}
