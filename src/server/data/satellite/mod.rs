pub mod carrier;
pub mod service;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{equipment::EquipmentKind, satellite::Satellite},
    server::{
        data::fold_name,
        model::db::{split_ids, store_optional, SatelliteModel},
    },
};

/// Satellite rows only; carriers and services have their own repositories.
pub struct SatelliteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SatelliteRepository<'a, C> {
    /// Creates a new instance of [`SatelliteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All satellites in creation order, oldest first
    pub async fn list(&self) -> Result<Vec<SatelliteModel>, DbErr> {
        entity::prelude::Satellite::find()
            .order_by_asc(entity::satellite::Column::CreatedAt)
            .order_by_asc(entity::satellite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<SatelliteModel>, DbErr> {
        entity::prelude::Satellite::find_by_id(id).one(self.db).await
    }

    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<SatelliteModel>, DbErr> {
        entity::prelude::Satellite::find()
            .filter(entity::satellite::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Inserts the satellite row; `satellite.carriers` is ignored
    pub async fn create(&self, satellite: &Satellite) -> Result<SatelliteModel, DbErr> {
        active_model(satellite).insert(self.db).await
    }

    /// Overwrites the satellite row; `satellite.carriers` is ignored
    ///
    /// Returns `Ok(None)` if no satellite with the record's id exists.
    pub async fn update(&self, satellite: &Satellite) -> Result<Option<SatelliteModel>, DbErr> {
        if self.get(&satellite.id).await?.is_none() {
            return Ok(None);
        }

        let satellite = active_model(satellite).update(self.db).await?;

        Ok(Some(satellite))
    }

    /// Deletes the satellite row
    ///
    /// Fails with a foreign key violation while carriers still reference it.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Satellite::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Finds a satellite whose name matches case-insensitively, skipping `exclude_id`
    ///
    /// Names are folded with [`fold_name`] rather than SQL `LOWER`, which only folds ASCII on
    /// SQLite. The check runs per call, so callers make it inside the writing transaction.
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<SatelliteModel>, DbErr> {
        let wanted = fold_name(name);

        let mut query = entity::prelude::Satellite::find()
            .select_only()
            .column(entity::satellite::Column::Id)
            .column(entity::satellite::Column::Name);
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::satellite::Column::Id.ne(exclude_id));
        }
        let names: Vec<(String, String)> = query.into_tuple().all(self.db).await?;

        let Some((id, _)) = names
            .into_iter()
            .find(|(_, existing)| fold_name(existing) == wanted)
        else {
            return Ok(None);
        };

        entity::prelude::Satellite::find_by_id(id).one(self.db).await
    }

    /// Removes every reference to an equipment record from satellite assignments
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of satellites that referenced the equipment
    /// - `Err(DbErr)` - Query or update failed
    pub async fn detach_equipment(&self, kind: EquipmentKind, id: &str) -> Result<u64, DbErr> {
        let column = match kind {
            EquipmentKind::Lnb => entity::satellite::Column::MappedLnb,
            EquipmentKind::Motor => entity::satellite::Column::MappedMotor,
            EquipmentKind::Unicable => entity::satellite::Column::MappedUnicable,
            EquipmentKind::Switch => return self.detach_switch(id).await,
        };

        let result = entity::prelude::Satellite::update_many()
            .col_expr(column, Expr::value(Option::<String>::None))
            .filter(column.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn detach_switch(&self, id: &str) -> Result<u64, DbErr> {
        let satellites = entity::prelude::Satellite::find()
            .filter(entity::satellite::Column::MappedSwitch.contains(id))
            .all(self.db)
            .await?;

        let mut detached = 0;
        for satellite in satellites {
            let ids = split_ids(&satellite.mapped_switch);
            if !ids.iter().any(|switch_id| switch_id == id) {
                continue;
            }

            let remaining: Vec<_> = ids.into_iter().filter(|switch_id| switch_id != id).collect();
            entity::prelude::Satellite::update_many()
                .col_expr(
                    entity::satellite::Column::MappedSwitch,
                    Expr::value(remaining.join(",")),
                )
                .filter(entity::satellite::Column::Id.eq(satellite.id))
                .exec(self.db)
                .await?;
            detached += 1;
        }

        Ok(detached)
    }
}

fn active_model(satellite: &Satellite) -> entity::satellite::ActiveModel {
    entity::satellite::ActiveModel {
        id: ActiveValue::Set(satellite.id.clone()),
        name: ActiveValue::Set(satellite.name.clone()),
        position: ActiveValue::Set(satellite.position.clone()),
        age: ActiveValue::Set(satellite.age.clone()),
        direction: ActiveValue::Set(store_optional(satellite.direction)),
        mapped_lnb: ActiveValue::Set(satellite.mapped_lnb.clone()),
        mapped_switch: ActiveValue::Set(satellite.mapped_switch.join(",")),
        mapped_motor: ActiveValue::Set(satellite.mapped_motor.clone()),
        mapped_unicable: ActiveValue::Set(satellite.mapped_unicable.clone()),
        created_at: ActiveValue::Set(satellite.created_at),
        updated_at: ActiveValue::Set(satellite.updated_at),
    }
}
