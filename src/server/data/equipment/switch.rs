use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::equipment::Switch,
    server::model::db::{store_optional, SwitchModel},
};

pub struct SwitchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SwitchRepository<'a, C> {
    /// Creates a new instance of [`SwitchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All switches in creation order, oldest first
    pub async fn list(&self) -> Result<Vec<SwitchModel>, DbErr> {
        entity::prelude::EquipmentSwitch::find()
            .order_by_asc(entity::equipment_switch::Column::CreatedAt)
            .order_by_asc(entity::equipment_switch::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<SwitchModel>, DbErr> {
        entity::prelude::EquipmentSwitch::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<SwitchModel>, DbErr> {
        entity::prelude::EquipmentSwitch::find()
            .filter(entity::equipment_switch::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, switch: &Switch) -> Result<SwitchModel, DbErr> {
        active_model(switch)?.insert(self.db).await
    }

    /// Overwrites every stored column of an existing switch
    ///
    /// Returns `Ok(None)` if no switch with the record's id exists.
    pub async fn update(&self, switch: &Switch) -> Result<Option<SwitchModel>, DbErr> {
        if self.get(&switch.id).await?.is_none() {
            return Ok(None);
        }

        let switch = active_model(switch)?.update(self.db).await?;

        Ok(Some(switch))
    }

    /// Deletes a switch
    ///
    /// Returns OK regardless of the switch existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentSwitch::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

fn active_model(switch: &Switch) -> Result<entity::equipment_switch::ActiveModel, DbErr> {
    let switch_options =
        serde_json::to_string(&switch.switch_options).map_err(|e| DbErr::Json(e.to_string()))?;

    Ok(entity::equipment_switch::ActiveModel {
        id: ActiveValue::Set(switch.id.clone()),
        name: ActiveValue::Set(switch.name.clone()),
        switch_type: ActiveValue::Set(store_optional(switch.switch_type)),
        switch_options: ActiveValue::Set(switch_options),
        created_at: ActiveValue::Set(switch.created_at),
        updated_at: ActiveValue::Set(switch.updated_at),
    })
}

#[cfg(test)]
mod tests {

    mod create {
        use sdb_test_utils::prelude::*;

        use crate::{
            model::equipment::{Switch, SwitchType},
            server::data::equipment::switch::SwitchRepository,
        };

        /// Expect switch options to be stored as an ordered JSON list
        #[tokio::test]
        async fn stores_options_in_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;

            let mut switch = Switch::try_from(factory::switch_model("SW", "DiSEqC 1.0")).unwrap();
            switch.switch_options = vec!["LNB2".to_string(), "LNB1".to_string()];
            let repository = SwitchRepository::new(&test.db);
            let model = repository.create(&switch).await?;

            assert_eq!(model.switch_options, r#"["LNB2","LNB1"]"#);
            assert_eq!(model.switch_type, SwitchType::Diseqc10.as_str());

            let stored = Switch::try_from(repository.get(&switch.id).await?.unwrap()).unwrap();
            assert_eq!(stored.switch_options, switch.switch_options);

            Ok(())
        }
    }

    mod update {
        use sdb_test_utils::prelude::*;

        use crate::{
            model::equipment::{Switch, SwitchType},
            server::data::equipment::switch::SwitchRepository,
        };

        /// Expect the new switch type to be persisted
        #[tokio::test]
        async fn updates_existing_switch() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let model = test.equipment().insert_switch("SW", "Tone Burst").await?;

            let mut switch = Switch::try_from(model).unwrap();
            switch.switch_type = Some(SwitchType::Diseqc11);
            let repository = SwitchRepository::new(&test.db);
            let result = repository.update(&switch).await?;

            assert!(matches!(result, Some(ref m) if m.switch_type == "DiSEqC 1.1"));

            Ok(())
        }
    }

    mod delete {
        use sdb_test_utils::prelude::*;

        use crate::server::data::equipment::switch::SwitchRepository;

        /// Expect the switch to be gone after deletion
        #[tokio::test]
        async fn deletes_existing_switch() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let model = test.equipment().insert_switch("SW", "Tone Burst").await?;

            let repository = SwitchRepository::new(&test.db);
            let result = repository.delete(&model.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repository.get(&model.id).await?.is_none());

            Ok(())
        }
    }
}
