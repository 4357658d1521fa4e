use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::equipment::Lnb,
    server::{data::fold_name, model::db::LnbModel},
};

pub struct LnbRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LnbRepository<'a, C> {
    /// Creates a new instance of [`LnbRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All LNBs in creation order, oldest first
    pub async fn list(&self) -> Result<Vec<LnbModel>, DbErr> {
        entity::prelude::EquipmentLnb::find()
            .order_by_asc(entity::equipment_lnb::Column::CreatedAt)
            .order_by_asc(entity::equipment_lnb::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<LnbModel>, DbErr> {
        entity::prelude::EquipmentLnb::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Fetches the LNBs with the given ids, in no particular order
    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<LnbModel>, DbErr> {
        entity::prelude::EquipmentLnb::find()
            .filter(entity::equipment_lnb::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, lnb: &Lnb) -> Result<LnbModel, DbErr> {
        active_model(lnb).insert(self.db).await
    }

    /// Overwrites every stored column of an existing LNB
    ///
    /// Returns `Ok(None)` if no LNB with the record's id exists.
    pub async fn update(&self, lnb: &Lnb) -> Result<Option<LnbModel>, DbErr> {
        if self.get(&lnb.id).await?.is_none() {
            return Ok(None);
        }

        let lnb = active_model(lnb).update(self.db).await?;

        Ok(Some(lnb))
    }

    /// Deletes an LNB
    ///
    /// Returns OK regardless of the LNB existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentLnb::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Finds an LNB whose name matches case-insensitively, skipping `exclude_id`
    ///
    /// Names are folded with [`fold_name`] rather than SQL `LOWER`, which only folds ASCII on
    /// SQLite. The check runs per call, so callers make it inside the writing transaction.
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<LnbModel>, DbErr> {
        let wanted = fold_name(name);

        let mut query = entity::prelude::EquipmentLnb::find()
            .select_only()
            .column(entity::equipment_lnb::Column::Id)
            .column(entity::equipment_lnb::Column::Name);
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::equipment_lnb::Column::Id.ne(exclude_id));
        }
        let names: Vec<(String, String)> = query.into_tuple().all(self.db).await?;

        let Some((id, _)) = names
            .into_iter()
            .find(|(_, existing)| fold_name(existing) == wanted)
        else {
            return Ok(None);
        };

        entity::prelude::EquipmentLnb::find_by_id(id).one(self.db).await
    }
}

fn active_model(lnb: &Lnb) -> entity::equipment_lnb::ActiveModel {
    entity::equipment_lnb::ActiveModel {
        id: ActiveValue::Set(lnb.id.clone()),
        name: ActiveValue::Set(lnb.name.clone()),
        low_frequency: ActiveValue::Set(lnb.low_frequency.clone()),
        high_frequency: ActiveValue::Set(lnb.high_frequency.clone()),
        lo1_high: ActiveValue::Set(lnb.lo1_high.clone()),
        lo1_low: ActiveValue::Set(lnb.lo1_low.clone()),
        band_type: ActiveValue::Set(lnb.band_type.clone()),
        power_control: ActiveValue::Set(lnb.power_control.clone()),
        v_control: ActiveValue::Set(lnb.v_control.clone()),
        khz_option: ActiveValue::Set(lnb.khz_option.clone()),
        created_at: ActiveValue::Set(lnb.created_at),
        updated_at: ActiveValue::Set(lnb.updated_at),
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use sdb_test_utils::prelude::*;

        use crate::{model::equipment::Lnb, server::data::equipment::lnb::LnbRepository};

        /// Expect Ok when inserting a new LNB
        #[tokio::test]
        async fn creates_lnb() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;

            let lnb = Lnb::from(factory::lnb_model("Universal"));
            let repository = LnbRepository::new(&test.db);
            let result = repository.create(&lnb).await;

            assert!(result.is_ok());
            let model = result.unwrap();
            assert_eq!(model.id, lnb.id);
            assert_eq!(model.low_frequency, "9750");

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let repository = LnbRepository::new(&test.db);
            let result = repository.create(&Lnb::from(factory::lnb_model("Universal"))).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod list {
        use sdb_test_utils::prelude::*;

        use crate::server::data::equipment::lnb::LnbRepository;

        /// Expect LNBs to be listed oldest first
        #[tokio::test]
        async fn lists_in_creation_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let first = test.equipment().insert_lnb("Ku Universal").await?;
            let second = test.equipment().insert_lnb("C Band").await?;

            let repository = LnbRepository::new(&test.db);
            let lnbs = repository.list().await?;

            let ids: Vec<_> = lnbs.into_iter().map(|lnb| lnb.id).collect();
            assert_eq!(ids, vec![first.id, second.id]);

            Ok(())
        }
    }

    mod update {
        use sdb_test_utils::prelude::*;

        use crate::{model::equipment::Lnb, server::data::equipment::lnb::LnbRepository};

        /// Expect Ok(Some(_)) with the new values when updating an existing LNB
        #[tokio::test]
        async fn updates_existing_lnb() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let repository = LnbRepository::new(&test.db);
            let mut lnb = Lnb::from(factory::lnb_model("Universal"));
            repository.create(&lnb).await?;

            lnb.high_frequency = "10750".to_string();
            let result = repository.update(&lnb).await?;

            assert!(matches!(result, Some(ref model) if model.high_frequency == "10750"));

            Ok(())
        }

        /// Expect Ok(None) when the LNB does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_lnb() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;

            let repository = LnbRepository::new(&test.db);
            let result = repository.update(&Lnb::from(factory::lnb_model("Universal"))).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod find_by_name {
        use sdb_test_utils::prelude::*;

        use crate::server::data::equipment::lnb::LnbRepository;

        /// Expect names to match regardless of case
        #[tokio::test]
        async fn matches_case_insensitively() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let lnb = test.equipment().insert_lnb("Universal Ku").await?;

            let repository = LnbRepository::new(&test.db);
            let found = repository.find_by_name("UNIVERSAL ku", None).await?;

            assert_eq!(found.map(|m| m.id), Some(lnb.id));

            Ok(())
        }

        /// Expect non-ASCII letters to match regardless of case
        #[tokio::test]
        async fn matches_non_ascii_case_insensitively() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let lnb = test.equipment().insert_lnb("Tête Öst").await?;

            let repository = LnbRepository::new(&test.db);
            let found = repository.find_by_name(" TÊTE öST ", None).await?;

            assert_eq!(found.map(|m| m.id), Some(lnb.id));

            Ok(())
        }

        /// Expect the excluded id to be skipped
        #[tokio::test]
        async fn skips_excluded_id() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let lnb = test.equipment().insert_lnb("Universal").await?;

            let repository = LnbRepository::new(&test.db);
            let found = repository.find_by_name("universal", Some(&lnb.id)).await?;

            assert!(found.is_none());

            Ok(())
        }
    }

    mod delete {
        use sdb_test_utils::prelude::*;

        use crate::server::data::equipment::lnb::LnbRepository;

        /// Expect one affected row when deleting an existing LNB and none for a missing one
        #[tokio::test]
        async fn reports_rows_affected() -> Result<(), TestError> {
            let test = TestBuilder::new().with_equipment_tables().build().await?;
            let lnb = test.equipment().insert_lnb("Universal").await?;

            let repository = LnbRepository::new(&test.db);
            let deleted = repository.delete(&lnb.id).await?;
            let missing = repository.delete(&lnb.id).await?;

            assert_eq!(deleted.rows_affected, 1);
            assert_eq!(missing.rows_affected, 0);
            assert!(repository.get(&lnb.id).await?.is_none());

            Ok(())
        }
    }
}
