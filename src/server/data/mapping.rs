use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::mapping::{EquipmentType, MappingOwner, OwnerKind},
    server::model::db::MappingModel,
};

/// Project and build mappings, both stored in `equipment_mapping`.
pub struct MappingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MappingRepository<'a, C> {
    /// Creates a new instance of [`MappingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Mappings of an owner in insertion order
    pub async fn list_for_owner(&self, owner: &MappingOwner) -> Result<Vec<MappingModel>, DbErr> {
        entity::prelude::EquipmentMapping::find()
            .filter(entity::equipment_mapping::Column::OwnerKind.eq(owner.kind().as_str()))
            .filter(entity::equipment_mapping::Column::OwnerId.eq(owner.id()))
            .order_by_asc(entity::equipment_mapping::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn find(
        &self,
        owner: &MappingOwner,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<Option<MappingModel>, DbErr> {
        entity::prelude::EquipmentMapping::find()
            .filter(entity::equipment_mapping::Column::OwnerKind.eq(owner.kind().as_str()))
            .filter(entity::equipment_mapping::Column::OwnerId.eq(owner.id()))
            .filter(entity::equipment_mapping::Column::EquipmentType.eq(equipment_type.as_str()))
            .filter(entity::equipment_mapping::Column::EquipmentId.eq(equipment_id))
            .one(self.db)
            .await
    }

    /// Position following the owner's latest mapping, `0` for an owner without mappings
    pub async fn next_position(&self, owner: &MappingOwner) -> Result<i32, DbErr> {
        let last: Option<i32> = entity::prelude::EquipmentMapping::find()
            .select_only()
            .column(entity::equipment_mapping::Column::Position)
            .filter(entity::equipment_mapping::Column::OwnerKind.eq(owner.kind().as_str()))
            .filter(entity::equipment_mapping::Column::OwnerId.eq(owner.id()))
            .order_by_desc(entity::equipment_mapping::Column::Position)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(last.map(|position| position + 1).unwrap_or(0))
    }

    /// Inserts a mapping row unless the owner already maps the equipment
    ///
    /// # Arguments
    /// - `owner` - Project or build the mapping belongs to
    /// - `equipment_type` - Equipment group of the mapped record
    /// - `equipment_id` - Id of the mapped record
    /// - `position` - Insertion order within the owner, see [`Self::next_position`]
    /// - `id` - Id of the new mapping row
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(true)` - The mapping was inserted
    /// - `Ok(false)` - A mapping for the same owner and equipment already exists
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(
        &self,
        owner: &MappingOwner,
        equipment_type: EquipmentType,
        equipment_id: &str,
        position: i32,
        id: String,
        created_at: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let mapping = entity::equipment_mapping::ActiveModel {
            id: ActiveValue::Set(id),
            owner_kind: ActiveValue::Set(owner.kind().as_str().to_string()),
            owner_id: ActiveValue::Set(owner.id().to_string()),
            equipment_type: ActiveValue::Set(equipment_type.as_str().to_string()),
            equipment_id: ActiveValue::Set(equipment_id.to_string()),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(created_at),
        };

        let result = entity::prelude::EquipmentMapping::insert(mapping)
            .on_conflict(
                OnConflict::columns([
                    entity::equipment_mapping::Column::OwnerKind,
                    entity::equipment_mapping::Column::OwnerId,
                    entity::equipment_mapping::Column::EquipmentType,
                    entity::equipment_mapping::Column::EquipmentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(
        &self,
        owner: &MappingOwner,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentMapping::delete_many()
            .filter(entity::equipment_mapping::Column::OwnerKind.eq(owner.kind().as_str()))
            .filter(entity::equipment_mapping::Column::OwnerId.eq(owner.id()))
            .filter(entity::equipment_mapping::Column::EquipmentType.eq(equipment_type.as_str()))
            .filter(entity::equipment_mapping::Column::EquipmentId.eq(equipment_id))
            .exec(self.db)
            .await
    }

    /// Deletes every mapping referencing the equipment, for any owner
    pub async fn delete_for_equipment(
        &self,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentMapping::delete_many()
            .filter(entity::equipment_mapping::Column::EquipmentType.eq(equipment_type.as_str()))
            .filter(entity::equipment_mapping::Column::EquipmentId.eq(equipment_id))
            .exec(self.db)
            .await
    }

    /// Deletes every mapping owned by any of `owner_ids` of the given kind
    pub async fn delete_for_owners(
        &self,
        owner_kind: OwnerKind,
        owner_ids: &[String],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::EquipmentMapping::delete_many()
            .filter(entity::equipment_mapping::Column::OwnerKind.eq(owner_kind.as_str()))
            .filter(entity::equipment_mapping::Column::OwnerId.is_in(owner_ids.iter().cloned()))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod list_for_owner {
        use sdb_test_utils::prelude::*;

        use crate::{model::mapping::MappingOwner, server::data::mapping::MappingRepository};

        /// Expect mappings in position order and scoped to the owner kind
        #[tokio::test]
        async fn returns_owner_mappings_by_position() -> Result<(), TestError> {
            let test = TestBuilder::new().with_project_tables().build().await?;
            test.project()
                .insert_mapping("project", "owner-1", "lnbs", "lnb-b", 1)
                .await?;
            test.project()
                .insert_mapping("project", "owner-1", "lnbs", "lnb-a", 0)
                .await?;
            test.project()
                .insert_mapping("build", "owner-1", "lnbs", "lnb-c", 0)
                .await?;

            let repository = MappingRepository::new(&test.db);
            let mappings = repository
                .list_for_owner(&MappingOwner::Project("owner-1".to_string()))
                .await?;

            let ids: Vec<_> = mappings.into_iter().map(|m| m.equipment_id).collect();
            assert_eq!(ids, vec!["lnb-a", "lnb-b"]);

            Ok(())
        }
    }

    mod next_position {
        use sdb_test_utils::prelude::*;

        use crate::{model::mapping::MappingOwner, server::data::mapping::MappingRepository};

        /// Expect 0 for an owner without mappings
        #[tokio::test]
        async fn starts_at_zero() -> Result<(), TestError> {
            let test = TestBuilder::new().with_project_tables().build().await?;

            let repository = MappingRepository::new(&test.db);
            let position = repository
                .next_position(&MappingOwner::Build("b".to_string()))
                .await?;

            assert_eq!(position, 0);

            Ok(())
        }

        /// Expect one past the highest position of the owner
        #[tokio::test]
        async fn follows_latest_mapping() -> Result<(), TestError> {
            let test = TestBuilder::new().with_project_tables().build().await?;
            test.project()
                .insert_mapping("build", "b", "switches", "sw-1", 4)
                .await?;
            test.project()
                .insert_mapping("project", "b", "switches", "sw-2", 9)
                .await?;

            let repository = MappingRepository::new(&test.db);
            let position = repository
                .next_position(&MappingOwner::Build("b".to_string()))
                .await?;

            assert_eq!(position, 5);

            Ok(())
        }
    }

    mod delete_for_equipment {
        use sdb_test_utils::prelude::*;

        use crate::{
            model::mapping::{EquipmentType, MappingOwner},
            server::data::mapping::MappingRepository,
        };

        /// Expect mappings of every owner to be removed for the equipment only
        #[tokio::test]
        async fn removes_across_owners() -> Result<(), TestError> {
            let test = TestBuilder::new().with_project_tables().build().await?;
            test.project()
                .insert_mapping("project", "p", "motors", "m-1", 0)
                .await?;
            test.project()
                .insert_mapping("build", "b", "motors", "m-1", 0)
                .await?;
            test.project()
                .insert_mapping("build", "b", "motors", "m-2", 1)
                .await?;

            let repository = MappingRepository::new(&test.db);
            let result = repository
                .delete_for_equipment(EquipmentType::Motors, "m-1")
                .await?;

            assert_eq!(result.rows_affected, 2);
            let remaining = repository
                .list_for_owner(&MappingOwner::Build("b".to_string()))
                .await?;
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].equipment_id, "m-2");

            Ok(())
        }
    }

    mod create {
        use sdb_test_utils::prelude::*;

        use crate::{
            model::mapping::{EquipmentType, MappingOwner},
            server::data::mapping::MappingRepository,
        };

        /// Expect a second insert of the same owner and equipment to report false without an error
        #[tokio::test]
        async fn skips_duplicate_tuple() -> Result<(), TestError> {
            let test = TestBuilder::new().with_project_tables().build().await?;
            let owner = MappingOwner::Project("p".to_string());
            let now = factory::timestamp();

            let repository = MappingRepository::new(&test.db);
            let first = repository
                .create(&owner, EquipmentType::Lnbs, "l", 0, "m-1".to_string(), now)
                .await?;
            let second = repository
                .create(&owner, EquipmentType::Lnbs, "l", 1, "m-2".to_string(), now)
                .await?;

            assert!(first);
            assert!(!second);
            let mappings = repository.list_for_owner(&owner).await?;
            assert_eq!(mappings.len(), 1);
            assert_eq!(mappings[0].id, "m-1");

            Ok(())
        }
    }
}
