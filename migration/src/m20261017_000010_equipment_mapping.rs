use sea_orm_migration::{prelude::*, schema::*};

static IDX_EQUIPMENT_MAPPING_UNIQUE: &str = "idx_equipment_mapping_owner_equipment_unique";
static IDX_EQUIPMENT_MAPPING_EQUIPMENT: &str = "idx_equipment_mapping_equipment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentMapping::Table)
                    .if_not_exists()
                    .col(string(EquipmentMapping::Id).primary_key())
                    .col(string(EquipmentMapping::OwnerKind))
                    .col(string(EquipmentMapping::OwnerId))
                    .col(string(EquipmentMapping::EquipmentType))
                    .col(string(EquipmentMapping::EquipmentId))
                    .col(integer(EquipmentMapping::Position))
                    .col(timestamp(EquipmentMapping::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_MAPPING_UNIQUE)
                    .table(EquipmentMapping::Table)
                    .col(EquipmentMapping::OwnerKind)
                    .col(EquipmentMapping::OwnerId)
                    .col(EquipmentMapping::EquipmentType)
                    .col(EquipmentMapping::EquipmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_MAPPING_EQUIPMENT)
                    .table(EquipmentMapping::Table)
                    .col(EquipmentMapping::EquipmentType)
                    .col(EquipmentMapping::EquipmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_MAPPING_EQUIPMENT)
                    .table(EquipmentMapping::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_MAPPING_UNIQUE)
                    .table(EquipmentMapping::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EquipmentMapping::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EquipmentMapping {
    Table,
    Id,
    OwnerKind,
    OwnerId,
    EquipmentType,
    EquipmentId,
    Position,
    CreatedAt,
}
