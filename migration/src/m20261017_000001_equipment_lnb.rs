use sea_orm_migration::{prelude::*, schema::*};

static IDX_EQUIPMENT_LNB_NAME: &str = "idx_equipment_lnb_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentLnb::Table)
                    .if_not_exists()
                    .col(string(EquipmentLnb::Id).primary_key())
                    .col(string(EquipmentLnb::Name))
                    .col(string(EquipmentLnb::LowFrequency))
                    .col(string(EquipmentLnb::HighFrequency))
                    .col(string(EquipmentLnb::Lo1High))
                    .col(string(EquipmentLnb::Lo1Low))
                    .col(string(EquipmentLnb::BandType))
                    .col(string(EquipmentLnb::PowerControl))
                    .col(string(EquipmentLnb::VControl))
                    .col(string(EquipmentLnb::KhzOption))
                    .col(timestamp(EquipmentLnb::CreatedAt))
                    .col(timestamp(EquipmentLnb::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_LNB_NAME)
                    .table(EquipmentLnb::Table)
                    .col(EquipmentLnb::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_LNB_NAME)
                    .table(EquipmentLnb::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EquipmentLnb::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EquipmentLnb {
    Table,
    Id,
    Name,
    LowFrequency,
    HighFrequency,
    #[sea_orm(iden = "lo1_high")]
    Lo1High,
    #[sea_orm(iden = "lo1_low")]
    Lo1Low,
    BandType,
    PowerControl,
    VControl,
    KhzOption,
    CreatedAt,
    UpdatedAt,
}
