use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentSwitch::Table)
                    .if_not_exists()
                    .col(string(EquipmentSwitch::Id).primary_key())
                    .col(string(EquipmentSwitch::Name))
                    .col(string(EquipmentSwitch::SwitchType))
                    .col(text(EquipmentSwitch::SwitchOptions))
                    .col(timestamp(EquipmentSwitch::CreatedAt))
                    .col(timestamp(EquipmentSwitch::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentSwitch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentSwitch {
    Table,
    Id,
    Name,
    SwitchType,
    SwitchOptions,
    CreatedAt,
    UpdatedAt,
}
