use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentUnicable::Table)
                    .if_not_exists()
                    .col(string(EquipmentUnicable::Id).primary_key())
                    .col(string(EquipmentUnicable::Name))
                    .col(string(EquipmentUnicable::UnicableType))
                    .col(string(EquipmentUnicable::Status))
                    .col(string(EquipmentUnicable::Port))
                    .col(text(EquipmentUnicable::IfSlots))
                    .col(timestamp(EquipmentUnicable::CreatedAt))
                    .col(timestamp(EquipmentUnicable::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentUnicable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentUnicable {
    Table,
    Id,
    Name,
    UnicableType,
    Status,
    Port,
    IfSlots,
    CreatedAt,
    UpdatedAt,
}
