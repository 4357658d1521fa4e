use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentMotor::Table)
                    .if_not_exists()
                    .col(string(EquipmentMotor::Id).primary_key())
                    .col(string(EquipmentMotor::Name))
                    .col(string(EquipmentMotor::MotorType))
                    .col(string(EquipmentMotor::Position))
                    .col(string(EquipmentMotor::Longitude))
                    .col(string(EquipmentMotor::Latitude))
                    .col(string(EquipmentMotor::EastWest))
                    .col(string(EquipmentMotor::NorthSouth))
                    .col(timestamp(EquipmentMotor::CreatedAt))
                    .col(timestamp(EquipmentMotor::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentMotor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentMotor {
    Table,
    Id,
    Name,
    MotorType,
    Position,
    Longitude,
    Latitude,
    EastWest,
    NorthSouth,
    CreatedAt,
    UpdatedAt,
}
