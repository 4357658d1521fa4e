use sea_orm_migration::{prelude::*, schema::*};

static IDX_SATELLITE_NAME: &str = "idx_satellite_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Satellite::Table)
                    .if_not_exists()
                    .col(string(Satellite::Id).primary_key())
                    .col(string(Satellite::Name))
                    .col(string(Satellite::Position))
                    .col(string(Satellite::Age))
                    .col(string(Satellite::Direction))
                    .col(string_null(Satellite::MappedLnb))
                    .col(text(Satellite::MappedSwitch))
                    .col(string_null(Satellite::MappedMotor))
                    .col(string_null(Satellite::MappedUnicable))
                    .col(timestamp(Satellite::CreatedAt))
                    .col(timestamp(Satellite::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SATELLITE_NAME)
                    .table(Satellite::Table)
                    .col(Satellite::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SATELLITE_NAME)
                    .table(Satellite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Satellite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Satellite {
    Table,
    Id,
    Name,
    Position,
    Age,
    Direction,
    MappedLnb,
    MappedSwitch,
    MappedMotor,
    MappedUnicable,
    CreatedAt,
    UpdatedAt,
}
