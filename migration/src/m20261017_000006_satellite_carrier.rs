use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000005_satellite::Satellite;

static IDX_SATELLITE_CARRIER_SATELLITE_ID: &str = "idx_satellite_carrier_satellite_id";
static FK_SATELLITE_CARRIER_SATELLITE_ID: &str = "fk_satellite_carrier_satellite_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SatelliteCarrier::Table)
                    .if_not_exists()
                    .col(string(SatelliteCarrier::Id).primary_key())
                    .col(string(SatelliteCarrier::SatelliteId))
                    .col(integer(SatelliteCarrier::Position))
                    .col(string(SatelliteCarrier::Name))
                    .col(string(SatelliteCarrier::Frequency))
                    .col(string(SatelliteCarrier::Polarization))
                    .col(string(SatelliteCarrier::SymbolRate))
                    .col(string(SatelliteCarrier::Fec))
                    .col(string(SatelliteCarrier::FecMode))
                    .col(boolean(SatelliteCarrier::FactoryDefault))
                    .col(timestamp(SatelliteCarrier::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SATELLITE_CARRIER_SATELLITE_ID)
                    .table(SatelliteCarrier::Table)
                    .col(SatelliteCarrier::SatelliteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SATELLITE_CARRIER_SATELLITE_ID)
                    .from_tbl(SatelliteCarrier::Table)
                    .from_col(SatelliteCarrier::SatelliteId)
                    .to_tbl(Satellite::Table)
                    .to_col(Satellite::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SATELLITE_CARRIER_SATELLITE_ID)
                    .table(SatelliteCarrier::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SATELLITE_CARRIER_SATELLITE_ID)
                    .table(SatelliteCarrier::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SatelliteCarrier::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SatelliteCarrier {
    Table,
    Id,
    SatelliteId,
    Position,
    Name,
    Frequency,
    Polarization,
    SymbolRate,
    Fec,
    FecMode,
    FactoryDefault,
    CreatedAt,
}
