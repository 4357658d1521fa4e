use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000006_satellite_carrier::SatelliteCarrier;

static IDX_CARRIER_SERVICE_CARRIER_ID: &str = "idx_carrier_service_carrier_id";
static FK_CARRIER_SERVICE_CARRIER_ID: &str = "fk_carrier_service_carrier_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarrierService::Table)
                    .if_not_exists()
                    .col(string(CarrierService::Id).primary_key())
                    .col(string(CarrierService::CarrierId))
                    .col(integer(CarrierService::Position))
                    .col(string(CarrierService::Name))
                    .col(string(CarrierService::Frequency))
                    .col(string(CarrierService::VideoPid))
                    .col(string(CarrierService::AudioPid))
                    .col(string(CarrierService::PcrPid))
                    .col(string(CarrierService::ProgramNumber))
                    .col(string(CarrierService::FavGroup))
                    .col(boolean(CarrierService::FactoryDefault))
                    .col(string(CarrierService::Preference))
                    .col(boolean(CarrierService::Scramble))
                    .col(timestamp(CarrierService::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARRIER_SERVICE_CARRIER_ID)
                    .table(CarrierService::Table)
                    .col(CarrierService::CarrierId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARRIER_SERVICE_CARRIER_ID)
                    .from_tbl(CarrierService::Table)
                    .from_col(CarrierService::CarrierId)
                    .to_tbl(SatelliteCarrier::Table)
                    .to_col(SatelliteCarrier::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CARRIER_SERVICE_CARRIER_ID)
                    .table(CarrierService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARRIER_SERVICE_CARRIER_ID)
                    .table(CarrierService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CarrierService::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CarrierService {
    Table,
    Id,
    CarrierId,
    Position,
    Name,
    Frequency,
    VideoPid,
    AudioPid,
    PcrPid,
    ProgramNumber,
    FavGroup,
    FactoryDefault,
    Preference,
    Scramble,
    CreatedAt,
}
