use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACTIVITY_LOG_PROJECT_ID: &str = "idx_activity_log_project_id";
static IDX_ACTIVITY_LOG_TIMESTAMP: &str = "idx_activity_log_timestamp";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(string(ActivityLog::Id).primary_key())
                    .col(string(ActivityLog::Username))
                    .col(string(ActivityLog::Action))
                    .col(text(ActivityLog::Details))
                    .col(string_null(ActivityLog::ProjectId))
                    .col(timestamp(ActivityLog::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVITY_LOG_PROJECT_ID)
                    .table(ActivityLog::Table)
                    .col(ActivityLog::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVITY_LOG_TIMESTAMP)
                    .table(ActivityLog::Table)
                    .col(ActivityLog::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVITY_LOG_TIMESTAMP)
                    .table(ActivityLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVITY_LOG_PROJECT_ID)
                    .table(ActivityLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    Username,
    Action,
    Details,
    ProjectId,
    Timestamp,
}
