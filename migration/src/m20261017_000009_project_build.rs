use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000008_project::Project;

static IDX_PROJECT_BUILD_PROJECT_ID: &str = "idx_project_build_project_id";
static FK_PROJECT_BUILD_PROJECT_ID: &str = "fk_project_build_project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectBuild::Table)
                    .if_not_exists()
                    .col(string(ProjectBuild::Id).primary_key())
                    .col(string(ProjectBuild::ProjectId))
                    .col(string(ProjectBuild::Name))
                    .col(text(ProjectBuild::Description))
                    .col(text_null(ProjectBuild::XmlData))
                    .col(string(ProjectBuild::CreatedBy))
                    .col(timestamp(ProjectBuild::CreatedAt))
                    .col(timestamp(ProjectBuild::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_BUILD_PROJECT_ID)
                    .table(ProjectBuild::Table)
                    .col(ProjectBuild::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_BUILD_PROJECT_ID)
                    .from_tbl(ProjectBuild::Table)
                    .from_col(ProjectBuild::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_BUILD_PROJECT_ID)
                    .table(ProjectBuild::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECT_BUILD_PROJECT_ID)
                    .table(ProjectBuild::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectBuild::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProjectBuild {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    XmlData,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
