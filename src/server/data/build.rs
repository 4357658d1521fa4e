use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::project::Build, server::model::db::BuildModel};

pub struct BuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildRepository<'a, C> {
    /// Creates a new instance of [`BuildRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Builds of a project, newest first
    pub async fn list_for_project(&self, project_id: &str) -> Result<Vec<BuildModel>, DbErr> {
        entity::prelude::ProjectBuild::find()
            .filter(entity::project_build::Column::ProjectId.eq(project_id))
            .order_by_desc(entity::project_build::Column::CreatedAt)
            .order_by_desc(entity::project_build::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<BuildModel>, DbErr> {
        entity::prelude::ProjectBuild::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(&self, build: &Build) -> Result<BuildModel, DbErr> {
        active_model(build).insert(self.db).await
    }

    /// Returns `Ok(None)` if no build with the record's id exists
    pub async fn update(&self, build: &Build) -> Result<Option<BuildModel>, DbErr> {
        if self.get(&build.id).await?.is_none() {
            return Ok(None);
        }

        let build = active_model(build).update(self.db).await?;

        Ok(Some(build))
    }

    /// Replaces only the cached XML of a build
    pub async fn set_xml_data(&self, id: &str, xml_data: &str) -> Result<(), DbErr> {
        entity::prelude::ProjectBuild::update_many()
            .col_expr(
                entity::project_build::Column::XmlData,
                sea_orm::sea_query::Expr::value(xml_data),
            )
            .filter(entity::project_build::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProjectBuild::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn delete_for_project(&self, project_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProjectBuild::delete_many()
            .filter(entity::project_build::Column::ProjectId.eq(project_id))
            .exec(self.db)
            .await
    }
}

fn active_model(build: &Build) -> entity::project_build::ActiveModel {
    entity::project_build::ActiveModel {
        id: ActiveValue::Set(build.id.clone()),
        project_id: ActiveValue::Set(build.project_id.clone()),
        name: ActiveValue::Set(build.name.clone()),
        description: ActiveValue::Set(build.description.clone()),
        xml_data: ActiveValue::Set(build.xml_data.clone()),
        created_by: ActiveValue::Set(build.created_by.clone()),
        created_at: ActiveValue::Set(build.created_at),
        updated_at: ActiveValue::Set(build.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use sdb_test_utils::prelude::*;

    use crate::server::data::build::BuildRepository;

    /// Expect only the project's builds, newest first
    #[tokio::test]
    async fn lists_project_builds() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;
        let other = test.project().insert_project("Basement").await?;
        test.project().insert_build(&project.id, "v1").await?;
        test.project().insert_build(&project.id, "v2").await?;
        test.project().insert_build(&other.id, "other").await?;

        let repository = BuildRepository::new(&test.db);
        let builds = repository.list_for_project(&project.id).await?;

        let names: Vec<_> = builds.into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["v2", "v1"]);

        Ok(())
    }

    /// Expect the cached XML to be stored without touching other columns
    #[tokio::test]
    async fn sets_xml_data() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;
        let build = test.project().insert_build(&project.id, "v1").await?;

        let repository = BuildRepository::new(&test.db);
        repository.set_xml_data(&build.id, "<SDB/>").await?;

        let stored = repository.get(&build.id).await?.unwrap();
        assert_eq!(stored.xml_data.as_deref(), Some("<SDB/>"));
        assert_eq!(stored.name, "v1");
        assert_eq!(stored.updated_at, build.updated_at);

        Ok(())
    }
}
