use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::project::Project,
    server::{data::fold_name, model::db::ProjectModel},
};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All projects, newest first
    pub async fn list(&self) -> Result<Vec<ProjectModel>, DbErr> {
        entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<ProjectModel>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, project: &Project) -> Result<ProjectModel, DbErr> {
        active_model(project).insert(self.db).await
    }

    /// Returns `Ok(None)` if no project with the record's id exists
    pub async fn update(&self, project: &Project) -> Result<Option<ProjectModel>, DbErr> {
        if self.get(&project.id).await?.is_none() {
            return Ok(None);
        }

        let project = active_model(project).update(self.db).await?;

        Ok(Some(project))
    }

    /// Deletes the project row
    ///
    /// Fails with a foreign key violation while builds still reference it.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_by_id(id).exec(self.db).await
    }

    /// Finds a project whose name matches case-insensitively, skipping `exclude_id`
    ///
    /// Names are folded with [`fold_name`] rather than SQL `LOWER`, which only folds ASCII on
    /// SQLite. The check runs per call, so callers make it inside the writing transaction.
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<ProjectModel>, DbErr> {
        let wanted = fold_name(name);

        let mut query = entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::Id)
            .column(entity::project::Column::Name);
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::project::Column::Id.ne(exclude_id));
        }
        let names: Vec<(String, String)> = query.into_tuple().all(self.db).await?;

        let Some((id, _)) = names
            .into_iter()
            .find(|(_, existing)| fold_name(existing) == wanted)
        else {
            return Ok(None);
        };

        entity::prelude::Project::find_by_id(id).one(self.db).await
    }
}

fn active_model(project: &Project) -> entity::project::ActiveModel {
    entity::project::ActiveModel {
        id: ActiveValue::Set(project.id.clone()),
        name: ActiveValue::Set(project.name.clone()),
        description: ActiveValue::Set(project.description.clone()),
        created_by: ActiveValue::Set(project.created_by.clone()),
        created_at: ActiveValue::Set(project.created_at),
        updated_at: ActiveValue::Set(project.updated_at),
    }
}
