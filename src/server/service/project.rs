//! Projects and their delete cascade.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        mapping::OwnerKind,
        project::{CreateProjectDto, Project, UpdateProjectDto},
    },
    server::{
        data::{build::BuildRepository, mapping::MappingRepository, project::ProjectRepository},
        error::{validation::ValidationError, Error},
        util::{id::generate_id, time::now},
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every project, newest first.
    pub async fn list(&self) -> Result<Vec<Project>, Error> {
        let projects = ProjectRepository::new(self.db).list().await?;

        Ok(projects.into_iter().map(Project::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Project>, Error> {
        let project = ProjectRepository::new(self.db).get(id).await?;

        Ok(project.map(Project::from))
    }

    /// Creates a project.
    ///
    /// # Returns
    /// - `Ok(Project)` - The stored project
    /// - `Err(Error::ValidationError)` - Missing name or a project with the same name exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateProjectDto) -> Result<Project, Error> {
        let txn = self.db.begin().await?;
        let project = insert_project(&txn, dto).await?;
        txn.commit().await?;

        tracing::info!("Created project {} ({})", project.id, project.name);

        Ok(project)
    }

    /// Renames a project or changes its description.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with `id` exists
    /// - `Err(Error::ValidationError)` - Blank or duplicate name
    pub async fn update(&self, id: &str, dto: UpdateProjectDto) -> Result<Option<Project>, Error> {
        let txn = self.db.begin().await?;
        let repository = ProjectRepository::new(&txn);

        let Some(model) = repository.get(id).await? else {
            return Ok(None);
        };

        let mut project = Project::from(model);
        if let Some(name) = dto.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::MissingField("name").into());
            }
            ensure_name_available(&txn, &name, Some(id)).await?;
            project.name = name;
        }
        if let Some(description) = dto.description {
            project.description = description;
        }
        project.updated_at = now();

        let updated = repository.update(&project).await?;
        txn.commit().await?;

        Ok(updated.map(Project::from))
    }

    /// Deletes a project together with its builds and every mapping they own.
    ///
    /// Build mappings are removed first, then project mappings, then builds, then the project,
    /// all in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The project was deleted
    /// - `Ok(false)` - No project with `id` exists
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        if ProjectRepository::new(&txn).get(id).await?.is_none() {
            return Ok(false);
        }

        let builds = BuildRepository::new(&txn);
        let mappings = MappingRepository::new(&txn);

        let build_ids: Vec<String> = builds
            .list_for_project(id)
            .await?
            .into_iter()
            .map(|build| build.id)
            .collect();

        let build_mappings = mappings
            .delete_for_owners(OwnerKind::Build, &build_ids)
            .await?;
        let project_mappings = mappings
            .delete_for_owners(OwnerKind::Project, &[id.to_string()])
            .await?;
        builds.delete_for_project(id).await?;
        ProjectRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted project {} with {} builds ({} build mappings, {} project mappings)",
            id,
            build_ids.len(),
            build_mappings.rows_affected,
            project_mappings.rows_affected
        );

        Ok(true)
    }

    /// Whether another project already uses `name`, compared case-insensitively.
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<&str>) -> Result<bool, Error> {
        if name.trim().is_empty() {
            return Ok(false);
        }

        let existing = ProjectRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        Ok(existing.is_some())
    }
}

/// Validates and inserts a project on `db`.
pub(crate) async fn insert_project<C: ConnectionTrait>(
    db: &C,
    dto: CreateProjectDto,
) -> Result<Project, Error> {
    let name = dto.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }
    ensure_name_available(db, &name, None).await?;

    let now = now();
    let project = Project {
        id: generate_id(),
        name,
        description: dto.description,
        created_by: dto.created_by,
        created_at: now,
        updated_at: now,
    };

    let model = ProjectRepository::new(db).create(&project).await?;

    Ok(model.into())
}

async fn ensure_name_available<C: ConnectionTrait>(
    db: &C,
    name: &str,
    exclude_id: Option<&str>,
) -> Result<(), Error> {
    if ProjectRepository::new(db)
        .find_by_name(name, exclude_id)
        .await?
        .is_some()
    {
        return Err(ValidationError::DuplicateName {
            entity: "Project",
            name: name.to_string(),
        }
        .into());
    }

    Ok(())
}
