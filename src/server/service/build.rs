//! Builds: independent mapping snapshots owned by a project.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        mapping::OwnerKind,
        project::{Build, CreateBuildDto, UpdateBuildDto},
    },
    server::{
        data::{build::BuildRepository, mapping::MappingRepository, project::ProjectRepository},
        error::{validation::ValidationError, Error},
        util::{id::generate_id, time::now},
    },
};

pub struct BuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuildService<'a> {
    /// Creates a new instance of [`BuildService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the builds of a project, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Build>)` - The project's builds
    /// - `Err(Error::NotFound)` - No project with `project_id` exists
    pub async fn list_for_project(&self, project_id: &str) -> Result<Vec<Build>, Error> {
        if ProjectRepository::new(self.db)
            .get(project_id)
            .await?
            .is_none()
        {
            return Err(Error::not_found("Project", project_id));
        }

        let builds = BuildRepository::new(self.db)
            .list_for_project(project_id)
            .await?;

        Ok(builds.into_iter().map(Build::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Build>, Error> {
        let build = BuildRepository::new(self.db).get(id).await?;

        Ok(build.map(Build::from))
    }

    /// Creates a build under an existing project.
    ///
    /// # Returns
    /// - `Ok(Build)` - The stored build, without cached XML
    /// - `Err(Error::ValidationError)` - Missing name
    /// - `Err(Error::NotFound)` - The project does not exist
    pub async fn create(&self, dto: CreateBuildDto) -> Result<Build, Error> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        if ProjectRepository::new(self.db)
            .get(&dto.project_id)
            .await?
            .is_none()
        {
            return Err(Error::not_found("Project", dto.project_id));
        }

        let now = now();
        let build = Build {
            id: generate_id(),
            project_id: dto.project_id,
            name,
            description: dto.description,
            xml_data: None,
            created_by: dto.created_by,
            created_at: now,
            updated_at: now,
        };

        let build = Build::from(BuildRepository::new(self.db).create(&build).await?);

        tracing::info!("Created build {} for project {}", build.id, build.project_id);

        Ok(build)
    }

    /// Changes a build's name, description or cached XML.
    ///
    /// # Returns
    /// - `Ok(Some(Build))` - The updated build
    /// - `Ok(None)` - No build with `id` exists
    /// - `Err(Error::ValidationError)` - Blank name
    pub async fn update(&self, id: &str, dto: UpdateBuildDto) -> Result<Option<Build>, Error> {
        let repository = BuildRepository::new(self.db);

        let Some(model) = repository.get(id).await? else {
            return Ok(None);
        };

        let mut build = Build::from(model);
        if let Some(name) = dto.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::MissingField("name").into());
            }
            build.name = name;
        }
        if let Some(description) = dto.description {
            build.description = description;
        }
        if dto.xml_data.is_some() {
            build.xml_data = dto.xml_data;
        }
        build.updated_at = now();

        let updated = repository.update(&build).await?;

        Ok(updated.map(Build::from))
    }

    /// Deletes a build and every mapping it owns in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The build was deleted
    /// - `Ok(false)` - No build with `id` exists
    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let mappings = MappingRepository::new(&txn)
            .delete_for_owners(OwnerKind::Build, &[id.to_string()])
            .await?;
        let result = BuildRepository::new(&txn).delete(id).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted build {} ({} mappings purged)",
            id,
            mappings.rows_affected
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use sdb_test_utils::prelude::*;

    use crate::{
        model::{
            mapping::MappingOwner,
            project::{CreateBuildDto, UpdateBuildDto},
        },
        server::{
            error::Error,
            service::{build::BuildService, mapping::MappingService},
        },
    };

    fn create_dto(project_id: &str, name: &str) -> CreateBuildDto {
        CreateBuildDto {
            project_id: project_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            created_by: "installer".to_string(),
        }
    }

    /// Expect builds to be listed newest first
    #[tokio::test]
    async fn lists_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;
        test.project().insert_build(&project.id, "v1").await?;
        test.project().insert_build(&project.id, "v2").await?;

        let service = BuildService::new(&test.db);
        let names: Vec<_> = service
            .list_for_project(&project.id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["v2", "v1"]);

        Ok(())
    }

    /// Expect NotFound when the project does not exist
    #[tokio::test]
    async fn create_requires_project() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;

        let service = BuildService::new(&test.db);
        let result = service.create(create_dto("missing", "v1")).await;

        assert!(matches!(result, Err(Error::NotFound { .. })));

        Ok(())
    }

    /// Expect a blank name to be rejected before the project lookup
    #[tokio::test]
    async fn create_requires_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;

        let service = BuildService::new(&test.db);
        let result = service.create(create_dto(&project.id, "  ")).await;

        assert!(matches!(result, Err(Error::ValidationError(_))));

        Ok(())
    }

    /// Expect the cached XML to be stored through update
    #[tokio::test]
    async fn updates_xml_data() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;

        let service = BuildService::new(&test.db);
        let build = service.create(create_dto(&project.id, "v1")).await.unwrap();
        let updated = service
            .update(
                &build.id,
                UpdateBuildDto {
                    xml_data: Some("<SDB/>".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "v1");
        assert_eq!(updated.xml_data.as_deref(), Some("<SDB/>"));

        Ok(())
    }

    /// Expect deleting a build to purge its mappings
    #[tokio::test]
    async fn delete_purges_mappings() -> Result<(), TestError> {
        let test = TestBuilder::new().with_project_tables().build().await?;
        let project = test.project().insert_project("Rooftop").await?;
        let build = test.project().insert_build(&project.id, "v1").await?;
        test.project()
            .insert_mapping("build", &build.id, "lnbs", "l-1", 0)
            .await?;
        test.project()
            .insert_mapping("project", &project.id, "lnbs", "l-1", 0)
            .await?;

        let service = BuildService::new(&test.db);

        assert!(service.delete(&build.id).await.unwrap());
        assert!(!service.delete(&build.id).await.unwrap());

        let remaining = MappingService::new(&test.db)
            .list_for_owner(&MappingOwner::Project(project.id.clone()))
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);

        Ok(())
    }
}
