//! Project, build and mapping row insertion.

use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{BuildModel, MappingModel, ProjectModel},
    TestContext,
};

impl TestContext {
    pub fn project<'a>(&'a self) -> ProjectFixtures<'a> {
        ProjectFixtures { setup: self }
    }
}

pub struct ProjectFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ProjectFixtures<'a> {
    pub async fn insert_project(&self, name: &str) -> Result<ProjectModel, TestError> {
        Ok(factory::project_model(name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_build(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<BuildModel, TestError> {
        Ok(factory::build_model(project_id, name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a mapping row, see [`factory::mapping_model`] for the accepted values.
    ///
    /// Mapping rows carry no foreign keys, owner and equipment need not exist.
    pub async fn insert_mapping(
        &self,
        owner_kind: &str,
        owner_id: &str,
        equipment_type: &str,
        equipment_id: &str,
        position: i32,
    ) -> Result<MappingModel, TestError> {
        Ok(factory::mapping_model(
            owner_kind,
            owner_id,
            equipment_type,
            equipment_id,
            position,
        )
        .into_active_model()
        .reset_all()
        .insert(&self.setup.db)
        .await?)
    }
}
