use sdb_test_utils::prelude::*;
use sdb_tool::{
    model::mapping::{EquipmentType, MappingOwner},
    server::service::{mapping::MappingService, project::ProjectService},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::setup;

/// Expect deleting a project to remove its builds and the mappings of both
#[tokio::test]
async fn delete_cascades_to_builds_and_mappings() -> Result<(), TestError> {
    let test = setup().await?;
    let lnb = test.equipment().insert_lnb("Universal").await?;
    let project = test.project().insert_project("Rooftop").await?;
    let kept = test.project().insert_project("Balcony").await?;
    let builds = [
        test.project().insert_build(&project.id, "v1").await?,
        test.project().insert_build(&project.id, "v2").await?,
    ];

    let mappings = MappingService::new(&test.db);
    mappings
        .add(&MappingOwner::Project(project.id.clone()), EquipmentType::Lnbs, &lnb.id)
        .await
        .unwrap();
    mappings
        .add(&MappingOwner::Project(kept.id.clone()), EquipmentType::Lnbs, &lnb.id)
        .await
        .unwrap();
    for build in &builds {
        mappings
            .add(&MappingOwner::Build(build.id.clone()), EquipmentType::Lnbs, &lnb.id)
            .await
            .unwrap();
    }

    assert!(ProjectService::new(&test.db).delete(&project.id).await.unwrap());

    assert_eq!(entity::prelude::ProjectBuild::find().count(&test.db).await?, 0);
    assert_eq!(
        entity::prelude::EquipmentMapping::find().count(&test.db).await?,
        1
    );
    let remaining = mappings
        .list_for_owner(&MappingOwner::Project(kept.id))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);

    Ok(())
}
