use sea_orm::{EntityTrait, PaginatorTrait};

use crate::model::mapping::MappingOwner;
use crate::server::data::mapping::MappingRepository;

use super::*;

/// Expect carriers, services and mappings of the satellite to be removed
#[tokio::test]
async fn cascades_to_carriers_services_and_mappings() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let created = service.create(astra()).await.unwrap();
    let kept = service
        .create(SatelliteFields {
            name: "HOTBIRD".to_string(),
            carriers: vec![carrier("RAI", &["RAI-1"])],
            ..Default::default()
        })
        .await
        .unwrap();
    test.project()
        .insert_mapping("project", "p-1", "satellites", &created.id, 0)
        .await?;

    let result = service.delete(&created.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(service.get(&created.id).await.unwrap().is_none());
    assert_eq!(
        entity::prelude::SatelliteCarrier::find().count(&test.db).await?,
        1
    );
    assert_eq!(
        entity::prelude::CarrierService::find().count(&test.db).await?,
        1
    );
    let mappings = MappingRepository::new(&test.db)
        .list_for_owner(&MappingOwner::Project("p-1".to_string()))
        .await?;
    assert!(mappings.is_empty());
    assert!(service.get(&kept.id).await.unwrap().is_some());

    Ok(())
}

/// Expect Ok(false) for a missing satellite
#[tokio::test]
async fn returns_false_for_missing_satellite() -> Result<(), TestError> {
    let test = setup().await?;

    let service = SatelliteService::new(&test.db);
    let result = service.delete("missing").await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}
