//! Project and build equipment mappings.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        equipment::EquipmentKind,
        mapping::{EquipmentType, Mapping, MappingOwner},
    },
    server::{
        data::{
            build::BuildRepository, mapping::MappingRepository, project::ProjectRepository,
            satellite::SatelliteRepository,
        },
        error::{validation::ValidationError, Error},
        service::equipment::EquipmentRecords,
        util::{id::generate_id, time::now},
    },
};

pub struct MappingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MappingService<'a> {
    /// Creates a new instance of [`MappingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists an owner's mappings in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Mapping>)` - Mappings of the owner, empty if it has none
    /// - `Err(Error::NotFound)` - The project or build does not exist
    pub async fn list_for_owner(&self, owner: &MappingOwner) -> Result<Vec<Mapping>, Error> {
        ensure_owner_exists(self.db, owner).await?;

        MappingRepository::new(self.db)
            .list_for_owner(owner)
            .await?
            .into_iter()
            .map(Mapping::try_from)
            .collect()
    }

    /// Maps equipment to an owner. Mapping the same equipment twice is a no-op.
    ///
    /// # Arguments
    /// - `owner` - Project or build to map the equipment to
    /// - `equipment_type` - Equipment group of the record
    /// - `equipment_id` - Id of the record to map
    ///
    /// # Returns
    /// - `Ok(true)` - The mapping was added
    /// - `Ok(false)` - The mapping already existed
    /// - `Err(Error::NotFound)` - The project or build does not exist
    /// - `Err(Error::ValidationError)` - The equipment does not exist
    pub async fn add(
        &self,
        owner: &MappingOwner,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        ensure_owner_exists(&txn, owner).await?;
        ensure_equipment_exists(&txn, equipment_type, equipment_id).await?;

        let added = add_mapping(&txn, owner, equipment_type, equipment_id).await?;

        txn.commit().await?;

        if added {
            tracing::info!(
                "Mapped {} {} to {} {}",
                equipment_type,
                equipment_id,
                owner.kind(),
                owner.id()
            );
        }

        Ok(added)
    }

    /// Removes one mapping.
    ///
    /// # Returns
    /// - `Ok(true)` - The mapping was removed
    /// - `Ok(false)` - No such mapping exists
    pub async fn remove(
        &self,
        owner: &MappingOwner,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<bool, Error> {
        let result = MappingRepository::new(self.db)
            .delete(owner, equipment_type, equipment_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every mapping of the equipment, for any owner. Returns the number removed.
    pub async fn purge_equipment(
        &self,
        equipment_type: EquipmentType,
        equipment_id: &str,
    ) -> Result<u64, Error> {
        let result = MappingRepository::new(self.db)
            .delete_for_equipment(equipment_type, equipment_id)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every mapping owned by `owner`. Returns the number removed.
    pub async fn purge_owner(&self, owner: &MappingOwner) -> Result<u64, Error> {
        let result = MappingRepository::new(self.db)
            .delete_for_owners(owner.kind(), &[owner.id().to_string()])
            .await?;

        Ok(result.rows_affected)
    }
}

/// Inserts a mapping after the owner's latest one unless it already exists.
///
/// A concurrent add of the same tuple loses on the unique index and reports `false`.
pub(crate) async fn add_mapping<C: ConnectionTrait>(
    db: &C,
    owner: &MappingOwner,
    equipment_type: EquipmentType,
    equipment_id: &str,
) -> Result<bool, Error> {
    let repository = MappingRepository::new(db);

    if repository
        .find(owner, equipment_type, equipment_id)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let position = repository.next_position(owner).await?;
    let added = repository
        .create(
            owner,
            equipment_type,
            equipment_id,
            position,
            generate_id(),
            now(),
        )
        .await?;

    Ok(added)
}

pub(crate) async fn ensure_owner_exists<C: ConnectionTrait>(
    db: &C,
    owner: &MappingOwner,
) -> Result<(), Error> {
    let exists = match owner {
        MappingOwner::Project(id) => ProjectRepository::new(db).get(id).await?.is_some(),
        MappingOwner::Build(id) => BuildRepository::new(db).get(id).await?.is_some(),
    };

    if !exists {
        let entity = match owner {
            MappingOwner::Project(_) => "Project",
            MappingOwner::Build(_) => "Build",
        };
        return Err(Error::not_found(entity, owner.id()));
    }

    Ok(())
}

async fn ensure_equipment_exists<C: ConnectionTrait>(
    db: &C,
    equipment_type: EquipmentType,
    equipment_id: &str,
) -> Result<(), Error> {
    let (label, exists) = match equipment_kind(equipment_type) {
        Some(kind) => (
            kind.label(),
            EquipmentRecords::new(db)
                .get(kind, equipment_id)
                .await?
                .is_some(),
        ),
        None => (
            "Satellite",
            SatelliteRepository::new(db)
                .get(equipment_id)
                .await?
                .is_some(),
        ),
    };

    if !exists {
        return Err(ValidationError::UnknownEquipment {
            kind: label,
            id: equipment_id.to_string(),
        }
        .into());
    }

    Ok(())
}

/// The equipment kind behind a mapping type; `None` for satellites.
pub(crate) fn equipment_kind(equipment_type: EquipmentType) -> Option<EquipmentKind> {
    match equipment_type {
        EquipmentType::Lnbs => Some(EquipmentKind::Lnb),
        EquipmentType::Switches => Some(EquipmentKind::Switch),
        EquipmentType::Motors => Some(EquipmentKind::Motor),
        EquipmentType::Unicables => Some(EquipmentKind::Unicable),
        EquipmentType::Satellites => None,
    }
}
