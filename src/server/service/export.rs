//! Resolves a project or build into an SDB document and, through the codec, a `.bin` file.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        configuration::ResolvedConfiguration,
        equipment::{Equipment, EquipmentKind},
        mapping::{EquipmentType, MappingOwner},
    },
    server::{
        codec::ExternalCodec,
        data::{
            build::BuildRepository, mapping::MappingRepository, project::ProjectRepository,
            satellite::SatelliteRepository,
        },
        error::Error,
        sdb,
        service::{begin_read, equipment::EquipmentRecords, satellite::hydrate},
    },
};

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
    codec: &'a ExternalCodec,
}

impl<'a> ExportService<'a> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a DatabaseConnection, codec: &'a ExternalCodec) -> Self {
        Self { db, codec }
    }

    /// Hydrates every record mapped to `owner`, grouped by kind in mapping order.
    ///
    /// Mappings whose record no longer exists are skipped.
    ///
    /// # Returns
    /// - `Ok(ResolvedConfiguration)` - The owner's name and mapped records
    /// - `Err(Error::NotFound)` - The project or build does not exist
    pub async fn resolve(&self, owner: &MappingOwner) -> Result<ResolvedConfiguration, Error> {
        let txn = begin_read(self.db).await?;

        let name = owner_name(&txn, owner).await?;
        let mappings = MappingRepository::new(&txn).list_for_owner(owner).await?;

        let ids = |equipment_type: EquipmentType| -> Vec<String> {
            mappings
                .iter()
                .filter(|m| m.equipment_type == equipment_type.as_str())
                .map(|m| m.equipment_id.clone())
                .collect()
        };

        let records = EquipmentRecords::new(&txn);
        let mut config = ResolvedConfiguration {
            name,
            ..Default::default()
        };

        for record in records
            .get_many(EquipmentKind::Lnb, &ids(EquipmentType::Lnbs))
            .await?
        {
            if let Equipment::Lnb(lnb) = record {
                config.lnbs.push(lnb);
            }
        }
        for record in records
            .get_many(EquipmentKind::Switch, &ids(EquipmentType::Switches))
            .await?
        {
            if let Equipment::Switch(switch) = record {
                config.switches.push(switch);
            }
        }
        for record in records
            .get_many(EquipmentKind::Motor, &ids(EquipmentType::Motors))
            .await?
        {
            if let Equipment::Motor(motor) = record {
                config.motors.push(motor);
            }
        }
        for record in records
            .get_many(EquipmentKind::Unicable, &ids(EquipmentType::Unicables))
            .await?
        {
            if let Equipment::Unicable(unicable) = record {
                config.unicables.push(unicable);
            }
        }

        let satellite_ids = ids(EquipmentType::Satellites);
        let mut satellites = if satellite_ids.is_empty() {
            Vec::new()
        } else {
            let models = SatelliteRepository::new(&txn)
                .get_many(&satellite_ids)
                .await?;
            hydrate(&txn, models).await?
        };
        for id in &satellite_ids {
            match satellites.iter().position(|s| &s.id == id) {
                Some(index) => config.satellites.push(satellites.swap_remove(index)),
                None => tracing::warn!("Satellite {} no longer exists, skipping", id),
            }
        }

        txn.commit().await?;

        Ok(config)
    }

    /// Serializes the owner's mapped records. For builds the document is also cached on the
    /// build.
    pub async fn generate_xml(&self, owner: &MappingOwner) -> Result<String, Error> {
        let config = self.resolve(owner).await?;
        let xml = sdb::serialize(&config);

        if let MappingOwner::Build(id) = owner {
            BuildRepository::new(self.db).set_xml_data(id, &xml).await?;
        }

        tracing::info!(
            "Generated SDB document for {} {} ({} LNBs, {} switches, {} satellites)",
            owner.kind(),
            owner.id(),
            config.lnbs.len(),
            config.switches.len(),
            config.satellites.len()
        );

        Ok(xml)
    }

    /// Generates the owner's document and converts it with the codec's generator.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The `.bin` file contents
    /// - `Err(Error::NotFound)` - The project or build does not exist
    /// - `Err(Error::CodecError)` - The generator failed; the XML is still cached for builds
    pub async fn generate_bin(&self, owner: &MappingOwner) -> Result<Vec<u8>, Error> {
        let xml = self.generate_xml(owner).await?;

        Ok(self.codec.generate(&xml).await?)
    }
}

async fn owner_name<C: ConnectionTrait>(db: &C, owner: &MappingOwner) -> Result<String, Error> {
    let name = match owner {
        MappingOwner::Project(id) => ProjectRepository::new(db).get(id).await?.map(|p| p.name),
        MappingOwner::Build(id) => BuildRepository::new(db).get(id).await?.map(|b| b.name),
    };

    name.ok_or_else(|| match owner {
        MappingOwner::Project(id) => Error::not_found("Project", id.as_str()),
        MappingOwner::Build(id) => Error::not_found("Build", id.as_str()),
    })
}
