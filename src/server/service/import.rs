//! Turns SDB documents and `.bin` files into stored projects.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        configuration::{ImportProjectDto, ParsedConfiguration},
        equipment::{EquipmentFields, EquipmentKind},
        mapping::{EquipmentType, MappingOwner},
        project::{CreateProjectDto, Project},
    },
    server::{
        codec::ExternalCodec,
        data::satellite::SatelliteRepository,
        error::Error,
        sdb,
        service::{
            equipment::{new_record, validate, EquipmentRecords},
            mapping::add_mapping,
            project::insert_project,
            satellite::insert_satellite,
        },
        util::time::now,
    },
};

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    codec: &'a ExternalCodec,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection, codec: &'a ExternalCodec) -> Self {
        Self { db, codec }
    }

    /// Reads an SDB document without storing anything.
    pub fn parse_xml(&self, xml: &str) -> Result<ParsedConfiguration, Error> {
        Ok(sdb::deserialize(xml)?)
    }

    /// Converts a `.bin` file with the codec's parser and reads the resulting document.
    ///
    /// # Returns
    /// - `Ok(ParsedConfiguration)` - Records read from the file, nothing is stored
    /// - `Err(Error::CodecError)` - The parser is missing, failed or timed out
    /// - `Err(Error::SdbError)` - The parser produced XML that cannot be read
    pub async fn parse_bin(&self, bin: &[u8]) -> Result<ParsedConfiguration, Error> {
        let xml = self.codec.parse(bin).await?;

        self.parse_xml(&xml)
    }

    /// Stores a parsed configuration as a new project.
    ///
    /// The project, every equipment record, every satellite with its carriers and services,
    /// and a project mapping per created record are written in one transaction, mappings in
    /// document order. Imported LNB and satellite names that are already taken get a ` (n)`
    /// suffix.
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project
    /// - `Err(Error::ValidationError)` - Missing or duplicate project name, or an invalid
    ///   record; nothing was stored
    pub async fn create_project(&self, dto: ImportProjectDto) -> Result<Project, Error> {
        let ImportProjectDto {
            name,
            description,
            created_by,
            configuration,
        } = dto;
        let name = if name.trim().is_empty() {
            configuration.name.clone()
        } else {
            name
        };

        let txn = self.db.begin().await?;

        let project = insert_project(
            &txn,
            CreateProjectDto {
                name,
                description,
                created_by,
            },
        )
        .await?;
        let owner = MappingOwner::Project(project.id.clone());

        let equipment = configuration
            .lnbs
            .into_iter()
            .map(EquipmentFields::Lnb)
            .chain(configuration.switches.into_iter().map(EquipmentFields::Switch))
            .chain(configuration.motors.into_iter().map(EquipmentFields::Motor))
            .chain(configuration.unicables.into_iter().map(EquipmentFields::Unicable));

        let mut equipment_count = 0;
        for fields in equipment {
            let fields = rename_if_taken(&txn, fields).await?;
            let record = new_record(fields, now())?;
            validate(&record)?;

            let created = EquipmentRecords::new(&txn).create(&record).await?;
            add_mapping(&txn, &owner, created.kind().into(), created.id()).await?;
            equipment_count += 1;
        }

        let satellite_count = configuration.satellites.len();
        for mut fields in configuration.satellites {
            fields.name = available_satellite_name(&txn, &fields.name).await?;

            let satellite = insert_satellite(&txn, fields).await?;
            add_mapping(&txn, &owner, EquipmentType::Satellites, &satellite.id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Imported project {} ({}) with {} equipment records and {} satellites",
            project.id,
            project.name,
            equipment_count,
            satellite_count
        );

        Ok(project)
    }
}

/// Appends ` (2)`, ` (3)`, ... to an imported LNB name until it is free.
async fn rename_if_taken<C: ConnectionTrait>(
    db: &C,
    fields: EquipmentFields,
) -> Result<EquipmentFields, Error> {
    let EquipmentFields::Lnb(mut lnb) = fields else {
        return Ok(fields);
    };

    let records = EquipmentRecords::new(db);
    if let Some(base) = lnb.name.clone() {
        let mut candidate = base.trim().to_string();
        let mut suffix = 2;
        while records
            .name_taken(EquipmentKind::Lnb, &candidate, None)
            .await?
        {
            candidate = format!("{} ({})", base.trim(), suffix);
            suffix += 1;
        }
        lnb.name = Some(candidate);
    }

    Ok(EquipmentFields::Lnb(lnb))
}

async fn available_satellite_name<C: ConnectionTrait>(db: &C, base: &str) -> Result<String, Error> {
    let repository = SatelliteRepository::new(db);
    let base = base.trim();

    let mut candidate = base.to_string();
    let mut suffix = 2;
    while !candidate.is_empty() && repository.find_by_name(&candidate, None).await?.is_some() {
        candidate = format!("{} ({})", base, suffix);
        suffix += 1;
    }

    Ok(candidate)
}
