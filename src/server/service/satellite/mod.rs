//! Satellite aggregate service.
//!
//! A satellite is stored as one row plus ordered carrier and service rows. Every write replaces
//! the carrier list as a whole inside a transaction, and reads hydrate the aggregate inside a
//! transaction, so a reader sees either the old or the new carrier set and never a mix.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        equipment::{Equipment, EquipmentKind, Lnb, Switch},
        mapping::EquipmentType,
        satellite::{Carrier, CarrierFields, EquipmentAssignment, Satellite, SatelliteFields, Service},
    },
    server::{
        data::{
            equipment::lnb::LnbRepository,
            mapping::MappingRepository,
            satellite::{
                carrier::CarrierRepository, service::ServiceRepository, SatelliteRepository,
            },
        },
        error::{validation::ValidationError, Error},
        model::db::{satellite_from_models, SatelliteModel, ServiceModel},
        service::{
            begin_read,
            equipment::EquipmentRecords,
            selection::{check_switch_combination, EquipmentSelection},
        },
        util::{id::generate_id, time::now},
    },
};

pub struct SatelliteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SatelliteService<'a> {
    /// Creates a new instance of [`SatelliteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every satellite with carriers and services, oldest satellite first.
    pub async fn list(&self) -> Result<Vec<Satellite>, Error> {
        let txn = begin_read(self.db).await?;

        let satellites = SatelliteRepository::new(&txn).list().await?;
        let satellites = hydrate(&txn, satellites).await?;

        txn.commit().await?;

        Ok(satellites)
    }

    /// Retrieves one satellite with carriers and services in insertion order.
    pub async fn get(&self, id: &str) -> Result<Option<Satellite>, Error> {
        let txn = begin_read(self.db).await?;

        let satellite = match SatelliteRepository::new(&txn).get(id).await? {
            Some(model) => hydrate(&txn, vec![model]).await?.pop(),
            None => None,
        };

        txn.commit().await?;

        Ok(satellite)
    }

    /// Creates a satellite with its carriers and services.
    ///
    /// Carrier and service ids in `fields` are ignored, every nested record gets a new id.
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The stored aggregate
    /// - `Err(Error::ValidationError)` - Missing or duplicate name, unknown assigned equipment
    ///   or an invalid switch combination
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create(&self, fields: SatelliteFields) -> Result<Satellite, Error> {
        let txn = self.db.begin().await?;

        let satellite = insert_satellite(&txn, fields).await?;

        txn.commit().await?;

        tracing::info!(
            "Created satellite {} with {} carriers",
            satellite.id,
            satellite.carriers.len()
        );

        Ok(satellite)
    }

    /// Replaces a satellite's fields, equipment assignment and complete carrier list.
    ///
    /// Services of the existing carriers are deleted, then the carriers, then the new carriers
    /// and services are inserted, all in one transaction. Supplied carrier and service ids are
    /// kept when they belonged to this satellite before the update.
    ///
    /// # Returns
    /// - `Ok(Some(Satellite))` - The stored aggregate after the update
    /// - `Ok(None)` - No satellite with `id` exists
    /// - `Err(Error::ValidationError)` - Invalid fields, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn update(
        &self,
        id: &str,
        fields: SatelliteFields,
    ) -> Result<Option<Satellite>, Error> {
        validate(&fields)?;
        let assignment = normalize(fields.assignment());

        let txn = self.db.begin().await?;

        let Some(existing) = SatelliteRepository::new(&txn).get(id).await? else {
            return Ok(None);
        };

        ensure_name_available(&txn, &fields.name, Some(id)).await?;
        check_assignment(&txn, &assignment).await?;

        let mut ids = delete_carriers(&txn, id).await?;

        let now = now();
        let satellite = satellite_record(
            id.to_string(),
            fields,
            assignment,
            &mut ids,
            existing.created_at,
            now,
        );

        SatelliteRepository::new(&txn).update(&satellite).await?;
        insert_carriers(&txn, &satellite, now).await?;

        txn.commit().await?;

        tracing::info!(
            "Updated satellite {} with {} carriers",
            satellite.id,
            satellite.carriers.len()
        );

        Ok(Some(satellite))
    }

    /// Deletes a satellite with its carriers, services and every mapping referencing it.
    ///
    /// # Returns
    /// - `Ok(true)` - The satellite was deleted
    /// - `Ok(false)` - No satellite with `id` exists
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        if SatelliteRepository::new(&txn).get(id).await?.is_none() {
            return Ok(false);
        }

        delete_carriers(&txn, id).await?;
        SatelliteRepository::new(&txn).delete(id).await?;
        let mappings = MappingRepository::new(&txn)
            .delete_for_equipment(EquipmentType::Satellites, id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted satellite {} ({} mappings purged)",
            id,
            mappings.rows_affected
        );

        Ok(true)
    }

    /// Whether another satellite already uses `name`, compared case-insensitively.
    pub async fn exists_by_name(&self, name: &str, exclude_id: Option<&str>) -> Result<bool, Error> {
        if name.trim().is_empty() {
            return Ok(false);
        }

        let existing = SatelliteRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        Ok(existing.is_some())
    }

    /// Saves the outcome of an equipment selection onto a satellite.
    ///
    /// # Arguments
    /// - `id` - Satellite to assign equipment to
    /// - `assignment` - LNB, switches, motor and unicable to store; `None` clears a slot
    ///
    /// # Returns
    /// - `Ok(Some(Satellite))` - The satellite after the assignment
    /// - `Ok(None)` - No satellite with `id` exists
    /// - `Err(Error::ValidationError)` - Unknown equipment or more than one Tone Burst or
    ///   DiSEqC switch
    pub async fn assign_equipment(
        &self,
        id: &str,
        assignment: EquipmentAssignment,
    ) -> Result<Option<Satellite>, Error> {
        let assignment = normalize(assignment);

        let txn = self.db.begin().await?;
        let repository = SatelliteRepository::new(&txn);

        let Some(model) = repository.get(id).await? else {
            return Ok(None);
        };

        check_assignment(&txn, &assignment).await?;

        let mut satellite = satellite_from_models(model, vec![]);
        satellite.mapped_lnb = assignment.lnb_id;
        satellite.mapped_switch = assignment.switch_ids;
        satellite.mapped_motor = assignment.motor_id;
        satellite.mapped_unicable = assignment.unicable_id;
        satellite.updated_at = now();

        let Some(model) = repository.update(&satellite).await? else {
            return Ok(None);
        };
        let satellite = hydrate(&txn, vec![model]).await?.pop();

        txn.commit().await?;

        tracing::info!("Assigned equipment to satellite {}", id);

        Ok(satellite)
    }

    /// Seeds an equipment selection from the stored satellite, see
    /// [`EquipmentSelection::from_satellite`].
    ///
    /// # Returns
    /// - `Ok(EquipmentSelection)` - Stored assignment with the first-LNB fallback applied
    /// - `Err(Error::NotFound)` - No satellite with `id` exists
    pub async fn selection(&self, id: &str) -> Result<EquipmentSelection, Error> {
        let satellite = self
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Satellite", id))?;
        let lnbs: Vec<Lnb> = LnbRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(Lnb::from)
            .collect();

        Ok(EquipmentSelection::from_satellite(&satellite, &lnbs))
    }

    /// The LNB used for a satellite: its stored LNB, or the first LNB in list order.
    ///
    /// # Returns
    /// - `Ok(Some(Lnb))` - The effective LNB
    /// - `Ok(None)` - The satellite has no LNB and no LNB exists
    /// - `Err(Error::NotFound)` - No satellite with `id` exists
    pub async fn effective_lnb(&self, id: &str) -> Result<Option<Lnb>, Error> {
        let selection = self.selection(id).await?;

        let Some(lnb_id) = selection.assignment().lnb_id.as_deref() else {
            return Ok(None);
        };

        Ok(LnbRepository::new(self.db).get(lnb_id).await?.map(Lnb::from))
    }
}

/// Validates and inserts a new satellite aggregate on `db`, which is expected to be a
/// transaction.
pub(crate) async fn insert_satellite<C: ConnectionTrait>(
    db: &C,
    fields: SatelliteFields,
) -> Result<Satellite, Error> {
    validate(&fields)?;
    let assignment = normalize(fields.assignment());

    ensure_name_available(db, &fields.name, None).await?;
    check_assignment(db, &assignment).await?;

    let now = now();
    let mut ids = IdAllocator::default();
    let satellite = satellite_record(generate_id(), fields, assignment, &mut ids, now, now);

    SatelliteRepository::new(db).create(&satellite).await?;
    insert_carriers(db, &satellite, now).await?;

    Ok(satellite)
}

/// Hydrates satellite rows with their carriers and services, keeping the order of `satellites`.
pub(crate) async fn hydrate<C: ConnectionTrait>(
    db: &C,
    satellites: Vec<SatelliteModel>,
) -> Result<Vec<Satellite>, Error> {
    if satellites.is_empty() {
        return Ok(Vec::new());
    }

    let satellite_ids: Vec<String> = satellites.iter().map(|s| s.id.clone()).collect();
    let carriers = CarrierRepository::new(db)
        .list_for_satellites(&satellite_ids)
        .await?;

    let carrier_ids: Vec<String> = carriers.iter().map(|c| c.id.clone()).collect();
    let services = if carrier_ids.is_empty() {
        Vec::new()
    } else {
        ServiceRepository::new(db)
            .list_for_carriers(&carrier_ids)
            .await?
    };

    let mut services_by_carrier: HashMap<String, Vec<ServiceModel>> = HashMap::new();
    for service in services {
        services_by_carrier
            .entry(service.carrier_id.clone())
            .or_default()
            .push(service);
    }

    let mut carriers_by_satellite: HashMap<String, Vec<_>> = HashMap::new();
    for carrier in carriers {
        let services = services_by_carrier.remove(&carrier.id).unwrap_or_default();
        carriers_by_satellite
            .entry(carrier.satellite_id.clone())
            .or_default()
            .push((carrier, services));
    }

    Ok(satellites
        .into_iter()
        .map(|satellite| {
            let carriers = carriers_by_satellite
                .remove(&satellite.id)
                .unwrap_or_default();
            satellite_from_models(satellite, carriers)
        })
        .collect())
}

fn validate(fields: &SatelliteFields) -> Result<(), ValidationError> {
    if fields.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }

    Ok(())
}

/// Drops blank ids and repeated switches, keeping the first occurrence.
fn normalize(assignment: EquipmentAssignment) -> EquipmentAssignment {
    let present = |id: Option<String>| id.filter(|id| !id.trim().is_empty());

    let mut switch_ids: Vec<String> = Vec::new();
    for id in assignment.switch_ids {
        if !id.trim().is_empty() && !switch_ids.contains(&id) {
            switch_ids.push(id);
        }
    }

    EquipmentAssignment {
        lnb_id: present(assignment.lnb_id),
        switch_ids,
        motor_id: present(assignment.motor_id),
        unicable_id: present(assignment.unicable_id),
    }
}

async fn ensure_name_available<C: ConnectionTrait>(
    db: &C,
    name: &str,
    exclude_id: Option<&str>,
) -> Result<(), Error> {
    if SatelliteRepository::new(db)
        .find_by_name(name, exclude_id)
        .await?
        .is_some()
    {
        return Err(ValidationError::DuplicateName {
            entity: "Satellite",
            name: name.trim().to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that assigned equipment exists and that the switches form a valid combination.
async fn check_assignment<C: ConnectionTrait>(
    db: &C,
    assignment: &EquipmentAssignment,
) -> Result<(), Error> {
    let records = EquipmentRecords::new(db);

    let singles = [
        (EquipmentKind::Lnb, &assignment.lnb_id),
        (EquipmentKind::Motor, &assignment.motor_id),
        (EquipmentKind::Unicable, &assignment.unicable_id),
    ];
    for (kind, id) in singles {
        if let Some(id) = id {
            if records.get(kind, id).await?.is_none() {
                return Err(unknown_equipment(kind, id));
            }
        }
    }

    let switches: Vec<Switch> = records
        .get_many(EquipmentKind::Switch, &assignment.switch_ids)
        .await?
        .into_iter()
        .filter_map(|record| match record {
            Equipment::Switch(switch) => Some(switch),
            _ => None,
        })
        .collect();

    if let Some(missing) = assignment
        .switch_ids
        .iter()
        .find(|id| !switches.iter().any(|switch| &switch.id == *id))
    {
        return Err(unknown_equipment(EquipmentKind::Switch, missing));
    }

    check_switch_combination(&switches)?;

    Ok(())
}

fn unknown_equipment(kind: EquipmentKind, id: &str) -> Error {
    ValidationError::UnknownEquipment {
        kind: kind.label(),
        id: id.to_string(),
    }
    .into()
}

/// Deletes a satellite's services and carriers, returning their ids for reuse.
async fn delete_carriers<C: ConnectionTrait>(db: &C, satellite_id: &str) -> Result<IdAllocator, Error> {
    let carriers = CarrierRepository::new(db)
        .list_for_satellites(&[satellite_id.to_string()])
        .await?;
    let carrier_ids: Vec<String> = carriers.into_iter().map(|c| c.id).collect();

    let mut reusable: HashSet<String> = carrier_ids.iter().cloned().collect();

    if !carrier_ids.is_empty() {
        let services = ServiceRepository::new(db);
        reusable.extend(
            services
                .list_for_carriers(&carrier_ids)
                .await?
                .into_iter()
                .map(|s| s.id),
        );
        let deleted_services = services.delete_for_carriers(&carrier_ids).await?;
        let deleted_carriers = CarrierRepository::new(db)
            .delete_for_satellite(satellite_id)
            .await?;

        tracing::debug!(
            "Removed {} carriers and {} services of satellite {}",
            deleted_carriers.rows_affected,
            deleted_services.rows_affected,
            satellite_id
        );
    }

    Ok(IdAllocator {
        reusable,
        used: HashSet::new(),
    })
}

async fn insert_carriers<C: ConnectionTrait>(
    db: &C,
    satellite: &Satellite,
    now: NaiveDateTime,
) -> Result<(), Error> {
    let carriers = CarrierRepository::new(db);
    let services = ServiceRepository::new(db);

    for (position, carrier) in (0..).zip(&satellite.carriers) {
        carriers.create(&satellite.id, position, carrier, now).await?;

        for (position, service) in (0..).zip(&carrier.services) {
            services.create(&carrier.id, position, service, now).await?;
        }
    }

    Ok(())
}

/// Hands out nested record ids, reusing ids of the records being replaced.
#[derive(Default)]
struct IdAllocator {
    reusable: HashSet<String>,
    used: HashSet<String>,
}

impl IdAllocator {
    fn assign(&mut self, requested: Option<String>) -> String {
        let id = match requested {
            Some(id) if self.reusable.contains(&id) && !self.used.contains(&id) => id,
            _ => generate_id(),
        };
        self.used.insert(id.clone());

        id
    }
}

fn satellite_record(
    id: String,
    fields: SatelliteFields,
    assignment: EquipmentAssignment,
    ids: &mut IdAllocator,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
) -> Satellite {
    Satellite {
        id,
        name: fields.name.trim().to_string(),
        position: fields.position,
        age: fields.age,
        direction: fields.direction,
        mapped_lnb: assignment.lnb_id,
        mapped_switch: assignment.switch_ids,
        mapped_motor: assignment.motor_id,
        mapped_unicable: assignment.unicable_id,
        carriers: fields
            .carriers
            .into_iter()
            .map(|carrier| carrier_record(carrier, ids))
            .collect(),
        created_at,
        updated_at,
    }
}

fn carrier_record(fields: CarrierFields, ids: &mut IdAllocator) -> Carrier {
    Carrier {
        id: ids.assign(fields.id),
        name: fields.name,
        frequency: fields.frequency,
        polarization: fields.polarization,
        symbol_rate: fields.symbol_rate,
        fec: fields.fec,
        fec_mode: fields.fec_mode,
        factory_default: fields.factory_default,
        services: fields
            .services
            .into_iter()
            .map(|service| Service {
                id: ids.assign(service.id),
                name: service.name,
                frequency: service.frequency,
                video_pid: service.video_pid,
                audio_pid: service.audio_pid,
                pcr_pid: service.pcr_pid,
                program_number: service.program_number,
                fav_group: service.fav_group,
                factory_default: service.factory_default,
                preference: service.preference,
                scramble: service.scramble,
            })
            .collect(),
    }
}
