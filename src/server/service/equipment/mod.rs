//! Equipment service layer.
//!
//! Dispatches by [`EquipmentKind`] to the four equipment repositories, validates records before
//! any write, and runs the delete cascade (mappings and satellite assignments) in a transaction.

#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::equipment::{
        Equipment, EquipmentFields, EquipmentKind, Lnb, Switch, Unicable, UnicablePort,
        UnicableType, MAX_IF_SLOTS,
    },
    server::{
        data::{
            equipment::{
                lnb::LnbRepository, motor::MotorRepository, switch::SwitchRepository,
                unicable::UnicableRepository,
            },
            mapping::MappingRepository,
            satellite::SatelliteRepository,
        },
        error::{validation::ValidationError, Error},
        util::{id::generate_id, time::now},
    },
};

/// Service for equipment CRUD across all equipment kinds.
pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    /// Creates a new instance of [`EquipmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every record of `kind`, oldest first.
    pub async fn list(&self, kind: EquipmentKind) -> Result<Vec<Equipment>, Error> {
        EquipmentRecords::new(self.db).list(kind).await
    }

    pub async fn get(&self, kind: EquipmentKind, id: &str) -> Result<Option<Equipment>, Error> {
        EquipmentRecords::new(self.db).get(kind, id).await
    }

    /// Creates a record from an allow-listed patch.
    ///
    /// # Arguments
    /// - `fields` - Patch of the kind to create; absent fields are stored empty
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The stored record with its generated id
    /// - `Err(Error::ValidationError)` - Missing LNB name, duplicate LNB name or invalid values
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, fields: EquipmentFields) -> Result<Equipment, Error> {
        let record = new_record(fields, now())?;
        validate(&record)?;

        let txn = self.db.begin().await?;
        let records = EquipmentRecords::new(&txn);
        ensure_name_available(&records, &record, None).await?;

        let created = records.create(&record).await?;
        txn.commit().await?;
        tracing::info!("Created {} {}", created.kind().label(), created.id());

        Ok(created)
    }

    /// Merges a patch into an existing record and re-validates the result.
    ///
    /// # Arguments
    /// - `kind` - Kind of the record to update
    /// - `id` - Id of the record to update
    /// - `fields` - Patch; absent fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(Some(Equipment))` - The updated record
    /// - `Ok(None)` - No record of `kind` with `id` exists
    /// - `Err(Error::ValidationError)` - The patch is of another kind or the merged record is
    ///   invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        kind: EquipmentKind,
        id: &str,
        fields: EquipmentFields,
    ) -> Result<Option<Equipment>, Error> {
        let txn = self.db.begin().await?;
        let records = EquipmentRecords::new(&txn);

        let Some(mut record) = records.get(kind, id).await? else {
            return Ok(None);
        };

        record
            .apply(fields)
            .map_err(|fields| ValidationError::KindMismatch {
                expected: kind.label(),
                found: fields.kind().label(),
            })?;
        validate(&record)?;
        ensure_name_available(&records, &record, Some(id)).await?;

        record.set_updated_at(now());
        let updated = records.update(&record).await?;
        txn.commit().await?;
        if updated.is_some() {
            tracing::info!("Updated {} {}", kind.label(), id);
        }

        Ok(updated)
    }

    /// Deletes a record together with every mapping and satellite assignment referencing it.
    ///
    /// The cascade runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The record was deleted
    /// - `Ok(false)` - No record of `kind` with `id` exists
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, kind: EquipmentKind, id: &str) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let deleted = EquipmentRecords::new(&txn).delete(kind, id).await?;
        if !deleted {
            return Ok(false);
        }

        let mappings = MappingRepository::new(&txn)
            .delete_for_equipment(kind.into(), id)
            .await?;
        let satellites = SatelliteRepository::new(&txn)
            .detach_equipment(kind, id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted {} {} ({} mappings purged, detached from {} satellites)",
            kind.label(),
            id,
            mappings.rows_affected,
            satellites
        );

        Ok(true)
    }

    /// Whether a record of `kind` already uses `name`, compared case-insensitively.
    ///
    /// Always false for kinds identified by type rather than name.
    pub async fn exists_by_name(
        &self,
        kind: EquipmentKind,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, Error> {
        EquipmentRecords::new(self.db)
            .name_taken(kind, name, exclude_id)
            .await
    }
}

/// Builds an unsaved record of the patch's kind with a fresh id.
pub(crate) fn new_record(fields: EquipmentFields, now: NaiveDateTime) -> Result<Equipment, Error> {
    let kind = fields.kind();
    let mut record = Equipment::blank(kind, generate_id(), now);

    record.apply(fields).map_err(|fields| {
        Error::InternalError(format!(
            "Blank {} record rejected {} fields",
            kind.label(),
            fields.kind().label()
        ))
    })?;

    Ok(record)
}

/// Checks a complete record before it is written.
pub(crate) fn validate(record: &Equipment) -> Result<(), ValidationError> {
    match record {
        Equipment::Lnb(Lnb { name, .. }) => {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingField("name"));
            }
        }
        Equipment::Switch(Switch { switch_options, .. }) => {
            if let Some(option) = switch_options.iter().find(|option| option.contains(',')) {
                return Err(ValidationError::SwitchOptionContainsComma(option.clone()));
            }
        }
        Equipment::Motor(_) => {}
        Equipment::Unicable(Unicable {
            unicable_type,
            port,
            if_slots,
            ..
        }) => {
            if if_slots.len() > MAX_IF_SLOTS {
                return Err(ValidationError::TooManyIfSlots(if_slots.len()));
            }
            if let Some(port @ (UnicablePort::A | UnicablePort::B)) = port {
                if *unicable_type != Some(UnicableType::Dscr) {
                    return Err(ValidationError::PortRequiresDscr(port.to_string()));
                }
            }
        }
    }

    Ok(())
}

async fn ensure_name_available<C: ConnectionTrait>(
    records: &EquipmentRecords<'_, C>,
    record: &Equipment,
    exclude_id: Option<&str>,
) -> Result<(), Error> {
    if records
        .name_taken(record.kind(), record.name(), exclude_id)
        .await?
    {
        return Err(ValidationError::DuplicateName {
            entity: record.kind().label(),
            name: record.name().trim().to_string(),
        }
        .into());
    }

    Ok(())
}

/// Kind-dispatching access to the equipment repositories, converting rows into [`Equipment`].
pub(crate) struct EquipmentRecords<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRecords<'a, C> {
    pub(crate) fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub(crate) async fn list(&self, kind: EquipmentKind) -> Result<Vec<Equipment>, Error> {
        match kind {
            EquipmentKind::Lnb => Ok(LnbRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(|model| Equipment::Lnb(model.into()))
                .collect()),
            EquipmentKind::Switch => SwitchRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(|model| Switch::try_from(model).map(Equipment::Switch))
                .collect(),
            EquipmentKind::Motor => Ok(MotorRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(|model| Equipment::Motor(model.into()))
                .collect()),
            EquipmentKind::Unicable => UnicableRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(|model| Unicable::try_from(model).map(Equipment::Unicable))
                .collect(),
        }
    }

    pub(crate) async fn get(
        &self,
        kind: EquipmentKind,
        id: &str,
    ) -> Result<Option<Equipment>, Error> {
        Ok(match kind {
            EquipmentKind::Lnb => LnbRepository::new(self.db)
                .get(id)
                .await?
                .map(|model| Equipment::Lnb(model.into())),
            EquipmentKind::Switch => SwitchRepository::new(self.db)
                .get(id)
                .await?
                .map(Switch::try_from)
                .transpose()?
                .map(Equipment::Switch),
            EquipmentKind::Motor => MotorRepository::new(self.db)
                .get(id)
                .await?
                .map(|model| Equipment::Motor(model.into())),
            EquipmentKind::Unicable => UnicableRepository::new(self.db)
                .get(id)
                .await?
                .map(Unicable::try_from)
                .transpose()?
                .map(Equipment::Unicable),
        })
    }

    /// Records of `kind` in the order of `ids`; ids without a record are skipped.
    pub(crate) async fn get_many(
        &self,
        kind: EquipmentKind,
        ids: &[String],
    ) -> Result<Vec<Equipment>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut found: Vec<Equipment> = match kind {
            EquipmentKind::Lnb => LnbRepository::new(self.db)
                .get_many(ids)
                .await?
                .into_iter()
                .map(|model| Equipment::Lnb(model.into()))
                .collect(),
            EquipmentKind::Switch => SwitchRepository::new(self.db)
                .get_many(ids)
                .await?
                .into_iter()
                .map(|model| Switch::try_from(model).map(Equipment::Switch))
                .collect::<Result<_, _>>()?,
            EquipmentKind::Motor => MotorRepository::new(self.db)
                .get_many(ids)
                .await?
                .into_iter()
                .map(|model| Equipment::Motor(model.into()))
                .collect(),
            EquipmentKind::Unicable => UnicableRepository::new(self.db)
                .get_many(ids)
                .await?
                .into_iter()
                .map(|model| Unicable::try_from(model).map(Equipment::Unicable))
                .collect::<Result<_, _>>()?,
        };

        let mut ordered = Vec::with_capacity(found.len());
        for id in ids {
            match found.iter().position(|record| record.id() == id) {
                Some(index) => ordered.push(found.swap_remove(index)),
                None => tracing::warn!("{} {} no longer exists, skipping", kind.label(), id),
            }
        }

        Ok(ordered)
    }

    pub(crate) async fn create(&self, record: &Equipment) -> Result<Equipment, Error> {
        Ok(match record {
            Equipment::Lnb(lnb) => Equipment::Lnb(LnbRepository::new(self.db).create(lnb).await?.into()),
            Equipment::Switch(switch) => Equipment::Switch(Switch::try_from(
                SwitchRepository::new(self.db).create(switch).await?,
            )?),
            Equipment::Motor(motor) => {
                Equipment::Motor(MotorRepository::new(self.db).create(motor).await?.into())
            }
            Equipment::Unicable(unicable) => Equipment::Unicable(Unicable::try_from(
                UnicableRepository::new(self.db).create(unicable).await?,
            )?),
        })
    }

    pub(crate) async fn update(&self, record: &Equipment) -> Result<Option<Equipment>, Error> {
        Ok(match record {
            Equipment::Lnb(lnb) => LnbRepository::new(self.db)
                .update(lnb)
                .await?
                .map(|model| Equipment::Lnb(model.into())),
            Equipment::Switch(switch) => SwitchRepository::new(self.db)
                .update(switch)
                .await?
                .map(Switch::try_from)
                .transpose()?
                .map(Equipment::Switch),
            Equipment::Motor(motor) => MotorRepository::new(self.db)
                .update(motor)
                .await?
                .map(|model| Equipment::Motor(model.into())),
            Equipment::Unicable(unicable) => UnicableRepository::new(self.db)
                .update(unicable)
                .await?
                .map(Unicable::try_from)
                .transpose()?
                .map(Equipment::Unicable),
        })
    }

    /// Deletes the row only; returns whether a row was removed.
    pub(crate) async fn delete(&self, kind: EquipmentKind, id: &str) -> Result<bool, Error> {
        let result = match kind {
            EquipmentKind::Lnb => LnbRepository::new(self.db).delete(id).await?,
            EquipmentKind::Switch => SwitchRepository::new(self.db).delete(id).await?,
            EquipmentKind::Motor => MotorRepository::new(self.db).delete(id).await?,
            EquipmentKind::Unicable => UnicableRepository::new(self.db).delete(id).await?,
        };

        Ok(result.rows_affected > 0)
    }

    pub(crate) async fn name_taken(
        &self,
        kind: EquipmentKind,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, Error> {
        if !kind.is_named() || name.trim().is_empty() {
            return Ok(false);
        }

        let existing = LnbRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        Ok(existing.is_some())
    }
}
