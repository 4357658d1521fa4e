//! Database model type aliases and conversions into domain models.
//!
//! Enumerated columns are stored as their wire strings with `""` meaning "not set". A stored
//! value that no longer parses is logged and read back as unset rather than failing the read.

use std::str::FromStr;

use crate::{
    model::{
        activity::Activity,
        equipment::{IfSlot, Lnb, Motor, Switch, Unicable},
        mapping::Mapping,
        project::{Build, Project},
        satellite::{Carrier, Satellite, Service},
    },
    server::error::Error,
};

pub type LnbModel = entity::equipment_lnb::Model;
pub type SwitchModel = entity::equipment_switch::Model;
pub type MotorModel = entity::equipment_motor::Model;
pub type UnicableModel = entity::equipment_unicable::Model;

/// Satellite row without its carriers.
pub type SatelliteModel = entity::satellite::Model;
/// Carrier row, ordered within its satellite by `position`.
pub type CarrierModel = entity::satellite_carrier::Model;
/// Service row, ordered within its carrier by `position`.
pub type ServiceModel = entity::carrier_service::Model;

pub type ProjectModel = entity::project::Model;
pub type BuildModel = entity::project_build::Model;
pub type MappingModel = entity::equipment_mapping::Model;
pub type ActivityModel = entity::activity_log::Model;

/// Reads an optional enumerated column.
pub(crate) fn parse_stored<T: FromStr>(column: &str, value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring unrecognized stored {} value {:?}", column, value);
            None
        }
    }
}

/// Writes an optional enumerated column.
pub(crate) fn store_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Splits the comma separated `mapped_switch` column.
pub(crate) fn split_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<LnbModel> for Lnb {
    fn from(model: LnbModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            low_frequency: model.low_frequency,
            high_frequency: model.high_frequency,
            lo1_high: model.lo1_high,
            lo1_low: model.lo1_low,
            band_type: model.band_type,
            power_control: model.power_control,
            v_control: model.v_control,
            khz_option: model.khz_option,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TryFrom<SwitchModel> for Switch {
    type Error = Error;

    fn try_from(model: SwitchModel) -> Result<Self, Self::Error> {
        Ok(Self {
            switch_type: parse_stored("switch_type", &model.switch_type),
            switch_options: serde_json::from_str(&model.switch_options)?,
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<MotorModel> for Motor {
    fn from(model: MotorModel) -> Self {
        Self {
            motor_type: parse_stored("motor_type", &model.motor_type),
            id: model.id,
            name: model.name,
            position: model.position,
            longitude: model.longitude,
            latitude: model.latitude,
            east_west: model.east_west,
            north_south: model.north_south,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TryFrom<UnicableModel> for Unicable {
    type Error = Error;

    fn try_from(model: UnicableModel) -> Result<Self, Self::Error> {
        let if_slots: Vec<IfSlot> = serde_json::from_str(&model.if_slots)?;

        Ok(Self {
            unicable_type: parse_stored("unicable_type", &model.unicable_type),
            status: parse_stored("status", &model.status),
            port: parse_stored("port", &model.port),
            if_slots,
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Assembles a satellite from its row and its ordered carrier/service rows.
pub fn satellite_from_models(
    satellite: SatelliteModel,
    carriers: Vec<(CarrierModel, Vec<ServiceModel>)>,
) -> Satellite {
    Satellite {
        direction: parse_stored("direction", &satellite.direction),
        mapped_switch: split_ids(&satellite.mapped_switch),
        carriers: carriers
            .into_iter()
            .map(|(carrier, services)| carrier_from_models(carrier, services))
            .collect(),
        id: satellite.id,
        name: satellite.name,
        position: satellite.position,
        age: satellite.age,
        mapped_lnb: satellite.mapped_lnb,
        mapped_motor: satellite.mapped_motor,
        mapped_unicable: satellite.mapped_unicable,
        created_at: satellite.created_at,
        updated_at: satellite.updated_at,
    }
}

fn carrier_from_models(carrier: CarrierModel, services: Vec<ServiceModel>) -> Carrier {
    Carrier {
        polarization: parse_stored("polarization", &carrier.polarization),
        services: services.into_iter().map(Service::from).collect(),
        id: carrier.id,
        name: carrier.name,
        frequency: carrier.frequency,
        symbol_rate: carrier.symbol_rate,
        fec: carrier.fec,
        fec_mode: carrier.fec_mode,
        factory_default: carrier.factory_default,
    }
}

impl From<ServiceModel> for Service {
    fn from(model: ServiceModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            frequency: model.frequency,
            video_pid: model.video_pid,
            audio_pid: model.audio_pid,
            pcr_pid: model.pcr_pid,
            program_number: model.program_number,
            fav_group: model.fav_group,
            factory_default: model.factory_default,
            preference: model.preference,
            scramble: model.scramble,
        }
    }
}

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<BuildModel> for Build {
    fn from(model: BuildModel) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            name: model.name,
            description: model.description,
            xml_data: model.xml_data,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TryFrom<MappingModel> for Mapping {
    type Error = Error;

    fn try_from(model: MappingModel) -> Result<Self, Self::Error> {
        Ok(Self {
            owner_kind: model
                .owner_kind
                .parse()
                .map_err(|e: crate::model::UnknownValue| Error::ParseError(e.to_string()))?,
            equipment_type: model
                .equipment_type
                .parse()
                .map_err(|e: crate::model::UnknownValue| Error::ParseError(e.to_string()))?,
            id: model.id,
            owner_id: model.owner_id,
            equipment_id: model.equipment_id,
            created_at: model.created_at,
        })
    }
}

impl From<ActivityModel> for Activity {
    fn from(model: ActivityModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            action: model.action,
            details: model.details,
            project_id: model.project_id,
            timestamp: model.timestamp,
        }
    }
}
