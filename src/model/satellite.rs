//! Satellite aggregate: a satellite owns its carriers, each carrier owns its services.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::wire_enum;

wire_enum! {
    Direction, field = "direction" {
        East => "East",
        West => "West",
    }
}

wire_enum! {
    Polarization, field = "polarization" {
        Horizontal => "Horizontal",
        Vertical => "Vertical",
        LeftCircular => "Left Circular",
        RightCircular => "Right Circular",
    }
}

/// A satellite with its carriers and services hydrated in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Satellite {
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: String,
    pub direction: Option<Direction>,
    pub mapped_lnb: Option<String>,
    pub mapped_switch: Vec<String>,
    pub mapped_motor: Option<String>,
    pub mapped_unicable: Option<String>,
    pub carriers: Vec<Carrier>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub id: String,
    pub name: String,
    pub frequency: String,
    pub polarization: Option<Polarization>,
    pub symbol_rate: String,
    pub fec: String,
    pub fec_mode: String,
    pub factory_default: bool,
    pub services: Vec<Service>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub frequency: String,
    pub video_pid: String,
    pub audio_pid: String,
    pub pcr_pid: String,
    pub program_number: String,
    pub fav_group: String,
    pub factory_default: bool,
    pub preference: String,
    pub scramble: bool,
}

/// Full satellite payload for create and update.
///
/// `carriers` always replaces the stored carrier list as a whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SatelliteFields {
    pub name: String,
    pub position: String,
    pub age: String,
    pub direction: Option<Direction>,
    pub mapped_lnb: Option<String>,
    pub mapped_switch: Vec<String>,
    pub mapped_motor: Option<String>,
    pub mapped_unicable: Option<String>,
    pub carriers: Vec<CarrierFields>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CarrierFields {
    /// Reused when present, otherwise a fresh id is generated.
    pub id: Option<String>,
    pub name: String,
    pub frequency: String,
    pub polarization: Option<Polarization>,
    pub symbol_rate: String,
    pub fec: String,
    pub fec_mode: String,
    pub factory_default: bool,
    pub services: Vec<ServiceFields>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceFields {
    pub id: Option<String>,
    pub name: String,
    pub frequency: String,
    pub video_pid: String,
    pub audio_pid: String,
    pub pcr_pid: String,
    pub program_number: String,
    pub fav_group: String,
    pub factory_default: bool,
    pub preference: String,
    pub scramble: bool,
}

/// Equipment chosen for a satellite: one LNB, switches, one motor, one unicable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentAssignment {
    pub lnb_id: Option<String>,
    pub switch_ids: Vec<String>,
    pub motor_id: Option<String>,
    pub unicable_id: Option<String>,
}

impl Satellite {
    pub fn assignment(&self) -> EquipmentAssignment {
        EquipmentAssignment {
            lnb_id: self.mapped_lnb.clone(),
            switch_ids: self.mapped_switch.clone(),
            motor_id: self.mapped_motor.clone(),
            unicable_id: self.mapped_unicable.clone(),
        }
    }
}

impl SatelliteFields {
    pub fn assignment(&self) -> EquipmentAssignment {
        EquipmentAssignment {
            lnb_id: self.mapped_lnb.clone(),
            switch_ids: self.mapped_switch.clone(),
            motor_id: self.mapped_motor.clone(),
            unicable_id: self.mapped_unicable.clone(),
        }
    }
}

impl From<&Satellite> for SatelliteFields {
    fn from(satellite: &Satellite) -> Self {
        Self {
            name: satellite.name.clone(),
            position: satellite.position.clone(),
            age: satellite.age.clone(),
            direction: satellite.direction,
            mapped_lnb: satellite.mapped_lnb.clone(),
            mapped_switch: satellite.mapped_switch.clone(),
            mapped_motor: satellite.mapped_motor.clone(),
            mapped_unicable: satellite.mapped_unicable.clone(),
            carriers: satellite.carriers.iter().map(CarrierFields::from).collect(),
        }
    }
}

impl From<&Carrier> for CarrierFields {
    fn from(carrier: &Carrier) -> Self {
        Self {
            id: Some(carrier.id.clone()),
            name: carrier.name.clone(),
            frequency: carrier.frequency.clone(),
            polarization: carrier.polarization,
            symbol_rate: carrier.symbol_rate.clone(),
            fec: carrier.fec.clone(),
            fec_mode: carrier.fec_mode.clone(),
            factory_default: carrier.factory_default,
            services: carrier.services.iter().map(ServiceFields::from).collect(),
        }
    }
}

impl From<&Service> for ServiceFields {
    fn from(service: &Service) -> Self {
        Self {
            id: Some(service.id.clone()),
            name: service.name.clone(),
            frequency: service.frequency.clone(),
            video_pid: service.video_pid.clone(),
            audio_pid: service.audio_pid.clone(),
            pcr_pid: service.pcr_pid.clone(),
            program_number: service.program_number.clone(),
            fav_group: service.fav_group.clone(),
            factory_default: service.factory_default,
            preference: service.preference.clone(),
            scramble: service.scramble,
        }
    }
}
