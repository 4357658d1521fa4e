//! Equipment records (LNB, switch, motor, unicable) and their partial-update payloads.
//!
//! Each equipment kind owns a fixed set of fields. Incoming JSON is filtered through
//! [`EquipmentKind::fields`] before it is deserialized into the kind's `*Fields` patch type,
//! so keys belonging to another kind are dropped rather than stored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::wire_enum;

/// Maximum number of IF slots a unicable may carry.
pub const MAX_IF_SLOTS: usize = 32;

wire_enum! {
    /// Equipment table discriminator, as used in URLs and mapping records.
    EquipmentKind, field = "type" {
        Lnb => "lnbs",
        Switch => "switches",
        Motor => "motors",
        Unicable => "unicables",
    }
}

impl EquipmentKind {
    /// Allow-listed JSON keys accepted on create and update for this kind.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Lnb => &[
                "name",
                "lowFrequency",
                "highFrequency",
                "lo1High",
                "lo1Low",
                "bandType",
                "powerControl",
                "vControl",
                "khzOption",
            ],
            Self::Switch => &["name", "switchType", "switchOptions"],
            Self::Motor => &[
                "name",
                "motorType",
                "position",
                "longitude",
                "latitude",
                "eastWest",
                "northSouth",
            ],
            Self::Unicable => &["name", "unicableType", "status", "port", "ifSlots"],
        }
    }

    /// Whether records of this kind are identified by a unique name.
    ///
    /// Switches, motors and unicables are identified by their type instead.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Lnb)
    }

    /// Human readable singular label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lnb => "LNB",
            Self::Switch => "Switch",
            Self::Motor => "Motor",
            Self::Unicable => "Unicable",
        }
    }
}

wire_enum! {
    SwitchType, field = "switchType" {
        ToneBurst => "Tone Burst",
        Diseqc10 => "DiSEqC 1.0",
        Diseqc11 => "DiSEqC 1.1",
    }
}

impl SwitchType {
    pub fn is_tone_burst(&self) -> bool {
        matches!(self, Self::ToneBurst)
    }
}

wire_enum! {
    MotorType, field = "motorType" {
        Diseqc10 => "DiSEqC 1.0",
        Diseqc12 => "DiSEqC 1.2",
    }
}

wire_enum! {
    UnicableType, field = "unicableType" {
        Dscr => "DSCR",
        Dcss => "DCSS",
    }
}

wire_enum! {
    UnicableStatus, field = "status" {
        On => "ON",
        Off => "OFF",
    }
}

wire_enum! {
    /// Output port of a DSCR unicable. DCSS devices only accept `None`.
    UnicablePort, field = "port" {
        Unassigned => "None",
        A => "A",
        B => "B",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lnb {
    pub id: String,
    pub name: String,
    pub low_frequency: String,
    pub high_frequency: String,
    pub lo1_high: String,
    pub lo1_low: String,
    pub band_type: String,
    pub power_control: String,
    pub v_control: String,
    pub khz_option: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Switch {
    pub id: String,
    pub name: String,
    pub switch_type: Option<SwitchType>,
    /// Ordered configuration strings, joined with `,` on the wire.
    pub switch_options: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Motor {
    pub id: String,
    pub name: String,
    pub motor_type: Option<MotorType>,
    pub position: String,
    pub longitude: String,
    pub latitude: String,
    pub east_west: String,
    pub north_south: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IfSlot {
    pub slot_number: u32,
    pub frequency: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unicable {
    pub id: String,
    pub name: String,
    pub unicable_type: Option<UnicableType>,
    pub status: Option<UnicableStatus>,
    pub port: Option<UnicablePort>,
    pub if_slots: Vec<IfSlot>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Any stored equipment record, tagged by its kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Equipment {
    Lnb(Lnb),
    Switch(Switch),
    Motor(Motor),
    Unicable(Unicable),
}

impl Equipment {
    /// An empty record of `kind` stamped with `id` and `now`.
    pub fn blank(kind: EquipmentKind, id: String, now: NaiveDateTime) -> Self {
        match kind {
            EquipmentKind::Lnb => Self::Lnb(Lnb {
                id,
                created_at: now,
                updated_at: now,
                ..Default::default()
            }),
            EquipmentKind::Switch => Self::Switch(Switch {
                id,
                created_at: now,
                updated_at: now,
                ..Default::default()
            }),
            EquipmentKind::Motor => Self::Motor(Motor {
                id,
                created_at: now,
                updated_at: now,
                ..Default::default()
            }),
            EquipmentKind::Unicable => Self::Unicable(Unicable {
                id,
                created_at: now,
                updated_at: now,
                ..Default::default()
            }),
        }
    }

    pub fn kind(&self) -> EquipmentKind {
        match self {
            Self::Lnb(_) => EquipmentKind::Lnb,
            Self::Switch(_) => EquipmentKind::Switch,
            Self::Motor(_) => EquipmentKind::Motor,
            Self::Unicable(_) => EquipmentKind::Unicable,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Lnb(lnb) => &lnb.id,
            Self::Switch(switch) => &switch.id,
            Self::Motor(motor) => &motor.id,
            Self::Unicable(unicable) => &unicable.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Lnb(lnb) => &lnb.name,
            Self::Switch(switch) => &switch.name,
            Self::Motor(motor) => &motor.name,
            Self::Unicable(unicable) => &unicable.name,
        }
    }

    pub fn set_updated_at(&mut self, now: NaiveDateTime) {
        match self {
            Self::Lnb(lnb) => lnb.updated_at = now,
            Self::Switch(switch) => switch.updated_at = now,
            Self::Motor(motor) => motor.updated_at = now,
            Self::Unicable(unicable) => unicable.updated_at = now,
        }
    }

    /// Merges a patch of the same kind into this record.
    ///
    /// Returns the patch back unchanged when its kind does not match the record.
    pub fn apply(&mut self, fields: EquipmentFields) -> Result<(), EquipmentFields> {
        match (self, fields) {
            (Self::Lnb(lnb), EquipmentFields::Lnb(fields)) => lnb.apply(fields),
            (Self::Switch(switch), EquipmentFields::Switch(fields)) => switch.apply(fields),
            (Self::Motor(motor), EquipmentFields::Motor(fields)) => motor.apply(fields),
            (Self::Unicable(unicable), EquipmentFields::Unicable(fields)) => {
                unicable.apply(fields)
            }
            (_, fields) => return Err(fields),
        }

        Ok(())
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_some<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LnbFields {
    pub name: Option<String>,
    pub low_frequency: Option<String>,
    pub high_frequency: Option<String>,
    pub lo1_high: Option<String>,
    pub lo1_low: Option<String>,
    pub band_type: Option<String>,
    pub power_control: Option<String>,
    pub v_control: Option<String>,
    pub khz_option: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwitchFields {
    pub name: Option<String>,
    pub switch_type: Option<SwitchType>,
    pub switch_options: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotorFields {
    pub name: Option<String>,
    pub motor_type: Option<MotorType>,
    pub position: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub east_west: Option<String>,
    pub north_south: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnicableFields {
    pub name: Option<String>,
    pub unicable_type: Option<UnicableType>,
    pub status: Option<UnicableStatus>,
    pub port: Option<UnicablePort>,
    pub if_slots: Option<Vec<IfSlot>>,
}

impl Lnb {
    pub fn apply(&mut self, fields: LnbFields) {
        merge(&mut self.name, fields.name);
        merge(&mut self.low_frequency, fields.low_frequency);
        merge(&mut self.high_frequency, fields.high_frequency);
        merge(&mut self.lo1_high, fields.lo1_high);
        merge(&mut self.lo1_low, fields.lo1_low);
        merge(&mut self.band_type, fields.band_type);
        merge(&mut self.power_control, fields.power_control);
        merge(&mut self.v_control, fields.v_control);
        merge(&mut self.khz_option, fields.khz_option);
    }
}

impl Switch {
    pub fn apply(&mut self, fields: SwitchFields) {
        merge(&mut self.name, fields.name);
        merge_some(&mut self.switch_type, fields.switch_type);
        merge(&mut self.switch_options, fields.switch_options);
    }

    pub fn is_tone_burst(&self) -> bool {
        self.switch_type.is_some_and(|t| t.is_tone_burst())
    }
}

impl Motor {
    pub fn apply(&mut self, fields: MotorFields) {
        merge(&mut self.name, fields.name);
        merge_some(&mut self.motor_type, fields.motor_type);
        merge(&mut self.position, fields.position);
        merge(&mut self.longitude, fields.longitude);
        merge(&mut self.latitude, fields.latitude);
        merge(&mut self.east_west, fields.east_west);
        merge(&mut self.north_south, fields.north_south);
    }
}

impl Unicable {
    pub fn apply(&mut self, fields: UnicableFields) {
        merge(&mut self.name, fields.name);
        merge_some(&mut self.unicable_type, fields.unicable_type);
        merge_some(&mut self.status, fields.status);
        merge_some(&mut self.port, fields.port);
        merge(&mut self.if_slots, fields.if_slots);
    }
}

/// A partial equipment payload for one kind.
#[derive(Clone, Debug, PartialEq)]
pub enum EquipmentFields {
    Lnb(LnbFields),
    Switch(SwitchFields),
    Motor(MotorFields),
    Unicable(UnicableFields),
}

impl EquipmentFields {
    /// Builds a patch for `kind` from arbitrary JSON, keeping only the kind's allow-listed keys.
    pub fn from_json(kind: EquipmentKind, value: Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| kind.fields().contains(&key.as_str()))
                    .collect(),
            ),
            other => other,
        };

        Ok(match kind {
            EquipmentKind::Lnb => Self::Lnb(serde_json::from_value(value)?),
            EquipmentKind::Switch => Self::Switch(serde_json::from_value(value)?),
            EquipmentKind::Motor => Self::Motor(serde_json::from_value(value)?),
            EquipmentKind::Unicable => Self::Unicable(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> EquipmentKind {
        match self {
            Self::Lnb(_) => EquipmentKind::Lnb,
            Self::Switch(_) => EquipmentKind::Switch,
            Self::Motor(_) => EquipmentKind::Motor,
            Self::Unicable(_) => EquipmentKind::Unicable,
        }
    }
}

impl From<&Lnb> for LnbFields {
    fn from(lnb: &Lnb) -> Self {
        Self {
            name: Some(lnb.name.clone()),
            low_frequency: Some(lnb.low_frequency.clone()),
            high_frequency: Some(lnb.high_frequency.clone()),
            lo1_high: Some(lnb.lo1_high.clone()),
            lo1_low: Some(lnb.lo1_low.clone()),
            band_type: Some(lnb.band_type.clone()),
            power_control: Some(lnb.power_control.clone()),
            v_control: Some(lnb.v_control.clone()),
            khz_option: Some(lnb.khz_option.clone()),
        }
    }
}
