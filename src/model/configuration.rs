//! Whole configuration sets exchanged with the SDB document format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    equipment::{Lnb, LnbFields, Motor, MotorFields, Switch, SwitchFields, Unicable, UnicableFields},
    mapping::OwnerKind,
    satellite::{Satellite, SatelliteFields},
};

/// A project or build with its mapped equipment hydrated, in mapping order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedConfiguration {
    pub name: String,
    pub lnbs: Vec<Lnb>,
    pub switches: Vec<Switch>,
    pub motors: Vec<Motor>,
    pub unicables: Vec<Unicable>,
    pub satellites: Vec<Satellite>,
}

/// Records read back from an SDB document, ready to be persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedConfiguration {
    pub name: String,
    pub description: String,
    pub lnbs: Vec<LnbFields>,
    pub switches: Vec<SwitchFields>,
    pub motors: Vec<MotorFields>,
    pub unicables: Vec<UnicableFields>,
    pub satellites: Vec<SatelliteFields>,
}

/// Request body for creating a project from a parsed configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportProjectDto {
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub configuration: ParsedConfiguration,
}

/// Request body for generating a `.bin` file from a project or build.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBinDto {
    pub owner_kind: OwnerKind,
    pub owner_id: String,
}

/// Request body carrying a `.bin` file as base64.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportBinDto {
    pub bin_data: String,
}
