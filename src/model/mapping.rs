//! Project and build equipment mappings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{equipment::EquipmentKind, wire_enum};

wire_enum! {
    OwnerKind, field = "ownerKind" {
        Project => "project",
        Build => "build",
    }
}

wire_enum! {
    /// Mappable equipment groups: the four equipment kinds plus satellites.
    EquipmentType, field = "equipmentType" {
        Lnbs => "lnbs",
        Switches => "switches",
        Motors => "motors",
        Unicables => "unicables",
        Satellites => "satellites",
    }
}

impl From<EquipmentKind> for EquipmentType {
    fn from(kind: EquipmentKind) -> Self {
        match kind {
            EquipmentKind::Lnb => Self::Lnbs,
            EquipmentKind::Switch => Self::Switches,
            EquipmentKind::Motor => Self::Motors,
            EquipmentKind::Unicable => Self::Unicables,
        }
    }
}

/// The project or build a mapping belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MappingOwner {
    Project(String),
    Build(String),
}

impl MappingOwner {
    pub fn new(kind: OwnerKind, id: impl Into<String>) -> Self {
        match kind {
            OwnerKind::Project => Self::Project(id.into()),
            OwnerKind::Build => Self::Build(id.into()),
        }
    }

    pub fn kind(&self) -> OwnerKind {
        match self {
            Self::Project(_) => OwnerKind::Project,
            Self::Build(_) => OwnerKind::Build,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Project(id) | Self::Build(id) => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub id: String,
    pub owner_kind: OwnerKind,
    pub owner_id: String,
    pub equipment_type: EquipmentType,
    pub equipment_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMappingDto {
    pub equipment_type: EquipmentType,
    pub equipment_id: String,
}

/// Outcome of an idempotent mapping add. `added` is false when the mapping already existed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MappingAddedDto {
    pub added: bool,
}
