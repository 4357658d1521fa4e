//! Equipment selection rules for a satellite.
//!
//! A selection holds at most one LNB, one motor and one unicable, plus a switch list limited to
//! one Tone Burst switch and one DiSEqC switch. Selections are pure state; they are only
//! persisted when saved through `SatelliteService::assign_equipment`.

use crate::{
    model::{
        equipment::{Lnb, Switch},
        satellite::{EquipmentAssignment, Satellite},
    },
    server::error::validation::ValidationError,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentSelection {
    assignment: EquipmentAssignment,
}

impl EquipmentSelection {
    pub fn new(assignment: EquipmentAssignment) -> Self {
        Self { assignment }
    }

    /// Seeds a selection from a stored satellite.
    ///
    /// Without a stored LNB the first LNB of `lnbs` is selected. The fallback is not written
    /// back to the satellite.
    ///
    /// # Arguments
    /// - `satellite` - Satellite whose stored assignment is used
    /// - `lnbs` - LNBs in store list order, oldest first
    pub fn from_satellite(satellite: &Satellite, lnbs: &[Lnb]) -> Self {
        let mut assignment = satellite.assignment();
        if assignment.lnb_id.is_none() {
            assignment.lnb_id = lnbs.first().map(|lnb| lnb.id.clone());
        }

        Self { assignment }
    }

    pub fn select_lnb(&mut self, lnb_id: Option<String>) {
        self.assignment.lnb_id = lnb_id;
    }

    pub fn select_motor(&mut self, motor_id: Option<String>) {
        self.assignment.motor_id = motor_id;
    }

    pub fn select_unicable(&mut self, unicable_id: Option<String>) {
        self.assignment.unicable_id = unicable_id;
    }

    /// Toggles a switch in or out of the selection.
    ///
    /// - A selected switch is removed, nothing else changes.
    /// - A Tone Burst switch is added next to whatever is selected.
    /// - Any other switch replaces every selected switch that is not Tone Burst.
    ///
    /// # Arguments
    /// - `switch_id` - Switch to toggle
    /// - `switches` - Known switches, used to look up switch types. Ids missing from it are
    ///   treated as DiSEqC switches.
    pub fn toggle_switch(&mut self, switch_id: &str, switches: &[Switch]) {
        let selected = &mut self.assignment.switch_ids;

        if let Some(index) = selected.iter().position(|id| id == switch_id) {
            selected.remove(index);
            return;
        }

        let is_tone_burst = |id: &str| {
            switches
                .iter()
                .find(|switch| switch.id == id)
                .is_some_and(Switch::is_tone_burst)
        };

        if !is_tone_burst(switch_id) {
            selected.retain(|id| is_tone_burst(id.as_str()));
        }

        selected.push(switch_id.to_string());
    }

    pub fn switch_ids(&self) -> &[String] {
        &self.assignment.switch_ids
    }

    pub fn assignment(&self) -> &EquipmentAssignment {
        &self.assignment
    }

    pub fn into_assignment(self) -> EquipmentAssignment {
        self.assignment
    }
}

/// Checks a switch list against the selection rule: at most one Tone Burst switch and at most
/// one DiSEqC switch.
pub fn check_switch_combination(switches: &[Switch]) -> Result<(), ValidationError> {
    let tone_burst = switches.iter().filter(|switch| switch.is_tone_burst()).count();
    let diseqc = switches.len() - tone_burst;

    if tone_burst > 1 || diseqc > 1 {
        return Err(ValidationError::SwitchCombination);
    }

    Ok(())
}
