//! Factory functions for in-memory entity models.
//!
//! Every call draws from one process-wide sequence, so generated ids are unique and timestamps
//! strictly increase in call order. Models created later sort after models created earlier.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::{
    BuildModel, CarrierModel, LnbModel, MappingModel, MotorModel, ProjectModel, SatelliteModel,
    ServiceModel, SwitchModel, UnicableModel,
};

static SEQUENCE: AtomicI64 = AtomicI64::new(1);

fn next_sequence() -> i64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, next_sequence())
}

/// Next timestamp of the shared sequence, one second after the previous one
pub fn timestamp() -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap();

    base + Duration::seconds(next_sequence())
}

/// Create a Ku band universal LNB model.
///
/// # Arguments
/// - `name` - LNB name
pub fn lnb_model(name: &str) -> LnbModel {
    let now = timestamp();
    LnbModel {
        id: next_id("lnb"),
        name: name.to_string(),
        low_frequency: "9750".to_string(),
        high_frequency: "10600".to_string(),
        lo1_high: "10600".to_string(),
        lo1_low: "9750".to_string(),
        band_type: "Ku".to_string(),
        power_control: "13/18V".to_string(),
        v_control: "Auto".to_string(),
        khz_option: "Auto".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a switch model without options.
///
/// # Arguments
/// - `name` - Switch name
/// - `switch_type` - Stored switch type, e.g. `"Tone Burst"` or `"DiSEqC 1.0"`
pub fn switch_model(name: &str, switch_type: &str) -> SwitchModel {
    let now = timestamp();
    SwitchModel {
        id: next_id("switch"),
        name: name.to_string(),
        switch_type: switch_type.to_string(),
        switch_options: "[]".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn motor_model(name: &str) -> MotorModel {
    let now = timestamp();
    MotorModel {
        id: next_id("motor"),
        name: name.to_string(),
        motor_type: "DiSEqC 1.2".to_string(),
        position: "1".to_string(),
        longitude: "0.0".to_string(),
        latitude: "51.5".to_string(),
        east_west: "East".to_string(),
        north_south: "North".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a DSCR unicable model on port A without IF slots.
pub fn unicable_model(name: &str) -> UnicableModel {
    let now = timestamp();
    UnicableModel {
        id: next_id("unicable"),
        name: name.to_string(),
        unicable_type: "DSCR".to_string(),
        status: "ON".to_string(),
        port: "A".to_string(),
        if_slots: "[]".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a satellite model at 28.2E with no equipment assigned.
pub fn satellite_model(name: &str) -> SatelliteModel {
    let now = timestamp();
    SatelliteModel {
        id: next_id("satellite"),
        name: name.to_string(),
        position: "28.2E".to_string(),
        age: String::new(),
        direction: "East".to_string(),
        mapped_lnb: None,
        mapped_switch: String::new(),
        mapped_motor: None,
        mapped_unicable: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a carrier model.
///
/// # Arguments
/// - `satellite_id` - Owning satellite
/// - `position` - Order of the carrier within its satellite
/// - `name` - Carrier name
pub fn carrier_model(satellite_id: &str, position: i32, name: &str) -> CarrierModel {
    CarrierModel {
        id: next_id("carrier"),
        satellite_id: satellite_id.to_string(),
        position,
        name: name.to_string(),
        frequency: "10773".to_string(),
        polarization: "Horizontal".to_string(),
        symbol_rate: "22000".to_string(),
        fec: "5/6".to_string(),
        fec_mode: "DVB-S".to_string(),
        factory_default: false,
        created_at: timestamp(),
    }
}

/// Create a service model.
///
/// # Arguments
/// - `carrier_id` - Owning carrier
/// - `position` - Order of the service within its carrier
/// - `name` - Service name
pub fn service_model(carrier_id: &str, position: i32, name: &str) -> ServiceModel {
    ServiceModel {
        id: next_id("service"),
        carrier_id: carrier_id.to_string(),
        position,
        name: name.to_string(),
        frequency: "10773".to_string(),
        video_pid: "5500".to_string(),
        audio_pid: "5502".to_string(),
        pcr_pid: "5500".to_string(),
        program_number: "6301".to_string(),
        fav_group: String::new(),
        factory_default: false,
        preference: String::new(),
        scramble: false,
        created_at: timestamp(),
    }
}

pub fn project_model(name: &str) -> ProjectModel {
    let now = timestamp();
    ProjectModel {
        id: next_id("project"),
        name: name.to_string(),
        description: String::new(),
        created_by: "admin".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn build_model(project_id: &str, name: &str) -> BuildModel {
    let now = timestamp();
    BuildModel {
        id: next_id("build"),
        project_id: project_id.to_string(),
        name: name.to_string(),
        description: String::new(),
        xml_data: None,
        created_by: "admin".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mapping model.
///
/// # Arguments
/// - `owner_kind` - `"project"` or `"build"`
/// - `owner_id` - Owning project or build id
/// - `equipment_type` - `"lnbs"`, `"switches"`, `"motors"`, `"unicables"` or `"satellites"`
/// - `equipment_id` - Mapped record id
/// - `position` - Insertion order within the owner
pub fn mapping_model(
    owner_kind: &str,
    owner_id: &str,
    equipment_type: &str,
    equipment_id: &str,
    position: i32,
) -> MappingModel {
    MappingModel {
        id: next_id("mapping"),
        owner_kind: owner_kind.to_string(),
        owner_id: owner_id.to_string(),
        equipment_type: equipment_type.to_string(),
        equipment_id: equipment_id.to_string(),
        position,
        created_at: timestamp(),
    }
}
