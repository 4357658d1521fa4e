//! Tag and attribute names of the SDB document.
//!
//! The external codec matches these byte for byte, including the `sattliteblock`,
//! `sattliteinfo` and `carrers` spellings.

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const ROOT: &str = "SDB";
pub const PROJECT_INFO: &str = "projinfo";
pub const PROJECT_NAME: &str = "projname";

pub const NAME: &str = "name";
pub const TYPE: &str = "type";

pub mod lnb {
    pub const BLOCK: &str = "LNBlock";
    pub const LNB_TYPE: &str = "LNBType";
    pub const LOW_FREQUENCY: &str = "LowFrequency";
    pub const HIGH_FREQUENCY: &str = "HighFrequency";
    /// Spelling written by older generators, accepted on read.
    pub const LOW_FREQUENCY_SHORT: &str = "lowFreq";
    pub const HIGH_FREQUENCY_SHORT: &str = "highFreq";
    pub const LO1_HIGH: &str = "LO1High";
    pub const LO1_LOW: &str = "LO1Low";
    pub const BAND_TYPE: &str = "BandType";
    pub const POWER_CONTROL: &str = "PowerControl";
    pub const V_CONTROL: &str = "VControl";
    pub const KHZ_OPTION: &str = "KhzOption";
}

pub mod switch {
    pub const BLOCK: &str = "switchblock";
    pub const BLOCK_TYPE_ATTR: &str = "type";
    pub const COUNT_ATTR: &str = "noofSwi";
    pub const SWITCH: &str = "switch";
    pub const NAME_ATTR: &str = "name";
    pub const TYPE_ATTR: &str = "type";
    /// Separator of switch options inside a `switch` element.
    pub const OPTION_SEPARATOR: &str = ",";
}

pub mod motor {
    pub const BLOCK: &str = "motor";
    pub const POSITION: &str = "position";
    pub const LONGITUDE: &str = "longitude";
    pub const LATITUDE: &str = "latitude";
    pub const EAST_WEST: &str = "eastWest";
    pub const NORTH_SOUTH: &str = "northSouth";
    pub const STATUS: &str = "status";
}

pub mod unicable {
    pub const BLOCK: &str = "unicable";
    pub const PORT: &str = "port";
    pub const STATUS: &str = "status";
    pub const IF_SLOT: &str = "ifslot";
    pub const SLOT_NUMBER_ATTR: &str = "number";
}

pub mod satellite {
    pub const BLOCK: &str = "sattliteblock";
    pub const INFO: &str = "sattliteinfo";
    pub const POSITION: &str = "position";
    pub const AGE: &str = "age";
    pub const DIRECTION: &str = "direction";
}

pub mod carrier {
    pub const CARRIER: &str = "carrers";
    pub const FREQUENCY: &str = "frequency";
    pub const POLARIZATION: &str = "polarization";
    pub const SYMBOL_RATE: &str = "symbolRate";
    pub const FEC: &str = "fec";
    pub const FEC_MODE: &str = "fecMode";
    pub const FACTORY_DEFAULT: &str = "factoryDefault";
}

pub mod service {
    pub const SERVICE: &str = "services";
    pub const FREQUENCY: &str = "frequency";
    pub const VIDEO_PID: &str = "videoPid";
    pub const AUDIO_PID: &str = "audioPid";
    pub const PCR_PID: &str = "pcrPid";
    pub const PROGRAM_NUMBER: &str = "programNumber";
    pub const FAV_GROUP: &str = "favGroup";
    pub const FACTORY_DEFAULT: &str = "factoryDefault";
    pub const PREFERENCE: &str = "preference";
    pub const SCRAMBLE: &str = "scramble";
}
