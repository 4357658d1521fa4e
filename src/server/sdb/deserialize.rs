use std::str::FromStr;

use crate::{
    model::{
        configuration::ParsedConfiguration,
        equipment::{IfSlot, LnbFields, MotorFields, SwitchFields, UnicableFields},
        satellite::{CarrierFields, SatelliteFields, ServiceFields},
    },
    server::{
        error::sdb::SdbError,
        sdb::{
            document::Element,
            schema::{self, carrier, lnb, motor, satellite, service, switch, unicable},
        },
    },
};

/// Project name used when the document carries none.
pub const DEFAULT_PROJECT_NAME: &str = "Imported Project";

/// Reads an SDB document into records ready to be stored.
///
/// Unknown elements are ignored and missing blocks yield empty collections. Names the
/// document has no element for are synthesized (`LNB-<type>`, `Switch-<n>`, `Motor-<n>`,
/// `Unicable-<n>`, `Satellite-<n>`, `Carrier-<n>`, `Service-<n>`); other missing fields are
/// left blank.
///
/// # Returns
/// - `Ok(ParsedConfiguration)` - The records in document order
/// - `Err(SdbError)` - The input is not well-formed XML
pub fn deserialize(xml: &str) -> Result<ParsedConfiguration, SdbError> {
    let root = Element::parse(xml)?;
    let info = root.find(schema::PROJECT_INFO).unwrap_or(&root);

    let name = info
        .find(schema::PROJECT_NAME)
        .map(|element| element.text.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string();

    Ok(ParsedConfiguration {
        name,
        description: String::new(),
        lnbs: all(info, lnb::BLOCK).into_iter().map(read_lnb).collect(),
        switches: read_switches(info),
        motors: populated(info, motor::BLOCK)
            .enumerate()
            .map(|(index, element)| read_motor(element, index))
            .collect(),
        unicables: populated(info, unicable::BLOCK)
            .enumerate()
            .map(|(index, element)| read_unicable(element, index))
            .collect(),
        satellites: read_satellites(info),
    })
}

fn all<'a>(element: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    element.find_all(name, &mut found);
    found
}

/// Singleton-style blocks only produce a record when they hold any content or a name element.
fn populated<'a>(element: &'a Element, name: &str) -> impl Iterator<Item = &'a Element> {
    all(element, name)
        .into_iter()
        .filter(|element| element.has_content() || element.child(schema::NAME).is_some())
}

fn text(element: &Element, name: &str) -> String {
    element.child_text(name).unwrap_or_default().to_string()
}

/// The child's name, or `fallback` when the document has no `name` element.
fn name_or(element: &Element, fallback: impl FnOnce() -> String) -> String {
    match element.child_text(schema::NAME) {
        Some(name) => name.to_string(),
        None => fallback(),
    }
}

/// Parses an enumerated value; blank and unrecognized values read as unset.
fn enumerated<T: FromStr>(value: &str, field: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring unrecognized {} {:?} in SDB document", field, value);
            None
        }
    }
}

fn flag(element: &Element, name: &str) -> bool {
    element
        .child_text(name)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

fn read_lnb(element: &Element) -> LnbFields {
    let lnb_type = text(element, lnb::LNB_TYPE);
    let band_type = element
        .child_text(lnb::BAND_TYPE)
        .unwrap_or(lnb_type.as_str())
        .to_string();
    let low_frequency = element
        .child_text(lnb::LOW_FREQUENCY)
        .or_else(|| element.child_text(lnb::LOW_FREQUENCY_SHORT))
        .unwrap_or_default()
        .to_string();
    let high_frequency = element
        .child_text(lnb::HIGH_FREQUENCY)
        .or_else(|| element.child_text(lnb::HIGH_FREQUENCY_SHORT))
        .unwrap_or_default()
        .to_string();

    LnbFields {
        name: Some(name_or(element, || format!("LNB-{}", lnb_type))),
        low_frequency: Some(low_frequency),
        high_frequency: Some(high_frequency),
        lo1_high: Some(text(element, lnb::LO1_HIGH)),
        lo1_low: Some(text(element, lnb::LO1_LOW)),
        band_type: Some(band_type),
        power_control: Some(text(element, lnb::POWER_CONTROL)),
        v_control: Some(text(element, lnb::V_CONTROL)),
        khz_option: Some(text(element, lnb::KHZ_OPTION)),
    }
}

/// Switches of the first switch block; each switch's own type wins over the block type.
fn read_switches(info: &Element) -> Vec<SwitchFields> {
    let Some(block) = info.find(switch::BLOCK) else {
        return Vec::new();
    };
    let block_type = block.attribute(switch::BLOCK_TYPE_ATTR).unwrap_or_default();

    block
        .children_named(switch::SWITCH)
        .enumerate()
        .map(|(index, element)| {
            let name = element
                .attribute(switch::NAME_ATTR)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Switch-{}", index + 1));
            let switch_type = element
                .attribute(switch::TYPE_ATTR)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(block_type);
            let switch_options = if element.text.trim().is_empty() {
                Vec::new()
            } else {
                element
                    .text
                    .split(switch::OPTION_SEPARATOR)
                    .map(str::to_string)
                    .collect()
            };

            SwitchFields {
                name: Some(name),
                switch_type: enumerated(switch_type, "switch type"),
                switch_options: Some(switch_options),
            }
        })
        .collect()
}

fn read_motor(element: &Element, index: usize) -> MotorFields {
    MotorFields {
        name: Some(name_or(element, || format!("Motor-{}", index + 1))),
        motor_type: enumerated(&text(element, schema::TYPE), "motor type"),
        position: Some(text(element, motor::POSITION)),
        longitude: Some(text(element, motor::LONGITUDE)),
        latitude: Some(text(element, motor::LATITUDE)),
        east_west: Some(text(element, motor::EAST_WEST)),
        north_south: Some(text(element, motor::NORTH_SOUTH)),
    }
}

fn read_unicable(element: &Element, index: usize) -> UnicableFields {
    let if_slots = element
        .children_named(unicable::IF_SLOT)
        .enumerate()
        .map(|(slot_index, slot)| IfSlot {
            slot_number: slot
                .attribute(unicable::SLOT_NUMBER_ATTR)
                .and_then(|number| number.trim().parse().ok())
                .unwrap_or(slot_index as u32 + 1),
            frequency: slot.text.clone(),
        })
        .collect();

    UnicableFields {
        name: Some(name_or(element, || format!("Unicable-{}", index + 1))),
        unicable_type: enumerated(&text(element, schema::TYPE), "unicable type"),
        status: enumerated(&text(element, unicable::STATUS), "unicable status"),
        port: enumerated(&text(element, unicable::PORT), "unicable port"),
        if_slots: Some(if_slots),
    }
}

fn read_satellites(info: &Element) -> Vec<SatelliteFields> {
    let Some(block) = info.find(satellite::BLOCK) else {
        return Vec::new();
    };

    block
        .children_named(satellite::INFO)
        .enumerate()
        .map(|(index, element)| SatelliteFields {
            name: name_or(element, || format!("Satellite-{}", index + 1)),
            position: text(element, satellite::POSITION),
            age: text(element, satellite::AGE),
            direction: enumerated(&text(element, satellite::DIRECTION), "direction"),
            carriers: element
                .children_named(carrier::CARRIER)
                .enumerate()
                .map(|(index, element)| read_carrier(element, index))
                .collect(),
            ..Default::default()
        })
        .collect()
}

fn read_carrier(element: &Element, index: usize) -> CarrierFields {
    CarrierFields {
        id: None,
        name: name_or(element, || format!("Carrier-{}", index + 1)),
        frequency: text(element, carrier::FREQUENCY),
        polarization: enumerated(&text(element, carrier::POLARIZATION), "polarization"),
        symbol_rate: text(element, carrier::SYMBOL_RATE),
        fec: text(element, carrier::FEC),
        fec_mode: text(element, carrier::FEC_MODE),
        factory_default: flag(element, carrier::FACTORY_DEFAULT),
        services: element
            .children_named(service::SERVICE)
            .enumerate()
            .map(|(index, element)| read_service(element, index))
            .collect(),
    }
}

/// A service's name is its `name` child, else its own non-blank text, else `Service-<n>`.
fn read_service(element: &Element, index: usize) -> ServiceFields {
    let name = name_or(element, || {
        let raw = element.text.trim();
        if raw.is_empty() {
            format!("Service-{}", index + 1)
        } else {
            raw.to_string()
        }
    });

    ServiceFields {
        id: None,
        name,
        frequency: text(element, service::FREQUENCY),
        video_pid: text(element, service::VIDEO_PID),
        audio_pid: text(element, service::AUDIO_PID),
        pcr_pid: text(element, service::PCR_PID),
        program_number: text(element, service::PROGRAM_NUMBER),
        fav_group: text(element, service::FAV_GROUP),
        factory_default: flag(element, service::FACTORY_DEFAULT),
        preference: text(element, service::PREFERENCE),
        scramble: flag(element, service::SCRAMBLE),
    }
}
