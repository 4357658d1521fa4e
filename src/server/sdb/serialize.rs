use crate::{
    model::{
        configuration::ResolvedConfiguration,
        equipment::{Lnb, Motor, Switch, Unicable},
        satellite::{Carrier, Satellite, Service},
    },
    server::sdb::{
        schema::{self, carrier, lnb, motor, satellite, service, switch, unicable},
        writer::XmlWriter,
    },
};

/// Serializes a resolved project or build into an SDB document.
///
/// Blocks are written in a fixed order: project name, LNBs, the switch block, motors,
/// unicables and the satellite block. Within each block records keep the order of
/// `config`. Every scalar field is written, blank values as empty elements.
pub fn serialize(config: &ResolvedConfiguration) -> String {
    let mut writer = XmlWriter::new(schema::XML_DECLARATION);

    writer.open(schema::ROOT, &[]);
    writer.open(schema::PROJECT_INFO, &[]);
    writer.leaf(schema::PROJECT_NAME, &config.name);

    for record in &config.lnbs {
        write_lnb(&mut writer, record);
    }
    write_switch_block(&mut writer, &config.switches);
    for record in &config.motors {
        write_motor(&mut writer, record);
    }
    for record in &config.unicables {
        write_unicable(&mut writer, record);
    }
    write_satellite_block(&mut writer, &config.satellites);

    writer.close(schema::PROJECT_INFO);
    writer.close(schema::ROOT);

    writer.finish()
}

fn write_lnb(writer: &mut XmlWriter, record: &Lnb) {
    writer.open(lnb::BLOCK, &[]);
    writer.leaf(schema::NAME, &record.name);
    writer.leaf(lnb::LNB_TYPE, &record.band_type);
    writer.leaf(lnb::LOW_FREQUENCY, &record.low_frequency);
    writer.leaf(lnb::HIGH_FREQUENCY, &record.high_frequency);
    writer.leaf(lnb::LO1_HIGH, &record.lo1_high);
    writer.leaf(lnb::LO1_LOW, &record.lo1_low);
    writer.leaf(lnb::BAND_TYPE, &record.band_type);
    writer.leaf(lnb::POWER_CONTROL, &record.power_control);
    writer.leaf(lnb::V_CONTROL, &record.v_control);
    writer.leaf(lnb::KHZ_OPTION, &record.khz_option);
    writer.close(lnb::BLOCK);
}

/// The block's `type` is the type of the first switch, even when a Tone Burst and a DiSEqC
/// switch are mapped together.
fn write_switch_block(writer: &mut XmlWriter, switches: &[Switch]) {
    let Some(first) = switches.first() else {
        return;
    };

    let block_type = switch_type(first);
    let count = switches.len().to_string();
    writer.open(
        switch::BLOCK,
        &[
            (switch::BLOCK_TYPE_ATTR, block_type),
            (switch::COUNT_ATTR, count.as_str()),
        ],
    );

    for record in switches {
        let options = record.switch_options.join(switch::OPTION_SEPARATOR);
        writer.leaf_with_attributes(
            switch::SWITCH,
            &[
                (switch::NAME_ATTR, record.name.as_str()),
                (switch::TYPE_ATTR, switch_type(record)),
            ],
            &options,
        );
    }

    writer.close(switch::BLOCK);
}

fn switch_type(record: &Switch) -> &'static str {
    record.switch_type.map(|t| t.as_str()).unwrap_or_default()
}

fn write_motor(writer: &mut XmlWriter, record: &Motor) {
    writer.open(motor::BLOCK, &[]);
    writer.leaf(schema::NAME, &record.name);
    writer.leaf(
        schema::TYPE,
        record.motor_type.map(|t| t.as_str()).unwrap_or_default(),
    );
    writer.leaf(motor::POSITION, &record.position);
    writer.leaf(motor::LONGITUDE, &record.longitude);
    writer.leaf(motor::LATITUDE, &record.latitude);
    writer.leaf(motor::EAST_WEST, &record.east_west);
    writer.leaf(motor::NORTH_SOUTH, &record.north_south);
    // Motors carry no status of their own; the codec still expects the element.
    writer.leaf(motor::STATUS, "");
    writer.close(motor::BLOCK);
}

fn write_unicable(writer: &mut XmlWriter, record: &Unicable) {
    writer.open(unicable::BLOCK, &[]);
    writer.leaf(schema::NAME, &record.name);
    writer.leaf(
        schema::TYPE,
        record.unicable_type.map(|t| t.as_str()).unwrap_or_default(),
    );
    writer.leaf(
        unicable::PORT,
        record.port.map(|p| p.as_str()).unwrap_or_default(),
    );
    writer.leaf(
        unicable::STATUS,
        record.status.map(|s| s.as_str()).unwrap_or_default(),
    );
    for slot in &record.if_slots {
        let number = slot.slot_number.to_string();
        writer.leaf_with_attributes(
            unicable::IF_SLOT,
            &[(unicable::SLOT_NUMBER_ATTR, number.as_str())],
            &slot.frequency,
        );
    }
    writer.close(unicable::BLOCK);
}

fn write_satellite_block(writer: &mut XmlWriter, satellites: &[Satellite]) {
    writer.open(satellite::BLOCK, &[]);

    for record in satellites {
        writer.open(satellite::INFO, &[]);
        writer.leaf(schema::NAME, &record.name);
        writer.leaf(satellite::POSITION, &record.position);
        writer.leaf(satellite::AGE, &record.age);
        writer.leaf(
            satellite::DIRECTION,
            record.direction.map(|d| d.as_str()).unwrap_or_default(),
        );
        for entry in &record.carriers {
            write_carrier(writer, entry);
        }
        writer.close(satellite::INFO);
    }

    writer.close(satellite::BLOCK);
}

fn write_carrier(writer: &mut XmlWriter, record: &Carrier) {
    writer.open(carrier::CARRIER, &[]);
    writer.leaf(schema::NAME, &record.name);
    writer.leaf(carrier::FREQUENCY, &record.frequency);
    writer.leaf(
        carrier::POLARIZATION,
        record.polarization.map(|p| p.as_str()).unwrap_or_default(),
    );
    writer.leaf(carrier::SYMBOL_RATE, &record.symbol_rate);
    writer.leaf(carrier::FEC, &record.fec);
    writer.leaf(carrier::FEC_MODE, &record.fec_mode);
    writer.bool_leaf(carrier::FACTORY_DEFAULT, record.factory_default);
    for entry in &record.services {
        write_service(writer, entry);
    }
    writer.close(carrier::CARRIER);
}

fn write_service(writer: &mut XmlWriter, record: &Service) {
    writer.open(service::SERVICE, &[]);
    writer.leaf(schema::NAME, &record.name);
    writer.leaf(service::FREQUENCY, &record.frequency);
    writer.leaf(service::VIDEO_PID, &record.video_pid);
    writer.leaf(service::AUDIO_PID, &record.audio_pid);
    writer.leaf(service::PCR_PID, &record.pcr_pid);
    writer.leaf(service::PROGRAM_NUMBER, &record.program_number);
    writer.leaf(service::FAV_GROUP, &record.fav_group);
    writer.bool_leaf(service::FACTORY_DEFAULT, record.factory_default);
    writer.leaf(service::PREFERENCE, &record.preference);
    writer.bool_leaf(service::SCRAMBLE, record.scramble);
    writer.close(service::SERVICE);
}

#[cfg(test)]
mod tests {
    use crate::model::{
        configuration::ResolvedConfiguration,
        equipment::{Lnb, Switch, SwitchType},
        satellite::{Carrier, Satellite, Service},
    };

    use super::serialize;

    fn switch(name: &str, switch_type: SwitchType, options: &[&str]) -> Switch {
        Switch {
            name: name.to_string(),
            switch_type: Some(switch_type),
            switch_options: options.iter().map(|o| o.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Expect the fixed block order with the original tag spellings
    #[test]
    fn writes_blocks_in_fixed_order() {
        let config = ResolvedConfiguration {
            name: "Rooftop".to_string(),
            lnbs: vec![Lnb {
                name: "Universal".to_string(),
                band_type: "Ku".to_string(),
                ..Default::default()
            }],
            satellites: vec![Satellite {
                name: "ASTRA-2E".to_string(),
                carriers: vec![Carrier {
                    name: "BBC-MUX1".to_string(),
                    services: vec![Service {
                        name: "BBC-ONE".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let xml = serialize(&config);

        let positions: Vec<usize> = [
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<SDB>",
            "<projinfo>",
            "<projname>Rooftop</projname>",
            "<LNBlock>",
            "<LNBType>Ku</LNBType>",
            "<sattliteblock>",
            "<sattliteinfo>",
            "<carrers>",
            "<services>",
            "</projinfo>",
            "</SDB>",
        ]
        .iter()
        .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!xml.contains("<switchblock"));
    }

    /// Expect blank fields to be written as empty elements rather than omitted
    #[test]
    fn writes_blank_fields() {
        let config = ResolvedConfiguration {
            lnbs: vec![Lnb::default()],
            ..Default::default()
        };

        let xml = serialize(&config);

        assert!(xml.contains("<projname></projname>"));
        assert!(xml.contains("<LowFrequency></LowFrequency>"));
        assert!(xml.contains("<KhzOption></KhzOption>"));
    }

    /// Expect the block type to come from the first switch and the count from all switches
    #[test]
    fn switch_block_uses_first_switch_type() {
        let config = ResolvedConfiguration {
            switches: vec![
                switch("TB", SwitchType::ToneBurst, &[]),
                switch("D1", SwitchType::Diseqc10, &["LNB1", "LNB2"]),
            ],
            ..Default::default()
        };

        let xml = serialize(&config);

        assert!(xml.contains("<switchblock type=\"Tone Burst\" noofSwi=\"2\">"));
        assert!(xml.contains("<switch name=\"D1\" type=\"DiSEqC 1.0\">LNB1,LNB2</switch>"));
    }

    /// Expect markup characters in values to be escaped
    #[test]
    fn escapes_values() {
        let config = ResolvedConfiguration {
            name: "A & B <test>".to_string(),
            ..Default::default()
        };

        let xml = serialize(&config);

        assert!(xml.contains("<projname>A &amp; B &lt;test&gt;</projname>"));
    }
}
