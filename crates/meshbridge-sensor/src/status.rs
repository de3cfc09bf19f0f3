//! Sensor Status payload framing.
//!
//! A Sensor Status payload is a back-to-back run of marshalled property
//! values. Each entry starts with a Format A or Format B header:
//!
//! ```text
//! Format A (bit 0 of octet0 clear):
//!   +-----------------+--------------------+
//!   | octet0          | octet1             |
//!   | fmt|len-1|pid.. | pid (high 8 bits)  |  length = ((octet0 & 0x1E) >> 1) + 1
//!   +-----------------+--------------------+  pid = (octet1 << 3) | (octet0 >> 5)
//!
//! Format B (bit 0 of octet0 set):
//!   +-----------------+---------+---------+
//!   | octet0: fmt|len | octet1  | octet2  |  length = (octet0 & 0xFE) >> 1
//!   +-----------------+---------+---------+  (0x7F means zero-length)
//!                       pid = (octet2 << 8) | octet1
//! ```
//!
//! The value bytes follow the header and are handed to the property's
//! characteristic for decoding.

use bytes::BufMut;
use serde::Serialize;

use crate::characteristic::{CharacteristicRegistry, SensorValue};

/// Format A marker (bit 0 of the first octet clear).
pub const SENSOR_FORMAT_A: u8 = 0x00;
/// Format B marker (bit 0 of the first octet set).
pub const SENSOR_FORMAT_B: u8 = 0x01;

/// Format B length field value meaning "zero-length".
const FORMAT_B_ZERO_LENGTH: u8 = 0x7F;

/// One parsed element of a Sensor Status payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedSensorEntry {
    /// Device property id.
    pub property_id: u16,
    /// Raw value bytes as they appeared on the wire.
    pub raw: Vec<u8>,
    /// Decoded value, or a passthrough/unknown fallback.
    pub value: SensorValue,
}

/// Walk a Sensor Status payload and decode every marshalled property value.
///
/// Truncated trailing entries yield an entry carrying the bytes that are
/// present; this never fails or panics.
pub fn parse_sensor_status(
    registry: &CharacteristicRegistry,
    payload: &[u8],
) -> Vec<DecodedSensorEntry> {
    let mut entries = Vec::new();
    let mut offset = 0usize;

    while payload.len() - offset >= 2 {
        let octet0 = payload[offset];
        let octet1 = payload[offset + 1];
        offset += 2;

        let (length, property_id) = if octet0 & 0x01 == SENSOR_FORMAT_A {
            let length = (((octet0 & 0x1E) >> 1) + 1) as usize;
            let property_id = ((octet1 as u16) << 3) | (octet0 >> 5) as u16;
            (length, property_id)
        } else {
            let Some(&octet2) = payload.get(offset) else {
                log::debug!("sensor status ends inside a Format B header");
                break;
            };
            offset += 1;
            let tlen = (octet0 & 0xFE) >> 1;
            let length = if tlen == FORMAT_B_ZERO_LENGTH { 0 } else { tlen as usize };
            let property_id = ((octet2 as u16) << 8) | octet1 as u16;
            (length, property_id)
        };

        let end = (offset + length).min(payload.len());
        let raw = payload[offset..end].to_vec();
        offset = end;

        let value = registry.decode(property_id, &raw);
        entries.push(DecodedSensorEntry { property_id, raw, value });
    }

    entries
}

/// Build one marshalled `(property id, value bytes)` entry.
///
/// Format A is used when the property id fits in 11 bits and the length in
/// 1..=16 bytes; everything else uses Format B.
pub fn encode_status_entry(property_id: u16, value: &[u8]) -> Vec<u8> {
    // the Format B length field is 7 bits
    debug_assert!(value.len() <= 127, "sensor value exceeds the 127-byte framing limit");

    let mut buf = Vec::with_capacity(3 + value.len());

    let fits_format_a =
        property_id != 0 && property_id <= 0x07FF && (1..=16).contains(&value.len());
    if fits_format_a {
        let len_field = (value.len() - 1) as u8;
        buf.put_u8(SENSOR_FORMAT_A | (len_field << 1) | (((property_id & 0x07) as u8) << 5));
        buf.put_u8((property_id >> 3) as u8);
    } else {
        let len_field = if value.is_empty() {
            FORMAT_B_ZERO_LENGTH
        } else {
            value.len() as u8
        };
        buf.put_u8(SENSOR_FORMAT_B | (len_field << 1));
        buf.put_u16_le(property_id);
    }

    buf.extend_from_slice(value);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::Characteristic;
    use crate::properties::*;

    #[test]
    fn test_format_a_header_round_trip() {
        let entry = encode_status_entry(PRESENT_AMBIENT_TEMPERATURE, &[0x28]);
        // Format A: 1-byte value, pid 0x004F.
        assert_eq!(entry[0] & 0x01, SENSOR_FORMAT_A);

        let registry = CharacteristicRegistry::default();
        let parsed = parse_sensor_status(&registry, &entry);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].property_id, PRESENT_AMBIENT_TEMPERATURE);
        assert_eq!(parsed[0].raw, vec![0x28]);
        assert_eq!(parsed[0].value, SensorValue::Number(20.0));
    }

    #[test]
    fn test_format_b_header_round_trip() {
        // Property id above 11 bits forces Format B.
        let entry = encode_status_entry(0x1234, &[0xAA, 0xBB]);
        assert_eq!(entry[0] & 0x01, SENSOR_FORMAT_B);

        let registry = CharacteristicRegistry::default();
        let parsed = parse_sensor_status(&registry, &entry);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].property_id, 0x1234);
        assert_eq!(parsed[0].raw, vec![0xAA, 0xBB]);
        assert_eq!(parsed[0].value, SensorValue::Raw(vec![0xAA, 0xBB]));
    }

    #[test]
    fn test_format_b_zero_length() {
        let entry = encode_status_entry(0x1234, &[]);
        assert_eq!((entry[0] & 0xFE) >> 1, 0x7F);

        let registry = CharacteristicRegistry::default();
        let parsed = parse_sensor_status(&registry, &entry);
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].raw.is_empty());
    }

    #[test]
    fn test_format_b_length_field_above_sixteen_bytes() {
        // too long for Format A, well within the 7-bit Format B field
        let value = vec![0x55u8; 100];
        let entry = encode_status_entry(0x004D, &value);
        assert_eq!(entry[0] & 0x01, SENSOR_FORMAT_B);
        assert_eq!((entry[0] & 0xFE) >> 1, 100);

        let registry = CharacteristicRegistry::empty();
        let parsed = parse_sensor_status(&registry, &entry);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].raw, value);
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let registry = CharacteristicRegistry::default();

        let mut payload = Vec::new();
        payload.extend(encode_status_entry(PRESENT_AMBIENT_TEMPERATURE, &[0x28]));
        payload.extend(encode_status_entry(
            PRESENT_AMBIENT_RELATIVE_HUMIDITY,
            &[0x9C, 0x18],
        ));
        payload.extend(encode_status_entry(PRESENCE_DETECTED, &[0x01]));

        let parsed = parse_sensor_status(&registry, &payload);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].property_id, PRESENT_AMBIENT_TEMPERATURE);
        assert_eq!(parsed[1].property_id, PRESENT_AMBIENT_RELATIVE_HUMIDITY);
        assert_eq!(parsed[1].value, SensorValue::Number(63.0));
        assert_eq!(parsed[2].value, SensorValue::Bool(true));
    }

    #[test]
    fn test_truncated_value_decodes_unknown() {
        let registry = CharacteristicRegistry::default();

        // Humidity claims 2 bytes but the payload ends after 1.
        let mut payload = encode_status_entry(PRESENT_AMBIENT_RELATIVE_HUMIDITY, &[0x9C, 0x18]);
        payload.pop();

        let parsed = parse_sensor_status(&registry, &payload);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].raw, vec![0x9C]);
        assert_eq!(parsed[0].value, SensorValue::Unknown);
    }

    #[test]
    fn test_entry_serializes_with_camel_case_fields() {
        let registry = CharacteristicRegistry::default();
        let entry = encode_status_entry(PRESENT_AMBIENT_TEMPERATURE, &[0x28]);
        let parsed = parse_sensor_status(&registry, &entry);

        let json = serde_json::to_value(&parsed[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "propertyId": PRESENT_AMBIENT_TEMPERATURE,
                "raw": [0x28],
                "value": 20.0,
            })
        );
    }

    #[test]
    fn test_unknown_value_serializes_as_null() {
        let value = serde_json::to_value(SensorValue::Unknown).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_custom_registration_applies_to_parse() {
        let mut registry = CharacteristicRegistry::default();
        registry.register(0x1234, Characteristic::Uint16);

        let entry = encode_status_entry(0x1234, &[0x39, 0x30]);
        let parsed = parse_sensor_status(&registry, &entry);
        assert_eq!(parsed[0].value, SensorValue::Number(12345.0));
    }
}
