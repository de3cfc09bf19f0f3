//! Per-property sensor characteristics.
//!
//! Each device property is backed by a characteristic that defines its wire
//! layout and decoded value type. Decoding is total: a slice that is too
//! short for the characteristic's fixed width yields [`SensorValue::Unknown`]
//! and an unregistered property falls back to a raw-bytes passthrough.
//! Encoding can fail, because a value of the wrong kind cannot be written in
//! the characteristic's layout.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::SensorError;
use crate::properties::*;

/// A decoded sensor property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// Single-bit properties (presence detected, etc.).
    Bool(bool),
    /// Scalar values after fixed-point scaling.
    Number(f64),
    /// Fixed-length string properties.
    Text(String),
    /// Date properties, milliseconds since the Unix epoch.
    TimestampMs(i64),
    /// Passthrough for properties with no registered characteristic.
    Raw(Vec<u8>),
    /// Sentinel or undecodable value. Serializes as `null`.
    Unknown,
}

impl SensorValue {
    fn kind(&self) -> &'static str {
        match self {
            SensorValue::Bool(_) => "bool",
            SensorValue::Number(_) => "number",
            SensorValue::Text(_) => "text",
            SensorValue::TimestampMs(_) => "timestamp",
            SensorValue::Raw(_) => "raw",
            SensorValue::Unknown => "unknown",
        }
    }
}

/// Temperature wire scale, selected by payload width on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    /// 1-byte signed, half-degree steps.
    Celsius,
    /// 2-byte signed little-endian, hundredth-degree steps.
    Fahrenheit,
}

/// Wire codec for one sensor property.
#[derive(Debug, Clone, PartialEq)]
pub enum Characteristic {
    /// 1 byte, `0x01` = true; an absent byte decodes as false.
    Bool,
    /// 1 signed byte, 0.5 % steps; `0xFF` is the unknown sentinel.
    Percentage8,
    /// Signed temperature; the scale governs the encoded width.
    Temperature(TemperatureScale),
    /// Little-endian unsigned, 2 or 3 bytes by magnitude.
    Count,
    /// 2-byte little-endian unsigned, 0.01 % steps.
    Humidity,
    /// 2-byte little-endian unsigned, unscaled.
    PerceivedLightness,
    /// Little-endian unsigned seconds, 1/2/4 bytes.
    TimeSecond,
    /// 3-byte little-endian unsigned, centi-lux steps.
    Illuminance,
    /// 3-byte little-endian unsigned hours.
    TimeHour24,
    /// 3-byte little-endian unsigned milliseconds, decoded to seconds.
    TimeMillisecond24,
    /// 3-byte little-endian day count since the epoch.
    DateUtc,
    /// 4-byte little-endian unsigned, decipascal steps.
    Pressure,
    /// 4-byte IEEE-754 single precision, little-endian.
    Coefficient,
    /// ASCII, padded to the smallest fixed bucket of {8,16,24,36,64}.
    FixedString,
    /// 4-byte little-endian unsigned, milli-unit steps.
    Energy32,
    /// 3-byte little-endian unsigned, 0.1 W steps.
    Power,
    /// 2-byte little-endian unsigned, 0.01 A steps.
    ElectricCurrent,
    Uint8,
    Uint16,
    Uint32,
    Int8,
    Int16,
    Int32,
    /// `Uint16` scaled by a caller-supplied decimal exponent.
    Uint16Value(i32),
    /// `Uint32` scaled by a caller-supplied decimal exponent.
    Uint32Value(i32),
    /// `Int16` scaled by a caller-supplied decimal exponent.
    Int16Value(i32),
    /// `Int32` scaled by a caller-supplied decimal exponent.
    Int32Value(i32),
    /// Raw passthrough for unregistered properties.
    Unknown,
}

/// Fixed string bucket sizes, smallest first.
const FIXED_STRING_BUCKETS: [usize; 5] = [8, 16, 24, 36, 64];

fn uint_le(bytes: &[u8]) -> u64 {
    let mut v: u64 = 0;
    for (i, b) in bytes.iter().enumerate() {
        v |= (*b as u64) << (8 * i);
    }
    v
}

fn uint_le_n(bytes: &[u8], width: usize) -> Option<u64> {
    if bytes.len() < width {
        None
    } else {
        Some(uint_le(&bytes[..width]))
    }
}

fn write_uint_le(value: u64, width: usize) -> Vec<u8> {
    (0..width).map(|i| ((value >> (8 * i)) & 0xFF) as u8).collect()
}

/// Sign-extend a `width`-byte little-endian value.
fn int_le_n(bytes: &[u8], width: usize) -> Option<i64> {
    let raw = uint_le_n(bytes, width)?;
    let shift = 64 - 8 * width as u32;
    Some(((raw << shift) as i64) >> shift)
}

fn expect_number(ch: &Characteristic, value: &SensorValue) -> Result<f64, SensorError> {
    match value {
        SensorValue::Number(v) => Ok(*v),
        other => Err(SensorError::ValueMismatch {
            characteristic: format!("{ch:?}"),
            value: other.kind(),
        }),
    }
}

/// Truncate toward zero, matching integer quantization on the wire.
fn quantize(value: f64) -> i64 {
    value.trunc() as i64
}

impl Characteristic {
    /// Decode a value slice into a typed value. Total: short or malformed
    /// input yields `SensorValue::Unknown` rather than an error.
    pub fn decode(&self, bytes: &[u8]) -> SensorValue {
        match self {
            Characteristic::Bool => SensorValue::Bool(!bytes.is_empty() && bytes[0] == 0x01),
            Characteristic::Percentage8 => match bytes.first() {
                None => SensorValue::Unknown,
                Some(0xFF) => SensorValue::Unknown,
                Some(&b) => SensorValue::Number((b as i8) as f64 / 2.0),
            },
            Characteristic::Temperature(_) => match bytes.len() {
                1 => SensorValue::Number((bytes[0] as i8) as f64 / 2.0),
                2 => {
                    let raw = u16::from_le_bytes([bytes[0], bytes[1]]);
                    if raw == 0x8000 {
                        SensorValue::Unknown
                    } else {
                        SensorValue::Number((raw as i16) as f64 / 100.0)
                    }
                }
                _ => SensorValue::Unknown,
            },
            Characteristic::Count => match bytes.len() {
                2 | 3 => SensorValue::Number(uint_le(bytes) as f64),
                _ => SensorValue::Unknown,
            },
            Characteristic::Humidity => match uint_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64 / 100.0),
                None => SensorValue::Unknown,
            },
            Characteristic::PerceivedLightness => match uint_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::TimeSecond => match bytes.len() {
                1 | 2 | 4 => SensorValue::Number(uint_le(bytes) as f64),
                _ => SensorValue::Unknown,
            },
            Characteristic::Illuminance => match uint_le_n(bytes, 3) {
                Some(raw) => SensorValue::Number(raw as f64 / 100.0),
                None => SensorValue::Unknown,
            },
            Characteristic::TimeHour24 => match uint_le_n(bytes, 3) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::TimeMillisecond24 => match uint_le_n(bytes, 3) {
                Some(raw) => SensorValue::Number(raw as f64 / 1000.0),
                None => SensorValue::Unknown,
            },
            Characteristic::DateUtc => match uint_le_n(bytes, 3) {
                Some(days) => SensorValue::TimestampMs(days as i64 * 86_400_000),
                None => SensorValue::Unknown,
            },
            Characteristic::Pressure => match uint_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64 / 10.0),
                None => SensorValue::Unknown,
            },
            Characteristic::Coefficient => {
                if bytes.len() < 4 {
                    SensorValue::Unknown
                } else {
                    let raw = [bytes[0], bytes[1], bytes[2], bytes[3]];
                    SensorValue::Number(f32::from_le_bytes(raw) as f64)
                }
            }
            Characteristic::FixedString => {
                let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
                SensorValue::Text(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            Characteristic::Energy32 => match uint_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64 / 1000.0),
                None => SensorValue::Unknown,
            },
            Characteristic::Power => match uint_le_n(bytes, 3) {
                Some(raw) => SensorValue::Number(raw as f64 / 10.0),
                None => SensorValue::Unknown,
            },
            Characteristic::ElectricCurrent => match uint_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64 / 100.0),
                None => SensorValue::Unknown,
            },
            Characteristic::Uint8 => match uint_le_n(bytes, 1) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Uint16 => match uint_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Uint32 => match uint_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Int8 => match int_le_n(bytes, 1) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Int16 => match int_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Int32 => match int_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64),
                None => SensorValue::Unknown,
            },
            Characteristic::Uint16Value(exp) => match uint_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64 / 10f64.powi(*exp)),
                None => SensorValue::Unknown,
            },
            Characteristic::Uint32Value(exp) => match uint_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64 / 10f64.powi(*exp)),
                None => SensorValue::Unknown,
            },
            Characteristic::Int16Value(exp) => match int_le_n(bytes, 2) {
                Some(raw) => SensorValue::Number(raw as f64 / 10f64.powi(*exp)),
                None => SensorValue::Unknown,
            },
            Characteristic::Int32Value(exp) => match int_le_n(bytes, 4) {
                Some(raw) => SensorValue::Number(raw as f64 / 10f64.powi(*exp)),
                None => SensorValue::Unknown,
            },
            Characteristic::Unknown => SensorValue::Raw(bytes.to_vec()),
        }
    }

    /// Re-encode a typed value into the characteristic's wire layout.
    pub fn encode(&self, value: &SensorValue) -> Result<Vec<u8>, SensorError> {
        match self {
            Characteristic::Bool => match value {
                SensorValue::Bool(v) => Ok(vec![if *v { 0x01 } else { 0x00 }]),
                other => Err(SensorError::ValueMismatch {
                    characteristic: format!("{self:?}"),
                    value: other.kind(),
                }),
            },
            Characteristic::Percentage8 => match value {
                SensorValue::Unknown => Ok(vec![0xFF]),
                _ => {
                    let v = expect_number(self, value)?;
                    Ok(vec![(quantize(v * 2.0) as i8) as u8])
                }
            },
            Characteristic::Temperature(scale) => match (scale, value) {
                (TemperatureScale::Fahrenheit, SensorValue::Unknown) => Ok(vec![0x00, 0x80]),
                (TemperatureScale::Celsius, _) => {
                    let v = expect_number(self, value)?;
                    Ok(vec![(quantize(v * 2.0) as i8) as u8])
                }
                (TemperatureScale::Fahrenheit, _) => {
                    let v = expect_number(self, value)?;
                    Ok((quantize(v * 100.0) as i16).to_le_bytes().to_vec())
                }
            },
            Characteristic::Count => {
                let v = quantize(expect_number(self, value)?) as u64;
                let width = if v > 0xFFFF { 3 } else { 2 };
                Ok(write_uint_le(v, width))
            }
            Characteristic::Humidity => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 100.0) as u64, 2))
            }
            Characteristic::PerceivedLightness => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64, 2))
            }
            Characteristic::TimeSecond => {
                let v = quantize(expect_number(self, value)?) as u64;
                let width = if v > 0xFFFF {
                    4
                } else if v > 0xFF {
                    2
                } else {
                    1
                };
                Ok(write_uint_le(v, width))
            }
            Characteristic::Illuminance => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 100.0) as u64, 3))
            }
            Characteristic::TimeHour24 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64, 3))
            }
            Characteristic::TimeMillisecond24 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 1000.0) as u64, 3))
            }
            Characteristic::DateUtc => match value {
                SensorValue::TimestampMs(ms) => {
                    Ok(write_uint_le((ms / 86_400_000) as u64, 3))
                }
                other => Err(SensorError::ValueMismatch {
                    characteristic: format!("{self:?}"),
                    value: other.kind(),
                }),
            },
            Characteristic::Pressure => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 10.0) as u64, 4))
            }
            Characteristic::Coefficient => {
                let v = expect_number(self, value)?;
                Ok((v as f32).to_le_bytes().to_vec())
            }
            Characteristic::FixedString => match value {
                SensorValue::Text(text) => {
                    let mut raw = text.as_bytes().to_vec();
                    raw.truncate(64);
                    let bucket = FIXED_STRING_BUCKETS
                        .iter()
                        .copied()
                        .find(|&b| raw.len() <= b)
                        .unwrap_or(64);
                    if raw.is_empty() {
                        return Ok(raw);
                    }
                    raw.resize(bucket, 0);
                    Ok(raw)
                }
                other => Err(SensorError::ValueMismatch {
                    characteristic: format!("{self:?}"),
                    value: other.kind(),
                }),
            },
            Characteristic::Energy32 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 1000.0) as u64, 4))
            }
            Characteristic::Power => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 10.0) as u64, 3))
            }
            Characteristic::ElectricCurrent => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 100.0) as u64, 2))
            }
            Characteristic::Uint8 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64, 1))
            }
            Characteristic::Uint16 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64, 2))
            }
            Characteristic::Uint32 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64, 4))
            }
            Characteristic::Int8 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64 & 0xFF, 1))
            }
            Characteristic::Int16 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64 & 0xFFFF, 2))
            }
            Characteristic::Int32 => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v) as u64 & 0xFFFF_FFFF, 4))
            }
            Characteristic::Uint16Value(exp) => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 10f64.powi(*exp)) as u64, 2))
            }
            Characteristic::Uint32Value(exp) => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 10f64.powi(*exp)) as u64, 4))
            }
            Characteristic::Int16Value(exp) => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(quantize(v * 10f64.powi(*exp)) as u64 & 0xFFFF, 2))
            }
            Characteristic::Int32Value(exp) => {
                let v = expect_number(self, value)?;
                Ok(write_uint_le(
                    quantize(v * 10f64.powi(*exp)) as u64 & 0xFFFF_FFFF,
                    4,
                ))
            }
            Characteristic::Unknown => match value {
                SensorValue::Raw(raw) => Ok(raw.clone()),
                other => Err(SensorError::ValueMismatch {
                    characteristic: format!("{self:?}"),
                    value: other.kind(),
                }),
            },
        }
    }
}

/// Explicit property-id → characteristic map.
///
/// `Default` yields the standard Mesh Device Properties assignment; tests
/// and vendor integrations may register additional codecs without touching
/// shared state.
#[derive(Debug, Clone)]
pub struct CharacteristicRegistry {
    map: HashMap<u16, Characteristic>,
}

impl CharacteristicRegistry {
    /// An empty registry; every property decodes as a raw passthrough.
    pub fn empty() -> Self {
        CharacteristicRegistry { map: HashMap::new() }
    }

    /// Register (or replace) the characteristic for a property id.
    pub fn register(&mut self, property_id: u16, characteristic: Characteristic) {
        self.map.insert(property_id, characteristic);
    }

    /// Look up the characteristic for a property id.
    pub fn lookup(&self, property_id: u16) -> Option<&Characteristic> {
        self.map.get(&property_id)
    }

    /// Decode a value slice for a property. Unregistered ids decode to a
    /// raw-bytes passthrough.
    pub fn decode(&self, property_id: u16, bytes: &[u8]) -> SensorValue {
        match self.map.get(&property_id) {
            Some(ch) => ch.decode(bytes),
            None => {
                log::trace!("no characteristic for property 0x{property_id:04X}, passing raw");
                SensorValue::Raw(bytes.to_vec())
            }
        }
    }

    /// Encode a typed value for a property. Unregistered ids accept only
    /// raw bytes.
    pub fn encode(&self, property_id: u16, value: &SensorValue) -> Result<Vec<u8>, SensorError> {
        match self.map.get(&property_id) {
            Some(ch) => ch.encode(value),
            None => Characteristic::Unknown.encode(value),
        }
    }
}

impl Default for CharacteristicRegistry {
    fn default() -> Self {
        use Characteristic::*;
        let celsius = Temperature(TemperatureScale::Celsius);
        let assignments: &[(&[u16], Characteristic)] = &[
            (&[PRESENCE_DETECTED], Bool),
            (
                &[
                    LIGHT_CONTROL_REGULATOR_ACCURACY,
                    OUTPUT_RIPPLE_VOLTAGE_SPECIFICATION,
                    INPUT_VOLTAGE_RIPPLE_SPECIFICATION,
                    OUTPUT_CURRENT_PERCENT,
                    LUMEN_MAINTENANCE_FACTOR,
                    MOTION_SENSED,
                    MOTION_THRESHOLD,
                    PRESENT_DEVICE_OPERATING_EFFICIENCY,
                    PRESENT_RELATIVE_OUTPUT_RIPPLE_VOLTAGE,
                    PRESENT_INPUT_RIPPLE_VOLTAGE,
                ],
                Percentage8,
            ),
            (
                &[
                    DESIRED_AMBIENT_TEMPERATURE,
                    PRESENT_AMBIENT_TEMPERATURE,
                    PRESENT_INDOOR_AMBIENT_TEMPERATURE,
                    PRESENT_OUTDOOR_AMBIENT_TEMPERATURE,
                    PRECISE_PRESENT_AMBIENT_TEMPERATURE,
                    PRESENT_DEVICE_OPERATING_TEMPERATURE,
                ],
                celsius,
            ),
            (
                &[
                    PEOPLE_COUNT,
                    LIGHT_SOURCE_START_COUNTER_RESETTABLE,
                    LIGHT_SOURCE_TOTAL_POWER_ON_CYCLES,
                    RATED_MEDIAN_USEFUL_LIGHT_SOURCE_STARTS,
                    TOTAL_DEVICE_OFF_ON_CYCLES,
                    TOTAL_DEVICE_POWER_ON_CYCLES,
                    TOTAL_DEVICE_STARTS,
                ],
                Count,
            ),
            (
                &[
                    PRESENT_AMBIENT_RELATIVE_HUMIDITY,
                    PRESENT_INDOOR_RELATIVE_HUMIDITY,
                    PRESENT_OUTDOOR_RELATIVE_HUMIDITY,
                ],
                Humidity,
            ),
            (
                &[
                    LIGHT_CONTROL_LIGHTNESS_ON,
                    LIGHT_CONTROL_LIGHTNESS_PROLONG,
                    LIGHT_CONTROL_LIGHTNESS_STANDBY,
                ],
                PerceivedLightness,
            ),
            (
                &[TIME_SINCE_MOTION_SENSED, TIME_SINCE_PRESENCE_DETECTED],
                TimeSecond,
            ),
            (
                &[
                    LIGHT_CONTROL_AMBIENT_LUX_LEVEL_ON,
                    LIGHT_CONTROL_AMBIENT_LUX_LEVEL_PROLONG,
                    LIGHT_CONTROL_AMBIENT_LUX_LEVEL_STANDBY,
                    PRESENT_AMBIENT_LIGHT_LEVEL,
                    PRESENT_ILLUMINANCE,
                ],
                Illuminance,
            ),
            (
                &[
                    DEVICE_RUNTIME_SINCE_TURN_ON,
                    DEVICE_RUNTIME_WARRANTY,
                    RATED_MEDIAN_USEFUL_LIFE_OF_LUMINAIRE,
                    TOTAL_DEVICE_POWER_ON_TIME,
                    TOTAL_DEVICE_RUNTIME,
                    TOTAL_LIGHT_EXPOSURE_TIME,
                ],
                TimeHour24,
            ),
            (
                &[
                    LIGHT_CONTROL_TIME_FADE,
                    LIGHT_CONTROL_TIME_FADE_ON,
                    LIGHT_CONTROL_TIME_FADE_STANDBY_AUTO,
                    LIGHT_CONTROL_TIME_FADE_STANDBY_MANUAL,
                    LIGHT_CONTROL_TIME_OCCUPANCY_DELAY,
                    LIGHT_CONTROL_TIME_PROLONG,
                    LIGHT_CONTROL_TIME_RUN_ON,
                ],
                TimeMillisecond24,
            ),
            (
                &[DEVICE_DATE_OF_MANUFACTURE, LUMINAIRE_TIME_OF_MANUFACTURE],
                DateUtc,
            ),
            (&[PRESSURE, AIR_PRESSURE], Pressure),
            (
                &[
                    LIGHT_CONTROL_REGULATOR_KID,
                    LIGHT_CONTROL_REGULATOR_KIU,
                    LIGHT_CONTROL_REGULATOR_KPD,
                    LIGHT_CONTROL_REGULATOR_KPU,
                    SENSOR_GAIN,
                ],
                Coefficient,
            ),
            (
                &[
                    DEVICE_HARDWARE_REVISION,
                    DEVICE_SERIAL_NUMBER,
                    DEVICE_MODEL_NUMBER,
                    LUMINAIRE_COLOR,
                    LUMINAIRE_IDENTIFICATION_NUMBER,
                    DEVICE_MANUFACTURER_NAME,
                    LUMINAIRE_IDENTIFICATION_STRING,
                ],
                FixedString,
            ),
            (
                &[ACTIVE_ENERGY_LOAD_SIDE, PRECISE_TOTAL_DEVICE_ENERGY_USE],
                Energy32,
            ),
            (
                &[
                    ACTIVE_POWER_LOAD_SIDE,
                    LUMINAIRE_NOMINAL_INPUT_POWER,
                    LUMINAIRE_POWER_AT_MINIMUM_DIM_LEVEL,
                    PRESENT_DEVICE_INPUT_POWER,
                ],
                Power,
            ),
            (
                &[PRESENT_INPUT_CURRENT, PRESENT_OUTPUT_CURRENT],
                ElectricCurrent,
            ),
        ];

        let mut map = HashMap::new();
        for (ids, characteristic) in assignments {
            for id in *ids {
                map.insert(*id, characteristic.clone());
            }
        }
        CharacteristicRegistry { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_celsius_decode() {
        let ch = Characteristic::Temperature(TemperatureScale::Celsius);
        assert_eq!(ch.decode(&[0x28]), SensorValue::Number(20.0));
        // Negative half-degree steps.
        assert_eq!(ch.decode(&[0xFF]), SensorValue::Number(-0.5));
    }

    #[test]
    fn test_temperature_fahrenheit_decode() {
        let ch = Characteristic::Temperature(TemperatureScale::Fahrenheit);
        assert_eq!(ch.decode(&[0x0C, 0x1C]), SensorValue::Number(71.80));
        // 0x8000 is the "value not known" sentinel.
        assert_eq!(ch.decode(&[0x00, 0x80]), SensorValue::Unknown);
    }

    #[test]
    fn test_temperature_round_trip() {
        let celsius = Characteristic::Temperature(TemperatureScale::Celsius);
        let encoded = celsius.encode(&SensorValue::Number(-12.5)).unwrap();
        assert_eq!(encoded, vec![0xE7]);
        assert_eq!(celsius.decode(&encoded), SensorValue::Number(-12.5));

        let fahrenheit = Characteristic::Temperature(TemperatureScale::Fahrenheit);
        let encoded = fahrenheit.encode(&SensorValue::Number(71.80)).unwrap();
        assert_eq!(encoded, vec![0x0C, 0x1C]);
        assert_eq!(fahrenheit.decode(&encoded), SensorValue::Number(71.80));
    }

    #[test]
    fn test_percentage8_quantized_round_trip() {
        let ch = Characteristic::Percentage8;
        // 0.5 % steps: 42.3 quantizes to 42.0.
        let encoded = ch.encode(&SensorValue::Number(42.3)).unwrap();
        assert_eq!(ch.decode(&encoded), SensorValue::Number(42.0));
        // Unknown sentinel.
        assert_eq!(ch.encode(&SensorValue::Unknown).unwrap(), vec![0xFF]);
        assert_eq!(ch.decode(&[0xFF]), SensorValue::Unknown);
    }

    #[test]
    fn test_bool_decode() {
        let ch = Characteristic::Bool;
        assert_eq!(ch.decode(&[0x01]), SensorValue::Bool(true));
        assert_eq!(ch.decode(&[0x00]), SensorValue::Bool(false));
        // Absent byte decodes as false.
        assert_eq!(ch.decode(&[]), SensorValue::Bool(false));
    }

    #[test]
    fn test_count_width_by_magnitude() {
        let ch = Characteristic::Count;
        assert_eq!(ch.encode(&SensorValue::Number(513.0)).unwrap(), vec![0x01, 0x02]);
        let wide = ch.encode(&SensorValue::Number(0x012345 as f64)).unwrap();
        assert_eq!(wide, vec![0x45, 0x23, 0x01]);
        assert_eq!(ch.decode(&wide), SensorValue::Number(0x012345 as f64));
    }

    #[test]
    fn test_humidity_decode() {
        let ch = Characteristic::Humidity;
        // 0x189C = 6300 -> 63.00 %
        assert_eq!(ch.decode(&[0x9C, 0x18]), SensorValue::Number(63.0));
    }

    #[test]
    fn test_illuminance_decode() {
        let ch = Characteristic::Illuminance;
        // 0x0186A0 = 100000 -> 1000.00 lux
        assert_eq!(ch.decode(&[0xA0, 0x86, 0x01]), SensorValue::Number(1000.0));
    }

    #[test]
    fn test_date_utc_round_trip() {
        let ch = Characteristic::DateUtc;
        // 19000 days since epoch.
        let value = SensorValue::TimestampMs(19_000i64 * 86_400_000);
        let encoded = ch.encode(&value).unwrap();
        assert_eq!(encoded.len(), 3);
        assert_eq!(ch.decode(&encoded), value);
    }

    #[test]
    fn test_coefficient_round_trip() {
        let ch = Characteristic::Coefficient;
        let encoded = ch.encode(&SensorValue::Number(0.25)).unwrap();
        assert_eq!(ch.decode(&encoded), SensorValue::Number(0.25));
    }

    #[test]
    fn test_fixed_string_buckets() {
        let ch = Characteristic::FixedString;
        let encoded = ch.encode(&SensorValue::Text("SN-1234".into())).unwrap();
        // 7 chars pads to the 8-byte bucket.
        assert_eq!(encoded.len(), 8);
        assert_eq!(ch.decode(&encoded), SensorValue::Text("SN-1234".into()));

        let encoded = ch
            .encode(&SensorValue::Text("a-very-long-serial-number".into()))
            .unwrap();
        assert_eq!(encoded.len(), 36);
    }

    #[test]
    fn test_signed_value_exponent() {
        let ch = Characteristic::Int16Value(2);
        let encoded = ch.encode(&SensorValue::Number(-3.21)).unwrap();
        assert_eq!(encoded, (-321i16).to_le_bytes().to_vec());
        assert_eq!(ch.decode(&encoded), SensorValue::Number(-3.21));
    }

    #[test]
    fn test_short_required_field_decodes_unknown() {
        assert_eq!(Characteristic::Pressure.decode(&[0x01, 0x02]), SensorValue::Unknown);
        assert_eq!(Characteristic::Humidity.decode(&[0x01]), SensorValue::Unknown);
        assert_eq!(
            Characteristic::Temperature(TemperatureScale::Fahrenheit).decode(&[]),
            SensorValue::Unknown
        );
    }

    #[test]
    fn test_value_kind_mismatch_is_error() {
        let err = Characteristic::Humidity
            .encode(&SensorValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, SensorError::ValueMismatch { .. }));
    }

    #[test]
    fn test_registry_unregistered_passthrough() {
        let registry = CharacteristicRegistry::default();
        assert_eq!(
            registry.decode(0x7FFF, &[0xDE, 0xAD]),
            SensorValue::Raw(vec![0xDE, 0xAD])
        );
    }

    #[test]
    fn test_registry_custom_registration() {
        let mut registry = CharacteristicRegistry::empty();
        registry.register(0x0042, Characteristic::Uint16Value(1));
        assert_eq!(registry.decode(0x0042, &[0x7B, 0x00]), SensorValue::Number(12.3));
    }

    #[test]
    fn test_default_registry_assignments() {
        let registry = CharacteristicRegistry::default();
        assert_eq!(
            registry.lookup(crate::properties::PRESENCE_DETECTED),
            Some(&Characteristic::Bool)
        );
        assert_eq!(
            registry.lookup(crate::properties::PRESENT_AMBIENT_RELATIVE_HUMIDITY),
            Some(&Characteristic::Humidity)
        );
        assert_eq!(registry.lookup(crate::properties::DEVICE_APPEARANCE), None);
    }
}
