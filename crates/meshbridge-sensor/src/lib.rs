//! Bluetooth Mesh Sensor model characteristic codec.
//!
//! The Sensor model transmits property values as compact binary blobs whose
//! interpretation depends on the property id. This crate provides:
//!
//! - **Device property ids** (`properties`): the numeric ids from the Mesh
//!   Device Properties specification.
//! - **Characteristics** (`characteristic`): per-property codecs that decode
//!   a byte slice into a typed [`SensorValue`] and re-encode it.
//! - **Status framing** (`status`): the Format A / Format B walk over a
//!   Sensor Status payload, producing one [`DecodedSensorEntry`] per
//!   property.
//!
//! # Example
//!
//! ```rust,ignore
//! use meshbridge_sensor::{CharacteristicRegistry, parse_sensor_status};
//!
//! let registry = CharacteristicRegistry::default();
//! let entries = parse_sensor_status(&registry, &payload);
//! ```
//!
//! Decoding is total: an unregistered property id decodes to a raw-bytes
//! passthrough and a payload too short for a fixed-width field decodes to
//! an unknown value. Neither is an error.

mod characteristic;
mod error;
pub mod properties;
mod status;

pub use characteristic::*;
pub use error::*;
pub use status::*;
