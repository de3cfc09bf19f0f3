//! Sensor codec error types.

use thiserror::Error;

/// Errors that can occur when encoding sensor values.
///
/// Decoding is total and never returns an error; see
/// [`Characteristic::decode`](crate::Characteristic::decode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The value's kind does not match the characteristic's wire layout.
    #[error("{characteristic} cannot encode a {value} value")]
    ValueMismatch {
        /// Characteristic that rejected the value.
        characteristic: String,
        /// Kind of the offending value.
        value: &'static str,
    },
}
