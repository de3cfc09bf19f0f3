//! Request → expected-response opcode tables.
//!
//! A tracked request resolves against the status opcode its family pairs it
//! with. Unacknowledged operations have no pair and return `None`; vendor
//! opcodes are not enumerable, so the vendor "table" is the response opcode
//! the caller supplies at submission time.

use crate::messages::CallFamily;
use crate::opcodes::*;

/// Expected response opcode for a Configuration request. `None` for
/// operations with no tracked response.
pub fn config_response_opcode(request: u32) -> Option<u32> {
    match request {
        CONFIG_APPKEY_ADD | CONFIG_APPKEY_UPDATE | CONFIG_APPKEY_DELETE => {
            Some(CONFIG_APPKEY_STATUS)
        }
        CONFIG_APPKEY_GET => Some(CONFIG_APPKEY_LIST),
        CONFIG_COMPOSITION_DATA_GET => Some(CONFIG_COMPOSITION_DATA_STATUS),
        CONFIG_DEFAULT_TTL_GET | CONFIG_DEFAULT_TTL_SET => Some(CONFIG_DEFAULT_TTL_STATUS),
        CONFIG_NETWORK_TRANSMIT_GET | CONFIG_NETWORK_TRANSMIT_SET => {
            Some(CONFIG_NETWORK_TRANSMIT_STATUS)
        }
        CONFIG_MODEL_APP_BIND | CONFIG_MODEL_APP_UNBIND => Some(CONFIG_MODEL_APP_STATUS),
        CONFIG_MODEL_SUBSCRIPTION_ADD
        | CONFIG_MODEL_SUBSCRIPTION_DELETE
        | CONFIG_MODEL_SUBSCRIPTION_DELETE_ALL
        | CONFIG_MODEL_SUBSCRIPTION_OVERWRITE => Some(CONFIG_MODEL_SUBSCRIPTION_STATUS),
        CONFIG_MODEL_PUBLICATION_GET | CONFIG_MODEL_PUBLICATION_SET => {
            Some(CONFIG_MODEL_PUBLICATION_STATUS)
        }
        CONFIG_NODE_RESET => Some(CONFIG_NODE_RESET_STATUS),
        _ => None,
    }
}

/// Expected response opcode for a SIG request. `None` for operations with
/// no tracked response.
pub fn sig_response_opcode(request: u32) -> Option<u32> {
    match request {
        GENERIC_ON_OFF_GET | GENERIC_ON_OFF_SET => Some(GENERIC_ON_OFF_STATUS),
        SENSOR_GET => Some(SENSOR_STATUS),
        SENSOR_DESCRIPTOR_GET => Some(SENSOR_DESCRIPTOR_STATUS),
        SENSOR_COLUMN_GET => Some(SENSOR_COLUMN_STATUS),
        SENSOR_SERIES_GET => Some(SENSOR_SERIES_STATUS),
        SENSOR_CADENCE_GET | SENSOR_CADENCE_SET => Some(SENSOR_CADENCE_STATUS),
        SENSOR_SETTINGS_GET => Some(SENSOR_SETTINGS_STATUS),
        SENSOR_SETTING_GET | SENSOR_SETTING_SET => Some(SENSOR_SETTING_STATUS),
        _ => None,
    }
}

/// Expected response opcode for a request in the given family.
///
/// Vendor pairing is caller-supplied, so this always returns `None` for the
/// vendor family.
pub fn response_opcode(family: CallFamily, request: u32) -> Option<u32> {
    match family {
        CallFamily::Config => config_response_opcode(request),
        CallFamily::Sig => sig_response_opcode(request),
        CallFamily::Vendor => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_pairs() {
        assert_eq!(
            config_response_opcode(CONFIG_COMPOSITION_DATA_GET),
            Some(CONFIG_COMPOSITION_DATA_STATUS)
        );
        assert_eq!(config_response_opcode(CONFIG_APPKEY_GET), Some(CONFIG_APPKEY_LIST));
        assert_eq!(
            config_response_opcode(CONFIG_MODEL_APP_UNBIND),
            Some(CONFIG_MODEL_APP_STATUS)
        );
        assert_eq!(config_response_opcode(CONFIG_NODE_RESET), Some(CONFIG_NODE_RESET_STATUS));
    }

    #[test]
    fn test_sig_pairs() {
        assert_eq!(sig_response_opcode(GENERIC_ON_OFF_SET), Some(GENERIC_ON_OFF_STATUS));
        assert_eq!(sig_response_opcode(SENSOR_GET), Some(SENSOR_STATUS));
        assert_eq!(sig_response_opcode(SENSOR_SETTING_SET), Some(SENSOR_SETTING_STATUS));
    }

    #[test]
    fn test_unknown_request_has_no_pair() {
        assert_eq!(config_response_opcode(0xFFFF_FFFF), None);
        assert_eq!(sig_response_opcode(GENERIC_ON_OFF_SET_UNACKNOWLEDGED), None);
        assert_eq!(response_opcode(CallFamily::Vendor, 0x00C1_0059), None);
    }
}
