//! Mesh operation codes.
//!
//! Values are the assigned opcodes from the Mesh Profile and Mesh Model
//! specifications. Configuration and SIG opcodes live in overlapping
//! numbering spaces, which is why correlation keeps the families apart.

// ============================================================================
// Configuration model opcodes
// ============================================================================

pub const CONFIG_APPKEY_ADD: u32 = 0x0000;
pub const CONFIG_APPKEY_UPDATE: u32 = 0x0001;
pub const CONFIG_COMPOSITION_DATA_STATUS: u32 = 0x0002;
pub const CONFIG_MODEL_PUBLICATION_SET: u32 = 0x0003;
pub const CONFIG_APPKEY_DELETE: u32 = 0x8000;
pub const CONFIG_APPKEY_GET: u32 = 0x8001;
pub const CONFIG_APPKEY_LIST: u32 = 0x8002;
pub const CONFIG_APPKEY_STATUS: u32 = 0x8003;
pub const CONFIG_COMPOSITION_DATA_GET: u32 = 0x8008;
pub const CONFIG_DEFAULT_TTL_GET: u32 = 0x800C;
pub const CONFIG_DEFAULT_TTL_SET: u32 = 0x800D;
pub const CONFIG_DEFAULT_TTL_STATUS: u32 = 0x800E;
pub const CONFIG_MODEL_PUBLICATION_GET: u32 = 0x8018;
pub const CONFIG_MODEL_PUBLICATION_STATUS: u32 = 0x8019;
pub const CONFIG_MODEL_SUBSCRIPTION_ADD: u32 = 0x801B;
pub const CONFIG_MODEL_SUBSCRIPTION_DELETE: u32 = 0x801C;
pub const CONFIG_MODEL_SUBSCRIPTION_DELETE_ALL: u32 = 0x801D;
pub const CONFIG_MODEL_SUBSCRIPTION_OVERWRITE: u32 = 0x801E;
pub const CONFIG_MODEL_SUBSCRIPTION_STATUS: u32 = 0x801F;
pub const CONFIG_NETWORK_TRANSMIT_GET: u32 = 0x8023;
pub const CONFIG_NETWORK_TRANSMIT_SET: u32 = 0x8024;
pub const CONFIG_NETWORK_TRANSMIT_STATUS: u32 = 0x8025;
pub const CONFIG_MODEL_APP_BIND: u32 = 0x803D;
pub const CONFIG_MODEL_APP_STATUS: u32 = 0x803E;
pub const CONFIG_MODEL_APP_UNBIND: u32 = 0x803F;
pub const CONFIG_NODE_RESET: u32 = 0x8049;
pub const CONFIG_NODE_RESET_STATUS: u32 = 0x804A;

// ============================================================================
// Generic OnOff opcodes
// ============================================================================

pub const GENERIC_ON_OFF_GET: u32 = 0x8201;
pub const GENERIC_ON_OFF_SET: u32 = 0x8202;
pub const GENERIC_ON_OFF_SET_UNACKNOWLEDGED: u32 = 0x8203;
pub const GENERIC_ON_OFF_STATUS: u32 = 0x8204;

// ============================================================================
// Sensor model opcodes
// ============================================================================

pub const SENSOR_DESCRIPTOR_STATUS: u32 = 0x51;
pub const SENSOR_STATUS: u32 = 0x52;
pub const SENSOR_COLUMN_STATUS: u32 = 0x53;
pub const SENSOR_SERIES_STATUS: u32 = 0x54;
pub const SENSOR_CADENCE_SET: u32 = 0x55;
pub const SENSOR_CADENCE_SET_UNACKNOWLEDGED: u32 = 0x56;
pub const SENSOR_CADENCE_STATUS: u32 = 0x57;
pub const SENSOR_SETTINGS_STATUS: u32 = 0x58;
pub const SENSOR_SETTING_SET: u32 = 0x59;
pub const SENSOR_SETTING_SET_UNACKNOWLEDGED: u32 = 0x5A;
pub const SENSOR_SETTING_STATUS: u32 = 0x5B;
pub const SENSOR_DESCRIPTOR_GET: u32 = 0x8230;
pub const SENSOR_GET: u32 = 0x8231;
pub const SENSOR_COLUMN_GET: u32 = 0x8232;
pub const SENSOR_SERIES_GET: u32 = 0x8233;
pub const SENSOR_CADENCE_GET: u32 = 0x8234;
pub const SENSOR_SETTINGS_GET: u32 = 0x8235;
pub const SENSOR_SETTING_GET: u32 = 0x8236;

// ============================================================================
// Bridge pseudo-opcodes
// ============================================================================
//
// Network-level calls (init, identify, provision) have no mesh opcode; the
// bridge correlates them with ids outside the 24-bit mesh opcode space.

pub const BRIDGE_NETWORK_INIT: u32 = 0x0800_0000;
pub const BRIDGE_NODE_IDENTIFY: u32 = 0x0800_0001;
pub const BRIDGE_NODE_PROVISION: u32 = 0x0800_0002;
