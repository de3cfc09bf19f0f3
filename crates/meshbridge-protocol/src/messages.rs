//! Status messages delivered by the mesh stack.

use meshbridge_sensor::{CharacteristicRegistry, DecodedSensorEntry};

/// Message family, for correlation and formatter dispatch.
///
/// Configuration and SIG opcode spaces overlap, so each family keeps its own
/// opcode pair table and pending-call bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallFamily {
    /// Configuration model messages (device-key encrypted).
    Config,
    /// SIG application model messages (Generic OnOff, Sensor).
    Sig,
    /// Vendor model messages with caller-supplied opcode pairing.
    Vendor,
}

/// A status message: envelope plus kind-specific body.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshMessage {
    /// Source unicast address (the responding element).
    pub src: u16,
    /// Destination address the status was sent to.
    pub dst: u16,
    /// Mesh opcode of the status message.
    pub opcode: u32,
    /// Decoded body.
    pub body: StatusBody,
}

impl MeshMessage {
    /// Decode the marshalled property values of a Sensor Status body.
    ///
    /// Returns `None` for any other body kind. The formatter deliberately
    /// keeps Sensor Status `data` as raw parameter bytes; callers that want
    /// typed values apply the characteristic registry here.
    pub fn decode_sensor_entries(
        &self,
        registry: &CharacteristicRegistry,
    ) -> Option<Vec<DecodedSensorEntry>> {
        match &self.body {
            StatusBody::Sensor { parameters } => {
                Some(meshbridge_sensor::parse_sensor_status(registry, parameters))
            }
            _ => None,
        }
    }
}

/// Node feature support bits from Composition Data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeFeatures {
    pub relay: bool,
    pub proxy: bool,
    pub friend: bool,
    pub low_power: bool,
}

/// One model entry of a composition element.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// 16-bit SIG model id or 32-bit vendor model id.
    pub model_id: u32,
    /// Human-readable model name, as the mesh stack reports it.
    pub model_name: String,
    /// App key indexes currently bound to the model.
    pub bound_app_key_indexes: Vec<u16>,
}

impl ModelInfo {
    /// SIG model ids fit in 16 bits; vendor ids carry a company id above.
    pub fn is_sig(&self) -> bool {
        self.model_id <= 0xFFFF
    }
}

/// One element of a node's composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInfo {
    pub name: String,
    pub element_address: u16,
    /// GATT location descriptor value.
    pub location_descriptor: u16,
    pub models: Vec<ModelInfo>,
}

/// Composition Data Status fields (page 0).
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionData {
    pub status: u8,
    pub company_identifier: u16,
    pub product_identifier: u16,
    pub version_identifier: u16,
    pub features: NodeFeatures,
    pub elements: Vec<ElementInfo>,
}

/// Model Publication Status fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationSettings {
    pub status: u8,
    pub element_address: u16,
    pub publish_address: u16,
    pub app_key_index: u16,
    pub credential_flag: bool,
    pub publish_ttl: u8,
    pub publication_steps: u8,
    pub publication_resolution: u8,
    pub publish_retransmit_count: u8,
    pub model_id: u32,
}

/// Kind-specific status body.
///
/// Configuration bodies carry the typed fields the mesh stack parsed out of
/// the PDU. Sensor bodies keep the raw marshalled parameters; their
/// formatters apply the bit-level layouts themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusBody {
    NodeReset {
        status: u8,
    },
    CompositionData(CompositionData),
    DefaultTtl {
        status: u8,
        ttl: u8,
    },
    NetworkTransmit {
        status: u8,
        count: u8,
        interval_steps: u8,
    },
    AppKeyStatus {
        status: u8,
        net_key_index: u16,
        app_key_index: u16,
    },
    AppKeyList {
        status: u8,
        net_key_index: u16,
        app_key_indexes: Vec<u16>,
    },
    ModelApp {
        status: u8,
        element_address: u16,
        model_id: u32,
        app_key_index: u16,
    },
    ModelSubscription {
        status: u8,
        element_address: u16,
        subscription_address: u16,
        model_id: u32,
    },
    ModelPublication(PublicationSettings),
    GenericOnOff {
        on: bool,
    },
    Sensor {
        parameters: Vec<u8>,
    },
    SensorDescriptor {
        parameters: Vec<u8>,
    },
    SensorColumn {
        parameters: Vec<u8>,
    },
    SensorSeries {
        parameters: Vec<u8>,
    },
    SensorCadence {
        parameters: Vec<u8>,
    },
    SensorSettings {
        parameters: Vec<u8>,
    },
    SensorSetting {
        parameters: Vec<u8>,
    },
    /// Vendor model payload, passed through opaque.
    Vendor {
        parameters: Vec<u8>,
    },
    /// Unmodeled status kind; formats to an empty `data` object.
    Unknown,
}

/// Name for a Configuration status code (Mesh Profile 4.3.4.1.1).
pub fn status_code_name(status: u8) -> &'static str {
    match status {
        0x00 => "Success",
        0x01 => "Invalid Address",
        0x02 => "Invalid Model",
        0x03 => "Invalid AppKey Index",
        0x04 => "Invalid NetKey Index",
        0x05 => "Insufficient Resources",
        0x06 => "Key Index Already Stored",
        0x07 => "Invalid Publish Parameters",
        0x08 => "Not a Subscribe Model",
        0x09 => "Storage Failure",
        0x0A => "Feature Not Supported",
        0x0B => "Cannot Update",
        0x0C => "Cannot Remove",
        0x0D => "Cannot Bind",
        0x0E => "Temporarily Unable to Change State",
        0x0F => "Cannot Set",
        0x10 => "Unspecified Error",
        0x11 => "Invalid Binding",
        _ => "Unknown Status",
    }
}
