//! Status message to result object conversion.

use serde::Serialize;
use serde_json::{json, Value};

use crate::messages::{status_code_name, CompositionData, MeshMessage, PublicationSettings, StatusBody};

/// Neutral result object delivered to the host: envelope plus a
/// kind-specific `data` payload. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub src: u16,
    pub dst: u16,
    pub opcode: u32,
    pub data: Value,
}

/// Convert a status message into its result object.
///
/// Total: every body kind formats, and unmodeled kinds fall through to an
/// empty `data` object so new status kinds never break dispatch.
pub fn format_status(message: &MeshMessage) -> StatusReport {
    let data = match &message.body {
        StatusBody::NodeReset { status } => json!({
            "status": status,
            "statusName": status_code_name(*status),
        }),
        StatusBody::CompositionData(composition) => format_composition(composition),
        StatusBody::DefaultTtl { status, ttl } => json!({
            "status": status,
            "statusName": status_code_name(*status),
            "ttl": ttl,
        }),
        StatusBody::NetworkTransmit { status, count, interval_steps } => json!({
            "status": status,
            "statusName": status_code_name(*status),
            "networkTransmitCount": count,
            "networkTransmitIntervalSteps": interval_steps,
        }),
        StatusBody::AppKeyStatus { status, net_key_index, app_key_index } => json!({
            "status": status,
            "netKeyIndex": net_key_index,
            "appKeyIndex": app_key_index,
        }),
        StatusBody::AppKeyList { status, net_key_index, app_key_indexes } => json!({
            "status": status,
            "netKeyIndex": net_key_index,
            "appKeyIndexes": app_key_indexes,
        }),
        StatusBody::ModelApp { status, element_address, model_id, app_key_index } => json!({
            "status": status,
            "elementAddress": element_address,
            "modelId": model_id,
            "appKeyIndex": app_key_index,
        }),
        StatusBody::ModelSubscription { status, element_address, subscription_address, model_id } => {
            json!({
                "status": status,
                "elementAddress": element_address,
                "subscriptionAddress": subscription_address,
                "modelId": model_id,
            })
        }
        StatusBody::ModelPublication(publication) => format_publication(publication),
        StatusBody::GenericOnOff { on } => json!({ "onOff": on }),
        StatusBody::Sensor { parameters } => json!(parameters),
        StatusBody::SensorDescriptor { parameters } => format_descriptors(parameters),
        StatusBody::SensorColumn { parameters } => format_column(parameters),
        StatusBody::SensorSeries { parameters } => format_series(parameters),
        StatusBody::SensorCadence { parameters } => format_cadence(parameters),
        StatusBody::SensorSettings { parameters } => format_settings(parameters),
        StatusBody::SensorSetting { parameters } => format_setting(parameters),
        StatusBody::Vendor { parameters } => json!(parameters),
        StatusBody::Unknown => {
            log::debug!(
                "no formatter for opcode {:#06x} from {:#06x}, delivering empty data",
                message.opcode,
                message.src
            );
            json!({})
        }
    };

    StatusReport {
        src: message.src,
        dst: message.dst,
        opcode: message.opcode,
        data,
    }
}

fn format_composition(composition: &CompositionData) -> Value {
    let elements: Vec<Value> = composition
        .elements
        .iter()
        .map(|element| {
            let sig_count = element.models.iter().filter(|m| m.is_sig()).count();
            let models: Vec<Value> = element
                .models
                .iter()
                .map(|model| {
                    json!({
                        "modelId": model.model_id,
                        "modelName": model.model_name,
                        "boundAppKeyIndexes": model.bound_app_key_indexes,
                    })
                })
                .collect();
            json!({
                "name": element.name,
                "elementAddress": element.element_address,
                "sigModelCount": sig_count,
                "vendorModelCount": element.models.len() - sig_count,
                "locationDescriptor": element.location_descriptor,
                "models": models,
            })
        })
        .collect();

    json!({
        "status": composition.status,
        "statusName": status_code_name(composition.status),
        "companyIdentifier": format!("0x{:04X}", composition.company_identifier),
        "productIdentifier": format!("0x{:04X}", composition.product_identifier),
        "productVersion": format!("0x{:04X}", composition.version_identifier),
        "nodeFeaturesSupported": {
            "relay": composition.features.relay,
            "proxy": composition.features.proxy,
            "friend": composition.features.friend,
            "lowPower": composition.features.low_power,
        },
        "elements": elements,
    })
}

fn format_publication(publication: &PublicationSettings) -> Value {
    json!({
        "status": publication.status,
        "elementAddress": publication.element_address,
        "publishAddress": publication.publish_address,
        "appKeyIndex": publication.app_key_index,
        "credentialFlag": publication.credential_flag,
        "publishTtl": publication.publish_ttl,
        "publicationSteps": publication.publication_steps,
        "publicationResolution": publication.publication_resolution,
        "publishRetransmitCount": publication.publish_retransmit_count,
        "modelId": publication.model_id,
    })
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let lo = *bytes.get(offset)?;
    let hi = *bytes.get(offset + 1)?;
    Some(u16::from(lo) | (u16::from(hi) << 8))
}

/// Descriptor records are a fixed 8-byte run: property id, packed 12+12 bit
/// tolerance pair, sampling function, measurement period, update interval.
/// A trailing partial record is dropped rather than erroring.
fn format_descriptors(parameters: &[u8]) -> Value {
    let records: Vec<Value> = parameters
        .chunks_exact(8)
        .map(|record| {
            let property_id = u16::from(record[0]) | (u16::from(record[1]) << 8);
            let positive_tolerance =
                (u16::from(record[3] & 0x0F) << 8) | u16::from(record[2]);
            let negative_tolerance = (u16::from(record[4]) << 4) | u16::from(record[3] >> 4);
            json!({
                "propertyId": property_id,
                "positiveTolerance": positive_tolerance,
                "negativeTolerance": negative_tolerance,
                "samplingFunction": record[5],
                "measurementPeriod": record[6],
                "updateInterval": record[7],
            })
        })
        .collect();
    json!(records)
}

fn format_column(parameters: &[u8]) -> Value {
    let property_id = read_u16_le(parameters, 0).unwrap_or(0);
    let columns = parameters.get(2..).unwrap_or(&[]);
    json!({
        "propertyId": property_id,
        "columns": columns,
    })
}

fn format_series(parameters: &[u8]) -> Value {
    let property_id = read_u16_le(parameters, 0).unwrap_or(0);
    let series = parameters.get(2..).unwrap_or(&[]);
    json!({
        "propertyId": property_id,
        "series": series,
    })
}

/// Cadence layout: property id, then a divisor/trigger-type octet, then the
/// delta and fast-cadence fields whose width depends on the trigger type
/// (unitless 2-byte pairs for type 1, property-width fields for type 0).
fn format_cadence(parameters: &[u8]) -> Value {
    let property_id = read_u16_le(parameters, 0).unwrap_or(0);
    if parameters.len() <= 2 {
        return json!({ "propertyId": property_id });
    }

    let period_divisor = parameters[2] & 0x7F;
    let trigger_type = (parameters[2] & 0x80) >> 7;
    // too short to hold any delta or fast-cadence field
    if parameters.len() < 4 {
        return json!({
            "propertyId": property_id,
            "periodDivisor": period_divisor,
            "triggerType": trigger_type,
        });
    }

    let field_len = if trigger_type == 0 {
        (parameters.len() - 4) / 4
    } else {
        2
    };

    // delta down, delta up, min interval, fast cadence low, fast cadence high
    if parameters.len() < 4 + field_len * 4 {
        return json!({
            "propertyId": property_id,
            "periodDivisor": period_divisor,
            "triggerType": trigger_type,
        });
    }

    let mut offset = 3;
    let trigger_delta_down = &parameters[offset..offset + field_len];
    offset += field_len;
    let trigger_delta_up = &parameters[offset..offset + field_len];
    offset += field_len;
    let min_interval = parameters[offset];
    offset += 1;
    let fast_cadence_low = &parameters[offset..offset + field_len];
    offset += field_len;
    let fast_cadence_high = &parameters[offset..offset + field_len];

    json!({
        "propertyId": property_id,
        "periodDivisor": period_divisor,
        "triggerType": trigger_type,
        "minInterval": min_interval,
        "triggerDeltaDown": trigger_delta_down,
        "triggerDeltaUp": trigger_delta_up,
        "fastCadenceLow": fast_cadence_low,
        "fastCadenceHigh": fast_cadence_high,
    })
}

fn format_settings(parameters: &[u8]) -> Value {
    let property_id = read_u16_le(parameters, 0).unwrap_or(0);
    let settings: Vec<u16> = parameters
        .get(2..)
        .unwrap_or(&[])
        .chunks_exact(2)
        .map(|pair| u16::from(pair[0]) | (u16::from(pair[1]) << 8))
        .collect();
    json!({
        "propertyId": property_id,
        "settings": settings,
    })
}

/// The access and value fields are optional: a four-byte payload is a valid
/// "setting exists but was not readable" response.
fn format_setting(parameters: &[u8]) -> Value {
    let property_id = read_u16_le(parameters, 0).unwrap_or(0);
    let setting_property_id = read_u16_le(parameters, 2).unwrap_or(0);
    if parameters.len() > 4 {
        json!({
            "propertyId": property_id,
            "sensorSettingPropertyId": setting_property_id,
            "sensorSettingAccess": parameters[4],
            "sensorSetting": parameters.get(5..).unwrap_or(&[]),
        })
    } else {
        json!({
            "propertyId": property_id,
            "sensorSettingPropertyId": setting_property_id,
        })
    }
}
