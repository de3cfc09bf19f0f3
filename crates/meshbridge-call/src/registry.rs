//! The pending call registry.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use meshbridge_protocol::{
    format_status, response_opcode, CallFamily, MeshMessage, StatusReport,
};
use serde_json::{json, Value};

use crate::clock::{Clock, SystemClock};
use crate::config::CallTimeouts;
use crate::error::CallError;
use crate::events::{BridgeEvent, EventBus, EventKind};

/// A tracked request, as the caller describes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Config { opcode: u32 },
    Sig { opcode: u32 },
    /// Vendor opcodes are not enumerable in a static table, so the caller
    /// supplies the response opcode explicitly.
    Vendor { opcode: u32, response_opcode: u32 },
}

impl Operation {
    pub fn family(&self) -> CallFamily {
        match self {
            Operation::Config { .. } => CallFamily::Config,
            Operation::Sig { .. } => CallFamily::Sig,
            Operation::Vendor { .. } => CallFamily::Vendor,
        }
    }

    pub fn opcode(&self) -> u32 {
        match *self {
            Operation::Config { opcode } => opcode,
            Operation::Sig { opcode } => opcode,
            Operation::Vendor { opcode, .. } => opcode,
        }
    }

    /// Response opcode this operation waits for, from the family's pair
    /// table (or the caller's explicit pairing for vendor operations).
    fn expected_opcode(&self) -> Option<u32> {
        match *self {
            Operation::Vendor { response_opcode, .. } => Some(response_opcode),
            _ => response_opcode(self.family(), self.opcode()),
        }
    }
}

/// Correlation key of a pending call.
///
/// Message calls are keyed by family, expected opcode, and target address.
/// Two in-flight calls with the same key are legal; the first registered one
/// claims the first matching response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKey {
    Message {
        family: CallFamily,
        expected_opcode: u32,
        address: u16,
    },
    /// Network-level calls (init, identify, provision) carry no mesh
    /// address and match on their pseudo-opcode alone.
    Bridge { opcode: u32 },
}

struct PendingCall {
    id: u64,
    key: CallKey,
    deadline: Instant,
    tx: Sender<Result<StatusReport, CallError>>,
}

/// Await point returned by `submit`.
///
/// The registry resolves the handle from the status callback side; the
/// caller blocks (or polls) here.
pub struct CallHandle {
    id: u64,
    rx: Receiver<Result<StatusReport, CallError>>,
}

impl CallHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Block until the call resolves, times out, or is cancelled.
    pub fn wait(self) -> Result<StatusReport, CallError> {
        match self.rx.recv() {
            Ok(result) => result,
            Err(_) => Err(CallError::ChannelClosed),
        }
    }

    /// Block for at most `timeout`, whatever the registry deadline says.
    pub fn wait_timeout(self, timeout: Duration) -> Result<StatusReport, CallError> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(CallError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(CallError::ChannelClosed),
        }
    }

    /// Non-blocking poll.
    pub fn try_result(&self) -> Option<Result<StatusReport, CallError>> {
        self.rx.try_recv().ok()
    }
}

/// In-flight call registry.
///
/// An explicit instance the host constructs and owns; single-threaded by
/// contract. All mutation happens on the callback-serialized thread, so a
/// linear scan over a small `Vec` is sufficient. Expired calls are swept
/// lazily at the start of every public operation, never by a timer.
pub struct CallRegistry {
    calls: Vec<PendingCall>,
    next_id: u64,
    clock: Box<dyn Clock>,
    timeouts: CallTimeouts,
    events: EventBus,
}

impl CallRegistry {
    pub fn new(timeouts: CallTimeouts) -> Self {
        CallRegistry::with_clock(timeouts, Box::new(SystemClock))
    }

    pub fn with_clock(timeouts: CallTimeouts, clock: Box<dyn Clock>) -> Self {
        CallRegistry {
            calls: Vec::new(),
            next_id: 0,
            clock,
            timeouts,
            events: EventBus::new(),
        }
    }

    /// Number of in-flight calls, after sweeping.
    pub fn pending_count(&mut self) -> usize {
        self.sweep_expired();
        self.calls.len()
    }

    /// Register interest in an unsolicited event kind.
    pub fn subscribe(&mut self, kind: EventKind) -> Receiver<BridgeEvent> {
        self.events.subscribe(kind)
    }

    /// Track a request to `address` and return the handle its caller awaits.
    ///
    /// The expected response opcode comes from the family's pair table; an
    /// opcode with no tracked response is refused rather than left to time
    /// out.
    pub fn submit(
        &mut self,
        operation: Operation,
        address: u16,
        timeout: Option<Duration>,
    ) -> Result<CallHandle, CallError> {
        self.sweep_expired();

        let family = operation.family();
        let expected_opcode =
            operation
                .expected_opcode()
                .ok_or(CallError::NoCorrelatedResponse {
                    family,
                    opcode: operation.opcode(),
                })?;

        let key = CallKey::Message { family, expected_opcode, address };
        let deadline = self.clock.now() + timeout.unwrap_or(self.timeouts.message);
        log::debug!(
            "submit {:?} opcode {:#06x} to {:#06x}, expecting {:#06x}",
            family,
            operation.opcode(),
            address,
            expected_opcode
        );
        Ok(self.register(key, deadline))
    }

    /// Track a network-level call (init, identify, provision) by its
    /// pseudo-opcode. These default to the long timeout.
    pub fn submit_bridge(&mut self, opcode: u32, timeout: Option<Duration>) -> CallHandle {
        self.sweep_expired();
        let deadline = self.clock.now() + timeout.unwrap_or(self.timeouts.network_init);
        log::debug!("submit bridge call {:#010x}", opcode);
        self.register(CallKey::Bridge { opcode }, deadline)
    }

    /// Resolve a network-level call with a caller-shaped payload. Returns
    /// false when no such call is pending.
    pub fn resolve_bridge(&mut self, opcode: u32, data: Value) -> bool {
        self.sweep_expired();
        let position = self
            .calls
            .iter()
            .position(|call| call.key == CallKey::Bridge { opcode });
        match position {
            Some(index) => {
                let call = self.calls.remove(index);
                let report = StatusReport { src: 0, dst: 0, opcode, data };
                let _ = call.tx.send(Ok(report));
                true
            }
            None => false,
        }
    }

    /// Dispatch one incoming status message.
    ///
    /// The message is formatted once; the first-registered pending call
    /// matching `(family, opcode, src)` resolves with the report and is
    /// removed. With no match the report goes out as an unsolicited Model
    /// event and the registry is untouched.
    pub fn on_incoming(&mut self, family: CallFamily, message: &MeshMessage) {
        self.sweep_expired();

        let report = format_status(message);
        let key = CallKey::Message {
            family,
            expected_opcode: message.opcode,
            address: message.src,
        };

        let position = self.calls.iter().position(|call| call.key == key);
        match position {
            Some(index) => {
                let call = self.calls.remove(index);
                log::debug!(
                    "resolved call {} with opcode {:#06x} from {:#06x}",
                    call.id,
                    message.opcode,
                    message.src
                );
                let _ = call.tx.send(Ok(report));
            }
            None => {
                log::debug!(
                    "unsolicited opcode {:#06x} from {:#06x}",
                    message.opcode,
                    message.src
                );
                self.events.publish(
                    EventKind::Model,
                    json!({
                        "src": report.src,
                        "dst": report.dst,
                        "opcode": report.opcode,
                        "data": report.data,
                    }),
                );
            }
        }
    }

    /// Abandon a call immediately, independent of its deadline. Returns
    /// false when the id is unknown (already resolved, swept, or bogus).
    pub fn cancel(&mut self, id: u64) -> bool {
        self.sweep_expired();
        match self.calls.iter().position(|call| call.id == id) {
            Some(index) => {
                let call = self.calls.remove(index);
                let _ = call.tx.send(Err(CallError::Cancelled));
                true
            }
            None => false,
        }
    }

    /// Reject and drop every call whose deadline has passed.
    pub fn sweep_expired(&mut self) {
        let now = self.clock.now();
        let mut index = 0;
        while index < self.calls.len() {
            if now >= self.calls[index].deadline {
                let call = self.calls.remove(index);
                log::debug!("call {} timed out", call.id);
                let _ = call.tx.send(Err(CallError::Timeout));
            } else {
                index += 1;
            }
        }
    }

    /// Node deletion event, `{action, unicastAddress}`.
    pub fn notify_node_delete(&mut self, unicast_address: u16) {
        self.events.publish(
            EventKind::Node,
            json!({ "action": "delete", "unicastAddress": unicast_address }),
        );
    }

    /// Adapter state event, `{enabled}`.
    pub fn notify_adapter(&mut self, enabled: bool) {
        self.events
            .publish(EventKind::Adapter, json!({ "enabled": enabled }));
    }

    /// Connection state event, `{connected}`.
    pub fn notify_connection(&mut self, connected: bool) {
        self.events
            .publish(EventKind::Connection, json!({ "connected": connected }));
    }

    fn register(&mut self, key: CallKey, deadline: Instant) -> CallHandle {
        let id = self.next_id;
        self.next_id += 1;
        let (tx, rx) = channel();
        self.calls.push(PendingCall { id, key, deadline, tx });
        CallHandle { id, rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshbridge_protocol::opcodes;

    #[test]
    fn test_operation_expected_opcode() {
        let get = Operation::Config { opcode: opcodes::CONFIG_COMPOSITION_DATA_GET };
        assert_eq!(get.expected_opcode(), Some(opcodes::CONFIG_COMPOSITION_DATA_STATUS));

        let vendor = Operation::Vendor { opcode: 0x00C1_0059, response_opcode: 0x00C2_0059 };
        assert_eq!(vendor.expected_opcode(), Some(0x00C2_0059));
    }

    #[test]
    fn test_submit_without_pair_is_refused() {
        let mut registry = CallRegistry::new(CallTimeouts::default());
        let result = registry.submit(
            Operation::Sig { opcode: opcodes::GENERIC_ON_OFF_SET_UNACKNOWLEDGED },
            0x0010,
            None,
        );
        assert_eq!(
            result.err(),
            Some(CallError::NoCorrelatedResponse {
                family: CallFamily::Sig,
                opcode: opcodes::GENERIC_ON_OFF_SET_UNACKNOWLEDGED,
            })
        );
        assert_eq!(registry.pending_count(), 0);
    }
}
