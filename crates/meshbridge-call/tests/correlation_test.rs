use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use meshbridge_call::{CallError, CallRegistry, CallTimeouts, Clock, EventKind, Operation};
use meshbridge_protocol::{opcodes, CallFamily, MeshMessage, StatusBody};
use serde_json::json;

#[derive(Clone)]
struct FakeClock {
    now: Arc<Mutex<Instant>>,
}

impl FakeClock {
    fn new() -> Self {
        FakeClock { now: Arc::new(Mutex::new(Instant::now())) }
    }

    fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

fn registry_with(clock: &FakeClock) -> CallRegistry {
    CallRegistry::with_clock(CallTimeouts::default(), Box::new(clock.clone()))
}

fn node_reset_status(src: u16) -> MeshMessage {
    MeshMessage {
        src,
        dst: 0x0001,
        opcode: opcodes::CONFIG_NODE_RESET_STATUS,
        body: StatusBody::NodeReset { status: 0 },
    }
}

#[test]
fn test_call_resolves_exactly_once_then_unsolicited() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);
    let events = registry.subscribe(EventKind::Model);

    let handle = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0010, None)
        .unwrap();

    registry.on_incoming(CallFamily::Config, &node_reset_status(0x0010));

    let report = handle.try_result().unwrap().unwrap();
    assert_eq!(report.src, 0x0010);
    assert_eq!(report.opcode, opcodes::CONFIG_NODE_RESET_STATUS);
    assert_eq!(report.data["statusName"], "Success");
    assert_eq!(registry.pending_count(), 0);
    assert!(events.try_recv().is_err());

    // the call is gone, so an identical second message is unsolicited
    registry.on_incoming(CallFamily::Config, &node_reset_status(0x0010));
    let event = events.try_recv().unwrap();
    assert_eq!(event.payload["src"], 0x0010);
    assert_eq!(event.payload["opcode"], opcodes::CONFIG_NODE_RESET_STATUS);
}

#[test]
fn test_unmatched_response_is_an_event_not_an_error() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);
    let events = registry.subscribe(EventKind::Model);

    let message = MeshMessage {
        src: 0x0020,
        dst: 0x0001,
        opcode: opcodes::GENERIC_ON_OFF_STATUS,
        body: StatusBody::GenericOnOff { on: true },
    };
    registry.on_incoming(CallFamily::Sig, &message);

    let event = events.try_recv().unwrap();
    assert_eq!(event.payload["data"], json!({ "onOff": true }));
    assert_eq!(registry.pending_count(), 0);
}

#[test]
fn test_expired_call_is_rejected_on_next_touch() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry
        .submit(Operation::Sig { opcode: opcodes::GENERIC_ON_OFF_GET }, 0x0010, None)
        .unwrap();
    assert!(handle.try_result().is_none());

    clock.advance(Duration::from_secs(5));
    registry.sweep_expired();

    assert_eq!(handle.try_result(), Some(Err(CallError::Timeout)));
    assert_eq!(registry.pending_count(), 0);
}

#[test]
fn test_sweep_happens_on_submit_and_on_incoming() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let stale = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_DEFAULT_TTL_GET }, 0x0010, None)
        .unwrap();
    clock.advance(Duration::from_secs(6));

    // a later submit sweeps the stale call out
    let fresh = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_DEFAULT_TTL_GET }, 0x0011, None)
        .unwrap();
    assert_eq!(stale.try_result(), Some(Err(CallError::Timeout)));
    assert_eq!(registry.pending_count(), 1);

    let message = MeshMessage {
        src: 0x0011,
        dst: 0x0001,
        opcode: opcodes::CONFIG_DEFAULT_TTL_STATUS,
        body: StatusBody::DefaultTtl { status: 0, ttl: 7 },
    };
    registry.on_incoming(CallFamily::Config, &message);
    assert_eq!(fresh.try_result().unwrap().unwrap().data["ttl"], 7);
}

#[test]
fn test_cancel_rejects_immediately() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_APPKEY_ADD }, 0x0010, None)
        .unwrap();
    let id = handle.id();

    assert!(registry.cancel(id));
    assert_eq!(handle.try_result(), Some(Err(CallError::Cancelled)));
    assert_eq!(registry.pending_count(), 0);
    assert!(!registry.cancel(id));
}

#[test]
fn test_cancel_sweeps_first_so_expired_calls_time_out() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_APPKEY_ADD }, 0x0010, None)
        .unwrap();
    let id = handle.id();

    clock.advance(Duration::from_secs(6));

    // the deadline passed before the cancel, so the call is already gone
    assert!(!registry.cancel(id));
    assert_eq!(handle.try_result(), Some(Err(CallError::Timeout)));
}

#[test]
fn test_addresses_disambiguate_same_opcode() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let first = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0010, None)
        .unwrap();
    let second = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0020, None)
        .unwrap();

    registry.on_incoming(CallFamily::Config, &node_reset_status(0x0020));

    assert!(first.try_result().is_none());
    assert_eq!(second.try_result().unwrap().unwrap().src, 0x0020);
}

#[test]
fn test_duplicate_key_first_registered_wins() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let first = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0010, None)
        .unwrap();
    let second = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0010, None)
        .unwrap();

    registry.on_incoming(CallFamily::Config, &node_reset_status(0x0010));
    assert!(first.try_result().is_some());
    assert!(second.try_result().is_none());

    registry.on_incoming(CallFamily::Config, &node_reset_status(0x0010));
    assert!(second.try_result().is_some());
}

#[test]
fn test_families_do_not_cross_resolve() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);
    let events = registry.subscribe(EventKind::Model);

    let handle = registry
        .submit(Operation::Config { opcode: opcodes::CONFIG_NODE_RESET }, 0x0010, None)
        .unwrap();

    // same numeric opcode arriving in the SIG family is a different key
    let message = MeshMessage {
        src: 0x0010,
        dst: 0x0001,
        opcode: opcodes::CONFIG_NODE_RESET_STATUS,
        body: StatusBody::Unknown,
    };
    registry.on_incoming(CallFamily::Sig, &message);

    assert!(handle.try_result().is_none());
    assert!(events.try_recv().is_ok());
}

#[test]
fn test_vendor_pairing_is_caller_supplied() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry
        .submit(
            Operation::Vendor { opcode: 0x00C1_0059, response_opcode: 0x00C2_0059 },
            0x0010,
            None,
        )
        .unwrap();

    let message = MeshMessage {
        src: 0x0010,
        dst: 0x0001,
        opcode: 0x00C2_0059,
        body: StatusBody::Vendor { parameters: vec![0x01, 0x02] },
    };
    registry.on_incoming(CallFamily::Vendor, &message);

    let report = handle.try_result().unwrap().unwrap();
    assert_eq!(report.data, json!([0x01, 0x02]));
}

#[test]
fn test_bridge_call_round_trip() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry.submit_bridge(opcodes::BRIDGE_NETWORK_INIT, None);
    assert!(registry.resolve_bridge(opcodes::BRIDGE_NETWORK_INIT, json!({})));

    let report = handle.try_result().unwrap().unwrap();
    assert_eq!(report.opcode, opcodes::BRIDGE_NETWORK_INIT);
    assert!(!registry.resolve_bridge(opcodes::BRIDGE_NETWORK_INIT, json!({})));
}

#[test]
fn test_bridge_call_gets_the_long_timeout() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);

    let handle = registry.submit_bridge(opcodes::BRIDGE_NODE_PROVISION, None);

    clock.advance(Duration::from_secs(5));
    registry.sweep_expired();
    assert!(handle.try_result().is_none());
    assert_eq!(registry.pending_count(), 1);

    clock.advance(Duration::from_secs(25));
    registry.sweep_expired();
    assert_eq!(handle.try_result(), Some(Err(CallError::Timeout)));
}

#[test]
fn test_lifecycle_event_payloads() {
    let clock = FakeClock::new();
    let mut registry = registry_with(&clock);
    let node = registry.subscribe(EventKind::Node);
    let adapter = registry.subscribe(EventKind::Adapter);
    let connection = registry.subscribe(EventKind::Connection);

    registry.notify_node_delete(0x0042);
    registry.notify_adapter(true);
    registry.notify_connection(false);

    assert_eq!(
        node.try_recv().unwrap().payload,
        json!({ "action": "delete", "unicastAddress": 0x0042 })
    );
    assert_eq!(adapter.try_recv().unwrap().payload, json!({ "enabled": true }));
    assert_eq!(connection.try_recv().unwrap().payload, json!({ "connected": false }));
}
