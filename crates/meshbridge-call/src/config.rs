use std::time::Duration;

/// Default deadlines for tracked calls.
///
/// Exact values are tunable configuration, not protocol constants. Network
/// initialization covers provisioning round trips and gets a much longer
/// leash than a single message exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimeouts {
    /// Per-message Config/SIG/Vendor exchange deadline.
    pub message: Duration,
    /// Network-level operations (init, identify, provision).
    pub network_init: Duration,
}

impl Default for CallTimeouts {
    fn default() -> Self {
        CallTimeouts {
            message: Duration::from_secs(5),
            network_init: Duration::from_secs(30),
        }
    }
}
