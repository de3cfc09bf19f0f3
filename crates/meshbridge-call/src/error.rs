use meshbridge_protocol::CallFamily;
use thiserror::Error;

/// Reasons a tracked call fails to produce a status report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The deadline elapsed before a matching status message arrived.
    #[error("no matching status message arrived before the deadline")]
    Timeout,

    /// The caller abandoned the call before a response arrived.
    #[error("call was cancelled")]
    Cancelled,

    /// The request opcode has no tracked response in its family's table, so
    /// there is nothing to wait for.
    #[error("{family:?} request opcode {opcode:#06x} has no correlated response")]
    NoCorrelatedResponse { family: CallFamily, opcode: u32 },

    /// The registry side of the result channel is gone.
    #[error("call result channel closed")]
    ChannelClosed,
}
