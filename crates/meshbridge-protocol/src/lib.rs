//! Mesh status message model and response formatting.
//!
//! The bridge never parses mesh PDUs itself; the wrapped mesh stack delivers
//! already-authenticated status messages. This crate models those messages
//! and turns them into neutral, serializable results:
//!
//! - **Opcodes** (`opcodes`): Configuration and SIG operation codes, plus
//!   the bridge's own pseudo-opcodes for network-level calls.
//! - **Opcode pairs** (`pairs`): which response opcode a request waits for.
//!   Vendor requests carry their expected response explicitly, so only the
//!   Configuration and SIG families have static tables.
//! - **Messages** (`messages`): the [`MeshMessage`] envelope and the
//!   [`StatusBody`] tagged union, one variant per supported status kind.
//! - **Formatters** (`format`): `format_status` converts a message into a
//!   [`StatusReport`] of shape `{src, dst, opcode, data}` with kind-specific
//!   `data`. Unsupported kinds format to an empty `data` object; formatting
//!   never fails.

mod format;
mod messages;
pub mod opcodes;
mod pairs;

pub use format::*;
pub use messages::*;
pub use pairs::*;
