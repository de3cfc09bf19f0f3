//! Pending call correlation for the mesh bridge.
//!
//! Mesh operations are fire-and-forget at the transport layer; the result
//! arrives later as an unsolicited status message carrying only a source
//! address and an opcode. [`CallRegistry`] bridges the two worlds: `submit`
//! records what a caller is waiting for and hands back a [`CallHandle`];
//! `on_incoming` resolves the matching handle when the status arrives, or
//! publishes the report on the [`EventBus`] when nobody is waiting.
//!
//! Deadlines are enforced by a lazy sweep on every public operation. There
//! is no background timer; an idle registry expires nothing until it is
//! touched again, which is fine because nobody is blocked on an untouched
//! registry except callers using `wait_timeout`.

mod clock;
mod config;
mod error;
mod events;
mod registry;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use registry::*;
