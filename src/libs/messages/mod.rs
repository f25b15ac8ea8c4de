//! User-facing messages.
//!
//! Every string shown to the user is a [`Message`] variant; the `msg_*` macros
//! in [`macros`] decide whether it goes to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
