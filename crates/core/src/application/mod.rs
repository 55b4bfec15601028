// crates/core/src/application/mod.rs
pub mod commands;
pub mod dispatcher;
mod handlers;
pub mod startup;

pub use commands::{Command, KillTarget};
pub use dispatcher::{CommandDispatcher, Flow, SessionPorts};
pub use startup::{greet, resolve_default_drive};
