// crates/core/src/application/handlers/mod.rs
//! Command handlers, grouped by what they touch. Each adds methods to
//! [`CommandDispatcher`](super::CommandDispatcher).

mod files;
mod navigation;
mod processes;
mod transfers;
