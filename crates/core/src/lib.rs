//! # psiftp core
//!
//! Wires the session together:
//!
//! - [`application`]: command parsing, the dispatcher loop and its handlers
//! - [`presentation`]: text rendering of listings, drives and processes
//! - [`config`]: validated session settings
//! - [`bootstrap`]: binary entry point

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod interface;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
