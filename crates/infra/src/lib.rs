// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod console;
pub mod filesystem;
pub mod mirror;
pub mod persistence;
pub mod platform;

pub use clock::SystemClock;
pub use console::{HostShell, StdinLineSource};
pub use filesystem::StdLocalFileSystem;
pub use mirror::MirrorDevice;
