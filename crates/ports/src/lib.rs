//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`transport`]: File and process services of the connected device
//! - [`progress`]: Per-chunk progress and cancellation polling for copies
//! - [`filesystem`]: Host file system access
//! - [`console`]: Command-line input and the host shell
//! - [`clock`]: Wall-clock time for transfer statistics
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod console;
pub mod filesystem;
pub mod progress;
pub mod transport;

pub use clock::{Clock, WallTime};
pub use console::{LineSource, LocalShell};
pub use filesystem::{LocalFile, LocalFileSystem};
pub use progress::{NoProgress, ProgressSink};
pub use transport::{Device, FileStat, RemoteFileService, RemoteProcessService};
