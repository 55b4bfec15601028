//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement the
//! transfer use cases:
//!
//! - [`transfer`]: One copy with progress, cancellation and statistics
//! - [`batch`]: Wildcard selection of many files, one transfer each
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod batch;
pub mod transfer;

pub use batch::{BatchOutcome, BatchSelector};
pub use transfer::{
    Direction, Elapsed, HashProgress, TransferController, TransferRequest, TransferStats, elapsed,
};
