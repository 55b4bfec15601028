// crates/core/src/interface/mod.rs
pub mod cli;
