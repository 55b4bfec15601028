// crates/core/src/presentation/mod.rs
//! Text rendering for command output.

mod listing;
mod usage;

pub use listing::{
    DRIVES_HEADER, PROCESSES_HEADER, attribute_line, drive_row, entry_line, process_row,
};
pub use usage::USAGE;
