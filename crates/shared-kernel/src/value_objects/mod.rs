// crates/shared-kernel/src/value_objects/mod.rs
pub mod attributes;
pub mod device_time;
pub mod drive;
pub mod entry;
pub mod process;
pub mod status;

pub use attributes::{DriveAttributes, FileAttributes, MediaAttributes};
pub use device_time::DeviceTime;
pub use drive::{DriveDescriptor, MediaType};
pub use entry::{DirectoryEntry, EntryUid};
pub use process::{MachineType, ProcessInfo};
pub use status::{DeviceResult, DeviceStatus};
