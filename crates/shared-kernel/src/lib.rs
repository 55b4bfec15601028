// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use cancel::CancelToken;
pub use error::{
    CancelledTransfer, ErrorContext, LocalIoError, ProtocolError, Result, SessionError,
    ValidationError,
};

pub mod cancel;
pub mod error;
pub mod value_objects;

pub use value_objects::{
    DeviceResult, DeviceStatus, DeviceTime, DirectoryEntry, DriveAttributes, DriveDescriptor,
    EntryUid, FileAttributes, MachineType, MediaAttributes, MediaType, ProcessInfo,
};
