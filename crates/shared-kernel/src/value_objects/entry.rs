// crates/shared-kernel/src/value_objects/entry.rs
use super::{attributes::FileAttributes, device_time::DeviceTime};

/// Three-part unique id attached to a directory entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntryUid(pub [u32; 3]);

impl EntryUid {
    /// Returns `0` for indices outside the triple.
    pub fn get(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }
}

/// One record of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub size: u32,
    pub attributes: FileAttributes,
    pub modified: DeviceTime,
    pub uid: EntryUid,
    pub name: String,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, size: u32, attributes: FileAttributes, modified: DeviceTime) -> Self {
        Self { size, attributes, modified, uid: EntryUid::default(), name: name.into() }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.attributes.is_directory()
    }
}
