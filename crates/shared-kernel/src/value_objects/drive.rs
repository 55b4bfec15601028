// crates/shared-kernel/src/value_objects/drive.rs
use std::fmt;

use super::attributes::{DriveAttributes, MediaAttributes};

/// Kind of medium in a drive, in device table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    NotPresent,
    Unknown,
    Floppy,
    Disk,
    CdRom,
    Ram,
    FlashDisk,
    Rom,
    Remote,
}

impl MediaType {
    const TABLE: [Self; 9] = [
        Self::NotPresent,
        Self::Unknown,
        Self::Floppy,
        Self::Disk,
        Self::CdRom,
        Self::Ram,
        Self::FlashDisk,
        Self::Rom,
        Self::Remote,
    ];

    /// Indices outside the table are reported as `Unknown`.
    pub fn from_index(index: u32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::TABLE.get(i).copied())
            .unwrap_or(Self::Unknown)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotPresent => "Not present",
            Self::Unknown => "Unknown",
            Self::Floppy => "Floppy",
            Self::Disk => "Disk",
            Self::CdRom => "CD-ROM",
            Self::Ram => "RAM",
            Self::FlashDisk => "Flash Disk",
            Self::Rom => "ROM",
            Self::Remote => "Remote",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One drive as reported by a `devinfo` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveDescriptor {
    pub letter: char,
    pub media_type: MediaType,
    pub drive_attributes: DriveAttributes,
    pub media_attributes: MediaAttributes,
    pub uid: u32,
    pub size: u64,
    pub free: u64,
    pub volume_name: String,
}

impl DriveDescriptor {
    /// Drive letter for a bit index of the `devlist` mask.
    pub fn letter_for_index(index: u8) -> Option<char> {
        (index < 26).then(|| char::from(b'A' + index))
    }
}
