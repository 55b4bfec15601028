// crates/shared-kernel/src/value_objects/attributes.rs
use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Attribute bits of a remote file or directory.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct FileAttributes: u32 {
        const READ_ONLY = 0x0001;
        const HIDDEN = 0x0002;
        const SYSTEM = 0x0004;
        const VOLUME = 0x0008;
        const DIRECTORY = 0x0010;
        const ARCHIVE = 0x0020;
        const NORMAL = 0x0080;
        const TEMPORARY = 0x0100;
        const COMPRESSED = 0x0800;
    }
}

impl FileAttributes {
    #[inline]
    pub const fn is_directory(self) -> bool {
        self.contains(Self::DIRECTORY)
    }
}

impl Default for FileAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fixed-width flag string, one column per attribute, `-` when clear.
/// The second column shows `w` for writable files.
impl fmt::Display for FileAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |bit: Self, c: char| if self.contains(bit) { c } else { '-' };
        let columns = [
            flag(Self::DIRECTORY, 'd'),
            if self.contains(Self::READ_ONLY) { '-' } else { 'w' },
            flag(Self::HIDDEN, 'h'),
            flag(Self::SYSTEM, 's'),
            flag(Self::ARCHIVE, 'a'),
            flag(Self::VOLUME, 'v'),
            flag(Self::NORMAL, 'n'),
            flag(Self::TEMPORARY, 't'),
            flag(Self::COMPRESSED, 'c'),
        ];
        columns.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

const DRIVE_LABELS: [&str; 6] = ["local", "ROM", "redirected", "substituted", "internal", "removable"];
const MEDIA_LABELS: [&str; 4] = ["variable size", "dual density", "formattable", "write protected"];

/// Comma-joins the labels of all set bits, scanning from bit 0 upwards.
fn join_labels(bits: u32, labels: &[&str]) -> String {
    labels
        .iter()
        .enumerate()
        .filter(|(bit, _)| bits & (1 << bit) != 0)
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(",")
}

bitflags! {
    /// Attribute bits describing how a drive is attached.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct DriveAttributes: u32 {
        const LOCAL = 0x01;
        const ROM = 0x02;
        const REDIRECTED = 0x04;
        const SUBSTITUTED = 0x08;
        const INTERNAL = 0x10;
        const REMOVABLE = 0x20;
    }
}

impl DriveAttributes {
    pub fn labels(self) -> String {
        join_labels(self.bits(), &DRIVE_LABELS)
    }
}

bitflags! {
    /// Attribute bits describing the medium inserted in a drive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct MediaAttributes: u32 {
        const VARIABLE_SIZE = 0x01;
        const DUAL_DENSITY = 0x02;
        const FORMATTABLE = 0x04;
        const WRITE_PROTECTED = 0x08;
    }
}

impl MediaAttributes {
    pub fn labels(self) -> String {
        join_labels(self.bits(), &MEDIA_LABELS)
    }
}

impl Default for DriveAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MediaAttributes {
    fn default() -> Self {
        Self::empty()
    }
}
