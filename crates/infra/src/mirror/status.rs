// crates/infra/src/mirror/status.rs
//! Status codes reported by the mirror device and their texts.

use std::io;

use psiftp_shared_kernel::DeviceStatus;

pub const GENERAL_FAILURE: i32 = -1;
pub const BAD_ARGUMENT: i32 = -2;
pub const NOT_SUPPORTED: i32 = -4;
pub const IN_USE: i32 = -9;
pub const ALREADY_EXISTS: i32 = -32;
pub const NOT_FOUND: i32 = -33;
pub const WRITE_FAILED: i32 = -34;
pub const READ_FAILED: i32 = -35;
pub const DISK_FULL: i32 = -37;
pub const BAD_NAME: i32 = -38;
pub const ACCESS_DENIED: i32 = -39;
pub const NOT_READY: i32 = -41;
pub const CANCELLED: i32 = -50;

const TEXTS: [(i32, &str); 13] = [
    (GENERAL_FAILURE, "general failure"),
    (BAD_ARGUMENT, "bad argument"),
    (NOT_SUPPORTED, "not supported"),
    (IN_USE, "resource in use"),
    (ALREADY_EXISTS, "file already exists"),
    (NOT_FOUND, "file does not exist"),
    (WRITE_FAILED, "write failed"),
    (READ_FAILED, "read failed"),
    (DISK_FULL, "disk full"),
    (BAD_NAME, "bad file name"),
    (ACCESS_DENIED, "access denied"),
    (NOT_READY, "device not ready"),
    (CANCELLED, "operation cancelled"),
];

pub fn status(code: i32) -> DeviceStatus {
    DeviceStatus::new(code)
}

pub fn text(status: DeviceStatus) -> String {
    TEXTS
        .iter()
        .find(|(code, _)| *code == status.code())
        .map_or_else(|| format!("unknown error {}", status.code()), |(_, text)| (*text).to_string())
}

/// Maps a host I/O failure; `fallback` covers kinds with no closer code.
pub fn from_io(err: &io::Error, fallback: i32) -> DeviceStatus {
    let code = match err.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        io::ErrorKind::AlreadyExists => ALREADY_EXISTS,
        io::ErrorKind::PermissionDenied | io::ErrorKind::DirectoryNotEmpty => ACCESS_DENIED,
        io::ErrorKind::StorageFull => DISK_FULL,
        io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory => BAD_NAME,
        io::ErrorKind::InvalidInput => BAD_ARGUMENT,
        io::ErrorKind::ResourceBusy => IN_USE,
        _ => fallback,
    };
    DeviceStatus::new(code)
}
