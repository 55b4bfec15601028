// crates/ports/src/transport.rs
use std::path::Path;

use psiftp_shared_kernel::{
    DeviceResult, DeviceStatus, DeviceTime, DirectoryEntry, DriveDescriptor, FileAttributes,
    MachineType, ProcessInfo,
};

use crate::progress::ProgressSink;

/// Attributes, size and modification time of a single remote path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub attributes: FileAttributes,
    pub size: u32,
    pub modified: DeviceTime,
}

/// File side of the device transport.
///
/// Remote paths are absolute device paths such as `C:\Documents\a.txt`.
/// Every call is blocking; a non-zero status is returned as `Err`.
pub trait RemoteFileService {
    fn list_directory(&mut self, dir: &str) -> DeviceResult<Vec<DirectoryEntry>>;
    /// Cheap existence probe used when changing directory.
    fn count_entries(&mut self, dir: &str) -> DeviceResult<u32>;

    fn copy_from_device(
        &mut self,
        remote: &str,
        local: &Path,
        progress: &mut dyn ProgressSink,
    ) -> DeviceResult<()>;
    fn copy_to_device(
        &mut self,
        local: &Path,
        remote: &str,
        progress: &mut dyn ProgressSink,
    ) -> DeviceResult<()>;

    fn rename(&mut self, from: &str, to: &str) -> DeviceResult<()>;
    fn remove(&mut self, path: &str) -> DeviceResult<()>;
    fn mkdir(&mut self, path: &str) -> DeviceResult<()>;
    fn rmdir(&mut self, path: &str) -> DeviceResult<()>;

    fn get_attributes(&mut self, path: &str) -> DeviceResult<FileAttributes>;
    fn set_attributes(
        &mut self,
        path: &str,
        set: FileAttributes,
        clear: FileAttributes,
    ) -> DeviceResult<()>;
    fn stat(&mut self, path: &str) -> DeviceResult<FileStat>;
    fn get_modification_time(&mut self, path: &str) -> DeviceResult<DeviceTime>;
    fn set_modification_time(&mut self, path: &str, time: DeviceTime) -> DeviceResult<()>;

    /// Bit `n` set means drive `A + n` exists.
    fn list_drives(&mut self) -> DeviceResult<u32>;
    /// `Ok(None)` when the drive exists but reports no medium.
    fn drive_info(&mut self, index: u8) -> DeviceResult<Option<DriveDescriptor>>;

    fn error_text(&self, status: DeviceStatus) -> String;
}

/// Process side of the device transport.
pub trait RemoteProcessService {
    fn list_processes(&mut self) -> DeviceResult<Vec<ProcessInfo>>;
    /// Stops the process addressed by `<name>.$<pid>`.
    fn stop_process(&mut self, handle: &str) -> DeviceResult<()>;
    fn exec_program(&mut self, path: &str, args: &str) -> DeviceResult<()>;
    /// Program path the process was started from.
    fn command_line(&mut self, handle: &str) -> DeviceResult<String>;
    fn owner_info(&mut self) -> DeviceResult<Vec<String>>;
    fn machine_type(&mut self) -> DeviceResult<MachineType>;
}

/// A connected device offering both services.
pub trait Device: RemoteFileService + RemoteProcessService {}

impl<T: RemoteFileService + RemoteProcessService + ?Sized> Device for T {}
