// crates/infra/src/mirror/mod.rs
//! A device transport that serves each drive letter from a host directory.
//!
//! Remote paths (`C:\Documents\a.txt`) are mapped below the directory mounted
//! for their drive. Attribute bits the host cannot represent are kept in
//! memory for the lifetime of the device, as is the process table.

mod processes;
pub mod status;

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::Write,
    ops::ControlFlow,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use psiftp_ports::{FileStat, ProgressSink, RemoteFileService, RemoteProcessService};
use psiftp_shared_kernel::{
    DeviceResult, DeviceStatus, DeviceTime, DirectoryEntry, DriveAttributes, DriveDescriptor,
    EntryUid, FileAttributes, MachineType, MediaAttributes, MediaType, ProcessInfo,
};
use xxhash_rust::xxh3::xxh3_64;

pub use self::processes::ProcessTable;
use self::status::{
    ACCESS_DENIED, ALREADY_EXISTS, BAD_NAME, CANCELLED, NOT_FOUND, NOT_READY, READ_FAILED,
    WRITE_FAILED, from_io,
};
use crate::persistence::{FileReader, FileWriter};

/// Bytes moved between progress callbacks.
pub const CHUNK_SIZE: usize = 2048;

/// Bits the user may change with `sattr`; everything else is derived from
/// the host.
const SETTABLE: FileAttributes = FileAttributes::READ_ONLY
    .union(FileAttributes::HIDDEN)
    .union(FileAttributes::SYSTEM)
    .union(FileAttributes::ARCHIVE);

pub struct MirrorDevice {
    mounts: BTreeMap<char, PathBuf>,
    attributes: HashMap<PathBuf, FileAttributes>,
    processes: ProcessTable,
    owner_info: Vec<String>,
    machine_type: MachineType,
}

impl MirrorDevice {
    /// Drive letters are stored uppercase; non-letters are ignored.
    pub fn new(mounts: impl IntoIterator<Item = (char, PathBuf)>) -> Self {
        let mounts = mounts
            .into_iter()
            .filter(|(letter, _)| letter.is_ascii_alphabetic())
            .map(|(letter, dir)| (letter.to_ascii_uppercase(), dir))
            .collect();
        Self {
            mounts,
            attributes: HashMap::new(),
            processes: ProcessTable::default(),
            owner_info: vec!["psiftp mirror device".to_string()],
            machine_type: MachineType::Series5,
        }
    }

    pub fn with_owner_info(mut self, lines: Vec<String>) -> Self {
        self.owner_info = lines;
        self
    }

    pub fn with_machine_type(mut self, machine_type: MachineType) -> Self {
        self.machine_type = machine_type;
        self
    }

    /// Host path for an absolute remote path. `..` segments are refused so
    /// a path never leaves its mount.
    fn host_path(&self, remote: &str) -> DeviceResult<PathBuf> {
        let mut chars = remote.chars();
        let (Some(letter), Some(':')) = (chars.next(), chars.next()) else {
            return Err(status::status(BAD_NAME));
        };
        let root = self
            .mounts
            .get(&letter.to_ascii_uppercase())
            .ok_or(status::status(NOT_READY))?;
        let mut path = root.clone();
        for segment in chars.as_str().split(['\\', '/']) {
            match segment {
                "" | "." => {}
                ".." => return Err(status::status(BAD_NAME)),
                name => path.push(name),
            }
        }
        Ok(path)
    }

    fn metadata(path: &Path) -> DeviceResult<fs::Metadata> {
        fs::metadata(path).map_err(|e| from_io(&e, READ_FAILED))
    }

    fn attributes_of(&self, path: &Path, metadata: &fs::Metadata) -> FileAttributes {
        let mut attributes = if metadata.is_dir() {
            FileAttributes::DIRECTORY
        } else {
            FileAttributes::ARCHIVE
        };
        if metadata.permissions().readonly() {
            attributes.insert(FileAttributes::READ_ONLY);
        }
        let hidden = path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if hidden {
            attributes.insert(FileAttributes::HIDDEN);
        }
        if let Some(stored) = self.attributes.get(path) {
            attributes.remove(SETTABLE);
            attributes.insert(*stored);
        }
        attributes
    }

    fn is_read_only(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| self.attributes_of(path, &m).contains(FileAttributes::READ_ONLY))
    }

    fn entry(&self, path: &Path, name: String, metadata: &fs::Metadata) -> DirectoryEntry {
        let size = if metadata.is_dir() { 0 } else { clamp_size(metadata.len()) };
        let mut entry = DirectoryEntry::new(name, size, self.attributes_of(path, metadata), modified(metadata));
        let id = xxh3_64(path.to_string_lossy().as_bytes());
        entry.uid = EntryUid([0, (id >> 32) as u32, id as u32]);
        entry
    }

    fn copy(
        source: &Path,
        destination: &Path,
        progress: &mut dyn ProgressSink,
    ) -> DeviceResult<()> {
        let mut reader = FileReader::open_buffered(source).map_err(|e| from_io(&e, READ_FAILED))?;
        let mut writer = FileWriter::create(destination).map_err(|e| from_io(&e, WRITE_FAILED))?;
        let mut buf = [0u8; CHUNK_SIZE];
        let mut total = 0u64;
        loop {
            let n = FileReader::read_chunk(&mut reader, &mut buf).map_err(|e| from_io(&e, READ_FAILED))?;
            if n == 0 {
                break;
            }
            writer.write_all(&buf[..n]).map_err(|e| from_io(&e, WRITE_FAILED))?;
            total += n as u64;
            if let ControlFlow::Break(()) = progress.on_progress(total) {
                let _ = writer.flush();
                return Err(status::status(CANCELLED));
            }
            if n < CHUNK_SIZE {
                break;
            }
        }
        writer.flush().map_err(|e| from_io(&e, WRITE_FAILED))
    }

    fn volume_name(root: &Path) -> String {
        root.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

fn clamp_size(len: u64) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn modified(metadata: &fs::Metadata) -> DeviceTime {
    metadata.modified().map(|t| DeviceTime::from(DateTime::<Utc>::from(t))).unwrap_or_default()
}

impl RemoteFileService for MirrorDevice {
    fn list_directory(&mut self, dir: &str) -> DeviceResult<Vec<DirectoryEntry>> {
        let host = self.host_path(dir)?;
        let mut entries = Vec::new();
        for item in fs::read_dir(&host).map_err(|e| from_io(&e, READ_FAILED))? {
            let item = item.map_err(|e| from_io(&e, READ_FAILED))?;
            let path = item.path();
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            let name = item.file_name().to_string_lossy().into_owned();
            entries.push(self.entry(&path, name, &metadata));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(dir, count = entries.len(), "mirror listing");
        Ok(entries)
    }

    fn count_entries(&mut self, dir: &str) -> DeviceResult<u32> {
        let host = self.host_path(dir)?;
        let count = fs::read_dir(&host).map_err(|e| from_io(&e, NOT_FOUND))?.count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    fn copy_from_device(
        &mut self,
        remote: &str,
        local: &Path,
        progress: &mut dyn ProgressSink,
    ) -> DeviceResult<()> {
        let source = self.host_path(remote)?;
        if Self::metadata(&source)?.is_dir() {
            return Err(status::status(BAD_NAME));
        }
        Self::copy(&source, local, progress)
    }

    fn copy_to_device(
        &mut self,
        local: &Path,
        remote: &str,
        progress: &mut dyn ProgressSink,
    ) -> DeviceResult<()> {
        let destination = self.host_path(remote)?;
        if self.is_read_only(&destination) {
            return Err(status::status(ACCESS_DENIED));
        }
        Self::copy(local, &destination, progress)
    }

    fn rename(&mut self, from: &str, to: &str) -> DeviceResult<()> {
        let source = self.host_path(from)?;
        let target = self.host_path(to)?;
        Self::metadata(&source)?;
        if target.exists() {
            return Err(status::status(ALREADY_EXISTS));
        }
        fs::rename(&source, &target).map_err(|e| from_io(&e, WRITE_FAILED))?;
        if let Some(stored) = self.attributes.remove(&source) {
            self.attributes.insert(target, stored);
        }
        Ok(())
    }

    fn remove(&mut self, path: &str) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        if Self::metadata(&host)?.is_dir() || self.is_read_only(&host) {
            return Err(status::status(ACCESS_DENIED));
        }
        fs::remove_file(&host).map_err(|e| from_io(&e, WRITE_FAILED))?;
        self.attributes.remove(&host);
        Ok(())
    }

    fn mkdir(&mut self, path: &str) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        fs::create_dir(&host).map_err(|e| from_io(&e, WRITE_FAILED))
    }

    fn rmdir(&mut self, path: &str) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        if !Self::metadata(&host)?.is_dir() {
            return Err(status::status(BAD_NAME));
        }
        fs::remove_dir(&host).map_err(|e| from_io(&e, WRITE_FAILED))?;
        self.attributes.remove(&host);
        Ok(())
    }

    fn get_attributes(&mut self, path: &str) -> DeviceResult<FileAttributes> {
        let host = self.host_path(path)?;
        let metadata = Self::metadata(&host)?;
        Ok(self.attributes_of(&host, &metadata))
    }

    fn set_attributes(&mut self, path: &str, set: FileAttributes, clear: FileAttributes) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        let metadata = Self::metadata(&host)?;
        let mut attributes = self.attributes_of(&host, &metadata);
        attributes.insert(set & SETTABLE);
        attributes.remove(clear);
        let stored = attributes & SETTABLE;
        tracing::debug!(path, attributes = stored.bits(), "mirror attributes changed");
        self.attributes.insert(host, stored);
        Ok(())
    }

    fn stat(&mut self, path: &str) -> DeviceResult<FileStat> {
        let host = self.host_path(path)?;
        let metadata = Self::metadata(&host)?;
        Ok(FileStat {
            attributes: self.attributes_of(&host, &metadata),
            size: if metadata.is_dir() { 0 } else { clamp_size(metadata.len()) },
            modified: modified(&metadata),
        })
    }

    fn get_modification_time(&mut self, path: &str) -> DeviceResult<DeviceTime> {
        let host = self.host_path(path)?;
        Ok(modified(&Self::metadata(&host)?))
    }

    fn set_modification_time(&mut self, path: &str, time: DeviceTime) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        let instant = time.to_datetime().ok_or(status::status(status::BAD_ARGUMENT))?;
        let file = FileReader::open(&host).map_err(|e| from_io(&e, READ_FAILED))?;
        file.set_modified(SystemTime::from(instant)).map_err(|e| from_io(&e, WRITE_FAILED))
    }

    fn list_drives(&mut self) -> DeviceResult<u32> {
        Ok(self
            .mounts
            .keys()
            .map(|letter| 1u32 << (u32::from(*letter) - u32::from('A')))
            .fold(0, |mask, bit| mask | bit))
    }

    fn drive_info(&mut self, index: u8) -> DeviceResult<Option<DriveDescriptor>> {
        let letter = DriveDescriptor::letter_for_index(index).ok_or(status::status(status::BAD_ARGUMENT))?;
        let Some(root) = self.mounts.get(&letter) else {
            return Ok(None);
        };
        if !root.is_dir() {
            return Ok(None);
        }
        let size = fs2::total_space(root).map_err(|e| from_io(&e, NOT_READY))?;
        let free = fs2::available_space(root).map_err(|e| from_io(&e, NOT_READY))?;
        let uid = xxh3_64(root.to_string_lossy().as_bytes()) as u32;
        let read_only = fs::metadata(root).is_ok_and(|m| m.permissions().readonly());
        let media_attributes = if read_only {
            MediaAttributes::VARIABLE_SIZE | MediaAttributes::WRITE_PROTECTED
        } else {
            MediaAttributes::VARIABLE_SIZE
        };
        Ok(Some(DriveDescriptor {
            letter,
            media_type: MediaType::Disk,
            drive_attributes: DriveAttributes::LOCAL | DriveAttributes::REDIRECTED,
            media_attributes,
            uid,
            size,
            free,
            volume_name: Self::volume_name(root),
        }))
    }

    fn error_text(&self, status: DeviceStatus) -> String {
        status::text(status)
    }
}

impl RemoteProcessService for MirrorDevice {
    fn list_processes(&mut self) -> DeviceResult<Vec<ProcessInfo>> {
        Ok(self.processes.list())
    }

    fn stop_process(&mut self, handle: &str) -> DeviceResult<()> {
        if self.processes.stop(handle) {
            Ok(())
        } else {
            Err(status::status(NOT_FOUND))
        }
    }

    fn exec_program(&mut self, path: &str, args: &str) -> DeviceResult<()> {
        let host = self.host_path(path)?;
        if !Self::metadata(&host)?.is_file() {
            return Err(status::status(BAD_NAME));
        }
        let pid = self.processes.start(path, args);
        tracing::debug!(path, args, pid, "mirror program started");
        Ok(())
    }

    fn command_line(&mut self, handle: &str) -> DeviceResult<String> {
        self.processes.program(handle).map(str::to_string).ok_or(status::status(NOT_FOUND))
    }

    fn owner_info(&mut self) -> DeviceResult<Vec<String>> {
        Ok(self.owner_info.clone())
    }

    fn machine_type(&mut self) -> DeviceResult<MachineType> {
        Ok(self.machine_type)
    }
}
