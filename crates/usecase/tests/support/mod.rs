// crates/usecase/tests/support/mod.rs
#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use psiftp_domain::{LocalDir, RemotePath, RemoteSessionState};
use psiftp_ports::{
    Clock, FileStat, LineSource, LocalFile, LocalFileSystem, ProgressSink, RemoteFileService,
    WallTime,
};
use psiftp_shared_kernel::{
    CancelToken, DeviceResult, DeviceStatus, DeviceTime, DirectoryEntry, DriveDescriptor,
    FileAttributes, LocalIoError, Result,
};

pub const FAIL_CODE: i32 = -33;
pub const STOP_CODE: i32 = -60;

/// Device with a fixed listing that records every copy.
#[derive(Default)]
pub struct StubDevice {
    pub entries: Vec<DirectoryEntry>,
    pub copies: Vec<(String, PathBuf)>,
    pub failing: Vec<String>,
    pub chunks: u32,
    /// Cancels this token after the first chunk.
    pub cancel_on_chunk: Option<CancelToken>,
    pub remote_sizes: BTreeMap<String, u32>,
}

impl StubDevice {
    pub fn with_names(files: &[&str], dirs: &[&str]) -> Self {
        let mut entries: Vec<_> = files
            .iter()
            .map(|n| DirectoryEntry::new(*n, 10, FileAttributes::ARCHIVE, DeviceTime::default()))
            .collect();
        entries.extend(
            dirs.iter()
                .map(|n| DirectoryEntry::new(*n, 0, FileAttributes::DIRECTORY, DeviceTime::default())),
        );
        Self { entries, chunks: 1, ..Self::default() }
    }

    fn copy(&mut self, remote: &str, local: &Path, progress: &mut dyn ProgressSink) -> DeviceResult<()> {
        self.copies.push((remote.to_string(), local.to_path_buf()));
        for chunk in 0..self.chunks {
            if let ControlFlow::Break(()) = progress.on_progress(u64::from(chunk)) {
                return Err(DeviceStatus::new(STOP_CODE));
            }
            if let Some(token) = &self.cancel_on_chunk {
                token.cancel();
            }
        }
        if self.failing.iter().any(|f| remote.ends_with(f.as_str())) {
            return Err(DeviceStatus::new(FAIL_CODE));
        }
        Ok(())
    }
}

impl RemoteFileService for StubDevice {
    fn list_directory(&mut self, _dir: &str) -> DeviceResult<Vec<DirectoryEntry>> {
        Ok(self.entries.clone())
    }
    fn count_entries(&mut self, _dir: &str) -> DeviceResult<u32> {
        Ok(self.entries.len() as u32)
    }
    fn copy_from_device(&mut self, remote: &str, local: &Path, progress: &mut dyn ProgressSink) -> DeviceResult<()> {
        self.copy(remote, local, progress)
    }
    fn copy_to_device(&mut self, local: &Path, remote: &str, progress: &mut dyn ProgressSink) -> DeviceResult<()> {
        self.copy(remote, local, progress)
    }
    fn rename(&mut self, _from: &str, _to: &str) -> DeviceResult<()> {
        Ok(())
    }
    fn remove(&mut self, _path: &str) -> DeviceResult<()> {
        Ok(())
    }
    fn mkdir(&mut self, _path: &str) -> DeviceResult<()> {
        Ok(())
    }
    fn rmdir(&mut self, _path: &str) -> DeviceResult<()> {
        Ok(())
    }
    fn get_attributes(&mut self, _path: &str) -> DeviceResult<FileAttributes> {
        Ok(FileAttributes::ARCHIVE)
    }
    fn set_attributes(&mut self, _path: &str, _set: FileAttributes, _clear: FileAttributes) -> DeviceResult<()> {
        Ok(())
    }
    fn stat(&mut self, path: &str) -> DeviceResult<FileStat> {
        let size = self.remote_sizes.get(path).copied().ok_or(DeviceStatus::new(FAIL_CODE))?;
        Ok(FileStat { attributes: FileAttributes::ARCHIVE, size, modified: DeviceTime::default() })
    }
    fn get_modification_time(&mut self, _path: &str) -> DeviceResult<DeviceTime> {
        Ok(DeviceTime::default())
    }
    fn set_modification_time(&mut self, _path: &str, _time: DeviceTime) -> DeviceResult<()> {
        Ok(())
    }
    fn list_drives(&mut self) -> DeviceResult<u32> {
        Ok(0b100)
    }
    fn drive_info(&mut self, _index: u8) -> DeviceResult<Option<DriveDescriptor>> {
        Ok(None)
    }
    fn error_text(&self, status: DeviceStatus) -> String {
        format!("stub error {}", status.code())
    }
}

/// Local side with fixed files; every size lookup answers `size`.
#[derive(Default)]
pub struct StubFs {
    pub files: Vec<LocalFile>,
    pub size: u64,
}

impl LocalFileSystem for StubFs {
    fn list_files(&self, _dir: &Path) -> Result<Vec<LocalFile>> {
        Ok(self.files.clone())
    }
    fn file_size(&self, _path: &Path) -> Result<u64> {
        Ok(self.size)
    }
    fn is_directory(&self, _path: &Path) -> bool {
        true
    }
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/work"))
    }
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Err(LocalIoError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into())
    }
    fn write_string(&self, _path: &Path, _contents: &str) -> Result<()> {
        Ok(())
    }
}

/// Clock advancing by a fixed step on every reading.
pub struct StepClock {
    now: RefCell<WallTime>,
    step_centis: u32,
}

impl StepClock {
    pub fn new(start: WallTime, step_centis: u32) -> Self {
        Self { now: RefCell::new(start), step_centis }
    }
}

impl Clock for StepClock {
    fn now(&self) -> WallTime {
        let mut now = self.now.borrow_mut();
        let current = *now;
        let centis = now.centis + self.step_centis;
        *now = WallTime::new(now.secs + u64::from(centis / 100), centis % 100);
        current
    }
}

/// Scripted answers; records every prompt shown.
#[derive(Default)]
pub struct ScriptedInput {
    pub answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), prompts: Vec::new() }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front()
    }
}

pub fn session(prompt: bool) -> RemoteSessionState {
    let mut state = RemoteSessionState::new(
        RemotePath::parse("C:\\Documents\\").unwrap(),
        LocalDir::from_path(Path::new("/work")),
        CancelToken::new(),
    );
    state.prompt = prompt;
    state
}
