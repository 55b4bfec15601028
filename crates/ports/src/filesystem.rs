// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use psiftp_shared_kernel::Result;

/// A regular file found in a local directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub size: u64,
}

/// Host file system as seen by the session.
pub trait LocalFileSystem {
    /// Regular files directly inside `dir`, sorted by name.
    fn list_files(&self, dir: &Path) -> Result<Vec<LocalFile>>;
    fn file_size(&self, path: &Path) -> Result<u64>;
    fn is_directory(&self, path: &Path) -> bool;
    fn current_dir(&self) -> Result<PathBuf>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
