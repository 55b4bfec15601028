// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use psiftp_ports::{LocalFile, LocalFileSystem};
use psiftp_shared_kernel::{LocalIoError, Result};

use crate::persistence::{FileReader, FileWriter};

/// [`LocalFileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdLocalFileSystem;

impl LocalFileSystem for StdLocalFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<LocalFile>> {
        let access = |source| LocalIoError::DirectoryAccess { path: dir.to_path_buf(), source };
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(access)? {
            let entry = entry.map_err(access)?;
            // follows symlinks, so a link to a regular file counts as one
            let Ok(metadata) = fs::metadata(entry.path()) else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            files.push(LocalFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
            });
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .map_err(|source| LocalIoError::FileRead { path: path.to_path_buf(), source })?;
        Ok(metadata.len())
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir()
            .map_err(|source| LocalIoError::DirectoryAccess { path: PathBuf::from("."), source }.into())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        FileReader::read_to_string(path)
            .map_err(|source| LocalIoError::FileRead { path: path.to_path_buf(), source }.into())
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        FileWriter::atomic_write(path, contents.as_bytes())
            .map_err(|source| LocalIoError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_regular_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "bb").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let files = StdLocalFileSystem.list_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
        assert_eq!(files[1].size, 2);
    }

    #[test]
    fn missing_directory_is_a_local_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StdLocalFileSystem.list_files(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().starts_with("Error in directory name"));
    }

    #[test]
    fn write_then_read_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("procs.txt");
        StdLocalFileSystem.write_string(&path, "C:\\a.app x\n").unwrap();
        assert_eq!(StdLocalFileSystem.read_to_string(&path).unwrap(), "C:\\a.app x\n");
        assert_eq!(StdLocalFileSystem.file_size(&path).unwrap(), 11);
        assert!(StdLocalFileSystem.is_directory(dir.path()));
    }
}
