// crates/domain/src/local_path.rs
use std::{
    fmt,
    path::{Path, PathBuf},
};

const SEPARATOR: char = '/';

/// Host directory used as the local side of transfers, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalDir(String);

impl LocalDir {
    pub fn from_path(path: &Path) -> Self {
        let mut text = path.to_string_lossy().into_owned();
        if !text.ends_with(SEPARATOR) {
            text.push(SEPARATOR);
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Same rules as the remote side with `/` as the only separator and no
    /// drive: `..` stops at `/`.
    pub fn resolve(&self, target: &str) -> Self {
        let mut resolved = if target.starts_with(SEPARATOR) {
            String::from(SEPARATOR)
        } else {
            self.0.clone()
        };
        for segment in target.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => pop_segment(&mut resolved),
                name => {
                    resolved.push_str(name);
                    resolved.push(SEPARATOR);
                }
            }
        }
        Self(resolved)
    }

    /// Host path of a file operand.
    pub fn file(&self, name: &str) -> PathBuf {
        if name.starts_with(SEPARATOR) {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{}{name}", self.0))
        }
    }
}

fn pop_segment(path: &mut String) {
    let trimmed = &path[..path.len() - 1];
    if let Some(index) = trimmed.rfind(SEPARATOR) {
        path.truncate(index + 1);
    }
}

impl fmt::Display for LocalDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
