// crates/domain/src/remote_path.rs
use std::fmt;

pub const SEPARATOR: char = '\\';

/// Length of a drive root such as `C:\`.
const ROOT_LEN: usize = 3;

/// Absolute remote directory: `<DRIVE>:\seg\seg\`, always with a trailing
/// backslash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemotePath(String);

/// `true` for `\x`, `/x` and `D:x` style targets.
pub fn is_absolute(target: &str) -> bool {
    target.starts_with(['\\', '/']) || has_drive_prefix(target)
}

/// `true` when `text` starts with an ASCII drive letter and a colon.
pub fn has_drive_prefix(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(drive), Some(':')) if drive.is_ascii_alphabetic())
}

fn normalise_separators(text: &str) -> String {
    text.chars().map(|c| if c == '/' { SEPARATOR } else { c }).collect()
}

impl RemotePath {
    /// Root directory of an ASCII drive letter.
    pub fn root(drive: char) -> Option<Self> {
        drive
            .is_ascii_alphabetic()
            .then(|| Self(format!("{}:{SEPARATOR}", drive.to_ascii_uppercase())))
    }

    /// Parses an absolute directory such as `C:\Documents` or `d:/`.
    pub fn parse(text: &str) -> Option<Self> {
        let drive = text.chars().next()?;
        if !has_drive_prefix(text) {
            return None;
        }
        let root = Self::root(drive)?;
        Some(root.resolve(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn drive(&self) -> char {
        self.0.chars().next().unwrap_or('C')
    }

    pub fn is_root(&self) -> bool {
        self.0.len() <= ROOT_LEN
    }

    /// Resolves `target` against this directory.
    ///
    /// Absolute targets replace the directory (a rooted target without a
    /// drive keeps the current drive). Relative targets are applied one
    /// segment at a time; `..` never climbs above the drive root.
    pub fn resolve(&self, target: &str) -> Self {
        if is_absolute(target) {
            return Self(self.absolute_text(target, true));
        }
        let mut resolved = self.0.clone();
        for segment in target.split(['\\', '/']) {
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

    /// Full remote path of a file operand.
    pub fn file(&self, name: &str) -> String {
        if is_absolute(name) {
            self.absolute_text(name, false)
        } else {
            let mut path = self.0.clone();
            path.push_str(&normalise_separators(name));
            path
        }
    }

    fn absolute_text(&self, target: &str, directory: bool) -> String {
        let mut text = normalise_separators(target);
        if text.starts_with(SEPARATOR) {
            text.insert(0, ':');
            text.insert(0, self.drive());
        } else {
            if let Some(drive) = text.get_mut(..1) {
                drive.make_ascii_uppercase();
            }
            let after_colon = text.char_indices().nth(2).map_or(text.len(), |(i, _)| i);
            if !text[after_colon..].starts_with(SEPARATOR) {
                text.insert(after_colon, SEPARATOR);
            }
        }
        if directory && !text.ends_with(SEPARATOR) {
            text.push(SEPARATOR);
        }
        text
    }
}

/// Drops the last segment of a directory ending in a separator, keeping at
/// least the drive root.
fn pop_segment(path: &mut String) {
    let trimmed = &path[..path.len() - SEPARATOR.len_utf8()];
    match trimmed.rfind(SEPARATOR) {
        Some(index) if index >= ROOT_LEN - 1 => path.truncate(index + 1),
        _ => path.truncate(ROOT_LEN),
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
