// crates/core/src/config.rs
use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid drive '{0}': expected AUTO or a drive letter")]
    InvalidDrive(String),

    #[error("invalid mount '{0}': expected <LETTER>=<DIR>")]
    InvalidMount(String),

    #[error("base directory '{0}' must start with '\\'")]
    InvalidBaseDir(String),
}

/// Which drive the session starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriveSelection {
    /// First drive the device reports as present.
    #[default]
    Auto,
    Letter(char),
}

impl FromStr for DriveSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let letter = s.strip_suffix(':').unwrap_or(s);
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c.to_ascii_uppercase())),
            _ => Err(ConfigError::InvalidDrive(s.to_string())),
        }
    }
}

/// A host directory served as one device drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub letter: char,
    pub dir: PathBuf,
}

impl FromStr for MountSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidMount(s.to_string());
        let (letter, dir) = s.split_once('=').ok_or_else(invalid)?;
        let DriveSelection::Letter(letter) = letter.parse().map_err(|_| invalid())? else {
            return Err(invalid());
        };
        if dir.is_empty() {
            return Err(invalid());
        }
        Ok(Self { letter, dir: PathBuf::from(dir) })
    }
}

impl fmt::Display for MountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.letter, self.dir.display())
    }
}

/// Validated settings of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub default_drive: DriveSelection,
    /// Directory below the drive root, `\` separated, starting with `\`.
    pub base_dir: String,
    pub date_format: String,
    pub prompt: bool,
    pub hash: bool,
    pub mounts: Vec<MountSpec>,
    /// Words of the one-shot command; empty for an interactive session.
    pub command: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_drive: DriveSelection::Auto,
            base_dir: "\\".to_string(),
            date_format: "%c".to_string(),
            prompt: true,
            hash: false,
            mounts: Vec::new(),
            command: Vec::new(),
        }
    }
}

impl SessionConfig {
    pub fn is_one_shot(&self) -> bool {
        !self.command.is_empty()
    }

    /// Normalises `/` to `\` and checks the base directory is rooted.
    pub fn validate_base_dir(base_dir: &str) -> Result<String, ConfigError> {
        let normalised = base_dir.replace('/', "\\");
        if normalised.starts_with('\\') {
            Ok(normalised)
        } else {
            Err(ConfigError::InvalidBaseDir(base_dir.to_string()))
        }
    }
}
