// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::DeviceStatus;

/// Root error type shared across the workspace.
///
/// None of these end the session; the dispatcher reports them and reads the
/// next command.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SessionError>,
    },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    LocalIo(#[from] LocalIoError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cancelled(#[from] CancelledTransfer),
}

pub type Result<T> = std::result::Result<T, SessionError>;

impl SessionError {
    /// Process exit status for one-shot mode.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Context { source, .. } => source.exit_status(),
            Self::Protocol(err) => err.code.exit_status(),
            Self::LocalIo(_) | Self::Validation(_) | Self::Cancelled(_) => 1,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_cancelled(),
            Self::Cancelled(_) => true,
            _ => false,
        }
    }
}

/// A non-zero transport result, already translated to text by the transport.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProtocolError {
    pub code: DeviceStatus,
    pub message: String,
}

impl ProtocolError {
    pub fn new(code: DeviceStatus, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Failures touching the host filesystem or host processes.
#[derive(Debug, Error)]
pub enum LocalIoError {
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error in directory name \"{path}\": {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such directory \"{path}\"")]
    NotADirectory { path: PathBuf },

    #[error("Failed to run '{command}': {source}")]
    ShellSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Malformed command lines and arguments.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("syntax error. Try \"help\"")]
    Syntax { command: String },

    #[error("syntax error. Try \"help\"")]
    UnterminatedQuote,

    #[error("invalid process id '{value}'")]
    InvalidPid { value: String },
}

/// A transfer stopped because cancellation was requested. The partial
/// destination file is left as-is.
#[derive(Debug, Error)]
#[error("Transfer of \"{path}\" aborted")]
pub struct CancelledTransfer {
    pub path: String,
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SessionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SessionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SessionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
