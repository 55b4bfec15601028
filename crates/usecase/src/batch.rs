// crates/usecase/src/batch.rs
use std::io::Write;

use psiftp_domain::{GlobPattern, RemoteSessionState};
use psiftp_ports::{Clock, LineSource, LocalFileSystem, RemoteFileService};
use psiftp_shared_kernel::{ProtocolError, Result, SessionError};

use crate::transfer::{Direction, TransferController, TransferRequest};

/// How a batch ended.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Transfers started, including a failed last one.
    pub attempted: usize,
    pub aborted: bool,
    /// The error that stopped the batch, if any.
    pub failure: Option<SessionError>,
}

enum Answer {
    Yes { lowercase: bool },
    No,
    EndOfInput,
}

/// `mget`/`mput`: transfers every matching file of the current directory.
pub struct BatchSelector<'a, D: ?Sized> {
    device: &'a mut D,
    local_fs: &'a dyn LocalFileSystem,
    clock: &'a dyn Clock,
    input: &'a mut dyn LineSource,
    out: &'a mut dyn Write,
}

impl<'a, D: RemoteFileService + ?Sized> BatchSelector<'a, D> {
    pub fn new(
        device: &'a mut D,
        local_fs: &'a dyn LocalFileSystem,
        clock: &'a dyn Clock,
        input: &'a mut dyn LineSource,
        out: &'a mut dyn Write,
    ) -> Self {
        Self { device, local_fs, clock, input, out }
    }

    /// Fails only when the source directory cannot be listed; per-file
    /// failures end up in [`BatchOutcome::failure`].
    pub fn run(
        &mut self,
        state: &RemoteSessionState,
        direction: Direction,
        pattern: &GlobPattern,
    ) -> Result<BatchOutcome> {
        let names = self.candidates(state, direction)?;
        let mut outcome = BatchOutcome::default();

        for name in names.iter().filter(|name| pattern.matches(name)) {
            if state.cancel.is_cancelled() {
                tracing::debug!("batch interrupted between entries");
                outcome.aborted = true;
                break;
            }
            let lowercase = match self.confirm(direction, name, state.prompt) {
                Answer::Yes { lowercase } => lowercase,
                Answer::No => continue,
                Answer::EndOfInput => {
                    outcome.aborted = true;
                    break;
                }
            };

            let remote = state.remote_file(name);
            let local = if lowercase {
                state.local_file(&name.to_lowercase())
            } else {
                state.local_file(name)
            };
            let request = TransferRequest { direction, remote: &remote, local: &local };

            outcome.attempted += 1;
            let result = TransferController::new(&mut *self.device, self.local_fs, self.clock, &state.cancel)
                .run(&request, state.hash, &mut *self.out);
            match result {
                Ok(_) => {
                    let _ = writeln!(self.out, "Transfer complete");
                }
                Err(err) => {
                    let _ = writeln!(self.out);
                    outcome.aborted = true;
                    outcome.failure = Some(err);
                    break;
                }
            }
        }
        Ok(outcome)
    }

    fn candidates(&mut self, state: &RemoteSessionState, direction: Direction) -> Result<Vec<String>> {
        match direction {
            Direction::Download => {
                let dir = state.remote_dir.as_str();
                let entries = self
                    .device
                    .list_directory(dir)
                    .map_err(|code| ProtocolError::new(code, self.device.error_text(code)))?;
                Ok(entries.into_iter().filter(|e| !e.is_directory()).map(|e| e.name).collect())
            }
            Direction::Upload => {
                let files = self.local_fs.list_files(state.local_dir.as_path())?;
                Ok(files.into_iter().map(|f| f.name).collect())
            }
        }
    }

    fn confirm(&mut self, direction: Direction, name: &str, prompt: bool) -> Answer {
        let question = match direction {
            Direction::Download => format!("Get \"{name}\" (y,n): "),
            Direction::Upload => format!("Put \"{name}\" (y,n): "),
        };
        if !prompt {
            let _ = write!(self.out, "{question}y ");
            let _ = self.out.flush();
            return Answer::Yes { lowercase: false };
        }
        loop {
            let Some(answer) = self.input.read_line(&question) else {
                return Answer::EndOfInput;
            };
            match answer.as_str() {
                "y" => return Answer::Yes { lowercase: false },
                "n" => return Answer::No,
                other if direction == Direction::Download && other.starts_with('l') => {
                    return Answer::Yes { lowercase: true };
                }
                _ => {}
            }
        }
    }
}
