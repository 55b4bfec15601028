// crates/core/src/application/dispatcher.rs
use std::io::Write;

use psiftp_domain::{MAX_TOKENS, RemoteSessionState, tokenize};
use psiftp_ports::{Clock, Device, LineSource, LocalFileSystem, LocalShell};
use psiftp_shared_kernel::{DeviceStatus, ProtocolError, Result, SessionError};

use super::commands::Command;

/// Prompt shown while waiting for a command line.
pub const PROMPT: &str = "psiftp> ";

/// Whether the session goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the session talks to.
pub struct SessionPorts<'a> {
    pub device: &'a mut dyn Device,
    pub local_fs: &'a dyn LocalFileSystem,
    pub shell: &'a mut dyn LocalShell,
    pub input: &'a mut dyn LineSource,
    pub clock: &'a dyn Clock,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

/// Reads command lines and routes them to handlers.
///
/// Handler failures are reported and the session continues; only end of
/// input, an interrupt while reading or `bye`/`quit` end it.
pub struct CommandDispatcher<'a> {
    pub(super) device: &'a mut dyn Device,
    pub(super) local_fs: &'a dyn LocalFileSystem,
    pub(super) shell: &'a mut dyn LocalShell,
    pub(super) input: &'a mut dyn LineSource,
    pub(super) clock: &'a dyn Clock,
    pub(super) out: &'a mut dyn Write,
    pub(super) err: &'a mut dyn Write,
    pub(super) state: RemoteSessionState,
    pub(super) date_format: String,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(ports: SessionPorts<'a>, state: RemoteSessionState, date_format: impl Into<String>) -> Self {
        let SessionPorts { device, local_fs, shell, input, clock, out, err } = ports;
        Self { device, local_fs, shell, input, clock, out, err, state, date_format: date_format.into() }
    }

    pub fn state(&self) -> &RemoteSessionState {
        &self.state
    }

    /// Interactive loop. Returns once the session ends.
    pub fn run_interactive(&mut self) {
        loop {
            self.state.cancel.reset();
            let Some(line) = self.input.read_command(PROMPT) else {
                let _ = writeln!(self.out, "bye");
                break;
            };
            if self.execute_line(&line).unwrap_or(Flow::Continue) == Flow::Quit {
                break;
            }
        }
        let _ = self.out.flush();
    }

    /// Runs a single command given as words and returns the process exit
    /// status for it.
    pub fn run_once(&mut self, words: &[String]) -> u8 {
        self.state.cancel.reset();
        let words = if words.len() > MAX_TOKENS {
            tracing::warn!(dropped = words.len() - MAX_TOKENS, "extra arguments ignored");
            &words[..MAX_TOKENS]
        } else {
            words
        };
        let status = match self.execute(words) {
            Ok(_) => 0,
            Err(err) => err.exit_status(),
        };
        let _ = self.out.flush();
        status
    }

    /// Tokenizes and executes one line. Errors have already been reported
    /// when this returns `Err`; blank lines do nothing.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                let err = SessionError::from(err);
                self.report(&err);
                return Err(err);
            }
        };
        if tokens.dropped > 0 {
            tracing::warn!(dropped = tokens.dropped, "too many words, extra ones ignored");
        }
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }
        self.execute(&tokens.words)
    }

    fn execute(&mut self, words: &[String]) -> Result<Flow> {
        let result = Command::parse(words).map_err(SessionError::from).and_then(|command| {
            tracing::debug!(?command, "dispatching");
            self.dispatch(command)
        });
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => self.help(),
            Command::TogglePrompt => {
                let on = self.state.toggle_prompt();
                self.say(&format!("Prompting now {}", on_off(on)));
            }
            Command::ToggleHash => {
                let on = self.state.toggle_hash();
                self.say(&format!("Hash printing now {}", on_off(on)));
            }
            Command::Pwd => self.pwd(),
            Command::ChangeDir(target) => self.change_dir(target.as_deref())?,
            Command::ChangeLocalDir(target) => self.change_local_dir(target.as_deref())?,
            Command::List => self.list()?,
            Command::DirCount => self.dir_count()?,
            Command::Devices => self.devices()?,
            Command::Rename { from, to } => self.rename(&from, &to)?,
            Command::Touch(name) => self.touch(&name)?,
            Command::GetTime(name) => self.get_time(&name)?,
            Command::Test(name) => self.test(&name)?,
            Command::GetAttributes(name) => self.get_attributes(&name)?,
            Command::SetAttributes { change, name } => self.set_attributes(change, &name)?,
            Command::Remove(name) => self.remove(&name)?,
            Command::MakeDir(name) => self.make_dir(&name)?,
            Command::RemoveDir(name) => self.remove_dir(&name)?,
            Command::Get { remote, local } => self.get(&remote, local.as_deref())?,
            Command::Put { local, remote } => self.put(&local, remote.as_deref())?,
            Command::MultiGet(pattern) => self.multi_get(&pattern)?,
            Command::MultiPut(pattern) => self.multi_put(&pattern)?,
            Command::Shell(line) => self.shell(line.as_deref())?,
            Command::Run { program, args } => self.run_program(&program, &args)?,
            Command::Processes => self.processes()?,
            Command::Kill(targets) => self.kill(&targets)?,
            Command::KillSave(file) => self.kill_save(&file)?,
            Command::RunRestore(file) => self.run_restore(&file)?,
        }
        Ok(Flow::Continue)
    }

    /// Converts a transport status into an error carrying its text.
    pub(super) fn protocol(&self, code: DeviceStatus) -> SessionError {
        ProtocolError::new(code, self.device.error_text(code)).into()
    }

    pub(super) fn say(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }

    pub(super) fn complain(&mut self, line: &str) {
        let _ = writeln!(self.err, "{line}");
    }

    /// Writes an error to stderr. A context error prints its cause first
    /// and the context on the following line.
    pub fn report(&mut self, err: &SessionError) {
        match err {
            SessionError::Context { context, source } => {
                self.report(source);
                self.complain(context);
            }
            SessionError::Protocol(err) => self.complain(&format!("Error: {err}")),
            other => self.complain(&other.to_string()),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
