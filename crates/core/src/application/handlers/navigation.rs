// crates/core/src/application/handlers/navigation.rs
use std::io::Write;

use psiftp_domain::LocalDir;
use psiftp_shared_kernel::{ErrorContext, LocalIoError, Result};

use crate::{application::CommandDispatcher, presentation::USAGE};

impl CommandDispatcher<'_> {
    pub(crate) fn help(&mut self) {
        let _ = write!(self.out, "{USAGE}");
    }

    pub(crate) fn pwd(&mut self) {
        let local = format!("Local dir: \"{}\"", self.state.local_dir);
        let remote = format!("Remote dir: \"{}\"", self.state.remote_dir);
        self.say(&local);
        self.say(&remote);
    }

    /// `cd` keeps the old directory unless the device can list the new one.
    pub(crate) fn change_dir(&mut self, target: Option<&str>) -> Result<()> {
        let Some(target) = target else {
            self.state.remote_dir = self.state.default_remote_dir.clone();
            return Ok(());
        };
        let candidate = self.state.remote_dir.resolve(target);
        match self.device.count_entries(candidate.as_str()) {
            Ok(_) => {
                tracing::debug!(dir = %candidate, "remote directory changed");
                self.state.remote_dir = candidate;
                Ok(())
            }
            Err(code) => {
                let keep = format!("Keeping original directory \"{}\"", self.state.remote_dir);
                Err(self.protocol(code)).context(keep)
            }
        }
    }

    /// `lcd` only changes the session's local directory, never the process
    /// working directory.
    pub(crate) fn change_local_dir(&mut self, target: Option<&str>) -> Result<()> {
        let Some(target) = target else {
            let cwd = self.local_fs.current_dir()?;
            self.state.local_dir = LocalDir::from_path(&cwd);
            return Ok(());
        };
        let candidate = self.state.local_dir.resolve(target);
        if self.local_fs.is_directory(candidate.as_path()) {
            self.state.local_dir = candidate;
            return Ok(());
        }
        let keep = format!("Keeping original directory \"{}\"", self.state.local_dir);
        Err(LocalIoError::NotADirectory { path: candidate.as_path().to_path_buf() }).context(keep)
    }

    /// Runs a host command in the session's local directory; `None` starts
    /// an interactive shell.
    pub(crate) fn shell(&mut self, line: Option<&str>) -> Result<()> {
        if line.is_none() {
            self.say("Starting subshell ...");
        }
        let _ = self.out.flush();
        self.shell.run(line, self.state.local_dir.as_path())
    }
}
