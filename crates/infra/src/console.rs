// crates/infra/src/console.rs
use std::{
    io::{self, BufRead, Write},
    path::Path,
    process::Command,
};

use psiftp_ports::{LineSource, LocalShell};
use psiftp_shared_kernel::{LocalIoError, Result};

use crate::platform;

/// Reads lines from stdin, printing prompts to stdout.
#[derive(Debug, Default)]
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(prompt.as_bytes());
        let _ = stdout.flush();
        drop(stdout);

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(err) => {
                tracing::debug!(%err, "stdin closed");
                None
            }
        }
    }

    fn read_command(&mut self, prompt: &str) -> Option<String> {
        platform::set_awaiting_command(true);
        let line = self.read_line(prompt);
        platform::set_awaiting_command(false);
        line
    }
}

/// Runs host commands through the platform shell.
#[derive(Debug, Default)]
pub struct HostShell;

impl LocalShell for HostShell {
    fn run(&mut self, command: Option<&str>, cwd: &Path) -> Result<()> {
        let (program, mut child) = match command {
            Some(line) => {
                let (shell, flag) = platform::COMMAND_SHELL;
                let mut child = Command::new(shell);
                child.arg(flag).arg(line);
                (line.to_string(), child)
            }
            None => {
                let shell = platform::interactive_shell();
                (shell.clone(), Command::new(shell))
            }
        };
        tracing::debug!(command = %program, cwd = %cwd.display(), "running host command");
        let status = child
            .current_dir(cwd)
            .status()
            .map_err(|source| LocalIoError::ShellSpawn { command: program.clone(), source })?;
        if !status.success() {
            tracing::debug!(command = %program, ?status, "host command failed");
        }
        Ok(())
    }
}
