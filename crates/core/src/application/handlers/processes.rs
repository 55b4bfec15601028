// crates/core/src/application/handlers/processes.rs
use std::fmt::Write as _;

use psiftp_domain::remote_path::has_drive_prefix;
use psiftp_shared_kernel::{ErrorContext, Result};

use crate::{
    application::{CommandDispatcher, commands::KillTarget},
    presentation::{PROCESSES_HEADER, process_row},
};

impl CommandDispatcher<'_> {
    pub(crate) fn processes(&mut self) -> Result<()> {
        let processes = self.device.list_processes().map_err(|code| self.protocol(code))?;
        self.say(PROCESSES_HEADER);
        for process in &processes {
            self.say(&process_row(process));
        }
        Ok(())
    }

    /// Stops every listed process whose pid matches a target; `all` stops
    /// everything and ends the scan.
    pub(crate) fn kill(&mut self, targets: &[KillTarget]) -> Result<()> {
        let processes = self.device.list_processes().map_err(|code| self.protocol(code))?;
        let mut any_stopped = false;
        for target in targets {
            for process in &processes {
                let matches = match target {
                    KillTarget::All => true,
                    KillTarget::Pid(pid) => *pid == process.pid,
                };
                if !matches {
                    continue;
                }
                if let Err(code) = self.device.stop_process(&process.handle()) {
                    tracing::warn!(handle = %process.handle(), code = code.code(), "stop failed");
                }
                any_stopped = true;
            }
            if *target == KillTarget::All {
                break;
            }
        }
        if !any_stopped {
            self.complain("no such process");
        }
        Ok(())
    }

    /// Program path is kept when it names a drive, else it is taken relative
    /// to the remote directory.
    pub(crate) fn run_program(&mut self, program: &str, args: &str) -> Result<()> {
        let path = if has_drive_prefix(program) {
            program.to_string()
        } else {
            format!("{}{program}", self.state.remote_dir)
        };
        self.device.exec_program(&path, args).map_err(|code| self.protocol(code))
    }

    /// Writes `<program> <args>` for every running process to a local file,
    /// then stops them. Nothing is stopped if the file cannot be written.
    pub(crate) fn kill_save(&mut self, file: &str) -> Result<()> {
        let processes = self.device.list_processes().map_err(|code| self.protocol(code))?;
        let mut saved = String::new();
        let mut handles = Vec::with_capacity(processes.len());
        for process in &processes {
            let handle = process.handle();
            match self.device.command_line(&handle) {
                Ok(program) => {
                    let _ = writeln!(saved, "{program} {}", process.args);
                }
                Err(code) => tracing::warn!(%handle, code = code.code(), "no command line"),
            }
            handles.push(handle);
        }

        let path = self.state.local_file(file);
        self.local_fs
            .write_string(&path, &saved)
            .with_context(|| format!("Could not write processlist {file}"))?;

        for handle in handles {
            if let Err(code) = self.device.stop_process(&handle) {
                tracing::warn!(%handle, code = code.code(), "stop failed");
            }
        }
        Ok(())
    }

    /// Starts every `<program> <args>` line of a local file. Failures are
    /// reported per line and do not stop the rest.
    pub(crate) fn run_restore(&mut self, file: &str) -> Result<()> {
        let path = self.state.local_file(file);
        let text = self
            .local_fs
            .read_to_string(&path)
            .with_context(|| format!("Could not read processlist {file}"))?;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (program, args) = line.split_once(' ').unwrap_or((line, ""));
            let args = args.trim();
            if let Err(code) = self.device.exec_program(program, args) {
                self.complain(&format!("Could not start {program} {args}"));
                let err = self.protocol(code);
                self.report(&err);
            }
        }
        Ok(())
    }
}
