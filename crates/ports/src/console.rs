// crates/ports/src/console.rs
use std::path::Path;

use psiftp_shared_kernel::Result;

/// Source of command lines and prompt answers.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its terminator.
    /// `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Reads the next command line. Sources that can be interrupted while
    /// waiting for a command override this.
    fn read_command(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt)
    }
}

/// Runs commands on the host.
pub trait LocalShell {
    /// Runs `command` (or an interactive shell when `None`) in `cwd` and
    /// waits for it.
    fn run(&mut self, command: Option<&str>, cwd: &Path) -> Result<()>;
}
