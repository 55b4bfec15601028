// crates/infra/src/platform.rs
//! Platform-specific abstractions.
//!
//! This module centralizes OS-specific logic (interrupt delivery and the
//! host shell) so the rest of the workspace stays free of conditional
//! compilation.

use std::sync::{
    OnceLock,
    atomic::{AtomicBool, Ordering},
};

use psiftp_shared_kernel::CancelToken;

static CANCEL: OnceLock<CancelToken> = OnceLock::new();
static AWAITING_COMMAND: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Interrupt Handling
// ============================================================================

/// Routes SIGINT into `token`.
///
/// While [`set_awaiting_command`] is on, an interrupt also closes stdin so the
/// pending read sees end of input and the session ends. Only the first token
/// installed is used.
pub fn install_interrupt_handler(token: &CancelToken) -> std::io::Result<()> {
    if CANCEL.set(token.clone()).is_err() {
        tracing::debug!("interrupt handler already installed");
        return Ok(());
    }
    install_os_handler()
}

/// Marks whether the session is blocked reading a command line.
pub fn set_awaiting_command(awaiting: bool) {
    AWAITING_COMMAND.store(awaiting, Ordering::SeqCst);
}

fn on_interrupt() {
    if let Some(token) = CANCEL.get() {
        token.cancel();
    }
    if AWAITING_COMMAND.load(Ordering::SeqCst) {
        close_stdin();
    }
}

#[cfg(unix)]
extern "C" fn handle_sigint(_signal: nix::libc::c_int) {
    on_interrupt();
}

#[cfg(unix)]
fn install_os_handler() -> std::io::Result<()> {
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    // no SA_RESTART: a blocked read must return so it can observe the closed fd
    let action = SigAction::new(SigHandler::Handler(handle_sigint), SaFlags::empty(), SigSet::empty());
    // SAFETY: the handler only touches atomics and calls close(2), both
    // async-signal-safe.
    unsafe { sigaction(Signal::SIGINT, &action) }.map_err(std::io::Error::from)?;
    Ok(())
}

#[cfg(unix)]
fn close_stdin() {
    const STDIN_FD: std::os::fd::RawFd = 0;
    let _ = nix::unistd::close(STDIN_FD);
}

#[cfg(not(unix))]
fn install_os_handler() -> std::io::Result<()> {
    tracing::debug!("interrupts are not routed on this platform");
    Ok(())
}

#[cfg(not(unix))]
fn close_stdin() {}

// ============================================================================
// Host Shell
// ============================================================================

/// Program and flag used to run one command line.
#[cfg(unix)]
pub const COMMAND_SHELL: (&str, &str) = ("/bin/sh", "-c");

#[cfg(windows)]
pub const COMMAND_SHELL: (&str, &str) = ("cmd", "/C");

#[cfg(all(not(unix), not(windows)))]
pub const COMMAND_SHELL: (&str, &str) = ("sh", "-c");

/// Interactive shell for a bare `!`: `$SHELL`, else the platform default.
pub fn interactive_shell() -> String {
    std::env::var("SHELL")
        .ok()
        .filter(|shell| !shell.is_empty())
        .unwrap_or_else(|| COMMAND_SHELL.0.to_string())
}
