// crates/core/src/bootstrap.rs
use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use psiftp_domain::{LocalDir, RemotePath, RemoteSessionState};
use psiftp_infra::{
    HostShell, MirrorDevice, StdLocalFileSystem, StdinLineSource, SystemClock, platform,
};
use psiftp_ports::LocalFileSystem;
use psiftp_shared_kernel::CancelToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    application::{CommandDispatcher, SessionPorts, greet, resolve_default_drive},
    config::SessionConfig,
    interface::cli,
};

/// Drive served from the working directory when no `--mount` is given.
const FALLBACK_DRIVE: char = 'C';

pub fn run() -> Result<ExitCode> {
    init_logging();
    let config = cli::load_config()?;
    run_with_config(config)
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub fn run_with_config(config: SessionConfig) -> Result<ExitCode> {
    let local_fs = StdLocalFileSystem;
    let cwd = local_fs.current_dir().context("cannot determine working directory")?;

    let mounts = if config.mounts.is_empty() {
        vec![(FALLBACK_DRIVE, cwd.clone())]
    } else {
        config.mounts.iter().map(|m| (m.letter, m.dir.clone())).collect()
    };
    let mut device = MirrorDevice::new(mounts);
    let mut shell = HostShell;
    let mut input = StdinLineSource;
    let clock = SystemClock;

    let cancel = CancelToken::new();
    platform::install_interrupt_handler(&cancel).context("cannot install interrupt handler")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if !config.is_one_shot() {
        greet(&mut device, &mut out, &mut err);
    }
    let Some(drive) = resolve_default_drive(&mut device, config.default_drive) else {
        writeln!(err, "FATAL: Couldn't find default drive")?;
        return Ok(ExitCode::FAILURE);
    };
    let root = RemotePath::root(drive).context("default drive is not a letter")?;
    let default_remote_dir = root.resolve(&config.base_dir);
    tracing::debug!(%default_remote_dir, "session starting");

    let mut state = RemoteSessionState::new(default_remote_dir, LocalDir::from_path(&cwd), cancel);
    state.prompt = config.prompt;
    state.hash = config.hash;

    if !config.is_one_shot() {
        writeln!(out, "Remote dir is: \"{}\"", state.remote_dir)?;
    }

    let ports = SessionPorts {
        device: &mut device,
        local_fs: &local_fs,
        shell: &mut shell,
        input: &mut input,
        clock: &clock,
        out: &mut out,
        err: &mut err,
    };
    let mut dispatcher = CommandDispatcher::new(ports, state, config.date_format.clone());

    if config.is_one_shot() {
        let status = dispatcher.run_once(&config.command);
        return Ok(ExitCode::from(status));
    }
    dispatcher.run_interactive();
    Ok(ExitCode::SUCCESS)
}
