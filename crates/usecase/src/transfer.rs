// crates/usecase/src/transfer.rs
use std::{fmt, io::Write, ops::ControlFlow, path::Path};

use psiftp_ports::{Clock, LocalFileSystem, ProgressSink, RemoteFileService, WallTime};
use psiftp_shared_kernel::{CancelToken, CancelledTransfer, ProtocolError, Result};

/// Shortest duration used when computing throughput.
const MIN_ELAPSED_CENTIS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Download,
    Upload,
}

/// One file to copy. `remote` is an absolute device path.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'p> {
    pub direction: Direction,
    pub remote: &'p str,
    pub local: &'p Path,
}

impl TransferRequest<'_> {
    fn source(&self) -> String {
        match self.direction {
            Direction::Download => self.remote.to_string(),
            Direction::Upload => self.local.display().to_string(),
        }
    }
}

/// Duration with centisecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub secs: u64,
    pub centis: u32,
}

impl Elapsed {
    pub fn as_centis(self) -> u64 {
        self.secs * 100 + u64::from(self.centis)
    }

    pub fn as_secs_f64(self) -> f64 {
        self.as_centis() as f64 / 100.0
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.secs, self.centis)
    }
}

/// Time between two readings, borrowing a second when the centiseconds of
/// `end` are below those of `start`. Never negative.
pub fn elapsed(start: WallTime, end: WallTime) -> Elapsed {
    if end <= start {
        return Elapsed::default();
    }
    if end.centis < start.centis {
        Elapsed { secs: end.secs - start.secs - 1, centis: end.centis + 100 - start.centis }
    } else {
        Elapsed { secs: end.secs - start.secs, centis: end.centis - start.centis }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferStats {
    pub bytes: u64,
    pub elapsed: Elapsed,
    pub bytes_per_second: f64,
}

impl TransferStats {
    pub fn new(bytes: u64, elapsed: Elapsed) -> Self {
        let centis = elapsed.as_centis().max(MIN_ELAPSED_CENTIS);
        let bytes_per_second = bytes as f64 * 100.0 / centis as f64;
        Self { bytes, elapsed, bytes_per_second }
    }
}

impl fmt::Display for TransferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer complete, ({} bytes in {} secs = {:.0} cps)",
            self.bytes, self.elapsed, self.bytes_per_second
        )
    }
}

/// Progress sink printing one `#` per chunk while hash mode is on.
///
/// Once the cancel token is set it stops printing and asks the transport to
/// stop.
pub struct HashProgress<'w> {
    out: &'w mut dyn Write,
    hash: bool,
    cancel: &'w CancelToken,
    printed: bool,
}

impl<'w> HashProgress<'w> {
    pub fn new(out: &'w mut dyn Write, hash: bool, cancel: &'w CancelToken) -> Self {
        Self { out, hash, cancel, printed: false }
    }

    /// Ends the marker line if any marker was printed.
    pub fn finish(&mut self) {
        if self.printed {
            let _ = writeln!(self.out);
            self.printed = false;
        }
    }
}

impl ProgressSink for HashProgress<'_> {
    fn on_progress(&mut self, _bytes: u64) -> ControlFlow<()> {
        if self.cancel.is_cancelled() {
            return ControlFlow::Break(());
        }
        if self.hash {
            let _ = write!(self.out, "#");
            let _ = self.out.flush();
            self.printed = true;
        }
        ControlFlow::Continue(())
    }
}

/// Runs single copies through the transport and measures them.
pub struct TransferController<'a, D: ?Sized> {
    device: &'a mut D,
    local_fs: &'a dyn LocalFileSystem,
    clock: &'a dyn Clock,
    cancel: &'a CancelToken,
}

impl<'a, D: RemoteFileService + ?Sized> TransferController<'a, D> {
    pub fn new(
        device: &'a mut D,
        local_fs: &'a dyn LocalFileSystem,
        clock: &'a dyn Clock,
        cancel: &'a CancelToken,
    ) -> Self {
        Self { device, local_fs, clock, cancel }
    }

    /// Copies one file, writing hash markers to `out` when `hash` is set.
    pub fn run(
        &mut self,
        request: &TransferRequest<'_>,
        hash: bool,
        out: &mut dyn Write,
    ) -> Result<TransferStats> {
        tracing::debug!(direction = ?request.direction, remote = request.remote, local = %request.local.display(), "transfer start");
        let mut progress = HashProgress::new(out, hash, self.cancel);
        let start = self.clock.now();
        let status = match request.direction {
            Direction::Download => {
                self.device.copy_from_device(request.remote, request.local, &mut progress)
            }
            Direction::Upload => {
                self.device.copy_to_device(request.local, request.remote, &mut progress)
            }
        };
        let end = self.clock.now();
        progress.finish();

        if let Err(code) = status {
            if self.cancel.take() {
                tracing::debug!(code = code.code(), "transfer cancelled");
                return Err(CancelledTransfer { path: request.source() }.into());
            }
            return Err(ProtocolError::new(code, self.device.error_text(code)).into());
        }

        let bytes = self.transferred_size(request)?;
        let stats = TransferStats::new(bytes, elapsed(start, end));
        tracing::debug!(bytes, secs = stats.elapsed.as_secs_f64(), "transfer end");
        Ok(stats)
    }

    fn transferred_size(&mut self, request: &TransferRequest<'_>) -> Result<u64> {
        match request.direction {
            Direction::Download => self.local_fs.file_size(request.local),
            Direction::Upload => match self.device.stat(request.remote) {
                Ok(stat) => Ok(u64::from(stat.size)),
                Err(code) => {
                    tracing::warn!(
                        remote = request.remote,
                        code = code.code(),
                        "remote stat failed, reporting local size"
                    );
                    self.local_fs.file_size(request.local)
                }
            },
        }
    }
}
