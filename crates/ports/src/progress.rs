// crates/ports/src/progress.rs
use std::ops::ControlFlow;

/// Called by the transport after every chunk of a copy.
///
/// Returning [`ControlFlow::Break`] asks the transport to stop; it then
/// fails the copy with its own status code.
pub trait ProgressSink {
    fn on_progress(&mut self, bytes: u64) -> ControlFlow<()>;
}

/// Sink that never reports and never stops a copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _bytes: u64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
