// crates/core/src/application/handlers/transfers.rs
use psiftp_domain::GlobPattern;
use psiftp_shared_kernel::Result;
use psiftp_usecase::{BatchSelector, Direction, TransferController, TransferRequest};

use crate::application::CommandDispatcher;

impl CommandDispatcher<'_> {
    pub(crate) fn get(&mut self, remote: &str, local: Option<&str>) -> Result<()> {
        let remote_path = self.state.remote_file(remote);
        let local_path = self.state.local_file(local.unwrap_or(remote));
        self.transfer(TransferRequest {
            direction: Direction::Download,
            remote: &remote_path,
            local: &local_path,
        })
    }

    pub(crate) fn put(&mut self, local: &str, remote: Option<&str>) -> Result<()> {
        let local_path = self.state.local_file(local);
        let remote_path = self.state.remote_file(remote.unwrap_or(local));
        self.transfer(TransferRequest {
            direction: Direction::Upload,
            remote: &remote_path,
            local: &local_path,
        })
    }

    fn transfer(&mut self, request: TransferRequest<'_>) -> Result<()> {
        let stats = TransferController::new(&mut *self.device, self.local_fs, self.clock, &self.state.cancel)
            .run(&request, self.state.hash, &mut *self.out)?;
        self.say(&stats.to_string());
        Ok(())
    }

    pub(crate) fn multi_get(&mut self, pattern: &GlobPattern) -> Result<()> {
        self.batch(Direction::Download, pattern)
    }

    pub(crate) fn multi_put(&mut self, pattern: &GlobPattern) -> Result<()> {
        self.batch(Direction::Upload, pattern)
    }

    fn batch(&mut self, direction: Direction, pattern: &GlobPattern) -> Result<()> {
        let outcome = BatchSelector::new(
            &mut *self.device,
            self.local_fs,
            self.clock,
            &mut *self.input,
            &mut *self.out,
        )
        .run(&self.state, direction, pattern)?;
        tracing::debug!(attempted = outcome.attempted, aborted = outcome.aborted, "batch finished");
        match outcome.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
