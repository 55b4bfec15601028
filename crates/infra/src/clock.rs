// crates/infra/src/clock.rs
use std::time::{SystemTime, UNIX_EPOCH};

use psiftp_ports::{Clock, WallTime};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        WallTime::new(since_epoch.as_secs(), since_epoch.subsec_millis() / 10)
    }
}
