// crates/ports/src/clock.rs

/// Wall-clock reading with centisecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallTime {
    pub secs: u64,
    pub centis: u32,
}

impl WallTime {
    pub const fn new(secs: u64, centis: u32) -> Self {
        Self { secs, centis }
    }
}

pub trait Clock {
    fn now(&self) -> WallTime;
}
