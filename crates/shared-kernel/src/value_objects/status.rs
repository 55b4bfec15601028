// crates/shared-kernel/src/value_objects/status.rs
use std::fmt;

/// Non-zero result code reported by the device transport.
///
/// The meaning of a code is owned by the transport; the session only asks
/// the transport to translate it to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DeviceStatus(i32);

impl DeviceStatus {
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Absolute code clamped into `1..=255`.
    pub fn exit_status(self) -> u8 {
        u8::try_from(self.0.unsigned_abs()).unwrap_or(u8::MAX).max(1)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DeviceStatus {
    fn from(code: i32) -> Self {
        Self::new(code)
    }
}

/// Result of a single transport operation.
pub type DeviceResult<T> = std::result::Result<T, DeviceStatus>;
