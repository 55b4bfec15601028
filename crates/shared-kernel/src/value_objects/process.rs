// crates/shared-kernel/src/value_objects/process.rs
use std::fmt;

/// A running program on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u16,
    pub name: String,
    pub args: String,
}

impl ProcessInfo {
    /// Handle used to address the process in stop/command-line requests.
    pub fn handle(&self) -> String {
        format!("{}.${}", self.name, self.pid)
    }
}

/// Device family reported in the connection greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineType {
    Unknown,
    Pc,
    Mc,
    Hc,
    Series3,
    Series3a,
    Workabout,
    Sienna,
    Series3c,
    Series5,
    WinC,
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "an unknown Device",
            Self::Pc => "a PC",
            Self::Mc => "a MC",
            Self::Hc => "a HC",
            Self::Series3 => "a Series 3",
            Self::Series3a => "a Series 3a, 3c or 3mx",
            Self::Workabout => "a Workabout",
            Self::Sienna => "a Sienna",
            Self::Series3c => "a Series 3c",
            Self::Series5 => "a Series 5",
            Self::WinC => "a WinC",
        })
    }
}
