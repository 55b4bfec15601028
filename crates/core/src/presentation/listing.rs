// crates/core/src/presentation/listing.rs
use psiftp_shared_kernel::{DeviceTime, DriveDescriptor, FileAttributes, ProcessInfo};

pub const DRIVES_HEADER: &str =
    "Drive Type       Volname             Total          Free  UniqueID  Attributes";

pub const PROCESSES_HEADER: &str = "PID   CMD          ARGS";

/// `ls`/`test` line: flags, right-aligned size, date, name.
pub fn entry_line(
    attributes: FileAttributes,
    size: u32,
    modified: DeviceTime,
    name: &str,
    date_format: &str,
) -> String {
    format!("{attributes} {size:>10} {} {name}", modified.format(date_format))
}

/// `gattr` line: hex bits followed by the flag string.
pub fn attribute_line(attributes: FileAttributes) -> String {
    format!("{:04x} ({attributes})", attributes.bits())
}

pub fn drive_row(drive: &DriveDescriptor) -> String {
    let labels: Vec<String> = [drive.drive_attributes.labels(), drive.media_attributes.labels()]
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();
    format!(
        "{}     {:<10} {:<12} {:>13} {:>13}  {:08x}  {}",
        drive.letter,
        drive.media_type.label(),
        drive.volume_name,
        drive.size,
        drive.free,
        drive.uid,
        labels.join("; ")
    )
}

pub fn process_row(process: &ProcessInfo) -> String {
    format!("{:5} {:<12} {}", process.pid, process.name, process.args)
}
