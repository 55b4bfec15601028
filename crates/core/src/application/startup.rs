// crates/core/src/application/startup.rs
use std::io::Write;

use psiftp_ports::{RemoteFileService, RemoteProcessService};
use psiftp_shared_kernel::DriveDescriptor;

use crate::config::DriveSelection;

/// Prints the connection greeting: machine type and owner information.
pub fn greet(device: &mut dyn RemoteProcessService, out: &mut dyn Write, err: &mut dyn Write) {
    match device.owner_info() {
        Ok(lines) => {
            let machine = match device.machine_type() {
                Ok(machine) => machine.to_string(),
                Err(code) => {
                    tracing::warn!(code = code.code(), "machine type unavailable");
                    "an unknown Device".to_string()
                }
            };
            let _ = writeln!(out, "Connected to {machine}, OwnerInfo:");
            for line in lines {
                let _ = writeln!(out, "  {line}");
            }
            let _ = writeln!(out);
        }
        Err(code) => {
            let _ = writeln!(err, "OwnerInfo returned error {code}");
        }
    }
}

/// Picks the session's drive. `Auto` takes the first drive in the device
/// mask that describes itself; `None` means no usable drive was found.
pub fn resolve_default_drive<D: RemoteFileService + ?Sized>(
    device: &mut D,
    selection: DriveSelection,
) -> Option<char> {
    match selection {
        DriveSelection::Letter(letter) => Some(letter),
        DriveSelection::Auto => {
            let mask = device
                .list_drives()
                .inspect_err(|code| tracing::warn!(code = code.code(), "drive list failed"))
                .ok()?;
            (0..26u8)
                .filter(|index| mask & (1 << index) != 0)
                .find(|index| matches!(device.drive_info(*index), Ok(Some(_))))
                .and_then(DriveDescriptor::letter_for_index)
        }
    }
}
