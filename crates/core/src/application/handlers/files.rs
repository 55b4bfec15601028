// crates/core/src/application/handlers/files.rs
use chrono::DateTime;
use psiftp_domain::AttributeChange;
use psiftp_shared_kernel::{DeviceTime, DriveDescriptor, Result};

use crate::{
    application::CommandDispatcher,
    presentation::{DRIVES_HEADER, attribute_line, drive_row, entry_line},
};

/// Highest drive index in the `devlist` mask.
const DRIVE_COUNT: u8 = 26;

impl CommandDispatcher<'_> {
    pub(crate) fn list(&mut self) -> Result<()> {
        let dir = self.state.remote_dir.as_str().to_string();
        let entries = self.device.list_directory(&dir).map_err(|code| self.protocol(code))?;
        for entry in entries {
            let line = entry_line(entry.attributes, entry.size, entry.modified, &entry.name, &self.date_format);
            self.say(&line);
        }
        Ok(())
    }

    pub(crate) fn dir_count(&mut self) -> Result<()> {
        let dir = self.state.remote_dir.as_str().to_string();
        let count = self.device.count_entries(&dir).map_err(|code| self.protocol(code))?;
        self.say(&format!("{count} Entries"));
        Ok(())
    }

    /// Drives that are present but fail to describe themselves are skipped.
    pub(crate) fn devices(&mut self) -> Result<()> {
        let mask = self.device.list_drives().map_err(|code| self.protocol(code))?;
        self.say(DRIVES_HEADER);
        for index in 0..DRIVE_COUNT {
            if mask & (1 << index) == 0 {
                continue;
            }
            match self.device.drive_info(index) {
                Ok(Some(drive)) => self.say(&drive_row(&drive)),
                Ok(None) => {}
                Err(code) => {
                    let letter = DriveDescriptor::letter_for_index(index).unwrap_or('?');
                    tracing::debug!(%letter, code = code.code(), "drive info failed");
                }
            }
        }
        Ok(())
    }

    pub(crate) fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let from = self.state.remote_file(from);
        let to = self.state.remote_file(to);
        self.device.rename(&from, &to).map_err(|code| self.protocol(code))
    }

    pub(crate) fn touch(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        let now = self.clock.now();
        let secs = i64::try_from(now.secs).unwrap_or(i64::MAX);
        let stamp = DateTime::from_timestamp(secs, now.centis * 10_000_000)
            .map(DeviceTime::from)
            .unwrap_or_default();
        self.device.set_modification_time(&path, stamp).map_err(|code| self.protocol(code))
    }

    pub(crate) fn get_time(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        let modified = self.device.get_modification_time(&path).map_err(|code| self.protocol(code))?;
        let text = modified.format(&self.date_format);
        self.say(&text);
        Ok(())
    }

    /// Prints one listing-style line for a single path, using the name as
    /// typed.
    pub(crate) fn test(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        let stat = self.device.stat(&path).map_err(|code| self.protocol(code))?;
        let line = entry_line(stat.attributes, stat.size, stat.modified, name, &self.date_format);
        self.say(&line);
        Ok(())
    }

    pub(crate) fn get_attributes(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        let attributes = self.device.get_attributes(&path).map_err(|code| self.protocol(code))?;
        self.say(&attribute_line(attributes));
        Ok(())
    }

    pub(crate) fn set_attributes(&mut self, change: AttributeChange, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        self.device.set_attributes(&path, change.set, change.clear).map_err(|code| self.protocol(code))
    }

    pub(crate) fn remove(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        self.device.remove(&path).map_err(|code| self.protocol(code))
    }

    pub(crate) fn make_dir(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        self.device.mkdir(&path).map_err(|code| self.protocol(code))
    }

    pub(crate) fn remove_dir(&mut self, name: &str) -> Result<()> {
        let path = self.state.remote_file(name);
        self.device.rmdir(&path).map_err(|code| self.protocol(code))
    }
}
