// crates/domain/src/session.rs
use psiftp_shared_kernel::CancelToken;

use crate::{local_path::LocalDir, remote_path::RemotePath};

/// Mutable state of one interactive session, handed to every command
/// handler.
#[derive(Debug, Clone)]
pub struct RemoteSessionState {
    pub remote_dir: RemotePath,
    /// Target of a bare `cd`.
    pub default_remote_dir: RemotePath,
    pub local_dir: LocalDir,
    /// Target of a bare `lcd`.
    pub default_local_dir: LocalDir,
    pub prompt: bool,
    pub hash: bool,
    pub cancel: CancelToken,
}

impl RemoteSessionState {
    pub fn new(default_remote_dir: RemotePath, default_local_dir: LocalDir, cancel: CancelToken) -> Self {
        Self {
            remote_dir: default_remote_dir.clone(),
            default_remote_dir,
            local_dir: default_local_dir.clone(),
            default_local_dir,
            prompt: true,
            hash: false,
            cancel,
        }
    }

    /// Flips prompting and returns the new value.
    pub fn toggle_prompt(&mut self) -> bool {
        self.prompt = !self.prompt;
        self.prompt
    }

    /// Flips hash progress markers and returns the new value.
    pub fn toggle_hash(&mut self) -> bool {
        self.hash = !self.hash;
        self.hash
    }

    pub fn remote_file(&self, name: &str) -> String {
        self.remote_dir.file(name)
    }

    pub fn local_file(&self, name: &str) -> std::path::PathBuf {
        self.local_dir.file(name)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn state() -> RemoteSessionState {
        RemoteSessionState::new(
            RemotePath::root('C').unwrap(),
            LocalDir::from_path(Path::new("/tmp")),
            CancelToken::new(),
        )
    }

    #[test]
    fn starts_in_default_directories() {
        let state = state();
        assert_eq!(state.remote_dir.as_str(), "C:\\");
        assert_eq!(state.local_dir.as_str(), "/tmp/");
        assert!(state.prompt);
        assert!(!state.hash);
    }

    #[test]
    fn toggles_report_new_value() {
        let mut state = state();
        assert!(!state.toggle_prompt());
        assert!(state.toggle_prompt());
        assert!(state.toggle_hash());
    }

    #[test]
    fn operands_join_current_directories() {
        let state = state();
        assert_eq!(state.remote_file("a.txt"), "C:\\a.txt");
        assert_eq!(state.local_file("a.txt"), Path::new("/tmp/a.txt"));
    }
}
