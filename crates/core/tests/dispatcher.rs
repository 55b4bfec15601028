// crates/core/tests/dispatcher.rs
use std::{collections::VecDeque, fs, path::Path, path::PathBuf};

use chrono::{DateTime, Local};
use psiftp_core::{
    application::{CommandDispatcher, Flow, SessionPorts, greet, resolve_default_drive},
    config::DriveSelection,
    presentation::DRIVES_HEADER,
};
use psiftp_domain::{LocalDir, RemotePath, RemoteSessionState};
use psiftp_infra::{MirrorDevice, StdLocalFileSystem};
use psiftp_ports::{Clock, LineSource, LocalShell, WallTime};
use psiftp_shared_kernel::{CancelToken, MachineType, Result};
use tempfile::{TempDir, tempdir};

const NOW_SECS: u64 = 1_700_000_000;

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        WallTime::new(NOW_SECS, 0)
    }
}

#[derive(Default)]
struct Script(VecDeque<String>);

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|l| (*l).to_string()).collect())
    }
}

impl LineSource for Script {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.0.pop_front()
    }
}

#[derive(Default)]
struct RecordingShell(Vec<(Option<String>, PathBuf)>);

impl LocalShell for RecordingShell {
    fn run(&mut self, command: Option<&str>, cwd: &Path) -> Result<()> {
        self.0.push((command.map(str::to_string), cwd.to_path_buf()));
        Ok(())
    }
}

/// A device drive and a local directory backed by temp directories.
struct Fixture {
    drive: TempDir,
    local: TempDir,
    device: MirrorDevice,
    shell: RecordingShell,
    out: Vec<u8>,
    err: Vec<u8>,
}

impl Fixture {
    fn new() -> Self {
        let drive = tempdir().unwrap();
        let local = tempdir().unwrap();
        let device = MirrorDevice::new([('C', drive.path().to_path_buf())]);
        Self { drive, local, device, shell: RecordingShell::default(), out: Vec::new(), err: Vec::new() }
    }

    fn state(&self, prompt: bool) -> RemoteSessionState {
        let mut state = RemoteSessionState::new(
            RemotePath::root('C').unwrap(),
            LocalDir::from_path(self.local.path()),
            CancelToken::new(),
        );
        state.prompt = prompt;
        state
    }

    /// Runs `lines` as an interactive session, answering prompts from
    /// the same script.
    fn session(&mut self, lines: &[&str], prompt: bool) -> RemoteSessionState {
        let state = self.state(prompt);
        let mut input = Script::new(lines);
        let local_fs = StdLocalFileSystem;
        let ports = SessionPorts {
            device: &mut self.device,
            local_fs: &local_fs,
            shell: &mut self.shell,
            input: &mut input,
            clock: &FixedClock,
            out: &mut self.out,
            err: &mut self.err,
        };
        let mut dispatcher = CommandDispatcher::new(ports, state, "%Y-%m-%d");
        dispatcher.run_interactive();
        dispatcher.state().clone()
    }

    fn once(&mut self, words: &[&str]) -> u8 {
        let state = self.state(true);
        let mut input = Script::default();
        let local_fs = StdLocalFileSystem;
        let ports = SessionPorts {
            device: &mut self.device,
            local_fs: &local_fs,
            shell: &mut self.shell,
            input: &mut input,
            clock: &FixedClock,
            out: &mut self.out,
            err: &mut self.err,
        };
        let words: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        CommandDispatcher::new(ports, state, "%c").run_once(&words)
    }

    fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

#[test]
fn cd_success_and_failure() {
    let mut fx = Fixture::new();
    fs::create_dir(fx.drive.path().join("Documents")).unwrap();

    let state = fx.session(&["cd Documents", "cd missing", "pwd"], true);

    assert_eq!(state.remote_dir.as_str(), "C:\\Documents\\");
    assert!(fx.stderr().contains("Error: file does not exist\nKeeping original directory \"C:\\Documents\\\""));
    assert!(fx.stdout().contains("Remote dir: \"C:\\Documents\\\""));
    assert!(fx.stdout().ends_with("bye\n"));
}

#[test]
fn cd_without_operand_returns_to_default() {
    let mut fx = Fixture::new();
    fs::create_dir(fx.drive.path().join("Documents")).unwrap();

    let state = fx.session(&["cd Documents", "cd"], true);

    assert_eq!(state.remote_dir.as_str(), "C:\\");
}

#[test]
fn lcd_checks_for_a_directory() {
    let mut fx = Fixture::new();
    fs::create_dir(fx.local.path().join("backup")).unwrap();

    let state = fx.session(&["lcd nope", "lcd backup"], true);

    assert!(state.local_dir.as_str().ends_with("backup/"));
    assert!(fx.stderr().contains("Keeping original directory"));
}

#[test]
fn listing_and_entry_count() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("a.txt"), "12345").unwrap();
    fs::create_dir(fx.drive.path().join("Sub")).unwrap();

    fx.session(&["ls", "dircnt"], true);

    let out = fx.stdout();
    assert!(out.contains("-w--a----          5 "));
    assert!(out.contains(" a.txt\n"));
    assert!(out.contains("dw------- "));
    assert!(out.contains("2 Entries"));
}

#[test]
fn attributes_round_trip() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("a.txt"), "x").unwrap();

    fx.session(&["sattr +rh-a a.txt", "gattr a.txt", "del a.txt"], true);

    assert!(fx.stdout().contains("0003 (--h------)"));
    assert!(fx.stderr().contains("Error: access denied"));
    assert!(fx.drive.path().join("a.txt").exists());
}

#[test]
fn devs_lists_mounted_drives() {
    let mut fx = Fixture::new();

    fx.session(&["devs"], true);

    let out = fx.stdout();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(DRIVES_HEADER));
    let row = lines.next().unwrap();
    assert!(row.starts_with("C     Disk       "));
    assert!(row.ends_with("local,redirected; variable size"));
    assert_eq!(lines.next(), Some("bye"));
}

#[test]
fn ren_moves_the_file() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("old.txt"), "x").unwrap();

    fx.session(&["ren old.txt new.txt", "ren missing.txt other.txt"], true);

    assert!(!fx.drive.path().join("old.txt").exists());
    assert_eq!(fs::read_to_string(fx.drive.path().join("new.txt")).unwrap(), "x");
    assert!(fx.stderr().contains("Error: file does not exist"));
}

#[test]
fn touch_then_gtime_prints_clock_date() {
    let mut fx = Fixture::new();
    let path = fx.drive.path().join("a.txt");
    fs::write(&path, "x").unwrap();

    fx.session(&["touch a.txt", "gtime a.txt"], true);

    let stamp = DateTime::from_timestamp(NOW_SECS as i64, 0).unwrap();
    let expected = stamp.with_timezone(&Local).format("%Y-%m-%d").to_string();
    assert!(fx.stdout().starts_with(&format!("{expected}\n")));
    let modified = fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(DateTime::<chrono::Utc>::from(modified), stamp);
}

#[test]
fn test_prints_one_listing_line() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("a.txt"), "12345").unwrap();

    fx.session(&["test a.txt", "test missing.txt"], true);

    let line = fx.stdout().lines().next().unwrap().to_string();
    assert!(line.starts_with("-w--a----          5 "));
    assert!(line.ends_with(" a.txt"));
    assert!(fx.stderr().contains("Error: file does not exist"));
}

#[test]
fn mkdir_and_rmdir_round_trip() {
    let mut fx = Fixture::new();

    fx.session(&["mkdir New", "test New"], true);
    assert!(fx.drive.path().join("New").is_dir());
    assert!(fx.stdout().starts_with("dw-------          0 "));

    fx.session(&["rmdir New", "rmdir New"], true);
    assert!(!fx.drive.path().join("New").exists());
    assert!(fx.stderr().contains("Error: file does not exist"));
}

#[test]
fn greeting_shows_machine_and_owner() {
    let drive = tempdir().unwrap();
    let mut device = MirrorDevice::new([('D', drive.path().to_path_buf())])
        .with_owner_info(vec!["Jo Bloggs".to_string(), "London".to_string()])
        .with_machine_type(MachineType::Series3);
    let mut out = Vec::new();
    let mut err = Vec::new();

    greet(&mut device, &mut out, &mut err);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Connected to a Series 3, OwnerInfo:\n  Jo Bloggs\n  London\n\n"
    );
    assert!(err.is_empty());
    assert_eq!(resolve_default_drive(&mut device, DriveSelection::Auto), Some('D'));
}

#[test]
fn get_and_put_print_statistics() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("remote.txt"), "hello").unwrap();
    fs::write(fx.local.path().join("local.txt"), "local data").unwrap();

    fx.session(&["get remote.txt copy.txt", "put local.txt"], true);

    assert_eq!(fs::read_to_string(fx.local.path().join("copy.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(fx.drive.path().join("local.txt")).unwrap(), "local data");
    let out = fx.stdout();
    assert!(out.contains("Transfer complete, (5 bytes in 0.00 secs = 500 cps)"));
    assert!(out.contains("Transfer complete, (10 bytes in 0.00 secs = 1000 cps)"));
}

#[test]
fn hash_mode_marks_chunks() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("big.bin"), vec![0u8; 5000]).unwrap();

    fx.session(&["hash", "get big.bin"], true);

    let out = fx.stdout();
    assert!(out.contains("Hash printing now on"));
    assert!(out.contains("###\nTransfer complete"));
}

#[test]
fn mget_without_prompting_copies_matches() {
    let mut fx = Fixture::new();
    for name in ["a.txt", "b.txt", "c.doc"] {
        fs::write(fx.drive.path().join(name), name).unwrap();
    }

    fx.session(&["mget *.txt"], false);

    assert!(fx.local.path().join("a.txt").exists());
    assert!(fx.local.path().join("b.txt").exists());
    assert!(!fx.local.path().join("c.doc").exists());
    assert!(fx.stdout().contains("Get \"a.txt\" (y,n): y "));
}

#[test]
fn mput_asks_for_each_file() {
    let mut fx = Fixture::new();
    for name in ["one.txt", "two.txt"] {
        fs::write(fx.local.path().join(name), name).unwrap();
    }

    fx.session(&["mput *.txt", "n", "y"], true);

    assert!(!fx.drive.path().join("one.txt").exists());
    assert!(fx.drive.path().join("two.txt").exists());
}

#[test]
fn processes_run_and_kill() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("Word.app"), "").unwrap();

    fx.session(&["run Word.app C:\\Letter", "ps", "kill 256", "ps", "kill 999"], true);

    let out = fx.stdout();
    assert!(out.contains("  256 Word         C:\\Letter"));
    assert_eq!(out.matches("  256 Word").count(), 1);
    assert!(fx.stderr().contains("no such process"));
}

#[test]
fn killsave_then_runrestore() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("Word.app"), "").unwrap();

    fx.session(&["run Word.app doc", "killsave procs.txt", "ps"], true);
    let saved = fs::read_to_string(fx.local.path().join("procs.txt")).unwrap();
    assert_eq!(saved, "C:\\Word.app doc\n");
    assert!(!fx.stdout().contains("Word         doc"));

    fx.out.clear();
    fx.session(&["runrestore procs.txt", "ps"], true);
    assert!(fx.stdout().contains("Word         doc"));
}

#[test]
fn shell_runs_in_local_directory() {
    let mut fx = Fixture::new();

    fx.session(&["!ls -l", "!"], true);

    assert_eq!(fx.shell.0.len(), 2);
    assert_eq!(fx.shell.0[0].0.as_deref(), Some("ls -l"));
    assert_eq!(fx.shell.0[1].0, None);
    assert!(fx.stdout().contains("Starting subshell ..."));
}

#[test]
fn syntax_errors_keep_the_session_going() {
    let mut fx = Fixture::new();

    fx.session(&["frobnicate", "get \"oops", "prompt"], true);

    assert!(fx.stderr().contains("syntax error. Try \"help\""));
    assert!(fx.stdout().contains("Prompting now off"));
}

#[test]
fn quit_stops_before_remaining_lines() {
    let mut fx = Fixture::new();

    fx.session(&["quit", "pwd"], true);

    assert!(!fx.stdout().contains("Local dir"));
    assert!(!fx.stdout().contains("bye"));
}

#[test]
fn one_shot_exit_status() {
    let mut fx = Fixture::new();
    fs::write(fx.drive.path().join("a.txt"), "x").unwrap();

    assert_eq!(fx.once(&["test", "a.txt"]), 0);
    assert_eq!(fx.once(&["get", "missing.txt"]), 33);
    assert_eq!(fx.once(&["bogus"]), 1);
}

#[test]
fn execute_line_reports_quit() {
    let mut fx = Fixture::new();
    let state = fx.state(true);
    let mut input = Script::default();
    let local_fs = StdLocalFileSystem;
    let ports = SessionPorts {
        device: &mut fx.device,
        local_fs: &local_fs,
        shell: &mut fx.shell,
        input: &mut input,
        clock: &FixedClock,
        out: &mut fx.out,
        err: &mut fx.err,
    };
    let mut dispatcher = CommandDispatcher::new(ports, state, "%c");

    assert_eq!(dispatcher.execute_line("   ").unwrap(), Flow::Continue);
    assert_eq!(dispatcher.execute_line("bye").unwrap(), Flow::Quit);
}
