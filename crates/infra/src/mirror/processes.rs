// crates/infra/src/mirror/processes.rs
use psiftp_shared_kernel::ProcessInfo;

const FIRST_PID: u16 = 0x100;

#[derive(Debug, Clone)]
struct Running {
    info: ProcessInfo,
    program: String,
}

/// Programs started on the mirror device. Nothing is actually executed.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    running: Vec<Running>,
    next_pid: u16,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self { running: Vec::new(), next_pid: FIRST_PID }
    }
}

impl ProcessTable {
    /// Registers `program` and returns its pid. The process name is the
    /// program's file stem.
    pub fn start(&mut self, program: &str, args: &str) -> u16 {
        let file = program.rsplit(['\\', '/']).next().unwrap_or(program);
        let name = file.split_once('.').map_or(file, |(stem, _)| stem);
        let pid = self.next_pid;
        self.next_pid = self.next_pid.wrapping_add(1).max(FIRST_PID);
        self.running.push(Running {
            info: ProcessInfo { pid, name: name.to_string(), args: args.to_string() },
            program: program.to_string(),
        });
        pid
    }

    pub fn list(&self) -> Vec<ProcessInfo> {
        self.running.iter().map(|r| r.info.clone()).collect()
    }

    /// Removes the process addressed by `handle`; `false` when unknown.
    pub fn stop(&mut self, handle: &str) -> bool {
        let before = self.running.len();
        self.running.retain(|r| r.info.handle() != handle);
        self.running.len() != before
    }

    pub fn program(&self, handle: &str) -> Option<&str> {
        self.running.iter().find(|r| r.info.handle() == handle).map(|r| r.program.as_str())
    }
}
