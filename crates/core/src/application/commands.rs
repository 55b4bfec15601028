// crates/core/src/application/commands.rs
use psiftp_domain::{AttributeChange, GlobPattern};
use psiftp_shared_kernel::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillTarget {
    All,
    Pid(u16),
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    TogglePrompt,
    ToggleHash,
    Pwd,
    Rename { from: String, to: String },
    Touch(String),
    GetTime(String),
    Test(String),
    GetAttributes(String),
    SetAttributes { change: AttributeChange, name: String },
    DirCount,
    Devices,
    List,
    ChangeLocalDir(Option<String>),
    ChangeDir(Option<String>),
    Get { remote: String, local: Option<String> },
    Put { local: String, remote: Option<String> },
    MultiGet(GlobPattern),
    MultiPut(GlobPattern),
    Remove(String),
    MakeDir(String),
    RemoveDir(String),
    /// `!cmd args`; `None` starts an interactive shell.
    Shell(Option<String>),
    Run { program: String, args: String },
    Processes,
    Kill(Vec<KillTarget>),
    KillSave(String),
    RunRestore(String),
    Quit,
}

impl Command {
    /// Maps tokenized words to a command. Commands without operands ignore
    /// extra words; everything else must match its arity exactly.
    pub fn parse(words: &[String]) -> Result<Self, ValidationError> {
        let Some((name, args)) = words.split_first() else {
            return Err(syntax(""));
        };
        if let Some(rest) = name.strip_prefix('!') {
            return Ok(Self::Shell(shell_line(rest, args)));
        }

        let command = match (name.as_str(), args) {
            ("help", _) => Self::Help,
            ("prompt", _) => Self::TogglePrompt,
            ("hash", _) => Self::ToggleHash,
            ("pwd", _) => Self::Pwd,
            ("dircnt", _) => Self::DirCount,
            ("devs", _) => Self::Devices,
            ("ls" | "dir", _) => Self::List,
            ("ps", _) => Self::Processes,
            ("bye" | "quit", _) => Self::Quit,
            ("ren", [from, to]) => Self::Rename { from: from.clone(), to: to.clone() },
            ("touch", [name]) => Self::Touch(name.clone()),
            ("gtime", [name]) => Self::GetTime(name.clone()),
            ("test", [name]) => Self::Test(name.clone()),
            ("gattr", [name]) => Self::GetAttributes(name.clone()),
            ("sattr", [flags, name]) => {
                Self::SetAttributes { change: AttributeChange::parse(flags), name: name.clone() }
            }
            ("lcd", args) => Self::ChangeLocalDir(args.first().cloned()),
            ("cd", args) => Self::ChangeDir(args.first().cloned()),
            ("get", [remote, rest @ ..]) => {
                Self::Get { remote: remote.clone(), local: rest.first().cloned() }
            }
            ("put", [local, rest @ ..]) => {
                Self::Put { local: local.clone(), remote: rest.first().cloned() }
            }
            ("mget", [pattern]) => Self::MultiGet(GlobPattern::new(pattern.as_str())),
            ("mput", [pattern]) => Self::MultiPut(GlobPattern::new(pattern.as_str())),
            ("del" | "rm", [name]) => Self::Remove(name.clone()),
            ("mkdir", [name]) => Self::MakeDir(name.clone()),
            ("rmdir", [name]) => Self::RemoveDir(name.clone()),
            ("run", [program, rest @ ..]) => Self::Run { program: program.clone(), args: rest.join(" ") },
            ("kill", targets) if !targets.is_empty() => {
                Self::Kill(targets.iter().map(|t| kill_target(t)).collect::<Result<_, _>>()?)
            }
            ("killsave", [file]) => Self::KillSave(file.clone()),
            ("runrestore", [file]) => Self::RunRestore(file.clone()),
            _ => return Err(syntax(name)),
        };
        Ok(command)
    }
}

fn syntax(command: &str) -> ValidationError {
    ValidationError::Syntax { command: command.to_string() }
}

fn shell_line(first: &str, args: &[String]) -> Option<String> {
    let line = std::iter::once(first)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    let line = line.trim();
    (!line.is_empty()).then(|| line.to_string())
}

fn kill_target(word: &str) -> Result<KillTarget, ValidationError> {
    if word == "all" {
        return Ok(KillTarget::All);
    }
    word.parse()
        .map(KillTarget::Pid)
        .map_err(|_| ValidationError::InvalidPid { value: word.to_string() })
}
