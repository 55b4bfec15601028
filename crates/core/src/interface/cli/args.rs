// crates/core/src/interface/cli/args.rs
use clap::{Parser, ValueHint};

use crate::config::{DriveSelection, MountSpec};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "psiftp",
    version = crate::VERSION,
    about = "Interactive file transfer session with a handheld device",
    long_about = "Interactive file transfer session with a handheld device.\n\n\
        Each --mount serves a host directory as one device drive. Words after \
        the options are run as a single command and the exit status reflects \
        its result; without them an interactive session starts."
)]
pub struct Args {
    /// Host directory served as a drive, e.g. C=/srv/psion (repeatable)
    #[arg(long = "mount", value_name = "DRIVE=DIR", value_hint = ValueHint::DirPath)]
    pub mounts: Vec<MountSpec>,

    /// Starting drive letter, or AUTO for the first present drive
    #[arg(long, value_name = "AUTO|LETTER", default_value = "AUTO")]
    pub drive: DriveSelection,

    /// Directory below the drive root that `cd` returns to
    #[arg(long, default_value = "\\")]
    pub base_dir: String,

    /// strftime pattern for listing dates
    #[arg(long, default_value = "%c")]
    pub date_format: String,

    /// Do not ask before each file of mget/mput
    #[arg(long)]
    pub no_prompt: bool,

    /// Print `#` for every transferred chunk
    #[arg(long)]
    pub hash: bool,

    /// Run this single command instead of an interactive session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}
