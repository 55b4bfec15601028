// crates/core/src/interface/cli/mod.rs
mod args;

use clap::Parser;

pub use args::Args;

use crate::config::{ConfigError, SessionConfig};

/// Parse CLI arguments and materialise a [`SessionConfig`].
pub fn load_config() -> anyhow::Result<SessionConfig> {
    let args = Args::parse();
    Ok(build_config(args)?)
}

/// Convert parsed CLI arguments into session settings.
pub fn build_config(args: Args) -> Result<SessionConfig, ConfigError> {
    let Args { mounts, drive, base_dir, date_format, no_prompt, hash, command } = args;
    Ok(SessionConfig {
        default_drive: drive,
        base_dir: SessionConfig::validate_base_dir(&base_dir)?,
        date_format,
        prompt: !no_prompt,
        hash,
        mounts,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DriveSelection, MountSpec};

    fn parse(argv: &[&str]) -> SessionConfig {
        let args = Args::try_parse_from(std::iter::once("psiftp").chain(argv.iter().copied())).unwrap();
        build_config(args).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config, SessionConfig::default());
        assert!(!config.is_one_shot());
    }

    #[test]
    fn flags_and_trailing_command() {
        let config = parse(&[
            "--mount", "C=/a", "--mount", "d=/b", "--drive", "d", "--no-prompt", "--hash", "get", "x.txt",
        ]);
        assert_eq!(
            config.mounts,
            vec![
                MountSpec { letter: 'C', dir: "/a".into() },
                MountSpec { letter: 'D', dir: "/b".into() }
            ]
        );
        assert_eq!(config.default_drive, DriveSelection::Letter('D'));
        assert!(!config.prompt);
        assert!(config.hash);
        assert_eq!(config.command, ["get", "x.txt"]);
    }

    #[test]
    fn hyphenated_words_stay_in_the_command() {
        let config = parse(&["sattr", "-r", "a.txt"]);
        assert_eq!(config.command, ["sattr", "-r", "a.txt"]);
    }

    #[test]
    fn relative_base_dir_is_rejected() {
        let args = Args::try_parse_from(["psiftp", "--base-dir", "Documents"]).unwrap();
        assert!(build_config(args).is_err());
    }
}
