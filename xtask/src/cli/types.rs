use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Clean and rebuild every Chromatron firmware project via sapphiremake")]
pub struct Cli {
    /// With no subcommand, runs `all` (clean, then build).
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = crate::config::CONFIG_FILE,
        help = "Project list / target overrides. Ignored if the file does not exist."
    )]
    pub config: PathBuf,

    #[arg(
        long,
        global = true,
        value_name = "NAME",
        help = "Target platform passed to every build (default from config: chromatron)."
    )]
    pub target: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Exit non-zero at the end of the run if any sapphiremake invocation failed. Never stops iteration early."
    )]
    pub strict: bool,

    /// Print a JSON report of every invocation to stdout when done.
    #[arg(long, global = true)]
    pub json: bool,

    /// More output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Clean every project, then build every project.
    All,

    /// Remove firmware.bin/manifest.txt/the firmware zip and run `sapphiremake -c` per project.
    Clean,

    /// Run `sapphiremake -t <target>` per project.
    Build,

    /// Check that sapphiremake is on PATH and the config is usable.
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_all_with_defaults() {
        let cli = Cli::try_parse_from(["xtask"]).unwrap();
        assert_eq!(cli.cmd, None);
        assert_eq!(cli.config, PathBuf::from("sapphire-build.toml"));
        assert_eq!(cli.target, None);
        assert!(!cli.strict);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["xtask", "build", "--target", "xmega", "--strict", "-vv"]).unwrap();
        assert_eq!(cli.cmd, Some(Cmd::Build));
        assert_eq!(cli.target.as_deref(), Some("xmega"));
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["xtask", "package"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
