use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codemend")]
#[command(about = "One-shot regex maintenance scripts for the web app migration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root; configured paths resolve against it
    #[arg(long, global = true, default_value = ".", env = "CODEMEND_ROOT")]
    pub root: PathBuf,

    /// Configuration file (defaults to the nearest .codemend.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Await `params` in route handlers and server pages
    ParamsPromise,

    /// Backfill every getUserStats mock with the full stats field list
    FixStatsMock,

    /// Merge translation additions into the message catalogs
    MergeLocales,

    /// Normalize scene `category:` values to plain strings
    CleanScenes,

    /// Replace generated component functions with fragments from disk
    Splice,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands_need_no_flags() {
        let cli = Cli::try_parse_from(["codemend", "params-promise"]).unwrap();
        assert!(matches!(cli.command, Commands::ParamsPromise));
        assert!(!cli.dry_run);
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["codemend", "splice", "--dry-run", "-vv", "--root", "web"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Splice));
        assert!(cli.dry_run);
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.root, PathBuf::from("web"));
    }
}
