use anyhow::Result;
use clap::Parser;
use codemend::cli::{Cli, Commands};
use codemend::commands::{self, RunContext};
use codemend::config;
use colored::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        return commands::init_config(&cli.root, force);
    }

    let config = config::load_config(cli.config.as_deref(), &cli.root)?;
    let ctx = RunContext::new(cli.root.clone()).with_dry_run(cli.dry_run);

    let summary = match cli.command {
        Commands::ParamsPromise => commands::migrate_params(&ctx, &config.params_promise)?,
        Commands::FixStatsMock => commands::fix_stats_mocks(&ctx, &config.stats_mock)?,
        Commands::MergeLocales => commands::merge_locales(&ctx, &config.locales.merges)?,
        Commands::CleanScenes => commands::clean_scenes(&ctx, &config.scenes)?,
        Commands::Splice => commands::splice_components(&ctx, &config.splice.jobs)?,
        Commands::Init { .. } => unreachable!("handled before config load"),
    };

    println!("{}", summary.to_string().bold());
    Ok(())
}

// -v raises the default level; RUST_LOG still wins when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
