//! Character build planner command line.
//!
//! Inspects the planner datasets: resolves builds into base and derived
//! stats, browses the recipe/birthsign/skill catalogs through the same
//! filter/search/sort pipeline the front ends use, and validates data files.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{CatalogCmd, DataSource, Stats, Tags, Validate};
use config::CliConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Character build planner
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Inspect character builds and planner catalogs", long_about = None)]
#[command(version)]
struct Cli {
    /// Dataset directory (defaults to $PLANNER_DATA_DIR, then the bundled data)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve a build into base attributes and derived stats
    Stats(Stats),

    /// List a catalog through tag filters, search and sort
    Catalog(CatalogCmd),

    /// Show the tag values available in a catalog
    Tags(Tags),

    /// Load every dataset and report problems
    Validate(Validate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let env = CliConfig::from_env();
    let source = DataSource::open(cli.data_dir.or_else(|| env.data_dir.clone()), &env)?;

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&source),
        Command::Catalog(cmd) => cmd.execute(&source),
        Command::Tags(cmd) => cmd.execute(&source),
        Command::Validate(cmd) => cmd.execute(&source),
    }
}

/// Logs go to stderr so command output stays pipeable.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
