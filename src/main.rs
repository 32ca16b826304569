use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use trikit::{init_logging, render, Config, Job, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "trikit")]
#[command(about = "Apply frame operations to a path and print the placed result", long_about = None)]
#[command(version)]
struct Cli {
    /// Placement job (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    job: PathBuf,

    /// Settings file (JSON or TOML); defaults to the user config directory
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print end points only
    #[arg(long)]
    plain_points: bool,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load settings")?;
    if cli.plain_points {
        config.output.plain_points = true;
    }
    if cli.compact {
        config.output.pretty = false;
    }

    init_logging(&config.logging)?;
    info!(version = VERSION, build_date = BUILD_DATE, "trikit starting");

    let job = Job::load(&cli.job)?;
    let result = job.run(&config)?;
    println!("{}", render(&result, &config.output)?);

    Ok(())
}
