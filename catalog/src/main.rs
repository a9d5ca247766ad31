//! Console CRUD manager for academic programs and courses.
//!
//! Record lists live in two JSON files (see `catalog.toml`); every mutation
//! rewrites the affected file in full. Single-user, single-process.

use std::path::PathBuf;

use anyhow::Result;
use catalog::io::config::load_config;
use catalog::{logging, menu};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Console CRUD manager for academic programs and courses"
)]
struct Cli {
    /// Path to the TOML config file (missing file uses defaults).
    #[arg(long, default_value = "catalog.toml")]
    config: PathBuf,

    /// Override the programs data file from the config.
    #[arg(long)]
    programs_file: Option<PathBuf>,

    /// Override the courses data file from the config.
    #[arg(long)]
    courses_file: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;
    if let Some(path) = cli.programs_file {
        config.programs_file = path;
    }
    if let Some(path) = cli.courses_file {
        config.courses_file = path;
    }
    config.validate()?;
    menu::run(&config)
}
