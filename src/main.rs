//! TACLS config generator
//!
//! Computes life-support supply amounts for a KSP part and emits the
//! matching ModuleManager patch for TAC Life Support.

mod builder;
mod error;
mod patch;
mod resources;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::error::UsageError;
use crate::patch::PatchConfig;
use crate::resources::{KERBIN_DAY_LENGTH, Resource};

#[derive(Parser)]
#[command(name = "tacls-cfg-gen", version)]
#[command(about = "TACLS config generator")]
struct Cli {
    /// Name of part to patch
    #[arg(short, value_name = "PART")]
    part: String,

    /// Number of Kerbals to support
    #[arg(short, value_name = "CREW")]
    crew: i64,

    /// Number of days (6 hours by default) to supply
    #[arg(short, value_name = "DAYS")]
    days: f64,

    /// Generate configs only for the specified resources; cannot use with -o
    #[arg(long, value_name = "RESOURCE", num_args = 1.., value_enum)]
    partial: Option<Vec<Resource>>,

    /// Length of a day, in hours
    #[arg(long, value_name = "HOURS", default_value_t = KERBIN_DAY_LENGTH)]
    day_length: f64,

    /// Add a ModuleManager :FOR[] flag
    #[arg(long = "for", value_name = "MOD")]
    for_mod: Option<String>,

    /// Output config to file in create-or-append mode, print to stdout if omitted
    #[arg(short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Rejected up front so the output file is never opened for a partial
    // config set.
    if cli.output.is_some() && cli.partial.is_some() {
        eprintln!("{}: error: {}", program_name(), UsageError::PartialToFile);
        process::exit(2);
    }

    if let Err(err) = run(&cli) {
        eprintln!("{}: error: {err:#}", program_name());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // --partial restricts membership; emission always follows table order
    let resources: Vec<Resource> = match &cli.partial {
        Some(requested) => Resource::ALL
            .into_iter()
            .filter(|r| requested.contains(r))
            .collect(),
        None => Resource::ALL.to_vec(),
    };

    let config = PatchConfig {
        part: &cli.part,
        crew: cli.crew,
        days: cli.days,
        day_length: cli.day_length,
        for_mod: cli.for_mod.as_deref(),
        resources: &resources,
    };
    let text = patch::render_patch(&config);

    match &cli.output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            file.write_all(text.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{text}"),
    }

    Ok(())
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
