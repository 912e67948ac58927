//! medsched - schedule a medical appointment from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use medsched::StartupOptions;
use medsched_app::config::{default_config_dir, init_config_dir};
use medsched_core::prelude::*;

/// medsched - schedule a medical appointment from the terminal
#[derive(Parser, Debug)]
#[command(name = "medsched")]
#[command(about = "A terminal form for scheduling medical appointments", long_about = None)]
struct Args {
    /// Directory holding config.toml and doctors.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Doctor roster (TOML); defaults to <config-dir>/doctors.toml
    #[arg(long, value_name = "FILE")]
    doctors: Option<PathBuf>,

    /// Pre-fill the form from a JSON appointment
    #[arg(long, value_name = "FILE")]
    edit: Option<PathBuf>,

    /// Append scheduled appointments to this file as JSON lines
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Run in headless mode (JSON commands on stdin, JSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a default config.toml and a sample doctors.toml, then exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);

    if args.init {
        init_config_dir(&config_dir)?;
        eprintln!("Wrote default configuration to {}", config_dir.display());
        return Ok(());
    }

    let options = StartupOptions {
        config_dir,
        doctors: args.doctors,
        edit: args.edit,
        output: args.output,
    };

    let result = if args.headless {
        medsched::run_headless(&options).await
    } else {
        medsched::run(&options).await
    };

    if result.is_err() {
        eprintln!(
            "See the log for details: {}",
            medsched_core::logging::get_current_log_file().display()
        );
    }
    result
}
