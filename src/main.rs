// RiskCrab - deploy-risk triage from logs and code changes
//
// Copyright (C) 2025 Daniel Freiermuth
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{bail, Result};
use clap::Parser;
use riskcrab::config::RiskConfig;
use riskcrab::risk;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskcrab")]
#[command(author = "RiskCrab Team")]
#[command(version = "0.1.0")]
#[command(
    about = "Classify operational risk from a log file and a code-change file",
    long_about = None
)]
struct Args {
    /// Path to the log file to scan for failure markers
    #[arg(value_name = "LOG_FILE", required_unless_present = "init_config")]
    log_file: Option<PathBuf>,

    /// Path to the code-change file to scan for risk keywords
    #[arg(value_name = "CHANGES_FILE", required_unless_present = "init_config")]
    changes_file: Option<PathBuf>,

    /// Write a config file with the default keywords and thresholds, then exit
    #[arg(long = "init-config")]
    init_config: bool,
}

fn main() -> Result<()> {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!(
        "RiskCrab starting up (version {}, {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let args = Args::parse();

    if args.init_config {
        let config = RiskConfig::default();
        config.save().map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    let (Some(log_file), Some(changes_file)) = (args.log_file, args.changes_file) else {
        bail!("both LOG_FILE and CHANGES_FILE are required");
    };

    let config = RiskConfig::load();

    let assessment = risk::assess_run(&log_file, &changes_file, &config)?;
    println!("{}", assessment.summary());

    Ok(())
}
