// RiskCrab - GPL-3.0-or-later
// This file is part of RiskCrab.
//
// Copyright (C) 2025 Daniel Freiermuth
//
// RiskCrab is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// RiskCrab is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with RiskCrab.  If not, see <https://www.gnu.org/licenses/>.

//! Follow a log stream and flag error lines as they arrive.
//!
//! The source can be a regular file that another process appends to, or
//! a pipe. The watcher runs until the stream hits a real read error or
//! the process is terminated.

use anyhow::{Context, Result};
use clap::Parser;
use riskcrab::watch::{notification, StreamWatcher, POLL_INTERVAL};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskcrab-watch")]
#[command(author = "RiskCrab Team")]
#[command(
    about = "Continuously classify lines from a growing log stream",
    long_about = None
)]
struct Args {
    /// Log file (or pipe) to follow
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let source = File::open(&args.file)
        .with_context(|| format!("failed to open log stream {}", args.file.display()))?;
    log::info!(
        "Watching {} (poll interval {POLL_INTERVAL:?})",
        args.file.display()
    );

    let watcher = StreamWatcher::new();
    watcher
        .watch(source, |class, line| println!("{}", notification(class, line)))
        .with_context(|| format!("error reading log stream {}", args.file.display()))?;

    Ok(())
}
