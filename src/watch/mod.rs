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

//! Continuous classification of a growing log stream.
//!
//! Follows an open source and labels each line the moment it arrives.
//! End-of-data is not closure for a growing file, so the watcher sleeps
//! a fixed interval and retries; only a real read error stops it.

use std::io::{self, BufRead, BufReader, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How long the watcher sleeps when the source has no new data.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Classification of a single log line. No cross-line state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Error,
    Informational,
}

impl LineClass {
    /// `Error` iff the line contains the literal substring `ERROR`.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if line.contains("ERROR") {
            Self::Error
        } else {
            Self::Informational
        }
    }
}

/// Format the notification printed for one classified line.
#[must_use]
pub fn notification(class: LineClass, line: &str) -> String {
    match class {
        LineClass::Error => format!("Error detected: {line}"),
        LineClass::Informational => format!("Log: {line}"),
    }
}

/// Watches a potentially unbounded stream and classifies each line.
///
/// The loop has no internal stop condition: it runs until the source
/// hits a real read error or the cancellation flag is raised. The flag
/// is checked at every idle interval.
pub struct StreamWatcher {
    poll_interval: Duration,
    cancel: Arc<AtomicBool>,
}

impl StreamWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the loop at the next idle interval.
    #[must_use]
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Read lines as they arrive and hand each to `notify`, in order.
    ///
    /// The watcher owns the source exclusively for its whole lifetime.
    /// A line the writer has not finished yet stays buffered until its
    /// newline arrives; on cancellation a pending fragment is delivered
    /// as-is.
    pub fn watch<R, F>(&self, source: R, mut notify: F) -> io::Result<()>
    where
        R: Read,
        F: FnMut(LineClass, &str),
    {
        let mut reader = BufReader::new(source);
        let mut pending = String::new();

        loop {
            match reader.read_line(&mut pending) {
                // No new data. For a growing file this is not closure,
                // so wait and retry unless the caller cancelled.
                Ok(0) => {
                    if self.cancel.load(Ordering::Relaxed) {
                        if !pending.is_empty() {
                            notify(LineClass::classify(&pending), &pending);
                        }
                        log::debug!("Stream watcher cancelled");
                        return Ok(());
                    }
                    thread::sleep(self.poll_interval);
                }
                Ok(_) => {
                    if pending.ends_with('\n') {
                        let line = pending.trim_end_matches(['\r', '\n']);
                        notify(LineClass::classify(line), line);
                        pending.clear();
                    }
                    // No trailing newline yet: the writer is mid-line,
                    // keep accumulating.
                }
                Err(e) => {
                    log::error!("Error reading log stream: {e}");
                    return Err(e);
                }
            }
        }
    }
}

impl Default for StreamWatcher {
    fn default() -> Self {
        Self::new()
    }
}
