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

//! The one-shot assessment pipeline.
//!
//! Runs the failure extractor and the keyword scanner in sequence over
//! two finished files and folds both counts into a tier. There is no
//! partial success: the first I/O error aborts the run.

pub mod assess;
pub mod keyword;

pub use assess::{RiskAssessment, RiskLevel, Thresholds};
pub use keyword::KeywordScanner;

use crate::config::RiskConfig;
use crate::parser;
use anyhow::{Context, Result};
use std::path::Path;

/// Assess one log file and one code-change file.
///
/// Both scans must fully succeed before assessment runs.
pub fn assess_run(
    log_path: &Path,
    changes_path: &Path,
    config: &RiskConfig,
) -> Result<RiskAssessment> {
    let failures = parser::scan_log_file(log_path)
        .with_context(|| format!("failed to analyze log file {}", log_path.display()))?;
    log::info!(
        "Found {} failure events in {}",
        failures.len(),
        log_path.display()
    );

    let scanner = KeywordScanner::new(&config.keywords);
    let code_risk = scanner
        .scan_file(changes_path)
        .with_context(|| format!("failed to analyze code changes {}", changes_path.display()))?;
    log::info!(
        "Code risk score {} for {}",
        code_risk,
        changes_path.display()
    );

    Ok(config.thresholds.assess(failures.len(), code_risk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn eleven_failures_and_clean_changes_is_high() {
        let log_lines: String = (0..11)
            .map(|i| format!("[2025-02-20 12:00:{i:02}] ERROR: request {i} failed\n"))
            .collect();
        let log = temp_file(&log_lines);
        let changes = temp_file("fn handler() {}\n");

        let config = RiskConfig::default();
        let assessment = assess_run(log.path(), changes.path(), &config).unwrap();
        assert_eq!(
            assessment.summary(),
            "Risk Level: High (Failures: 11, Code Risk Score: 0)"
        );
    }

    #[test]
    fn few_failures_and_few_keywords_is_low() {
        let log = temp_file(
            "[1] ERROR: one\n\
             [2] ERROR: two\n\
             [3] ERROR: three\n\
             [4] INFO: not counted\n",
        );
        let changes = temp_file(
            "// TODO tighten validation\n\
             // TODO drop the fallback\n\
             // temporary hack for the rollout\n",
        );

        let config = RiskConfig::default();
        let assessment = assess_run(log.path(), changes.path(), &config).unwrap();
        assert_eq!(
            assessment.summary(),
            "Risk Level: Low (Failures: 3, Code Risk Score: 3)"
        );
    }

    #[test]
    fn missing_log_file_aborts_the_run() {
        let changes = temp_file("fine\n");
        let config = RiskConfig::default();
        let result = assess_run(
            Path::new("/no/such/deploy.log"),
            changes.path(),
            &config,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_changes_file_aborts_the_run() {
        let log = temp_file("[1] ERROR: one\n");
        let config = RiskConfig::default();
        let result = assess_run(log.path(), Path::new("/no/such/changes.diff"), &config);
        assert!(result.is_err());
    }
}
