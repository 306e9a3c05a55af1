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

use crate::risk::assess::Thresholds;
use crate::risk::keyword::RISK_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration stored in the config directory.
///
/// Only the keyword vocabulary and the tier thresholds are tunable; the
/// failure pattern is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Keywords counted by the code-change scan
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Tier boundaries for the assessment
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_keywords() -> Vec<String> {
    RISK_KEYWORDS.map(String::from).to_vec()
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            thresholds: Thresholds::default(),
        }
    }
}

impl RiskConfig {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("riskcrab").join("config.json"))
    }

    /// Load config from disk, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                log::info!("Loading config from {path:?}");
                if let Ok(contents) = std::fs::read_to_string(&path) {
                    if let Ok(config) = serde_json::from_str::<Self>(&contents) {
                        log::info!(
                            "Loaded {} keywords and custom thresholds",
                            config.keywords.len()
                        );
                        return config;
                    }
                }
            } else {
                log::info!("No config file found, using defaults");
            }
        }

        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        // Serialize to JSON
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {e}"))?;

        // Write to file
        std::fs::write(&path, json).map_err(|e| format!("Failed to write config file: {e}"))?;

        log::info!("Saved config to {path:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_constants() {
        let config = RiskConfig::default();
        assert_eq!(config.keywords, ["TODO", "FIXME", "hack", "unsafe"]);
        assert_eq!(config.thresholds.high_failures, 10);
        assert_eq!(config.thresholds.high_score, 20);
        assert_eq!(config.thresholds.medium_failures, 5);
        assert_eq!(config.thresholds.medium_score, 10);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: RiskConfig = serde_json::from_str(r#"{"keywords": ["XXX"]}"#).unwrap();
        assert_eq!(config.keywords, ["XXX"]);
        assert_eq!(config.thresholds.high_failures, 10);

        let config: RiskConfig =
            serde_json::from_str(r#"{"thresholds": {"high_failures": 3}}"#).unwrap();
        assert_eq!(config.keywords.len(), 4);
        assert_eq!(config.thresholds.high_failures, 3);
        assert_eq!(config.thresholds.high_score, 20);
    }

    #[test]
    fn round_trips_through_json() {
        let config = RiskConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: RiskConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keywords, config.keywords);
        assert_eq!(back.thresholds.medium_score, config.thresholds.medium_score);
    }
}
