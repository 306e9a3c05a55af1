use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier assigned to one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier boundaries. All comparisons are strict.
///
/// Either count alone can push the level up; the two inputs are never
/// weighted against each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// More than this many failures is High risk
    pub high_failures: usize,
    /// A code risk score above this is High risk
    pub high_score: u32,
    /// More than this many failures is at least Medium risk
    pub medium_failures: usize,
    /// A code risk score above this is at least Medium risk
    pub medium_score: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_failures: 10,
            high_score: 20,
            medium_failures: 5,
            medium_score: 10,
        }
    }
}

impl Thresholds {
    /// Fold the two counts into a tier, first match from the top wins.
    #[must_use]
    pub const fn assess(&self, failure_count: usize, code_risk_score: u32) -> RiskAssessment {
        let level = if failure_count > self.high_failures || code_risk_score > self.high_score {
            RiskLevel::High
        } else if failure_count > self.medium_failures || code_risk_score > self.medium_score {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        RiskAssessment {
            level,
            failure_count,
            code_risk_score,
        }
    }
}

/// Verdict for one assessment run.
///
/// Recomputed fresh from its two inputs on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub failure_count: usize,
    pub code_risk_score: u32,
}

impl RiskAssessment {
    /// One-line summary for the CLI.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Risk Level: {} (Failures: {}, Code Risk Score: {})",
            self.level, self.failure_count, self.code_risk_score
        )
    }
}
