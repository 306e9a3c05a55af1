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

//! Deploy-risk triage over a log file and a set of code changes.
//!
//! Two scans feed one verdict: [`parser`] extracts failure events from a
//! log, [`risk`] counts risky keywords in a change set and folds both
//! counts into a tier. [`watch`] is an independent mode that follows a
//! growing stream and flags error lines as they arrive.

pub mod config;
pub mod parser;
pub mod risk;
pub mod watch;
