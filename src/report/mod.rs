//! Serializable summaries of solved problems.
//!
//! A report captures the problem, the path found and the search effort in a
//! self-describing form for machine consumers (the CLI's `--json` output).

use crate::core::State;
use crate::problem::Problem;
use crate::search::Solution;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Summary of one successful search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: String,

    /// When the report was created
    pub generated_at: DateTime<Utc>,

    pub start: State,
    pub goal: State,

    /// Transition budget the search ran with
    pub max_states: usize,

    /// Transitions the search actually created
    pub transitions_expanded: usize,

    /// Number of button pushes in the solution
    pub moves: usize,

    /// Buttons pushed, in order
    pub buttons: Vec<usize>,

    /// `printable_path` lines, starting state first
    pub steps: Vec<String>,
}

impl SolutionReport {
    pub fn new(problem: &Problem, solution: &Solution, max_states: usize) -> Self {
        let path = &solution.path;
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            start: problem.start().clone(),
            goal: problem.goal().clone(),
            max_states,
            transitions_expanded: solution.transitions_expanded,
            moves: path.moves(),
            buttons: path.buttons(),
            steps: path.printable_path(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()
    }

    /// Compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()
    }

    fn validate(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                expected: REPORT_VERSION,
            });
        }
        if self.start.len() != self.goal.len() {
            return Err(ReportError::Inconsistent(format!(
                "start has {} lights but goal has {}",
                self.start.len(),
                self.goal.len()
            )));
        }
        if self.buttons.len() != self.moves || self.steps.len() != self.moves + 1 {
            return Err(ReportError::Inconsistent(format!(
                "{} moves recorded with {} buttons and {} steps",
                self.moves,
                self.buttons.len(),
                self.steps.len()
            )));
        }
        Ok(self)
    }
}
