//! Report encoding errors.

use thiserror::Error;

/// Failures while exporting or reading back a [`SolutionReport`](super::SolutionReport).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not encode report: {0}")]
    Encode(String),

    /// Malformed input, including states that fail to parse
    #[error("Could not decode report: {0}")]
    Decode(String),

    #[error("Report format v{found} is not readable, expected v{expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Decoded fields disagree with each other
    #[error("Inconsistent report: {0}")]
    Inconsistent(String),
}
