// ABOUTME: Custom error types for the panel client
// ABOUTME: Provides context-specific error variants with actionable messages

use std::fmt;

#[derive(Debug)]
pub enum PanelError {
    /// The panel rejected a job creation request (explicit ok:false).
    Submission(String),
    /// The creation request itself failed in transit or could not be parsed.
    Network(String),
    /// A running job ended with an error status.
    Job(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanelError::Submission(msg) => write!(f, "Job submission failed: {}", msg),
            PanelError::Network(msg) => write!(f, "Network error: {}", msg),
            PanelError::Job(msg) => write!(f, "Job failed: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}
