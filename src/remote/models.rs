// ABOUTME: Data structures for panel job requests and responses
// ABOUTME: These are serialized to JSON for API communication

use serde::{Deserialize, Serialize};

/// Job statuses with terminal meaning on the panel side.
///
/// Anything else ("queued", "downloading", "processing", ...) is
/// pending-like and rendered literally.
pub const STATUS_DONE: &str = "done";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub url: String,
    pub format: String, // "mp3" or "mp4"
    pub title: String,
}

impl JobRequest {
    /// Build a request from raw input values, trimming the URL and title
    /// the way the panel form does before submission.
    pub fn new(url: &str, format: &str, title: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            format: format.to_string(),
            title: title.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub ok: bool,
    pub job_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressResponse {
    pub ok: bool,
    pub job: Option<JobSnapshot>,
}

/// One poll's view of a job. Fields are optional because the panel
/// populates them incrementally as the download advances.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSnapshot {
    pub progress: Option<f64>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub speed: Option<f64>,
    pub eta: Option<f64>,
}

impl JobSnapshot {
    /// Progress percentage, defaulting to 0 when the panel has not
    /// reported one yet.
    pub fn percent(&self) -> f64 {
        self.progress.unwrap_or(0.0)
    }

    /// Status tag, empty until the panel reports one.
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Display label in the panel's `<percent>% - <status>` form.
    pub fn label(&self) -> String {
        format!("{}% - {}", self.percent(), self.status())
    }
}
