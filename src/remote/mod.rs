// ABOUTME: Remote panel API module
// ABOUTME: HTTP client and wire models for job creation and progress polling

pub mod client;
pub mod models;

pub use client::{ApiClient, JobApi};
pub use models::{CreateResponse, JobRequest, JobSnapshot, ProgressResponse};
