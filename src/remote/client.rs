// ABOUTME: HTTP client for communicating with the media-download panel API
// ABOUTME: Handles job creation, progress polling, and download link construction

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::models::{CreateResponse, JobRequest, ProgressResponse};

/// Panel API operations the lifecycle controller depends on.
///
/// Implemented by [`ApiClient`] for real HTTP traffic and by scripted
/// mocks in controller tests.
#[async_trait]
pub trait JobApi {
    async fn create_job(&self, request: &JobRequest) -> Result<CreateResponse>;
    async fn fetch_progress(&self, job_id: &str) -> Result<ProgressResponse>;

    /// Address of the finished file. Never fetched by the client; only
    /// exposed as a link target once a job reports done.
    fn download_url(&self, job_id: &str) -> String;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl JobApi for ApiClient {
    async fn create_job(&self, request: &JobRequest) -> Result<CreateResponse> {
        let url = format!("{}/api/create", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to reach the panel server. Check that it is running and the --server address is correct")?;

        // The panel reports validation failures as {ok: false, error} with a
        // non-2xx status; the body is authoritative, so parse it regardless.
        let create: CreateResponse = response
            .json()
            .await
            .context("Failed to parse job creation response")?;

        tracing::debug!(ok = create.ok, job_id = ?create.job_id, "Job creation response");
        Ok(create)
    }

    async fn fetch_progress(&self, job_id: &str) -> Result<ProgressResponse> {
        let url = format!("{}/api/progress/{}", self.base_url, job_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the panel server for a progress update")?;

        let progress: ProgressResponse = response
            .json()
            .await
            .context("Failed to parse progress response")?;

        Ok(progress)
    }

    fn download_url(&self, job_id: &str) -> String {
        format!("{}/download/{}", self.base_url, job_id)
    }
}
