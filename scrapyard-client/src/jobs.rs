//! Job endpoints
//!
//! Submission, status and result calls against the asynchronous endpoint.
//! Every call races the caller's context, so a cancelled request returns
//! immediately even if the transport ignores the context.

use std::sync::Arc;

use reqwest::Method;
use scrapyard_core::dto::Job;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::context::RequestContext;
use crate::error::{ClientError, Result};
use crate::transport::{RawResponse, Transport};

/// Client for the job lifecycle endpoints
#[derive(Clone)]
pub struct JobClient {
    /// Job endpoint (e.g., "https://data.oxylabs.io/v1/queries")
    base_url: String,
    /// Network capability
    transport: Arc<dyn Transport>,
}

impl JobClient {
    /// Create a job client
    ///
    /// # Arguments
    /// * `base_url` - The job endpoint; a trailing slash is ignored
    /// * `transport` - The transport used for every call
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Get the job endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a serialized payload as a new job
    ///
    /// One round trip, no retries.
    ///
    /// # Returns
    /// The identifier of the created job
    pub async fn submit_job(&self, ctx: &RequestContext, payload: Vec<u8>) -> Result<String> {
        let response = ctx
            .run(
                self.transport
                    .request(ctx, Method::POST, &self.base_url, Some(payload)),
            )
            .await?;

        let job: Job = self.handle_response(response)?;
        if job.id.is_empty() {
            return Err(ClientError::Serialization(
                "job creation response carried no job id".to_string(),
            ));
        }

        info!(job_id = %job.id, status = %job.status, "Job submitted");
        Ok(job.id)
    }

    /// Get the current state of a job
    pub async fn job_status(&self, ctx: &RequestContext, job_id: &str) -> Result<Job> {
        let url = format!("{}/{}", self.base_url, job_id);
        let response = ctx
            .run(self.transport.request(ctx, Method::GET, &url, None))
            .await?;

        self.handle_response(response)
    }

    /// Fetch the raw results of a completed job
    pub async fn job_results(&self, ctx: &RequestContext, job_id: &str) -> Result<RawResponse> {
        let url = format!("{}/{}/results", self.base_url, job_id);
        let response = ctx
            .run(self.transport.request(ctx, Method::GET, &url, None))
            .await?;

        if !response.is_success() {
            return Err(ClientError::api_error(response.status, response.text()));
        }

        debug!(job_id, bytes = response.body.len(), "Fetched job results");
        Ok(response)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize a JSON body
    fn handle_response<T: DeserializeOwned>(&self, response: RawResponse) -> Result<T> {
        if !response.is_success() {
            return Err(ClientError::api_error(response.status, response.text()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            ClientError::Serialization(format!("Failed to parse JSON response: {}", e))
        })
    }
}

impl std::fmt::Debug for JobClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
