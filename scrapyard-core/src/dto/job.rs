//! Job DTOs
//!
//! A job is created by submitting a payload to the asynchronous endpoint
//! and is then tracked by its identifier until it reaches a terminal state.

use serde::{Deserialize, Serialize};

/// Job status as reported by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Queued or running
    Pending,
    /// Finished, results can be fetched
    Done,
    /// The remote side gave up on the job
    #[serde(alias = "failed")]
    Faulted,
}

impl JobStatus {
    /// Polling stops permanently once a terminal status is seen
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Faulted)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Done => write!(f, "done"),
            JobStatus::Faulted => write!(f, "faulted"),
        }
    }
}

/// Job record returned by the creation and status endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque job identifier
    #[serde(default)]
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
