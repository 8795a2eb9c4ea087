//! Job poller
//!
//! Waits for one submitted job to reach a terminal state and hands the
//! outcome to its orchestrator through two one-shot sinks:
//!
//! - on `done`, the raw results go to the result sink, then `None` goes to
//!   the error sink
//! - on `faulted`, a transport error or the end of the context, the error
//!   goes to the error sink and the result sink is dropped unwritten
//!
//! Every exit path writes the error sink exactly once.

use std::sync::Arc;
use std::time::Duration;

use scrapyard_core::dto::JobStatus;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::DEFAULT_POLL_INTERVAL;
use crate::context::RequestContext;
use crate::error::{ClientError, Result};
use crate::jobs::JobClient;
use crate::transport::RawResponse;

/// Sending halves handed to the poller
#[derive(Debug)]
pub struct PollSinks {
    pub result: oneshot::Sender<RawResponse>,
    pub error: oneshot::Sender<Option<ClientError>>,
}

/// Receiving halves kept by the orchestrator
#[derive(Debug)]
pub struct PollReceivers {
    pub result: oneshot::Receiver<RawResponse>,
    pub error: oneshot::Receiver<Option<ClientError>>,
}

/// Allocates a fresh sink pair for one request
pub fn sinks() -> (PollSinks, PollReceivers) {
    let (result_tx, result_rx) = oneshot::channel();
    let (error_tx, error_rx) = oneshot::channel();
    (
        PollSinks {
            result: result_tx,
            error: error_tx,
        },
        PollReceivers {
            result: result_rx,
            error: error_rx,
        },
    )
}

/// Interval actually used by the poller
///
/// Unset and zero intervals fall back to `default`, and a zero `default`
/// falls back to [`DEFAULT_POLL_INTERVAL`]. The result is never zero.
pub fn effective_interval(requested: Option<Duration>, default: Duration) -> Duration {
    [requested.unwrap_or_default(), default]
        .into_iter()
        .find(|interval| !interval.is_zero())
        .unwrap_or(DEFAULT_POLL_INTERVAL)
}

/// Spawns [`poll`] as its own task
pub fn start_polling(
    jobs: Arc<JobClient>,
    ctx: RequestContext,
    job_id: String,
    interval: Duration,
    sinks: PollSinks,
) -> JoinHandle<()> {
    tokio::spawn(async move { poll(&jobs, &ctx, &job_id, interval, sinks).await })
}

/// Polls `job_id` every `interval` until it finishes, fails or `ctx` ends
///
/// The first status query is issued immediately.
pub async fn poll(
    jobs: &JobClient,
    ctx: &RequestContext,
    job_id: &str,
    interval: Duration,
    sinks: PollSinks,
) {
    debug!(job_id, ?interval, "Polling job");

    match wait_for_results(jobs, ctx, job_id, interval).await {
        Ok(raw) => {
            info!(job_id, "Job completed");
            // The orchestrator may have gone away; nothing left to do then.
            let _ = sinks.result.send(raw);
            let _ = sinks.error.send(None);
        }
        Err(err) => {
            if err.is_cancellation() {
                info!(job_id, "Polling cancelled: {}", err);
            } else if err.is_transport() {
                warn!(job_id, "Polling stopped by transport error: {}", err);
            } else {
                warn!(job_id, "Job failed: {}", err);
            }
            let _ = sinks.error.send(Some(err));
        }
    }
}

async fn wait_for_results(
    jobs: &JobClient,
    ctx: &RequestContext,
    job_id: &str,
    interval: Duration,
) -> Result<RawResponse> {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            err = ctx.done() => return Err(err),
            _ = ticker.tick() => {}
        }

        let job = jobs.job_status(ctx, job_id).await?;
        debug!(job_id, status = %job.status, "Polled job status");

        if !job.status.is_terminal() {
            continue;
        }

        return match job.status {
            JobStatus::Done => jobs.job_results(ctx, job_id).await,
            _ => Err(ClientError::JobFailed {
                job_id: job_id.to_string(),
            }),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_interval_defaults() {
        let default = Duration::from_secs(2);
        assert_eq!(effective_interval(None, default), default);
        assert_eq!(effective_interval(Some(Duration::ZERO), default), default);
        assert_eq!(
            effective_interval(Some(Duration::from_millis(250)), default),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_effective_interval_is_never_zero() {
        assert_eq!(
            effective_interval(None, Duration::ZERO),
            DEFAULT_POLL_INTERVAL
        );
        assert_eq!(
            effective_interval(Some(Duration::ZERO), Duration::ZERO),
            DEFAULT_POLL_INTERVAL
        );
        assert_eq!(
            effective_interval(Some(Duration::from_secs(3)), Duration::ZERO),
            Duration::from_secs(3)
        );
    }
}
