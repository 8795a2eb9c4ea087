//! Poller driven directly through its sinks

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{ASYNC_URL, ScriptedTransport, results_body};
use scrapyard_client::poller::{self, effective_interval};
use scrapyard_client::{ClientError, JobClient, RequestContext};
use serde_json::json;

fn job_client(transport: &ScriptedTransport) -> Arc<JobClient> {
    Arc::new(JobClient::new(ASYNC_URL, transport.clone().into_transport()))
}

#[tokio::test(start_paused = true)]
async fn test_done_writes_result_then_clears_error() {
    let transport = ScriptedTransport::new()
        .statuses("42", &["pending", "done"])
        .results("42", results_body("42", json!("<html></html>")));

    let (sinks, receivers) = poller::sinks();
    let task = poller::start_polling(
        job_client(&transport),
        RequestContext::background(),
        "42".to_string(),
        Duration::from_secs(1),
        sinks,
    );
    task.await.unwrap();

    assert!(receivers.error.await.unwrap().is_none());
    let raw = receivers.result.await.unwrap();
    assert!(raw.is_success());
    assert_eq!(transport.status_queries("42"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failure_never_writes_result() {
    let transport = ScriptedTransport::new().statuses("43", &["faulted"]);

    let (sinks, receivers) = poller::sinks();
    poller::poll(
        &job_client(&transport),
        &RequestContext::background(),
        "43",
        Duration::from_secs(1),
        sinks,
    )
    .await;

    let err = receivers.error.await.unwrap().unwrap();
    assert!(matches!(err, ClientError::JobFailed { .. }));
    assert!(receivers.result.await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_job_is_a_transport_failure() {
    let transport = ScriptedTransport::new();

    let (sinks, receivers) = poller::sinks();
    poller::poll(
        &job_client(&transport),
        &RequestContext::background(),
        "missing",
        Duration::from_secs(1),
        sinks,
    )
    .await;

    let err = receivers.error.await.unwrap().unwrap();
    assert!(err.is_client_error());
    assert!(receivers.result.await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_already_cancelled_context_issues_no_query() {
    let transport = ScriptedTransport::new().statuses("44", &["done"]);
    let ctx = RequestContext::background();
    ctx.cancel();

    let (sinks, receivers) = poller::sinks();
    poller::poll(&job_client(&transport), &ctx, "44", Duration::from_secs(1), sinks).await;

    let err = receivers.error.await.unwrap().unwrap();
    assert!(matches!(err, ClientError::Cancelled));
    assert_eq!(transport.status_queries("44"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_task_ends_after_orchestrator_goes_away() {
    let transport = ScriptedTransport::new()
        .statuses("45", &["done"])
        .results("45", results_body("45", json!("<html></html>")));

    let (sinks, receivers) = poller::sinks();
    drop(receivers);

    let task = poller::start_polling(
        job_client(&transport),
        RequestContext::background(),
        "45".to_string(),
        effective_interval(None, Duration::from_secs(2)),
        sinks,
    );
    task.await.unwrap();

    assert_eq!(transport.result_fetches("45"), 1);
}
