//! Scripted in-memory transport shared by the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use scrapyard_client::{ClientConfig, RawResponse, RequestContext, Result, Transport};
use serde_json::{Value, json};

pub const REALTIME_URL: &str = "http://realtime.test/v1/queries";
pub const ASYNC_URL: &str = "http://data.test/v1/queries";

/// Configuration pointing at the scripted endpoints
pub fn test_config() -> ClientConfig {
    ClientConfig::new("user", "pass")
        .with_realtime_url(REALTIME_URL)
        .with_async_url(ASYNC_URL)
        .with_default_poll_interval(Duration::from_secs(1))
}

/// A successful results body with one page of `content`
pub fn results_body(job_id: &str, content: Value) -> RawResponse {
    let body = json!({
        "results": [{
            "content": content,
            "page": 1,
            "job_id": job_id,
            "status_code": 200
        }],
        "job": { "id": job_id, "status": "done" }
    });
    RawResponse::new(200, serde_json::to_vec(&body).unwrap())
}

/// A recorded transport call
#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl Call {
    pub fn json_body(&self) -> Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or(b"null")).unwrap()
    }
}

#[derive(Default)]
struct Script {
    submissions: VecDeque<RawResponse>,
    statuses: HashMap<String, VecDeque<&'static str>>,
    results: HashMap<String, RawResponse>,
    realtime: Option<RawResponse>,
    status_delay: Option<Duration>,
    calls: Vec<Call>,
}

/// Transport that answers from a script and records every call
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next job creation answers with `job_id`
    pub fn accept_job(self, job_id: &str) -> Self {
        let body = json!({ "id": job_id, "status": "pending" });
        self.script
            .lock()
            .unwrap()
            .submissions
            .push_back(RawResponse::new(200, serde_json::to_vec(&body).unwrap()));
        self
    }

    /// Next job creation answers with an error status
    pub fn reject_job(self, status: u16, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .submissions
            .push_back(RawResponse::new(status, message.as_bytes().to_vec()));
        self
    }

    /// Status sequence for `job_id`; the last status repeats forever
    pub fn statuses(self, job_id: &str, statuses: &[&'static str]) -> Self {
        self.script
            .lock()
            .unwrap()
            .statuses
            .insert(job_id.to_string(), statuses.iter().copied().collect());
        self
    }

    /// Results endpoint answer for `job_id`
    pub fn results(self, job_id: &str, response: RawResponse) -> Self {
        self.script
            .lock()
            .unwrap()
            .results
            .insert(job_id.to_string(), response);
        self
    }

    /// Realtime endpoint answer
    pub fn realtime(self, response: RawResponse) -> Self {
        self.script.lock().unwrap().realtime = Some(response);
        self
    }

    /// Every status query takes `delay` to answer
    pub fn slow_status(self, delay: Duration) -> Self {
        self.script.lock().unwrap().status_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn submissions(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == Method::POST && c.url == ASYNC_URL)
            .collect()
    }

    pub fn status_queries(&self, job_id: &str) -> usize {
        let url = format!("{}/{}", ASYNC_URL, job_id);
        self.calls().iter().filter(|c| c.url == url).count()
    }

    pub fn result_fetches(&self, job_id: &str) -> usize {
        let url = format!("{}/{}/results", ASYNC_URL, job_id);
        self.calls().iter().filter(|c| c.url == url).count()
    }

    pub fn into_transport(self) -> Arc<dyn Transport> {
        Arc::new(self)
    }

    fn next_status(&self, job_id: &str) -> RawResponse {
        let mut script = self.script.lock().unwrap();
        let Some(queue) = script.statuses.get_mut(job_id) else {
            return RawResponse::new(404, b"unknown job".to_vec());
        };
        let status = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            *queue.front().unwrap()
        };
        let body = json!({ "id": job_id, "status": status });
        RawResponse::new(200, serde_json::to_vec(&body).unwrap())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        _ctx: &RequestContext,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let status_delay = {
            let mut script = self.script.lock().unwrap();
            script.calls.push(Call {
                method: method.clone(),
                url: url.to_string(),
                body: body.clone(),
            });
            script.status_delay
        };

        if method == Method::POST && url == REALTIME_URL {
            let script = self.script.lock().unwrap();
            return Ok(script
                .realtime
                .clone()
                .unwrap_or_else(|| RawResponse::new(500, b"no realtime script".to_vec())));
        }

        if method == Method::POST && url == ASYNC_URL {
            let mut script = self.script.lock().unwrap();
            return Ok(script
                .submissions
                .pop_front()
                .unwrap_or_else(|| RawResponse::new(500, b"no submission script".to_vec())));
        }

        let path = url
            .strip_prefix(ASYNC_URL)
            .and_then(|p| p.strip_prefix('/'))
            .unwrap_or_default()
            .to_string();

        if let Some(job_id) = path.strip_suffix("/results") {
            let script = self.script.lock().unwrap();
            return Ok(script
                .results
                .get(job_id)
                .cloned()
                .unwrap_or_else(|| RawResponse::new(404, b"no results".to_vec())));
        }

        if let Some(delay) = status_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.next_status(&path))
    }
}
