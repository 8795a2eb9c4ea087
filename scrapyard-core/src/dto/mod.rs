//! Data Transfer Objects
//!
//! Wire shapes exchanged with the remote scraping service: request
//! payloads, job records and the normalized response.

pub mod job;
pub mod payload;
pub mod response;

pub use job::{Job, JobStatus};
pub use payload::{Payload, YandexSearchPayload, YandexUrlPayload};
pub use response::{Resp, ScrapeResult};
