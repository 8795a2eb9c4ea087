//! Scrapyard Core
//!
//! Core types for the Scrapyard scraping client.
//!
//! This crate contains:
//! - Domain types: sources, request parameters and per-source options
//! - DTOs: wire payloads, job records and the normalized response shape
//!
//! Nothing in here performs I/O; the HTTP side lives in `scrapyard-client`.

pub mod domain;
pub mod dto;
pub mod error;

pub use error::ValidationError;
