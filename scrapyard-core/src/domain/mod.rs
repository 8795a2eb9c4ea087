//! Core domain types
//!
//! Sources, request parameters and the option structs callers fill in.
//! Defaults and validation live next to the options they apply to.

pub mod options;
pub mod params;
pub mod parse;
pub mod source;
pub mod url;

pub use options::{YandexSearchOpts, YandexUrlOpts};
pub use params::{Domain, Locale, Render, UserAgent};
pub use parse::ParseInstructions;
pub use source::Source;
