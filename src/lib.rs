pub mod apis;
pub mod common;
pub mod config;
pub mod logging;
pub mod parser;
pub mod pipeline;

// Ports and their adapters
pub mod app;
pub mod infra;

pub use pipeline::normalize::{normalize_date, DateNormalizer, NormalizedDate};
