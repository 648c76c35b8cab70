// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod outreach;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod storage;

// ---- Re-exports for stable public API ----
pub use crate::config::AppConfig;
pub use crate::error::{LiaError, Result};
pub use crate::ingest::types::{Listing, Source, SourceProvider};
pub use crate::pipeline::{run_monitor, RunSummary};
pub use crate::ranking::ScoredListing;
