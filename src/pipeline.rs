// src/pipeline.rs
//! One monitor run: fetch, gate, dedup, score, persist, diff against the
//! seen-set.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::Result;
use crate::ingest::filter::{FilterStats, ListingFilter};
use crate::ingest::providers::build_http_providers;
use crate::ingest::queries::build_queries;
use crate::ingest::types::{build_default_sources, SourceProvider};
use crate::ranking::{score_listings, ScoredListing, ScoringConfig};
use crate::storage::{ensure_dirs, save_listings_json, SeenSet};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub scored: Vec<ScoredListing>,
    /// Listings absent from the seen-set read at the start of the run.
    pub new_items: Vec<ScoredListing>,
    pub stats: FilterStats,
    pub listings_path: PathBuf,
    pub seen_path: PathBuf,
    pub finished_at: DateTime<Utc>,
}

/// Providers for the default sources. Fails before any request when the
/// API credential is missing.
pub fn build_providers() -> Result<Vec<Box<dyn SourceProvider>>> {
    build_http_providers(&build_default_sources())
}

pub async fn run_monitor(
    cfg: &AppConfig,
    providers: &[Box<dyn SourceProvider>],
) -> Result<RunSummary> {
    ensure_dirs(&cfg.output)?;

    let queries = build_queries(cfg);
    tracing::info!(sources = providers.len(), queries = queries.len(), "starting fetch");

    let filter = ListingFilter::from_search(&cfg.search);
    let fetched = crate::ingest::run_once(
        providers,
        &queries,
        cfg.search.query.max_per_query,
        &filter,
    )
    .await?;

    let scored = score_listings(&ScoringConfig::from_app(cfg), fetched.listings);
    let listings_path = save_listings_json(&cfg.output, &scored)?;

    // Diff against the previous state before it is overwritten.
    let seen_path = cfg.output.seen_path();
    let seen = SeenSet::load(&seen_path);
    let new_items: Vec<ScoredListing> = seen.new_since(&scored).into_iter().cloned().collect();
    seen.merged_with(&scored).save(&seen_path)?;

    tracing::info!(
        total = scored.len(),
        new = new_items.len(),
        previously_seen = seen.len(),
        "monitor run complete"
    );

    Ok(RunSummary {
        scored,
        new_items,
        stats: fetched.stats,
        listings_path,
        seen_path,
        finished_at: Utc::now(),
    })
}
