// src/ingest/mod.rs
pub mod filter;
pub mod providers;
pub mod queries;
pub mod scheduler;
pub mod types;

use crate::error::Result;
use crate::ingest::filter::{FilterStats, ListingFilter, Verdict};
use crate::ingest::types::{Listing, SourceProvider};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("ingest_events_total", "Total hits parsed from providers.");
        describe_counter!("ingest_kept_total", "Listings kept after keyword gates.");
        describe_counter!(
            "ingest_filtered_total",
            "Listings rejected by keyword gates or missing title/url."
        );
        describe_counter!(
            "ingest_dedup_total",
            "Listings removed as duplicate URLs."
        );
        describe_counter!(
            "ingest_provider_errors_total",
            "Provider fetch/parse errors."
        );
        describe_histogram!("ingest_parse_ms", "Provider parse time in milliseconds.");
    });
}

/// Normalize text: decode entities, strip tags, collapse whitespace, trim.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[a-z][^>]*>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// First occurrence wins; order preserved.
pub fn dedup_by_url(listings: Vec<Listing>) -> (Vec<Listing>, usize) {
    let mut seen: HashSet<String> = HashSet::with_capacity(listings.len());
    let mut keep = Vec::with_capacity(listings.len());
    let mut dropped = 0usize;
    for l in listings {
        if seen.insert(l.url.clone()) {
            keep.push(l);
        } else {
            dropped += 1;
        }
    }
    (keep, dropped)
}

#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub listings: Vec<Listing>,
    pub stats: FilterStats,
    pub duplicates: usize,
}

/// Query every provider sequentially, gate each hit, then dedup by URL.
///
/// The first failing request aborts the whole fetch; nothing fetched so far
/// is returned.
pub async fn run_once(
    providers: &[Box<dyn SourceProvider>],
    queries: &[String],
    limit: u32,
    filter: &ListingFilter,
) -> Result<FetchOutcome> {
    ensure_metrics_described();

    let mut stats = FilterStats::default();
    let mut kept = Vec::new();

    for p in providers {
        for q in queries {
            let hits = p.search(q, limit).await?;
            tracing::debug!(provider = %p.source().name, query = %q, hits = hits.len(), "search ok");
            for l in hits {
                let v = filter.evaluate(&l);
                stats.record(v);
                if v == Verdict::Keep {
                    kept.push(l);
                }
            }
        }
    }

    let (listings, duplicates) = dedup_by_url(kept);

    counter!("ingest_kept_total").increment(stats.kept as u64);
    counter!("ingest_filtered_total").increment(stats.dropped() as u64);
    counter!("ingest_dedup_total").increment(duplicates as u64);

    tracing::info!(
        target: "ingest",
        kept = stats.kept,
        dropped_excluded = stats.dropped_excluded,
        dropped_primary_title = stats.dropped_primary_title,
        dropped_primary_text = stats.dropped_primary_text,
        dropped_tech = stats.dropped_tech,
        dropped_incomplete = stats.dropped_incomplete,
        duplicates,
        "filter summary"
    );

    Ok(FetchOutcome {
        listings,
        stats,
        duplicates,
    })
}
