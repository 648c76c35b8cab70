// src/ingest/queries.rs
use std::collections::HashSet;

use crate::config::AppConfig;

/// Program + technology pairs expanded once per location.
const LOCATION_TEMPLATES: &[&str] = &[
    "LIA Java",
    "praktik Java",
    "\"lärande i arbete\" Java",
    "yrkeshögskola Java",
    "internship Java",
    "LIA Spring Boot",
    "praktik Spring Boot",
    "LIA backend Java",
    "praktik backend Java",
    "LIA Kotlin",
    "LIA microservices Java",
    "LIA API Java",
    "LIA test automation Java",
    "LIA testautomatisering Java",
];

const REMOTE_TEMPLATES: &[&str] = &[
    "LIA Java distans",
    "praktik Java distans",
    "internship Java remote",
    "LIA backend Java remote",
    "LIA Spring Boot remote",
    "LIA Java hybrid",
];

/// Order-preserving, deduplicated query list for one run.
pub fn build_queries(cfg: &AppConfig) -> Vec<String> {
    let mut base = Vec::new();
    for loc in cfg.effective_locations() {
        for t in LOCATION_TEMPLATES {
            base.push(format!("{t} {loc}"));
        }
    }

    if cfg.search.remote_ok && cfg.search.query.add_remote_queries {
        base.extend(REMOTE_TEMPLATES.iter().map(|t| t.to_string()));
    }

    dedup_preserving_order(base)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|q| seen.insert(q.clone()))
        .collect()
}
