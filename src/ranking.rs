//! Keyword relevance scoring.
//!
//! Points per listing:
//! - `+10` for each configured keyword found in title + location + description
//! - `+5`  when remote work is acceptable and the text mentions "remote"
//! - `+3`  when any configured location appears in the text
//!
//! Output is sorted by score, highest first. The sort is stable, so equal
//! scores keep their fetch order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::AppConfig;
use crate::ingest::types::Listing;

pub const KEYWORD_POINTS: f64 = 10.0;
pub const REMOTE_POINTS: f64 = 5.0;
pub const LOCATION_POINTS: f64 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl ScoredListing {
    pub fn url(&self) -> &str {
        &self.listing.url
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub keywords: Vec<String>,
    pub remote_ok: bool,
    pub locations: Vec<String>,
}

impl ScoringConfig {
    pub fn from_app(cfg: &AppConfig) -> Self {
        Self {
            keywords: cfg.search.scoring_keywords(),
            remote_ok: cfg.search.remote_ok,
            locations: cfg.search.locations.clone(),
        }
    }
}

pub fn score_listing(cfg: &ScoringConfig, l: Listing) -> ScoredListing {
    let text = format!(
        "{} {} {}",
        l.title,
        l.location,
        l.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Terms are matched as given; surrounding spaces are part of the term.
    for kw in cfg.keywords.iter().filter(|k| !k.is_empty()) {
        if text.contains(&kw.to_lowercase()) {
            score += KEYWORD_POINTS;
            reasons.push(format!("Matched keyword: {kw}"));
        }
    }

    if cfg.remote_ok && text.contains("remote") {
        score += REMOTE_POINTS;
        reasons.push("Remote mention".to_string());
    }

    let loc_hit = cfg
        .locations
        .iter()
        .filter(|loc| !loc.is_empty())
        .any(|loc| text.contains(&loc.to_lowercase()));
    if loc_hit {
        score += LOCATION_POINTS;
        reasons.push("Location match".to_string());
    }

    ScoredListing {
        listing: l,
        score,
        reasons,
    }
}

pub fn score_listings(cfg: &ScoringConfig, listings: Vec<Listing>) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = listings
        .into_iter()
        .map(|l| score_listing(cfg, l))
        .collect();
    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(url: &str, title: &str, location: &str, desc: &str) -> Listing {
        Listing {
            title: title.into(),
            company: "Acme".into(),
            location: location.into(),
            url: url.into(),
            description: Some(desc.into()),
            source: None,
        }
    }

    fn cfg() -> ScoringConfig {
        ScoringConfig {
            keywords: vec!["java".into(), "spring".into(), "kotlin".into()],
            remote_ok: false,
            locations: vec!["Stockholm".into()],
        }
    }

    #[test]
    fn two_keywords_and_location_score_23() {
        let l = listing("u1", "LIA Java", "Stockholm", "Spring Boot backend");
        let s = score_listing(&cfg(), l);
        assert_eq!(s.score, 23.0);
        assert_eq!(
            s.reasons,
            vec![
                "Matched keyword: java".to_string(),
                "Matched keyword: spring".to_string(),
                "Location match".to_string(),
            ]
        );
    }

    #[test]
    fn remote_only_counts_when_enabled() {
        let l = listing("u1", "LIA", "Distans", "fully remote team");
        assert_eq!(score_listing(&cfg(), l.clone()).score, 0.0);

        let remote = ScoringConfig {
            remote_ok: true,
            ..cfg()
        };
        let s = score_listing(&remote, l);
        assert_eq!(s.score, 5.0);
        assert_eq!(s.reasons, vec!["Remote mention".to_string()]);
    }

    #[test]
    fn sorted_descending_and_stable() {
        let input = vec![
            listing("a", "LIA", "Malmö", ""),
            listing("b", "Java", "Malmö", ""),
            listing("c", "LIA", "Malmö", "nothing"),
            listing("d", "Java Kotlin", "Stockholm", ""),
            listing("e", "Kotlin", "Malmö", ""),
        ];
        let out = score_listings(&cfg(), input);
        let order: Vec<&str> = out.iter().map(|s| s.url()).collect();
        assert_eq!(order, vec!["d", "b", "e", "a", "c"]);
        assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn padded_keyword_is_not_trimmed() {
        let padded = ScoringConfig {
            keywords: vec![" api ".into()],
            ..cfg()
        };
        let miss = score_listing(&padded, listing("u1", "LIA", "Malmö", "rapid growth"));
        assert_eq!(miss.score, 0.0);

        let hit = score_listing(&padded, listing("u2", "LIA", "Malmö", "REST API work"));
        assert_eq!(hit.score, 10.0);
        assert_eq!(hit.reasons, vec!["Matched keyword:  api ".to_string()]);
    }

    #[test]
    fn serializes_flat() {
        let s = score_listing(&cfg(), listing("u1", "LIA Java", "Stockholm", ""));
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["url"], "u1");
        assert_eq!(v["score"], 13.0);
        assert!(v["reasons"].is_array());
        assert!(v.get("listing").is_none());
    }
}
