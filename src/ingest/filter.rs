// src/ingest/filter.rs
//! Keyword gates applied to every fetched hit.
//!
//! Evaluation order is fixed: exclusion terms first (short-circuit), then the
//! program gate, then the optional technology gate.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::ingest::types::Listing;

/// Case-insensitive substring test against any term. Padding inside a term is
/// significant (`" api "` does not match "rapid"); empty terms never match.
pub fn contains_any(text: &str, terms: &[String]) -> bool {
    let t = text.to_lowercase();
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .any(|term| t.contains(&term.to_lowercase()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Incomplete,
    Excluded,
    NotPrimaryInTitle,
    NotPrimaryInText,
    NotTech,
}

#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub exclude_terms: Vec<String>,
    pub primary_terms: Vec<String>,
    pub tech_terms: Vec<String>,
    /// Program gate scope: title only when true, title + description otherwise.
    pub primary_title_only: bool,
    pub tech_required: bool,
}

impl ListingFilter {
    pub fn from_search(cfg: &SearchConfig) -> Self {
        Self {
            exclude_terms: cfg.not_lia_terms.clone(),
            primary_terms: cfg.lia_terms.clone(),
            tech_terms: cfg.java_terms.clone(),
            primary_title_only: cfg.strict.title_must_contain_lia,
            tech_required: cfg.strict.must_contain_java,
        }
    }

    pub fn evaluate(&self, listing: &Listing) -> Verdict {
        let title_l = listing.title.to_lowercase();
        let combined_l = format!(
            "{}\n{}",
            listing.title,
            listing.description.as_deref().unwrap_or_default()
        )
        .to_lowercase();

        if contains_any(&combined_l, &self.exclude_terms) {
            return Verdict::Excluded;
        }

        // An empty term list matches nothing, so an active gate rejects.
        if self.primary_title_only {
            if !contains_any(&title_l, &self.primary_terms) {
                return Verdict::NotPrimaryInTitle;
            }
        } else if !contains_any(&combined_l, &self.primary_terms) {
            return Verdict::NotPrimaryInText;
        }

        if self.tech_required && !contains_any(&combined_l, &self.tech_terms) {
            return Verdict::NotTech;
        }

        if listing.title.trim().is_empty() || listing.url.trim().is_empty() {
            return Verdict::Incomplete;
        }

        Verdict::Keep
    }
}

/// Per-run gate counters, logged after each fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub kept: usize,
    pub dropped_excluded: usize,
    pub dropped_primary_title: usize,
    pub dropped_primary_text: usize,
    pub dropped_tech: usize,
    pub dropped_incomplete: usize,
}

impl FilterStats {
    pub fn record(&mut self, v: Verdict) {
        match v {
            Verdict::Keep => self.kept += 1,
            Verdict::Incomplete => self.dropped_incomplete += 1,
            Verdict::Excluded => self.dropped_excluded += 1,
            Verdict::NotPrimaryInTitle => self.dropped_primary_title += 1,
            Verdict::NotPrimaryInText => self.dropped_primary_text += 1,
            Verdict::NotTech => self.dropped_tech += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped_excluded
            + self.dropped_primary_title
            + self.dropped_primary_text
            + self.dropped_tech
            + self.dropped_incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, desc: &str) -> Listing {
        Listing {
            title: title.into(),
            company: "Acme".into(),
            location: "Stockholm".into(),
            url: "https://example.test/ad/1".into(),
            description: Some(desc.into()),
            source: None,
        }
    }

    fn strict_filter() -> ListingFilter {
        ListingFilter {
            exclude_terms: vec!["permanent".into(), "full-time".into()],
            primary_terms: vec!["lia".into(), "praktik".into()],
            tech_terms: vec!["java".into()],
            primary_title_only: true,
            tech_required: true,
        }
    }

    #[test]
    fn contains_any_ignores_case_and_empty_terms() {
        let terms = vec![String::new(), "JAVA".into()];
        assert!(contains_any("Backend java dev", &terms));
        assert!(!contains_any("Backend dev", &terms));
        assert!(!contains_any("anything", &[]));
    }

    #[test]
    fn padded_terms_keep_their_spaces() {
        let terms = vec![" api ".to_string()];
        assert!(!contains_any("rapid growth", &terms));
        assert!(contains_any("REST API design", &terms));
    }

    #[test]
    fn empty_term_lists_reject_when_gates_are_active() {
        let f = ListingFilter {
            primary_title_only: true,
            tech_required: true,
            ..ListingFilter::default()
        };
        let l = listing("Senior accountant", "permanent full-time");
        assert_eq!(f.evaluate(&l), Verdict::NotPrimaryInTitle);

        let text_scope = ListingFilter {
            primary_title_only: false,
            ..f.clone()
        };
        assert_eq!(text_scope.evaluate(&l), Verdict::NotPrimaryInText);

        let no_tech = ListingFilter {
            primary_terms: vec!["lia".into()],
            ..f
        };
        assert_eq!(no_tech.evaluate(&listing("LIA Java", "")), Verdict::NotTech);
    }

    #[test]
    fn exclusion_wins_over_passing_gates() {
        let f = strict_filter();
        let l = listing("LIA Java backend", "Permanent role after placement");
        assert_eq!(f.evaluate(&l), Verdict::Excluded);
    }

    #[test]
    fn strict_mode_requires_primary_term_in_title() {
        let f = strict_filter();
        let l = listing("Java developer", "LIA placement for students");
        assert_eq!(f.evaluate(&l), Verdict::NotPrimaryInTitle);

        let loose = ListingFilter {
            primary_title_only: false,
            ..strict_filter()
        };
        assert_eq!(loose.evaluate(&l), Verdict::Keep);
        let none = listing("Java developer", "Junior role");
        assert_eq!(loose.evaluate(&none), Verdict::NotPrimaryInText);
    }

    #[test]
    fn tech_gate_only_when_enabled() {
        let l = listing("LIA frontend", "React and TypeScript");
        assert_eq!(strict_filter().evaluate(&l), Verdict::NotTech);

        let relaxed = ListingFilter {
            tech_required: false,
            ..strict_filter()
        };
        assert_eq!(relaxed.evaluate(&l), Verdict::Keep);
    }

    #[test]
    fn missing_url_is_incomplete() {
        let mut l = listing("LIA Java", "");
        l.url.clear();
        assert_eq!(strict_filter().evaluate(&l), Verdict::Incomplete);
    }

    #[test]
    fn stats_count_every_verdict() {
        let mut s = FilterStats::default();
        s.record(Verdict::Keep);
        s.record(Verdict::Excluded);
        s.record(Verdict::NotTech);
        assert_eq!(s.kept, 1);
        assert_eq!(s.dropped(), 2);
    }
}
