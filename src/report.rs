// src/report.rs
//! Console preview of a run. Pure formatting; the caller prints.

use std::fmt::Write as _;

use crate::pipeline::RunSummary;
use crate::ranking::ScoredListing;

pub const NO_NEW_MATCHES: &str = "No new matches since last run.";
const TABLE_TITLE: &str = "NEW matches (Java + LIA) since last run";

const HEADERS: [&str; 5] = ["Score", "Title", "Company", "Location", "Link"];
const MAX_WIDTHS: [usize; 5] = [7, 50, 28, 18, 80];

/// Keep at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn pad(s: &str, width: usize, right_align: bool) -> String {
    let n = s.chars().count();
    let fill = " ".repeat(width.saturating_sub(n));
    if right_align {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}

/// Render up to `top_n` rows; a distinct message when `items` is empty.
pub fn render_new_matches(items: &[ScoredListing], top_n: usize) -> String {
    if items.is_empty() {
        return format!("{NO_NEW_MATCHES}\n");
    }

    let rows: Vec<[String; 5]> = items
        .iter()
        .take(top_n)
        .map(|s| {
            let l = &s.listing;
            let cells = [
                format!("{:.1}", s.score),
                l.title.clone(),
                l.company.clone(),
                l.location.clone(),
                l.url.clone(),
            ];
            let mut out: [String; 5] = Default::default();
            for (i, c) in cells.iter().enumerate() {
                out[i] = truncate_chars(c, MAX_WIDTHS[i]);
            }
            out
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (i, c) in r.iter().enumerate() {
            widths[i] = widths[i].max(c.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{TABLE_TITLE}");

    let header: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], i == 0))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for r in &rows {
        let line: Vec<String> = r
            .iter()
            .enumerate()
            .map(|(i, c)| pad(c, widths[i], i == 0))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    }

    if items.len() > rows.len() {
        let _ = writeln!(out, "... and {} more", items.len() - rows.len());
    }
    out
}

/// Full console output for a monitor run.
pub fn render_summary(summary: &RunSummary, top_n: usize) -> String {
    let mut out = render_new_matches(&summary.new_items, top_n);
    let _ = writeln!(out);
    let _ = writeln!(out, "Saved full list: {}", summary.listings_path.display());
    let _ = writeln!(out, "Saved seen URLs: {}", summary.seen_path.display());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::filter::FilterStats;
    use crate::ingest::types::Listing;
    use chrono::Utc;
    use std::path::PathBuf;

    fn scored(title: &str, score: f64) -> ScoredListing {
        ScoredListing {
            listing: Listing {
                title: title.into(),
                company: "Acme".into(),
                location: "Stockholm".into(),
                url: format!("https://example.test/{score}"),
                description: None,
                source: None,
            },
            score,
            reasons: vec![],
        }
    }

    #[test]
    fn empty_prints_distinct_message() {
        assert_eq!(render_new_matches(&[], 10), "No new matches since last run.\n");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(120);
        let s = scored(&long, 23.0);
        let out = render_new_matches(&[s], 10);
        assert!(out.contains(&"x".repeat(50)));
        assert!(!out.contains(&"x".repeat(51)));
        assert!(out.contains("23.0"));
    }

    #[test]
    fn only_top_n_rows() {
        let items: Vec<ScoredListing> = (0..5).map(|i| scored("LIA", i as f64)).collect();
        let out = render_new_matches(&items, 2);
        // title + header + rule + 2 rows + overflow note
        assert_eq!(out.lines().count(), 6);
        assert!(out.ends_with("... and 3 more\n"));
    }

    #[test]
    fn summary_ends_with_saved_paths() {
        let summary = RunSummary {
            scored: vec![scored("LIA Java", 13.0)],
            new_items: vec![scored("LIA Java", 13.0)],
            stats: FilterStats::default(),
            listings_path: PathBuf::from("data/listings.json"),
            seen_path: PathBuf::from("data/seen_ads.json"),
            finished_at: Utc::now(),
        };
        let out = render_summary(&summary, 25);
        assert!(out.starts_with(TABLE_TITLE));
        assert!(out.contains("13.0"));
        assert!(out.ends_with(
            "\nSaved full list: data/listings.json\nSaved seen URLs: data/seen_ads.json\n"
        ));

        let empty = RunSummary {
            new_items: vec![],
            ..summary
        };
        let out = render_summary(&empty, 25);
        assert!(out.starts_with("No new matches since last run.\n\nSaved full list:"));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("Göteborg", 3), "Göt");
    }
}
