// src/ingest/types.rs
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A job ad normalized from one search hit. `url` identifies it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub description: Option<String>,
    pub source: Option<String>,
}

/// Static descriptor of a queryable search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub kind: String, // e.g. "jobtech_jobsearch"
    pub base_url: String,
}

pub const JOBTECH_KIND: &str = "jobtech_jobsearch";

impl Source {
    pub fn jobtech() -> Self {
        Self::jobtech_at("https://jobsearch.api.jobtechdev.se")
    }

    pub fn jobtech_at(base_url: impl Into<String>) -> Self {
        Self {
            name: "JobTechJobSearch".to_string(),
            kind: JOBTECH_KIND.to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

pub fn build_default_sources() -> Vec<Source> {
    vec![Source::jobtech()]
}

/// One search backend. Returns hits for a single query, unfiltered.
#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Listing>>;
    fn source(&self) -> &Source;
}
