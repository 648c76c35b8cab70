// src/ingest/providers/jobtech.rs
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{LiaError, Result};
use crate::ingest::normalize_text;
use crate::ingest::types::{Listing, Source, SourceProvider};

pub const API_KEY_ENV: &str = "JOBTECH_API_KEY";
const USER_AGENT: &str = "lia-finder/0.1";
const TIMEOUT_SECS: u64 = 25;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Option<Vec<Hit>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Hit {
    headline: Option<String>,
    title: Option<String>,
    employer: Option<Employer>,
    workplace_address: Option<WorkplaceAddress>,
    id: Option<serde_json::Value>,
    webpage_url: Option<String>,
    description: Option<Description>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Employer {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkplaceAddress {
    municipality: Option<String>,
    city: Option<String>,
}

// The API has shipped both a bare string and `{ "text": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Description {
    Plain(String),
    Structured {
        #[serde(default)]
        text: Option<String>,
    },
}

impl Description {
    fn into_text(self) -> Option<String> {
        match self {
            Description::Plain(s) => Some(s),
            Description::Structured { text } => text,
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn id_to_string(v: &serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn hit_to_listing(source: &Source, h: Hit) -> Listing {
    let title = non_empty(h.headline)
        .or_else(|| non_empty(h.title))
        .unwrap_or_default();
    let company = h.employer.and_then(|e| e.name).unwrap_or_default();
    let location = h
        .workplace_address
        .and_then(|w| non_empty(w.municipality).or_else(|| non_empty(w.city)))
        .unwrap_or_default();

    let url = non_empty(h.webpage_url).unwrap_or_else(|| {
        h.id.as_ref()
            .and_then(id_to_string)
            .map(|id| format!("{}/ad/{}", source.base_url, id))
            .unwrap_or_default()
    });

    let description = h
        .description
        .and_then(Description::into_text)
        .map(|d| normalize_text(&d))
        .filter(|d| !d.is_empty());

    Listing {
        title: normalize_text(&title),
        company: normalize_text(&company),
        location: normalize_text(&location),
        url: url.trim().to_string(),
        description,
        source: Some(source.name.clone()),
    }
}

/// Parse a `/search` response body into unfiltered listings.
pub fn parse_search_body(source: &Source, body: &str) -> Result<Vec<Listing>> {
    let t0 = std::time::Instant::now();
    let resp: SearchResponse = serde_json::from_str(body)?;
    let out: Vec<Listing> = resp
        .hits
        .unwrap_or_default()
        .into_iter()
        .map(|h| hit_to_listing(source, h))
        .collect();

    histogram!("ingest_parse_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    counter!("ingest_events_total").increment(out.len() as u64);
    Ok(out)
}

pub struct JobTechProvider {
    source: Source,
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { client: Client },
}

impl JobTechProvider {
    /// Serves the same body for every query. Used by tests and offline runs.
    pub fn from_fixture_str(source: Source, body: &str) -> Self {
        Self {
            source,
            mode: Mode::Fixture(body.to_string()),
        }
    }

    /// Build an HTTP provider. A blank key is a configuration error.
    pub fn new(source: Source, api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(LiaError::MissingCredential { var: API_KEY_ENV });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| LiaError::Config(format!("{API_KEY_ENV} contains invalid characters")))?;
        headers.insert("api-key", key);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            source,
            mode: Mode::Http { client },
        })
    }

    /// Reads the credential from `JOBTECH_API_KEY`.
    pub fn from_env(source: Source) -> Result<Self> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::new(source, &key)
    }
}

#[async_trait]
impl SourceProvider for JobTechProvider {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Listing>> {
        match &self.mode {
            Mode::Fixture(body) => parse_search_body(&self.source, body),
            Mode::Http { client } => {
                let url = format!("{}/search", self.source.base_url);
                let resp = client
                    .get(&url)
                    .query(&[("q", query.to_string()), ("limit", limit.to_string())])
                    .send()
                    .await
                    .map_err(|e| {
                        counter!("ingest_provider_errors_total").increment(1);
                        LiaError::Http(e)
                    })?;

                let status = resp.status();
                if !status.is_success() {
                    counter!("ingest_provider_errors_total").increment(1);
                    tracing::warn!(%status, query, provider = %self.source.name, "search request rejected");
                    return Err(LiaError::Transport {
                        query: query.to_string(),
                        status,
                    });
                }

                let body = resp.text().await?;
                parse_search_body(&self.source, &body)
            }
        }
    }

    fn source(&self) -> &Source {
        &self.source
    }
}
