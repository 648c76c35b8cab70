// src/ingest/providers/mod.rs
pub mod jobtech;

use crate::error::Result;
use crate::ingest::types::{Source, SourceProvider, JOBTECH_KIND};

/// HTTP providers for every source kind we know how to query.
/// Fails before any request when the credential is missing.
pub fn build_http_providers(sources: &[Source]) -> Result<Vec<Box<dyn SourceProvider>>> {
    let mut out: Vec<Box<dyn SourceProvider>> = Vec::new();
    for s in sources {
        if s.kind != JOBTECH_KIND {
            tracing::debug!(source = %s.name, kind = %s.kind, "skipping unsupported source kind");
            continue;
        }
        out.push(Box::new(jobtech::JobTechProvider::from_env(s.clone())?));
    }
    Ok(out)
}
