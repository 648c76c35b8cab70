// src/error.rs
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LiaError>;

#[derive(Debug, Error)]
pub enum LiaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration error: missing {var}. Create a .env file and set {var}=...")]
    MissingCredential { var: &'static str },

    #[error("search request for {query:?} failed with HTTP {status}")]
    Transport { query: String, status: StatusCode },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("document error: {0}")]
    Document(String),
}

impl LiaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Configuration and credential problems abort a run before any fetch.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::MissingCredential { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_error_is_a_config_error() {
        let e = LiaError::MissingCredential {
            var: "JOBTECH_API_KEY",
        };
        assert!(e.is_config());
        assert!(e.to_string().contains("JOBTECH_API_KEY"));
    }

    #[test]
    fn transport_error_names_query_and_status() {
        let e = LiaError::Transport {
            query: "LIA Java Stockholm".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(!e.is_config());
        let msg = e.to_string();
        assert!(msg.contains("LIA Java Stockholm"));
        assert!(msg.contains("503"));
    }
}
