// src/config/mod.rs
//! Application configuration loaded from `config.yaml`.
//!
//! Every section is optional and falls back to the defaults below; only an
//! unreadable file, a malformed document, or a zero limit/interval is fatal.

pub mod outreach;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LiaError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_LOCATION: &str = "Stockholm";

fn default_true() -> bool {
    true
}
fn default_max_per_query() -> u32 {
    50
}
fn default_desired_start() -> String {
    "oktober 2026".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_applications_dir() -> String {
    "data/applications".to_string()
}
fn default_preview_limit() -> usize {
    25
}
fn default_interval_secs() -> u64 {
    3600
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub lia: LiaConfig,
    pub output: OutputConfig,
    pub daemon: DaemonConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub locations: Vec<String>,
    pub remote_ok: bool,
    /// Scoring keywords. Empty means "use lia_terms then java_terms".
    pub keywords: Vec<String>,
    pub lia_terms: Vec<String>,
    pub java_terms: Vec<String>,
    pub not_lia_terms: Vec<String>,
    pub strict: StrictConfig,
    pub query: QueryConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            remote_ok: true,
            keywords: Vec::new(),
            lia_terms: Vec::new(),
            java_terms: Vec::new(),
            not_lia_terms: Vec::new(),
            strict: StrictConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl SearchConfig {
    pub fn scoring_keywords(&self) -> Vec<String> {
        if !self.keywords.is_empty() {
            return self.keywords.clone();
        }
        self.lia_terms
            .iter()
            .chain(self.java_terms.iter())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrictConfig {
    /// Program gate checks the title only instead of title + description.
    #[serde(default = "default_true")]
    pub title_must_contain_lia: bool,
    /// Enables the technology gate.
    #[serde(default = "default_true")]
    pub must_contain_java: bool,
}

impl Default for StrictConfig {
    fn default() -> Self {
        Self {
            title_must_contain_lia: true,
            must_contain_java: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    #[serde(default = "default_max_per_query")]
    pub max_per_query: u32,
    #[serde(default = "default_true")]
    pub add_remote_queries: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_per_query: default_max_per_query(),
            add_remote_queries: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiaConfig {
    pub start_date: String,
    pub end_date: String,
    pub target: TargetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    #[serde(default = "default_desired_start")]
    pub desired_start: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            desired_start: default_desired_start(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_applications_dir")]
    pub applications_dir: String,
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            applications_dir: default_applications_dir(),
            preview_limit: default_preview_limit(),
        }
    }
}

impl OutputConfig {
    pub fn listings_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("listings.json")
    }

    pub fn seen_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("seen_ads.json")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file, or TOML when the path ends in `.toml`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LiaError::Config(format!("reading config from {}: {e}", path.display()))
        })?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let cfg = if ext == "toml" {
            Self::from_toml_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        // An empty document is "all defaults", same as `{}`.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<AppConfig>>(s)
            .map(Option::unwrap_or_default)
            .map_err(|e| LiaError::Config(format!("parsing yaml config: {e}")))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LiaError::Config(format!("parsing toml config: {e}")))
    }

    /// Seconds between daemon runs; a command-line value replaces the file's.
    pub fn daemon_interval_secs(&self, override_secs: Option<u64>) -> Result<u64> {
        match override_secs.unwrap_or(self.daemon.interval_secs) {
            0 => Err(LiaError::Config(
                "daemon interval must be greater than zero".into(),
            )),
            secs => Ok(secs),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.query.max_per_query == 0 {
            return Err(LiaError::Config(
                "search.query.max_per_query must be greater than zero".into(),
            ));
        }
        if self.daemon.interval_secs == 0 {
            return Err(LiaError::Config(
                "daemon.interval_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Locations with blanks dropped; falls back to Stockholm when none remain.
    pub fn effective_locations(&self) -> Vec<String> {
        let locs: Vec<String> = self
            .search
            .locations
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if locs.is_empty() {
            vec![DEFAULT_LOCATION.to_string()]
        } else {
            locs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = AppConfig::from_yaml_str("").unwrap();
        assert!(cfg.search.remote_ok);
        assert!(cfg.search.strict.title_must_contain_lia);
        assert!(cfg.search.strict.must_contain_java);
        assert_eq!(cfg.search.query.max_per_query, 50);
        assert_eq!(cfg.output.data_dir, "data");
        assert_eq!(cfg.output.applications_dir, "data/applications");
        assert_eq!(cfg.lia.target.desired_start, "oktober 2026");
        assert_eq!(cfg.daemon.interval_secs, 3600);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let yaml = r#"
search:
  locations: [Göteborg]
  strict:
    must_contain_java: false
output:
  data_dir: out
"#;
        let cfg = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.search.locations, vec!["Göteborg".to_string()]);
        assert!(cfg.search.strict.title_must_contain_lia);
        assert!(!cfg.search.strict.must_contain_java);
        assert_eq!(cfg.output.data_dir, "out");
        assert_eq!(cfg.output.applications_dir, "data/applications");
        assert_eq!(cfg.output.seen_path(), Path::new("out").join("seen_ads.json"));
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = AppConfig::from_yaml_str("search: [unterminated").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn zero_limit_fails_validation() {
        let cfg = AppConfig::from_yaml_str("search:\n  query:\n    max_per_query: 0\n").unwrap();
        assert!(cfg.validate().unwrap_err().is_config());
    }

    #[test]
    fn scoring_keywords_fall_back_to_terms() {
        let mut cfg = AppConfig::default();
        cfg.search.lia_terms = vec!["lia".into()];
        cfg.search.java_terms = vec!["java".into(), "spring".into()];
        assert_eq!(cfg.search.scoring_keywords(), vec!["lia", "java", "spring"]);

        cfg.search.keywords = vec!["kotlin".into()];
        assert_eq!(cfg.search.scoring_keywords(), vec!["kotlin"]);
    }

    #[test]
    fn blank_locations_fall_back_to_stockholm() {
        let mut cfg = AppConfig::default();
        cfg.search.locations = vec!["  ".into()];
        assert_eq!(cfg.effective_locations(), vec!["Stockholm".to_string()]);
    }

    #[test]
    fn zero_daemon_interval_is_rejected() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.daemon_interval_secs(None).unwrap(), 3600);
        assert_eq!(cfg.daemon_interval_secs(Some(90)).unwrap(), 90);
        assert!(cfg.daemon_interval_secs(Some(0)).unwrap_err().is_config());
    }

    #[test]
    fn toml_variant_parses() {
        let cfg = AppConfig::from_toml_str(
            r#"
[search]
locations = ["Malmö"]
remote_ok = false
"#,
        )
        .unwrap();
        assert_eq!(cfg.search.locations, vec!["Malmö".to_string()]);
        assert!(!cfg.search.remote_ok);
        assert_eq!(cfg.search.query.max_per_query, 50);
    }
}
