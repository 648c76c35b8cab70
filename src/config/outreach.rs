// src/config/outreach.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LiaError, Result};

pub const DEFAULT_COMPANIES_PATH: &str = "companies.yaml";
pub const DEFAULT_PROFILE_PATH: &str = "profile.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub location: String,
    pub website: String,
    pub careers: String,
    pub contact_email: String,
    pub stack_hints: Vec<String>,
    pub domain: String,
    pub why: String,
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompaniesFile {
    companies: Vec<Company>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub person: Person,
    pub education: Education,
    pub profile: Strengths,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub program: String,
    pub school: String,
    /// Overrides `lia.target.desired_start` when set.
    pub lia_target_start: Option<String>,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            program: "Javautvecklare".to_string(),
            school: "Nackademin".to_string(),
            lia_target_start: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Strengths {
    pub backend_strengths: Vec<String>,
    pub frontend_strengths: Vec<String>,
    pub prior_experience_summary: String,
    pub projects: Vec<String>,
}

fn read_yaml_doc(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| LiaError::Config(format!("reading {}: {e}", path.display())))
}

pub fn load_companies<P: AsRef<Path>>(path: P) -> Result<Vec<Company>> {
    let path = path.as_ref();
    parse_companies(&read_yaml_doc(path)?)
        .map_err(|e| LiaError::Config(format!("{}: {e}", path.display())))
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    parse_profile(&read_yaml_doc(path)?)
        .map_err(|e| LiaError::Config(format!("{}: {e}", path.display())))
}

pub fn parse_companies(s: &str) -> std::result::Result<Vec<Company>, serde_yaml::Error> {
    let file: Option<CompaniesFile> = serde_yaml::from_str(s)?;
    Ok(file.unwrap_or_default().companies)
}

pub fn parse_profile(s: &str) -> std::result::Result<Profile, serde_yaml::Error> {
    let p: Option<Profile> = serde_yaml::from_str(s)?;
    Ok(p.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companies_default_missing_fields() {
        let yaml = r#"
companies:
  - name: Acme AB
    stack_hints: [Java, Spring Boot]
  - location: Solna
"#;
        let cs = parse_companies(yaml).unwrap();
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].name, "Acme AB");
        assert_eq!(cs[0].stack_hints, vec!["Java", "Spring Boot"]);
        assert!(cs[0].why.is_empty());
        assert!(cs[1].name.is_empty());
    }

    #[test]
    fn empty_documents_are_tolerated() {
        assert!(parse_companies("").unwrap().is_empty());
        let p = parse_profile("").unwrap();
        assert_eq!(p.education.program, "Javautvecklare");
        assert!(p.education.lia_target_start.is_none());
    }

    #[test]
    fn profile_sections_parse() {
        let yaml = r#"
person:
  full_name: Alex Andersson
  email: alex@example.se
education:
  lia_target_start: "2026-10"
profile:
  backend_strengths: [Java, Spring Boot]
"#;
        let p = parse_profile(yaml).unwrap();
        assert_eq!(p.person.full_name, "Alex Andersson");
        assert_eq!(p.education.school, "Nackademin");
        assert_eq!(p.education.lia_target_start.as_deref(), Some("2026-10"));
        assert_eq!(p.profile.backend_strengths.len(), 2);
    }
}
