// src/outreach/mod.rs
//! Per-company outreach packs: email, LinkedIn message, two cover letters and
//! a CV highlight sheet, written under `applications_dir/<slug>/`.

pub mod docx;
pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::outreach::{Company, Profile};
use crate::config::AppConfig;
use crate::error::{LiaError, Result};

use self::templates::{
    draft_cover_letter, draft_cv_highlights, draft_email, draft_linkedin_dm, CoverLetterVariant,
    OutreachContext,
};

pub const EMAIL_FILE: &str = "outreach_email.txt";
pub const LINKEDIN_FILE: &str = "linkedin_dm.txt";
pub const CV_HIGHLIGHTS_FILE: &str = "cv_highlights.docx";

const SLUG_MAX: usize = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutreachMode {
    /// Proactive outreach without a job ad
    #[default]
    Cold,
    /// Reply to a posted ad or role
    Application,
}

/// Folder name for a company: alphanumerics, space, `_` and `-` survive;
/// spaces become `_`; at most 60 chars.
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    kept.trim().replace(' ', "_").chars().take(SLUG_MAX).collect()
}

#[derive(Debug, Clone)]
pub struct PackReport {
    pub company: String,
    pub folder: PathBuf,
    pub files: Vec<PathBuf>,
}

fn write_text(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).map_err(|e| LiaError::io(path, e))
}

pub fn write_company_pack(
    base: &Path,
    cfg: &AppConfig,
    company: &Company,
    profile: &Profile,
    mode: OutreachMode,
) -> Result<PackReport> {
    let folder = base.join(slugify(&company.name));
    fs::create_dir_all(&folder).map_err(|e| LiaError::io(&folder, e))?;

    let ctx = OutreachContext::new(cfg, company, profile);
    let mut files = Vec::new();

    let (subject, body) = draft_email(&ctx, mode);
    let email_path = folder.join(EMAIL_FILE);
    write_text(&email_path, &format!("SUBJECT: {subject}\n\n{body}"))?;
    files.push(email_path);

    let dm_path = folder.join(LINKEDIN_FILE);
    write_text(&dm_path, &draft_linkedin_dm(&ctx))?;
    files.push(dm_path);

    for variant in CoverLetterVariant::ALL {
        let path = folder.join(variant.file_name());
        docx::write_docx(&path, &draft_cover_letter(&ctx, variant))?;
        files.push(path);
    }

    let cv_path = folder.join(CV_HIGHLIGHTS_FILE);
    docx::write_docx(&cv_path, &draft_cv_highlights(&ctx))?;
    files.push(cv_path);

    Ok(PackReport {
        company: company.name.clone(),
        folder,
        files,
    })
}

/// Generate packs for every company with a non-empty name.
pub fn generate_all(
    cfg: &AppConfig,
    companies: &[Company],
    profile: &Profile,
    mode: OutreachMode,
) -> Result<Vec<PackReport>> {
    let base = PathBuf::from(&cfg.output.applications_dir);
    fs::create_dir_all(&base).map_err(|e| LiaError::io(&base, e))?;

    let mut reports = Vec::new();
    for c in companies {
        if c.name.trim().is_empty() || slugify(&c.name).is_empty() {
            tracing::warn!(location = ?c.location, "skipping company without a usable name");
            continue;
        }
        let r = write_company_pack(&base, cfg, c, profile, mode)?;
        tracing::info!(company = %r.company, folder = %r.folder.display(), "generated outreach pack");
        reports.push(r);
    }
    Ok(reports)
}
