// src/outreach/templates.rs
//! Swedish outreach texts. Everything here is pure string building so the
//! wording can be checked without touching the filesystem.

use crate::config::outreach::{Company, Profile};
use crate::config::AppConfig;

use super::OutreachMode;

const FALLBACK_STACK: &str = "Java/Spring och modern webbutveckling";

/// A document as headings and paragraphs, rendered later as DOCX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub blocks: Vec<Block>,
}

impl DocumentDraft {
    fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    fn para(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.blocks.push(Block::Paragraph(text));
        }
        self
    }

    /// All text, one block per line. Handy for assertions and logs.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Heading { text, .. } => text.as_str(),
                Block::Paragraph(text) => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_clean(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-company values shared by every template.
pub struct OutreachContext<'a> {
    pub company: &'a Company,
    pub profile: &'a Profile,
    pub lia_start: String,
}

impl<'a> OutreachContext<'a> {
    /// The profile's own start target wins over `lia.target.desired_start`.
    pub fn new(cfg: &AppConfig, company: &'a Company, profile: &'a Profile) -> Self {
        let lia_start = profile
            .education
            .lia_target_start
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| cfg.lia.target.desired_start.clone());
        Self {
            company,
            profile,
            lia_start,
        }
    }

    pub fn stack(&self) -> String {
        let hints = join_clean(&self.company.stack_hints);
        if hints.is_empty() {
            FALLBACK_STACK.to_string()
        } else {
            hints
        }
    }

    pub fn contact_line(&self) -> String {
        let p = &self.profile.person;
        [&p.phone, &p.email, &p.linkedin, &p.github]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("  |  ")
    }

    /// `why`, then the domain label, then free notes.
    pub fn alignment_paragraph(&self) -> String {
        let c = self.company;
        let mut parts = Vec::new();
        if !c.why.trim().is_empty() {
            parts.push(c.why.trim().to_string());
        }
        if !c.domain.trim().is_empty() {
            parts.push(format!("Branschfokus: {}.", c.domain.trim()));
        }
        if !c.notes.trim().is_empty() {
            parts.push(c.notes.trim().to_string());
        }
        parts.join(" ")
    }

    fn full_name(&self) -> &str {
        self.profile.person.full_name.trim()
    }

    fn program(&self) -> &str {
        &self.profile.education.program
    }

    fn school(&self) -> &str {
        &self.profile.education.school
    }

    fn projects(&self) -> String {
        join_clean(&self.profile.profile.projects)
    }
}

/// Returns `(subject, body)`.
pub fn draft_email(ctx: &OutreachContext<'_>, mode: OutreachMode) -> (String, String) {
    let company = &ctx.company.name;
    let start = &ctx.lia_start;

    let (subject, intro) = match mode {
        OutreachMode::Application => (
            format!("Ansökan: LIA (start {start}) - Fullstack (Java + frontend)"),
            format!(
                "Jag vill anmäla intresse för en LIA-plats hos {company} med start {start}. \
                 Jag studerar till {} på {} och söker en roll med fullstackfokus.",
                ctx.program(),
                ctx.school()
            ),
        ),
        OutreachMode::Cold => (
            format!("LIA (start {start}) - Fullstack (Java backend + frontend) - Förfrågan"),
            format!(
                "Jag heter {} och studerar till {} på {}. \
                 Jag söker en LIA-plats med start {start} och hör av mig på eget initiativ.",
                ctx.full_name(),
                ctx.program(),
                ctx.school()
            ),
        ),
    };

    let mut sections = vec![
        "Hej!".to_string(),
        intro,
        format!(
            "Jag är intresserad av {company} eftersom ni arbetar med {}. \
             Jag trivs där kvalitet, lärande och samarbete står i centrum och vill gärna \
             bidra praktiskt i teamet, både i Java-backend och i frontend.",
            ctx.stack()
        ),
    ];

    let align = ctx.alignment_paragraph();
    if !align.is_empty() {
        sections.push(align);
    }

    let projects = ctx.projects();
    if !projects.is_empty() {
        sections.push(format!(
            "Under utbildningen har jag byggt praktiska projekt ({projects}) \
             och arbetar strukturerat med clean code, TDD och Git."
        ));
    }

    sections.push(format!(
        "Skulle ni kunna tänka er att ta emot en LIA-student med start {start}? \
         Jag skickar gärna CV och personligt brev, eller bokar ett kort samtal."
    ));

    let mut signature = format!("Vänliga hälsningar,\n{}", ctx.full_name());
    let contact = ctx.contact_line();
    if !contact.is_empty() {
        signature.push('\n');
        signature.push_str(&contact);
    }
    sections.push(signature);

    (subject, format!("{}\n", sections.join("\n\n")))
}

pub fn draft_linkedin_dm(ctx: &OutreachContext<'_>) -> String {
    format!(
        "Hej! Jag heter {} och studerar till {} på {}. \
         Jag söker LIA med start {} och har fullstackfokus (Java backend + frontend). \
         Jag såg att ni jobbar med {} och undrar om ni kan tänka er att ta emot en LIA-student? \
         Jag skickar gärna CV och en kort presentation. Tack!",
        ctx.full_name(),
        ctx.program(),
        ctx.school(),
        ctx.lia_start,
        ctx.stack()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverLetterVariant {
    Short,
    Standard,
}

impl CoverLetterVariant {
    pub const ALL: [CoverLetterVariant; 2] = [CoverLetterVariant::Short, CoverLetterVariant::Standard];

    pub fn file_name(self) -> &'static str {
        match self {
            CoverLetterVariant::Short => "personligt_brev_kort.docx",
            CoverLetterVariant::Standard => "personligt_brev_standard.docx",
        }
    }
}

pub fn draft_cover_letter(ctx: &OutreachContext<'_>, variant: CoverLetterVariant) -> DocumentDraft {
    let strengths = &ctx.profile.profile;
    let backend = join_clean(&strengths.backend_strengths);
    let frontend = join_clean(&strengths.frontend_strengths);
    let company = &ctx.company.name;

    let mut doc = DocumentDraft::default();
    doc.heading(1, "Personligt brev");
    doc.para(ctx.alignment_paragraph());
    doc.para(format!("Hej {company},"));
    doc.para(format!(
        "Jag studerar till {} på {} och söker en LIA-plats med start {}. \
         Jag är intresserad av {company} eftersom er inriktning matchar det jag vill utvecklas inom: {}.",
        ctx.program(),
        ctx.school(),
        ctx.lia_start,
        ctx.stack()
    ));

    match variant {
        CoverLetterVariant::Short => {
            doc.para(format!(
                "Tekniskt trivs jag i backend med {backend} och vill även bidra i frontend med {frontend}. \
                 Jag uppskattar code reviews, tydlig struktur och fokus på kvalitet."
            ));
        }
        CoverLetterVariant::Standard => {
            doc.para(format!(
                "Under utbildningen har jag byggt flera praktiska projekt i Java med fokus på \
                 struktur, testbar kod och versionshantering. Tekniskt trivs jag i backend med {backend}. \
                 Samtidigt vill jag utvecklas i frontend med {frontend} och bygga funktioner hela vägen \
                 från API till gränssnitt."
            ));
            if !strengths.projects.is_empty() {
                let bullets: Vec<String> = strengths
                    .projects
                    .iter()
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .map(|p| format!("• {p}"))
                    .collect();
                doc.para(format!("Som exempel har jag byggt:\n{}", bullets.join("\n")));
            }
            doc.para(strengths.prior_experience_summary.trim());
        }
    }

    doc.para(
        "Jag bifogar mitt CV och berättar gärna mer i ett kort samtal. \
         Tack för att ni tar er tid att läsa.",
    );
    doc.para("Vänliga hälsningar,");
    doc.para(ctx.full_name());
    doc.para(ctx.contact_line());
    doc
}

pub fn draft_cv_highlights(ctx: &OutreachContext<'_>) -> DocumentDraft {
    let strengths = &ctx.profile.profile;
    let mut doc = DocumentDraft::default();
    doc.heading(1, "CV Highlights - LIA Fullstack (Java + Frontend)");
    doc.para(format!("Namn: {}", ctx.full_name()));
    doc.para(format!("Mål: LIA start {}", ctx.lia_start));
    doc.para(format!("Företag: {}", ctx.company.name));
    doc.para(format!("Fokus: {}", ctx.stack()));
    doc.heading(2, "Styrkor");
    doc.para(format!("• Backend: {}", join_clean(&strengths.backend_strengths)));
    doc.para(format!("• Frontend: {}", join_clean(&strengths.frontend_strengths)));
    doc.para("• Arbetssätt: Git, struktur, ansvarstagande, samarbete och kontinuerligt lärande.");
    doc
}
