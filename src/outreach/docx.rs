// src/outreach/docx.rs
use std::fs::File;
use std::path::Path;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::error::{LiaError, Result};

use super::templates::{Block, DocumentDraft};

// Half-points, as Word stores them.
const HEADING1_SIZE: usize = 32;
const HEADING2_SIZE: usize = 26;

fn text_run(text: &str) -> Run {
    // Embedded newlines become soft line breaks inside the paragraph.
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn render_block(block: &Block) -> Paragraph {
    match block {
        Block::Heading { level, text } => {
            let size = if *level <= 1 { HEADING1_SIZE } else { HEADING2_SIZE };
            Paragraph::new().add_run(Run::new().add_text(text).bold().size(size))
        }
        Block::Paragraph(text) => Paragraph::new().add_run(text_run(text)),
    }
}

pub fn write_docx(path: &Path, draft: &DocumentDraft) -> Result<()> {
    let doc = draft
        .blocks
        .iter()
        .fold(Docx::new(), |doc, b| doc.add_paragraph(render_block(b)));

    let file = File::create(path).map_err(|e| LiaError::io(path, e))?;
    doc.build()
        .pack(file)
        .map_err(|e| LiaError::Document(format!("{}: {e}", path.display())))
}
