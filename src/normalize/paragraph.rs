//! Paragraph normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Paragraph, ParagraphNode};
use crate::render::compose_run;

use super::Normalizer;

/// Auto-numbering label the source format injects into heading text.
static HEADING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*\.?\s+").expect("heading label pattern"));

impl Normalizer<'_> {
    /// Normalize one paragraph.
    ///
    /// Headings take the raw text of their runs; body paragraphs compose
    /// each run's styles. A paragraph without visible text yields the
    /// drop sentinel, which never carries list membership.
    pub fn paragraph(&self, para: &Paragraph) -> ParagraphNode {
        let heading = para.style.named_style.heading_level();

        let mut text = String::new();
        for run in &para.runs {
            match heading {
                Some(_) => text.push_str(&self.markup.escape(&run.text)),
                None => text.push_str(&compose_run(self.markup, &run.text, &run.style)),
            }
        }

        if text.trim().is_empty() {
            return ParagraphNode::dropped();
        }

        let text = text.trim_matches('\n');
        let text = match heading {
            Some(level) => self.markup.heading(level, &strip_heading_label(text)),
            None => self.markup.paragraph(text, para.style.alignment),
        };

        match &para.bullet {
            Some(bullet) => ParagraphNode::list_item(text, &bullet.list_id, bullet.nesting_level),
            None => ParagraphNode::text(text),
        }
    }
}

/// Remove a leading `1.`, `2.3` or `4.5.6.` label from heading text.
pub(crate) fn strip_heading_label(text: &str) -> String {
    HEADING_LABEL.replace(text, "").into_owned()
}
