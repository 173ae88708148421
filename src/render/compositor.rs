//! Inline style composition for a single text run.

use crate::model::{BaselineOffset, TextStyle};

use super::markup::Markup;

/// Produce the styled markup fragment for one text run.
///
/// Wrappers are applied innermost first: link, baseline offset,
/// highlight, underline, bold, italic, strikethrough. The run's
/// surrounding newlines are stripped before the first wrapper so they
/// never end up inside a tag. Unstyled runs, and runs with no visible
/// content, pass through unchanged.
pub fn compose_run(markup: &dyn Markup, text: &str, style: &TextStyle) -> String {
    let content = text.trim_matches('\n');
    if !style.has_styling() || content.trim().is_empty() {
        return markup.escape(text).into_owned();
    }

    let mut result = markup.escape(content).into_owned();

    if let Some(url) = style.link.as_deref().filter(|url| !url.is_empty()) {
        result = markup.link(&result, url);
    }

    match style.baseline_offset {
        BaselineOffset::Superscript => result = markup.superscript(&result),
        BaselineOffset::Subscript => result = markup.subscript(&result),
        BaselineOffset::None => {}
    }

    if let Some(ref color) = style.background_color {
        result = markup.highlight(&result, color);
    }

    if style.underline {
        result = markup.underline(&result);
    }
    if style.bold {
        result = markup.bold(&result);
    }
    if style.italic {
        result = markup.italic(&result);
    }
    if style.strikethrough {
        result = markup.strikethrough(&result);
    }

    result
}
