//! Markup emission seam shared by the output backends.
//!
//! The normalization pass and the list state machine are identical for
//! every output flavour. Everything that differs (inline wrappers,
//! paragraph and list tags, how list items are numbered) goes through
//! [`Markup`].

use std::borrow::Cow;

use crate::model::{Alignment, ListKind, RgbColor};

use super::html::HtmlMarkup;
use super::markdown::MarkdownMarkup;
use super::{OutputFormat, RenderOptions};

/// Position of a list item within the open lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting level (0 = outermost)
    pub level: usize,

    /// Resolved kind of the item's list level
    pub kind: ListKind,

    /// 1-based item number for explicit numbering, 0 when not tracked
    pub ordinal: u32,
}

/// Tag emission for one output flavour.
pub trait Markup: Send + Sync {
    /// Escape raw document text for this flavour.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Wrap text in a hyperlink.
    fn link(&self, text: &str, url: &str) -> String;

    /// Wrap text as superscript.
    fn superscript(&self, text: &str) -> String {
        format!("<sup>{}</sup>", text)
    }

    /// Wrap text as subscript.
    fn subscript(&self, text: &str) -> String {
        format!("<sub>{}</sub>", text)
    }

    /// Wrap text in a highlight of the given color.
    fn highlight(&self, text: &str, color: &RgbColor) -> String {
        let [red, green, blue] = color.percentages();
        format!(
            "<mark style=\"background-color: rgb({}% {}% {}%)\">{}</mark>",
            red, green, blue, text
        )
    }

    /// Wrap text as underlined.
    fn underline(&self, text: &str) -> String {
        format!("<ins>{}</ins>", text)
    }

    /// Wrap text as bold.
    fn bold(&self, text: &str) -> String;

    /// Wrap text as italic.
    fn italic(&self, text: &str) -> String;

    /// Wrap text as struck through.
    fn strikethrough(&self, text: &str) -> String;

    /// Wrap the inline content of a body paragraph.
    fn paragraph(&self, text: &str, alignment: Alignment) -> String;

    /// Prefix heading text with its level marker. Levels outside 1-6 are clamped.
    fn heading(&self, level: u8, text: &str) -> String {
        format!("{} {}", "#".repeat(usize::from(level.clamp(1, 6))), text)
    }

    /// Opening tag of a list wrapper, if the flavour has one.
    fn list_open(&self, kind: ListKind) -> Option<String>;

    /// Closing tag of a list wrapper, if the flavour has one.
    fn list_close(&self, kind: ListKind) -> Option<String>;

    /// Whether the renderer must count items for this flavour.
    fn explicit_numbering(&self) -> bool {
        false
    }

    /// Output lines of one list item.
    fn list_item(&self, text: &str, item: &ListItem) -> Vec<String>;

    /// Opening tag of a table.
    fn table_open(&self) -> String {
        "<table>".to_string()
    }

    /// Closing tag of a table.
    fn table_close(&self) -> String {
        "</table>".to_string()
    }

    /// Opening tag of a table row.
    fn row_open(&self) -> String {
        "<tr>".to_string()
    }

    /// Closing tag of a table row.
    fn row_close(&self) -> String {
        "</tr>".to_string()
    }

    /// Opening tag of a table cell. Spans of 1 are omitted.
    fn cell_open(&self, header: bool, row_span: u32, col_span: u32) -> String {
        let tag = if header { "th" } else { "td" };
        let mut attrs = String::new();
        if row_span > 1 {
            attrs.push_str(&format!(" rowspan=\"{}\"", row_span));
        }
        if col_span > 1 {
            attrs.push_str(&format!(" colspan=\"{}\"", col_span));
        }
        format!("<{}{}>", tag, attrs)
    }

    /// Closing tag of a table cell.
    fn cell_close(&self, header: bool) -> String {
        if header {
            "</th>".to_string()
        } else {
            "</td>".to_string()
        }
    }
}

/// Build the backend selected by the options.
pub fn markup_for(options: &RenderOptions) -> Box<dyn Markup> {
    match options.format {
        OutputFormat::Html => Box::new(HtmlMarkup::new(options.escape_special_chars)),
        OutputFormat::Markdown => Box::new(MarkdownMarkup::new(
            options.escape_special_chars,
            options.list_marker,
        )),
    }
}
