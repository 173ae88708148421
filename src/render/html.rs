//! HTML backend.

use std::borrow::Cow;

use crate::model::{Alignment, ListKind};

use super::markup::{ListItem, Markup};

/// HTML markup. Ordered list numbering is left to the browser.
#[derive(Debug, Clone, Default)]
pub struct HtmlMarkup {
    escape: bool,
}

impl HtmlMarkup {
    /// Create the HTML backend.
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }
}

impl Markup for HtmlMarkup {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            html_escape::encode_text(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    fn link(&self, text: &str, url: &str) -> String {
        let url = if self.escape {
            html_escape::encode_double_quoted_attribute(url)
        } else {
            Cow::Borrowed(url)
        };
        format!("<a href=\"{}\">{}</a>", url, text)
    }

    fn bold(&self, text: &str) -> String {
        format!("<b>{}</b>", text)
    }

    fn italic(&self, text: &str) -> String {
        format!("<i>{}</i>", text)
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("<s>{}</s>", text)
    }

    fn paragraph(&self, text: &str, alignment: Alignment) -> String {
        match alignment.attribute() {
            Some(align) => format!("<p align=\"{}\">{}</p>", align, text),
            None => format!("<p>{}</p>", text),
        }
    }

    fn list_open(&self, kind: ListKind) -> Option<String> {
        Some(match kind {
            ListKind::Unordered => "<ul>".to_string(),
            ListKind::Ordered(glyph) => format!(
                "<ol style=\"list-style-type: {};\">",
                glyph.css_list_style()
            ),
        })
    }

    fn list_close(&self, kind: ListKind) -> Option<String> {
        Some(match kind {
            ListKind::Unordered => "</ul>".to_string(),
            ListKind::Ordered(_) => "</ol>".to_string(),
        })
    }

    fn list_item(&self, text: &str, _item: &ListItem) -> Vec<String> {
        vec!["<li>".to_string(), text.to_string(), "</li>".to_string()]
    }
}
