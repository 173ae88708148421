//! Markdown backend.

use std::borrow::Cow;

use crate::model::{Alignment, GlyphType, ListKind};

use super::markup::{ListItem, Markup};

/// Markdown markup with explicit list numbering.
///
/// Markdown has no alignment or highlight syntax, so those fall back to
/// inline HTML. List wrappers produce no output; nesting is expressed by
/// indentation only.
#[derive(Debug, Clone)]
pub struct MarkdownMarkup {
    escape: bool,
    list_marker: char,
}

impl MarkdownMarkup {
    /// Create the Markdown backend.
    pub fn new(escape: bool, list_marker: char) -> Self {
        Self {
            escape,
            list_marker,
        }
    }
}

impl Default for MarkdownMarkup {
    fn default() -> Self {
        Self::new(false, '-')
    }
}

impl Markup for MarkdownMarkup {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(escape_markdown(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn link(&self, text: &str, url: &str) -> String {
        format!("[{}]({})", text, url)
    }

    fn bold(&self, text: &str) -> String {
        format!("**{}**", text)
    }

    fn italic(&self, text: &str) -> String {
        format!("*{}*", text)
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("~~{}~~", text)
    }

    fn paragraph(&self, text: &str, alignment: Alignment) -> String {
        match alignment.attribute() {
            Some(align) => format!("<p align=\"{}\">{}</p>", align, text),
            None => text.to_string(),
        }
    }

    fn list_open(&self, _kind: ListKind) -> Option<String> {
        None
    }

    fn list_close(&self, _kind: ListKind) -> Option<String> {
        None
    }

    fn explicit_numbering(&self) -> bool {
        true
    }

    fn list_item(&self, text: &str, item: &ListItem) -> Vec<String> {
        let indent = "  ".repeat(item.level);
        let marker = match item.kind {
            ListKind::Unordered => self.list_marker.to_string(),
            ListKind::Ordered(glyph) => format!("{}.", list_label(item.ordinal, glyph)),
        };
        vec![format!("{}{} {}", indent, marker, text)]
    }
}

/// Label of the `num`-th item (1-based) in the given numbering scheme.
pub fn list_label(num: u32, glyph: GlyphType) -> String {
    match glyph {
        GlyphType::Decimal => num.to_string(),
        GlyphType::Alpha => to_alpha(num),
        GlyphType::UpperAlpha => to_alpha(num).to_uppercase(),
        GlyphType::Roman => to_roman(num).to_lowercase(),
        GlyphType::UpperRoman => to_roman(num),
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' | '~' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Convert number to lowercase letters: a..z, aa, ab, ...
fn to_alpha(mut num: u32) -> String {
    if num == 0 {
        return String::new();
    }
    let mut letters = Vec::new();
    while num > 0 {
        num -= 1;
        letters.push(char::from(b'a' + (num % 26) as u8));
        num /= 26;
    }
    letters.iter().rev().collect()
}

/// Convert number to Roman numerals.
fn to_roman(mut num: u32) -> String {
    let numerals = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (value, symbol) in numerals {
        while num >= value {
            result.push_str(symbol);
            num -= value;
        }
    }
    result
}
