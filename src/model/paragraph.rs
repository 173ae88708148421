//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph as read from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph, in document order
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,

    /// List membership, if this paragraph is a list item
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.named_style = NamedStyle::heading(level);
        p
    }

    /// Create a list item paragraph.
    pub fn list_item(text: impl Into<String>, list_id: impl Into<String>, level: usize) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet::new(list_id, level));
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Set the alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Get the raw text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.named_style.heading_level().is_some()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content, possibly ending with the paragraph's newline
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a text run with the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Create a hyperlinked text run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                link: Some(url.into()),
                ..Default::default()
            },
        )
    }
}

/// Inline styling of a text run.
///
/// Only the attributes that have a markup mapping are kept; everything
/// else the source format carries (fonts, sizes, colors) is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Hyperlink target
    pub link: Option<String>,

    /// Vertical offset (superscript/subscript)
    pub baseline_offset: BaselineOffset,

    /// Highlight color
    pub background_color: Option<RgbColor>,

    /// Underlined text
    pub underline: bool,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Strikethrough text
    pub strikethrough: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.link.as_deref().is_some_and(|url| !url.is_empty())
            || self.baseline_offset != BaselineOffset::None
            || self.background_color.is_some()
            || self.underline
            || self.bold
            || self.italic
            || self.strikethrough
    }
}

/// Vertical text offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineOffset {
    /// Normal baseline
    #[default]
    None,
    /// Raised text
    Superscript,
    /// Lowered text
    Subscript,
}

/// A color with fractional channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
}

impl RgbColor {
    /// Create a new color.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Channel values as whole percentages, truncated toward zero.
    pub fn percentages(&self) -> [i64; 3] {
        [self.red, self.green, self.blue].map(|c| (c * 100.0).trunc() as i64)
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Named style (normal text or heading)
    pub named_style: NamedStyle,

    /// Text alignment
    pub alignment: Alignment,
}

/// Named paragraph style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "lowercase")]
pub enum NamedStyle {
    /// Body text
    #[default]
    Normal,
    /// Heading of level 1-6
    Heading(u8),
}

impl NamedStyle {
    /// Create a heading style, clamping the level to 1-6.
    pub fn heading(level: u8) -> Self {
        NamedStyle::Heading(level.clamp(1, 6))
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NamedStyle::Heading(level) => Some((*level).clamp(1, 6)),
            NamedStyle::Normal => None,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No explicit alignment
    #[default]
    Unset,
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// The value of an `align` attribute, or None for the default alignment.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            Alignment::Unset | Alignment::Left => None,
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::Justify => Some("justify"),
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// Identifier into the document's list table
    pub list_id: String,

    /// Nesting level (0 = outermost)
    pub nesting_level: usize,
}

impl Bullet {
    /// Create a new bullet reference.
    pub fn new(list_id: impl Into<String>, nesting_level: usize) -> Self {
        Self {
            list_id: list_id.into(),
            nesting_level,
        }
    }
}
