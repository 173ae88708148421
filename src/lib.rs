//! # gdocmark
//!
//! Google Docs document JSON to HTML and Markdown conversion for Rust.
//!
//! This library reads the JSON structure of a Google Docs document and
//! renders it as an HTML fragment or as Markdown, keeping headings,
//! inline styles, nested lists and tables with merged cells.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gdocmark::{parse_file, render};
//!
//! fn main() -> gdocmark::Result<()> {
//!     // Parse a document export
//!     let doc = parse_file("document.json")?;
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two output formats**: HTML fragments and Markdown, plus a JSON node dump
//! - **Inline styles**: bold, italic, underline, strikethrough, sub/superscript, highlight, links
//! - **Nested lists**: balanced list markup for arbitrary nesting and kind switches
//! - **Tables**: merged cells and tables nested inside cells
//! - **Parallel processing**: Uses Rayon for batch rendering

pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, GlyphType, ListDefinitions, ListKind, Metadata, Node, Paragraph,
    ParagraphNode, ParagraphStyle, Table, TableCell, TableNode, TableRow, TextRun, TextStyle,
};
pub use parser::{DocParser, ErrorMode, ParseOptions};
pub use render::{
    IntermediateLevels, JsonFormat, OutputFormat, RenderOptions, RenderResult, RenderStats,
};

use std::io::Read;
use std::path::Path;

/// Parse a document JSON file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Example
///
/// ```no_run
/// use gdocmark::parse_file;
///
/// let doc = parse_file("document.json").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocParser::open(path)?;
    parser.parse()
}

/// Parse a document JSON file with custom options.
///
/// # Example
///
/// ```no_run
/// use gdocmark::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict();
/// let doc = parse_file_with_options("document.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a document from a JSON string.
///
/// # Example
///
/// ```
/// use gdocmark::parse_str;
///
/// let doc = parse_str(r#"{"body": {"content": []}}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    let parser = DocParser::from_json(json)?;
    parser.parse()
}

/// Parse a document from a JSON string with custom options.
pub fn parse_str_with_options(json: &str, options: ParseOptions) -> Result<Document> {
    let parser = DocParser::from_json_with_options(json, options)?;
    parser.parse()
}

/// Parse a document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocParser::from_slice(data)?;
    parser.parse()
}

/// Parse a document from JSON bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocParser::from_slice_with_options(data, options)?;
    parser.parse()
}

/// Parse a document from a reader.
///
/// # Example
///
/// ```no_run
/// use gdocmark::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = DocParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Convert a document JSON file to HTML.
///
/// # Example
///
/// ```no_run
/// use gdocmark::to_html;
///
/// let html = to_html("document.json").unwrap();
/// std::fs::write("output.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default())
}

/// Convert a document JSON file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Convert a document JSON file to Markdown.
///
/// # Example
///
/// ```no_run
/// use gdocmark::to_markdown;
///
/// let markdown = to_markdown("document.json").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &RenderOptions::default())
}

/// Convert a document JSON file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use gdocmark::{to_markdown_with_options, IntermediateLevels, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_list_marker('*')
///     .with_intermediate_levels(IntermediateLevels::Resolve);
/// let markdown = to_markdown_with_options("document.json", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use gdocmark::Gdocmark;
///
/// let markdown = Gdocmark::new()
///     .strict()
///     .resolve_intermediate_levels()
///     .parse("document.json")?
///     .to_markdown()?;
/// # Ok::<(), gdocmark::Error>(())
/// ```
pub struct Gdocmark {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Gdocmark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Render Markdown from [`GdocmarkResult::render`].
    pub fn markdown(mut self) -> Self {
        self.render_options = self.render_options.markdown();
        self
    }

    /// Render HTML from [`GdocmarkResult::render`].
    pub fn html(mut self) -> Self {
        self.render_options = self.render_options.html();
        self
    }

    /// Reject unresolvable list references while parsing.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Open skipped list levels with their own definitions.
    pub fn resolve_intermediate_levels(mut self) -> Self {
        self.render_options = self
            .render_options
            .with_intermediate_levels(IntermediateLevels::Resolve);
        self
    }

    /// Escape characters that are special in the output markup.
    pub fn escape_special_chars(mut self) -> Self {
        self.render_options = self.render_options.with_escaping(true);
        self
    }

    /// Set the Markdown bullet character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Set the maximum table nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.render_options = self.render_options.with_max_depth(depth);
        self
    }

    /// Parse a document file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<GdocmarkResult> {
        let parser = DocParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(GdocmarkResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a document from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<GdocmarkResult> {
        let parser = DocParser::from_json_with_options(json, self.parse_options)?;
        let document = parser.parse()?;
        Ok(GdocmarkResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Gdocmark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document.
pub struct GdocmarkResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl GdocmarkResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Render in the configured format.
    pub fn render(&self) -> Result<String> {
        render::render(&self.document, &self.render_options)
    }

    /// Render in the configured format with statistics.
    pub fn render_with_stats(&self) -> Result<RenderResult> {
        render::render_with_stats(&self.document, &self.render_options)
    }

    /// Dump the normalized nodes as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, &self.render_options, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
