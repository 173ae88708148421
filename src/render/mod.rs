//! Rendering module for converting documents to HTML and Markdown.
//!
//! Rendering runs in two steps. [`normalize`] turns the parsed blocks into
//! nodes carrying their final inline markup, then [`render_nodes`] walks
//! the nodes with an open-list stack and emits balanced list and table
//! markup. Both steps go through a [`Markup`] backend.

mod compositor;
mod html;
mod json;
mod list_stack;
mod markdown;
mod markup;
mod options;
mod renderer;
mod result;
mod table;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Document, ListDefinitions, Node};

pub use crate::normalize::normalize;
pub use compositor::compose_run;
pub use html::HtmlMarkup;
pub use json::{to_json, JsonFormat};
pub use list_stack::{Frame, ListStack, StackOp};
pub use markdown::{list_label, MarkdownMarkup};
pub use markup::{markup_for, ListItem, Markup};
pub use options::{IntermediateLevels, OutputFormat, RenderOptions};
pub use renderer::DocumentRenderer;
pub use result::{RenderResult, RenderStats};

/// Render a normalized node sequence.
pub fn render_nodes(
    nodes: &[Node],
    lists: &ListDefinitions,
    options: &RenderOptions,
) -> Result<String> {
    DocumentRenderer::new(options.clone()).render_nodes(nodes, lists)
}

/// Render a document in the format selected by `options`.
pub fn render(doc: &Document, options: &RenderOptions) -> Result<String> {
    DocumentRenderer::new(options.clone()).render(doc)
}

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    render(doc, &options.clone().html())
}

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    render(doc, &options.clone().markdown())
}

/// Render a document with statistics.
pub fn render_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let options = options.clone().with_stats(true);
    DocumentRenderer::new(options).render_with_stats(doc)
}

/// Render independent documents in parallel.
///
/// Results are returned in input order. A failure in one document does
/// not affect the others.
pub fn render_batch(docs: &[Document], options: &RenderOptions) -> Vec<Result<String>> {
    let renderer = DocumentRenderer::new(options.clone());
    docs.par_iter().map(|doc| renderer.render(doc)).collect()
}
