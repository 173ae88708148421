//! JSON dump of the normalized node sequence.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Document, ListDefinitions, Metadata, Node};

use super::{DocumentRenderer, RenderOptions};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct NodeDump<'a> {
    metadata: &'a Metadata,
    lists: &'a ListDefinitions,
    nodes: Vec<Node>,
}

/// Convert a document to JSON.
///
/// The dump holds the normalized nodes as produced for the backend chosen
/// by `options`, together with the metadata and list table needed to
/// render them.
pub fn to_json(doc: &Document, options: &RenderOptions, format: JsonFormat) -> Result<String> {
    let nodes = DocumentRenderer::new(options.clone()).normalize(&doc.body)?;
    let dump = NodeDump {
        metadata: &doc.metadata,
        lists: &doc.lists,
        nodes,
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&dump),
        JsonFormat::Compact => serde_json::to_string(&dump),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
