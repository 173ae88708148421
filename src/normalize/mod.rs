//! Node normalization.
//!
//! Turns the parsed block sequence into the node sequence the rendering
//! pass consumes. Paragraphs are composed into their final inline markup
//! here, so the renderer only deals with list and table structure.

mod paragraph;
mod table;

use crate::error::Result;
use crate::model::{Block, Node};
use crate::render::{Markup, RenderOptions};

/// Normalize a block sequence with the given backend.
pub fn normalize(
    blocks: &[Block],
    markup: &dyn Markup,
    options: &RenderOptions,
) -> Result<Vec<Node>> {
    Normalizer::new(markup, options.max_depth).normalize(blocks)
}

/// Block-to-node converter bound to one markup backend.
pub struct Normalizer<'a> {
    markup: &'a dyn Markup,
    max_depth: usize,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer. `max_depth` caps table nesting.
    pub fn new(markup: &'a dyn Markup, max_depth: usize) -> Self {
        Self { markup, max_depth }
    }

    /// Normalize a top-level block sequence.
    pub fn normalize(&self, blocks: &[Block]) -> Result<Vec<Node>> {
        let nodes = self.normalize_at(blocks, 0)?;
        log::debug!("normalized {} blocks into {} nodes", blocks.len(), nodes.len());
        Ok(nodes)
    }

    /// Normalize a block sequence nested inside `depth` tables.
    ///
    /// Paragraphs with no visible text are dropped. Tables are kept even
    /// when none of their cells survive.
    pub(crate) fn normalize_at(&self, blocks: &[Block], depth: usize) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(blocks.len());
        for block in blocks {
            match block {
                Block::Paragraph(para) => {
                    let node = self.paragraph(para);
                    if !node.is_dropped() {
                        nodes.push(Node::Paragraph(node));
                    }
                }
                Block::Table(table) => {
                    nodes.push(Node::Table(self.table(table, depth)?));
                }
            }
        }
        Ok(nodes)
    }
}
