//! Document-level types.

use super::{Block, Bullet, ListDefinitions};
use serde::{Deserialize, Serialize};

/// A parsed source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, identifiers)
    pub metadata: Metadata,

    /// Top-level content blocks, in document order
    pub body: Vec<Block>,

    /// List definitions referenced by list item paragraphs
    pub lists: ListDefinitions,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document body.
    pub fn add_block(&mut self, block: impl Into<Block>) {
        self.body.push(block.into());
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Collect every list reference in the body, including inside tables.
    pub fn bullets(&self) -> Vec<&Bullet> {
        let mut bullets = Vec::new();
        for block in &self.body {
            collect_bullets(block, &mut bullets);
        }
        bullets
    }
}

fn collect_bullets<'a>(block: &'a Block, out: &mut Vec<&'a Bullet>) {
    match block {
        Block::Paragraph(p) => out.extend(p.bullet.as_ref()),
        Block::Table(t) => {
            for inner in t.rows.iter().flat_map(|r| &r.cells).flat_map(|c| &c.content) {
                collect_bullets(inner, out);
            }
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Source document identifier
    pub document_id: Option<String>,

    /// Source revision identifier
    pub revision_id: Option<String>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table, TableCell, TableRow};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
        assert!(doc.lists.is_empty());
    }

    #[test]
    fn test_bullets() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::with_text("plain"));
        doc.add_block(Paragraph::list_item("one", "l1", 0));

        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::with_content(vec![
            Paragraph::list_item("nested", "l2", 1).into(),
        ])]));
        doc.add_block(table);

        let bullets = doc.bullets();
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[0].list_id, "l1");
        assert_eq!(bullets[1].nesting_level, 1);
    }

    #[test]
    fn test_metadata_with_title() {
        let metadata = Metadata::with_title("Quarterly report");
        assert_eq!(metadata.title.as_deref(), Some("Quarterly report"));
        assert!(metadata.document_id.is_none());
    }
}
