//! Normalized nodes, ready for the rendering pass.

use serde::{Deserialize, Serialize};

/// A normalized node: a paragraph with its final inline markup, or a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A rendered paragraph
    Paragraph(ParagraphNode),

    /// A table whose cells hold their own node sequences
    Table(TableNode),
}

impl From<ParagraphNode> for Node {
    fn from(node: ParagraphNode) -> Self {
        Node::Paragraph(node)
    }
}

impl From<TableNode> for Node {
    fn from(node: TableNode) -> Self {
        Node::Table(node)
    }
}

/// One paragraph with its inline markup already applied.
///
/// An empty `text` is the drop sentinel: such nodes never reach the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphNode {
    /// Final markup fragment (heading marker or paragraph wrapper included)
    pub text: String,

    /// List membership; None for body paragraphs and headings
    pub list: Option<ListMembership>,
}

impl ParagraphNode {
    /// A paragraph outside any list.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            list: None,
        }
    }

    /// A list item paragraph.
    pub fn list_item(text: impl Into<String>, list_id: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            list: Some(ListMembership {
                list_id: list_id.into(),
                nesting_level: level,
            }),
        }
    }

    /// The drop sentinel.
    pub fn dropped() -> Self {
        Self::default()
    }

    /// Check if this is the drop sentinel.
    pub fn is_dropped(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this paragraph is a list item.
    pub fn is_list_item(&self) -> bool {
        self.list.is_some()
    }
}

/// The list a paragraph belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMembership {
    /// Identifier into the list table
    pub list_id: String,

    /// Nesting level (0 = outermost)
    pub nesting_level: usize,
}

/// A normalized table. The first row is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNode {
    /// Rows in document order
    pub rows: Vec<TableRowNode>,
}

/// A normalized table row. Cells without renderable content are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowNode {
    /// Cells in document order
    pub cells: Vec<TableCellNode>,
}

/// A normalized table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCellNode {
    /// Cell content, rendered recursively
    pub nodes: Vec<Node>,

    /// Number of rows this cell spans
    pub row_span: u32,

    /// Number of columns this cell spans
    pub col_span: u32,
}

impl TableCellNode {
    /// Create a cell spanning a single row and column.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Set the spans and return self.
    pub fn with_spans(mut self, row_span: u32, col_span: u32) -> Self {
        self.row_span = row_span.max(1);
        self.col_span = col_span.max(1);
        self
    }
}
