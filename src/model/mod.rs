//! Document model types.
//!
//! Two layers live here. The descriptor model ([`Document`], [`Block`],
//! [`Paragraph`], [`Table`]) mirrors the source document after parsing.
//! The normalized model ([`Node`]) is what the rendering pass consumes:
//! paragraphs carry their final inline markup and tables carry node
//! sequences per cell.

mod block;
mod document;
mod list;
mod node;
mod paragraph;
mod table;

pub use block::Block;
pub use document::{Document, Metadata};
pub use list::{GlyphType, ListDefinitions, ListKind, NestingLevel};
pub use node::{ListMembership, Node, ParagraphNode, TableCellNode, TableNode, TableRowNode};
pub use paragraph::{
    Alignment, BaselineOffset, Bullet, NamedStyle, Paragraph, ParagraphStyle, RgbColor, TextRun,
    TextStyle,
};
pub use table::{Table, TableCell, TableRow};
