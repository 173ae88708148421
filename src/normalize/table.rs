//! Table normalization.

use crate::error::{Error, Result};
use crate::model::{Table, TableCellNode, TableNode, TableRowNode};

use super::Normalizer;

impl Normalizer<'_> {
    /// Normalize a table found inside `depth` enclosing tables.
    ///
    /// Every cell's content goes through the full node normalization.
    /// Cells left with no nodes are dropped; rows are kept even if empty.
    pub fn table(&self, table: &Table, depth: usize) -> Result<TableNode> {
        if depth >= self.max_depth {
            return Err(Error::NestingTooDeep(self.max_depth));
        }

        let mut rows = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let mut cells = Vec::with_capacity(row.cells.len());
            for cell in &row.cells {
                let nodes = self.normalize_at(&cell.content, depth + 1)?;
                if nodes.is_empty() {
                    continue;
                }
                cells.push(TableCellNode::new(nodes).with_spans(cell.row_span, cell.col_span));
            }
            rows.push(TableRowNode { cells });
        }

        Ok(TableNode { rows })
    }
}
