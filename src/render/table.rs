//! Table markup emission.

use crate::error::{Error, Result};
use crate::model::TableNode;

use super::renderer::RenderPass;

impl RenderPass<'_> {
    /// Emit a table found inside `depth` enclosing tables.
    ///
    /// The first row is the header row. Each cell's nodes are rendered as
    /// an independent sequence with its own list stack.
    pub(crate) fn render_table(
        &mut self,
        table: &TableNode,
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::NestingTooDeep(self.options.max_depth));
        }
        if self.collect_stats {
            self.stats.table_count += 1;
        }

        let markup = self.markup;
        out.push(markup.table_open());
        for (index, row) in table.rows.iter().enumerate() {
            let header = index == 0;
            out.push(markup.row_open());
            for cell in &row.cells {
                out.push(markup.cell_open(header, cell.row_span, cell.col_span));
                self.render_sequence(&cell.nodes, depth + 1, out)?;
                out.push(markup.cell_close(header));
                if self.collect_stats {
                    self.stats.cell_count += 1;
                }
            }
            out.push(markup.row_close());
        }
        out.push(markup.table_close());
        Ok(())
    }
}
