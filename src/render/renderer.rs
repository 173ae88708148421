//! Document renderer and the list rendering pass.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{Block, Document, ListDefinitions, ListMembership, Node, ParagraphNode};
use crate::normalize::Normalizer;

use super::list_stack::{ListStack, StackOp};
use super::markup::{markup_for, ListItem, Markup};
use super::{IntermediateLevels, RenderOptions, RenderResult, RenderStats};

/// Renders documents with one markup backend.
///
/// The renderer holds no per-document state. Every call runs its own
/// pass with a fresh list stack and fresh item counters, so one renderer
/// can be shared across threads.
pub struct DocumentRenderer {
    options: RenderOptions,
    markup: Box<dyn Markup>,
}

impl DocumentRenderer {
    /// Create a renderer for the given options.
    pub fn new(options: RenderOptions) -> Self {
        let markup = markup_for(&options);
        Self { options, markup }
    }

    /// Create a renderer with a custom backend.
    pub fn with_markup(options: RenderOptions, markup: Box<dyn Markup>) -> Self {
        Self { options, markup }
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Normalize blocks into the node sequence this renderer consumes.
    pub fn normalize(&self, blocks: &[Block]) -> Result<Vec<Node>> {
        Normalizer::new(self.markup.as_ref(), self.options.max_depth).normalize(blocks)
    }

    /// Render an already normalized node sequence.
    pub fn render_nodes(&self, nodes: &[Node], lists: &ListDefinitions) -> Result<String> {
        let mut pass = RenderPass::new(self, lists);
        pass.run(nodes)
    }

    /// Render a document.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let nodes = self.normalize(&doc.body)?;
        self.render_nodes(&nodes, &doc.lists)
    }

    /// Render a document and collect statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let nodes = self.normalize(&doc.body)?;
        let mut pass = RenderPass::new(self, &doc.lists);
        pass.collect_stats = true;
        let content = pass.run(&nodes)?;
        Ok(RenderResult::new(content, doc.metadata.clone(), pass.stats))
    }
}

/// State of one render invocation.
pub(crate) struct RenderPass<'a> {
    lists: &'a ListDefinitions,
    pub(crate) markup: &'a dyn Markup,
    pub(crate) options: &'a RenderOptions,
    /// Item counters per `(list_id, nesting_level)`; never reset
    counters: HashMap<(String, usize), u32>,
    pub(crate) collect_stats: bool,
    pub(crate) stats: RenderStats,
}

impl<'a> RenderPass<'a> {
    fn new(renderer: &'a DocumentRenderer, lists: &'a ListDefinitions) -> Self {
        Self {
            lists,
            markup: renderer.markup.as_ref(),
            options: &renderer.options,
            counters: HashMap::new(),
            collect_stats: renderer.options.collect_stats,
            stats: RenderStats::new(),
        }
    }

    fn run(&mut self, nodes: &[Node]) -> Result<String> {
        let mut lines = Vec::new();
        self.render_sequence(nodes, 0, &mut lines)?;
        Ok(lines.join("\n"))
    }

    /// Render a node sequence found inside `depth` enclosing tables.
    ///
    /// The list stack is local to the sequence, so lists never leak into
    /// or out of a table cell.
    pub(crate) fn render_sequence(
        &mut self,
        nodes: &[Node],
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let mut stack = ListStack::new();

        for node in nodes {
            match node {
                Node::Table(table) => {
                    self.emit(stack.close_all(), out);
                    self.render_table(table, depth, out)?;
                }
                Node::Paragraph(para) if para.is_dropped() => {}
                Node::Paragraph(para) => match &para.list {
                    Some(membership) => self.render_list_item(&mut stack, para, membership, out)?,
                    None => {
                        self.emit(stack.close_all(), out);
                        out.push(para.text.clone());
                        if self.collect_stats {
                            self.stats.paragraph_count += 1;
                        }
                    }
                },
            }
        }

        self.emit(stack.close_all(), out);
        Ok(())
    }

    fn render_list_item(
        &mut self,
        stack: &mut ListStack,
        para: &ParagraphNode,
        membership: &ListMembership,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let list_id = membership.list_id.as_str();
        let level = membership.nesting_level;
        let kind = self.lists.resolve(list_id, level)?;

        let ops = match self.options.intermediate_levels {
            IntermediateLevels::InheritDeepest => stack.enter(level, kind, |_| kind),
            IntermediateLevels::Resolve => {
                let lists = self.lists;
                // Levels below an already resolved level are always defined.
                stack.enter(level, kind, |missing| {
                    lists.resolve(list_id, missing).unwrap_or(kind)
                })
            }
        };
        self.emit(ops, out);

        let ordinal = if kind.is_ordered() && self.markup.explicit_numbering() {
            let counter = self
                .counters
                .entry((list_id.to_string(), level))
                .or_insert(0);
            *counter += 1;
            *counter
        } else {
            0
        };

        let item = ListItem {
            level,
            kind,
            ordinal,
        };
        out.extend(self.markup.list_item(para.text.trim(), &item));

        if self.collect_stats {
            self.stats.list_item_count += 1;
            self.stats.record_list_depth(stack.depth());
        }
        Ok(())
    }

    fn emit(&self, ops: Vec<StackOp>, out: &mut Vec<String>) {
        for op in ops {
            let tag = match op {
                StackOp::Open(frame) => self.markup.list_open(frame.kind),
                StackOp::Close(frame) => self.markup.list_close(frame.kind),
            };
            if let Some(tag) = tag {
                out.push(tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{GlyphType, NestingLevel};

    fn lists() -> ListDefinitions {
        ListDefinitions::new()
            .with_list("1", vec![NestingLevel::bulleted(); 4])
            .with_list(
                "2",
                vec![
                    NestingLevel::numbered(GlyphType::Decimal),
                    NestingLevel::numbered(GlyphType::Alpha),
                    NestingLevel::numbered(GlyphType::Roman),
                    NestingLevel::numbered(GlyphType::Decimal),
                ],
            )
    }

    fn item(list_id: &str, level: usize) -> Node {
        ParagraphNode::list_item("<p>Hello World.</p>", list_id, level).into()
    }

    fn para() -> Node {
        ParagraphNode::text("<p>Hello World.</p>").into()
    }

    fn html() -> DocumentRenderer {
        DocumentRenderer::new(RenderOptions::default())
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(html().render_nodes(&[], &lists()).unwrap(), "");
    }

    #[test]
    fn test_plain_paragraphs() {
        let out = html().render_nodes(&[para(), para()], &lists()).unwrap();
        assert_eq!(out, "<p>Hello World.</p>\n<p>Hello World.</p>");
    }

    #[test]
    fn test_flat_unordered_list() {
        let out = html()
            .render_nodes(&[item("1", 0), item("1", 0)], &lists())
            .unwrap();
        assert_eq!(
            out,
            "<ul>\n<li>\n<p>Hello World.</p>\n</li>\n<li>\n<p>Hello World.</p>\n</li>\n</ul>"
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        let out = html()
            .render_nodes(&[item("1", 0), item("1", 1), para()], &lists())
            .unwrap();
        assert!(out.ends_with("</ul>\n</ul>\n<p>Hello World.</p>"));
    }

    #[test]
    fn test_unknown_list_is_an_error() {
        let err = html().render_nodes(&[item("missing", 0)], &lists()).unwrap_err();
        assert!(matches!(err, Error::UnknownList { ref list_id, level: 0 } if list_id == "missing"));

        let err = html().render_nodes(&[item("1", 9)], &lists()).unwrap_err();
        assert!(matches!(err, Error::UnknownList { level: 9, .. }));
    }

    #[test]
    fn test_resolve_intermediate_levels() {
        let inherit = html().render_nodes(&[item("2", 2)], &lists()).unwrap();
        assert_eq!(
            inherit.lines().filter(|l| l.starts_with("<ol")).collect::<Vec<_>>(),
            vec!["<ol style=\"list-style-type: lower-roman;\">"; 3]
        );

        let renderer = DocumentRenderer::new(
            RenderOptions::default().with_intermediate_levels(IntermediateLevels::Resolve),
        );
        let resolved = renderer.render_nodes(&[item("2", 2)], &lists()).unwrap();
        assert_eq!(
            resolved.lines().filter(|l| l.starts_with("<ol")).collect::<Vec<_>>(),
            vec![
                "<ol style=\"list-style-type: decimal;\">",
                "<ol style=\"list-style-type: lower-alpha;\">",
                "<ol style=\"list-style-type: lower-roman;\">",
            ]
        );
    }

    #[test]
    fn test_resolve_rejects_level_past_list_definition() {
        let renderer = DocumentRenderer::new(
            RenderOptions::default().with_intermediate_levels(IntermediateLevels::Resolve),
        );
        let short = ListDefinitions::new()
            .with_list("short", vec![NestingLevel::numbered(GlyphType::Decimal)]);

        let err = renderer
            .render_nodes(&[item("short", 0), item("short", 2)], &short)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownList { level: 2, .. }));
    }

    struct PlainMarkup;

    impl Markup for PlainMarkup {
        fn escape<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
            std::borrow::Cow::Borrowed(text)
        }

        fn link(&self, text: &str, url: &str) -> String {
            format!("{} <{}>", text, url)
        }

        fn bold(&self, text: &str) -> String {
            text.to_uppercase()
        }

        fn italic(&self, text: &str) -> String {
            text.to_string()
        }

        fn strikethrough(&self, text: &str) -> String {
            text.to_string()
        }

        fn paragraph(&self, text: &str, _alignment: crate::model::Alignment) -> String {
            text.to_string()
        }

        fn list_open(&self, _kind: crate::model::ListKind) -> Option<String> {
            None
        }

        fn list_close(&self, _kind: crate::model::ListKind) -> Option<String> {
            None
        }

        fn list_item(&self, text: &str, item: &ListItem) -> Vec<String> {
            vec![format!("{}* {}", "  ".repeat(item.level), text)]
        }
    }

    #[test]
    fn test_custom_markup_backend() {
        let renderer =
            DocumentRenderer::with_markup(RenderOptions::default(), Box::new(PlainMarkup));

        let mut intro = crate::model::Paragraph::new();
        intro.add_text("Hello ");
        intro.add_run(crate::model::TextRun::bold("world"));
        intro.add_text("\n");

        let mut doc = Document::new();
        doc.lists = lists();
        doc.add_block(intro);
        doc.add_block(crate::model::Paragraph::list_item("Top\n", "1", 0));
        doc.add_block(crate::model::Paragraph::list_item("Nested\n", "1", 1));

        assert_eq!(renderer.render(&doc).unwrap(), "Hello WORLD\n* Top\n  * Nested");
    }

    #[test]
    fn test_markdown_counters_never_reset() {
        let renderer = DocumentRenderer::new(RenderOptions::default().markdown());
        let nodes = vec![
            ParagraphNode::list_item("One", "2", 0).into(),
            ParagraphNode::list_item("Sub", "2", 1).into(),
            ParagraphNode::list_item("Two", "2", 0).into(),
            ParagraphNode::text("Break").into(),
            ParagraphNode::list_item("Three", "2", 0).into(),
            ParagraphNode::list_item("Sub again", "2", 1).into(),
        ];
        let out = renderer.render_nodes(&nodes, &lists()).unwrap();
        assert_eq!(out, "1. One\n  a. Sub\n2. Two\nBreak\n3. Three\n  b. Sub again");
    }

    #[test]
    fn test_stats() {
        let doc = Document::new();
        let result = html().render_with_stats(&doc).unwrap();
        assert_eq!(result.stats, RenderStats::default());

        let mut doc = Document::new();
        doc.lists = lists();
        doc.add_block(crate::model::Paragraph::with_text("Intro\n"));
        doc.add_block(crate::model::Paragraph::list_item("A\n", "1", 0));
        doc.add_block(crate::model::Paragraph::list_item("B\n", "1", 1));
        let result = html().render_with_stats(&doc).unwrap();
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.list_item_count, 2);
        assert_eq!(result.stats.max_list_depth, 2);
    }
}
