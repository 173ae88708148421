//! Integration tests for normalization and list/table rendering.

use gdocmark::model::{
    Alignment, Block, Document, GlyphType, ListDefinitions, NestingLevel, Node, Paragraph,
    ParagraphNode, RgbColor, Table, TableCell, TableCellNode, TableNode, TableRow, TableRowNode,
    TextRun, TextStyle,
};
use gdocmark::render::{
    self, compose_run, normalize, render_nodes, HtmlMarkup, IntermediateLevels, OutputFormat,
    RenderOptions,
};
use gdocmark::Error;

const HELLO: &str = "<p>Hello World.</p>";

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
    ParagraphNode::list_item(HELLO, list_id, level).into()
}

fn html(nodes: &[Node]) -> String {
    render_nodes(nodes, &lists(), &RenderOptions::default()).unwrap()
}

fn lines(parts: &[&str]) -> String {
    parts.join("\n")
}

// ==================== List Rendering ====================

#[test]
fn test_basic_nodes() {
    let nodes = vec![ParagraphNode::text(HELLO).into(), ParagraphNode::text(HELLO).into()];
    assert_eq!(html(&nodes), lines(&[HELLO, HELLO]));
}

#[test]
fn test_basic_unordered_list() {
    assert_eq!(
        html(&[item("1", 0), item("1", 0)]),
        lines(&["<ul>", "<li>", HELLO, "</li>", "<li>", HELLO, "</li>", "</ul>"])
    );
}

#[test]
fn test_nested_unordered_list() {
    let nodes = [item("1", 0), item("1", 1), item("1", 2), item("1", 0)];
    assert_eq!(
        html(&nodes),
        lines(&[
            "<ul>", "<li>", HELLO, "</li>", "<ul>", "<li>", HELLO, "</li>", "<ul>", "<li>", HELLO,
            "</li>", "</ul>", "</ul>", "<li>", HELLO, "</li>", "</ul>",
        ])
    );
}

#[test]
fn test_basic_ordered_list() {
    assert_eq!(
        html(&[item("2", 0), item("2", 0)]),
        lines(&[
            "<ol style=\"list-style-type: decimal;\">",
            "<li>",
            HELLO,
            "</li>",
            "<li>",
            HELLO,
            "</li>",
            "</ol>",
        ])
    );
}

#[test]
fn test_nested_ordered_list() {
    let nodes = [item("2", 0), item("2", 1), item("2", 2), item("2", 0)];
    assert_eq!(
        html(&nodes),
        lines(&[
            "<ol style=\"list-style-type: decimal;\">",
            "<li>",
            HELLO,
            "</li>",
            "<ol style=\"list-style-type: lower-alpha;\">",
            "<li>",
            HELLO,
            "</li>",
            "<ol style=\"list-style-type: lower-roman;\">",
            "<li>",
            HELLO,
            "</li>",
            "</ol>",
            "</ol>",
            "<li>",
            HELLO,
            "</li>",
            "</ol>",
        ])
    );
}

#[test]
fn test_glyph_switch_at_same_level() {
    let lists = ListDefinitions::new()
        .with_list("dec", vec![NestingLevel::numbered(GlyphType::Decimal)])
        .with_list("alpha", vec![NestingLevel::numbered(GlyphType::Alpha)]);
    let nodes = [item("dec", 0), item("alpha", 0)];
    let out = render_nodes(&nodes, &lists, &RenderOptions::default()).unwrap();
    assert_eq!(
        out,
        lines(&[
            "<ol style=\"list-style-type: decimal;\">",
            "<li>",
            HELLO,
            "</li>",
            "</ol>",
            "<ol style=\"list-style-type: lower-alpha;\">",
            "<li>",
            HELLO,
            "</li>",
            "</ol>",
        ])
    );
}

#[test]
fn test_unordered_to_ordered_switch() {
    let nodes = [item("1", 0), item("2", 0)];
    let out = html(&nodes);
    assert!(out.contains("</ul>\n<ol style=\"list-style-type: decimal;\">"));
    assert_eq!(out.matches("<ul>").count(), 1);
}

#[test]
fn test_empty_sequence_renders_nothing() {
    assert_eq!(html(&[]), "");
    let doc = Document::new();
    assert_eq!(render::to_html(&doc, &RenderOptions::default()).unwrap(), "");
    assert_eq!(render::to_markdown(&doc, &RenderOptions::default()).unwrap(), "");
}

#[test]
fn test_tags_are_balanced() {
    let nodes = [
        item("1", 0),
        item("1", 3),
        item("2", 1),
        ParagraphNode::text(HELLO).into(),
        item("2", 2),
        item("1", 0),
    ];
    let out = html(&nodes);
    let opens = out.matches("<ul>").count() + out.matches("<ol ").count();
    let closes = out.matches("</ul>").count() + out.matches("</ol>").count();
    assert_eq!(opens, closes);
    assert_eq!(out.matches("<li>").count(), 5);
    assert!(out.ends_with("</ul>"));
}

#[test]
fn test_unknown_list_reference_fails() {
    let err = render_nodes(&[item("3", 0)], &lists(), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownList { ref list_id, level: 0 } if list_id == "3"));
}

#[test]
fn test_intermediate_levels_resolved() {
    let options = RenderOptions::default().with_intermediate_levels(IntermediateLevels::Resolve);
    let out = render_nodes(&[item("2", 1)], &lists(), &options).unwrap();
    assert!(out.starts_with(
        "<ol style=\"list-style-type: decimal;\">\n<ol style=\"list-style-type: lower-alpha;\">"
    ));
}

// ==================== Tables ====================

#[test]
fn test_table_cell_lists_are_isolated() {
    let cell_a = TableCellNode::new(vec![item("1", 0), item("1", 1)]);
    let cell_b = TableCellNode::new(vec![item("2", 0)]);
    let table = TableNode {
        rows: vec![TableRowNode {
            cells: vec![cell_a, cell_b],
        }],
    };
    let nodes = [item("1", 0), table.into(), item("1", 0)];

    let out = html(&nodes);
    let expected = lines(&[
        "<ul>", "<li>", HELLO, "</li>", "</ul>", "<table>", "<tr>", "<th>", "<ul>", "<li>", HELLO,
        "</li>", "<ul>", "<li>", HELLO, "</li>", "</ul>", "</ul>", "</th>", "<th>",
        "<ol style=\"list-style-type: decimal;\">", "<li>", HELLO, "</li>", "</ol>", "</th>",
        "</tr>", "</table>", "<ul>", "<li>", HELLO, "</li>", "</ul>",
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_nested_table_document() {
    let mut inner = Table::new();
    inner.add_row(TableRow::from_strings(["Inner\n"]));

    let mut outer = Table::new();
    outer.add_row(TableRow::from_strings(["Name\n", "Value\n"]));
    outer.add_row(TableRow::new(vec![
        TableCell::with_content(vec![inner.into()]).colspan(2),
    ]));

    let mut doc = Document::new();
    doc.add_block(outer);

    let out = render::to_html(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(
        out,
        lines(&[
            "<table>",
            "<tr>",
            "<th>",
            "<p>Name</p>",
            "</th>",
            "<th>",
            "<p>Value</p>",
            "</th>",
            "</tr>",
            "<tr>",
            "<td colspan=\"2\">",
            "<table>",
            "<tr>",
            "<th>",
            "<p>Inner</p>",
            "</th>",
            "</tr>",
            "</table>",
            "</td>",
            "</tr>",
            "</table>",
        ])
    );

    let result = render::render_with_stats(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(result.stats.table_count, 2);
    assert_eq!(result.stats.cell_count, 4);
}

#[test]
fn test_table_depth_limit() {
    let mut table = Table::new();
    table.add_row(TableRow::from_strings(["x"]));
    for _ in 0..4 {
        let mut outer = Table::new();
        outer.add_row(TableRow::new(vec![TableCell::with_content(vec![table.into()])]));
        table = outer;
    }
    let mut doc = Document::new();
    doc.add_block(table);

    let shallow = RenderOptions::default().with_max_depth(3);
    assert!(matches!(
        render::to_html(&doc, &shallow),
        Err(Error::NestingTooDeep(3))
    ));
    assert!(render::to_html(&doc, &RenderOptions::default()).is_ok());
}

// ==================== Normalization ====================

#[test]
fn test_normalize_document_body() {
    let mut para = Paragraph::new();
    para.add_text("Hello ");
    para.add_run(TextRun::styled(
        "World",
        TextStyle {
            bold: true,
            background_color: Some(RgbColor::new(1.0, 1.0, 0.0)),
            ..Default::default()
        },
    ));
    para.add_text(".\n");

    let blocks: Vec<Block> = vec![
        Paragraph::heading("1.1 Hello World.\n", 1).into(),
        Paragraph::with_text("\n").into(),
        para.into(),
        Paragraph::with_text("Centered\n").align(Alignment::Center).into(),
    ];

    let markup = HtmlMarkup::default();
    let nodes = normalize(&blocks, &markup, &RenderOptions::default()).unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::from(ParagraphNode::text("# Hello World.")),
            Node::from(ParagraphNode::text(
                "<p>Hello <b><mark style=\"background-color: rgb(100% 100% 0%)\">World</mark></b>.</p>"
            )),
            Node::from(ParagraphNode::text("<p align=\"center\">Centered</p>")),
        ]
    );
}

#[test]
fn test_compositor_output_is_stable() {
    let markup = HtmlMarkup::default();
    let style = TextStyle {
        underline: true,
        link: Some("https://hello-world.com".into()),
        ..Default::default()
    };
    let once = compose_run(&markup, "Hello world\n", &style);
    assert_eq!(
        once,
        "<ins><a href=\"https://hello-world.com\">Hello world</a></ins>"
    );
    assert_eq!(compose_run(&markup, &once, &TextStyle::default()), once);
}

// ==================== Markdown ====================

fn markdown_doc() -> Document {
    let mut doc = Document::new();
    doc.lists = lists();
    doc.add_block(Paragraph::heading("2. Steps\n", 2));
    doc.add_block(Paragraph::list_item("First\n", "2", 0));
    doc.add_block(Paragraph::list_item("Detail\n", "2", 1));
    doc.add_block(Paragraph::list_item("Deeper\n", "2", 2));
    doc.add_block(Paragraph::list_item("Second\n", "2", 0));
    doc.add_block(Paragraph::with_text("Notes\n"));
    doc.add_block(Paragraph::list_item("Bullet\n", "1", 0));
    doc.add_block(Paragraph::list_item("Third\n", "2", 0));
    doc
}

#[test]
fn test_markdown_explicit_numbering() {
    let out = render::to_markdown(&markdown_doc(), &RenderOptions::default()).unwrap();
    assert_eq!(
        out,
        lines(&[
            "## Steps",
            "1. First",
            "  a. Detail",
            "    i. Deeper",
            "2. Second",
            "Notes",
            "- Bullet",
            "3. Third",
        ])
    );
}

#[test]
fn test_markdown_counters_shared_with_tables() {
    let mut doc = Document::new();
    doc.lists = lists();
    doc.add_block(Paragraph::list_item("Outside\n", "2", 0));
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![TableCell::with_content(vec![
        Paragraph::list_item("Inside\n", "2", 0).into(),
    ])]));
    doc.add_block(table);

    let options = RenderOptions::default().with_format(OutputFormat::Markdown);
    let out = render::render(&doc, &options).unwrap();
    assert!(out.starts_with("1. Outside\n<table>"));
    assert!(out.contains("<th>\n2. Inside\n</th>"));
}

#[test]
fn test_markdown_marker_and_escaping() {
    let mut doc = Document::new();
    doc.lists = lists();
    doc.add_block(Paragraph::list_item("a*b\n", "1", 0));

    let options = RenderOptions::default()
        .with_list_marker('+')
        .with_escaping(true);
    assert_eq!(render::to_markdown(&doc, &options).unwrap(), "+ a\\*b");
}

#[test]
fn test_html_escaping() {
    let mut doc = Document::new();
    doc.add_block(Paragraph::with_text("a < b & c\n"));
    let options = RenderOptions::default().with_escaping(true);
    assert_eq!(
        render::to_html(&doc, &options).unwrap(),
        "<p>a &lt; b &amp; c</p>"
    );
    assert_eq!(
        render::to_html(&doc, &RenderOptions::default()).unwrap(),
        "<p>a < b & c</p>"
    );
}

#[test]
fn test_render_batch() {
    let docs = vec![markdown_doc(), Document::new(), markdown_doc()];
    let results = render::render_batch(&docs, &RenderOptions::default().markdown());
    let outputs: Vec<String> = results.into_iter().map(|r| r.unwrap()).collect();
    assert_eq!(outputs[0], outputs[2]);
    assert_eq!(outputs[1], "");
}
