//! Document JSON parser.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{
    Alignment, BaselineOffset, Block, Bullet, Document, GlyphType, ListDefinitions, Metadata,
    NamedStyle, NestingLevel, Paragraph, ParagraphStyle, RgbColor, Table, TableCell, TableRow,
    TextRun, TextStyle,
};

use super::options::{ErrorMode, ParseOptions};
use super::raw::{
    RawDocument, RawList, RawParagraph, RawParagraphStyle, RawStructuralElement, RawTable,
    RawTextStyle,
};

/// Parser for document JSON exports.
pub struct DocParser {
    raw: RawDocument,
    options: ParseOptions,
}

impl DocParser {
    /// Open a document JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a document JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_options(json, ParseOptions::default())
    }

    /// Parse a document from a JSON string with custom options.
    pub fn from_json_with_options(json: &str, options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_str(json)?;
        Ok(Self { raw, options })
    }

    /// Parse a document from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Self::from_slice_with_options(data, ParseOptions::default())
    }

    /// Parse a document from JSON bytes with custom options.
    pub fn from_slice_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_slice(data)?;
        Ok(Self { raw, options })
    }

    /// Parse a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_reader(reader)?;
        Ok(Self { raw, options })
    }

    /// Build the structured document.
    pub fn parse(&self) -> Result<Document> {
        let metadata = Metadata {
            title: self.raw.title.clone(),
            document_id: self.raw.document_id.clone(),
            revision_id: self.raw.revision_id.clone(),
        };

        let body = self.convert_content(&self.raw.body.content);
        let lists = convert_lists(&self.raw.lists);

        let document = Document {
            metadata,
            body,
            lists,
        };

        log::debug!(
            "Parsed document: {} blocks, {} lists",
            document.block_count(),
            document.lists.len()
        );

        if self.options.error_mode == ErrorMode::Strict {
            validate_list_references(&document)?;
        }

        Ok(document)
    }

    fn convert_content(&self, content: &[RawStructuralElement]) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(content.len());
        for element in content {
            if let Some(ref paragraph) = element.paragraph {
                blocks.push(Block::Paragraph(convert_paragraph(paragraph)));
            } else if let Some(ref table) = element.table {
                blocks.push(Block::Table(self.convert_table(table)));
            } else if let Some(ref toc) = element.table_of_contents {
                if self.options.include_table_of_contents {
                    blocks.extend(self.convert_content(&toc.content));
                } else {
                    log::debug!("Skipping table of contents ({} entries)", toc.content.len());
                }
            } else if element.section_break.is_none() {
                log::debug!("Skipping unsupported structural element");
            }
        }
        blocks
    }

    fn convert_table(&self, table: &RawTable) -> Table {
        let rows = table
            .table_rows
            .iter()
            .map(|row| {
                TableRow::new(
                    row.table_cells
                        .iter()
                        .map(|cell| {
                            TableCell::with_content(self.convert_content(&cell.content))
                                .rowspan(cell.table_cell_style.row_span)
                                .colspan(cell.table_cell_style.column_span)
                        })
                        .collect(),
                )
            })
            .collect();
        Table { rows }
    }
}

fn convert_paragraph(paragraph: &RawParagraph) -> Paragraph {
    let runs = paragraph
        .elements
        .iter()
        .filter_map(|element| element.text_run.as_ref())
        .map(|run| TextRun::styled(run.content.clone(), convert_text_style(&run.text_style)))
        .collect();

    let bullet = paragraph.bullet.as_ref().and_then(|bullet| {
        bullet
            .list_id
            .as_ref()
            .map(|list_id| Bullet::new(list_id.clone(), bullet.nesting_level))
    });

    Paragraph {
        runs,
        style: convert_paragraph_style(&paragraph.paragraph_style),
        bullet,
    }
}

fn convert_text_style(style: &RawTextStyle) -> TextStyle {
    let baseline_offset = match style.baseline_offset.as_deref() {
        Some("SUPERSCRIPT") => BaselineOffset::Superscript,
        Some("SUBSCRIPT") => BaselineOffset::Subscript,
        _ => BaselineOffset::None,
    };

    let background_color = style
        .background_color
        .as_ref()
        .and_then(|c| c.color.as_ref())
        .and_then(|c| c.rgb_color.as_ref())
        .map(|rgb| RgbColor::new(rgb.red, rgb.green, rgb.blue));

    let link = style
        .link
        .as_ref()
        .and_then(|link| link.url.clone())
        .filter(|url| !url.is_empty());

    TextStyle {
        link,
        baseline_offset,
        background_color,
        underline: style.underline,
        bold: style.bold,
        italic: style.italic,
        strikethrough: style.strikethrough,
    }
}

fn convert_paragraph_style(style: &RawParagraphStyle) -> ParagraphStyle {
    ParagraphStyle {
        named_style: parse_named_style(style.named_style_type.as_deref()),
        alignment: parse_alignment(style.alignment.as_deref()),
    }
}

fn parse_named_style(name: Option<&str>) -> NamedStyle {
    name.and_then(|n| n.strip_prefix("HEADING_"))
        .and_then(|level| level.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
        .map(NamedStyle::Heading)
        .unwrap_or_default()
}

fn parse_alignment(alignment: Option<&str>) -> Alignment {
    match alignment {
        Some("START") | Some("LEFT") => Alignment::Left,
        Some("CENTER") => Alignment::Center,
        Some("END") | Some("RIGHT") => Alignment::Right,
        Some("JUSTIFIED") => Alignment::Justify,
        _ => Alignment::Unset,
    }
}

fn parse_glyph_type(glyph: Option<&str>) -> Option<GlyphType> {
    match glyph? {
        "NONE" | "GLYPH_TYPE_UNSPECIFIED" => None,
        "DECIMAL" | "ZERO_DECIMAL" => Some(GlyphType::Decimal),
        "ALPHA" => Some(GlyphType::Alpha),
        "UPPER_ALPHA" => Some(GlyphType::UpperAlpha),
        "ROMAN" => Some(GlyphType::Roman),
        "UPPER_ROMAN" => Some(GlyphType::UpperRoman),
        other => {
            log::warn!("Unknown glyph type '{}', numbering as decimal", other);
            Some(GlyphType::Decimal)
        }
    }
}

fn convert_lists(lists: &HashMap<String, RawList>) -> ListDefinitions {
    let mut definitions = ListDefinitions::new();
    for (list_id, list) in lists {
        let levels = list
            .list_properties
            .nesting_levels
            .iter()
            .map(|level| NestingLevel {
                glyph_type: parse_glyph_type(level.glyph_type.as_deref()),
            })
            .collect();
        definitions.insert(list_id.clone(), levels);
    }
    definitions
}

fn validate_list_references(document: &Document) -> Result<()> {
    for bullet in document.bullets() {
        if !document.lists.contains(&bullet.list_id, bullet.nesting_level) {
            return Err(Error::unknown_list(&bullet.list_id, bullet.nesting_level));
        }
    }
    Ok(())
}
