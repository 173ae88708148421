//! Wire types for document JSON.
//!
//! Every field is optional on the wire. A field whose JSON shape is not
//! what we expect deserializes to its default instead of failing, since
//! exported documents routinely omit or vary optional style fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

fn lenient_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        _ => return Ok(HashMap::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, item)| T::deserialize(item).ok().map(|v| (key, v)))
        .collect())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawDocument {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub document_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub revision_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub body: RawBody,
    #[serde(deserialize_with = "lenient_map")]
    pub lists: HashMap<String, RawList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawBody {
    #[serde(deserialize_with = "lenient_vec")]
    pub content: Vec<RawStructuralElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawStructuralElement {
    #[serde(deserialize_with = "lenient")]
    pub paragraph: Option<RawParagraph>,
    #[serde(deserialize_with = "lenient")]
    pub table: Option<RawTable>,
    #[serde(deserialize_with = "lenient")]
    pub section_break: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub table_of_contents: Option<RawTableOfContents>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTableOfContents {
    #[serde(deserialize_with = "lenient_vec")]
    pub content: Vec<RawStructuralElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawParagraph {
    #[serde(deserialize_with = "lenient_vec")]
    pub elements: Vec<RawParagraphElement>,
    #[serde(deserialize_with = "lenient")]
    pub paragraph_style: RawParagraphStyle,
    #[serde(deserialize_with = "lenient")]
    pub bullet: Option<RawBullet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawParagraphElement {
    #[serde(deserialize_with = "lenient")]
    pub text_run: Option<RawTextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTextRun {
    #[serde(deserialize_with = "lenient")]
    pub content: String,
    #[serde(deserialize_with = "lenient")]
    pub text_style: RawTextStyle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTextStyle {
    #[serde(deserialize_with = "lenient")]
    pub bold: bool,
    #[serde(deserialize_with = "lenient")]
    pub italic: bool,
    #[serde(deserialize_with = "lenient")]
    pub underline: bool,
    #[serde(deserialize_with = "lenient")]
    pub strikethrough: bool,
    #[serde(deserialize_with = "lenient")]
    pub baseline_offset: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<RawOptionalColor>,
    #[serde(deserialize_with = "lenient")]
    pub link: Option<RawLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawOptionalColor {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<RawColor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawColor {
    #[serde(deserialize_with = "lenient")]
    pub rgb_color: Option<RawRgbColor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawRgbColor {
    #[serde(deserialize_with = "lenient")]
    pub red: f64,
    #[serde(deserialize_with = "lenient")]
    pub green: f64,
    #[serde(deserialize_with = "lenient")]
    pub blue: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawLink {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawParagraphStyle {
    #[serde(deserialize_with = "lenient")]
    pub named_style_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub alignment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawBullet {
    #[serde(deserialize_with = "lenient")]
    pub list_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nesting_level: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTable {
    #[serde(deserialize_with = "lenient_vec")]
    pub table_rows: Vec<RawTableRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTableRow {
    #[serde(deserialize_with = "lenient_vec")]
    pub table_cells: Vec<RawTableCell>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTableCell {
    #[serde(deserialize_with = "lenient_vec")]
    pub content: Vec<RawStructuralElement>,
    #[serde(deserialize_with = "lenient")]
    pub table_cell_style: RawTableCellStyle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTableCellStyle {
    #[serde(deserialize_with = "lenient")]
    pub row_span: u32,
    #[serde(deserialize_with = "lenient")]
    pub column_span: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawList {
    #[serde(deserialize_with = "lenient")]
    pub list_properties: RawListProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawListProperties {
    #[serde(deserialize_with = "lenient_vec")]
    pub nesting_levels: Vec<RawNestingLevel>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawNestingLevel {
    #[serde(deserialize_with = "lenient")]
    pub glyph_type: Option<String>,
}
