//! List definition table.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Numbering scheme of an ordered list level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphType {
    /// 1, 2, 3, ...
    #[default]
    Decimal,
    /// a, b, c, ...
    Alpha,
    /// A, B, C, ...
    UpperAlpha,
    /// i, ii, iii, ...
    Roman,
    /// I, II, III, ...
    UpperRoman,
}

impl GlyphType {
    /// CSS `list-style-type` value for this glyph type.
    pub fn css_list_style(&self) -> &'static str {
        match self {
            GlyphType::Decimal => "decimal",
            GlyphType::Alpha => "lower-alpha",
            GlyphType::UpperAlpha => "upper-alpha",
            GlyphType::Roman => "lower-roman",
            GlyphType::UpperRoman => "upper-roman",
        }
    }
}

/// Markup kind of a list level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "glyph", rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted list
    #[default]
    Unordered,
    /// Numbered list with the given numbering scheme
    Ordered(GlyphType),
}

impl ListKind {
    /// Check if this is an ordered list.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListKind::Ordered(_))
    }
}

/// Properties of one nesting level of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestingLevel {
    /// Numbering scheme; absent means the level is unordered
    pub glyph_type: Option<GlyphType>,
}

impl NestingLevel {
    /// An unordered level.
    pub fn bulleted() -> Self {
        Self { glyph_type: None }
    }

    /// An ordered level.
    pub fn numbered(glyph_type: GlyphType) -> Self {
        Self {
            glyph_type: Some(glyph_type),
        }
    }

    /// Markup kind of this level.
    pub fn kind(&self) -> ListKind {
        match self.glyph_type {
            Some(glyph) => ListKind::Ordered(glyph),
            None => ListKind::Unordered,
        }
    }
}

/// Mapping from list identifier to its per-level properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListDefinitions {
    lists: HashMap<String, Vec<NestingLevel>>,
}

impl ListDefinitions {
    /// Create an empty list table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a list definition.
    pub fn insert(&mut self, list_id: impl Into<String>, levels: Vec<NestingLevel>) {
        self.lists.insert(list_id.into(), levels);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_list(mut self, list_id: impl Into<String>, levels: Vec<NestingLevel>) -> Self {
        self.insert(list_id, levels);
        self
    }

    /// Get the level properties of a list.
    pub fn get(&self, list_id: &str) -> Option<&[NestingLevel]> {
        self.lists.get(list_id).map(Vec::as_slice)
    }

    /// Resolve the markup kind of `(list_id, level)`.
    ///
    /// A missing list or level is a broken input contract and is reported
    /// as [`Error::UnknownList`].
    pub fn resolve(&self, list_id: &str, level: usize) -> Result<ListKind> {
        self.lists
            .get(list_id)
            .and_then(|levels| levels.get(level))
            .map(NestingLevel::kind)
            .ok_or_else(|| Error::unknown_list(list_id, level))
    }

    /// Check if `(list_id, level)` has a definition.
    pub fn contains(&self, list_id: &str, level: usize) -> bool {
        self.get(list_id).is_some_and(|levels| level < levels.len())
    }

    /// Number of lists defined.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if no lists are defined.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListDefinitions {
        ListDefinitions::new()
            .with_list("bullets", vec![NestingLevel::bulleted(); 3])
            .with_list(
                "numbers",
                vec![
                    NestingLevel::numbered(GlyphType::Decimal),
                    NestingLevel::numbered(GlyphType::Alpha),
                    NestingLevel::numbered(GlyphType::Roman),
                ],
            )
    }

    #[test]
    fn test_resolve() {
        let lists = sample();
        assert_eq!(lists.resolve("bullets", 2).unwrap(), ListKind::Unordered);
        assert_eq!(
            lists.resolve("numbers", 1).unwrap(),
            ListKind::Ordered(GlyphType::Alpha)
        );
    }

    #[test]
    fn test_resolve_missing() {
        let lists = sample();
        assert!(matches!(
            lists.resolve("numbers", 3),
            Err(Error::UnknownList { level: 3, .. })
        ));
        assert!(matches!(
            lists.resolve("missing", 0),
            Err(Error::UnknownList { .. })
        ));
        assert!(!lists.contains("missing", 0));
        assert!(lists.contains("bullets", 0));
    }

    #[test]
    fn test_css_list_style() {
        assert_eq!(GlyphType::Decimal.css_list_style(), "decimal");
        assert_eq!(GlyphType::Alpha.css_list_style(), "lower-alpha");
        assert_eq!(GlyphType::UpperRoman.css_list_style(), "upper-roman");
    }
}
