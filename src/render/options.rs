//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output markup flavour
    pub format: OutputFormat,

    /// How list levels skipped over by a deep jump are opened
    pub intermediate_levels: IntermediateLevels,

    /// Maximum table nesting depth
    pub max_depth: usize,

    /// Escape characters that are special in the output markup
    pub escape_special_chars: bool,

    /// Character to use for unordered list markers (Markdown)
    pub list_marker: char,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Render HTML.
    pub fn html(self) -> Self {
        self.with_format(OutputFormat::Html)
    }

    /// Render Markdown with explicit list numbering.
    pub fn markdown(self) -> Self {
        self.with_format(OutputFormat::Markdown)
    }

    /// Set the intermediate level strategy.
    pub fn with_intermediate_levels(mut self, strategy: IntermediateLevels) -> Self {
        self.intermediate_levels = strategy;
        self
    }

    /// Set the maximum table nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            intermediate_levels: IntermediateLevels::InheritDeepest,
            max_depth: 32,
            escape_special_chars: false,
            list_marker: '-',
            collect_stats: false,
        }
    }
}

/// Output markup flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML fragments; list numbering is left to `<ol>`
    #[default]
    Html,
    /// Markdown with explicit list numbering
    Markdown,
}

/// How list frames are opened when an item is more than one level deeper
/// than the currently open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntermediateLevels {
    /// Open every missing level with the deepest item's list kind
    #[default]
    InheritDeepest,
    /// Look up each missing level in the list table
    Resolve,
}
