//! Parsing options and configuration.

/// Options for reading source documents.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Read the paragraphs inside a table of contents as body content
    pub include_table_of_contents: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (validate list references while parsing).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Include or skip table of contents entries.
    pub fn with_table_of_contents(mut self, include: bool) -> Self {
        self.include_table_of_contents = include;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail if a list item references a list level missing from the list table
    Strict,
    /// Defer list validation to rendering time
    #[default]
    Lenient,
}
