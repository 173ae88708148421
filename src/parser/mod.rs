//! Document JSON reading.

mod doc_parser;
mod options;
mod raw;

pub use doc_parser::DocParser;
pub use options::{ErrorMode, ParseOptions};
