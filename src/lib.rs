pub mod cli;
pub mod config;
pub mod convert;

pub use config::{Config, ConfigLayer};
pub use convert::normalizer::{normalize, CoercionPolicy, NormalizedText, RawInput};
pub use convert::renderer::{render, NamingConvention};
pub use convert::tokenizer::{tokenize, tokenize_spans, tokenize_str, Word, WordSequence, WordSpan};
pub use convert::{normalize_to_convention, ConvertError, Converter};

/// Outcome of converting one command-line input.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub input: String,
    /// Rendered text, or the message explaining why the input failed.
    pub output: Result<String, String>,
    pub words: Option<Vec<String>>,
}

impl ConvertResult {
    pub fn is_err(&self) -> bool {
        self.output.is_err()
    }
}
