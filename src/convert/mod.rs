pub mod normalizer;
pub mod renderer;
pub mod tokenizer;

use crate::Config;
use normalizer::{normalize, CoercionPolicy, RawInput};
use rayon::prelude::*;
use renderer::{render, NamingConvention};
use thiserror::Error;
use tokenizer::{tokenize, WordSequence};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input is missing")]
    InvalidInput,
    #[error("cannot convert {kind} input to text")]
    InvalidType { kind: &'static str },
}

/// Normalize, tokenize and render `input` in one call.
///
/// Only fails under [`CoercionPolicy::Strict`].
pub fn normalize_to_convention(
    input: impl Into<RawInput>,
    convention: NamingConvention,
    policy: CoercionPolicy,
) -> Result<String, ConvertError> {
    let text = normalize(input.into(), policy)?;
    Ok(render(&tokenize(&text), convention))
}

/// Converts inputs using the convention and policy from a [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    convention: NamingConvention,
    policy: CoercionPolicy,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            convention: config.convention,
            policy: config.policy,
        }
    }

    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    pub fn convert(&self, input: impl Into<RawInput>) -> Result<String, ConvertError> {
        self.convert_to(input, self.convention)
    }

    pub fn convert_to(
        &self,
        input: impl Into<RawInput>,
        convention: NamingConvention,
    ) -> Result<String, ConvertError> {
        normalize_to_convention(input, convention, self.policy)
    }

    /// The word sequence for `input`, before rendering.
    pub fn words(&self, input: impl Into<RawInput>) -> Result<WordSequence, ConvertError> {
        let text = normalize(input.into(), self.policy)?;
        Ok(tokenize(&text))
    }

    /// Convert many inputs in parallel. Results keep the input order.
    pub fn convert_batch(&self, inputs: Vec<RawInput>) -> Vec<Result<String, ConvertError>> {
        inputs
            .into_par_iter()
            .map(|input| self.convert(input))
            .collect()
    }
}
