use crate::convert::ConvertError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// How non-string input is treated before tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoercionPolicy {
    /// Reject absent and structured input.
    Strict,
    /// Convert structured input through its canonical text, if it has one.
    #[default]
    Stringify,
    /// Treat absent and structured input as empty.
    EmptyOnMissing,
}

impl FromStr for CoercionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "strict" => Ok(CoercionPolicy::Strict),
            "stringify" => Ok(CoercionPolicy::Stringify),
            "empty-on-missing" => Ok(CoercionPolicy::EmptyOnMissing),
            _ => Err(format!("Unknown policy: {}", s)),
        }
    }
}

impl fmt::Display for CoercionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionPolicy::Strict => write!(f, "strict"),
            CoercionPolicy::Stringify => write!(f, "stringify"),
            CoercionPolicy::EmptyOnMissing => write!(f, "empty-on-missing"),
        }
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A caller-supplied value of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Absent,
    String(String),
    Number(Number),
    /// A bool, array or object.
    Structured(Value),
}

impl RawInput {
    /// Short name of the input's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawInput::Absent => "null",
            RawInput::String(_) => "string",
            RawInput::Number(_) => "number",
            RawInput::Structured(value) => value_kind(value),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::String(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::String(s)
    }
}

impl From<i64> for RawInput {
    fn from(n: i64) -> Self {
        RawInput::Number(n.into())
    }
}

impl From<i32> for RawInput {
    fn from(n: i32) -> Self {
        RawInput::Number(n.into())
    }
}

impl From<u64> for RawInput {
    fn from(n: u64) -> Self {
        RawInput::Number(n.into())
    }
}

impl From<f64> for RawInput {
    fn from(n: f64) -> Self {
        // integral floats print without a fractional part
        if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
            return RawInput::Number((n as i64).into());
        }
        match Number::from_f64(n) {
            Some(number) => RawInput::Number(number),
            // NaN and the infinities have no JSON number form
            None if n.is_nan() => RawInput::String("NaN".to_string()),
            None if n > 0.0 => RawInput::String("Infinity".to_string()),
            None => RawInput::String("-Infinity".to_string()),
        }
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawInput::Absent,
            Value::String(s) => RawInput::String(s),
            Value::Number(n) => RawInput::Number(n),
            other => RawInput::Structured(other),
        }
    }
}

/// Input text after coercion and trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coerce `input` to trimmed text according to `policy`.
pub fn normalize(input: RawInput, policy: CoercionPolicy) -> Result<NormalizedText, ConvertError> {
    match input {
        RawInput::Absent => match policy {
            CoercionPolicy::Strict => Err(ConvertError::InvalidInput),
            _ => Ok(NormalizedText::empty()),
        },
        RawInput::String(s) => Ok(NormalizedText::new(&s)),
        RawInput::Number(n) => Ok(NormalizedText::new(&n.to_string())),
        // Scalars wrapped as structured input are handled like their plain forms.
        RawInput::Structured(value @ (Value::Null | Value::String(_) | Value::Number(_))) => {
            normalize(RawInput::from(value), policy)
        }
        RawInput::Structured(value) => match policy {
            CoercionPolicy::Strict => Err(ConvertError::InvalidType {
                kind: value_kind(&value),
            }),
            CoercionPolicy::EmptyOnMissing => Ok(NormalizedText::empty()),
            CoercionPolicy::Stringify => Ok(canonical_text(&value)
                .map(|text| NormalizedText::new(&text))
                .unwrap_or_default()),
        },
    }
}

/// Canonical text of a structured value, if it has one.
///
/// Arrays join their elements with `,`, so `[1, "a"]` becomes `1,a`. Empty
/// arrays and objects have no meaningful text.
fn canonical_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| canonical_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => None,
    }
}
