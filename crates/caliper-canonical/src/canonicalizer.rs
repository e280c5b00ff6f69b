use canonical_json::to_string;
use serde_json::{Map, Value};
use std::fmt;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// Generic failure.
    #[error("other error: {0}")]
    Other(String),
}

/// Helper for building JSON paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Produces RFC 8785 bytes so that two documents can be compared without
/// regard to member order or whitespace.
///
/// Serialized Caliper documents keep a fixed, human-oriented field order;
/// canonical bytes are only ever used for equality checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Canonicalizer;

impl Canonicalizer {
    /// Creates a canonicalizer.
    pub fn new() -> Self {
        Self
    }

    /// Returns canonical UTF-8 bytes for `value`.
    pub fn canonicalize(&self, value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
        validate(value, Path::root())?;
        let sorted = sort_keys(value);
        let canonical =
            to_string(&sorted).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
        Ok(canonical.into_bytes())
    }

    /// True when both documents have identical canonical bytes.
    pub fn equivalent(&self, a: &Value, b: &Value) -> Result<bool, CanonicalizationError> {
        Ok(self.canonicalize(a)? == self.canonicalize(b)?)
    }
}

// Maps iterate in insertion order here, so ordering has to be imposed first.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

fn validate(value: &Value, path: Path) -> Result<(), CanonicalizationError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                validate(child, path.push_field(key))?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                validate(item, path.push_index(idx))?;
            }
            Ok(())
        }
        Value::Number(num) => match num.as_f64() {
            Some(f) if !f.is_finite() => Err(CanonicalizationError::NonFiniteNumber(format!(
                "{}",
                path
            ))),
            _ => Ok(()),
        },
        Value::String(_) | Value::Bool(_) | Value::Null => Ok(()),
    }
}
