//! Typed model of the JSON spec argument.

use serde::Deserialize;
use serde_json::Value;

/// The spec as decoded from JSON, before required keys are checked.
///
/// `input` stays undecoded until [`RawSpec::take_fields`], which the generator
/// calls only after the "already exists" short-circuit.
#[derive(Debug, Default)]
pub struct RawSpec {
    /// Target INI file path.
    pub file: Option<String>,

    /// Fields to prompt for, as written.
    pub input: Option<Value>,
}

/// A field with its question and default already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Key written to the INI file.
    pub name: String,

    /// Question shown to the operator. Falls back to `name`.
    pub question: String,

    /// Value used when the answer is blank. Falls back to the empty string.
    pub default: String,
}

impl Field {
    pub(super) fn resolve(name: String, spec: Option<FieldSpec>) -> Self {
        let spec = spec.unwrap_or_default();
        Self {
            question: spec.question.unwrap_or_else(|| name.clone()),
            default: spec.default.map(Scalar::into_string).unwrap_or_default(),
            name,
        }
    }
}

/// Per-field options as written in the JSON.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FieldSpec {
    #[serde(default)]
    question: Option<String>,

    #[serde(default)]
    default: Option<Scalar>,
}

/// Default values may be written as strings, numbers or booleans.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Fields in declaration order.
///
/// Key order comes from the decoded JSON object; a repeated key keeps its
/// first position and takes the last value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
