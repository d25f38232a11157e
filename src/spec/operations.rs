//! Decoding the JSON argument and checking required keys.

use super::model::{Field, FieldSpec, Fields, RawSpec};
use crate::error::{GeneratorError, RequiredField, Result};
use serde_json::{Map, Value};
use std::path::Path;

impl RawSpec {
    /// Decode the command line argument.
    ///
    /// Only text that is not JSON at all fails here. Any document other than
    /// an object (`null`, arrays, scalars) decodes as an empty spec and so
    /// reports the missing `file` key.
    pub fn parse(arg: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(arg).map_err(GeneratorError::Parse)?;
        let Value::Object(mut doc) = value else {
            return Ok(Self::default());
        };

        Ok(Self {
            file: doc.remove("file").and_then(path_text),
            input: doc.remove("input"),
        })
    }

    /// The target INI file path.
    ///
    /// # Returns
    ///
    /// * `Ok(&Path)` - The `file` key as given (relative paths are left to the OS)
    /// * `Err(GeneratorError::MissingField)` - `file` is absent, null, or not a
    ///   string or number
    pub fn target(&self) -> Result<&Path> {
        self.file
            .as_deref()
            .map(Path::new)
            .ok_or(GeneratorError::MissingField(RequiredField::File))
    }

    /// Decode and take the fields to prompt for.
    ///
    /// # Returns
    ///
    /// * `Ok(Fields)` - At least one field, in declaration order
    /// * `Err(GeneratorError::MissingField)` - `input` is absent, null, `{}` or `[]`
    /// * `Err(GeneratorError::Parse)` - `input` or one of its fields has the wrong shape
    pub fn take_fields(&mut self) -> Result<Fields> {
        let fields = match self.input.take() {
            None | Some(Value::Null) => Fields::default(),
            Some(Value::Array(items)) if items.is_empty() => Fields::default(),
            Some(value) => decode_fields(value)?,
        };

        if fields.is_empty() {
            return Err(GeneratorError::MissingField(RequiredField::Input));
        }
        Ok(fields)
    }
}

fn path_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn decode_fields(value: Value) -> Result<Fields> {
    let entries: Map<String, Value> =
        serde_json::from_value(value).map_err(GeneratorError::Parse)?;

    entries
        .into_iter()
        .map(|(name, options)| {
            let spec: Option<FieldSpec> =
                serde_json::from_value(options).map_err(GeneratorError::Parse)?;
            Ok(Field::resolve(name, spec))
        })
        .collect()
}
