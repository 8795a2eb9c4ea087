//! Custom parsing instructions
//!
//! Parse instructions are a JSON document telling the remote service how to
//! extract structured data from the scraped page. Field names map to nested
//! instruction objects; a `_fns` array holds the function pipeline applied
//! to that field:
//!
//! ```json
//! {
//!   "title": {
//!     "_fns": [{ "_fn": "xpath_one", "_args": ["//title/text()"] }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A parse-instructions document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseInstructions(Map<String, Value>);

impl ParseInstructions {
    /// Wrap a JSON object
    pub fn new(instructions: Map<String, Value>) -> Self {
        Self(instructions)
    }

    /// Build from an arbitrary JSON value, rejecting anything but an object
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::ParseInstructions(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Check the document structure
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_object("<root>", &self.0)
    }
}

fn validate_object(path: &str, object: &Map<String, Value>) -> Result<(), ValidationError> {
    if object.is_empty() {
        return Err(ValidationError::ParseInstructions(format!(
            "{path}: no instructions"
        )));
    }

    for (key, value) in object {
        let child = format!("{path}.{key}");
        if key == "_fns" {
            validate_functions(&child, value)?;
        } else if key.starts_with('_') {
            // Reserved keys carry arbitrary arguments; only nested objects
            // are instruction trees.
            if let Value::Object(nested) = value {
                validate_object(&child, nested)?;
            }
        } else {
            match value {
                Value::Object(nested) => validate_object(&child, nested)?,
                other => {
                    return Err(ValidationError::ParseInstructions(format!(
                        "{child}: expected an object, got {}",
                        json_kind(other)
                    )));
                }
            }
        }
    }

    Ok(())
}

fn validate_functions(path: &str, value: &Value) -> Result<(), ValidationError> {
    let functions = match value {
        Value::Array(items) if !items.is_empty() => items,
        Value::Array(_) => {
            return Err(ValidationError::ParseInstructions(format!(
                "{path}: function list is empty"
            )));
        }
        other => {
            return Err(ValidationError::ParseInstructions(format!(
                "{path}: expected an array, got {}",
                json_kind(other)
            )));
        }
    };

    for (idx, function) in functions.iter().enumerate() {
        let name = function.as_object().and_then(|f| f.get("_fn"));
        match name {
            Some(Value::String(name)) if !name.is_empty() => {}
            _ => {
                return Err(ValidationError::ParseInstructions(format!(
                    "{path}[{idx}]: missing _fn name"
                )));
            }
        }
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
