//! Output schema and the JSON/schema presence rule.

use crate::OutputType;
use scrivener_error::SchemaValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message for a JSON request without a usable schema.
pub const JSON_SCHEMA_REQUIRED: &str =
    "output_schema must be a non-empty dictionary when output_type is JSON";

/// Message for a non-JSON request that carries a schema.
pub const TEXT_SCHEMA_FORBIDDEN: &str =
    "output_schema should not be provided when output_type is not JSON";

/// A non-empty mapping describing the shape of generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct OutputSchema(Map<String, Value>);

impl OutputSchema {
    /// Borrow the schema mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Look up a top-level schema key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TryFrom<Map<String, Value>> for OutputSchema {
    type Error = SchemaValidationError;

    #[track_caller]
    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if map.is_empty() {
            return Err(SchemaValidationError::new(JSON_SCHEMA_REQUIRED));
        }
        Ok(Self(map))
    }
}

impl TryFrom<Value> for OutputSchema {
    type Error = SchemaValidationError;

    #[track_caller]
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Self::try_from(map),
            _ => Err(SchemaValidationError::new(JSON_SCHEMA_REQUIRED)),
        }
    }
}

impl From<OutputSchema> for Map<String, Value> {
    fn from(schema: OutputSchema) -> Self {
        schema.0
    }
}

/// Enforce "schema present iff output type is JSON".
///
/// Shared by the request and response contracts. Emptiness is already
/// excluded by [`OutputSchema`] itself.
#[track_caller]
pub fn ensure_schema_presence(
    output_type: OutputType,
    output_schema: Option<&OutputSchema>,
) -> Result<(), SchemaValidationError> {
    match (output_type, output_schema) {
        (OutputType::Json, Some(_)) | (OutputType::Text, None) => Ok(()),
        (OutputType::Json, None) => Err(SchemaValidationError::new(JSON_SCHEMA_REQUIRED)),
        (OutputType::Text, Some(_)) => Err(SchemaValidationError::new(TEXT_SCHEMA_FORBIDDEN)),
    }
}

/// Read a raw `output_schema` field under the presence rule.
///
/// JSON `null` is treated as absent.
#[track_caller]
pub(crate) fn parse_output_schema(
    output_type: OutputType,
    raw: Option<&Value>,
) -> Result<Option<OutputSchema>, SchemaValidationError> {
    let raw = raw.filter(|value| !value.is_null());
    match output_type {
        OutputType::Json => {
            let value = raw.ok_or_else(|| SchemaValidationError::new(JSON_SCHEMA_REQUIRED))?;
            OutputSchema::try_from(value.clone()).map(Some)
        }
        OutputType::Text => match raw {
            None => Ok(None),
            Some(_) => Err(SchemaValidationError::new(TEXT_SCHEMA_FORBIDDEN)),
        },
    }
}
