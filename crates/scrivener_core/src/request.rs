//! The request contract.

use crate::schema::parse_output_schema;
use crate::{
    GenerationType, OutputSchema, OutputType, Parameters, SearchType, ensure_schema_presence,
};
use derive_getters::Getters;
use scrivener_error::SchemaValidationError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::VariantNames;
use tracing::{debug, instrument};

/// A validated content generation request.
///
/// Fields are private; the only ways in are [`GenerationRequest::validate`]
/// for untyped payloads and [`GenerationRequest::new`] for typed callers.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct GenerationRequest {
    /// Selects the strategy
    generation_type: GenerationType,
    /// Output format; governs `output_schema` presence
    output_type: OutputType,
    /// Search scope passed through to the strategy
    search_type: SearchType,
    /// Strategy-specific parameters
    parameters: Parameters,
    /// Present iff `output_type` is JSON
    output_schema: Option<OutputSchema>,
}

impl GenerationRequest {
    /// Build a request from typed parts, enforcing the schema presence rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_core::{GenerationRequest, GenerationType, OutputType, Parameters, SearchType};
    ///
    /// let request = GenerationRequest::new(
    ///     GenerationType::Default,
    ///     OutputType::Text,
    ///     SearchType::Global,
    ///     Parameters::new(),
    ///     None,
    /// )
    /// .expect("text without schema is valid");
    /// assert!(request.output_schema().is_none());
    /// ```
    #[track_caller]
    pub fn new(
        generation_type: GenerationType,
        output_type: OutputType,
        search_type: SearchType,
        parameters: Parameters,
        output_schema: Option<OutputSchema>,
    ) -> Result<Self, SchemaValidationError> {
        ensure_schema_presence(output_type, output_schema.as_ref())?;
        Ok(Self {
            generation_type,
            output_type,
            search_type,
            parameters,
            output_schema,
        })
    }

    /// Validate an untyped payload into a request.
    ///
    /// Checks, in order: the payload is a mapping; the three enumerated
    /// fields hold recognized values (`generation_type` is required, the
    /// others default to `json` and `global` when the key is absent, while an
    /// explicit `null` is rejected); `parameters` is a mapping when given; and
    /// `output_schema` obeys the presence rule.
    #[instrument(skip_all)]
    pub fn validate(raw: &Value) -> Result<Self, SchemaValidationError> {
        let fields = raw
            .as_object()
            .ok_or_else(|| SchemaValidationError::new("request body must be a JSON object"))?;

        let generation_type = required_enum::<GenerationType>(fields, "generation_type")?;
        let output_type = optional_enum::<OutputType>(fields, "output_type")?;
        let search_type = optional_enum::<SearchType>(fields, "search_type")?;
        let parameters = parameters(fields)?;
        let output_schema = parse_output_schema(output_type, fields.get("output_schema"))?;

        debug!(
            %generation_type,
            %output_type,
            %search_type,
            parameter_count = parameters.len(),
            "Request passed contract validation"
        );

        Ok(Self {
            generation_type,
            output_type,
            search_type,
            parameters,
            output_schema,
        })
    }
}

fn required_enum<T>(fields: &Map<String, Value>, name: &str) -> Result<T, SchemaValidationError>
where
    T: FromStr + VariantNames,
{
    match fields.get(name) {
        None | Some(Value::Null) => Err(SchemaValidationError::new(format!(
            "{} is required",
            name
        ))),
        Some(value) => parse_enum(name, value),
    }
}

fn optional_enum<T>(fields: &Map<String, Value>, name: &str) -> Result<T, SchemaValidationError>
where
    T: FromStr + VariantNames + Default,
{
    match fields.get(name) {
        None => Ok(T::default()),
        Some(value) => parse_enum(name, value),
    }
}

fn parse_enum<T>(name: &str, value: &Value) -> Result<T, SchemaValidationError>
where
    T: FromStr + VariantNames,
{
    value
        .as_str()
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| {
            SchemaValidationError::new(format!(
                "{} must be one of: {} (got {})",
                name,
                T::VARIANTS.join(", "),
                value
            ))
        })
}

fn parameters(fields: &Map<String, Value>) -> Result<Parameters, SchemaValidationError> {
    match fields.get("parameters") {
        None => Ok(Parameters::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(SchemaValidationError::new("parameters must be a dictionary")),
    }
}
