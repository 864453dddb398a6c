//! The response contract.

use crate::{
    GenerationRequest, GenerationType, OutputSchema, OutputType, Parameters, SearchType,
    ensure_schema_presence,
};
use derive_getters::Getters;
use scrivener_error::SchemaValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One search hit used during generation.
pub type SearchResult = Map<String, Value>;

/// Echo of the request fields that shaped a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GenerationMetadata {
    /// Strategy discriminant
    generation_type: GenerationType,
    /// Requested output format
    output_type: OutputType,
    /// Requested search scope
    search_type: SearchType,
}

impl From<&GenerationRequest> for GenerationMetadata {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            generation_type: *request.generation_type(),
            output_type: *request.output_type(),
            search_type: *request.search_type(),
        }
    }
}

/// Result of a generation.
///
/// `content` is always text, even for JSON output; the output type only
/// decides whether `output_schema` is echoed back. Deserialization goes
/// through [`GenerationResponse::new`], so the presence rule holds for
/// responses read off the wire too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawGenerationResponse")]
pub struct GenerationResponse {
    /// Generated text
    content: String,
    /// Echoed request discriminants
    metadata: GenerationMetadata,
    /// Search hits, empty when no search ran
    search_results: Vec<SearchResult>,
    /// The request parameters, unmodified
    generation_parameters: Parameters,
    /// Present iff the output type is JSON
    output_schema: Option<OutputSchema>,
}

/// Wire form of [`GenerationResponse`] before the presence rule is checked.
#[derive(Deserialize)]
struct RawGenerationResponse {
    content: String,
    metadata: GenerationMetadata,
    #[serde(default)]
    search_results: Vec<SearchResult>,
    #[serde(default)]
    generation_parameters: Parameters,
    #[serde(default)]
    output_schema: Option<OutputSchema>,
}

impl TryFrom<RawGenerationResponse> for GenerationResponse {
    type Error = SchemaValidationError;

    fn try_from(raw: RawGenerationResponse) -> Result<Self, Self::Error> {
        Self::new(
            raw.content,
            raw.metadata,
            raw.search_results,
            raw.generation_parameters,
            raw.output_schema,
        )
    }
}

impl GenerationResponse {
    /// Build a response, enforcing the schema presence rule against
    /// `metadata.output_type`.
    #[track_caller]
    pub fn new(
        content: impl Into<String>,
        metadata: GenerationMetadata,
        search_results: Vec<SearchResult>,
        generation_parameters: Parameters,
        output_schema: Option<OutputSchema>,
    ) -> Result<Self, SchemaValidationError> {
        ensure_schema_presence(metadata.output_type, output_schema.as_ref())?;
        Ok(Self {
            content: content.into(),
            metadata,
            search_results,
            generation_parameters,
            output_schema,
        })
    }

    /// Build the response for `request`, echoing its metadata, parameters
    /// and (for JSON output) its schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_core::{GenerationRequest, GenerationResponse};
    /// use serde_json::json;
    ///
    /// let request = GenerationRequest::validate(&json!({
    ///     "generation_type": "default",
    ///     "output_type": "text",
    ///     "parameters": {"content": "x"}
    /// }))
    /// .expect("valid request");
    /// let response = GenerationResponse::for_request(&request, "done", Vec::new())
    ///     .expect("valid response");
    /// assert_eq!(response.generation_parameters(), request.parameters());
    /// assert!(response.output_schema().is_none());
    /// ```
    #[track_caller]
    pub fn for_request(
        request: &GenerationRequest,
        content: impl Into<String>,
        search_results: Vec<SearchResult>,
    ) -> Result<Self, SchemaValidationError> {
        let output_schema = match request.output_type() {
            OutputType::Json => request.output_schema().clone(),
            OutputType::Text => None,
        };
        Self::new(
            content,
            GenerationMetadata::from(request),
            search_results,
            request.parameters().clone(),
            output_schema,
        )
    }
}
