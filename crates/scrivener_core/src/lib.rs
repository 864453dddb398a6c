//! Request and response contracts for Scrivener.
//!
//! A [`GenerationRequest`] is only ever constructed through validation, so
//! a value of that type always satisfies the output-schema rule: a
//! non-empty schema is present exactly when the output type is JSON.
//! [`GenerationResponse`] enforces the same rule when it is built.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kinds;
mod parameters;
mod request;
mod response;
mod schema;

pub use kinds::{GenerationType, OutputType, SearchType};
pub use parameters::{Parameters, missing_parameters};
pub use request::GenerationRequest;
pub use response::{GenerationMetadata, GenerationResponse, SearchResult};
pub use schema::{
    JSON_SCHEMA_REQUIRED, OutputSchema, TEXT_SCHEMA_FORBIDDEN, ensure_schema_presence,
};
