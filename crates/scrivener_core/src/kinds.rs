//! Enumerated request fields.

use serde::{Deserialize, Serialize};

/// Discriminant selecting which strategy handles a request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationType {
    /// Discover claims made in the supplied content
    ClaimDiscovery,
    /// Discover evidence for a claim
    EvidenceDiscovery,
    /// General-purpose generation
    Default,
}

/// Requested output format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputType {
    /// Structured output described by an output schema
    #[default]
    Json,
    /// Free text
    Text,
}

/// Search scope, passed through to strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchType {
    /// Only files the caller selected
    SelectedFiles,
    /// Everything indexed
    #[default]
    Global,
}
