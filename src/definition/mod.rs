//! The normalized, generator-agnostic definition model.
//!
//! Generators receive a [`Definition`] by reference and never mutate it. The
//! model is serializable so it can be dumped as a diagnostic artifact.

pub mod normalizer;
pub mod parser;

use serde::{Deserialize, Serialize};

pub use normalizer::{Normalizer, SwaggerNormalizer};
pub use parser::parse_document;

/// Normalized representation of an API description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub info: ApiInfo,
    pub resources: Vec<Resource>,
    pub models: Vec<Model>,
}

/// Top-level API metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

/// A group of operations sharing the leading path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub operations: Vec<Operation>,
}

/// One HTTP operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_model: Option<String>,
}

/// One operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Where the parameter lives: `path`, `query`, `header` or `body`.
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub schema_type: String,
}

/// A named data shape (swagger definition / OpenAPI component schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub properties: Vec<Property>,
}

/// One model property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub schema_type: String,
    /// Element type when `schema_type` is `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}
