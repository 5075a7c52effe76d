//! Normalization of parsed Swagger/OpenAPI documents into the definition
//! model.
//!
//! The pipeline only depends on the [`Normalizer`] port; [`SwaggerNormalizer`]
//! is the stock implementation covering Swagger 2.0 and the OpenAPI 3 shapes
//! the generators consume.

use serde_json::Value as JsonValue;

use crate::definition::{ApiInfo, Definition, Model, Operation, Parameter, Property, Resource};
use crate::errors::NormalizationError;

const HTTP_METHODS: &[&str] = &["get", "post", "put", "delete", "patch", "head", "options"];

/// Port converting a structured document value into a [`Definition`].
pub trait Normalizer: Send + Sync {
    fn normalize(&self, document: &JsonValue) -> Result<Definition, NormalizationError>;
}

/// Stock normalizer for Swagger/OpenAPI documents.
pub struct SwaggerNormalizer;

impl Normalizer for SwaggerNormalizer {
    fn normalize(&self, document: &JsonValue) -> Result<Definition, NormalizationError> {
        let paths = document
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| NormalizationError::new("document has no `paths` object"))?;

        let info = normalize_info(document);

        let mut resources: Vec<Resource> = Vec::new();
        for (path, item) in paths {
            let Some(item) = item.as_object() else {
                continue;
            };
            for method in HTTP_METHODS {
                let Some(op) = item.get(*method) else {
                    continue;
                };
                let operation = normalize_operation(method, path, op);
                let resource_name = resource_name(path);
                match resources.iter_mut().find(|r| r.name == resource_name) {
                    Some(resource) => resource.operations.push(operation),
                    None => resources.push(Resource {
                        name: resource_name,
                        operations: vec![operation],
                    }),
                }
            }
        }

        let models = normalize_models(document);

        Ok(Definition {
            info,
            resources,
            models,
        })
    }
}

fn normalize_info(document: &JsonValue) -> ApiInfo {
    let info = document.get("info");
    let field = |name: &str| {
        info.and_then(|i| i.get(name))
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    };
    // Swagger 2 carries basePath; OpenAPI 3 carries servers[].url.
    let base_path = document
        .get("basePath")
        .and_then(JsonValue::as_str)
        .or_else(|| {
            document
                .get("servers")
                .and_then(|s| s.get(0))
                .and_then(|s| s.get("url"))
                .and_then(JsonValue::as_str)
        })
        .map(str::to_string);

    ApiInfo {
        title: field("title").unwrap_or_default(),
        version: field("version").unwrap_or_default(),
        description: field("description"),
        base_path,
    }
}

/// First non-parameter path segment; templated or empty paths land in
/// `default`.
fn resource_name(path: &str) -> String {
    path.split('/')
        .find(|segment| !segment.is_empty() && !segment.starts_with('{'))
        .unwrap_or("default")
        .to_string()
}

fn normalize_operation(method: &str, path: &str, op: &JsonValue) -> Operation {
    let id = op
        .get("operationId")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| derive_operation_id(method, path));

    let parameters = op
        .get("parameters")
        .and_then(JsonValue::as_array)
        .map(|params| params.iter().filter_map(normalize_parameter).collect())
        .unwrap_or_default();

    Operation {
        id,
        method: method.to_string(),
        path: path.to_string(),
        summary: op
            .get("summary")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
        parameters,
        response_model: response_model(op),
    }
}

fn derive_operation_id(method: &str, path: &str) -> String {
    let mut id = method.to_string();
    for segment in path.split('/') {
        let segment = segment.trim_matches(|c| c == '{' || c == '}');
        if !segment.is_empty() {
            id.push('_');
            id.push_str(segment);
        }
    }
    id
}

fn normalize_parameter(param: &JsonValue) -> Option<Parameter> {
    let name = param.get("name").and_then(JsonValue::as_str)?;
    let location = param
        .get("in")
        .and_then(JsonValue::as_str)
        .unwrap_or("query");
    // Swagger 2 puts the type inline; OpenAPI 3 nests it under `schema`.
    let schema_type = param
        .get("type")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .or_else(|| param.get("schema").map(schema_type_of))
        .unwrap_or_else(|| "object".to_string());

    Some(Parameter {
        name: name.to_string(),
        location: location.to_string(),
        required: param
            .get("required")
            .and_then(JsonValue::as_bool)
            .unwrap_or(location == "path"),
        schema_type,
    })
}

/// Model referenced by the success response, if any. Arrays of references
/// become `Name[]`.
fn response_model(op: &JsonValue) -> Option<String> {
    let responses = op.get("responses")?;
    let success = responses.get("200").or_else(|| responses.get("201"))?;
    // Swagger 2: responses.200.schema; OpenAPI 3: responses.200.content.<mime>.schema
    let schema = success.get("schema").or_else(|| {
        success
            .get("content")
            .and_then(JsonValue::as_object)
            .and_then(|content| content.values().next())
            .and_then(|media| media.get("schema"))
    })?;
    let model = schema_type_of(schema);
    match model.as_str() {
        "object" | "string" | "integer" | "number" | "boolean" => None,
        _ => Some(model),
    }
}

/// Collapse a schema value into a type string: `$ref` basename, `array` with
/// element type, or the primitive `type` keyword.
fn schema_type_of(schema: &JsonValue) -> String {
    if let Some(reference) = schema.get("$ref").and_then(JsonValue::as_str) {
        return ref_name(reference);
    }
    match schema.get("type").and_then(JsonValue::as_str) {
        Some("array") => {
            let item = schema
                .get("items")
                .map(schema_type_of)
                .unwrap_or_else(|| "object".to_string());
            format!("{item}[]")
        }
        Some(other) => other.to_string(),
        None => "object".to_string(),
    }
}

fn ref_name(reference: &str) -> String {
    reference.rsplit('/').next().unwrap_or(reference).to_string()
}

fn normalize_models(document: &JsonValue) -> Vec<Model> {
    let schemas = document
        .get("definitions")
        .or_else(|| document.get("components").and_then(|c| c.get("schemas")))
        .and_then(JsonValue::as_object);
    let Some(schemas) = schemas else {
        return Vec::new();
    };

    schemas
        .iter()
        .map(|(name, schema)| {
            let required: Vec<&str> = schema
                .get("required")
                .and_then(JsonValue::as_array)
                .map(|names| names.iter().filter_map(JsonValue::as_str).collect())
                .unwrap_or_default();

            let properties = schema
                .get("properties")
                .and_then(JsonValue::as_object)
                .map(|props| {
                    props
                        .iter()
                        .map(|(prop_name, prop_schema)| {
                            let schema_type = prop_schema
                                .get("type")
                                .and_then(JsonValue::as_str)
                                .map(str::to_string)
                                .or_else(|| {
                                    prop_schema
                                        .get("$ref")
                                        .and_then(JsonValue::as_str)
                                        .map(ref_name)
                                })
                                .unwrap_or_else(|| "object".to_string());
                            let item_type = (schema_type == "array")
                                .then(|| prop_schema.get("items").map(schema_type_of))
                                .flatten();
                            Property {
                                name: prop_name.clone(),
                                schema_type,
                                item_type,
                                required: required.contains(&prop_name.as_str()),
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();

            Model {
                name: name.clone(),
                properties,
            }
        })
        .collect()
}
