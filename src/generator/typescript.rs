//! Built-in TypeScript client generator.
//!
//! Composed through the assembler: fetch boilerplate, one service class per
//! resource, then one interface per model.

use serde_json::Value as JsonValue;

use crate::config::Profile;
use crate::definition::{Definition, Operation, Parameter};
use crate::errors::GeneratorError;
use crate::generator::{CodeAssembler, Generator, LineBuffer, SubGenerator};

pub struct TypeScriptGenerator {
    assembler: CodeAssembler,
}

impl TypeScriptGenerator {
    pub fn new() -> Self {
        let assembler = CodeAssembler::new()
            .boilerplate(Box::new(TsBoilerplate))
            .service(Box::new(TsServices))
            .model(Box::new(TsModels));
        Self { assembler }
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for TypeScriptGenerator {
    fn name(&self) -> &str {
        "typescript"
    }

    fn validate_profile(&self, profile: &Profile) -> Result<(), GeneratorError> {
        if let Some(output) = profile.output.as_deref() {
            let extension = output.rsplit('.').next().unwrap_or("");
            if !output.contains('.') || matches!(extension, "ts" | "tsx" | "mts") {
                return Ok(());
            }
            return Err(GeneratorError::new(format!(
                "typescript generator expects a .ts output path, got `{output}`"
            )));
        }
        Ok(())
    }

    fn generate(
        &self,
        definition: &Definition,
        profile: &Profile,
    ) -> Result<String, GeneratorError> {
        self.assembler.assemble(definition, profile)
    }
}

struct TsBoilerplate;

impl SubGenerator for TsBoilerplate {
    fn append(
        &self,
        definition: &Definition,
        profile: &Profile,
        out: &mut LineBuffer,
    ) -> Result<(), GeneratorError> {
        let info = &definition.info;
        let mut header = String::from("// ");
        if info.title.is_empty() {
            header.push_str("Generated API client");
        } else {
            header.push_str(&info.title);
        }
        if !info.version.is_empty() {
            header.push_str(" v");
            header.push_str(&info.version);
        }
        out.push(header);
        out.push("// Generated by specforge. Do not edit by hand.");
        out.blank();

        // The profile's options may override the document's base path.
        let base_path = profile
            .options
            .get("basePath")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .or_else(|| info.base_path.clone())
            .unwrap_or_default();
        out.push(format!("const BASE_PATH = \"{base_path}\";"));
        out.blank();

        out.push("function buildQuery(params: Record<string, unknown>): string {");
        out.push("  const pairs = Object.entries(params).filter(([, v]) => v !== undefined && v !== null);");
        out.push("  if (pairs.length === 0) {");
        out.push("    return \"\";");
        out.push("  }");
        out.push("  const search = new URLSearchParams();");
        out.push("  for (const [key, value] of pairs) {");
        out.push("    search.append(key, String(value));");
        out.push("  }");
        out.push("  return `?${search.toString()}`;");
        out.push("}");
        out.blank();
        out.push("async function request<T>(method: string, path: string, body?: unknown): Promise<T> {");
        out.push("  const response = await fetch(`${BASE_PATH}${path}`, {");
        out.push("    method: method.toUpperCase(),");
        out.push("    headers: { \"Content-Type\": \"application/json\" },");
        out.push("    body: body === undefined ? undefined : JSON.stringify(body),");
        out.push("  });");
        out.push("  if (!response.ok) {");
        out.push("    throw new Error(`HTTP ${response.status} for ${method} ${path}`);");
        out.push("  }");
        out.push("  return response.json() as Promise<T>;");
        out.push("}");
        Ok(())
    }
}

struct TsServices;

impl SubGenerator for TsServices {
    fn append(
        &self,
        definition: &Definition,
        _profile: &Profile,
        out: &mut LineBuffer,
    ) -> Result<(), GeneratorError> {
        for resource in &definition.resources {
            out.blank();
            out.push(format!(
                "export class {}Service {{",
                pascal_case(&resource.name)
            ));
            for (index, operation) in resource.operations.iter().enumerate() {
                if index > 0 {
                    out.blank();
                }
                append_method(operation, out);
            }
            out.push("}");
        }
        Ok(())
    }
}

fn append_method(operation: &Operation, out: &mut LineBuffer) {
    if let Some(summary) = &operation.summary {
        out.push(format!("  /** {summary} */"));
    }

    let path_params: Vec<&Parameter> = operation
        .parameters
        .iter()
        .filter(|p| p.location == "path")
        .collect();
    let query_params: Vec<&Parameter> = operation
        .parameters
        .iter()
        .filter(|p| p.location == "query")
        .collect();
    let body_param = operation.parameters.iter().find(|p| p.location == "body");

    // Required arguments first so the signature stays legal TypeScript.
    let mut args: Vec<String> = Vec::new();
    for param in &path_params {
        args.push(format!("{}: {}", param.name, ts_type(&param.schema_type)));
    }
    for param in query_params.iter().filter(|p| p.required) {
        args.push(format!("{}: {}", param.name, ts_type(&param.schema_type)));
    }
    for param in query_params.iter().filter(|p| !p.required) {
        args.push(format!("{}?: {}", param.name, ts_type(&param.schema_type)));
    }
    if let Some(param) = body_param {
        args.push(format!("body?: {}", ts_type(&param.schema_type)));
    }

    let return_type = operation
        .response_model
        .as_deref()
        .map(ts_type)
        .unwrap_or_else(|| "any".to_string());
    out.push(format!(
        "  async {}({}): Promise<{}> {{",
        camel_case(&operation.id),
        args.join(", "),
        return_type
    ));

    // `/pets/{petId}` becomes the template literal `/pets/${petId}`.
    let path_expr = operation.path.replace('{', "${");
    let path_literal = if query_params.is_empty() {
        format!("`{path_expr}`")
    } else {
        let names: Vec<&str> = query_params.iter().map(|p| p.name.as_str()).collect();
        out.push(format!(
            "    const query = buildQuery({{ {} }});",
            names.join(", ")
        ));
        format!("`{path_expr}${{query}}`")
    };

    if body_param.is_some() {
        out.push(format!(
            "    return request(\"{}\", {}, body);",
            operation.method, path_literal
        ));
    } else {
        out.push(format!(
            "    return request(\"{}\", {});",
            operation.method, path_literal
        ));
    }
    out.push("  }");
}

struct TsModels;

impl SubGenerator for TsModels {
    fn append(
        &self,
        definition: &Definition,
        _profile: &Profile,
        out: &mut LineBuffer,
    ) -> Result<(), GeneratorError> {
        for (index, model) in definition.models.iter().enumerate() {
            if index > 0 {
                out.blank();
            }
            out.push(format!("export interface {} {{", model.name));
            for property in &model.properties {
                let ts = if property.schema_type == "array" {
                    let item = property.item_type.as_deref().unwrap_or("any");
                    format!("{}[]", ts_type(item))
                } else {
                    ts_type(&property.schema_type)
                };
                let optional = if property.required { "" } else { "?" };
                out.push(format!("  {}{}: {};", property.name, optional, ts));
            }
            out.push("}");
        }
        Ok(())
    }
}

/// Map a normalized schema type to a TypeScript type. Unknown names are
/// assumed to be model references and pass through unchanged.
fn ts_type(schema_type: &str) -> String {
    if let Some(inner) = schema_type.strip_suffix("[]") {
        return format!("{}[]", ts_type(inner));
    }
    match schema_type {
        "integer" | "number" | "float" | "double" => "number".to_string(),
        "string" => "string".to_string(),
        "boolean" => "boolean".to_string(),
        "object" | "" => "any".to_string(),
        other => other.to_string(),
    }
}

fn pascal_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{ApiInfo, Model, Property, Resource};
    use crate::generator::LINE_TERMINATOR;

    fn petstore_definition() -> Definition {
        Definition {
            info: ApiInfo {
                title: "Petstore".to_string(),
                version: "1.0.0".to_string(),
                description: None,
                base_path: Some("/v1".to_string()),
            },
            resources: vec![Resource {
                name: "pets".to_string(),
                operations: vec![
                    Operation {
                        id: "listPets".to_string(),
                        method: "get".to_string(),
                        path: "/pets".to_string(),
                        summary: Some("List all pets".to_string()),
                        parameters: vec![Parameter {
                            name: "limit".to_string(),
                            location: "query".to_string(),
                            required: false,
                            schema_type: "integer".to_string(),
                        }],
                        response_model: Some("Pet[]".to_string()),
                    },
                    Operation {
                        id: "showPetById".to_string(),
                        method: "get".to_string(),
                        path: "/pets/{petId}".to_string(),
                        summary: None,
                        parameters: vec![Parameter {
                            name: "petId".to_string(),
                            location: "path".to_string(),
                            required: true,
                            schema_type: "string".to_string(),
                        }],
                        response_model: Some("Pet".to_string()),
                    },
                ],
            }],
            models: vec![Model {
                name: "Pet".to_string(),
                properties: vec![
                    Property {
                        name: "id".to_string(),
                        schema_type: "integer".to_string(),
                        item_type: None,
                        required: true,
                    },
                    Property {
                        name: "name".to_string(),
                        schema_type: "string".to_string(),
                        item_type: None,
                        required: false,
                    },
                ],
            }],
        }
    }

    #[test]
    fn emits_services_then_models() {
        let generator = TypeScriptGenerator::new();
        let output = generator
            .generate(&petstore_definition(), &Profile::default())
            .unwrap();

        let service_at = output.find("export class PetsService {").unwrap();
        let model_at = output.find("export interface Pet {").unwrap();
        let boilerplate_at = output.find("async function request<T>").unwrap();
        assert!(boilerplate_at < service_at);
        assert!(service_at < model_at);
    }

    #[test]
    fn path_parameters_become_template_literals() {
        let generator = TypeScriptGenerator::new();
        let output = generator
            .generate(&petstore_definition(), &Profile::default())
            .unwrap();
        assert!(output.contains("async showPetById(petId: string): Promise<Pet> {"));
        assert!(output.contains("return request(\"get\", `/pets/${petId}`);"));
    }

    #[test]
    fn query_parameters_route_through_build_query() {
        let generator = TypeScriptGenerator::new();
        let output = generator
            .generate(&petstore_definition(), &Profile::default())
            .unwrap();
        assert!(output.contains("async listPets(limit?: number): Promise<Pet[]> {"));
        assert!(output.contains("const query = buildQuery({ limit });"));
        assert!(output.contains("return request(\"get\", `/pets${query}`);"));
    }

    #[test]
    fn models_map_to_interfaces() {
        let generator = TypeScriptGenerator::new();
        let output = generator
            .generate(&petstore_definition(), &Profile::default())
            .unwrap();
        let lines: Vec<&str> = output.split(LINE_TERMINATOR).collect();
        let start = lines
            .iter()
            .position(|l| *l == "export interface Pet {")
            .unwrap();
        assert_eq!(lines[start + 1], "  id: number;");
        assert_eq!(lines[start + 2], "  name?: string;");
        assert_eq!(lines[start + 3], "}");
    }

    #[test]
    fn base_path_option_overrides_document() {
        let mut profile = Profile::default();
        profile
            .options
            .insert("basePath".to_string(), serde_json::json!("https://api.test"));
        let generator = TypeScriptGenerator::new();
        let output = generator
            .generate(&petstore_definition(), &profile)
            .unwrap();
        assert!(output.contains("const BASE_PATH = \"https://api.test\";"));
    }

    #[test]
    fn validate_profile_rejects_foreign_extensions() {
        let generator = TypeScriptGenerator::new();
        let mut profile = Profile::default();
        profile.output = Some("client.cs".to_string());
        assert!(generator.validate_profile(&profile).is_err());

        profile.output = Some("client.ts".to_string());
        assert!(generator.validate_profile(&profile).is_ok());
    }

    #[test]
    fn case_helpers() {
        assert_eq!(pascal_case("pets"), "Pets");
        assert_eq!(pascal_case("store-orders"), "StoreOrders");
        assert_eq!(camel_case("list_pets"), "listPets");
        assert_eq!(camel_case("listPets"), "listPets");
    }
}
