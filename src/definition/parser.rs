//! Strict parse of raw document text into a structured value.
//!
//! The source string (path or URL) only steers format selection; `.json`
//! sources are parsed as JSON only, `.yaml`/`.yml` as YAML only, anything
//! else tries JSON first and falls back to YAML.

use serde_json::Value as JsonValue;

use crate::errors::PipelineError;

/// Parse raw text into a JSON value, reporting syntax failures with a
/// position when the underlying parser provides one.
pub fn parse_document(raw: &str, source: &str) -> Result<JsonValue, PipelineError> {
    if source.ends_with(".json") {
        serde_json::from_str(raw).map_err(json_syntax_error)
    } else if source.ends_with(".yaml") || source.ends_with(".yml") {
        serde_yaml::from_str(raw).map_err(yaml_syntax_error)
    } else {
        match serde_json::from_str(raw) {
            Ok(value) => Ok(value),
            // Position from the JSON attempt is the useful one to surface.
            Err(json_err) => serde_yaml::from_str(raw).map_err(|_| json_syntax_error(json_err)),
        }
    }
}

fn json_syntax_error(err: serde_json::Error) -> PipelineError {
    PipelineError::DocumentSyntax {
        line: Some(err.line()).filter(|l| *l > 0),
        column: Some(err.column()).filter(|c| *c > 0),
        message: err.to_string(),
    }
}

fn yaml_syntax_error(err: serde_yaml::Error) -> PipelineError {
    let location = err.location();
    PipelineError::DocumentSyntax {
        line: location.as_ref().map(|l| l.line()),
        column: location.as_ref().map(|l| l.column()),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_document() {
        let value = parse_document(r#"{"swagger": "2.0", "paths": {}}"#, "doc.json").unwrap();
        assert_eq!(value["swagger"], "2.0");
    }

    #[test]
    fn parses_yaml_document() {
        let value = parse_document("swagger: '2.0'\npaths: {}\n", "doc.yaml").unwrap();
        assert_eq!(value["swagger"], "2.0");
    }

    #[test]
    fn extensionless_source_tries_json_then_yaml() {
        let value = parse_document("swagger: '2.0'\n", "https://x/spec").unwrap();
        assert_eq!(value["swagger"], "2.0");
    }

    #[test]
    fn trailing_comma_reports_line_number() {
        let raw = "{\n  \"swagger\": \"2.0\",\n}";
        let err = parse_document(raw, "doc.json").unwrap_err();
        match err {
            PipelineError::DocumentSyntax { line, message, .. } => {
                assert_eq!(line, Some(3));
                assert!(message.contains("line 3"));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn json_only_for_json_sources() {
        // Valid YAML, but the .json source pins the format to JSON.
        let err = parse_document("swagger: '2.0'\n", "doc.json").unwrap_err();
        assert!(matches!(err, PipelineError::DocumentSyntax { .. }));
    }
}
