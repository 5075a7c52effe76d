//! Profile model and structural validation.
//!
//! A profile names one input document, one generator and one output path.
//! Validation runs before any I/O so malformed profiles fail fast.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::PipelineError;

/// Generator name reserved for the internal runtime package.
pub const RESERVED_GENERATOR: &str = "core";

/// `<word>-language` names are reserved for language helper packages.
static LANGUAGE_HELPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\w+-language$").expect("valid reserved-name pattern"));

/// One named unit of configuration: input document, generator, output path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Local path to the input document, resolved against the working
    /// directory. Takes precedence over `url` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Remote URL of the input document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Destination path for the generated artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Generator name or local template path (path-indicator prefixed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    /// When true the profile is omitted from processing entirely.
    #[serde(default)]
    pub skip: bool,

    /// Diagnostic side effects.
    #[serde(default)]
    pub debug: DebugOptions,

    /// Opaque passthrough to the normalizer/generator.
    #[serde(default)]
    pub transforms: Map<String, JsonValue>,

    /// Opaque passthrough to the generator.
    #[serde(default)]
    pub options: Map<String, JsonValue>,
}

/// Recognized diagnostic options. Unrecognized keys are preserved for
/// generator-defined debug flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugOptions {
    /// When set, the normalized definition is serialized (pretty-printed
    /// JSON) to this path before generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// The input source selected for a profile. `file` wins when both fields
/// are set, mirroring the first-checked-wins precedence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(String),
    Url(String),
}

impl DocumentSource {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentSource::File(path) => path,
            DocumentSource::Url(url) => url,
        }
    }
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

impl Profile {
    /// Select the input source. `None` when neither field is meaningfully set.
    pub fn source(&self) -> Option<DocumentSource> {
        if is_set(&self.file) {
            self.file.clone().map(DocumentSource::File)
        } else if is_set(&self.url) {
            self.url.clone().map(DocumentSource::Url)
        } else {
            None
        }
    }

    /// Check structural completeness, failing with a profile-keyed
    /// configuration error. Must run before any input resolution.
    pub fn validate(&self, key: &str) -> Result<(), PipelineError> {
        let fail = |reason: &str| PipelineError::Configuration {
            profile: key.to_string(),
            reason: reason.to_string(),
        };

        if self.source().is_none() {
            return Err(fail("neither `file` nor `url` is set"));
        }
        if !is_set(&self.output) {
            return Err(fail("`output` is required"));
        }
        let generator = self
            .generator
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| fail("`generator` is required"))?;
        if generator.eq_ignore_ascii_case(RESERVED_GENERATOR) {
            return Err(fail("`core` is a reserved generator name"));
        }
        if LANGUAGE_HELPER.is_match(generator) {
            return Err(fail(
                "`*-language` generator names are reserved for language helper packages",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Profile {
        Profile {
            file: Some("petstore.json".to_string()),
            output: Some("petstore.ts".to_string()),
            generator: Some("typescript".to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(minimal().validate("petstore").is_ok());
    }

    #[test]
    fn missing_both_sources_fails() {
        let profile = Profile {
            file: None,
            url: None,
            ..minimal()
        };
        let err = profile.validate("petstore").unwrap_err();
        match err {
            PipelineError::Configuration { profile, reason } => {
                assert_eq!(profile, "petstore");
                assert!(reason.contains("neither `file` nor `url`"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_strings_count_as_unset() {
        let profile = Profile {
            file: Some(String::new()),
            url: Some(String::new()),
            ..minimal()
        };
        assert!(profile.validate("petstore").is_err());
    }

    #[test]
    fn missing_output_fails() {
        let profile = Profile {
            output: None,
            ..minimal()
        };
        assert!(profile.validate("petstore").is_err());
    }

    #[test]
    fn missing_generator_fails() {
        let profile = Profile {
            generator: None,
            ..minimal()
        };
        assert!(profile.validate("petstore").is_err());
    }

    #[test]
    fn reserved_core_name_fails_any_case() {
        for name in ["core", "Core", "CORE", "cOrE"] {
            let profile = Profile {
                generator: Some(name.to_string()),
                ..minimal()
            };
            let err = profile.validate("petstore").unwrap_err();
            assert!(err.to_string().contains("reserved"), "{name} not rejected");
        }
    }

    #[test]
    fn language_helper_suffix_fails_any_case() {
        for name in ["swift-language", "Rust-Language", "ES6-LANGUAGE"] {
            let profile = Profile {
                generator: Some(name.to_string()),
                ..minimal()
            };
            assert!(profile.validate("petstore").is_err(), "{name} not rejected");
        }
    }

    #[test]
    fn language_helper_infix_is_allowed() {
        let profile = Profile {
            generator: Some("my-language-kit".to_string()),
            ..minimal()
        };
        assert!(profile.validate("petstore").is_ok());
    }

    #[test]
    fn file_wins_over_url() {
        let profile = Profile {
            file: Some("petstore.json".to_string()),
            url: Some("https://example.com/doc.json".to_string()),
            ..minimal()
        };
        assert_eq!(
            profile.source(),
            Some(DocumentSource::File("petstore.json".to_string()))
        );
    }

    #[test]
    fn defaults_materialize_empty_maps() {
        let profile: Profile = serde_json::from_str(
            r#"{"file": "a.json", "output": "a.ts", "generator": "typescript"}"#,
        )
        .expect("minimal profile parses");
        assert!(profile.transforms.is_empty());
        assert!(profile.options.is_empty());
        assert!(profile.debug.definition.is_none());
        assert!(!profile.skip);
    }
}
