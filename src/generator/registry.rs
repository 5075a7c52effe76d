//! Generator resolution: short names against registered packages, path
//! indicators against local template files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::errors::PipelineError;
use crate::generator::{Generator, TemplateGenerator, TypeScriptGenerator};

/// Conventional package namespace for distributable generators. Used in
/// resolution errors to point users at the package they are missing.
pub const GENERATOR_PACKAGE_PREFIX: &str = "specforge-gen-";

/// Explicit registry behind which both resolution strategies live.
pub struct GeneratorRegistry {
    builtin: HashMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn empty() -> Self {
        Self {
            builtin: HashMap::new(),
        }
    }

    /// Registry with the stock generators installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(TypeScriptGenerator::new()));
        registry
    }

    pub fn register(&mut self, generator: Arc<dyn Generator>) {
        self.builtin.insert(generator.name().to_string(), generator);
    }

    /// Resolve a profile's `generator` string. Path-indicator strings load a
    /// template file relative to the working directory; anything else is a
    /// short name looked up among registered generators.
    pub fn resolve(
        &self,
        spec: &str,
        workdir: &Path,
    ) -> Result<Arc<dyn Generator>, PipelineError> {
        if is_path_spec(spec) {
            let path = if Path::new(spec).is_absolute() {
                Path::new(spec).to_path_buf()
            } else {
                workdir.join(spec)
            };
            let generator = TemplateGenerator::from_file(&path)
                .map_err(|e| PipelineError::GeneratorResolution(e.to_string()))?;
            return Ok(Arc::new(generator));
        }

        self.builtin.get(spec).cloned().ok_or_else(|| {
            PipelineError::GeneratorResolution(format!(
                "no generator named `{spec}` is registered \
                 (expected package `{GENERATOR_PACKAGE_PREFIX}{spec}`)"
            ))
        })
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn is_path_spec(spec: &str) -> bool {
    spec.starts_with("./")
        || spec.starts_with("../")
        || spec.starts_with(".\\")
        || Path::new(spec).is_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn short_names_resolve_builtins() {
        let registry = GeneratorRegistry::with_defaults();
        let generator = registry
            .resolve("typescript", Path::new("."))
            .expect("typescript is built in");
        assert_eq!(generator.name(), "typescript");
    }

    #[test]
    fn unknown_short_name_mentions_conventional_package() {
        let registry = GeneratorRegistry::with_defaults();
        let err = registry.resolve("kotlin", Path::new(".")).unwrap_err();
        match err {
            PipelineError::GeneratorResolution(msg) => {
                assert!(msg.contains("specforge-gen-kotlin"));
            }
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    #[test]
    fn path_specs_load_template_files() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("gen.tera"), "// {{ definition.info.title }}").unwrap();

        let registry = GeneratorRegistry::with_defaults();
        let generator = registry.resolve("./gen.tera", dir.path()).expect("loads");
        assert_eq!(generator.name(), "gen");
    }

    #[test]
    fn missing_template_path_is_a_resolution_error() {
        let dir = TempDir::new().expect("tempdir");
        let registry = GeneratorRegistry::with_defaults();
        let err = registry.resolve("./absent.tera", dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::GeneratorResolution(_)));
    }
}
