//! Tera-backed generator loaded from a local template file.
//!
//! This is the local-path resolution strategy: a profile whose `generator`
//! starts with a path indicator points at a template file instead of a
//! registered package.

use std::path::Path;

use tera::{Context, Tera};

use crate::config::Profile;
use crate::definition::Definition;
use crate::errors::GeneratorError;
use crate::generator::Generator;

const TEMPLATE_KEY: &str = "generator";

/// Generator that renders one Tera template with the definition and the
/// profile's passthrough maps in scope.
#[derive(Debug)]
pub struct TemplateGenerator {
    name: String,
    tera: Tera,
}

impl TemplateGenerator {
    /// Load a template from disk. The file stem becomes the generator name.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            GeneratorError::new(format!("cannot read template `{}`: {e}", path.display()))
        })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(TEMPLATE_KEY)
            .to_string();
        Self::from_source(name, &source)
    }

    pub fn from_source(name: String, source: &str) -> Result<Self, GeneratorError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_KEY, source)?;
        Ok(Self { name, tera })
    }
}

impl Generator for TemplateGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(
        &self,
        definition: &Definition,
        profile: &Profile,
    ) -> Result<String, GeneratorError> {
        let mut context = Context::new();
        context.insert("definition", definition);
        context.insert("options", &profile.options);
        context.insert("transforms", &profile.transforms);
        Ok(self.tera.render(TEMPLATE_KEY, &context)?)
    }
}
