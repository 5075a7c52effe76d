//! Generator plugins: the capability trait, resolution and the stock
//! implementations.

pub mod assembler;
pub mod registry;
pub mod template;
pub mod typescript;

pub use assembler::{CodeAssembler, LINE_TERMINATOR, LineBuffer, SubGenerator};
pub use registry::{GENERATOR_PACKAGE_PREFIX, GeneratorRegistry};
pub use template::TemplateGenerator;
pub use typescript::TypeScriptGenerator;

use crate::config::Profile;
use crate::definition::Definition;
use crate::errors::GeneratorError;

/// Capability interface every generator plugin implements.
///
/// `generate` is the required entry point; `validate_profile` is the optional
/// hook, invoked first, whose failure aborts the profile before generation.
pub trait Generator: Send + Sync {
    /// Short name the registry resolves this generator under.
    fn name(&self) -> &str;

    /// Optional profile-compatibility hook. Defaults to accepting anything.
    fn validate_profile(&self, _profile: &Profile) -> Result<(), GeneratorError> {
        Ok(())
    }

    /// Produce the artifact body. The output is written verbatim.
    fn generate(&self, definition: &Definition, profile: &Profile)
    -> Result<String, GeneratorError>;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("name", &self.name()).finish()
    }
}
