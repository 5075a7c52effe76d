//! Code assembly for generators composed of sub-generators.
//!
//! Sub-generators append lines to one shared growable buffer in a fixed
//! order: boilerplate first, then per-resource service code, then a single
//! blank separator line, then model definitions. The order and the single
//! separator are a stable contract: the same definition always assembles to
//! byte-identical output.

use crate::config::Profile;
use crate::definition::Definition;
use crate::errors::GeneratorError;

/// Platform line terminator used to join assembled lines.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Append-only sequence of output lines. Prior entries are never replaced
/// or reordered.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with the platform line terminator.
    pub fn join(&self) -> String {
        self.lines.join(LINE_TERMINATOR)
    }
}

/// One composable unit of output, appending lines to the shared buffer.
pub trait SubGenerator: Send + Sync {
    fn append(
        &self,
        definition: &Definition,
        profile: &Profile,
        out: &mut LineBuffer,
    ) -> Result<(), GeneratorError>;
}

/// Runs sub-generators in the fixed boilerplate → services → models order
/// with exactly one blank line between the service and model sections.
#[derive(Default)]
pub struct CodeAssembler {
    boilerplate: Vec<Box<dyn SubGenerator>>,
    services: Vec<Box<dyn SubGenerator>>,
    models: Vec<Box<dyn SubGenerator>>,
}

impl CodeAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boilerplate(mut self, generator: Box<dyn SubGenerator>) -> Self {
        self.boilerplate.push(generator);
        self
    }

    pub fn service(mut self, generator: Box<dyn SubGenerator>) -> Self {
        self.services.push(generator);
        self
    }

    pub fn model(mut self, generator: Box<dyn SubGenerator>) -> Self {
        self.models.push(generator);
        self
    }

    pub fn assemble(
        &self,
        definition: &Definition,
        profile: &Profile,
    ) -> Result<String, GeneratorError> {
        let mut out = LineBuffer::new();
        for generator in &self.boilerplate {
            generator.append(definition, profile, &mut out)?;
        }
        for generator in &self.services {
            generator.append(definition, profile, &mut out)?;
        }
        out.blank();
        for generator in &self.models {
            generator.append(definition, profile, &mut out)?;
        }
        Ok(out.join())
    }
}
