//! Profile orchestration: one independent pipeline per profile.
//!
//! Every non-skipped profile runs validate → resolve → parse → normalize →
//! (debug dump) → resolve generator → validate hook → generate → write. The
//! pipelines share one logical thread of control and suspend independently
//! on I/O; a failure is logged at the profile's granularity and never aborts
//! sibling profiles.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info};

use crate::config::{Config, Profile};
use crate::definition::{Normalizer, SwaggerNormalizer, parse_document};
use crate::errors::PipelineError;
use crate::generator::GeneratorRegistry;
use crate::output::{write_artifact, write_definition_dump};
use crate::source::DocumentResolver;

/// Aggregate outcome of one orchestration pass. Surfaced for observability
/// only: per-profile failures never become an invocation failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Orchestrates all profiles of a configuration against one explicit
/// working directory.
pub struct Pipeline {
    workdir: PathBuf,
    resolver: DocumentResolver,
    registry: GeneratorRegistry,
    normalizer: Arc<dyn Normalizer>,
}

impl Pipeline {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        let workdir = workdir.as_ref().to_path_buf();
        Self {
            resolver: DocumentResolver::new(&workdir),
            registry: GeneratorRegistry::with_defaults(),
            normalizer: Arc::new(SwaggerNormalizer),
            workdir,
        }
    }

    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Process every profile. Profiles launch together and resume
    /// independently as their I/O completes; completion order is
    /// unspecified, and profiles sharing an output path are
    /// last-writer-wins.
    pub async fn run(&self, config: &Config) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut pipelines = Vec::new();

        for (name, profile) in &config.profiles {
            if profile.skip {
                info!(profile = %name, "profile skipped");
                summary.skipped += 1;
                continue;
            }
            pipelines.push(async move { (name.as_str(), self.process(name, profile).await) });
        }

        for (name, outcome) in join_all(pipelines).await {
            match outcome {
                Ok(artifact) => {
                    info!(profile = %name, artifact = %artifact.display(), "profile complete");
                    summary.generated += 1;
                }
                Err(err) => {
                    error!(profile = %name, error = %err, "profile failed");
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// One profile's pipeline, start to artifact. Any error is fatal to this
    /// profile only.
    async fn process(&self, name: &str, profile: &Profile) -> Result<PathBuf, PipelineError> {
        profile.validate(name)?;

        // validate() guarantees these fields; the fallbacks are unreachable.
        let source = profile
            .source()
            .ok_or_else(|| missing_field(name, "file or url"))?;
        let output = profile
            .output
            .as_deref()
            .ok_or_else(|| missing_field(name, "output"))?;
        let generator_spec = profile
            .generator
            .as_deref()
            .ok_or_else(|| missing_field(name, "generator"))?;

        let raw = self.resolver.resolve(&source).await?;
        let document = parse_document(&raw, source.as_str())?;
        let definition = self.normalizer.normalize(&document)?;

        if let Some(dump) = &profile.debug.definition {
            let dump_path = self.resolve_path(dump);
            write_definition_dump(&dump_path, &definition).await?;
            info!(profile = %name, path = %dump_path.display(), "definition dumped");
        }

        let generator = self.registry.resolve(generator_spec, &self.workdir)?;
        generator
            .validate_profile(profile)
            .map_err(|e| PipelineError::GeneratorValidation(e.to_string()))?;
        let body = generator
            .generate(&definition, profile)
            .map_err(|e| PipelineError::Generation(e.to_string()))?;

        let artifact = self.resolve_path(output);
        write_artifact(&artifact, &body).await?;
        Ok(artifact)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }
}

fn missing_field(profile: &str, field: &str) -> PipelineError {
    PipelineError::Configuration {
        profile: profile.to_string(),
        reason: format!("`{field}` is required"),
    }
}
