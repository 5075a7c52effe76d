//! Error taxonomy for the profile pipeline.
//!
//! Every profile-scoped failure is expressed as a [`PipelineError`] variant so
//! the orchestrator can log one tagged error per profile instead of branching
//! on error shape. [`DiscoveryError`] is the sole invocation-fatal error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure domains for obtaining a raw document from a file or URL.
///
/// `Missing` is kept distinct from read/network failures so callers can tell
/// "the document is not there" apart from "the transport broke".
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document does not exist (file not found, HTTP 404).
    #[error("document not found: {0}")]
    Missing(String),

    /// A local read failed for a reason other than absence.
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A network fetch failed (transport error or non-success status).
    #[error("network failure fetching `{url}`: {reason}")]
    Network { url: String, reason: String },
}

/// Opaque failure reported by the definition normalizer.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NormalizationError(String);

impl NormalizationError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self(msg.into())
    }
}

/// Opaque failure reported by a generator plugin.
///
/// The invoker classifies it by phase: a failure from `validate_profile`
/// becomes [`PipelineError::GeneratorValidation`], a failure from `generate`
/// becomes [`PipelineError::Generation`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct GeneratorError(String);

impl GeneratorError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self(msg.into())
    }
}

impl From<tera::Error> for GeneratorError {
    fn from(err: tera::Error) -> Self {
        // Tera nests the useful message in its source chain.
        let mut msg = err.to_string();
        let mut cause: Option<&dyn std::error::Error> = std::error::Error::source(&err);
        while let Some(err) = cause {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            cause = err.source();
        }
        Self(msg)
    }
}

impl From<io::Error> for GeneratorError {
    fn from(err: io::Error) -> Self {
        Self(err.to_string())
    }
}

/// A profile-scoped pipeline failure, tagged by failure domain.
///
/// All variants are fatal to exactly one profile; none are retried. The
/// orchestrator attaches the profile key when logging, so only variants that
/// are raised before the profile boundary carry it themselves.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Bad or missing profile fields, detected before any I/O.
    #[error("profile `{profile}`: {reason}")]
    Configuration { profile: String, reason: String },

    /// File or network read failure.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The raw document is not parseable. Position is carried when the
    /// underlying parser reports one.
    #[error("invalid document: {message}")]
    DocumentSyntax {
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    /// The normalizer rejected the parsed document.
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),

    /// The configured generator could not be located or loaded.
    #[error("generator resolution failed: {0}")]
    GeneratorResolution(String),

    /// The generator's profile-validation hook rejected the profile.
    #[error("generator rejected profile: {0}")]
    GeneratorValidation(String),

    /// The generator's generation entry point failed.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Writing the artifact (or a debug dump) failed.
    #[error("failed to write `{}`: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Configuration discovery failures. `NotFound` is the only error in the
/// system that aborts the whole invocation.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(
        "no configuration file found in `{}` (looked for `specforge.toml` and `specforge.json`); \
         run `specforge init` to scaffold one",
        .dir.display()
    )]
    NotFound { dir: PathBuf },

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in `{}`: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Failures from the `init` scaffolding command.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("a configuration file already exists at `{}`", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
