//! specforge: profile-driven code generation from API descriptions.
//!
//! A configuration names a set of profiles; each profile points at one input
//! document (file or URL), one generator and one output path. The pipeline
//! resolves the document, normalizes it into a generator-agnostic
//! [`definition::Definition`] and drives a [`generator::Generator`] plugin to
//! produce the artifact. Profiles are processed independently: one profile's
//! failure never aborts its siblings.

#![deny(unsafe_code)]

pub mod config;
pub mod definition;
pub mod errors;
pub mod generator;
pub mod init;
pub mod output;
pub mod pipeline;
pub mod source;

pub use config::{Config, Profile, discover};
pub use errors::{DiscoveryError, PipelineError, SourceError};
pub use pipeline::{Pipeline, RunSummary};
