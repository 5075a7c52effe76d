//! Configuration model: discovery, profiles, validation.

pub mod discovery;
pub mod profile;

pub use discovery::{CONFIG_FILE_JSON, CONFIG_FILE_TOML, Config, discover};
pub use profile::{DebugOptions, DocumentSource, Profile, RESERVED_GENERATOR};
