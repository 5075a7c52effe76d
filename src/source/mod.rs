//! Document resolution: obtain raw document text from a file or URL.

pub mod file;
pub mod http;

use std::path::Path;

use async_trait::async_trait;

pub use file::FileLoader;
pub use http::HttpLoader;

use crate::config::DocumentSource;
use crate::errors::SourceError;

/// Port for obtaining raw document text from one source string.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<String, SourceError>;
}

/// Routes a profile's selected source to the matching loader variant.
///
/// Selection is by which profile field is set, not by string shape, so a
/// `file` value is always read from disk even if it looks like a URL.
pub struct DocumentResolver {
    file: Box<dyn DocumentLoader>,
    http: Box<dyn DocumentLoader>,
}

impl DocumentResolver {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            file: Box::new(FileLoader::new(workdir)),
            http: Box::new(HttpLoader::new()),
        }
    }

    pub fn with_loaders(file: Box<dyn DocumentLoader>, http: Box<dyn DocumentLoader>) -> Self {
        Self { file, http }
    }

    pub async fn resolve(&self, source: &DocumentSource) -> Result<String, SourceError> {
        match source {
            DocumentSource::File(path) => {
                tracing::debug!(path = %path, "resolving document from file");
                self.file.load(path).await
            }
            DocumentSource::Url(url) => {
                tracing::debug!(url = %url, "resolving document from URL");
                self.http.load(url).await
            }
        }
    }
}
