//! File-based document loader.
//!
//! This loader handles only file I/O; parsing happens later in the pipeline.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::SourceError;
use crate::source::DocumentLoader;

/// Loads raw documents from local files, resolving relative paths against an
/// explicit working directory instead of the process-wide one.
pub struct FileLoader {
    workdir: PathBuf,
}

impl FileLoader {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }
}

#[async_trait]
impl DocumentLoader for FileLoader {
    async fn load(&self, source: &str) -> Result<String, SourceError> {
        let path = self.resolve(source);
        fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SourceError::Missing(path.display().to_string())
            } else {
                SourceError::Read {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })
    }
}
