//! Artifact write-out.

use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::definition::Definition;
use crate::errors::PipelineError;

/// Write generator output verbatim, creating parent directories and
/// overwriting any existing file.
pub async fn write_artifact(path: &Path, content: &str) -> Result<(), PipelineError> {
    let output_error = |source| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(output_error)?;
    }

    let mut file = fs::File::create(path).await.map_err(output_error)?;
    file.write_all(content.as_bytes())
        .await
        .map_err(output_error)?;
    file.flush().await.map_err(output_error)?;
    Ok(())
}

/// Serialize the definition as indented JSON to the debug dump path.
pub async fn write_definition_dump(path: &Path, definition: &Definition) -> Result<(), PipelineError> {
    let pretty = serde_json::to_string_pretty(definition).map_err(|e| PipelineError::Output {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    write_artifact(path, &pretty).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ApiInfo;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("deep/nested/out.ts");

        write_artifact(&path, "export {};").await.expect("writes");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {};");
    }

    #[tokio::test]
    async fn overwrites_existing_files() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("out.ts");
        std::fs::write(&path, "old content").unwrap();

        write_artifact(&path, "new").await.expect("writes");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn dump_is_parseable_json() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("definition.json");
        let definition = Definition {
            info: ApiInfo {
                title: "Petstore".to_string(),
                version: "1.0.0".to_string(),
                description: None,
                base_path: None,
            },
            resources: Vec::new(),
            models: Vec::new(),
        };

        write_definition_dump(&path, &definition).await.expect("dumps");
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["info"]["title"], "Petstore");
        // Indented, not minified.
        assert!(text.contains("\n  "));
    }
}
