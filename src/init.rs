//! `init` scaffolding: write a starter configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_JSON, CONFIG_FILE_TOML};
use crate::errors::InitError;

const STARTER_CONFIG: &str = r#"# specforge configuration.
# Every top-level table is one generation profile.

[petstore]
# Path or URL to the API description document. `file` wins when both are set.
file = "petstore.json"
# url = "https://petstore.swagger.io/v2/swagger.json"
output = "src/petstore.ts"
generator = "typescript"
# skip = true

# Dump the normalized definition for diagnostics:
# [petstore.debug]
# definition = "petstore.definition.json"
"#;

/// Write a starter `specforge.toml` into `workdir`. Refuses to overwrite an
/// existing configuration in either form.
pub fn scaffold(workdir: &Path) -> Result<PathBuf, InitError> {
    for existing in [CONFIG_FILE_TOML, CONFIG_FILE_JSON] {
        let path = workdir.join(existing);
        if path.exists() {
            return Err(InitError::AlreadyExists(path));
        }
    }

    let path = workdir.join(CONFIG_FILE_TOML);
    fs::write(&path, STARTER_CONFIG).map_err(|e| InitError::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn starter_config_is_parseable() {
        let config = Config::from_toml_str(STARTER_CONFIG).expect("starter parses");
        assert_eq!(config.profiles.len(), 1);
        let (name, profile) = &config.profiles[0];
        assert_eq!(name, "petstore");
        assert!(profile.validate(name).is_ok());
    }

    #[test]
    fn scaffold_writes_toml_form() {
        let dir = TempDir::new().expect("tempdir");
        let path = scaffold(dir.path()).expect("scaffolds");
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_TOML);
        assert!(path.exists());
    }

    #[test]
    fn scaffold_refuses_to_overwrite() {
        let dir = TempDir::new().expect("tempdir");
        scaffold(dir.path()).expect("first scaffold");
        let err = scaffold(dir.path()).unwrap_err();
        assert!(matches!(err, InitError::AlreadyExists(_)));
    }

    #[test]
    fn scaffold_respects_json_form_too() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE_JSON), "{}").unwrap();
        assert!(scaffold(dir.path()).is_err());
    }
}
