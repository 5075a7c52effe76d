//! Configuration discovery and parsing.
//!
//! A configuration is a mapping from profile name to profile; key order in
//! the file is the processing order. Discovery looks for the TOML form first,
//! then the JSON form, in the working directory.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::config::Profile;
use crate::errors::DiscoveryError;

/// Preferred configuration file name.
pub const CONFIG_FILE_TOML: &str = "specforge.toml";
/// Fallback configuration file name.
pub const CONFIG_FILE_JSON: &str = "specforge.json";

/// Parsed configuration: profiles in file order.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub profiles: Vec<(String, Profile)>,
}

impl Config {
    /// Parse the TOML form. Every top-level table is one profile.
    pub fn from_toml_str(text: &str) -> Result<Config, String> {
        let table: toml::Table = toml::from_str(text).map_err(|e| e.to_string())?;
        let mut profiles = Vec::with_capacity(table.len());
        for (name, value) in table {
            let profile: Profile = value
                .try_into()
                .map_err(|e| format!("profile `{name}`: {e}"))?;
            profiles.push((name, profile));
        }
        Ok(Config { profiles })
    }

    /// Parse the JSON form. Every top-level key is one profile.
    pub fn from_json_str(text: &str) -> Result<Config, String> {
        let map: serde_json::Map<String, JsonValue> =
            serde_json::from_str(text).map_err(|e| e.to_string())?;
        let mut profiles = Vec::with_capacity(map.len());
        for (name, value) in map {
            let profile: Profile = serde_json::from_value(value)
                .map_err(|e| format!("profile `{name}`: {e}"))?;
            profiles.push((name, profile));
        }
        Ok(Config { profiles })
    }
}

/// Locate and parse the configuration in `workdir`. Absence of both
/// conventional files is the sole invocation-fatal condition.
pub fn discover(workdir: &Path) -> Result<Config, DiscoveryError> {
    let toml_path = workdir.join(CONFIG_FILE_TOML);
    if toml_path.exists() {
        let text = fs::read_to_string(&toml_path).map_err(|e| DiscoveryError::Io {
            path: toml_path.clone(),
            source: e,
        })?;
        return Config::from_toml_str(&text).map_err(|reason| DiscoveryError::Parse {
            path: toml_path,
            reason,
        });
    }

    let json_path = workdir.join(CONFIG_FILE_JSON);
    if json_path.exists() {
        let text = fs::read_to_string(&json_path).map_err(|e| DiscoveryError::Io {
            path: json_path.clone(),
            source: e,
        })?;
        return Config::from_json_str(&text).map_err(|reason| DiscoveryError::Parse {
            path: json_path,
            reason,
        });
    }

    Err(DiscoveryError::NotFound {
        dir: workdir.to_path_buf(),
    })
}
