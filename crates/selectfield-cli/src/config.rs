//! Bundle manifest loaded from `selectfield.yaml`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default manifest location.
pub const DEFAULT_MANIFEST: &str = "selectfield.yaml";

/// Manifest loading or validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Manifest could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// Manifest is not valid YAML for [`BundleManifest`]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Manifest parsed but is unusable
    #[error("Validation error: {0}")]
    Invalid(String),
}

/// A runtime package the bundle expects the host to provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct External {
    /// npm package name
    pub package: String,
    /// Accepted version range
    #[serde(default = "default_range")]
    pub version: String,
}

fn default_range() -> String {
    "*".to_string()
}

/// Library bundle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleManifest {
    /// Library name
    pub name: String,
    /// Base name for every emitted file
    pub file_name: String,
    /// Package version written to package.json
    pub version: String,
    /// Crate built with wasm-pack
    pub entry: PathBuf,
    /// Emit one CSS file per stylesheet scope instead of one combined file
    pub css_code_split: bool,
    /// Packages left out of the bundle
    pub externals: Vec<External>,
}

impl Default for BundleManifest {
    fn default() -> Self {
        Self {
            name: "SelectComponent".to_string(),
            file_name: "select-field".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            entry: PathBuf::from("crates/selectfield"),
            css_code_split: false,
            externals: Vec::new(),
        }
    }
}

impl BundleManifest {
    /// Parse a manifest; omitted fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "manifest not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Check the settings a bundle depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("file_name must not be empty".to_string()));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "file_name '{}' must not contain path separators",
                self.file_name
            )));
        }

        let mut seen = HashSet::new();
        for external in &self.externals {
            if external.package.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "external package name must not be empty".to_string(),
                ));
            }
            if !seen.insert(external.package.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "external '{}' listed twice",
                    external.package
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_YAML: &str = r#"
name: SelectComponent
file_name: select-field
entry: crates/selectfield
css_code_split: false
externals:
  - package: "@acme/host-runtime"
    version: "^2.0"
  - package: "@acme/host-dom"
"#;

    #[test]
    fn test_parse_example() {
        let manifest = BundleManifest::from_yaml(EXAMPLE_YAML).unwrap();
        assert_eq!(manifest.name, "SelectComponent");
        assert_eq!(manifest.file_name, "select-field");
        assert!(!manifest.css_code_split);
        assert_eq!(manifest.externals.len(), 2);
        assert_eq!(manifest.externals[0].version, "^2.0");
        assert_eq!(manifest.externals[1].version, "*");
        manifest.validate().unwrap();
    }

    #[test]
    fn test_partial_manifest_uses_defaults() {
        let manifest = BundleManifest::from_yaml("file_name: picker\n").unwrap();
        assert_eq!(manifest.file_name, "picker");
        assert_eq!(manifest.name, "SelectComponent");
        assert_eq!(manifest.entry, PathBuf::from("crates/selectfield"));
        assert!(manifest.externals.is_empty());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = BundleManifest::from_yaml("externals: 12").unwrap_err();
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_shipped_manifest() {
        let yaml = include_str!("../../../selectfield.yaml");
        let manifest = BundleManifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.name, "SelectComponent");
        assert!(manifest.externals.is_empty());
        manifest.validate().unwrap();

        // The commented example is valid once uncommented.
        let example: String = yaml
            .lines()
            .filter(|line| *line != "externals: []")
            .map(|line| match line.strip_prefix("# ") {
                Some(rest) if rest.starts_with("externals:") || rest.starts_with("  ") => rest,
                _ => line,
            })
            .collect::<Vec<_>>()
            .join("\n");
        let manifest = BundleManifest::from_yaml(&example).unwrap();
        let packages: Vec<&str> = manifest.externals.iter().map(|e| e.package.as_str()).collect();
        assert_eq!(packages, vec!["react", "react-dom"]);
        assert_eq!(manifest.externals[0].version, ">=17");
        manifest.validate().unwrap();
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = BundleManifest::load_or_default(&dir.path().join("none.yaml")).unwrap();
        assert_eq!(manifest, BundleManifest::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "name: Picker\ncss_code_split: true\n").unwrap();
        let manifest = BundleManifest::load_or_default(&path).unwrap();
        assert_eq!(manifest.name, "Picker");
        assert!(manifest.css_code_split);
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let manifest = BundleManifest {
            name: " ".to_string(),
            ..BundleManifest::default()
        };
        assert!(matches!(manifest.validate(), Err(ConfigError::Invalid(_))));

        let manifest = BundleManifest {
            file_name: String::new(),
            ..BundleManifest::default()
        };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_path_in_file_name() {
        let manifest = BundleManifest {
            file_name: "../escape".to_string(),
            ..BundleManifest::default()
        };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_externals() {
        let external = |package: &str| External {
            package: package.to_string(),
            version: default_range(),
        };

        let manifest = BundleManifest {
            externals: vec![external("")],
            ..BundleManifest::default()
        };
        assert!(manifest.validate().is_err());

        let manifest = BundleManifest {
            externals: vec![external("host"), external("host")],
            ..BundleManifest::default()
        };
        let err = manifest.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: external 'host' listed twice");
    }
}
