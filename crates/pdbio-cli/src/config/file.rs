use crate::error::{CliError, Result};
use pdbio::core::io::traits::{AccessMode, FileAccessError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileReadConfig {
    pub strictness: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileWriteConfig {
    pub symmetries: Option<bool>,
    pub bonds: Option<bool>,
    pub crystal: Option<bool>,
    pub matrices: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub read: Option<FileReadConfig>,
    pub write: Option<FileWriteConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)
            .map_err(|source| FileAccessError::new(path, AccessMode::Read, source))?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_sections() {
        let config = FileConfig::from_toml_str(
            r#"
            [read]
            strictness = "strict"

            [write]
            bonds = true
            crystal = false
            "#,
        )
        .unwrap();

        let read = config.read.unwrap();
        assert_eq!(read.strictness.as_deref(), Some("strict"));
        let write = config.write.unwrap();
        assert_eq!(write.bonds, Some(true));
        assert_eq!(write.crystal, Some(false));
        assert_eq!(write.symmetries, None);
    }

    #[test]
    fn empty_file_is_valid() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.read.is_none());
        assert!(config.write.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("[write]\nhelices = true\n").is_err());
        assert!(FileConfig::from_toml_str("[output]\n").is_err());
    }

    #[test]
    fn from_file_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdbio.toml");
        std::fs::write(&path, "[read]\nstrictness = 3\n").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("pdbio.toml"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileAccess(_)));
        assert!(err.to_string().contains("absent.toml"));
    }
}
