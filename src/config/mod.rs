// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Practice session configuration.
//!
//! This module provides the YAML document holding the default selection
//! state (progression, key, rhythm) and a validation pass against the
//! loaded catalogs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::layout::Rhythm;

/// Root configuration for a practice session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PracticeFile {
    /// Selection defaults
    pub practice: PracticeConfig,
}

/// Selection defaults for a practice session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeConfig {
    /// Progression display name
    #[serde(default = "default_progression")]
    pub progression: String,
    /// Key display name
    #[serde(default = "default_key")]
    pub key: String,
    /// Rhythm selector value (e.g. "block", "arp-up")
    #[serde(default = "default_rhythm")]
    pub rhythm: String,
}

fn default_progression() -> String {
    "I – V – vi – IV ('Axis of Awesome')".to_string()
}
fn default_key() -> String {
    "C Major".to_string()
}
fn default_rhythm() -> String {
    "block".to_string()
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            progression: default_progression(),
            key: default_key(),
            rhythm: default_rhythm(),
        }
    }
}

impl PracticeFile {
    /// Load a practice configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a practice configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check the selections against the catalog.
    ///
    /// Returns one warning per selection that would render as a no-op.
    pub fn validate(&self, catalog: &Catalog) -> Vec<String> {
        let mut warnings = Vec::new();
        let practice = &self.practice;

        if catalog.progression(&practice.progression).is_none() {
            warnings.push(format!("unknown progression: {:?}", practice.progression));
        }
        if catalog.key(&practice.key).is_none() {
            warnings.push(format!("unknown key: {:?}", practice.key));
        }
        if Rhythm::from_str(&practice.rhythm).is_none() {
            warnings.push(format!("unknown rhythm: {:?}", practice.rhythm));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let file = PracticeFile::default();
        assert_eq!(file.practice.key, "C Major");
        assert_eq!(file.practice.rhythm, "block");
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let file = PracticeFile::from_yaml("practice:\n  key: \"G Major\"\n").unwrap();
        assert_eq!(file.practice.key, "G Major");
        // Missing fields fall back to the serde defaults
        assert_eq!(file.practice.rhythm, "block");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(PracticeFile::from_yaml("this is not valid yaml: [").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("practice.yaml");

        let mut file = PracticeFile::default();
        file.practice.key = "Eb Major".to_string();
        file.practice.rhythm = "arp-up-down".to_string();
        file.save(&path).unwrap();

        let loaded = PracticeFile::load(&path).unwrap();
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(PracticeFile::load(dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_validate_default_config_is_clean() {
        let catalog = Catalog::builtin().unwrap();
        let file = PracticeFile::default();
        assert!(file.validate(&catalog).is_empty());
    }

    #[test]
    fn test_validate_reports_unknown_selections() {
        let catalog = Catalog::builtin().unwrap();
        let mut file = PracticeFile::default();
        file.practice.progression = "not a progression".to_string();
        file.practice.rhythm = "swing".to_string();

        let warnings = file.validate(&catalog);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("progression"));
        assert!(warnings[1].contains("rhythm"));
    }
}
