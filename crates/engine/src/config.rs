// crates/engine/src/config.rs
//! Language catalog: loads and validates the per-language rule set from a
//! JSON configuration file and resolves names to `LanguageSpec`s.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result, RipperError, ValidationError};
use crate::spec::{ColumnConstraint, LanguageSpec};

/// Raw shape of the configuration file: `{"languages": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageCatalog {
    languages: Vec<LanguageEntry>,
}

/// One language record as written in the configuration file. Field names
/// follow the file format, not Rust convention.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageEntry {
    pub language: String,
    #[serde(rename = "single-line", default)]
    pub single_line: Vec<String>,
    #[serde(rename = "multi-line-start", default)]
    pub multi_line_start: Option<String>,
    #[serde(rename = "multi-line-end", default)]
    pub multi_line_end: Option<String>,
    #[serde(default)]
    pub position: Vec<PositionEntry>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionEntry {
    pub column: i64,
}

impl LanguageCatalog {
    /// Reads and validates a configuration file. Nothing downstream runs on
    /// an invalid catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let path = crate::fs::check_file(path)?;
        let text = std::fs::read_to_string(&path).map_err(|source| RipperError::FileRead {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses and validates configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(text).map_err(|e| ValidationError {
            path: format!("line {} column {}", e.line(), e.column()),
            reason: e.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Structural checks beyond what serde expresses, each reported with
    /// the path of the offending element.
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (i, entry) in self.languages.iter().enumerate() {
            if entry.language.trim().is_empty() {
                return Err(ValidationError {
                    path: format!("languages[{i}].language"),
                    reason: "must not be empty".to_string(),
                });
            }

            if entry.multi_line_start.is_some() != entry.multi_line_end.is_some() {
                return Err(ValidationError {
                    path: format!("languages[{i}].multi-line-start"),
                    reason: "multi-line-start and multi-line-end must be set together"
                        .to_string(),
                });
            }

            if !entry.position.is_empty() && entry.position.len() != entry.single_line.len() {
                return Err(ValidationError {
                    path: format!("languages[{i}].position"),
                    reason: format!(
                        "{} entries for {} single-line markers",
                        entry.position.len(),
                        entry.single_line.len()
                    ),
                });
            }

            for (j, pos) in entry.position.iter().enumerate() {
                if pos.column < 1 {
                    return Err(ValidationError {
                        path: format!("languages[{i}].position[{j}].column"),
                        reason: "must be a positive integer".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Names of all configured languages, in file order.
    pub fn language_names(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.language.as_str()).collect()
    }

    /// Resolves a language name to its validated spec.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownLanguage` when the name is absent.
    pub fn resolve(&self, name: &str) -> Result<LanguageSpec> {
        let entry = self
            .languages
            .iter()
            .find(|l| l.language == name)
            .ok_or_else(|| ConfigError::UnknownLanguage(name.to_string()))?;
        entry.to_spec()
    }
}

impl LanguageEntry {
    fn to_spec(&self) -> Result<LanguageSpec> {
        let multi_line = match (&self.multi_line_start, &self.multi_line_end) {
            (Some(start), Some(end)) => Some((start.clone(), end.clone())),
            _ => None,
        };
        let positions = self
            .position
            .iter()
            .map(|p| ColumnConstraint {
                column: p.column as usize,
            })
            .collect();

        Ok(LanguageSpec::new(
            self.language.clone(),
            self.single_line.clone(),
            multi_line,
            positions,
            self.extensions.clone(),
        )?)
    }
}
