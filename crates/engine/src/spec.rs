// crates/engine/src/spec.rs
//! Immutable per-language comment syntax rules.

use crate::error::ConfigError;

/// Positional constraint for a single-line marker: the marker is only
/// recognized when immediately preceded by `column - 1` literal spaces.
///
/// Columns are 1-based, matching how column-sensitive languages (COBOL,
/// classic Fortran) describe their comment indicator. The constraint is a
/// substring condition on the preceding characters, not an absolute anchor
/// from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConstraint {
    pub column: usize,
}

/// Start and end markers of a block comment. Always present as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLine {
    pub start: String,
    pub end: String,
}

/// Comment syntax description for one language.
///
/// Constructed once from configuration data and never mutated. Safe to
/// share across any number of strippers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    name: String,
    single_line: Vec<String>,
    multi_line: Option<MultiLine>,
    positions: Vec<ColumnConstraint>,
    extensions: Vec<String>,
}

impl LanguageSpec {
    /// Validates the all-or-nothing multi-line invariant, marker/constraint
    /// alignment and non-empty fields before handing out a spec.
    pub fn new(
        name: impl Into<String>,
        single_line: Vec<String>,
        multi_line: Option<(String, String)>,
        positions: Vec<ColumnConstraint>,
        extensions: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if single_line.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::EmptyMarker {
                language: name.clone(),
            });
        }

        let multi_line = match multi_line {
            None => None,
            Some((start, end)) => {
                if start.is_empty() || end.is_empty() {
                    return Err(ConfigError::MultiLineMismatch {
                        language: name.clone(),
                    });
                }
                Some(MultiLine { start, end })
            }
        };

        if !positions.is_empty() && positions.len() != single_line.len() {
            return Err(ConfigError::PositionCount {
                language: name.clone(),
                positions: positions.len(),
                markers: single_line.len(),
            });
        }

        if positions.iter().any(|p| p.column < 1) {
            return Err(ConfigError::InvalidColumn {
                language: name.clone(),
            });
        }

        let extensions = extensions
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Self {
            name,
            single_line,
            multi_line,
            positions,
            extensions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn single_line(&self) -> &[String] {
        &self.single_line
    }

    pub fn multi_line(&self) -> Option<&MultiLine> {
        self.multi_line.as_ref()
    }

    pub fn positions(&self) -> &[ColumnConstraint] {
        &self.positions
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn has_single_line(&self) -> bool {
        !self.single_line.is_empty()
    }

    pub fn has_multi_line(&self) -> bool {
        self.multi_line.is_some()
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Whether a file extension (with or without the leading dot) belongs to
    /// this language. An empty extension set matches nothing.
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.extensions.iter().any(|e| *e == ext)
    }
}

/// Strips glob noise (`*`, spaces) and the leading dot so `"*.py"`, `".py"`
/// and `"py"` all compare equal.
fn normalize_extension(ext: &str) -> String {
    ext.replace([' ', '*'], "")
        .trim_start_matches('.')
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_like() -> LanguageSpec {
        LanguageSpec::new(
            "C",
            vec!["//".to_string()],
            Some(("/*".to_string(), "*/".to_string())),
            vec![],
            vec![".c".to_string(), "*.h".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn queries_reflect_fields() {
        let spec = c_like();
        assert_eq!(spec.name(), "C");
        assert!(spec.has_single_line());
        assert!(spec.has_multi_line());
        assert!(!spec.has_positions());
        assert_eq!(spec.multi_line().unwrap().start, "/*");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = LanguageSpec::new("  ", vec![], None, vec![], vec![]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyName);
    }

    #[test]
    fn half_open_multi_line_is_rejected() {
        let err = LanguageSpec::new(
            "Broken",
            vec![],
            Some(("/*".to_string(), String::new())),
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MultiLineMismatch { .. }));
    }

    #[test]
    fn position_count_must_match_markers() {
        let err = LanguageSpec::new(
            "COBOL",
            vec!["*".to_string()],
            None,
            vec![ColumnConstraint { column: 7 }, ColumnConstraint { column: 1 }],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PositionCount {
                positions: 2,
                markers: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_marker_is_rejected() {
        let err =
            LanguageSpec::new("Odd", vec![String::new()], None, vec![], vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMarker { .. }));
    }

    #[test]
    fn extension_matching_ignores_dots_and_globs() {
        let spec = c_like();
        assert!(spec.matches_extension("c"));
        assert!(spec.matches_extension(".c"));
        assert!(spec.matches_extension("H"));
        assert!(!spec.matches_extension("py"));
        assert!(!spec.matches_extension(""));
    }
}
