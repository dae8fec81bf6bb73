// crates/engine/src/options.rs
use derive_builder::Builder;
use std::path::PathBuf;

use crate::spec::LanguageSpec;

/// Options for one batch run over a directory tree.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    /// Directory whose files are stripped.
    pub root: PathBuf,
    /// Comment rules of the language being stripped.
    pub spec: LanguageSpec,
    /// Descend into subdirectories instead of only the root.
    #[builder(default)]
    pub include_subdirs: bool,
    /// Abort the run on the first failing file instead of collecting the
    /// error and continuing.
    #[builder(default)]
    pub strict: bool,
}
