// crates/engine/src/lib.rs
//! Comment stripping engine.
//!
//! The core is a per-language tokenizer ([`tokenizer`]) feeding a
//! finite-state automaton ([`automaton`]) that keeps code and discards
//! comments, including block comments spanning lines. [`strip`] drives the
//! two over a file, [`config`] loads the language catalog and [`fs`] walks
//! directories and writes cleaned copies.

pub mod automaton;
pub mod config;
pub mod error;
pub mod fs;
pub mod options;
pub mod spec;
pub mod strip;
pub mod tokenizer;

use std::path::PathBuf;

use crate::error::{Result, RipperError};
use crate::options::RunConfig;

/// Outcome of a batch run: cleaned files (source path, output path) and the
/// per-file errors of a non-strict run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub processed: Vec<(PathBuf, PathBuf)>,
    pub errors: Vec<(PathBuf, RipperError)>,
}

/// Strips every matching file under the configured root, strictly
/// sequentially, one stripper per file.
///
/// # Errors
///
/// Returns an error when the root path is invalid or the walk fails. File
/// level failures abort the run only in strict mode; otherwise they are
/// collected in [`RunResult::errors`] and the remaining files are still
/// processed.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let root = fs::check_directory(&config.root)?;
    let files = fs::collect_files(&root, config.include_subdirs, &config.spec)?;
    log::info!(
        "stripping {} file(s) under {} as {}",
        files.len(),
        root.display(),
        config.spec.name()
    );

    let mut result = RunResult::default();
    for path in files {
        match fs::process_file(&path, &config.spec) {
            Ok(out) => result.processed.push((path, out)),
            Err(e) if config.strict => return Err(e),
            Err(e) => result.errors.push((path, e)),
        }
    }
    Ok(result)
}
