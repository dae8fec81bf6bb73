// crates/engine/src/fs.rs
//! Filesystem collaborators: boundary path checks, the extension-filtered
//! directory walk and per-file read/strip/write.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{ArgumentError, Result, RipperError};
use crate::spec::LanguageSpec;
use crate::strip::Stripper;

/// Name of the sibling folder cleaned copies are written into.
pub const OUTPUT_DIR: &str = "output";

/// Validates that a path exists and is a directory.
pub fn check_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ArgumentError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        return Err(ArgumentError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(path.to_path_buf())
}

/// Validates that a path exists and is a file.
pub fn check_file(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ArgumentError::NotFound(path.to_path_buf()).into());
    }
    if path.is_dir() {
        return Err(ArgumentError::NotAFile(path.to_path_buf()).into());
    }
    Ok(path.to_path_buf())
}

/// Collects the files under `root` whose extension belongs to the language,
/// in a deterministic order. Depth is limited to the root directory itself
/// unless `include_subdirs` is set. Previously written `output` folders are
/// not descended into, so reruns do not strip their own results.
pub fn collect_files(
    root: &Path,
    include_subdirs: bool,
    spec: &LanguageSpec,
) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);
    if !include_subdirs {
        builder.max_depth(Some(1));
    }
    builder.filter_entry(|entry| {
        !(entry.file_type().is_some_and(|ft| ft.is_dir())
            && entry.file_name().to_str() == Some(OUTPUT_DIR))
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        if spec.matches_extension(ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Where the cleaned copy of `path` lands: an `output` folder next to the
/// file, same file name.
pub fn output_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    parent.join(OUTPUT_DIR).join(path.file_name().unwrap_or_default())
}

/// Reads a file, strips its comments line by line with a fresh stripper and
/// writes the cleaned text to the sibling `output` folder.
///
/// Returns the path the cleaned copy was written to.
///
/// # Errors
///
/// `FileRead`/`FileWrite` for I/O failures, `MalformedComment` when the
/// file's comment structure is broken; in that case nothing is written.
pub fn process_file(path: &Path, spec: &LanguageSpec) -> Result<PathBuf> {
    let content = fs::read_to_string(path).map_err(|source| RipperError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    // str::lines also swallows a '\r' before each '\n', normalizing CRLF
    // input to plain newlines on output.
    let mut stripper = Stripper::new(spec);
    let mut cleaned = String::with_capacity(content.len());
    for line in content.lines() {
        cleaned.push_str(&stripper.strip_line(line)?);
    }

    let out = output_path(path);
    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).map_err(|source| RipperError::FileWrite {
            path: out.clone(),
            source,
        })?;
    }
    fs::write(&out, cleaned).map_err(|source| RipperError::FileWrite {
        path: out.clone(),
        source,
    })?;

    log::debug!("stripped {} -> {}", path.display(), out.display());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentError;

    fn python_spec() -> LanguageSpec {
        LanguageSpec::new(
            "Python",
            vec!["#".to_string()],
            None,
            vec![],
            vec![".py".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn check_directory_rejects_files_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1\n").unwrap();

        assert!(check_directory(dir.path()).is_ok());
        assert!(matches!(
            check_directory(&file),
            Err(RipperError::Argument(ArgumentError::NotADirectory(_)))
        ));
        assert!(matches!(
            check_directory(&dir.path().join("missing")),
            Err(RipperError::Argument(ArgumentError::NotFound(_)))
        ));
    }

    #[test]
    fn collect_honors_extensions_and_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.py"), "").unwrap();

        let spec = python_spec();
        let shallow = collect_files(dir.path(), false, &spec).unwrap();
        assert_eq!(shallow, vec![dir.path().join("a.py")]);

        let deep = collect_files(dir.path(), true, &spec).unwrap();
        assert_eq!(deep, vec![dir.path().join("a.py"), dir.path().join("sub/c.py")]);
    }

    #[test]
    fn collect_skips_output_folders() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::create_dir(dir.path().join(OUTPUT_DIR)).unwrap();
        fs::write(dir.path().join(OUTPUT_DIR).join("a.py"), "").unwrap();

        let found = collect_files(dir.path(), true, &python_spec()).unwrap();
        assert_eq!(found, vec![dir.path().join("a.py")]);
    }

    #[test]
    fn process_file_writes_cleaned_copy() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1 # note\n# whole line\ny = 2\n").unwrap();

        let out = process_file(&file, &python_spec()).unwrap();
        assert_eq!(out, dir.path().join(OUTPUT_DIR).join("a.py"));
        assert_eq!(fs::read_to_string(out).unwrap(), "x = 1 \n\ny = 2\n");
    }

    #[test]
    fn process_file_normalizes_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1\r\ny = 2 # c\r\n").unwrap();

        let out = process_file(&file, &python_spec()).unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "x = 1\ny = 2 \n");
    }

    #[test]
    fn malformed_file_writes_nothing() {
        let spec = LanguageSpec::new(
            "C",
            vec!["//".to_string()],
            Some(("/*".to_string(), "*/".to_string())),
            vec![],
            vec![".c".to_string()],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.c");
        fs::write(&file, "int x;\n*/ stray\n").unwrap();

        let err = process_file(&file, &spec).unwrap_err();
        assert!(matches!(err, RipperError::MalformedComment(e) if e.line == 2));
        assert!(!output_path(&file).exists());
    }
}
