// crates/engine/src/strip.rs
//! Line engine: drives tokenizer and automaton over a file's lines.

use crate::automaton::{AutomatonState, CommentAutomaton};
use crate::error::Result;
use crate::spec::LanguageSpec;
use crate::tokenizer::{MarkerSet, tokenize};

/// Strips comments from one logical stream of lines.
///
/// Owns the marker set and the automaton for one file; create a fresh
/// stripper per file. The shared, read-only `LanguageSpec` is only consulted
/// at construction.
#[derive(Debug)]
pub struct Stripper {
    markers: MarkerSet,
    automaton: CommentAutomaton,
}

impl Stripper {
    pub fn new(spec: &LanguageSpec) -> Self {
        Self {
            markers: MarkerSet::from_spec(spec),
            automaton: CommentAutomaton::new(),
        }
    }

    /// Strips one line. Input may or may not carry a trailing newline; the
    /// output line always ends in exactly one `\n`.
    ///
    /// # Errors
    ///
    /// Propagates `MalformedCommentError` (wrapped in `RipperError`) for a
    /// block end with no open block. The stripper is still usable
    /// afterwards, but the caller decides whether the file counts as failed.
    pub fn strip_line(&mut self, line: &str) -> Result<String> {
        let tokens = tokenize(line, &self.markers);
        Ok(self.automaton.consume_line(line, &tokens)?)
    }

    /// Current automaton state, e.g. to detect a block comment left open at
    /// end of file.
    pub fn state(&self) -> AutomatonState {
        self.automaton.state()
    }
}

/// Strips a whole file's worth of lines, one output line per input line, in
/// order. Stops at the first malformed line and propagates its error;
/// already-produced lines are discarded with it, marking the file failed.
pub fn strip_lines<I, S>(lines: I, spec: &LanguageSpec) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stripper = Stripper::new(spec);
    let mut out = Vec::new();
    for line in lines {
        out.push(stripper.strip_line(line.as_ref())?);
    }
    Ok(out)
}
