// crates/engine/src/automaton.rs
//! Finite-state machine that turns token runs into kept or discarded text.
//!
//! One automaton instance owns the state of exactly one logical stream (one
//! file). Nothing is shared between instances, so files can be processed
//! independently without cross-contamination.

use crate::error::MalformedCommentError;
use crate::tokenizer::Token;

/// Current mode of the automaton. Persists across lines of the same file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutomatonState {
    /// Outside any comment: text is kept.
    #[default]
    Code,
    /// After a single-line marker: discarded until end of line.
    InSingleLineComment,
    /// Inside a block comment: discarded until the end marker, however many
    /// lines away that is.
    InBlockComment,
}

/// Consumes token sequences line by line, accumulating kept text and
/// carrying comment state between lines.
#[derive(Debug, Default)]
pub struct CommentAutomaton {
    state: AutomatonState,
    pending: String,
    line_number: usize,
}

impl CommentAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AutomatonState {
        self.state
    }

    /// Feeds one tokenized line through the machine and returns the flushed
    /// output line.
    ///
    /// `raw` is the untokenized line, used only to report malformed input.
    /// The flushed line always ends in exactly one `\n`: one is appended
    /// when the kept text lacks it, never duplicated.
    ///
    /// # Errors
    ///
    /// `MalformedCommentError` when a block-comment end marker arrives in
    /// `Code` state, i.e. with no open block. The pending text is dropped;
    /// a failed line never emits partial output.
    pub fn consume_line(
        &mut self,
        raw: &str,
        tokens: &[Token<'_>],
    ) -> Result<String, MalformedCommentError> {
        self.line_number += 1;

        for token in tokens {
            match (self.state, token) {
                (AutomatonState::Code, Token::Text(text)) => self.pending.push_str(text),
                (AutomatonState::Code, Token::SingleLine) => {
                    self.state = AutomatonState::InSingleLineComment;
                }
                (AutomatonState::Code, Token::BlockStart) => {
                    self.state = AutomatonState::InBlockComment;
                }
                (AutomatonState::Code, Token::BlockEnd) => {
                    self.pending.clear();
                    return Err(MalformedCommentError {
                        line: self.line_number,
                        text: raw.trim_end_matches('\n').to_string(),
                    });
                }
                (AutomatonState::Code, Token::EndOfLine) => return Ok(self.flush()),

                // Single-line comments end with the line they started on.
                (AutomatonState::InSingleLineComment, Token::EndOfLine) => {
                    self.state = AutomatonState::Code;
                    return Ok(self.flush());
                }
                (AutomatonState::InSingleLineComment, _) => {}

                (AutomatonState::InBlockComment, Token::BlockEnd) => {
                    self.state = AutomatonState::Code;
                }
                // A block comment open at end-of-line stays open into the
                // next line.
                (AutomatonState::InBlockComment, Token::EndOfLine) => return Ok(self.flush()),
                (AutomatonState::InBlockComment, _) => {}
            }
        }

        // The tokenizer always terminates a line with EndOfLine; reaching
        // here means the caller fed a truncated sequence.
        Ok(self.flush())
    }

    fn flush(&mut self) -> String {
        let mut line = std::mem::take(&mut self.pending);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}
