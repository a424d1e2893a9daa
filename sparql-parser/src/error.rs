use std::fmt;

/// Number of bytes of context kept on either side of an error offset when
/// building a [`Error::snippet`].
const SNIPPET_RADIUS: usize = 15;

/// A single parse failure: the farthest offset the parser reached and the
/// set of grammar tokens that would have been accepted there.
///
/// Unlike a general-purpose diagnostic type, `Error` never describes more
/// than one failure — the driver commits to the single farthest position it
/// found and reports only that (see the module docs on backtracking).
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    message: String,
    offset: usize,
    snippet: String,
}

impl Error {
    pub(crate) fn new(message: impl Into<String>, offset: usize, input: &str) -> Self {
        Self {
            message: message.into(),
            offset,
            snippet: build_snippet(input, offset),
        }
    }

    /// Human-readable description of what was expected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the original input where parsing gave up.
    pub fn index(&self) -> usize {
        self.offset
    }

    /// A two-line window of context around [`Self::index`]: the source text
    /// followed by a caret marking the failing byte.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

fn build_snippet(input: &str, offset: usize) -> String {
    let offset = offset.min(input.len());
    let start = input
        .char_indices()
        .rev()
        .map(|(i, _)| i)
        .find(|&i| i <= offset.saturating_sub(SNIPPET_RADIUS))
        .unwrap_or(0);
    let end = input
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .find(|&i| i >= offset + SNIPPET_RADIUS)
        .unwrap_or(input.len());

    let window = &input[start..end];
    let caret_column = input[start..offset].chars().count();
    let mut out = String::with_capacity(window.len() * 2);
    out.push_str(window);
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(caret_column));
    out.push('^');
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR@{} {:?}\n{}",
            self.offset, self.message, self.snippet
        )
    }
}

impl std::error::Error for Error {}

/// Errors surfaced by [`crate::Parser`] construction and the two-limit
/// builder surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SparqlError {
    /// No grammar alternative matched; see the wrapped [`Error`] for the
    /// farthest position reached and what was expected there.
    #[error("{0}")]
    Parse(#[from] Error),
    /// The rollback safety guard fired before a result could be produced.
    /// This always wraps whatever farthest-error context had accumulated.
    #[error("parser aborted after excessive backtracking: {0}")]
    Overflow(Error),
}
