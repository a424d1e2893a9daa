//! Safety valves against pathological grammars: too many candidate
//! expectations piling up at one failure offset, or backtracking that
//! never terminates in practice.
//!
//! These are two distinct counters rather than one generic tracker, because
//! they behave differently: [`ErrorBudget`] is scoped to the current
//! farthest offset and clears whenever that offset advances, while
//! [`RewindBudget`] accumulates over the whole parse and never resets.

use std::fmt;

/// Default ceiling on the number of distinct expectations recorded at the
/// single farthest offset before the driver stops collecting more
/// diagnostic detail there. Derived from `tracker-sparql-parser.c`'s
/// `ERROR_COUNT_LIMIT`.
pub const DEFAULT_ERROR_LIMIT: usize = 1_000;

/// Default ceiling on cumulative rollback frames before the driver aborts
/// as a safety measure against exponential backtracking. Derived from
/// `tracker-sparql-parser.c`'s `SUSPICIOUS_REWIND_LIMIT`.
pub const DEFAULT_REWIND_LIMIT: usize = 100_000;

/// Counts distinct expectations recorded at the current farthest failure
/// offset.
///
/// Scoped to that offset, not to the whole parse: `FarthestError::record`
/// (in `driver.rs`) clears this every time the farthest offset advances, so
/// the limit bounds how many alternatives can disagree about the *current*
/// failure point rather than the parse's lifetime error volume.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ErrorBudget {
    count: usize,
    limit: usize,
}

impl ErrorBudget {
    pub fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// True once more expectations have been recorded at this offset than
    /// the budget allows; callers stop pushing new ones but parsing itself
    /// continues.
    pub fn is_exhausted(&self) -> bool {
        self.count > self.limit
    }

    pub fn record_one(&mut self) {
        self.count += 1;
    }

    /// Clears the count. Called when the farthest failure offset moves past
    /// everything this budget has seen so far.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl fmt::Debug for ErrorBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expectations: {}, limit: {}", self.count, self.limit)
    }
}

/// Counts cumulative rollback frames over the whole parse.
///
/// Never resets: a grammar that backtracks enough times to exhaust this is
/// pathological no matter where in the parse it happens, so unlike
/// [`ErrorBudget`] there is no notion of the count becoming stale.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RewindBudget {
    count: usize,
    limit: usize,
}

impl RewindBudget {
    pub fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// True once the parse has rolled back more times than the budget
    /// allows; the driver treats this as unrecoverable and aborts.
    pub fn is_exhausted(&self) -> bool {
        self.count > self.limit
    }

    pub fn record_one(&mut self) {
        self.count += 1;
    }
}

impl fmt::Debug for RewindBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rewinds: {}, limit: {}", self.count, self.limit)
    }
}
