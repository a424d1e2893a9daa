//! A hand-rolled, backtracking parser for the SPARQL 1.1 query and update
//! grammars.
//!
//! There is no separate lexing pass: terminal matchers run directly against
//! the character stream at the driver's current offset, the same way
//! `tracker-sparql-parser.c` does it. [`grammar`] holds the production table
//! as data; [`driver`] (private) interprets it; [`Parser`] is the public
//! entry point and [`tree::Tree`] the result.

mod arena;
mod driver;
mod error;
pub mod grammar;
mod limit;
pub mod tree;

pub use error::{Error, SparqlError};
pub use grammar::NamedRule;
pub use limit::{DEFAULT_ERROR_LIMIT, DEFAULT_REWIND_LIMIT};
pub use tree::{Kind, Node, Tree};

/// Configures and runs a single parse.
///
/// ```
/// use sparql_parser::Parser;
///
/// let tree = Parser::new("SELECT * WHERE { ?s ?p ?o }")
///     .parse_query()
///     .unwrap();
/// assert!(tree.root().children().count() > 0);
/// ```
pub struct Parser<'a> {
    input: &'a str,
    error_limit: usize,
    rewind_limit: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            error_limit: DEFAULT_ERROR_LIMIT,
            rewind_limit: DEFAULT_REWIND_LIMIT,
        }
    }

    /// Overrides how many distinct expectations are kept at the farthest
    /// failure offset before later ones at the same offset are dropped.
    pub fn error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    /// Overrides how many speculative rollbacks the driver tolerates before
    /// aborting as a safety measure against pathological backtracking.
    pub fn rewind_limit(mut self, limit: usize) -> Self {
        self.rewind_limit = limit;
        self
    }

    /// Parses `input` as a `QueryUnit` (a `SELECT`, `CONSTRUCT`, `DESCRIBE`,
    /// or `ASK` query).
    pub fn parse_query(self) -> Result<Tree, SparqlError> {
        driver::run(self.input, NamedRule::QueryUnit, self.error_limit, self.rewind_limit)
    }

    /// Parses `input` as an `UpdateUnit` (one or more update operations).
    pub fn parse_update(self) -> Result<Tree, SparqlError> {
        driver::run(self.input, NamedRule::UpdateUnit, self.error_limit, self.rewind_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unindent::unindent;

    #[test]
    fn builder_overrides_are_threaded_through() {
        let tree = Parser::new("ASK { ?s ?p ?o }")
            .error_limit(5)
            .rewind_limit(5_000)
            .parse_query()
            .unwrap();
        assert_eq!(tree.root().kind(), Kind::Rule(NamedRule::QueryUnit));
    }

    #[test]
    fn a_realistic_multiline_query_parses() {
        let query = unindent(
            "
            PREFIX foaf: <http://xmlns.com/foaf/0.1/>
            SELECT ?name ?mbox
            WHERE
              { ?person foaf:name ?name .
                OPTIONAL { ?person foaf:mbox ?mbox }
              }
            ",
        );
        Parser::new(query.trim()).parse_query().unwrap();
    }

    #[test]
    fn reports_a_clean_error_on_garbage_input() {
        let err = Parser::new("not sparql at all").parse_query().unwrap_err();
        let SparqlError::Parse(inner) = err else {
            panic!("expected Parse, not Overflow");
        };
        assert!(!inner.snippet().is_empty());
    }
}
