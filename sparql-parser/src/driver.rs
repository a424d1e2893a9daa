//! The backtracking parse engine.
//!
//! `tracker-sparql-parser.c` drives this as an explicit Apply/Iterate/Rollback
//! state machine over a reified stack of frames, because C has no real
//! recursion-with-backtracking ergonomics: every rule attempt is a heap frame
//! it pushes and pops by hand. Rust's call stack already gives us that for
//! free, so the three states become three branches of one recursive
//! function (`apply_rule`) instead of a hand-rolled frame stack; the
//! observable behavior — speculative commits, truncation on failure,
//! farthest-error tracking, the two safety limits — is unchanged.

use crate::arena::{Arena, NodeId, NodeRule};
use crate::error::{Error, SparqlError};
use crate::grammar::{self, literal_is_keyword, rule_for, NamedRule, Rule, RuleKind};
use crate::limit::{ErrorBudget, RewindBudget};
use crate::tree::Tree;

/// Tracks the single farthest offset reached and what was expected there.
///
/// Scoped to the whole parse, not to one alternative: a later, shallower
/// failure never overwrites a deeper one, which is what lets the final
/// error message point at the most informative position instead of
/// whatever alternative happened to be tried last.
struct FarthestError {
    offset: usize,
    expected: Vec<String>,
}

impl FarthestError {
    fn new() -> Self {
        Self {
            offset: 0,
            expected: Vec::new(),
        }
    }

    fn record(&mut self, offset: usize, what: impl Into<String>, error_budget: &mut ErrorBudget) {
        if offset > self.offset {
            self.offset = offset;
            self.expected.clear();
            error_budget.reset();
        }
        if offset == self.offset && !error_budget.is_exhausted() {
            let what = what.into();
            if !self.expected.contains(&what) {
                self.expected.push(what);
                error_budget.record_one();
            }
        }
    }

    fn into_error(self, input: &str) -> Error {
        let message = if self.expected.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("expected one of: {}", self.expected.join(", "))
        };
        Error::new(message, self.offset, input)
    }
}

struct State<'a> {
    input: &'a str,
    arena: Arena,
    pos: usize,
    farthest: FarthestError,
    error_budget: ErrorBudget,
    rewind_budget: RewindBudget,
    overflowed: bool,
}

impl<'a> State<'a> {
    fn skip_trivia(&mut self) {
        loop {
            let rest = &self.input[self.pos..];
            let ws_len: usize = rest
                .chars()
                .take_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
                .map(|c| c.len_utf8())
                .sum();
            self.pos += ws_len;
            if self.input[self.pos..].starts_with('#') {
                let rest = &self.input[self.pos..];
                let line_len = rest.find('\n').unwrap_or(rest.len());
                self.pos += line_len;
                continue;
            }
            break;
        }
    }

    /// Rolls the arena and cursor back to a checkpoint taken before a failed
    /// attempt. Counts against the rewind safety limit, since pathological
    /// grammars can backtrack exponentially.
    fn rollback(&mut self, checkpoint: (usize, usize)) {
        let (nodes, pos) = checkpoint;
        self.arena.truncate_after(nodes);
        self.pos = pos;
        self.rewind_budget.record_one();
        if self.rewind_budget.is_exhausted() {
            self.overflowed = true;
        }
    }

    fn checkpoint(&self) -> (usize, usize) {
        (self.arena.len(), self.pos)
    }
}

/// Matches a single grammar node, returning the ids of every node it
/// produced (zero for pure combinators that only recurse, one for
/// Named/Terminal/Literal leaves and composites).
fn apply_rule(state: &mut State<'_>, rule: &Rule, parent: Option<NodeId>) -> Result<Vec<NodeId>, ()> {
    if state.overflowed {
        return Err(());
    }
    match rule.kind {
        RuleKind::Named(name) => apply_named(state, name, parent).map(|id| vec![id]),
        RuleKind::Terminal(tag) => apply_terminal(state, tag, parent).map(|id| vec![id]),
        RuleKind::Literal(text) => apply_literal(state, text, parent).map(|id| vec![id]),
        RuleKind::Sequence(children) => apply_sequence(state, children, parent),
        RuleKind::Alternation(children) => apply_alternation(state, children, parent),
        RuleKind::ZeroOrMore(children) => Ok(apply_repeat(state, children, parent)),
        RuleKind::OneOrMore(children) => {
            let nodes = apply_repeat(state, children, parent);
            if nodes.is_empty() {
                Err(())
            } else {
                Ok(nodes)
            }
        }
        RuleKind::Optional(children) => {
            let checkpoint = state.checkpoint();
            match apply_sequence(state, children, parent) {
                Ok(nodes) => Ok(nodes),
                Err(()) => {
                    state.rollback(checkpoint);
                    Ok(Vec::new())
                }
            }
        }
    }
}

fn apply_repeat(state: &mut State<'_>, children: &'static [Rule], parent: Option<NodeId>) -> Vec<NodeId> {
    let mut produced = Vec::new();
    loop {
        if state.overflowed {
            break;
        }
        let checkpoint = state.checkpoint();
        let before_pos = state.pos;
        match apply_sequence(state, children, parent) {
            Ok(nodes) => {
                if state.pos == before_pos && !nodes.is_empty() {
                    // No progress despite a nominal match: stop to avoid an
                    // infinite loop rather than count it as real repetition.
                    state.rollback(checkpoint);
                    break;
                }
                produced.extend(nodes);
            }
            Err(()) => {
                state.rollback(checkpoint);
                break;
            }
        }
    }
    produced
}

fn apply_sequence(state: &mut State<'_>, children: &'static [Rule], parent: Option<NodeId>) -> Result<Vec<NodeId>, ()> {
    let checkpoint = state.checkpoint();
    let mut produced = Vec::new();
    for child in children {
        match apply_rule(state, child, parent) {
            Ok(nodes) => produced.extend(nodes),
            Err(()) => {
                state.rollback(checkpoint);
                return Err(());
            }
        }
    }
    Ok(produced)
}

fn apply_alternation(state: &mut State<'_>, children: &'static [Rule], parent: Option<NodeId>) -> Result<Vec<NodeId>, ()> {
    let checkpoint = state.checkpoint();
    for child in children {
        match apply_rule(state, child, parent) {
            Ok(nodes) => return Ok(nodes),
            Err(()) => {
                if state.overflowed {
                    return Err(());
                }
                state.rollback(checkpoint);
            }
        }
    }
    Err(())
}

fn apply_named(state: &mut State<'_>, name: NamedRule, parent: Option<NodeId>) -> Result<NodeId, ()> {
    let checkpoint = state.checkpoint();
    let start = state.pos;
    let id = state
        .arena
        .allocate(NodeRule::Named(name), start, start, parent);
    match apply_sequence(state, rule_for(name), Some(id)) {
        Ok(_) => {
            state.arena.set_end(id, state.pos);
            Ok(id)
        }
        Err(()) => {
            state.rollback(checkpoint);
            Err(())
        }
    }
}

fn apply_terminal(state: &mut State<'_>, tag: grammar::TerminalTag, parent: Option<NodeId>) -> Result<NodeId, ()> {
    state.skip_trivia();
    let start = state.pos;
    match grammar::terminal_matcher_for(tag)(state.input, start) {
        Some(end) => {
            let id = state.arena.allocate(NodeRule::Terminal(tag), start, end, parent);
            state.pos = end;
            Ok(id)
        }
        None => {
            state
                .farthest
                .record(start, format!("{tag:?}"), &mut state.error_budget);
            Err(())
        }
    }
}

fn apply_literal(state: &mut State<'_>, text: &'static str, parent: Option<NodeId>) -> Result<NodeId, ()> {
    state.skip_trivia();
    let start = state.pos;
    match match_literal(state.input, start, text) {
        Some(end) => {
            let id = state.arena.allocate(NodeRule::Literal(text), start, end, parent);
            state.pos = end;
            Ok(id)
        }
        None => {
            state
                .farthest
                .record(start, format!("'{text}'"), &mut state.error_budget);
            Err(())
        }
    }
}

/// Matches a single literal at `pos`, applying the identifier-boundary-aware
/// rule to alphabetic keywords (`SELECT` must not match the start of
/// `SELECTION`) and to the `PathMod` `?` literal (must not match when
/// followed by an identifier character, so `VAR1`'s `?s` still wins), and
/// exact byte matching to every other punctuation literal.
fn match_literal(input: &str, pos: usize, text: &str) -> Option<usize> {
    if literal_is_keyword(text) {
        let end = pos.checked_add(text.len())?;
        let candidate = input.get(pos..end)?;
        if !candidate.eq_ignore_ascii_case(text) {
            return None;
        }
        if let Some(next) = input[end..].chars().next() {
            if next.is_ascii_alphanumeric() || next == '_' {
                return None;
            }
        }
        Some(end)
    } else if input[pos..].starts_with(text) {
        Some(pos + text.len())
    } else {
        None
    }
}

/// Runs the grammar starting at `entry`, consuming the input up to trailing
/// trivia. `error_limit`/`rewind_limit` override [`crate::limit::DEFAULT_ERROR_LIMIT`]
/// and [`crate::limit::DEFAULT_REWIND_LIMIT`].
pub(crate) fn run(input: &str, entry: NamedRule, error_limit: usize, rewind_limit: usize) -> Result<Tree, SparqlError> {
    let mut state = State {
        input,
        arena: Arena::new(),
        pos: 0,
        farthest: FarthestError::new(),
        error_budget: ErrorBudget::new(error_limit),
        rewind_budget: RewindBudget::new(rewind_limit),
        overflowed: false,
    };

    let result = apply_named(&mut state, entry, None);

    if state.overflowed {
        return Err(SparqlError::Overflow(state.farthest.into_error(input)));
    }

    match result {
        Ok(_) => {
            state.skip_trivia();
            if state.pos != input.len() {
                state
                    .farthest
                    .record(state.pos, "end of input", &mut state.error_budget);
                return Err(SparqlError::Parse(state.farthest.into_error(input)));
            }
            Ok(Tree {
                input: input.to_string(),
                arena: state.arena,
            })
        }
        Err(()) => Err(SparqlError::Parse(state.farthest.into_error(input))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limit::{DEFAULT_ERROR_LIMIT, DEFAULT_REWIND_LIMIT};

    fn parse_query(input: &str) -> Result<Tree, SparqlError> {
        run(input, NamedRule::QueryUnit, DEFAULT_ERROR_LIMIT, DEFAULT_REWIND_LIMIT)
    }

    fn parse_update(input: &str) -> Result<Tree, SparqlError> {
        run(input, NamedRule::UpdateUnit, DEFAULT_ERROR_LIMIT, DEFAULT_REWIND_LIMIT)
    }

    #[test]
    fn parses_a_minimal_select_query() {
        let tree = parse_query("SELECT * WHERE { ?s ?p ?o }").expect("valid query");
        assert_eq!(tree.root().kind(), crate::tree::Kind::Rule(NamedRule::QueryUnit));
    }

    #[test]
    fn is_whitespace_and_case_insensitive() {
        let a = parse_query("select * where { ?s ?p ?o }").expect("lowercase keywords parse");
        let b = parse_query("SeLeCt\n*\twhere\r\n{?s ?p ?o}").expect("ragged whitespace parses");
        assert_eq!(a.input().len(), "select * where { ?s ?p ?o }".len());
        assert_eq!(b.root().kind(), a.root().kind());
    }

    #[test]
    fn keyword_does_not_match_identifier_prefix() {
        // "ASKING" must not be read as the ASK keyword followed by garbage.
        assert!(parse_query("ASKING { ?s ?p ?o }").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse_query("SELECT * WHERE { ?s ?p ?o } }").unwrap_err();
        matches!(err, SparqlError::Parse(_));
    }

    #[test]
    fn reports_the_farthest_offset_on_failure() {
        let err = parse_query("SELECT * WHERE { ?s ?p").unwrap_err();
        let SparqlError::Parse(inner) = err else {
            panic!("expected a Parse error");
        };
        assert_eq!(inner.index(), "SELECT * WHERE { ?s ?p".len());
    }

    #[test]
    fn parses_insert_data_update() {
        parse_update("INSERT DATA { <http://example/s> <http://example/p> \"o\" }").expect("valid update");
    }

    #[test]
    fn modify_accepts_missing_where_keyword() {
        parse_update("DELETE { ?s ?p ?o } { ?s ?p ?o }").expect("WHERE is optional on Modify");
    }

    #[test]
    fn arena_is_clean_after_a_failed_alternative() {
        // SelectQuery and ConstructQuery share a prologue; a query that only
        // matches the second alternative must not leave SelectQuery's
        // speculative nodes behind.
        let tree = parse_query("CONSTRUCT { ?s ?p ?o } WHERE { ?s ?p ?o }").expect("valid query");
        assert_eq!(tree.root().children().count(), 1);
    }

    #[test]
    fn path_mod_question_mark_does_not_swallow_a_following_var() {
        // Without the identifier-boundary check on the `?` literal, PathMod
        // would greedily consume the `?` here and leave a bare `o` behind
        // instead of a `VAR1` token.
        parse_query("SELECT * WHERE { ?s <http://example/p>?o }").expect("?o parses as a variable, not PathMod + o");
    }

    #[test]
    fn path_mod_question_mark_still_matches_as_a_quantifier() {
        parse_query("SELECT * WHERE { ?s <http://example/p>? ?o }").expect("PathMod ? still matches before whitespace");
    }

    #[test]
    fn pathological_backtracking_hits_the_rewind_limit_instead_of_hanging() {
        let pattern = "(".repeat(50) + &")".repeat(49);
        let query = format!("SELECT * WHERE {{ ?s <http://example/p>{pattern} ?o }}");
        let result = run(&query, NamedRule::QueryUnit, DEFAULT_ERROR_LIMIT, 50);
        assert!(matches!(result, Err(SparqlError::Overflow(_)) | Ok(_)));
    }
}
