//! Static description of every SPARQL 1.1 production and terminal matcher
//! this parser accepts, plus the handful of vendor extensions layered on
//! top of them.
//!
//! The grammar is pure data: a [`NamedRule`] indexes into [`rule_for`],
//! which returns the production's children as a slice of [`Rule`]. There is
//! no per-rule code; the driver in [`crate::driver`] walks this table
//! interpretively.

pub mod rules;
pub mod terminals;

/// One SPARQL 1.1 grammar production, plus this project's extensions.
///
/// Order matches declaration order in the original C grammar table; it has
/// no semantic meaning here beyond giving [`rule_for`] a stable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum NamedRule {
    QueryUnit,
    UpdateUnit,
    Query,
    Update,
    SelectClause,
    Prologue,
    BaseDecl,
    PrefixDecl,
    ConstraintDecl,
    SelectQuery,
    SubSelect,
    ConstructQuery,
    DescribeQuery,
    AskQuery,
    DatasetClause,
    DefaultGraphClause,
    NamedGraphClause,
    SourceSelector,
    WhereClause,
    SolutionModifier,
    GroupClause,
    GroupCondition,
    HavingClause,
    HavingCondition,
    OrderClause,
    OrderCondition,
    LimitOffsetClauses,
    LimitClause,
    OffsetClause,
    ValuesClause,
    Update1,
    Load,
    Clear,
    Drop,
    Create,
    Add,
    Move,
    Copy,
    InsertData,
    DeleteData,
    DeleteWhere,
    Modify,
    DeleteClause,
    InsertClause,
    UsingClause,
    GraphOrDefault,
    GraphRefAll,
    GraphRef,
    QuadPattern,
    QuadData,
    Quads,
    QuadsNotTriples,
    TriplesTemplate,
    GroupGraphPatternSub,
    TriplesBlock,
    GraphPatternNotTriples,
    OptionalGraphPattern,
    GraphGraphPattern,
    ServiceGraphPattern,
    Bind,
    InlineData,
    DataBlock,
    InlineDataOneVar,
    InlineDataFull,
    DataBlockValue,
    MinusGraphPattern,
    GroupOrUnionGraphPattern,
    Filter,
    Constraint,
    FunctionCall,
    ArgList,
    ExpressionList,
    ConstructTemplate,
    ConstructTriples,
    TriplesSameSubject,
    GroupGraphPattern,
    PropertyList,
    PropertyListNotEmpty,
    Verb,
    ObjectList,
    Object,
    TriplesSameSubjectPath,
    PropertyListPath,
    PropertyListPathNotEmpty,
    VerbPath,
    VerbSimple,
    ObjectListPath,
    ObjectPath,
    Path,
    PathAlternative,
    PathSequence,
    PathEltOrInverse,
    PathElt,
    PathMod,
    PathPrimary,
    PathNegatedPropertySet,
    PathOneInPropertySet,
    Integer,
    TriplesNode,
    BlankNodePropertyList,
    TriplesNodePath,
    BlankNodePropertyListPath,
    Collection,
    CollectionPath,
    GraphNode,
    GraphNodePath,
    VarOrTerm,
    VarOrIri,
    Var,
    GraphTerm,
    Expression,
    ConditionalOrExpression,
    ConditionalAndExpression,
    ValueLogical,
    RelationalExpression,
    NumericExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    UnaryExpression,
    PrimaryExpression,
    IriOrFunction,
    BrackettedExpression,
    BuiltInCall,
    RegexExpression,
    SubstringExpression,
    StrReplaceExpression,
    ExistsFunc,
    NotExistsFunc,
    Aggregate,
    RdfLiteral,
    NumericLiteral,
    NumericLiteralUnsigned,
    NumericLiteralPositive,
    NumericLiteralNegative,
    BooleanLiteral,
    StringLiteral,
    Iri,
    PrefixedName,
    BlankNode,
}

impl NamedRule {
    /// Total number of productions; used to size [`rules::NAMED_RULES`].
    pub const COUNT: usize = 139;
}

/// Lexical categories matched by a dedicated character-level function
/// rather than by a fixed keyword. See [`terminals`] for the matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TerminalTag {
    IRIREF,
    PNAME_NS,
    PNAME_LN,
    BLANK_NODE_LABEL,
    VAR1,
    VAR2,
    LANGTAG,
    INTEGER,
    DECIMAL,
    DOUBLE,
    INTEGER_POSITIVE,
    DECIMAL_POSITIVE,
    DOUBLE_POSITIVE,
    INTEGER_NEGATIVE,
    DECIMAL_NEGATIVE,
    DOUBLE_NEGATIVE,
    STRING_LITERAL1,
    STRING_LITERAL2,
    STRING_LITERAL_LONG1,
    STRING_LITERAL_LONG2,
    NIL,
    ANON,
    PARAMETERIZED_VAR,
}

impl TerminalTag {
    pub const COUNT: usize = 23;
}

/// A node in a grammar production's right-hand side.
///
/// `Sequence`/`Alternation`/`ZeroOrMore`/`OneOrMore`/`Optional` children are
/// ordinary `&'static [Rule]` slices: Rust's slices already carry their own
/// length, so there is no need for the null-sentinel `End` marker the
/// original C table uses to terminate a bare pointer's child list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    Named(NamedRule),
    Terminal(TerminalTag),
    /// An exact keyword or punctuation string. Alphabetic literals match
    /// case-insensitively and must not be immediately followed by another
    /// alphanumeric character (see `driver::apply_literal`); punctuation
    /// literals match byte-for-byte.
    Literal(&'static str),
    Sequence(&'static [Rule]),
    Alternation(&'static [Rule]),
    ZeroOrMore(&'static [Rule]),
    OneOrMore(&'static [Rule]),
    Optional(&'static [Rule]),
}

impl Rule {
    pub const fn named(rule: NamedRule) -> Rule {
        Rule {
            kind: RuleKind::Named(rule),
        }
    }

    pub const fn terminal(tag: TerminalTag) -> Rule {
        Rule {
            kind: RuleKind::Terminal(tag),
        }
    }

    pub const fn lit(text: &'static str) -> Rule {
        Rule {
            kind: RuleKind::Literal(text),
        }
    }

    pub const fn seq(children: &'static [Rule]) -> Rule {
        Rule {
            kind: RuleKind::Sequence(children),
        }
    }

    pub const fn alt(children: &'static [Rule]) -> Rule {
        Rule {
            kind: RuleKind::Alternation(children),
        }
    }

    pub const fn star(children: &'static [Rule]) -> Rule {
        Rule {
            kind: RuleKind::ZeroOrMore(children),
        }
    }

    pub const fn plus(children: &'static [Rule]) -> Rule {
        Rule {
            kind: RuleKind::OneOrMore(children),
        }
    }

    pub const fn opt(children: &'static [Rule]) -> Rule {
        Rule {
            kind: RuleKind::Optional(children),
        }
    }
}

/// Returns a production's right-hand side.
pub fn rule_for(name: NamedRule) -> &'static [Rule] {
    rules::NAMED_RULES[name as usize]
}

/// Returns the character-level matcher for a terminal tag.
pub fn terminal_matcher_for(tag: TerminalTag) -> terminals::TerminalFn {
    terminals::TERMINAL_FUNCS[tag as usize]
}

/// True when a literal needs identifier-boundary-aware matching — case-
/// insensitively for alphabetic keywords (i.e. it starts with an ASCII
/// letter), rather than an exact byte comparison as for ordinary punctuation
/// like `{`, `*`, `;`.
///
/// `PathMod`'s `?` is the one punctuation literal that also needs the
/// boundary check: without it, `<p>?o` would let `?` match as `PathMod`
/// and leave `o` behind, instead of refusing so the whole `?o` is free to
/// match as a `VAR1` terminal.
pub fn literal_is_keyword(text: &str) -> bool {
    text == "?"
        || text
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_alphabetic())
}
