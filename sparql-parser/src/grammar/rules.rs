//! The SPARQL 1.1 production table, plus this project's vendor extensions.
//!
//! Every extension is modeled as one more `Alternation` arm alongside the
//! strict-SPARQL alternatives it sits next to, never as a pre-check that
//! bypasses the standard grammar. Each is called out in a comment at its
//! production; there is no runtime flag to turn them off.

use super::{NamedRule, Rule, TerminalTag};
use NamedRule::*;
use Rule as X;
use TerminalTag::*;

macro_rules! r {
    ($name:ident) => {
        X::named($name)
    };
}
macro_rules! t {
    ($tag:ident) => {
        X::terminal($tag)
    };
}
macro_rules! l {
    ($text:literal) => {
        X::lit($text)
    };
}

/// Indexed by `NamedRule as usize`; order matches the enum's declaration.
pub static NAMED_RULES: [&[Rule]; NamedRule::COUNT] = [
    // QueryUnit ::= Query
    &[r!(Query)],
    // UpdateUnit ::= Update
    &[r!(Update)],
    // Query ::= Prologue (SelectQuery|ConstructQuery|DescribeQuery|AskQuery) ValuesClause
    &[
        r!(Prologue),
        X::alt(&[
            r!(SelectQuery),
            r!(ConstructQuery),
            r!(DescribeQuery),
            r!(AskQuery),
        ]),
        r!(ValuesClause),
    ],
    // Update ::= Prologue (';')? (Update1 (';' Update)?)?
    // vendor ext: the leading ';' is optional/extraneous separators are tolerated.
    &[
        r!(Prologue),
        X::opt(&[l!(";")]),
        X::opt(&[r!(Update1), X::opt(&[l!(";"), r!(Update)])]),
    ],
    // SelectClause ::= 'SELECT' ('DISTINCT'|'REDUCED')?
    //                  ( ( Var | '(' Expression 'AS' Var ')' | Expression ('AS' Var)? )+ | '*' )
    // vendor ext: a bare `Expression ('AS' Var)?` (no parens) is an added arm.
    &[
        l!("SELECT"),
        X::opt(&[X::alt(&[l!("DISTINCT"), l!("REDUCED")])]),
        X::alt(&[
            X::plus(&[X::alt(&[
                r!(Var),
                X::seq(&[l!("("), r!(Expression), l!("AS"), r!(Var), l!(")")]),
                X::seq(&[r!(Expression), X::opt(&[l!("AS"), r!(Var)])]),
            ])]),
            l!("*"),
        ]),
    ],
    // Prologue ::= (BaseDecl|PrefixDecl|ConstraintDecl)*
    &[X::star(&[X::alt(&[
        r!(BaseDecl),
        r!(PrefixDecl),
        r!(ConstraintDecl),
    ])])],
    // BaseDecl ::= 'BASE' IRIREF
    &[l!("BASE"), t!(IRIREF)],
    // PrefixDecl ::= 'PREFIX' PNAME_NS IRIREF
    &[l!("PREFIX"), t!(PNAME_NS), t!(IRIREF)],
    // ConstraintDecl ::= 'CONSTRAINT' ('GRAPH'|'SERVICE') iri  (vendor extension)
    &[
        l!("CONSTRAINT"),
        X::alt(&[l!("GRAPH"), l!("SERVICE")]),
        r!(Iri),
    ],
    // SelectQuery ::= SelectClause DatasetClause* WhereClause SolutionModifier
    &[
        r!(SelectClause),
        X::star(&[r!(DatasetClause)]),
        r!(WhereClause),
        r!(SolutionModifier),
    ],
    // SubSelect ::= SelectClause WhereClause SolutionModifier ValuesClause
    &[
        r!(SelectClause),
        r!(WhereClause),
        r!(SolutionModifier),
        r!(ValuesClause),
    ],
    // ConstructQuery ::= 'CONSTRUCT'
    //   ( ConstructTemplate DatasetClause* WhereClause SolutionModifier
    //   | DatasetClause* 'WHERE' '{' TriplesTemplate? '}' SolutionModifier )
    &[
        l!("CONSTRUCT"),
        X::alt(&[
            X::seq(&[
                r!(ConstructTemplate),
                X::star(&[r!(DatasetClause)]),
                r!(WhereClause),
                r!(SolutionModifier),
            ]),
            X::seq(&[
                X::star(&[r!(DatasetClause)]),
                l!("WHERE"),
                l!("{"),
                X::opt(&[r!(TriplesTemplate)]),
                l!("}"),
                r!(SolutionModifier),
            ]),
        ]),
    ],
    // DescribeQuery ::= 'DESCRIBE' (VarOrIri+|'*') DatasetClause* WhereClause? SolutionModifier
    &[
        l!("DESCRIBE"),
        X::alt(&[X::plus(&[r!(VarOrIri)]), l!("*")]),
        X::star(&[r!(DatasetClause)]),
        X::opt(&[r!(WhereClause)]),
        r!(SolutionModifier),
    ],
    // AskQuery ::= 'ASK' DatasetClause* WhereClause SolutionModifier
    &[
        l!("ASK"),
        X::star(&[r!(DatasetClause)]),
        r!(WhereClause),
        r!(SolutionModifier),
    ],
    // DatasetClause ::= 'FROM' (DefaultGraphClause|NamedGraphClause)
    &[
        l!("FROM"),
        X::alt(&[r!(DefaultGraphClause), r!(NamedGraphClause)]),
    ],
    // DefaultGraphClause ::= SourceSelector
    &[r!(SourceSelector)],
    // NamedGraphClause ::= 'NAMED' SourceSelector
    &[l!("NAMED"), r!(SourceSelector)],
    // SourceSelector ::= iri
    &[r!(Iri)],
    // WhereClause ::= 'WHERE'? GroupGraphPattern
    &[X::opt(&[l!("WHERE")]), r!(GroupGraphPattern)],
    // SolutionModifier ::= GroupClause? HavingClause? OrderClause? LimitOffsetClauses?
    &[
        X::opt(&[r!(GroupClause)]),
        X::opt(&[r!(HavingClause)]),
        X::opt(&[r!(OrderClause)]),
        X::opt(&[r!(LimitOffsetClauses)]),
    ],
    // GroupClause ::= 'GROUP' 'BY' GroupCondition+
    &[l!("GROUP"), l!("BY"), X::plus(&[r!(GroupCondition)])],
    // GroupCondition ::= BuiltInCall | FunctionCall | '(' Expression ('AS' Var)? ')' | Var
    &[X::alt(&[
        r!(BuiltInCall),
        r!(FunctionCall),
        X::seq(&[
            l!("("),
            r!(Expression),
            X::opt(&[l!("AS"), r!(Var)]),
            l!(")"),
        ]),
        r!(Var),
    ])],
    // HavingClause ::= 'HAVING' HavingCondition+
    &[l!("HAVING"), X::plus(&[r!(HavingCondition)])],
    // HavingCondition ::= Constraint
    &[r!(Constraint)],
    // OrderClause ::= 'ORDER' 'BY' OrderCondition+
    &[l!("ORDER"), l!("BY"), X::plus(&[r!(OrderCondition)])],
    // OrderCondition ::= (('ASC'|'DESC') BrackettedExpression) | (Constraint|Var)
    &[X::alt(&[
        X::seq(&[
            X::alt(&[l!("ASC"), l!("DESC")]),
            r!(BrackettedExpression),
        ]),
        X::alt(&[r!(Constraint), r!(Var)]),
    ])],
    // LimitOffsetClauses ::= LimitClause OffsetClause? | OffsetClause LimitClause?
    &[X::alt(&[
        X::seq(&[r!(LimitClause), X::opt(&[r!(OffsetClause)])]),
        X::seq(&[r!(OffsetClause), X::opt(&[r!(LimitClause)])]),
    ])],
    // LimitClause ::= 'LIMIT' (INTEGER|PARAMETERIZED_VAR)  (vendor ext: parameterized limit)
    &[
        l!("LIMIT"),
        X::alt(&[t!(INTEGER), t!(PARAMETERIZED_VAR)]),
    ],
    // OffsetClause ::= 'OFFSET' (INTEGER|PARAMETERIZED_VAR)
    &[
        l!("OFFSET"),
        X::alt(&[t!(INTEGER), t!(PARAMETERIZED_VAR)]),
    ],
    // ValuesClause ::= ('VALUES' DataBlock)?
    &[X::opt(&[l!("VALUES"), r!(DataBlock)])],
    // Update1 ::= Load|Clear|Drop|Add|Move|Copy|Create|InsertData|DeleteData|DeleteWhere|Modify
    &[X::alt(&[
        r!(Load),
        r!(Clear),
        r!(Drop),
        r!(Add),
        r!(Move),
        r!(Copy),
        r!(Create),
        r!(InsertData),
        r!(DeleteData),
        r!(DeleteWhere),
        r!(Modify),
    ])],
    // Load ::= 'LOAD' 'SILENT'? iri ('INTO' GraphRef)?
    &[
        l!("LOAD"),
        X::opt(&[l!("SILENT")]),
        r!(Iri),
        X::opt(&[l!("INTO"), r!(GraphRef)]),
    ],
    // Clear ::= 'CLEAR' 'SILENT'? GraphRefAll
    &[l!("CLEAR"), X::opt(&[l!("SILENT")]), r!(GraphRefAll)],
    // Drop ::= 'DROP' 'SILENT'? GraphRefAll
    &[l!("DROP"), X::opt(&[l!("SILENT")]), r!(GraphRefAll)],
    // Create ::= 'CREATE' 'SILENT'? GraphRef
    &[l!("CREATE"), X::opt(&[l!("SILENT")]), r!(GraphRef)],
    // Add ::= 'ADD' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    &[
        l!("ADD"),
        X::opt(&[l!("SILENT")]),
        r!(GraphOrDefault),
        l!("TO"),
        r!(GraphOrDefault),
    ],
    // Move ::= 'MOVE' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    &[
        l!("MOVE"),
        X::opt(&[l!("SILENT")]),
        r!(GraphOrDefault),
        l!("TO"),
        r!(GraphOrDefault),
    ],
    // Copy ::= 'COPY' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    &[
        l!("COPY"),
        X::opt(&[l!("SILENT")]),
        r!(GraphOrDefault),
        l!("TO"),
        r!(GraphOrDefault),
    ],
    // InsertData ::= 'INSERT' 'DATA' QuadData
    &[l!("INSERT"), l!("DATA"), r!(QuadData)],
    // DeleteData ::= 'DELETE' 'DATA' QuadData
    &[l!("DELETE"), l!("DATA"), r!(QuadData)],
    // DeleteWhere ::= 'DELETE' 'WHERE' QuadPattern
    &[l!("DELETE"), l!("WHERE"), r!(QuadPattern)],
    // Modify ::= ('WITH' iri)? (DeleteClause InsertClause?|InsertClause) UsingClause* 'WHERE'? GroupGraphPattern
    // vendor ext: 'WHERE' is optional (spec.md §4.1).
    &[
        X::opt(&[l!("WITH"), r!(Iri)]),
        X::alt(&[
            X::seq(&[r!(DeleteClause), X::opt(&[r!(InsertClause)])]),
            r!(InsertClause),
        ]),
        X::star(&[r!(UsingClause)]),
        X::opt(&[l!("WHERE")]),
        r!(GroupGraphPattern),
    ],
    // DeleteClause ::= 'DELETE' QuadPattern
    &[l!("DELETE"), r!(QuadPattern)],
    // InsertClause ::= 'INSERT' QuadPattern
    &[l!("INSERT"), r!(QuadPattern)],
    // UsingClause ::= 'USING' 'NAMED'? iri
    &[l!("USING"), X::opt(&[l!("NAMED")]), r!(Iri)],
    // GraphOrDefault ::= 'DEFAULT' | 'GRAPH'? iri
    &[X::alt(&[
        l!("DEFAULT"),
        X::seq(&[X::opt(&[l!("GRAPH")]), r!(Iri)]),
    ])],
    // GraphRefAll ::= GraphRef | 'DEFAULT' | 'NAMED' | 'ALL'
    &[X::alt(&[
        r!(GraphRef),
        l!("DEFAULT"),
        l!("NAMED"),
        l!("ALL"),
    ])],
    // GraphRef ::= 'GRAPH' iri
    &[l!("GRAPH"), r!(Iri)],
    // QuadPattern ::= '{' Quads '}'
    &[l!("{"), r!(Quads), l!("}")],
    // QuadData ::= '{' Quads '}'
    &[l!("{"), r!(Quads), l!("}")],
    // Quads ::= TriplesTemplate? (QuadsNotTriples '.'? TriplesTemplate?)*
    &[
        X::opt(&[r!(TriplesTemplate)]),
        X::star(&[
            r!(QuadsNotTriples),
            X::opt(&[l!(".")]),
            X::opt(&[r!(TriplesTemplate)]),
        ]),
    ],
    // QuadsNotTriples ::= 'GRAPH' VarOrIri '{' TriplesTemplate? '}'
    &[
        l!("GRAPH"),
        r!(VarOrIri),
        l!("{"),
        X::opt(&[r!(TriplesTemplate)]),
        l!("}"),
    ],
    // TriplesTemplate ::= TriplesSameSubject ('.' TriplesTemplate?)?
    &[
        r!(TriplesSameSubject),
        X::opt(&[l!("."), X::opt(&[r!(TriplesTemplate)])]),
    ],
    // GroupGraphPatternSub ::= TriplesBlock? (GraphPatternNotTriples '.'? TriplesBlock?)*
    &[
        X::opt(&[r!(TriplesBlock)]),
        X::star(&[
            r!(GraphPatternNotTriples),
            X::opt(&[l!(".")]),
            X::opt(&[r!(TriplesBlock)]),
        ]),
    ],
    // TriplesBlock ::= TriplesSameSubjectPath ('.' TriplesBlock?)?
    &[
        r!(TriplesSameSubjectPath),
        X::opt(&[l!("."), X::opt(&[r!(TriplesBlock)])]),
    ],
    // GraphPatternNotTriples ::= GroupOrUnionGraphPattern|OptionalGraphPattern|MinusGraphPattern
    //                          | GraphGraphPattern|ServiceGraphPattern|Filter|Bind|InlineData
    &[X::alt(&[
        r!(GroupOrUnionGraphPattern),
        r!(OptionalGraphPattern),
        r!(MinusGraphPattern),
        r!(GraphGraphPattern),
        r!(ServiceGraphPattern),
        r!(Filter),
        r!(Bind),
        r!(InlineData),
    ])],
    // OptionalGraphPattern ::= 'OPTIONAL' GroupGraphPattern
    &[l!("OPTIONAL"), r!(GroupGraphPattern)],
    // GraphGraphPattern ::= 'GRAPH' VarOrIri GroupGraphPattern
    &[l!("GRAPH"), r!(VarOrIri), r!(GroupGraphPattern)],
    // ServiceGraphPattern ::= 'SERVICE' 'SILENT'? VarOrIri GroupGraphPattern
    &[
        l!("SERVICE"),
        X::opt(&[l!("SILENT")]),
        r!(VarOrIri),
        r!(GroupGraphPattern),
    ],
    // Bind ::= 'BIND' '(' Expression 'AS' Var ')'
    &[
        l!("BIND"),
        l!("("),
        r!(Expression),
        l!("AS"),
        r!(Var),
        l!(")"),
    ],
    // InlineData ::= 'VALUES' DataBlock
    &[l!("VALUES"), r!(DataBlock)],
    // DataBlock ::= InlineDataOneVar | InlineDataFull
    &[X::alt(&[r!(InlineDataOneVar), r!(InlineDataFull)])],
    // InlineDataOneVar ::= Var '{' DataBlockValue* '}'
    &[r!(Var), l!("{"), X::star(&[r!(DataBlockValue)]), l!("}")],
    // InlineDataFull ::= (NIL|'(' Var* ')') '{' ('(' DataBlockValue* ')'|NIL)* '}'
    &[
        X::alt(&[
            t!(NIL),
            X::seq(&[l!("("), X::star(&[r!(Var)]), l!(")")]),
        ]),
        l!("{"),
        X::star(&[X::alt(&[
            X::seq(&[l!("("), X::star(&[r!(DataBlockValue)]), l!(")")]),
            t!(NIL),
        ])]),
        l!("}"),
    ],
    // DataBlockValue ::= iri|RDFLiteral|NumericLiteral|BooleanLiteral|'UNDEF'|'NULL'
    // vendor ext: literal 'NULL' accepted as a graph-node value.
    &[X::alt(&[
        r!(Iri),
        r!(RdfLiteral),
        r!(NumericLiteral),
        r!(BooleanLiteral),
        l!("UNDEF"),
        l!("NULL"),
    ])],
    // MinusGraphPattern ::= 'MINUS' GroupGraphPattern
    &[l!("MINUS"), r!(GroupGraphPattern)],
    // GroupOrUnionGraphPattern ::= GroupGraphPattern ('UNION' GroupGraphPattern)*
    &[
        r!(GroupGraphPattern),
        X::star(&[l!("UNION"), r!(GroupGraphPattern)]),
    ],
    // Filter ::= 'FILTER' Constraint
    &[l!("FILTER"), r!(Constraint)],
    // Constraint ::= BrackettedExpression|BuiltInCall|FunctionCall
    &[X::alt(&[
        r!(BrackettedExpression),
        r!(BuiltInCall),
        r!(FunctionCall),
    ])],
    // FunctionCall ::= iri ArgList
    &[r!(Iri), r!(ArgList)],
    // ArgList ::= NIL
    //           | '(' 'DISTINCT'? Expression (',' Expression)* ')'
    //           | '(' (RDFLiteral|Var) (',' (RDFLiteral|Var))* ')'
    // vendor ext: the last alternative (a literal/var list, for string-join-style
    // builtins whose first argument is a bracketed literal/variable list).
    &[X::alt(&[
        t!(NIL),
        X::seq(&[
            l!("("),
            X::opt(&[l!("DISTINCT")]),
            r!(Expression),
            X::star(&[l!(","), r!(Expression)]),
            l!(")"),
        ]),
        X::seq(&[
            l!("("),
            X::alt(&[r!(RdfLiteral), r!(Var)]),
            X::star(&[l!(","), X::alt(&[r!(RdfLiteral), r!(Var)])]),
            l!(")"),
        ]),
    ])],
    // ExpressionList ::= NIL | '(' Expression (',' Expression)* ')'
    &[X::alt(&[
        t!(NIL),
        X::seq(&[
            l!("("),
            r!(Expression),
            X::star(&[l!(","), r!(Expression)]),
            l!(")"),
        ]),
    ])],
    // ConstructTemplate ::= '{' ConstructTriples? '}'
    &[l!("{"), X::opt(&[r!(ConstructTriples)]), l!("}")],
    // ConstructTriples ::= TriplesSameSubject ('.' ConstructTriples?)?
    &[
        r!(TriplesSameSubject),
        X::opt(&[l!("."), X::opt(&[r!(ConstructTriples)])]),
    ],
    // TriplesSameSubject ::= VarOrTerm PropertyListNotEmpty | TriplesNode PropertyList
    &[X::alt(&[
        X::seq(&[r!(VarOrTerm), r!(PropertyListNotEmpty)]),
        X::seq(&[r!(TriplesNode), r!(PropertyList)]),
    ])],
    // GroupGraphPattern ::= '{' (SubSelect|GroupGraphPatternSub) '}'
    &[
        l!("{"),
        X::alt(&[r!(SubSelect), r!(GroupGraphPatternSub)]),
        l!("}"),
    ],
    // PropertyList ::= PropertyListNotEmpty?
    &[X::opt(&[r!(PropertyListNotEmpty)])],
    // PropertyListNotEmpty ::= Verb ObjectList (';' (Verb ObjectList)?)*
    &[
        r!(Verb),
        r!(ObjectList),
        X::star(&[l!(";"), X::opt(&[r!(Verb), r!(ObjectList)])]),
    ],
    // Verb ::= VarOrIri | 'a'
    &[X::alt(&[r!(VarOrIri), l!("a")])],
    // ObjectList ::= Object (',' Object)*
    &[r!(Object), X::star(&[l!(","), r!(Object)])],
    // Object ::= GraphNode
    &[r!(GraphNode)],
    // TriplesSameSubjectPath ::= VarOrTerm PropertyListPathNotEmpty | TriplesNodePath PropertyListPath
    &[X::alt(&[
        X::seq(&[r!(VarOrTerm), r!(PropertyListPathNotEmpty)]),
        X::seq(&[r!(TriplesNodePath), r!(PropertyListPath)]),
    ])],
    // PropertyListPath ::= PropertyListPathNotEmpty?
    &[X::opt(&[r!(PropertyListPathNotEmpty)])],
    // PropertyListPathNotEmpty ::= (VerbPath|VerbSimple) ObjectListPath
    //                              (';' ((VerbPath|VerbSimple) ObjectListPath)?)*
    &[
        X::alt(&[r!(VerbPath), r!(VerbSimple)]),
        r!(ObjectListPath),
        X::star(&[
            l!(";"),
            X::opt(&[X::alt(&[r!(VerbPath), r!(VerbSimple)]), r!(ObjectListPath)]),
        ]),
    ],
    // VerbPath ::= Path
    &[r!(Path)],
    // VerbSimple ::= Var
    &[r!(Var)],
    // ObjectListPath ::= ObjectPath (',' ObjectPath)*
    &[r!(ObjectPath), X::star(&[l!(","), r!(ObjectPath)])],
    // ObjectPath ::= GraphNodePath
    &[r!(GraphNodePath)],
    // Path ::= PathAlternative
    &[r!(PathAlternative)],
    // PathAlternative ::= PathSequence ('|' PathSequence)*
    &[
        r!(PathSequence),
        X::star(&[l!("|"), r!(PathSequence)]),
    ],
    // PathSequence ::= PathEltOrInverse ('/' PathEltOrInverse)*
    &[
        r!(PathEltOrInverse),
        X::star(&[l!("/"), r!(PathEltOrInverse)]),
    ],
    // PathEltOrInverse ::= '^'? PathElt
    &[X::opt(&[l!("^")]), r!(PathElt)],
    // PathElt ::= PathPrimary PathMod?
    &[r!(PathPrimary), X::opt(&[r!(PathMod)])],
    // PathMod ::= '?'|'*'|'+'
    // note (open question, see DESIGN.md): '*' here shares a spelling with
    // MultiplicativeExpression's '*'; both keep their own NamedRule/Literal
    // identity in the tree, so downstream walkers never need to re-tokenize.
    &[X::alt(&[l!("?"), l!("*"), l!("+")])],
    // PathPrimary ::= iri | 'a' | '!' PathNegatedPropertySet | '(' Path ')'
    &[X::alt(&[
        r!(Iri),
        l!("a"),
        X::seq(&[l!("!"), r!(PathNegatedPropertySet)]),
        X::seq(&[l!("("), r!(Path), l!(")")]),
    ])],
    // PathNegatedPropertySet ::= PathOneInPropertySet
    //                          | '(' (PathOneInPropertySet ('|' PathOneInPropertySet)*)? ')'
    &[X::alt(&[
        r!(PathOneInPropertySet),
        X::seq(&[
            l!("("),
            X::opt(&[
                r!(PathOneInPropertySet),
                X::star(&[l!("|"), r!(PathOneInPropertySet)]),
            ]),
            l!(")"),
        ]),
    ])],
    // PathOneInPropertySet ::= iri | 'a' | '^' (iri|'a')
    &[X::alt(&[
        r!(Iri),
        l!("a"),
        X::seq(&[l!("^"), X::alt(&[r!(Iri), l!("a")])]),
    ])],
    // Integer ::= INTEGER
    &[t!(INTEGER)],
    // TriplesNode ::= Collection | BlankNodePropertyList
    &[X::alt(&[r!(Collection), r!(BlankNodePropertyList)])],
    // BlankNodePropertyList ::= '[' PropertyListNotEmpty ']'
    &[l!("["), r!(PropertyListNotEmpty), l!("]")],
    // TriplesNodePath ::= CollectionPath | BlankNodePropertyListPath
    &[X::alt(&[r!(CollectionPath), r!(BlankNodePropertyListPath)])],
    // BlankNodePropertyListPath ::= '[' PropertyListPathNotEmpty ']'
    &[l!("["), r!(PropertyListPathNotEmpty), l!("]")],
    // Collection ::= '(' GraphNode+ ')'
    &[l!("("), X::plus(&[r!(GraphNode)]), l!(")")],
    // CollectionPath ::= '(' GraphNodePath+ ')'
    &[l!("("), X::plus(&[r!(GraphNodePath)]), l!(")")],
    // GraphNode ::= VarOrTerm | TriplesNode
    &[X::alt(&[r!(VarOrTerm), r!(TriplesNode)])],
    // GraphNodePath ::= VarOrTerm | TriplesNodePath
    &[X::alt(&[r!(VarOrTerm), r!(TriplesNodePath)])],
    // VarOrTerm ::= Var | GraphTerm
    &[X::alt(&[r!(Var), r!(GraphTerm)])],
    // VarOrIri ::= Var | iri
    &[X::alt(&[r!(Var), r!(Iri)])],
    // Var ::= VAR1 | VAR2 | PARAMETERIZED_VAR (vendor ext)
    &[X::alt(&[t!(VAR1), t!(VAR2), t!(PARAMETERIZED_VAR)])],
    // GraphTerm ::= iri | RDFLiteral | NumericLiteral | BooleanLiteral | BlankNode | NIL
    //             | 'NULL' | PARAMETERIZED_VAR
    // vendor ext: 'NULL' literal and PARAMETERIZED_VAR are additional arms.
    &[X::alt(&[
        r!(Iri),
        r!(RdfLiteral),
        r!(NumericLiteral),
        r!(BooleanLiteral),
        r!(BlankNode),
        t!(NIL),
        l!("NULL"),
        t!(PARAMETERIZED_VAR),
    ])],
    // Expression ::= ConditionalOrExpression
    &[r!(ConditionalOrExpression)],
    // ConditionalOrExpression ::= ConditionalAndExpression ('||' ConditionalAndExpression)*
    &[
        r!(ConditionalAndExpression),
        X::star(&[l!("||"), r!(ConditionalAndExpression)]),
    ],
    // ConditionalAndExpression ::= ValueLogical ('&&' ValueLogical)*
    &[r!(ValueLogical), X::star(&[l!("&&"), r!(ValueLogical)])],
    // ValueLogical ::= RelationalExpression
    &[r!(RelationalExpression)],
    // RelationalExpression ::= NumericExpression
    //   (('='|'!='|'<'|'>'|'<='|'>=') NumericExpression | 'IN' ExpressionList | 'NOT' 'IN' ExpressionList)?
    &[
        r!(NumericExpression),
        X::opt(&[X::alt(&[
            X::seq(&[
                X::alt(&[
                    l!("="),
                    l!("!="),
                    l!("<="),
                    l!(">="),
                    l!("<"),
                    l!(">"),
                ]),
                r!(NumericExpression),
            ]),
            X::seq(&[l!("IN"), r!(ExpressionList)]),
            X::seq(&[l!("NOT"), l!("IN"), r!(ExpressionList)]),
        ])]),
    ],
    // NumericExpression ::= AdditiveExpression
    &[r!(AdditiveExpression)],
    // AdditiveExpression ::= MultiplicativeExpression
    //   ( ('+'|'-') MultiplicativeExpression
    //   | (NumericLiteralPositive|NumericLiteralNegative) (('*' UnaryExpression)|('/' UnaryExpression))* )*
    &[
        r!(MultiplicativeExpression),
        X::star(&[X::alt(&[
            X::seq(&[X::alt(&[l!("+"), l!("-")]), r!(MultiplicativeExpression)]),
            X::seq(&[
                X::alt(&[r!(NumericLiteralPositive), r!(NumericLiteralNegative)]),
                X::star(&[X::alt(&[
                    X::seq(&[l!("*"), r!(UnaryExpression)]),
                    X::seq(&[l!("/"), r!(UnaryExpression)]),
                ])]),
            ]),
        ])]),
    ],
    // MultiplicativeExpression ::= UnaryExpression (('*'|'/') UnaryExpression)*
    &[
        r!(UnaryExpression),
        X::star(&[X::alt(&[l!("*"), l!("/")]), r!(UnaryExpression)]),
    ],
    // UnaryExpression ::= '!' PrimaryExpression | '+' PrimaryExpression | '-' PrimaryExpression | PrimaryExpression
    &[X::alt(&[
        X::seq(&[l!("!"), r!(PrimaryExpression)]),
        X::seq(&[l!("+"), r!(PrimaryExpression)]),
        X::seq(&[l!("-"), r!(PrimaryExpression)]),
        r!(PrimaryExpression),
    ])],
    // PrimaryExpression ::= BrackettedExpression | BuiltInCall | iriOrFunction | RDFLiteral
    //                      | NumericLiteral | BooleanLiteral | Var | Aggregate | ExistsFunc | NotExistsFunc
    &[X::alt(&[
        r!(BrackettedExpression),
        r!(BuiltInCall),
        r!(IriOrFunction),
        r!(RdfLiteral),
        r!(NumericLiteral),
        r!(BooleanLiteral),
        r!(Var),
        r!(Aggregate),
        r!(ExistsFunc),
        r!(NotExistsFunc),
    ])],
    // iriOrFunction ::= iri ArgList?
    &[r!(Iri), X::opt(&[r!(ArgList)])],
    // BrackettedExpression ::= '(' (Expression|SubSelect) ')'  (vendor ext: SubSelect arm)
    &[l!("("), X::alt(&[r!(Expression), r!(SubSelect)]), l!(")")],
    // BuiltInCall ::= a large fixed set of function-name forms, plus
    // Aggregate/RegexExpression/SubstringExpression/StrReplaceExpression/ExistsFunc/NotExistsFunc.
    &[X::alt(&[
        r!(Aggregate),
        X::seq(&[l!("STR"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("LANG"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[
            l!("LANGMATCHES"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[l!("DATATYPE"), l!("("), r!(Expression), l!(")")]),
        // vendor ext: BOUND accepts a generic Expression, not just Var.
        X::seq(&[l!("BOUND"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("IRI"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("URI"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[
            l!("BNODE"),
            X::alt(&[
                X::seq(&[l!("("), r!(Expression), l!(")")]),
                t!(NIL),
            ]),
        ]),
        X::seq(&[l!("RAND"), t!(NIL)]),
        X::seq(&[l!("ABS"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("CEIL"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("FLOOR"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("ROUND"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("CONCAT"), r!(ExpressionList)]),
        r!(SubstringExpression),
        X::seq(&[l!("STRLEN"), l!("("), r!(Expression), l!(")")]),
        r!(StrReplaceExpression),
        X::seq(&[l!("UCASE"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("LCASE"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("ENCODE_FOR_URI"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[
            l!("CONTAINS"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRSTARTS"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRENDS"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRBEFORE"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRAFTER"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[l!("YEAR"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("MONTH"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("DAY"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("HOURS"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("MINUTES"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("SECONDS"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("TIMEZONE"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("TZ"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("NOW"), t!(NIL)]),
        X::seq(&[l!("UUID"), t!(NIL)]),
        X::seq(&[l!("STRUUID"), t!(NIL)]),
        X::seq(&[l!("MD5"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("SHA1"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("SHA256"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("SHA384"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("SHA512"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("COALESCE"), r!(ExpressionList)]),
        X::seq(&[
            l!("IF"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRLANG"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("STRDT"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("sameTerm"),
            l!("("),
            r!(Expression),
            l!(","),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[l!("isIRI"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("isURI"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("isBLANK"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("isLITERAL"), l!("("), r!(Expression), l!(")")]),
        X::seq(&[l!("isNUMERIC"), l!("("), r!(Expression), l!(")")]),
        r!(RegexExpression),
        r!(ExistsFunc),
        r!(NotExistsFunc),
    ])],
    // RegexExpression ::= 'REGEX' '(' Expression ',' Expression (',' Expression)? ')'
    &[
        l!("REGEX"),
        l!("("),
        r!(Expression),
        l!(","),
        r!(Expression),
        X::opt(&[l!(","), r!(Expression)]),
        l!(")"),
    ],
    // SubstringExpression ::= 'SUBSTR' '(' Expression ',' Expression (',' Expression)? ')'
    &[
        l!("SUBSTR"),
        l!("("),
        r!(Expression),
        l!(","),
        r!(Expression),
        X::opt(&[l!(","), r!(Expression)]),
        l!(")"),
    ],
    // StrReplaceExpression ::= 'REPLACE' '(' Expression ',' Expression ',' Expression (',' Expression)? ')'
    &[
        l!("REPLACE"),
        l!("("),
        r!(Expression),
        l!(","),
        r!(Expression),
        l!(","),
        r!(Expression),
        X::opt(&[l!(","), r!(Expression)]),
        l!(")"),
    ],
    // ExistsFunc ::= 'EXISTS' GroupGraphPattern
    &[l!("EXISTS"), r!(GroupGraphPattern)],
    // NotExistsFunc ::= 'NOT' 'EXISTS' GroupGraphPattern
    &[l!("NOT"), l!("EXISTS"), r!(GroupGraphPattern)],
    // Aggregate ::= ('COUNT'|'SUM'|'MIN'|'MAX'|'AVG'|'SAMPLE'|'GROUP_CONCAT')
    //               '(' 'DISTINCT'? ('*'|Expression) (';' 'SEPARATOR' '=' String)? ')'
    // vendor ext: GROUP_CONCAT's separator clause also accepts a bare ','
    // in place of the 'SEPARATOR' '=' keyword form.
    &[X::alt(&[
        X::seq(&[
            l!("COUNT"),
            l!("("),
            X::opt(&[l!("DISTINCT")]),
            X::alt(&[l!("*"), r!(Expression)]),
            l!(")"),
        ]),
        X::seq(&[
            X::alt(&[l!("SUM"), l!("MIN"), l!("MAX"), l!("AVG"), l!("SAMPLE")]),
            l!("("),
            X::opt(&[l!("DISTINCT")]),
            r!(Expression),
            l!(")"),
        ]),
        X::seq(&[
            l!("GROUP_CONCAT"),
            l!("("),
            X::opt(&[l!("DISTINCT")]),
            r!(Expression),
            X::opt(&[X::alt(&[
                X::seq(&[l!(";"), l!("SEPARATOR"), l!("="), r!(StringLiteral)]),
                X::seq(&[l!(","), r!(Expression)]),
            ])]),
            l!(")"),
        ]),
    ])],
    // RDFLiteral ::= String (LANGTAG | '^^' iri)?
    &[
        r!(StringLiteral),
        X::opt(&[X::alt(&[t!(LANGTAG), X::seq(&[l!("^^"), r!(Iri)])])]),
    ],
    // NumericLiteral ::= NumericLiteralUnsigned|NumericLiteralPositive|NumericLiteralNegative
    &[X::alt(&[
        r!(NumericLiteralUnsigned),
        r!(NumericLiteralPositive),
        r!(NumericLiteralNegative),
    ])],
    // NumericLiteralUnsigned ::= DOUBLE|DECIMAL|INTEGER
    &[X::alt(&[t!(DOUBLE), t!(DECIMAL), t!(INTEGER)])],
    // NumericLiteralPositive ::= DOUBLE_POSITIVE|DECIMAL_POSITIVE|INTEGER_POSITIVE
    &[X::alt(&[
        t!(DOUBLE_POSITIVE),
        t!(DECIMAL_POSITIVE),
        t!(INTEGER_POSITIVE),
    ])],
    // NumericLiteralNegative ::= DOUBLE_NEGATIVE|DECIMAL_NEGATIVE|INTEGER_NEGATIVE
    &[X::alt(&[
        t!(DOUBLE_NEGATIVE),
        t!(DECIMAL_NEGATIVE),
        t!(INTEGER_NEGATIVE),
    ])],
    // BooleanLiteral ::= 'true'|'false'
    &[X::alt(&[l!("true"), l!("false")])],
    // String ::= STRING_LITERAL_LONG1|STRING_LITERAL_LONG2|STRING_LITERAL1|STRING_LITERAL2
    &[X::alt(&[
        t!(STRING_LITERAL_LONG1),
        t!(STRING_LITERAL_LONG2),
        t!(STRING_LITERAL1),
        t!(STRING_LITERAL2),
    ])],
    // iri ::= IRIREF|PrefixedName
    &[X::alt(&[t!(IRIREF), r!(PrefixedName)])],
    // PrefixedName ::= PNAME_LN|PNAME_NS
    &[X::alt(&[t!(PNAME_LN), t!(PNAME_NS)])],
    // BlankNode ::= BLANK_NODE_LABEL|ANON
    &[X::alt(&[t!(BLANK_NODE_LABEL), t!(ANON)])],
];
