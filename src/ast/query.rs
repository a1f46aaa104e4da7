use std::fmt;

use super::{
    QueryInfo, QueryKind,
    logic::{AndChain, AndLink, BoolExpr, Operand},
    term::Term,
};
use crate::lexer::{Token, token::join};

/// A whole query: `OrQuery` branches joined by `OR`.
pub type Lucene = BoolExpr<Clause>;
/// An AND-chain of query operands.
pub type OrQuery = AndChain<Clause>;
/// An `AND`-joined (or `NOT`-juxtaposed) sibling in an [`OrQuery`].
pub type AnsQuery = AndLink<Clause>;
/// A query clause with an optional leading `NOT`.
pub type AndQuery = Operand<Clause>;

/// A field name, kept as the raw tokens it was written with. Field names are
/// opaque; they are only stored and re-emitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    pub tokens: Vec<Token>,
}

impl Field {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn name(&self) -> String {
        join(&self.tokens)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// `field:term`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldQuery {
    pub field: Field,
    pub term: Term,
}

impl fmt::Display for FieldQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.term)
    }
}

impl QueryInfo for FieldQuery {
    fn query_kind(&self) -> QueryKind {
        QueryKind::Field
    }
}

/// `( sub-query )`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenQuery {
    pub sub_query: Box<Lucene>,
}

impl fmt::Display for ParenQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} )", self.sub_query)
    }
}

impl QueryInfo for ParenQuery {
    fn query_kind(&self) -> QueryKind {
        QueryKind::Paren
    }
}

/// The leaf of the query grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Paren(ParenQuery),
    Field(FieldQuery),
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Paren(paren) => paren.fmt(f),
            Clause::Field(field) => field.fmt(f),
        }
    }
}

impl QueryInfo for Clause {
    fn query_kind(&self) -> QueryKind {
        match self {
            Clause::Paren(paren) => paren.query_kind(),
            Clause::Field(field) => field.query_kind(),
        }
    }
}
