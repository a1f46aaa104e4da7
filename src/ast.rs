//! The query syntax tree and its accessors.
//!
//! Every accessor is total: the [`TermInfo`] and [`QueryInfo`] traits are also
//! implemented for `Option<T>`, where `None` stands for an absent node and
//! yields the documented default instead of an error.

pub mod group;
pub mod logic;
pub mod modifier;
pub mod query;
pub mod range;
pub mod term;
pub mod term_type;

use std::fmt;

pub use self::{
    group::{
        AndTermGroup, AnsTermGroup, GroupClause, LogicTermGroup, OrTermGroup, ParenTermGroup,
        TermGroup, TermGroupElem,
    },
    logic::{AndChain, AndLink, BoolExpr, Operand},
    modifier::{BoostSuffix, BoostValue, Fuzziness, FuzzySuffix, Modifier},
    query::{AndQuery, AnsQuery, Clause, Field, FieldQuery, Lucene, OrQuery, ParenQuery},
    range::{Bound, Comparison, DRangeTerm, Range, RangeTerm, RangeValue, SRangeTerm},
    term::{FuzzyTerm, Literal, PhraseTerm, RegexpTerm, SingleTerm, Term},
    term_type::TermType,
};

/// Derived semantics of a term-like node.
pub trait TermInfo {
    /// The term's [`TermType`] bitmask.
    fn term_type(&self) -> TermType;

    /// [`BoostValue::DEFAULT_BOOST`] unless a `^N` suffix says otherwise.
    fn boost(&self) -> BoostValue {
        BoostValue::DEFAULT_BOOST
    }

    fn fuzziness(&self) -> Fuzziness {
        Fuzziness::NO_FUZZY
    }

    /// The normalized bound of a range term, `None` for anything else.
    fn bound(&self) -> Option<Bound> {
        None
    }
}

impl<T: TermInfo + ?Sized> TermInfo for &T {
    fn term_type(&self) -> TermType {
        (**self).term_type()
    }

    fn boost(&self) -> BoostValue {
        (**self).boost()
    }

    fn fuzziness(&self) -> Fuzziness {
        (**self).fuzziness()
    }

    fn bound(&self) -> Option<Bound> {
        (**self).bound()
    }
}

impl<T: TermInfo> TermInfo for Option<T> {
    fn term_type(&self) -> TermType {
        self.as_ref().map_or(TermType::UNKNOWN, TermInfo::term_type)
    }

    fn boost(&self) -> BoostValue {
        self.as_ref().map_or(BoostValue::NO_BOOST, TermInfo::boost)
    }

    fn fuzziness(&self) -> Fuzziness {
        self.as_ref().map_or(Fuzziness::NO_FUZZY, TermInfo::fuzziness)
    }

    fn bound(&self) -> Option<Bound> {
        self.as_ref().and_then(TermInfo::bound)
    }
}

/// The shape of a query-level node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryKind {
    /// The node is absent.
    #[default]
    Unknown,
    /// Two or more branches joined by `OR`.
    Or,
    /// Two or more operands joined by `AND` or juxtaposition.
    And,
    /// A single negated operand.
    Not,
    /// A parenthesized sub-query.
    Paren,
    /// A `field:term` clause.
    Field,
}

/// Classification of query-level nodes.
pub trait QueryInfo {
    fn query_kind(&self) -> QueryKind;
}

impl<T: QueryInfo + ?Sized> QueryInfo for &T {
    fn query_kind(&self) -> QueryKind {
        (**self).query_kind()
    }
}

impl<T: QueryInfo> QueryInfo for Option<T> {
    fn query_kind(&self) -> QueryKind {
        self.as_ref().map_or(QueryKind::Unknown, QueryInfo::query_kind)
    }
}

/// Renders a possibly absent node in canonical form; absent nodes render as
/// the empty string.
#[must_use]
pub fn render<T: fmt::Display + ?Sized>(node: Option<&T>) -> String {
    node.map(ToString::to_string).unwrap_or_default()
}
