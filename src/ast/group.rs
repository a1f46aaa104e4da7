use std::fmt;

use super::{
    BoostSuffix, BoostValue, QueryInfo, QueryKind, TermInfo, TermType,
    logic::{AndChain, AndLink, BoolExpr, Operand},
    range::{Bound, DRangeTerm, SRangeTerm},
    term::{PhraseTerm, SingleTerm},
};

/// The boolean expression inside a [`TermGroup`].
pub type LogicTermGroup = BoolExpr<GroupClause>;
pub type OrTermGroup = AndChain<GroupClause>;
pub type AnsTermGroup = AndLink<GroupClause>;
pub type AndTermGroup = Operand<GroupClause>;

/// A bare term inside a term group: no field, no suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermGroupElem {
    Single(SingleTerm),
    Phrase(PhraseTerm),
    SRange(SRangeTerm),
    DRange(DRangeTerm),
}

impl fmt::Display for TermGroupElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermGroupElem::Single(single) => single.fmt(f),
            TermGroupElem::Phrase(phrase) => phrase.fmt(f),
            TermGroupElem::SRange(range) => range.fmt(f),
            TermGroupElem::DRange(range) => range.fmt(f),
        }
    }
}

impl TermInfo for TermGroupElem {
    fn term_type(&self) -> TermType {
        match self {
            TermGroupElem::Single(single) => single.term_type(),
            TermGroupElem::Phrase(phrase) => phrase.term_type(),
            TermGroupElem::SRange(range) => range.term_type(),
            TermGroupElem::DRange(range) => range.term_type(),
        }
    }

    fn bound(&self) -> Option<Bound> {
        match self {
            TermGroupElem::SRange(range) => range.bound(),
            TermGroupElem::DRange(range) => range.bound(),
            _ => None,
        }
    }
}

/// `( sub-group )` nested inside a term group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenTermGroup {
    pub sub_group: Box<LogicTermGroup>,
}

impl fmt::Display for ParenTermGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} )", self.sub_group)
    }
}

/// The leaf of a term group's boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupClause {
    Paren(ParenTermGroup),
    Elem(TermGroupElem),
}

impl fmt::Display for GroupClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupClause::Paren(paren) => paren.fmt(f),
            GroupClause::Elem(elem) => elem.fmt(f),
        }
    }
}

/// An element classifies as [`QueryKind::Field`]: it becomes a field clause
/// once the group is promoted.
impl QueryInfo for GroupClause {
    fn query_kind(&self) -> QueryKind {
        match self {
            GroupClause::Paren(_) => QueryKind::Paren,
            GroupClause::Elem(_) => QueryKind::Field,
        }
    }
}

/// `field:( ... )` with an optional boost suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermGroup {
    pub group: LogicTermGroup,
    pub boost: Option<BoostSuffix>,
}

impl fmt::Display for TermGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} )", self.group)?;
        if let Some(boost) = &self.boost {
            boost.fmt(f)?;
        }
        Ok(())
    }
}

impl TermInfo for TermGroup {
    fn term_type(&self) -> TermType {
        if self.boost.is_some() {
            TermType::GROUP | TermType::BOOST
        } else {
            TermType::GROUP
        }
    }

    fn boost(&self) -> BoostValue {
        self.boost
            .as_ref()
            .map_or(BoostValue::DEFAULT_BOOST, BoostSuffix::value)
    }
}
