//! The OR-over-AND-over-NOT shape shared by whole queries and term groups.
//!
//! Both trees are instances of the same generic types, differing only in the
//! clause type at the leaves.

use std::fmt;

use super::{QueryInfo, QueryKind};

/// One or more [`AndChain`]s joined by `OR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolExpr<C> {
    pub head: AndChain<C>,
    /// Branches joined to the head by an explicit `OR`, in source order.
    pub rest: Vec<AndChain<C>>,
}

impl<C> BoolExpr<C> {
    #[must_use]
    pub fn new(head: AndChain<C>) -> Self {
        BoolExpr {
            head,
            rest: Vec::new(),
        }
    }

    /// All OR branches, head first.
    pub fn branches(&self) -> impl Iterator<Item = &AndChain<C>> {
        std::iter::once(&self.head).chain(&self.rest)
    }

    /// Rebuilds the expression with every clause mapped through `f`.
    ///
    /// Clauses for which `f` yields `None` are dropped together with their
    /// operand; a chain or expression left with nothing collapses to `None`.
    pub fn filter_map<D>(&self, f: &mut impl FnMut(&C) -> Option<D>) -> Option<BoolExpr<D>> {
        let mut branches = self.branches().filter_map(|chain| chain.filter_map(f));
        let head = branches.next()?;
        Some(BoolExpr {
            head,
            rest: branches.collect(),
        })
    }
}

impl<C: fmt::Display> fmt::Display for BoolExpr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head.fmt(f)?;
        for branch in &self.rest {
            write!(f, " OR {branch}")?;
        }
        Ok(())
    }
}

impl<C: QueryInfo> QueryInfo for BoolExpr<C> {
    fn query_kind(&self) -> QueryKind {
        if self.rest.is_empty() {
            self.head.query_kind()
        } else {
            QueryKind::Or
        }
    }
}

/// One or more [`Operand`]s joined by `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndChain<C> {
    pub head: Operand<C>,
    pub rest: Vec<AndLink<C>>,
}

impl<C> AndChain<C> {
    #[must_use]
    pub fn new(head: Operand<C>) -> Self {
        AndChain {
            head,
            rest: Vec::new(),
        }
    }

    /// All operands, head first.
    pub fn operands(&self) -> impl Iterator<Item = &Operand<C>> {
        std::iter::once(&self.head).chain(self.rest.iter().map(|link| &link.operand))
    }

    fn filter_map<D>(&self, f: &mut impl FnMut(&C) -> Option<D>) -> Option<AndChain<D>> {
        let mut links = std::iter::once((true, &self.head))
            .chain(self.rest.iter().map(|link| (link.explicit, &link.operand)))
            .filter_map(|(explicit, operand)| {
                Some(AndLink {
                    explicit,
                    operand: operand.filter_map(f)?,
                })
            });
        let head = links.next()?.operand;
        Some(AndChain {
            head,
            rest: links.collect(),
        })
    }
}

impl<C: fmt::Display> fmt::Display for AndChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head.fmt(f)?;
        for link in &self.rest {
            link.fmt(f)?;
        }
        Ok(())
    }
}

impl<C: QueryInfo> QueryInfo for AndChain<C> {
    fn query_kind(&self) -> QueryKind {
        if self.rest.is_empty() {
            self.head.query_kind()
        } else {
            QueryKind::And
        }
    }
}

/// An operand joined to the previous one in an [`AndChain`].
///
/// `explicit` is false when the operands were only separated by whitespace,
/// which the grammar accepts only in front of a negated operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndLink<C> {
    pub explicit: bool,
    pub operand: Operand<C>,
}

impl<C: fmt::Display> fmt::Display for AndLink<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.explicit {
            write!(f, " AND {}", self.operand)
        } else {
            write!(f, " {}", self.operand)
        }
    }
}

/// A clause with an optional leading `NOT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand<C> {
    pub not: bool,
    pub clause: C,
}

impl<C> Operand<C> {
    #[must_use]
    pub fn new(clause: C) -> Self {
        Operand { not: false, clause }
    }

    #[must_use]
    pub fn negated(clause: C) -> Self {
        Operand { not: true, clause }
    }

    fn filter_map<D>(&self, f: &mut impl FnMut(&C) -> Option<D>) -> Option<Operand<D>> {
        Some(Operand {
            not: self.not,
            clause: f(&self.clause)?,
        })
    }
}

impl<C: fmt::Display> fmt::Display for Operand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.not {
            f.write_str("NOT ")?;
        }
        self.clause.fmt(f)
    }
}

impl<C: QueryInfo> QueryInfo for Operand<C> {
    fn query_kind(&self) -> QueryKind {
        if self.not {
            QueryKind::Not
        } else {
            self.clause.query_kind()
        }
    }
}
