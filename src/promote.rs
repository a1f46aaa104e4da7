//! Rewrites `field:( ... )` into the equivalent standalone query.
//!
//! `x:(a OR NOT [1 TO 2])^3` becomes `x:a^3 OR NOT x:[1 TO 2]^3`.

use super::ast::{
    BoostSuffix, Clause, Field, FieldQuery, FuzzyTerm, GroupClause, Literal, Lucene,
    LogicTermGroup, Modifier, ParenQuery, Range, RangeTerm, Term, TermGroup, TermGroupElem,
};

/// Promotes a term group to a standalone query tree, qualifying every element
/// with `field` and carrying the group's boost onto each of them.
///
/// Returns `None` if either input is absent, the field is empty, or nothing
/// in the group could be promoted.
pub fn promote_term_group(field: Option<&Field>, group: Option<&TermGroup>) -> Option<Lucene> {
    let field = field?;
    let group = group?;
    let query = promote_logic(field, &group.group, group.boost.as_ref());
    if query.is_none() {
        tracing::debug!(field = %field, "term group promoted to nothing");
    }
    query
}

fn promote_logic(
    field: &Field,
    group: &LogicTermGroup,
    boost: Option<&BoostSuffix>,
) -> Option<Lucene> {
    group.filter_map(&mut |clause: &GroupClause| match clause {
        GroupClause::Paren(paren) => Some(Clause::Paren(ParenQuery {
            sub_query: Box::new(promote_logic(field, &paren.sub_group, boost)?),
        })),
        GroupClause::Elem(elem) => promote_elem(field, elem, boost).map(Clause::Field),
    })
}

fn promote_elem(
    field: &Field,
    elem: &TermGroupElem,
    boost: Option<&BoostSuffix>,
) -> Option<FieldQuery> {
    if field.is_empty() {
        return None;
    }
    let fuzzy = |literal| {
        Term::Fuzzy(FuzzyTerm {
            literal,
            modifier: boost.cloned().map(Modifier::Boost),
        })
    };
    let range = |range| {
        Term::Range(RangeTerm {
            range,
            boost: boost.cloned(),
        })
    };
    let term = match elem {
        TermGroupElem::Single(single) => fuzzy(Literal::Single(single.clone())),
        TermGroupElem::Phrase(phrase) => fuzzy(Literal::Phrase(phrase.clone())),
        TermGroupElem::SRange(srange) => range(Range::Single(srange.clone())),
        TermGroupElem::DRange(drange) => range(Range::Double(drange.clone())),
    };
    Some(FieldQuery {
        field: field.clone(),
        term,
    })
}
