use std::{fmt, sync::OnceLock};

use super::{
    BoostSuffix, BoostValue, TermInfo, TermType,
    term::{PhraseTerm, SingleTerm},
};

/// One side of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeValue {
    /// `*`: the side is unbounded.
    Infinity,
    Single(SingleTerm),
    Phrase(PhraseTerm),
}

impl RangeValue {
    #[must_use]
    pub const fn is_infinity(&self) -> bool {
        matches!(self, RangeValue::Infinity)
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeValue::Infinity => f.write_str("*"),
            RangeValue::Single(single) => single.fmt(f),
            RangeValue::Phrase(phrase) => phrase.fmt(f),
        }
    }
}

/// The normalized form of a range: both sides and their inclusivity.
///
/// An infinite side is never inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    left: RangeValue,
    right: RangeValue,
    left_include: bool,
    right_include: bool,
}

impl Bound {
    #[must_use]
    pub fn new(left: RangeValue, right: RangeValue, left_include: bool, right_include: bool) -> Self {
        Bound {
            left_include: left_include && !left.is_infinity(),
            right_include: right_include && !right.is_infinity(),
            left,
            right,
        }
    }

    #[must_use]
    pub fn left(&self) -> &RangeValue {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &RangeValue {
        &self.right
    }

    #[must_use]
    pub fn left_include(&self) -> bool {
        self.left_include
    }

    #[must_use]
    pub fn right_include(&self) -> bool {
        self.right_include
    }
}

/// `[left TO right]`, `{left TO right}` or any mix of the two bracket styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DRangeTerm {
    pub left_inclusive: bool,
    pub left: RangeValue,
    pub right: RangeValue,
    pub right_inclusive: bool,
}

impl DRangeTerm {
    #[must_use]
    pub fn to_bound(&self) -> Bound {
        Bound::new(
            self.left.clone(),
            self.right.clone(),
            self.left_inclusive,
            self.right_inclusive,
        )
    }
}

impl fmt::Display for DRangeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} TO {}{}",
            if self.left_inclusive { '[' } else { '{' },
            self.left,
            self.right,
            if self.right_inclusive { ']' } else { '}' },
        )
    }
}

impl TermInfo for DRangeTerm {
    fn term_type(&self) -> TermType {
        TermType::RANGE
    }

    fn bound(&self) -> Option<Bound> {
        Some(self.to_bound())
    }
}

/// The operator of a single-sided range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Comparison {
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "<" => Comparison::Lt,
            "<=" => Comparison::Le,
            ">" => Comparison::Gt,
            ">=" => Comparison::Ge,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `>v`, `>=v`, `<v` or `<=v`.
///
/// Equivalent to a [`DRangeTerm`] with the open side at infinity; the
/// conversion is computed on first use and cached.
#[derive(Clone)]
pub struct SRangeTerm {
    op: Comparison,
    value: RangeValue,
    double: OnceLock<DRangeTerm>,
}

impl SRangeTerm {
    #[must_use]
    pub fn new(op: Comparison, value: RangeValue) -> Self {
        SRangeTerm {
            op,
            value,
            double: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn op(&self) -> Comparison {
        self.op
    }

    #[must_use]
    pub fn value(&self) -> &RangeValue {
        &self.value
    }

    /// The double-sided equivalent of this range.
    pub fn to_double(&self) -> &DRangeTerm {
        self.double.get_or_init(|| {
            let value = self.value.clone();
            let (left, right) = match self.op {
                Comparison::Gt | Comparison::Ge => (value, RangeValue::Infinity),
                Comparison::Lt | Comparison::Le => (RangeValue::Infinity, value),
            };
            DRangeTerm {
                left_inclusive: self.op == Comparison::Ge,
                left,
                right,
                right_inclusive: self.op == Comparison::Le,
            }
        })
    }
}

impl PartialEq for SRangeTerm {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.value == other.value
    }
}

impl Eq for SRangeTerm {}

impl fmt::Debug for SRangeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SRangeTerm")
            .field("op", &self.op)
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for SRangeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.value)
    }
}

impl TermInfo for SRangeTerm {
    fn term_type(&self) -> TermType {
        TermType::RANGE
    }

    fn bound(&self) -> Option<Bound> {
        Some(self.to_double().to_bound())
    }
}

/// Either form of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    Single(SRangeTerm),
    Double(DRangeTerm),
}

impl Range {
    #[must_use]
    pub fn to_bound(&self) -> Bound {
        match self {
            Range::Single(single) => single.to_double().to_bound(),
            Range::Double(double) => double.to_bound(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Single(single) => single.fmt(f),
            Range::Double(double) => double.fmt(f),
        }
    }
}

/// A range with an optional boost suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTerm {
    pub range: Range,
    pub boost: Option<BoostSuffix>,
}

impl fmt::Display for RangeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.range.fmt(f)?;
        if let Some(boost) = &self.boost {
            boost.fmt(f)?;
        }
        Ok(())
    }
}

impl TermInfo for RangeTerm {
    fn term_type(&self) -> TermType {
        if self.boost.is_some() {
            TermType::RANGE | TermType::BOOST
        } else {
            TermType::RANGE
        }
    }

    fn boost(&self) -> BoostValue {
        self.boost
            .as_ref()
            .map_or(BoostValue::DEFAULT_BOOST, BoostSuffix::value)
    }

    fn bound(&self) -> Option<Bound> {
        Some(self.range.to_bound())
    }
}
