use std::{fmt, ops};

/// Classification of a term as a bitmask.
///
/// Base kinds (`SINGLE`, `PHRASE`, `REGEXP`, `RANGE`, `GROUP`) are mutually
/// exclusive in practice, modifiers (`WILDCARD`, `FUZZY`, `BOOST`, `PREFIX`)
/// combine freely. Test membership with [`TermType::contains`] rather than
/// equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TermType(u32);

impl TermType {
    pub const UNKNOWN: Self = Self(0);
    pub const SINGLE: Self = Self(1);
    pub const PHRASE: Self = Self(1 << 1);
    pub const REGEXP: Self = Self(1 << 2);
    pub const RANGE: Self = Self(1 << 3);
    pub const GROUP: Self = Self(1 << 4);
    pub const WILDCARD: Self = Self(1 << 5);
    pub const FUZZY: Self = Self(1 << 6);
    pub const BOOST: Self = Self(1 << 7);
    pub const PREFIX: Self = Self(1 << 8);

    const NAMES: [(Self, &'static str); 9] = [
        (Self::SINGLE, "SINGLE"),
        (Self::PHRASE, "PHRASE"),
        (Self::REGEXP, "REGEXP"),
        (Self::RANGE, "RANGE"),
        (Self::GROUP, "GROUP"),
        (Self::WILDCARD, "WILDCARD"),
        (Self::FUZZY, "FUZZY"),
        (Self::BOOST, "BOOST"),
        (Self::PREFIX, "PREFIX"),
    ];

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag of `other` is set. Always false for
    /// [`TermType::UNKNOWN`].
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Returns true if any flag of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl ops::BitOr for TermType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for TermType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for TermType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("UNKNOWN");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TermType;

    #[test]
    fn flags_combine() {
        let t = TermType::SINGLE | TermType::WILDCARD | TermType::BOOST;
        assert!(t.contains(TermType::SINGLE));
        assert!(t.contains(TermType::WILDCARD | TermType::BOOST));
        assert!(!t.contains(TermType::FUZZY));
        assert!(!t.contains(TermType::UNKNOWN));
        assert_eq!(t & TermType::WILDCARD, TermType::WILDCARD);
        assert_eq!(format!("{t:?}"), "SINGLE | WILDCARD | BOOST");
    }

    #[test]
    fn unknown_is_empty() {
        assert!(TermType::default().is_unknown());
        assert_eq!(format!("{:?}", TermType::UNKNOWN), "UNKNOWN");
        assert!(!TermType::UNKNOWN.intersects(TermType::RANGE));
    }
}
