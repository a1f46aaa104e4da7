use std::fmt;

/// A term's relevance weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BoostValue(pub f64);

impl BoostValue {
    /// The term itself is absent.
    pub const NO_BOOST: Self = Self(0.0);
    /// The term is present without an explicit magnitude.
    pub const DEFAULT_BOOST: Self = Self(1.0);

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// A term's edit-distance tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fuzziness(pub i32);

impl Fuzziness {
    /// No `~` suffix.
    pub const NO_FUZZY: Self = Self(0);
    /// A bare `~`: the search engine picks the distance.
    pub const AUTO_FUZZY: Self = Self(-1);

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_auto(self) -> bool {
        self.0 == Self::AUTO_FUZZY.0
    }
}

/// `^` followed by an optional magnitude such as `2`, `08` or `8.9`.
///
/// The magnitude text is kept as written so that serialization echoes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoostSuffix {
    pub magnitude: Option<String>,
}

impl BoostSuffix {
    #[must_use]
    pub fn value(&self) -> BoostValue {
        self.magnitude
            .as_deref()
            .and_then(|m| m.parse().ok())
            .map_or(BoostValue::DEFAULT_BOOST, BoostValue)
    }
}

impl fmt::Display for BoostSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", self.magnitude.as_deref().unwrap_or_default())
    }
}

/// `~` followed by an optional integer distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FuzzySuffix {
    pub distance: Option<String>,
}

impl FuzzySuffix {
    /// Distances too large for an `i32` saturate.
    #[must_use]
    pub fn value(&self) -> Fuzziness {
        match self.distance.as_deref() {
            None => Fuzziness::AUTO_FUZZY,
            Some(d) => Fuzziness(d.parse().unwrap_or(i32::MAX)),
        }
    }
}

impl fmt::Display for FuzzySuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.distance.as_deref().unwrap_or_default())
    }
}

/// The suffix slot of a literal or phrase term: fuzzy or boost, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    Fuzzy(FuzzySuffix),
    Boost(BoostSuffix),
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Fuzzy(fuzzy) => fuzzy.fmt(f),
            Modifier::Boost(boost) => boost.fmt(f),
        }
    }
}
