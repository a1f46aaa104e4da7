use std::{fmt, sync::OnceLock};

use super::{
    BoostValue, Fuzziness, Modifier, TermInfo, TermType,
    group::TermGroup,
    range::{Bound, RangeTerm},
};
use crate::lexer::{Token, TokenKind, token::join};

fn scan_wildcard(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.kind == TokenKind::Wildcard)
}

/// An unquoted literal: a run of identifier, digit, dot, minus and wildcard
/// fragments.
#[derive(Clone)]
pub struct SingleTerm {
    tokens: Vec<Token>,
    wildcard: OnceLock<bool>,
}

impl SingleTerm {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        SingleTerm {
            tokens,
            wildcard: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true if the term contains an unescaped `*` or `?`. Computed on
    /// first call.
    pub fn has_wildcard(&self) -> bool {
        *self.wildcard.get_or_init(|| scan_wildcard(&self.tokens))
    }

    /// Returns true for `abc*`: one trailing `*` and no other wildcard.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        match self.tokens.split_last() {
            Some((last, head)) if !head.is_empty() => {
                last.kind == TokenKind::Wildcard && last.text == "*" && !scan_wildcard(head)
            }
            _ => false,
        }
    }

    /// Returns true for a lone `*`.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        matches!(self.tokens.as_slice(), [t] if t.kind == TokenKind::Wildcard && t.text == "*")
    }

    /// Decodes the raw term text.
    pub fn value<V, E>(&self, decode: impl FnOnce(&str) -> Result<V, E>) -> Result<V, E> {
        decode(&join(&self.tokens))
    }
}

impl PartialEq for SingleTerm {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for SingleTerm {}

impl fmt::Debug for SingleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SingleTerm").field(&join(&self.tokens)).finish()
    }
}

impl fmt::Display for SingleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.tokens))
    }
}

impl TermInfo for SingleTerm {
    fn term_type(&self) -> TermType {
        let mut ty = TermType::SINGLE;
        if self.has_wildcard() {
            ty |= TermType::WILDCARD;
        }
        if self.is_prefix() {
            ty |= TermType::PREFIX;
        }
        ty
    }
}

/// A quoted phrase. Only the text between the quotes is stored.
#[derive(Clone)]
pub struct PhraseTerm {
    tokens: Vec<Token>,
    wildcard: OnceLock<bool>,
}

impl PhraseTerm {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        PhraseTerm {
            tokens,
            wildcard: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn has_wildcard(&self) -> bool {
        *self.wildcard.get_or_init(|| scan_wildcard(&self.tokens))
    }

    /// Decodes the text between the quotes.
    pub fn value<V, E>(&self, decode: impl FnOnce(&str) -> Result<V, E>) -> Result<V, E> {
        decode(&join(&self.tokens))
    }
}

impl PartialEq for PhraseTerm {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for PhraseTerm {}

impl fmt::Debug for PhraseTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PhraseTerm").field(&join(&self.tokens)).finish()
    }
}

impl fmt::Display for PhraseTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", join(&self.tokens))
    }
}

impl TermInfo for PhraseTerm {
    fn term_type(&self) -> TermType {
        if self.has_wildcard() {
            TermType::PHRASE | TermType::WILDCARD
        } else {
            TermType::PHRASE
        }
    }
}

/// `/pattern/`. Only the pattern is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexpTerm {
    pub tokens: Vec<Token>,
}

impl RegexpTerm {
    /// Decodes the text between the slashes.
    pub fn value<V, E>(&self, decode: impl FnOnce(&str) -> Result<V, E>) -> Result<V, E> {
        decode(&join(&self.tokens))
    }
}

impl fmt::Display for RegexpTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", join(&self.tokens))
    }
}

impl TermInfo for RegexpTerm {
    fn term_type(&self) -> TermType {
        TermType::REGEXP
    }
}

/// The literal part of a [`FuzzyTerm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Single(SingleTerm),
    Phrase(PhraseTerm),
}

impl Literal {
    pub fn value<V, E>(&self, decode: impl FnOnce(&str) -> Result<V, E>) -> Result<V, E> {
        match self {
            Literal::Single(single) => single.value(decode),
            Literal::Phrase(phrase) => phrase.value(decode),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Single(single) => single.fmt(f),
            Literal::Phrase(phrase) => phrase.fmt(f),
        }
    }
}

impl TermInfo for Literal {
    fn term_type(&self) -> TermType {
        match self {
            Literal::Single(single) => single.term_type(),
            Literal::Phrase(phrase) => phrase.term_type(),
        }
    }
}

/// A literal or phrase with an optional fuzzy or boost suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyTerm {
    pub literal: Literal,
    pub modifier: Option<Modifier>,
}

impl fmt::Display for FuzzyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.literal.fmt(f)?;
        if let Some(modifier) = &self.modifier {
            modifier.fmt(f)?;
        }
        Ok(())
    }
}

impl TermInfo for FuzzyTerm {
    fn term_type(&self) -> TermType {
        let ty = self.literal.term_type();
        match self.modifier {
            Some(Modifier::Fuzzy(_)) => ty | TermType::FUZZY,
            Some(Modifier::Boost(_)) => ty | TermType::BOOST,
            None => ty,
        }
    }

    fn boost(&self) -> BoostValue {
        match &self.modifier {
            Some(Modifier::Boost(boost)) => boost.value(),
            _ => BoostValue::DEFAULT_BOOST,
        }
    }

    fn fuzziness(&self) -> Fuzziness {
        match &self.modifier {
            Some(Modifier::Fuzzy(fuzzy)) => fuzzy.value(),
            _ => Fuzziness::NO_FUZZY,
        }
    }
}

/// The value side of a `field:term` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Regexp(RegexpTerm),
    Fuzzy(FuzzyTerm),
    Range(RangeTerm),
    Group(TermGroup),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Regexp(regexp) => regexp.fmt(f),
            Term::Fuzzy(fuzzy) => fuzzy.fmt(f),
            Term::Range(range) => range.fmt(f),
            Term::Group(group) => group.fmt(f),
        }
    }
}

impl TermInfo for Term {
    fn term_type(&self) -> TermType {
        match self {
            Term::Regexp(regexp) => regexp.term_type(),
            Term::Fuzzy(fuzzy) => fuzzy.term_type(),
            Term::Range(range) => range.term_type(),
            Term::Group(group) => group.term_type(),
        }
    }

    fn boost(&self) -> BoostValue {
        match self {
            Term::Regexp(regexp) => regexp.boost(),
            Term::Fuzzy(fuzzy) => fuzzy.boost(),
            Term::Range(range) => range.boost(),
            Term::Group(group) => group.boost(),
        }
    }

    fn fuzziness(&self) -> Fuzziness {
        match self {
            Term::Fuzzy(fuzzy) => fuzzy.fuzziness(),
            _ => Fuzziness::NO_FUZZY,
        }
    }

    fn bound(&self) -> Option<Bound> {
        match self {
            Term::Range(range) => range.bound(),
            _ => None,
        }
    }
}
