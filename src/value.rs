//! Typed values extracted from terms through a caller-supplied decoder.

use super::ast::{Bound, RangeValue, Term};

/// The error type of [`Term::value`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValueError<E> {
    /// There is no term to decode.
    #[error("empty term")]
    EmptyTerm,
    /// The decoder rejected the term text.
    #[error("failed to decode term value: {0}")]
    Decode(E),
}

/// One side of a [`DecodedBound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit<V> {
    Infinite,
    Value(V),
}

/// A [`Bound`] whose sides went through a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedBound<V> {
    pub left: Limit<V>,
    pub right: Limit<V>,
    pub left_include: bool,
    pub right_include: bool,
}

/// The decoded value of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermValue<V> {
    /// A literal, phrase, regular expression or whole group.
    Single(V),
    Range(DecodedBound<V>),
}

impl RangeValue {
    fn decode<V, E>(&self, decode: impl FnMut(&str) -> Result<V, E>) -> Result<Limit<V>, E> {
        match self {
            RangeValue::Infinity => Ok(Limit::Infinite),
            RangeValue::Single(single) => single.value(decode).map(Limit::Value),
            RangeValue::Phrase(phrase) => phrase.value(decode).map(Limit::Value),
        }
    }
}

impl Bound {
    /// Decodes both finite sides, left first.
    pub fn decode<V, E>(
        &self,
        mut decode: impl FnMut(&str) -> Result<V, E>,
    ) -> Result<DecodedBound<V>, E> {
        Ok(DecodedBound {
            left: self.left().decode(&mut decode)?,
            right: self.right().decode(&mut decode)?,
            left_include: self.left_include(),
            right_include: self.right_include(),
        })
    }
}

impl Term {
    /// Decodes the term with `decode`, which receives the raw term text
    /// (escapes included, without quotes or slashes). A range decodes both of
    /// its sides; a group decodes its own canonical form.
    pub fn value<V, E>(
        &self,
        decode: impl FnMut(&str) -> Result<V, E>,
    ) -> Result<TermValue<V>, ValueError<E>> {
        term_value(Some(self), decode)
    }
}

/// [`Term::value`] over a possibly absent term.
///
/// # Errors
///
/// [`ValueError::EmptyTerm`] if `term` is `None`, [`ValueError::Decode`] with
/// the decoder's own error otherwise.
pub fn term_value<V, E>(
    term: Option<&Term>,
    mut decode: impl FnMut(&str) -> Result<V, E>,
) -> Result<TermValue<V>, ValueError<E>> {
    let term = term.ok_or(ValueError::EmptyTerm)?;
    match term {
        Term::Regexp(regexp) => regexp.value(decode).map(TermValue::Single),
        Term::Fuzzy(fuzzy) => fuzzy.literal.value(decode).map(TermValue::Single),
        Term::Range(range) => range.range.to_bound().decode(decode).map(TermValue::Range),
        Term::Group(group) => decode(&group.to_string()).map(TermValue::Single),
    }
    .map_err(ValueError::Decode)
}
