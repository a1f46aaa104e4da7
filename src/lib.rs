//! A parser for Lucene-style boolean query strings.
//!
//! ```
//! use lucene_ql::parse;
//!
//! let query = parse("NOT (x:1 AND y:2) OR z:[1 TO 5}^2").unwrap();
//! assert_eq!(query.to_string(), "NOT ( x:1 AND y:2 ) OR z:[1 TO 5}^2");
//! ```

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod promote;
pub mod value;

pub use self::{
    ast::{
        Bound, BoostValue, Clause, Field, FieldQuery, Fuzziness, Lucene, QueryInfo, QueryKind,
        Term, TermGroup, TermInfo, TermType, render,
    },
    lexer::{Lexer, PosToken, Token, TokenKind, tokenize},
    parser::{DEFAULT_MAX_DEPTH, Parser, ParserConfig, parse, parse_term},
    promote::promote_term_group,
    value::{TermValue, ValueError},
};

use std::fmt::Write as _;

fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let mut out = String::new();
            for kind in init {
                let _ = write!(out, "{kind}, ");
            }
            let _ = write!(out, "or {last}");
            out
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// No token rule matches the character at `pos`.
    #[error("unrecognised character '{}' at {pos}", lit.escape_default())]
    Lexical { pos: usize, lit: char },

    /// A token of an unexpected kind was encountered.
    #[error("unexpected {found} '{text}' at {pos}, expected {}", one_of(.expected))]
    UnexpectedToken {
        pos: usize,
        found: TokenKind,
        text: String,
        expected: Vec<TokenKind>,
    },

    /// The query ended where more input was required.
    #[error("unexpected end of query at {pos}, expected {}", one_of(.expected))]
    UnexpectedEnd { pos: usize, expected: Vec<TokenKind> },

    /// Parentheses are nested deeper than [`ParserConfig::max_depth`].
    #[error("parentheses nested deeper than {limit} at {pos}")]
    TooDeep { pos: usize, limit: usize },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
