use std::fmt;

/// The kind of a query string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of `\n` / `\r`.
    Eol,
    /// A run of non-newline whitespace.
    Whitespace,
    /// A run of unreserved characters and `\`-escaped pairs.
    Ident,
    /// `.`
    Dot,
    /// A run of ASCII digits.
    Number,
    /// `"`
    Quote,
    /// `/`
    Slash,
    /// A lone `\` with nothing left to escape.
    Backslash,
    /// `:`
    Colon,
    /// `<`, `<=`, `>`, `>=`
    Compare,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `~`
    Fuzzy,
    /// `^`
    Boost,
    /// `*` or `?`
    Wildcard,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `&`
    And,
    /// `|`
    Or,
    /// `!`
    Not,
}

impl TokenKind {
    /// Returns true for whitespace and end-of-line runs.
    #[must_use]
    pub const fn is_space(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Eol)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Eol => "end of line",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Ident => "identifier",
            TokenKind::Dot => "'.'",
            TokenKind::Number => "number",
            TokenKind::Quote => "'\"'",
            TokenKind::Slash => "'/'",
            TokenKind::Backslash => "'\\'",
            TokenKind::Colon => "':'",
            TokenKind::Compare => "comparison",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Fuzzy => "'~'",
            TokenKind::Boost => "'^'",
            TokenKind::Wildcard => "wildcard",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::And => "'&'",
            TokenKind::Or => "'|'",
            TokenKind::Not => "'!'",
        })
    }
}

/// A query string token. The text is kept verbatim, escapes included, so that
/// joining the text of a token run reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Returns true if this is an identifier whose text is one of `words`.
    #[must_use]
    pub fn is_word(&self, words: &[&str]) -> bool {
        self.kind == TokenKind::Ident && words.contains(&self.text.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Debug, Eq)]
pub struct PosToken {
    /// The start byte offset of the token in the query string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

/// Joins the verbatim text of a token run.
pub(crate) fn join(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
