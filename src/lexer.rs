use super::{Error, Result};

pub mod token;

pub use token::{PosToken, Token, TokenKind};

/// Characters that end an identifier run unless escaped with `\`.
fn is_reserved(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || matches!(
            c,
            ':' | '&'
                | '|'
                | '?'
                | '*'
                | '\\'
                | '^'
                | '~'
                | '('
                | ')'
                | '!'
                | '['
                | ']'
                | '{'
                | '}'
                | '+'
                | '-'
                | '/'
                | '>'
                | '<'
                | '='
                | '"'
                | '.'
        )
}

fn is_eol(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

fn punct_kind(c: char) -> Option<TokenKind> {
    Some(match c {
        '.' => TokenKind::Dot,
        '"' => TokenKind::Quote,
        '/' => TokenKind::Slash,
        ':' => TokenKind::Colon,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '~' => TokenKind::Fuzzy,
        '^' => TokenKind::Boost,
        '*' | '?' => TokenKind::Wildcard,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '&' => TokenKind::And,
        '|' => TokenKind::Or,
        '!' => TokenKind::Not,
        _ => return None,
    })
}

/// Splits a query string into [`PosToken`]s.
///
/// At each position the rules are tried in a fixed order: line ends,
/// whitespace, comparisons, single punctuation, digit runs, identifiers, and
/// finally a lone trailing `\`. Anything else is a lexical error.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Returns the current byte offset.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes characters while `pred` holds and returns their byte length.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.pos += len;
        len
    }

    /// Consumes an identifier run: unreserved characters and `\x` pairs.
    fn take_ident(&mut self) -> usize {
        let start = self.pos;
        let mut chars = self.rest().chars().peekable();
        while let Some(&c) = chars.peek() {
            if c == '\\' {
                chars.next();
                let Some(escaped) = chars.next() else {
                    break;
                };
                self.pos += c.len_utf8() + escaped.len_utf8();
            } else if is_reserved(c) {
                break;
            } else {
                chars.next();
                self.pos += c.len_utf8();
            }
        }
        self.pos - start
    }

    fn emit(&self, start: usize, kind: TokenKind) -> PosToken {
        let token = Token::new(kind, &self.input[start..self.pos]);
        tracing::trace!(pos = start, kind = ?kind, text = %token.text, "token");
        PosToken { pos: start, token }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// If no rule matches the character at the current position, an
    /// [`Error::Lexical`] is returned.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        if is_eol(c) {
            self.take_while(is_eol);
            return Ok(Some(self.emit(start, TokenKind::Eol)));
        }
        if c.is_whitespace() {
            self.take_while(|c| c.is_whitespace() && !is_eol(c));
            return Ok(Some(self.emit(start, TokenKind::Whitespace)));
        }
        if c == '<' || c == '>' {
            self.pos += 1;
            if self.peek() == Some('=') {
                self.pos += 1;
            }
            return Ok(Some(self.emit(start, TokenKind::Compare)));
        }
        if let Some(kind) = punct_kind(c) {
            self.pos += 1;
            return Ok(Some(self.emit(start, kind)));
        }
        if c.is_ascii_digit() {
            self.take_while(|c| c.is_ascii_digit());
            return Ok(Some(self.emit(start, TokenKind::Number)));
        }
        if self.take_ident() > 0 {
            return Ok(Some(self.emit(start, TokenKind::Ident)));
        }
        if c == '\\' {
            self.pos += 1;
            return Ok(Some(self.emit(start, TokenKind::Backslash)));
        }

        Err(Error::Lexical { pos: start, lit: c })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Tokenizes the whole query string.
///
/// # Errors
///
/// Fails on the first character that matches no rule.
pub fn tokenize(input: &str) -> Result<Vec<PosToken>> {
    Lexer::new(input).collect()
}
