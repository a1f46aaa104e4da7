use std::panic::{self, AssertUnwindSafe};

use super::{
    Error, Result,
    ast::{AndChain, AndLink, BoolExpr, Clause, Field, FieldQuery, Lucene, Operand, ParenQuery, Term},
    lexer::{PosToken, Token, TokenKind, tokenize},
};

mod term;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

const AND_WORDS: &[&str] = &["AND", "and"];
const OR_WORDS: &[&str] = &["OR", "or"];
const NOT_WORDS: &[&str] = &["NOT", "not"];

/// Token kinds a field name is made of.
const FIELD_FRAGMENTS: &[TokenKind] = &[
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
];

/// Token kinds that, directly after a word, make it part of a term or field
/// rather than a keyword.
const WORD_CONTINUATIONS: &[TokenKind] = &[
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
    TokenKind::Wildcard,
    TokenKind::Colon,
    TokenKind::Fuzzy,
    TokenKind::Boost,
    TokenKind::Backslash,
];

/// What may follow a complete clause.
const AFTER_CLAUSE: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::Ident,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::Not,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    And,
    Or,
    Not,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum parenthesis nesting, counting query parentheses and term-group
    /// parentheses alike.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parses a query string into a [`Lucene`] tree.
///
/// # Errors
///
/// If the query cannot be tokenized or parsed, an [`Error`] describing the
/// first offending position is returned. This function does not panic.
pub fn parse(query: &str) -> Result<Lucene> {
    guarded(|| Parser::new(query)?.parse())
}

/// Parses the right-hand side of a `field:term` clause on its own.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_term(term: &str) -> Result<Term> {
    guarded(|| Parser::new(term)?.parse_term())
}

/// Runs `f`, turning a panic into [`Error::Internal`].
fn guarded<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    let result = panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "parser panicked".to_string());
        Err(Error::Internal(message))
    });
    if let Err(err) = &result {
        tracing::debug!(error = %err, "query rejected");
    }
    result
}

/// A recursive-descent parser over a tokenized query string.
pub struct Parser {
    tokens: Vec<PosToken>,
    cursor: usize,
    end: usize,
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Tokenizes `input` and creates a parser for it.
    ///
    /// # Errors
    ///
    /// If the input contains a character no token rule accepts, an
    /// [`Error::Lexical`] is returned.
    pub fn new(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        tracing::debug!(len = input.len(), tokens = tokens.len(), "tokenized query");
        Ok(Parser {
            tokens,
            cursor: 0,
            end: input.len(),
            depth: 0,
            config: ParserConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses the whole input as a query, consuming the parser.
    ///
    /// # Errors
    ///
    /// If the query is invalid, an [`Error`] is returned.
    pub fn parse(mut self) -> Result<Lucene> {
        self.skip_space();
        let query = self.parse_bool_expr(Self::parse_clause)?;
        self.skip_space();
        self.finish(AFTER_CLAUSE)?;
        Ok(query)
    }

    /// Parses the whole input as a single term, consuming the parser.
    ///
    /// # Errors
    ///
    /// If the term is invalid, an [`Error`] is returned.
    pub fn parse_term(mut self) -> Result<Term> {
        self.skip_space();
        let term = self.parse_term_value()?;
        self.skip_space();
        self.finish(&[TokenKind::Whitespace])?;
        Ok(term)
    }

    fn finish(&self, expected: &[TokenKind]) -> Result<()> {
        match self.peek() {
            Some(_) => Err(self.unexpected(expected)),
            None => Ok(()),
        }
    }

    // Cursor helpers.

    fn peek(&self) -> Option<&PosToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_kind_at(0)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.cursor + offset).map(|t| t.kind)
    }

    fn at(&self, kinds: &[TokenKind]) -> bool {
        self.peek_kind().is_some_and(|kind| kinds.contains(&kind))
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor)?.token.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Byte offset of the next token, or the input length at the end.
    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |t| t.pos)
    }

    fn unexpected(&self, expected: &[TokenKind]) -> Error {
        match self.peek() {
            Some(PosToken { pos, token }) => Error::UnexpectedToken {
                pos: *pos,
                found: token.kind,
                text: token.text.clone(),
                expected: expected.to_vec(),
            },
            None => Error::UnexpectedEnd {
                pos: self.end,
                expected: expected.to_vec(),
            },
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.at(&[kind]) {
            self.bump().ok_or_else(|| self.unexpected(&[kind]))
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    /// Takes tokens while their kind is one of `kinds`.
    fn take_run(&mut self, kinds: &[TokenKind]) -> Vec<Token> {
        let mut run = Vec::new();
        while self.at(kinds) {
            run.extend(self.bump());
        }
        run
    }

    /// Takes every token up to the next `close`, then the `close` itself.
    fn take_delimited(&mut self, close: TokenKind) -> Result<Vec<Token>> {
        let mut inner = Vec::new();
        loop {
            match self.peek_kind() {
                Some(kind) if kind == close => {
                    self.bump();
                    return Ok(inner);
                }
                Some(_) => inner.extend(self.bump()),
                None => return Err(self.unexpected(&[close])),
            }
        }
    }

    /// Skips whitespace and line ends, returning how many tokens were skipped.
    fn skip_space(&mut self) -> usize {
        let start = self.cursor;
        while self.peek_kind().is_some_and(TokenKind::is_space) {
            self.cursor += 1;
        }
        self.cursor - start
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.config.max_depth {
            return Err(Error::TooDeep {
                pos: self.offset(),
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the number of tokens spelling `keyword` at the cursor, if any.
    fn keyword(&self, keyword: Keyword) -> Option<usize> {
        let (words, symbol, symbol_len) = match keyword {
            Keyword::And => (AND_WORDS, TokenKind::And, 2),
            Keyword::Or => (OR_WORDS, TokenKind::Or, 2),
            Keyword::Not => (NOT_WORDS, TokenKind::Not, 1),
        };
        let token = self.peek()?;
        if token.is_word(words) {
            // A word is a keyword only when it stands alone and an operand
            // follows it: `NOT:1` is a field and `x:( NOT )` a literal.
            let standalone = !self
                .peek_kind_at(1)
                .is_some_and(|next| WORD_CONTINUATIONS.contains(&next));
            let operand_follows = self.tokens[self.cursor + 1..]
                .iter()
                .find(|t| !t.kind.is_space())
                .is_some_and(|t| t.kind != TokenKind::RParen);
            return (standalone && operand_follows).then_some(1);
        }
        (0..symbol_len)
            .all(|i| self.peek_kind_at(i) == Some(symbol))
            .then_some(symbol_len)
    }

    // Boolean structure, shared by queries and term groups.

    /// `bool_expr := and_chain (OR and_chain)*`
    fn parse_bool_expr<C>(&mut self, clause: fn(&mut Self) -> Result<C>) -> Result<BoolExpr<C>> {
        let mut expr = BoolExpr::new(self.parse_and_chain(clause)?);
        loop {
            let save = self.cursor;
            self.skip_space();
            let Some(len) = self.keyword(Keyword::Or) else {
                self.cursor = save;
                return Ok(expr);
            };
            self.cursor += len;
            self.skip_space();
            expr.rest.push(self.parse_and_chain(clause)?);
        }
    }

    /// `and_chain := operand ((AND | <space> &NOT) operand)*`
    fn parse_and_chain<C>(&mut self, clause: fn(&mut Self) -> Result<C>) -> Result<AndChain<C>> {
        let mut chain = AndChain::new(self.parse_operand(clause)?);
        loop {
            let save = self.cursor;
            let spaced = self.skip_space() > 0;
            let explicit = if let Some(len) = self.keyword(Keyword::And) {
                self.cursor += len;
                self.skip_space();
                true
            } else if spaced && self.keyword(Keyword::Not).is_some() {
                false
            } else {
                self.cursor = save;
                return Ok(chain);
            };
            let operand = self.parse_operand(clause)?;
            chain.rest.push(AndLink { explicit, operand });
        }
    }

    /// `operand := NOT? clause`
    fn parse_operand<C>(&mut self, clause: fn(&mut Self) -> Result<C>) -> Result<Operand<C>> {
        match self.keyword(Keyword::Not) {
            Some(len) => {
                self.cursor += len;
                self.skip_space();
                Ok(Operand::negated(clause(self)?))
            }
            None => Ok(Operand::new(clause(self)?)),
        }
    }

    // Query leaves.

    /// `clause := paren_query | field_query`
    fn parse_clause(&mut self) -> Result<Clause> {
        match self.peek_kind() {
            Some(TokenKind::LParen) => self.parse_paren_query().map(Clause::Paren),
            Some(kind) if FIELD_FRAGMENTS.contains(&kind) => {
                self.parse_field_query().map(Clause::Field)
            }
            _ => Err(self.unexpected(&[
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Minus,
            ])),
        }
    }

    /// `paren_query := '(' space* bool_expr space* ')'`
    fn parse_paren_query(&mut self) -> Result<ParenQuery> {
        self.enter()?;
        self.expect(TokenKind::LParen)?;
        self.skip_space();
        let sub_query = self.parse_bool_expr(Self::parse_clause)?;
        self.skip_space();
        self.expect(TokenKind::RParen)?;
        self.leave();
        Ok(ParenQuery {
            sub_query: Box::new(sub_query),
        })
    }

    /// `field_query := field ':' term`
    fn parse_field_query(&mut self) -> Result<FieldQuery> {
        let field = Field {
            tokens: self.take_run(FIELD_FRAGMENTS),
        };
        if !self.at(&[TokenKind::Colon]) {
            let mut expected = FIELD_FRAGMENTS.to_vec();
            expected.push(TokenKind::Colon);
            return Err(self.unexpected(&expected));
        }
        self.bump();
        let term = self.parse_term_value()?;
        Ok(FieldQuery { field, term })
    }
}
