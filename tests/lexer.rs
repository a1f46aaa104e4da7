use lucene_ql::{
    Error, Result,
    lexer::{Lexer, Token, TokenKind, tokenize},
};

fn lex_all(input: &str) -> Result<Vec<(TokenKind, String)>> {
    Ok(tokenize(input)?
        .into_iter()
        .map(|t| (t.kind, t.token.text))
        .collect())
}

fn kinds(input: &str) -> Result<Vec<TokenKind>> {
    Ok(lex_all(input)?.into_iter().map(|(kind, _)| kind).collect())
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn test_field_clause_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("x:1 AND NOT y.z:abc")?,
        vec![
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::Colon, ":"),
            tok(TokenKind::Number, "1"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Ident, "AND"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Ident, "NOT"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Ident, "y"),
            tok(TokenKind::Dot, "."),
            tok(TokenKind::Ident, "z"),
            tok(TokenKind::Colon, ":"),
            tok(TokenKind::Ident, "abc"),
        ]
    );
    Ok(())
}

#[test]
fn test_punctuation_tokens_lexer() -> Result<()> {
    assert_eq!(
        kinds("()[]{}\"/+-~^*?&|!")?,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Quote,
            TokenKind::Slash,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Fuzzy,
            TokenKind::Boost,
            TokenKind::Wildcard,
            TokenKind::Wildcard,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
        ]
    );
    Ok(())
}

#[test]
fn test_comparison_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("<=>=<>")?,
        vec![
            tok(TokenKind::Compare, "<="),
            tok(TokenKind::Compare, ">="),
            tok(TokenKind::Compare, "<"),
            tok(TokenKind::Compare, ">"),
        ]
    );
    Ok(())
}

#[test]
fn test_whitespace_and_eol_runs_lexer() -> Result<()> {
    assert_eq!(
        lex_all("a \t b\r\n\nc")?,
        vec![
            tok(TokenKind::Ident, "a"),
            tok(TokenKind::Whitespace, " \t "),
            tok(TokenKind::Ident, "b"),
            tok(TokenKind::Eol, "\r\n\n"),
            tok(TokenKind::Ident, "c"),
        ]
    );
    Ok(())
}

#[test]
fn test_escapes_stay_verbatim_lexer() -> Result<()> {
    assert_eq!(
        lex_all(r"iopio\ 90")?,
        vec![tok(TokenKind::Ident, r"iopio\ "), tok(TokenKind::Number, "90")]
    );
    assert_eq!(
        lex_all(r"a\*b*")?,
        vec![tok(TokenKind::Ident, r"a\*b"), tok(TokenKind::Wildcard, "*")]
    );
    assert_eq!(
        lex_all(r"\:\(\)\\")?,
        vec![tok(TokenKind::Ident, r"\:\(\)\\")]
    );
    Ok(())
}

#[test]
fn test_trailing_backslash_lexer() -> Result<()> {
    assert_eq!(
        lex_all("a\\")?,
        vec![tok(TokenKind::Ident, "a"), tok(TokenKind::Backslash, "\\")]
    );
    Ok(())
}

#[test]
fn test_unicode_identifiers_lexer() -> Result<()> {
    assert_eq!(
        lex_all("名前:値")?,
        vec![
            tok(TokenKind::Ident, "名前"),
            tok(TokenKind::Colon, ":"),
            tok(TokenKind::Ident, "値"),
        ]
    );
    Ok(())
}

#[test]
fn test_positions_lexer() -> Result<()> {
    let positions: Vec<usize> = tokenize("ab:12 cd")?.iter().map(|t| t.pos).collect();
    assert_eq!(positions, vec![0, 2, 3, 5, 6]);
    Ok(())
}

#[test]
fn test_iterator_lexer() -> Result<()> {
    let mut lexer = Lexer::new("a b");
    assert_eq!(lexer.next_token()?.map(|t| t.token), Some(Token::new(TokenKind::Ident, "a")));
    assert_eq!(lexer.tell(), 1);
    assert_eq!(lexer.count(), 2);
    Ok(())
}

#[test]
fn test_lexer_throw_errors() {
    assert_eq!(lex_all("x=1"), Err(Error::Lexical { pos: 1, lit: '=' }));
    assert!(matches!(lex_all("a:b ="), Err(Error::Lexical { pos: 4, .. })));
}
