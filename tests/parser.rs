use lucene_ql::{
    Error, Parser, ParserConfig, QueryInfo, QueryKind, Result,
    ast::{Clause, Literal, Lucene, Range, RangeValue, Term},
    lexer::TokenKind,
    parse, parse_term,
};

fn canonical(query: &str) -> String {
    parse(query)
        .unwrap_or_else(|err| panic!("Parser failed for query {query:?}: {err}"))
        .to_string()
}

fn first_term(query: &Lucene) -> &Term {
    match &query.head.head.clause {
        Clause::Field(field) => &field.term,
        Clause::Paren(_) => panic!("expected a field clause"),
    }
}

#[test]
fn test_canonical_examples_parser() {
    assert_eq!(canonical("x:1 AND NOT x:2"), "x:1 AND NOT x:2");
    assert_eq!(
        canonical("NOT (x:1 AND y:2) OR z:9"),
        "NOT ( x:1 AND y:2 ) OR z:9"
    );
    assert_eq!(
        canonical(r#"x:(txt OR foo OR bar) AND NOT x-y:"xxx" OR NOT zz:iopio\ 90"#),
        r#"x:( txt OR foo OR bar ) AND NOT x-y:"xxx" OR NOT zz:iopio\ 90"#
    );
}

#[test]
fn test_canonical_spacing_parser() {
    assert_eq!(canonical("  (   x:1   )  "), "( x:1 )");
    assert_eq!(canonical("x:(  a   OR b )"), "x:( a OR b )");
    assert_eq!(canonical("x:1\nAND\r\ny:2"), "x:1 AND y:2");
    assert_eq!(canonical("x:[1 TO 2 }"), "x:[1 TO 2}");
    assert_eq!(canonical("x:{ * TO \"b c\" ]^2"), "x:{* TO \"b c\"]^2");
}

#[test]
fn test_keyword_spellings_parser() {
    assert_eq!(canonical("x:1 and y:2 or z:3"), "x:1 AND y:2 OR z:3");
    assert_eq!(canonical("x:1 && y:2 || !z:3"), "x:1 AND y:2 OR NOT z:3");
    assert_eq!(canonical("not x:1"), "NOT x:1");
    assert_eq!(canonical("!(x:1)"), "NOT ( x:1 )");
}

#[test]
fn test_suffixes_kept_verbatim_parser() {
    assert_eq!(canonical("x:a^08"), "x:a^08");
    assert_eq!(canonical("x:a^8.9 OR y:b~ OR z:\"p q\"~3"), "x:a^8.9 OR y:b~ OR z:\"p q\"~3");
    assert_eq!(canonical("x:>=10^2"), "x:>=10^2");
    assert_eq!(canonical(r"x:/a.*b\/c/"), r"x:/a.*b\/c/");
    assert_eq!(canonical("x:(a OR b)^3"), "x:( a OR b )^3");
}

#[test]
fn test_or_binds_looser_than_and_parser() -> Result<()> {
    let query = parse("a:1 OR b:2 AND c:3")?;
    assert!(query.head.rest.is_empty());
    assert_eq!(query.rest.len(), 1);
    assert_eq!(query.rest[0].rest.len(), 1);
    assert!(query.rest[0].rest[0].explicit);
    assert_eq!(query.query_kind(), QueryKind::Or);
    assert_eq!(query.rest[0].query_kind(), QueryKind::And);
    Ok(())
}

#[test]
fn test_chains_fold_left_parser() -> Result<()> {
    let query = parse("a:1 AND b:2 AND c:3 OR d:4 OR e:5")?;
    assert_eq!(query.head.rest.len(), 2);
    assert_eq!(query.rest.len(), 2);
    let fields: Vec<String> = query
        .head
        .operands()
        .map(|operand| operand.clause.to_string())
        .collect();
    assert_eq!(fields, ["a:1", "b:2", "c:3"]);
    Ok(())
}

#[test]
fn test_not_binds_one_clause_parser() -> Result<()> {
    let query = parse("NOT a:1 AND b:2")?;
    assert!(query.head.head.not);
    assert!(!query.head.rest[0].operand.not);
    assert_eq!(query.head.head.query_kind(), QueryKind::Not);
    Ok(())
}

#[test]
fn test_juxtaposition_only_before_not_parser() -> Result<()> {
    let query = parse("a:1 NOT b:2")?;
    assert_eq!(query.head.rest.len(), 1);
    assert!(!query.head.rest[0].explicit);
    assert!(query.head.rest[0].operand.not);
    assert_eq!(query.to_string(), "a:1 NOT b:2");

    assert!(matches!(
        parse("a:1 b:2"),
        Err(Error::UnexpectedToken {
            pos: 4,
            found: TokenKind::Ident,
            ..
        })
    ));
    assert!(parse("a:1NOT b:2").is_err());
    Ok(())
}

#[test]
fn test_query_kinds_parser() -> Result<()> {
    assert_eq!(parse("a:1")?.query_kind(), QueryKind::Field);
    assert_eq!(parse("(a:1)")?.query_kind(), QueryKind::Paren);
    assert_eq!(parse("a:1 || b:1")?.query_kind(), QueryKind::Or);
    assert_eq!(None::<&Lucene>.query_kind(), QueryKind::Unknown);
    Ok(())
}

#[test]
fn test_keyword_words_as_names_parser() -> Result<()> {
    let query = parse("NOT:1")?;
    assert!(!query.head.head.not);
    assert_eq!(query.to_string(), "NOT:1");

    assert_eq!(canonical("x:(NOT)"), "x:( NOT )");
    assert_eq!(canonical("x:( NOT )"), "x:( NOT )");
    assert_eq!(canonical("x:AND OR y:ORDER"), "x:AND OR y:ORDER");
    Ok(())
}

#[test]
fn test_term_kinds_parser() -> Result<()> {
    let query = parse(r#"a:b* AND c:"d e" AND f:/g/ AND h:>3 AND i:[1 TO 2] AND j:(k)"#)?;
    let terms: Vec<&Term> = query
        .head
        .operands()
        .map(|operand| match &operand.clause {
            Clause::Field(field) => &field.term,
            Clause::Paren(_) => panic!("unexpected paren"),
        })
        .collect();
    assert!(matches!(
        terms[0],
        Term::Fuzzy(fuzzy) if matches!(fuzzy.literal, Literal::Single(_))
    ));
    assert!(matches!(
        terms[1],
        Term::Fuzzy(fuzzy) if matches!(fuzzy.literal, Literal::Phrase(_))
    ));
    assert!(matches!(terms[2], Term::Regexp(_)));
    assert!(matches!(terms[3], Term::Range(range) if matches!(range.range, Range::Single(_))));
    assert!(matches!(terms[4], Term::Range(range) if matches!(range.range, Range::Double(_))));
    assert!(matches!(terms[5], Term::Group(_)));
    Ok(())
}

#[test]
fn test_range_infinity_parser() -> Result<()> {
    let query = parse("x:[* TO 5]")?;
    let Term::Range(range) = first_term(&query) else {
        panic!("expected a range");
    };
    let Range::Double(double) = &range.range else {
        panic!("expected a double-sided range");
    };
    assert!(double.left.is_infinity());
    assert!(matches!(double.right, RangeValue::Single(_)));
    Ok(())
}

#[test]
fn test_nested_term_groups_parser() -> Result<()> {
    assert_eq!(
        canonical("x:(a AND (b OR NOT \"c d\") OR [1 TO 2])"),
        "x:( a AND ( b OR NOT \"c d\" ) OR [1 TO 2] )"
    );
    Ok(())
}

#[test]
fn test_parse_term_entry_parser() -> Result<()> {
    assert!(matches!(parse_term(" [1 TO 2 } ")?, Term::Range(_)));
    assert!(matches!(parse_term("abc~2")?, Term::Fuzzy(_)));
    assert!(parse_term("abc def").is_err());
    Ok(())
}

#[test]
fn test_parser_throw_errors() {
    assert_eq!(
        parse("x:(\"dsa"),
        Err(Error::UnexpectedEnd {
            pos: 7,
            expected: vec![TokenKind::Quote],
        })
    );
    assert_eq!(
        parse("(x:1"),
        Err(Error::UnexpectedEnd {
            pos: 4,
            expected: vec![TokenKind::RParen],
        })
    );
    assert!(matches!(
        parse("x:1)"),
        Err(Error::UnexpectedToken {
            pos: 3,
            found: TokenKind::RParen,
            ..
        })
    ));
    assert!(matches!(parse("x:"), Err(Error::UnexpectedEnd { pos: 2, .. })));
    assert!(matches!(parse(":1"), Err(Error::UnexpectedToken { pos: 0, .. })));
    assert!(matches!(parse("x:1 AND"), Err(Error::UnexpectedToken { pos: 4, .. })));
    assert!(matches!(parse("x:1 AND "), Err(Error::UnexpectedToken { pos: 4, .. })));
    assert!(matches!(parse("x:a~2^3"), Err(Error::UnexpectedToken { pos: 5, .. })));
    assert!(matches!(parse("x:[1 TO]"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("x:[1 2]"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("x:1 | y:2"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse(""), Err(Error::UnexpectedEnd { pos: 0, .. })));
    assert!(matches!(parse("x:1 = 2"), Err(Error::Lexical { pos: 4, lit: '=' })));
}

#[test]
fn test_error_messages_parser() {
    let err = parse("x:(\"dsa").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of query at 7, expected '\"'");
    let err = parse("(x:1 y:2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected identifier 'y' at 5, expected ')'"
    );
}

#[test]
fn test_nesting_limit_parser() -> Result<()> {
    let config = ParserConfig::default().with_max_depth(1);
    assert!(Parser::new("(x:1)")?.with_config(config).parse().is_ok());
    assert_eq!(
        Parser::new("((x:1))")?.with_config(config).parse(),
        Err(Error::TooDeep { pos: 1, limit: 1 })
    );
    assert!(matches!(
        Parser::new("x:(a OR (b))")?.with_config(config).parse(),
        Err(Error::TooDeep { .. })
    ));

    let deep = format!("{}x:1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(parse(&deep), Err(Error::TooDeep { limit: 128, .. })));
    Ok(())
}
