//! Canonical rendering is a fixpoint: re-parsing it yields the same tree.

use lucene_ql::parse;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("keywords are not plain words", |w| {
        !matches!(w.as_str(), "and" | "or" | "not" | "to")
    })
}

fn range_value() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => word(),
        1 => "[0-9]{1,3}",
        1 => Just("*".to_string()),
        1 => word().prop_map(|w| format!("\"{w}\"")),
    ]
}

fn group_elem() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        word().prop_map(|w| format!("\"{w} x\"")),
        range_value().prop_map(|v| format!(">={v}")),
        (range_value(), range_value()).prop_map(|(l, r)| format!("{{{l} TO {r}]")),
    ]
}

fn term() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        word().prop_map(|w| format!("{w}*")),
        (word(), word()).prop_map(|(a, b)| format!("\"{a}  {b}\"")),
        (word(), prop::option::of(0u8..5)).prop_map(|(w, d)| match d {
            Some(d) => format!("{w}~{d}"),
            None => format!("{w}~"),
        }),
        (word(), 0u8..20).prop_map(|(w, b)| format!("{w}^{b}")),
        (range_value(), range_value(), any::<bool>())
            .prop_map(|(l, r, inc)| if inc {
                format!("[{l} TO {r}]")
            } else {
                format!("{{{l}   TO {r}}}^2")
            }),
        (prop::sample::select(vec!["<", "<=", ">", ">="]), range_value())
            .prop_map(|(op, v)| format!("{op}{v}")),
        word().prop_map(|w| format!("/{w}.*/")),
        (group_elem(), group_elem(), prop::sample::select(vec![" OR ", " AND ", " && "]))
            .prop_map(|(a, b, op)| format!("({a}{op}{b})^3")),
    ]
}

fn query() -> impl Strategy<Value = String> {
    let clause = (word(), term()).prop_map(|(field, term)| format!("{field}:{term}"));
    clause.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec![
                    " AND ", " OR ", " && ", " || ", " AND NOT ", " OR NOT ", " NOT ",
                ]),
                inner.clone(),
            )
                .prop_map(|(left, op, right)| if op.ends_with("NOT ") {
                    format!("{left}{op}({right})")
                } else {
                    format!("{left}{op}{right}")
                }),
            inner.clone().prop_map(|q| format!("( {q} )")),
            inner.prop_map(|q| format!("NOT ({q})")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_canonical_fixpoint(input in query()) {
        let tree = parse(&input).map_err(|err| TestCaseError::fail(format!("{input:?}: {err}")))?;
        let canonical = tree.to_string();
        let reparsed = parse(&canonical)
            .map_err(|err| TestCaseError::fail(format!("{canonical:?}: {err}")))?;
        prop_assert_eq!(&reparsed, &tree);
        prop_assert_eq!(reparsed.to_string(), canonical);
    }
}
