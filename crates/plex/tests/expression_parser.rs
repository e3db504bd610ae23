//! Integration tests for expression and pattern parsing.

use plex::parser::{Expression, ParseError, Segment, parse_expression, parse_pattern};

fn expr(cast: Option<&str>, name: &str, arguments: &[&str]) -> Expression {
    Expression {
        cast: cast.map(str::to_string),
        name: name.to_string(),
        arguments: arguments.iter().map(|a| a.to_string()).collect(),
    }
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_bare_name() {
    assert_eq!(parse_expression("health"), Some(expr(None, "health", &[])));
}

#[test]
fn test_cast_prefix() {
    assert_eq!(
        parse_expression("(string)health"),
        Some(expr(Some("string"), "health", &[]))
    );
}

#[test]
fn test_single_argument() {
    assert_eq!(parse_expression("round:2"), Some(expr(None, "round", &["2"])));
}

#[test]
fn test_arguments_are_trimmed() {
    assert_eq!(
        parse_expression("percent: health , max_health"),
        Some(expr(None, "percent", &["health", "max_health"]))
    );
}

#[test]
fn test_empty_argument_clause() {
    assert_eq!(parse_expression("round:"), Some(expr(None, "round", &[])));
}

#[test]
fn test_cast_with_arguments() {
    assert_eq!(
        parse_expression("(string)round:1,x"),
        Some(expr(Some("string"), "round", &["1", "x"]))
    );
}

#[test]
fn test_names_may_contain_dots_and_parentheses() {
    assert_eq!(
        parse_expression("max(a.b)"),
        Some(expr(None, "max(a.b)", &[]))
    );
}

#[test]
fn test_cast_without_name_is_a_name() {
    assert_eq!(
        parse_expression("(string)"),
        Some(expr(None, "(string)", &[]))
    );
}

#[test]
fn test_numbers_and_booleans_match_as_names() {
    assert_eq!(parse_expression("3.5"), Some(expr(None, "3.5", &[])));
    assert_eq!(parse_expression("true"), Some(expr(None, "true", &[])));
}

#[test]
fn test_quoted_argument() {
    assert_eq!(
        parse_expression("prefix:'hp',-1"),
        Some(expr(None, "prefix", &["'hp'", "-1"]))
    );
}

#[test]
fn test_non_matching_input() {
    assert_eq!(parse_expression(""), None);
    assert_eq!(parse_expression("'hello'"), None);
    assert_eq!(parse_expression("hello world"), None);
    assert_eq!(parse_expression("round:2:3"), None);
    assert_eq!(parse_expression("(a b)x"), None);
    assert_eq!(parse_expression("-1"), None);
}

// =============================================================================
// Patterns
// =============================================================================

#[test]
fn test_pattern_literal_only() {
    let pattern = parse_pattern("Zombie").unwrap();
    assert_eq!(pattern.segments, vec![Segment::Literal("Zombie".into())]);
}

#[test]
fn test_pattern_empty() {
    let pattern = parse_pattern("").unwrap();
    assert!(pattern.segments.is_empty());
}

#[test]
fn test_pattern_placeholders() {
    let pattern = parse_pattern("HP: [health]/[ max_health ]").unwrap();
    assert_eq!(
        pattern.segments,
        vec![
            Segment::Literal("HP: ".into()),
            Segment::Placeholder("health".into()),
            Segment::Literal("/".into()),
            Segment::Placeholder("max_health".into()),
        ]
    );
}

#[test]
fn test_pattern_escapes_merge_into_literals() {
    let pattern = parse_pattern("[[x]] = [x]").unwrap();
    assert_eq!(
        pattern.segments,
        vec![
            Segment::Literal("[x] = ".into()),
            Segment::Placeholder("x".into()),
        ]
    );
}

#[test]
fn test_pattern_unclosed() {
    assert_eq!(
        parse_pattern("a [health").unwrap_err(),
        ParseError::Unclosed { offset: 2 }
    );
    assert_eq!(
        parse_pattern("[a[b]]").unwrap_err(),
        ParseError::Unclosed { offset: 0 }
    );
}

#[test]
fn test_pattern_empty_placeholder() {
    let err = parse_pattern("hp []").unwrap_err();
    assert_eq!(err, ParseError::Empty { offset: 3 });
    assert_eq!(err.offset(), 3);
}

#[test]
fn test_pattern_blank_placeholder() {
    assert_eq!(
        parse_pattern("a [  ] b").unwrap_err(),
        ParseError::Empty { offset: 2 }
    );
    assert_eq!(
        parse_pattern("[\t]").unwrap_err(),
        ParseError::Empty { offset: 0 }
    );
}

#[test]
fn test_pattern_unmatched_close() {
    assert_eq!(
        parse_pattern("[a]]").unwrap_err(),
        ParseError::UnmatchedClose { offset: 3 }
    );
}
