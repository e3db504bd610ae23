//! Error message formatting and typo suggestions.

use insta::assert_snapshot;
use plex::parser::ParseError;
use plex::{
    ConditionError, EvalError, InstallError, PatternError, RegistrationError, ResolveError,
    ValueKind, compute_suggestions,
};

// =============================================================================
// Messages
// =============================================================================

#[test]
fn unknown_cast_type_message() {
    let err = ResolveError::UnknownCastType {
        name: "nmber".into(),
        suggestions: vec!["number".into()],
    };
    assert_snapshot!(err.to_string(), @"unknown cast type 'nmber', did you mean 'number'?");
}

#[test]
fn unknown_cast_type_without_suggestions() {
    let err = ResolveError::UnknownCastType {
        name: "xyz".into(),
        suggestions: vec![],
    };
    assert_snapshot!(err.to_string(), @"unknown cast type 'xyz'");
}

#[test]
fn unknown_cast_type_with_several_suggestions() {
    let err = ResolveError::UnknownCastType {
        name: "tex".into(),
        suggestions: vec!["text".into(), "hex".into()],
    };
    assert_snapshot!(err.to_string(), @"unknown cast type 'tex', did you mean 'text' or 'hex'?");
}

#[test]
fn resolve_error_messages() {
    let insufficient = ResolveError::InsufficientArguments {
        name: "round".into(),
        found: 0,
        required: 1,
    };
    assert_snapshot!(
        insufficient.to_string(),
        @"placeholder 'round' requires at least 1 arguments, found 0"
    );

    let literal = ResolveError::UnparsableLiteral {
        text: "hello world".into(),
    };
    assert_snapshot!(literal.to_string(), @"unable to parse literal 'hello world'");

    let argument = ResolveError::InvalidArgument {
        name: "round".into(),
        argument: "two".into(),
        reason: "expected an integer".into(),
    };
    assert_snapshot!(
        argument.to_string(),
        @"invalid argument 'two' for placeholder 'round': expected an integer"
    );

    let mismatch = ResolveError::KindMismatch {
        name: "bad".into(),
        expected: ValueKind::Number,
        found: ValueKind::Text,
    };
    assert_snapshot!(mismatch.to_string(), @"placeholder 'bad' is a text, expected a number");
}

#[test]
fn registration_error_messages() {
    let cast = RegistrationError::DuplicateCastName {
        cast_name: "number".into(),
    };
    assert_snapshot!(cast.to_string(), @"a type with cast name 'number' is already registered");

    let kind = RegistrationError::DuplicateKind {
        kind: ValueKind::Boolean,
    };
    assert_snapshot!(kind.to_string(), @"a type of kind boolean is already registered");

    let unknown = RegistrationError::UnknownKind {
        kind: ValueKind::Number,
        name: "health".into(),
    };
    assert_snapshot!(
        unknown.to_string(),
        @"cannot add placeholder 'health': no type of kind number is registered"
    );

    let format = RegistrationError::InvalidNumberFormat {
        reason: "grouping and decimal separators are both '.'".into(),
    };
    assert_snapshot!(
        format.to_string(),
        @"invalid number format: grouping and decimal separators are both '.'"
    );
}

#[test]
fn eval_error_messages() {
    let cast = EvalError::CastFailed {
        text: "Zombie".into(),
        target: ValueKind::Number,
    };
    assert_snapshot!(cast.to_string(), @"cannot cast 'Zombie' to number");

    let unavailable = EvalError::Unavailable {
        name: "health".into(),
    };
    assert_snapshot!(unavailable.to_string(), @"value for 'health' is unavailable");
}

#[test]
fn pattern_error_messages() {
    let parse = PatternError::from(ParseError::Unclosed { offset: 4 });
    assert_snapshot!(parse.to_string(), @"unclosed '[' at offset 4");

    let resolve = PatternError::Resolve {
        expression: "missing".into(),
        source: ResolveError::UnparsableLiteral {
            text: "missing".into(),
        },
    };
    assert_snapshot!(
        resolve.to_string(),
        @"in placeholder '[missing]': unable to parse literal 'missing'"
    );

    assert_snapshot!(
        ParseError::Empty { offset: 0 }.to_string(),
        @"empty placeholder at offset 0"
    );
    assert_snapshot!(
        ParseError::UnmatchedClose { offset: 2 }.to_string(),
        @"unmatched ']' at offset 2"
    );
}

#[test]
fn condition_error_messages() {
    let gate = ConditionError::UnsupportedGate { gate: "xor".into() };
    assert_snapshot!(gate.to_string(), @"unsupported gate: 'xor'");

    let operation = ConditionError::UnsupportedOperation {
        operation: "~".into(),
    };
    assert_snapshot!(operation.to_string(), @"unsupported operation: '~'");

    let mismatch = ConditionError::KindMismatch {
        first: "health".into(),
        first_kind: ValueKind::Number,
        second: "name".into(),
        second_kind: ValueKind::Text,
    };
    assert_snapshot!(
        mismatch.to_string(),
        @"cannot compare 'health' (number) with 'name' (text)"
    );
}

#[test]
fn install_error_messages() {
    assert_snapshot!(
        InstallError::AlreadyInstalled.to_string(),
        @"a placeholder engine is already installed"
    );
    assert_snapshot!(
        InstallError::NotInstalled.to_string(),
        @"no placeholder engine has been installed"
    );
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn suggestions_within_distance() {
    let available = ["number", "string", "boolean"];
    assert_eq!(compute_suggestions("nmber", available), vec!["number"]);
    assert_eq!(compute_suggestions("strin", available), vec!["string"]);
    assert_eq!(compute_suggestions("bool", available), Vec::<String>::new());
}

#[test]
fn exact_match_is_not_a_suggestion() {
    assert!(compute_suggestions("number", ["number"]).is_empty());
}

#[test]
fn short_names_allow_one_edit() {
    let available = ["int", "bit", "hex"];
    assert_eq!(compute_suggestions("it", available), vec!["int", "bit"]);
    assert!(compute_suggestions("ab", available).is_empty());
}

#[test]
fn suggestions_sorted_and_limited() {
    let available = ["abcdx", "abcde", "abxyz", "abcdy", "abcdz"];
    let suggestions = compute_suggestions("abcde", available);
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions, vec!["abcdx", "abcdy", "abcdz"]);
}
