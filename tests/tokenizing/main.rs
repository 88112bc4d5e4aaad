use infixcalc::lexical::{
    token::{Operator, TokenKind},
    token_stream::TokenStream,
};

#[test]
fn tokenize_decimal_numbers() {
    assert_eq!(infixcalc::tokenize("5.5 + 2.3"), ["5,5", "+", "2,3"]);
}

#[test]
fn tokenize_complex_expression() {
    let tokens = infixcalc::tokenize("3.5 + (-2) * (4 - 1) / -0.5");

    assert_eq!(
        tokens,
        ["3,5", "+", "(", "-2", ")", "*", "(", "4", "-", "1", ")", "/", "-0,5"]
    );
}

#[test]
fn tokenize_classifies_tokens() {
    let stream = TokenStream::tokenize("-1 ^ (2 - x)");
    let kinds = stream.iter().map(|token| token.kind()).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        [
            TokenKind::Number,
            TokenKind::Operator(Operator::Power),
            TokenKind::OpenParenthesis,
            TokenKind::Number,
            TokenKind::Operator(Operator::Subtract),
            TokenKind::Unknown,
            TokenKind::CloseParenthesis,
        ]
    );
}

#[test]
fn tokenize_output_feeds_calculate() {
    let stream = TokenStream::tokenize("2 ^ 3 ^ 2 - 12 / 4");

    assert_eq!(infixcalc::calculate(stream.as_slice()), Ok(509.0));
    assert_eq!(infixcalc::calculate(&stream.into_strings()), Ok(509.0));
}

#[test]
fn tokenize_never_fails() {
    assert_eq!(infixcalc::tokenize("1 + + 2"), ["1", "+", "+", "2"]);
    assert_eq!(infixcalc::tokenize(")("), [")", "("]);
    assert_eq!(infixcalc::tokenize("two + 2"), ["two", "+", "2"]);
    assert!(infixcalc::tokenize("").is_empty());
}

#[test]
fn tokenize_sign_ignores_whitespace() {
    assert_eq!(infixcalc::tokenize("- 2 + 3"), ["-2", "+", "3"]);
    assert_eq!(infixcalc::tokenize("2 * - 3"), ["2", "*", "-3"]);
    assert_eq!(infixcalc::tokenize("(- 2)"), ["(", "-2", ")"]);
    assert_eq!(infixcalc::tokenize("- (2)"), ["-", "(", "2", ")"]);
}
