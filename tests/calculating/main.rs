use infixcalc::{
    base::{PrintHandler, SilentHandler, VoidHandler},
    calculate,
    evaluate::ErrorKind,
};

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn kind_of(tokens: &[&str]) -> ErrorKind {
    calculate(tokens)
        .expect_err("Expecting evaluation failure")
        .kind()
}

#[test]
fn calculate_addition_of_two_numbers() {
    assert_eq!(calculate(&["1", "+", "2"]), Ok(3.0));
}

#[test]
fn calculate_subtraction_of_two_numbers() {
    assert_eq!(calculate(&["5", "-", "3"]), Ok(2.0));
}

#[test]
fn calculate_multiplication_of_two_numbers() {
    assert_eq!(calculate(&["4", "*", "3"]), Ok(12.0));
}

#[test]
fn calculate_division_of_two_numbers() {
    assert_eq!(calculate(&["8", "/", "2"]), Ok(4.0));
}

#[test]
fn calculate_combined_operations() {
    assert_eq!(
        calculate(&["1", "+", "2", "*", "3", "-", "4", "/", "2"]),
        Ok(5.0)
    );
}

#[test]
fn calculate_expression_with_parentheses() {
    assert_eq!(
        calculate(&["(", "1", "+", "2", ")", "*", "(", "3", "-", "1", ")"]),
        Ok(6.0)
    );
}

#[test]
fn calculate_expression_with_decimals() {
    let result = calculate(&["5,5", "+", "2,3"]).expect("Failed to calculate");
    assert_approx(result, 7.8);
}

#[test]
fn calculate_division_by_zero() {
    assert_eq!(kind_of(&["4", "/", "0"]), ErrorKind::Arithmetic);
}

#[test]
fn calculate_empty_expression() {
    let empty: Vec<String> = Vec::new();
    let err = calculate(&empty).expect_err("Expecting empty expression failure");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn calculate_invalid_expression() {
    assert_eq!(kind_of(&["1", "+", "+", "2"]), ErrorKind::Format);
}

#[test]
fn calculate_power() {
    assert_eq!(calculate(&["2", "^", "3"]), Ok(8.0));
    assert_eq!(calculate(&["5", "^", "0"]), Ok(1.0));
    assert_approx(calculate(&["2", "^", "-2"]).expect("Failed to calculate"), 0.25);
    assert_eq!(calculate(&["-2", "^", "3"]), Ok(-8.0));
    assert_eq!(calculate(&["0", "^", "5"]), Ok(0.0));
    assert_approx(calculate(&["4", "^", "0,5"]).expect("Failed to calculate"), 2.0);
}

#[test]
fn calculate_is_idempotent() {
    let tokens = ["(", "1", "+", "2", ")", "^", "2", "/", "4"];

    let first = calculate(&tokens);
    let second = calculate(&tokens);

    assert_eq!(first, Ok(2.25));
    assert_eq!(first, second);
}

#[test]
fn calculate_rejects_malformed_input() {
    assert_eq!(kind_of(&["(", "1", "+", "2"]), ErrorKind::Format);
    assert_eq!(kind_of(&["1", "+", "2", ")"]), ErrorKind::Format);
    assert_eq!(kind_of(&["1", "2"]), ErrorKind::Format);
    assert_eq!(kind_of(&["1", "%", "2"]), ErrorKind::Format);
    assert_eq!(kind_of(&["-"]), ErrorKind::Format);
    assert_eq!(kind_of(&["1", "-"]), ErrorKind::Format);
}

#[test]
fn evaluate_with_handlers() {
    let silent = SilentHandler::new();
    assert_eq!(infixcalc::evaluate(&silent, "(1 + 2) * 3"), Ok(9.0));
    assert!(silent.take().is_empty());

    let err = infixcalc::evaluate(&silent, "1 / 0").expect_err("Expecting division by zero");
    assert_eq!(silent.take(), vec![err]);

    assert!(infixcalc::evaluate(&VoidHandler, "1 +").is_err());

    let printer = PrintHandler::new();
    assert!(infixcalc::evaluate(&printer, "2 (3)").is_err());
    assert!(infixcalc::base::Handler::<infixcalc::base::Error>::has_received(&printer));
}

#[test]
fn evaluate_sign_separated_by_whitespace() {
    assert_eq!(infixcalc::evaluate(&VoidHandler, "- 2 + 3"), Ok(1.0));
    assert_eq!(infixcalc::evaluate(&VoidHandler, "2 * - 3"), Ok(-6.0));
    assert_eq!(infixcalc::evaluate(&VoidHandler, "(- 2) ^ 2"), Ok(4.0));
    assert_eq!(
        infixcalc::evaluate(&VoidHandler, "2 * - 3"),
        infixcalc::evaluate(&VoidHandler, "2*-3")
    );
}
