//! Two-stack evaluation of a token sequence.

use crate::{
    lexical::token::{Operator, TokenKind},
    util,
};

use super::error::{
    EmptyExpression, Error, InvalidToken, MalformedExpression, MissingOperand, MissingOperator,
    UnbalancedParenthesis,
};

/// Result type for evaluation operations.
pub type EvaluateResult<T> = Result<T, Error>;

/// Evaluates the given token sequence to a number.
///
/// Numeric tokens may use `,` or `.` as decimal separator. `^` binds tighter than `*` and `/`,
/// which bind tighter than `+` and `-`. All operators group from the left except `^`, so
/// `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `tokens` is empty.
/// - [`Error::Format`] if a token is not recognized, an operand or operator is missing, the
///   parentheses are unbalanced or the expression does not reduce to a single value.
/// - [`Error::Arithmetic`] if the right operand of a division is zero.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn calculate<S: AsRef<str>>(tokens: &[S]) -> EvaluateResult<f64> {
    if tokens.is_empty() {
        tracing::debug!("Refusing to evaluate an empty expression");
        return Err(EmptyExpression.into());
    }

    let mut evaluation = Evaluation::new();

    for (position, token) in tokens.iter().enumerate() {
        evaluation
            .feed(token.as_ref(), position)
            .inspect_err(|err| tracing::debug!(%err, position, "Evaluation failed"))?;
    }

    let value = evaluation
        .finish(tokens.len())
        .inspect_err(|err| tracing::debug!(%err, "Evaluation failed"))?;

    tracing::debug!(value, "Evaluated expression");

    Ok(value)
}

/// Entry of the operator stack, remembering the position of the token it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator, usize),
    OpenParenthesis(usize),
}

/// State of a single evaluation run.
#[derive(Debug)]
struct Evaluation {
    operands: Vec<f64>,
    operators: Vec<Pending>,
    /// Whether the next token has to start an operand (a number or `(`).
    expects_operand: bool,
}

impl Evaluation {
    fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            expects_operand: true,
        }
    }

    /// Processes the token at `position`.
    fn feed(&mut self, token: &str, position: usize) -> EvaluateResult<()> {
        match TokenKind::of(token) {
            TokenKind::Number => {
                if !self.expects_operand {
                    return Err(MissingOperator::new(token, position).into());
                }

                let value = util::parse_numeric_literal(token)
                    .ok_or_else(|| InvalidToken::new(token, position))?;
                self.operands.push(value);
                self.expects_operand = false;
            }
            TokenKind::Operator(operator) => {
                if self.expects_operand {
                    return Err(MissingOperand::new(Some(token), position).into());
                }

                while let Some(Pending::Operator(top, top_position)) =
                    self.operators.last().copied()
                {
                    if !top.applies_before(operator) {
                        break;
                    }

                    self.operators.pop();
                    self.apply(top, top_position)?;
                }

                self.operators.push(Pending::Operator(operator, position));
                self.expects_operand = true;
            }
            TokenKind::OpenParenthesis => {
                if !self.expects_operand {
                    return Err(MissingOperator::new(token, position).into());
                }

                self.operators.push(Pending::OpenParenthesis(position));
            }
            TokenKind::CloseParenthesis => {
                if self.expects_operand {
                    return Err(MissingOperand::new(Some(token), position).into());
                }

                loop {
                    match self.operators.pop() {
                        Some(Pending::Operator(operator, operator_position)) => {
                            self.apply(operator, operator_position)?;
                        }
                        Some(Pending::OpenParenthesis(_)) => break,
                        None => return Err(UnbalancedParenthesis::new(')', position).into()),
                    }
                }
            }
            TokenKind::Unknown => return Err(InvalidToken::new(token, position).into()),
        }

        Ok(())
    }

    /// Applies the remaining operators and returns the single value left.
    fn finish(mut self, length: usize) -> EvaluateResult<f64> {
        if self.expects_operand {
            return Err(MissingOperand::new(None, length).into());
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(operator, position) => self.apply(operator, position)?,
                Pending::OpenParenthesis(position) => {
                    return Err(UnbalancedParenthesis::new('(', position).into())
                }
            }
        }

        // Operand/operator alternation leaves exactly one value for well-formed input.
        match self.operands.as_slice() {
            [value] => Ok(*value),
            operands => Err(MalformedExpression::new(operands.len()).into()),
        }
    }

    /// Pops two operands, applies `operator` to them and pushes the result.
    ///
    /// Alternation guarantees two operands below every stacked operator.
    fn apply(&mut self, operator: Operator, position: usize) -> EvaluateResult<()> {
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(MissingOperand::new(Some(operator.as_str()), position).into());
        };

        let result = operator.apply(lhs, rhs)?;
        tracing::trace!(lhs, %operator, rhs, result, "Applied operator");

        self.operands.push(result);

        Ok(())
    }
}
