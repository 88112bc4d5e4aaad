//! Error types that can occur while evaluating a token sequence.

use std::fmt::Display;

use getset::{CopyGetters, Getters};
use strum_macros::Display as StrumDisplay;

use crate::base::log::{Message, Severity, TokenDisplay};

/// An enumeration containing all kinds of errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] EmptyExpression),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Arithmetic(#[from] DivisionByZero),
}

impl Error {
    /// Gets the coarse kind of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Format(_) => ErrorKind::Format,
            Self::Arithmetic(_) => ErrorKind::Arithmetic,
        }
    }
}

/// The kinds of failure callers have to distinguish.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// The token sequence is empty.
    InvalidArgument,
    /// The token sequence does not form a valid expression.
    Format,
    /// The expression divides by zero.
    Arithmetic,
}

/// The token sequence to evaluate is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EmptyExpression;

impl Display for EmptyExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, "cannot evaluate an empty expression")
        )
    }
}

impl std::error::Error for EmptyExpression {}

/// The right operand of a division is zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DivisionByZero {
    /// The left operand of the division.
    pub dividend: f64,
}

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("attempted to divide `{}` by zero", self.dividend);
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for DivisionByZero {}

/// An enumeration containing all ways a token sequence can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum FormatError {
    #[error(transparent)]
    InvalidToken(#[from] InvalidToken),
    #[error(transparent)]
    MissingOperand(#[from] MissingOperand),
    #[error(transparent)]
    MissingOperator(#[from] MissingOperator),
    #[error(transparent)]
    UnbalancedParenthesis(#[from] UnbalancedParenthesis),
    #[error(transparent)]
    MalformedExpression(#[from] MalformedExpression),
}

impl From<InvalidToken> for Error {
    fn from(err: InvalidToken) -> Self {
        Self::Format(err.into())
    }
}

impl From<MissingOperand> for Error {
    fn from(err: MissingOperand) -> Self {
        Self::Format(err.into())
    }
}

impl From<MissingOperator> for Error {
    fn from(err: MissingOperator) -> Self {
        Self::Format(err.into())
    }
}

impl From<UnbalancedParenthesis> for Error {
    fn from(err: UnbalancedParenthesis) -> Self {
        Self::Format(err.into())
    }
}

impl From<MalformedExpression> for Error {
    fn from(err: MalformedExpression) -> Self {
        Self::Format(err.into())
    }
}

/// A token is neither a number, an operator nor a parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct InvalidToken {
    /// The text of the token.
    #[get = "pub"]
    token: String,
    /// Zero-based index of the token.
    #[get_copy = "pub"]
    position: usize,
}

impl InvalidToken {
    pub(super) fn new(token: &str, position: usize) -> Self {
        Self {
            token: token.to_string(),
            position,
        }
    }
}

impl Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("`{}` is not a number, operator or parenthesis", self.token);
        write!(f, "{}", Message::new(Severity::Error, message))?;
        write!(
            f,
            "\n{}",
            TokenDisplay::new(&self.token, self.position, Option::<u8>::None)
        )
    }
}

impl std::error::Error for InvalidToken {}

/// An operand is expected but an operator, a closing parenthesis or the end of the expression was
/// found.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct MissingOperand {
    /// The token found in place of the operand, [`None`] at the end of the expression.
    #[get = "pub"]
    found: Option<String>,
    /// Zero-based index of the found token.
    #[get_copy = "pub"]
    position: usize,
}

impl MissingOperand {
    pub(super) fn new(found: Option<&str>, position: usize) -> Self {
        Self {
            found: found.map(ToString::to_string),
            position,
        }
    }
}

impl Display for MissingOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let found_binding = self
            .found
            .as_ref()
            .map_or_else(|| "the end of the expression".to_string(), |t| format!("`{t}`"));
        let message = format!("expected an operand, but found {found_binding}");

        write!(f, "{}", Message::new(Severity::Error, message))?;

        self.found.as_ref().map_or(Ok(()), |token| {
            write!(
                f,
                "\n{}",
                TokenDisplay::new(
                    token,
                    self.position,
                    Some("every operator needs an operand on both sides")
                )
            )
        })
    }
}

impl std::error::Error for MissingOperand {}

/// An operand or an opening parenthesis directly follows another operand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct MissingOperator {
    /// The token that follows the operand.
    #[get = "pub"]
    token: String,
    /// Zero-based index of the token.
    #[get_copy = "pub"]
    position: usize,
}

impl MissingOperator {
    pub(super) fn new(token: &str, position: usize) -> Self {
        Self {
            token: token.to_string(),
            position,
        }
    }
}

impl Display for MissingOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("expected an operator, but found `{}`", self.token);
        write!(f, "{}", Message::new(Severity::Error, message))?;
        write!(
            f,
            "\n{}",
            TokenDisplay::new(&self.token, self.position, Option::<u8>::None)
        )
    }
}

impl std::error::Error for MissingOperator {}

/// A parenthesis has no matching counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters)]
pub struct UnbalancedParenthesis {
    /// The unmatched parenthesis, either `(` or `)`.
    #[get_copy = "pub"]
    parenthesis: char,
    /// Zero-based index of the unmatched parenthesis.
    #[get_copy = "pub"]
    position: usize,
}

impl UnbalancedParenthesis {
    pub(super) fn new(parenthesis: char, position: usize) -> Self {
        Self {
            parenthesis,
            position,
        }
    }
}

impl Display for UnbalancedParenthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (message, help) = if self.parenthesis == '(' {
            ("found an unclosed `(`", "this parenthesis is never closed")
        } else {
            ("found an unmatched `)`", "this parenthesis was never opened")
        };
        write!(f, "{}", Message::new(Severity::Error, message))?;

        let mut buf = [0; 4];
        write!(
            f,
            "\n{}",
            TokenDisplay::new(
                self.parenthesis.encode_utf8(&mut buf),
                self.position,
                Some(help)
            )
        )
    }
}

impl std::error::Error for UnbalancedParenthesis {}

/// The expression did not reduce to exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters)]
pub struct MalformedExpression {
    /// Number of values left after evaluation.
    #[get_copy = "pub"]
    operands: usize,
}

impl MalformedExpression {
    pub(super) fn new(operands: usize) -> Self {
        Self { operands }
    }
}

impl Display for MalformedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "expression reduced to {} values instead of exactly one",
            self.operands
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for MalformedExpression {}
