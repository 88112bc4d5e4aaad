//! The evaluate module computes the numeric value of a token sequence.

mod calculator;
pub use calculator::{calculate, EvaluateResult};

pub mod error;
#[doc(inline)]
pub use error::{DivisionByZero, EmptyExpression, Error, ErrorKind, FormatError};
