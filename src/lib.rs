//! Arithmetic expression calculator.
//!
//! An expression is first split into tokens by [`tokenize`] and the tokens are then reduced to a
//! number by [`calculate`]. Both steps are pure functions without shared state.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod evaluate;
pub mod lexical;
pub mod util;

pub use evaluate::calculate;

use base::{Error, Handler, Result};
use lexical::token_stream::TokenStream;

/// Converts the given expression to the text of its tokens.
///
/// Numeric literals use `,` as decimal separator and carry their sign if the `-` stands in prefix
/// position, e.g. `"2 * -1.5"` becomes `["2", "*", "-1,5"]`.
#[must_use]
pub fn tokenize(expression: &str) -> Vec<String> {
    TokenStream::tokenize(expression).into_strings()
}

/// Tokenizes and evaluates the given expression.
///
/// A failure is passed to `handler` before it is returned.
///
/// # Errors
/// - If the expression does not evaluate to a number, see [`calculate`].
pub fn evaluate(handler: &impl Handler<Error>, expression: &str) -> Result<f64> {
    let tokens = TokenStream::tokenize(expression);

    calculate(tokens.as_slice()).map_err(|err| {
        let err = Error::from(err);
        handler.receive(err.clone());
        err
    })
}
