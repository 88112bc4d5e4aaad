//! Contains the [`TokenStream`] struct and the tokenizer that produces it.

use std::{
    fmt::{Debug, Display},
    iter::Peekable,
    str::CharIndices,
};

use derive_more::{Deref, From};
use itertools::Itertools as _;

use crate::util;

use super::token::{Operator, Token, TokenKind};

/// Is an ordered list of [`Token`]s.
///
/// This struct is the output of the tokenizer and is meant to be consumed by
/// [`calculate`](crate::evaluate::calculate). The order of the tokens is the left-to-right reading
/// of the source text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deref, From)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

impl<T: Into<Token>> FromIterator<T> for TokenStream {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<[Token]> for TokenStream {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenStream {
    /// Tokenizes the given expression.
    ///
    /// The expression is scanned left to right. Whitespace is skipped, digits and `.` are
    /// collected into numeric literals (with `.` emitted as `,`), and a `-` in prefix position is
    /// folded into the literal that follows it. Tokenizing never fails; characters the calculator
    /// does not know are passed through as tokens for the evaluator to reject.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(length = expression.len()))]
    pub fn tokenize(expression: &str) -> Self {
        let mut tokens = Vec::new();
        let mut iter = expression.char_indices().peekable();

        while let Some((start, character)) = iter.next() {
            // Found white spaces
            if character.is_whitespace() {
                continue;
            }
            // Found numeric literal
            else if Self::is_numeric_character(character) {
                tokens.push(Self::handle_numeric_literal(expression, &mut iter, start));
            }
            // Found a sign in prefix position
            else if character == '-' && Self::is_prefix_position(tokens.last()) {
                tokens.push(Self::handle_sign(expression, &mut iter));
            }
            // Found an operator
            else if let Some(operator) = Operator::from_char(character) {
                tokens.push(operator.into());
            }
            // Found a parenthesis
            else if character == '(' || character == ')' {
                tokens.push(Token::from(character.to_string()));
            }
            // Found something the calculator does not know
            else {
                tokens.push(Self::handle_unknown(expression, &mut iter, start));
            }
        }

        tracing::debug!(count = tokens.len(), "Tokenized expression");

        Self { tokens }
    }

    /// Checks if the given character can be part of a numeric literal.
    fn is_numeric_character(character: char) -> bool {
        character.is_ascii_digit() || character == '.'
    }

    /// Checks if the given character starts a token on its own.
    fn is_delimiting_character(character: char) -> bool {
        character.is_whitespace()
            || Self::is_numeric_character(character)
            || Operator::from_char(character).is_some()
            || character == '('
            || character == ')'
    }

    /// Whether a `-` following `prev_token` is a sign rather than a subtraction.
    fn is_prefix_position(prev_token: Option<&Token>) -> bool {
        prev_token.map_or(true, |token| {
            matches!(
                token.kind(),
                TokenKind::OpenParenthesis | TokenKind::Operator(_)
            )
        })
    }

    /// Increments the iterator while the predicate returns true and returns the end byte index.
    fn walk_iter(
        expression: &str,
        iter: &mut Peekable<CharIndices>,
        predicate: impl Fn(char) -> bool,
    ) -> usize {
        while let Some(&(index, character)) = iter.peek() {
            if !predicate(character) {
                return index;
            }

            iter.next();
        }

        expression.len()
    }

    /// Handles a `-` in prefix position.
    ///
    /// The sign is folded into the literal that follows it, even across whitespace. Without a
    /// following literal the `-` stays a standalone operator.
    fn handle_sign(expression: &str, iter: &mut Peekable<CharIndices>) -> Token {
        Self::walk_iter(expression, iter, char::is_whitespace);

        match iter.next_if(|&(_, next)| Self::is_numeric_character(next)) {
            Some((start, _)) => {
                let literal = Self::handle_numeric_literal(expression, iter, start);
                Token::from(format!("-{literal}"))
            }
            None => Operator::Subtract.into(),
        }
    }

    /// Handles a sequence of digits and decimal points.
    fn handle_numeric_literal(
        expression: &str,
        iter: &mut Peekable<CharIndices>,
        start: usize,
    ) -> Token {
        let end = Self::walk_iter(expression, iter, Self::is_numeric_character);

        util::to_comma_decimal(&expression[start..end])
            .into_owned()
            .into()
    }

    /// Handles a sequence of characters that make up no known token.
    fn handle_unknown(expression: &str, iter: &mut Peekable<CharIndices>, start: usize) -> Token {
        let end = Self::walk_iter(expression, iter, |character| {
            !Self::is_delimiting_character(character)
        });

        expression[start..end].into()
    }

    /// Dissolves this struct into the plain text of its tokens.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.tokens.into_iter().map(Token::into_string).collect()
    }
}
