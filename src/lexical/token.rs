//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use derive_more::{Deref, From};
use enum_as_inner::EnumAsInner;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{evaluate::DivisionByZero, util};

/// Is an enumeration representing the binary operators of an expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// The direction in which operators of equal precedence group when chained.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into an [`Operator`] in [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of operator.")]
pub struct OperatorParseError;

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_OPERATOR_MAP: OnceLock<HashMap<&'static str, Operator>> = OnceLock::new();
        let map = STRING_OPERATOR_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for operator in Self::iter() {
                map.insert(operator.as_str(), operator);
            }

            map
        });

        map.get(s).copied().ok_or(OperatorParseError)
    }
}

impl Operator {
    /// Gets the string representation of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Gets the operator represented by a single character.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        match character {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Binding strength of the operator; higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// Grouping direction of the operator.
    #[must_use]
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Power => Associativity::Right,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => Associativity::Left,
        }
    }

    /// Whether an already stacked `self` has to be applied before `incoming` is pushed.
    #[must_use]
    pub fn applies_before(self, incoming: Self) -> bool {
        match self.precedence().cmp(&incoming.precedence()) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => incoming.associativity() == Associativity::Left,
            std::cmp::Ordering::Less => false,
        }
    }

    /// Computes `lhs <operator> rhs`.
    ///
    /// # Errors
    /// - [`DivisionByZero`] if the operator is [`Operator::Divide`] and `rhs` is zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DivisionByZero> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(DivisionByZero { dividend: lhs }),
            Self::Divide => Ok(lhs / rhs),
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

/// Is an enumeration of the lexical classes a [`Token`] can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    Number,
    Operator(Operator),
    OpenParenthesis,
    CloseParenthesis,
    Unknown,
}

/// Represents a single lexical unit of an expression.
///
/// The token is stored as the exact text the tokenizer emitted, so a numeric literal keeps its
/// `,` decimal separator and its folded sign.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From)]
pub struct Token {
    #[deref(forward)]
    text: String,
}

impl Token {
    /// Classifies the token by its text.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(&self.text)
    }

    /// Gets the text of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Dissolves the token into its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        operator.as_str().into()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl TokenKind {
    /// Classifies a token text.
    #[must_use]
    pub fn of(text: &str) -> Self {
        match text {
            "(" => Self::OpenParenthesis,
            ")" => Self::CloseParenthesis,
            text if util::is_numeric_literal(text) => Self::Number,
            text => Operator::from_str(text).map_or(Self::Unknown, Self::Operator),
        }
    }
}
