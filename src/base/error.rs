/// An error that occurred while evaluating an expression.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    EvaluateError(#[from] crate::evaluate::Error),
}

impl Error {
    /// Returns the coarse error kind.
    #[must_use]
    pub fn kind(&self) -> crate::evaluate::ErrorKind {
        match self {
            Self::EvaluateError(err) => err.kind(),
        }
    }
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
