use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactoryError>;

/// Misuse of the factory API
///
/// Distinct from the [`HttpError`](crate::HttpError) values the factory
/// returns: producing a 500 is success, these signal a bad call.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// An argument could not be classified or combined
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// The abstract base was instantiated directly
    #[error("cannot construct abstract class")]
    AbstractConstruction,
}

/// Reasons an argument is rejected
///
/// Positions are zero-based indexes into the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Value kind is not a status, message, error or property bag
    #[error("argument {position}: unsupported argument type {found}")]
    UnsupportedType { position: usize, found: &'static str },

    /// A numeric status that is not an integer
    #[error("argument {position}: status must be an integer, got {value}")]
    NonIntegerStatus { position: usize, value: String },

    /// More than one error value in a single call
    #[error("argument {position}: only one error value may be supplied")]
    DuplicateError { position: usize },

    /// Reserved property with a value of the wrong type
    #[error("argument {position}: property `{key}` must be a {expected}")]
    InvalidProperty {
        position: usize,
        key: String,
        expected: &'static str,
    },

    /// Argument kind a concrete constructor does not take
    #[error("argument {position}: {constructor} does not accept a {found}")]
    NotAccepted {
        position: usize,
        found: &'static str,
        constructor: &'static str,
    },
}
