//! The error produced when a status code or reason phrase is rejected.

use thiserror::Error;

/// A status code or reason phrase that cannot make up a `StatusCode`.
///
/// Every variant is a caller-correctable input problem; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgument {
    /// The status code was not an integer, e.g. `"2xx"` or `""` when parsing.
    #[error("status code must be an integer")]
    NotAnInteger,

    /// The status code was an integer, but not in the range 100–599.
    #[error("status code out of bounds: {0}")]
    OutOfBounds(i128),

    /// The reason phrase was not a string: invalid UTF-8, or octets that the `reason-phrase`
    /// rule does not admit.
    #[error("reason phrase must be a string")]
    ReasonPhraseNotString,
}

/// `std::result::Result` specialised to `InvalidArgument`.
pub type Result<T> = std::result::Result<T, InvalidArgument>;
