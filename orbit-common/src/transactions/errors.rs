use thiserror::Error;

/// Reasons a transaction fails the structural well-formedness check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// The content tag is empty.
    #[error("Missing content tag")]
    MissingContentTag,

    /// The content tag is shorter than the minimum accepted length.
    #[error("Content tag too short: {0} characters")]
    ShortContentTag(usize),

    #[error("Empty sender")]
    EmptySender,

    #[error("Empty receiver")]
    EmptyReceiver,
}
