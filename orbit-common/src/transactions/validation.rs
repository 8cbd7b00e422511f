use super::errors::TransactionError;
use super::types::Transaction;

/// Shortest content tag a validator accepts.
pub const MIN_CONTENT_TAG_LEN: usize = 10;

pub struct TransactionValidator;

impl TransactionValidator {
    /// Structural well-formedness check. No cryptographic verification happens
    /// here: the content tag is only checked for presence and length.
    pub fn validate_structure(tx: &Transaction) -> Result<(), TransactionError> {
        let tag = tx.content_tag();
        if tag.is_empty() {
            return Err(TransactionError::MissingContentTag);
        }
        if tag.len() < MIN_CONTENT_TAG_LEN {
            return Err(TransactionError::ShortContentTag(tag.len()));
        }
        if tx.sender().is_empty() {
            return Err(TransactionError::EmptySender);
        }
        if tx.receiver().is_empty() {
            return Err(TransactionError::EmptyReceiver);
        }
        Ok(())
    }
}
