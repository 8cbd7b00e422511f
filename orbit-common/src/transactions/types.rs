use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::hash::{short_digest, SHORT_HASH_LEN};
use crate::utils::{security::generate_nonce, time};

/// Length, in hex characters, of a transaction id.
pub const TX_ID_LEN: usize = 12;

pub const DEFAULT_TX_TYPE: &str = "transfer";
pub const GENESIS_TX_TYPE: &str = "genesis";

/// A single ledger record.
///
/// Every field is fixed at construction. `content_tag` is a truncated SHA-256
/// over sender, receiver, payload and timestamp: a tamper marker that anyone
/// can recompute, not a proof of authorship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    sender: String,
    receiver: String,
    payload: String,
    #[serde(rename = "type")]
    tx_type: String,
    timestamp: DateTime<Utc>,
    content_tag: String,
}

impl Transaction {
    /// Creates a `"transfer"` transaction.
    pub fn create(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::create_typed(sender, receiver, payload, DEFAULT_TX_TYPE)
    }

    /// Creates a transaction with an explicit type tag.
    ///
    /// Sender and receiver may be empty; well-formedness is judged later by
    /// the validators, not here.
    pub fn create_typed(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        payload: impl Into<String>,
        tx_type: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(sender, receiver, payload, tx_type, time::now())
    }

    pub(crate) fn with_timestamp(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        payload: impl Into<String>,
        tx_type: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let sender = sender.into();
        let receiver = receiver.into();
        let payload = payload.into();
        let content_tag = compute_content_tag(&sender, &receiver, &payload, &timestamp);

        Self {
            id: generate_id(),
            sender,
            receiver,
            payload,
            tx_type: tx_type.into(),
            timestamp,
            content_tag,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn tx_type(&self) -> &str {
        &self.tx_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn content_tag(&self) -> &str {
        &self.content_tag
    }

    /// Recomputes the content tag from the stored fields and compares.
    pub fn verify_content_tag(&self) -> bool {
        compute_content_tag(&self.sender, &self.receiver, &self.payload, &self.timestamp)
            == self.content_tag
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}: {}", self.sender, self.receiver, self.payload)
    }
}

// Uniqueness is probabilistic only; callers never re-check.
fn generate_id() -> String {
    let nanos = time::now().timestamp_nanos_opt().unwrap_or_default();
    let nonce = generate_nonce();
    short_digest(format!("{}{}", nanos, nonce).as_bytes(), TX_ID_LEN)
}

fn compute_content_tag(
    sender: &str,
    receiver: &str,
    payload: &str,
    timestamp: &DateTime<Utc>,
) -> String {
    let content = format!("{}{}{}{}", sender, receiver, payload, time::canonical(timestamp));
    short_digest(content.as_bytes(), SHORT_HASH_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_defaults() {
        let tx = Transaction::create("Alice", "Bob", "10 OrbitCoins");
        assert_eq!(tx.sender(), "Alice");
        assert_eq!(tx.receiver(), "Bob");
        assert_eq!(tx.payload(), "10 OrbitCoins");
        assert_eq!(tx.tx_type(), "transfer");
        assert_eq!(tx.id().len(), TX_ID_LEN);
        assert_eq!(tx.content_tag().len(), SHORT_HASH_LEN);
        assert!(tx.id().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(tx.content_tag().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_content_tag_covers_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let a = Transaction::with_timestamp("Alice", "Bob", "x", "transfer", ts);
        let b = Transaction::with_timestamp("Alice", "Bob", "x", "payment", ts);
        let c = Transaction::with_timestamp("Alice", "Bob", "y", "transfer", ts);

        // Type tag is not part of the content tag.
        assert_eq!(a.content_tag(), b.content_tag());
        assert_ne!(a.content_tag(), c.content_tag());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_content_tag_known_value() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let tx = Transaction::with_timestamp("A", "B", "p", "transfer", ts);
        let expected = short_digest(b"ABp2024-01-01T00:00:00.000000000Z", SHORT_HASH_LEN);
        assert_eq!(tx.content_tag(), expected);
    }

    #[test]
    fn test_verify_content_tag_detects_tampering() {
        let tx = Transaction::create("Alice", "Bob", "10 OrbitCoins");
        assert!(tx.verify_content_tag());

        let mut json = serde_json::to_value(&tx).unwrap();
        json["payload"] = serde_json::Value::String("1000 OrbitCoins".into());
        let tampered: Transaction = serde_json::from_value(json).unwrap();
        assert!(!tampered.verify_content_tag());
    }

    #[test]
    fn test_empty_sender_allowed_at_construction() {
        let tx = Transaction::create("", "Bob", "hi");
        assert_eq!(tx.sender(), "");
        assert_eq!(tx.content_tag().len(), SHORT_HASH_LEN);
    }

    #[test]
    fn test_display() {
        let tx = Transaction::create("Alice", "Bob", "coffee");
        assert_eq!(tx.to_string(), "Alice → Bob: coffee");
    }
}
