use rand::{rngs::OsRng, RngCore};

/// Random value mixed into transaction identifiers.
pub fn generate_nonce() -> u64 {
    OsRng.next_u64()
}
