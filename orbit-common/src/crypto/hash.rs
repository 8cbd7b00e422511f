use sha2::{Digest, Sha256};

/// Length, in hex characters, of content tags, merkle nodes and orbital hashes.
pub const SHORT_HASH_LEN: usize = 16;

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// SHA-256 hex digest truncated to the first `len` characters.
///
/// `len` is clamped to the full digest length (64).
pub fn short_digest(data: &[u8], len: usize) -> String {
    let mut hex = digest(data);
    hex.truncate(len);
    hex
}
