use super::hash::{short_digest, SHORT_HASH_LEN};

/// Root of an orbit that holds no transactions.
pub const EMPTY_MERKLE_ROOT: &str = "0000000000000000";

/// Calculates the Merkle root over an ordered list of hex leaves.
///
/// Each level concatenates adjacent pairs as text and hashes them down to
/// `SHORT_HASH_LEN` hex characters. On odd levels the last leaf is paired
/// with itself. A single leaf is its own root.
pub fn compute_merkle_root<S: AsRef<str>>(leaves: &[S]) -> String {
    if leaves.is_empty() {
        return EMPTY_MERKLE_ROOT.to_string();
    }

    let mut level: Vec<String> = leaves.iter().map(|l| l.as_ref().to_string()).collect();

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                let mut combined = String::with_capacity(left.len() + right.len());
                combined.push_str(left);
                combined.push_str(right);
                short_digest(combined.as_bytes(), SHORT_HASH_LEN)
            })
            .collect();
    }

    level.swap_remove(0)
}
