pub mod hash;
pub mod merkle;

pub use hash::{digest, short_digest, SHORT_HASH_LEN};
pub use merkle::{compute_merkle_root, EMPTY_MERKLE_ROOT};
