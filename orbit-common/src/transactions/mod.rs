pub mod errors;
pub mod types;
pub mod validation;

pub use errors::TransactionError;
pub use types::{Transaction, DEFAULT_TX_TYPE, GENESIS_TX_TYPE, TX_ID_LEN};
pub use validation::{TransactionValidator, MIN_CONTENT_TAG_LEN};
