pub mod crypto;
pub mod error;
pub mod transactions;
pub mod utils;

pub use error::{OrbitError, Result};
pub use transactions::Transaction;
