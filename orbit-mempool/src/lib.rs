pub mod core;

pub use crate::core::mempool::PendingQueue;
