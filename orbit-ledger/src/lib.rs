pub mod config;
pub mod core;
pub mod handle;

pub use crate::config::LedgerConfig;
pub use crate::core::ledger::{status::LedgerStatus, ChainLedger, ProcessReport};
pub use crate::core::orbit::{Orbit, OrbitSnapshot, OrbitState};
pub use handle::SharedLedger;
