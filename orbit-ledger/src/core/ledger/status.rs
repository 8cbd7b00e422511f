use serde::{Deserialize, Serialize};

/// Read-only snapshot of ledger-wide counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStatus {
    pub network_name: String,
    pub total_orbits: usize,
    /// Admitted transactions, genesis included.
    pub total_transactions: u64,
    pub pending_transactions: usize,
    pub active_validators: usize,
    pub total_validators: usize,
    pub uptime_seconds: f64,
    pub current_orbit: usize,
    pub consensus_threshold: f64,
}
