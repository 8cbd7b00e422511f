use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

/// Errors surfaced by the OrbitChain engine.
///
/// Gate, capacity and seal conditions are ordinary runtime outcomes: the
/// ledger resolves them locally while processing the pending queue. Only
/// `Construction` signals a programmer error (bad static configuration).
#[derive(Debug, Error)]
pub enum OrbitError {
    /// Transaction did not collect enough approvals from active validators.
    #[error("Consensus gate rejected transaction {tx_id}: {approvals}/{active} approvals")]
    GateRejection {
        tx_id: String,
        approvals: usize,
        active: usize,
    },

    /// `add` against an open orbit that already holds `capacity` transactions.
    #[error("Orbit #{sequence} is full (capacity {capacity})")]
    CapacityExceeded { sequence: u64, capacity: usize },

    /// Mutation attempted on a sealed orbit.
    #[error("Orbit #{sequence} is already sealed")]
    SealViolation { sequence: u64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validator already registered: {0}")]
    DuplicateValidator(String),

    /// Invalid static configuration (zero capacity, threshold out of range).
    #[error("Invalid construction: {0}")]
    Construction(String),

    /// Hash-chain audit failure.
    #[error("Chain broken at orbit #{index}: {reason}")]
    ChainBroken { index: usize, reason: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
