use serde::{Deserialize, Serialize};
use tracing::debug;

use orbit_common::error::{OrbitError, Result};
use orbit_common::transactions::Transaction;

use super::registry::ValidatorPool;

pub const DEFAULT_CONSENSUS_THRESHOLD: f64 = 0.67;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuorumPolicy {
    /// Minimum fraction of active validators that must approve.
    pub threshold: f64,
}

impl Default for QuorumPolicy {
    fn default() -> Self {
        Self { threshold: DEFAULT_CONSENSUS_THRESHOLD }
    }
}

impl QuorumPolicy {
    pub fn new(threshold: f64) -> Result<Self> {
        let policy = Self { threshold };
        policy.validate()?;
        Ok(policy)
    }

    /// Threshold must lie in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(OrbitError::Construction(format!(
                "consensus threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Outcome of running the gate over one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GateVerdict {
    pub approved: bool,
    pub approvals: usize,
    pub active: usize,
    /// No validators registered at all: everything passes.
    pub bootstrap: bool,
}

impl GateVerdict {
    pub fn approval_ratio(&self) -> Option<f64> {
        (self.active > 0).then(|| self.approvals as f64 / self.active as f64)
    }

    pub fn into_result(self, tx: &Transaction) -> Result<GateVerdict> {
        if self.approved {
            Ok(self)
        } else {
            Err(OrbitError::GateRejection {
                tx_id: tx.id().to_string(),
                approvals: self.approvals,
                active: self.active,
            })
        }
    }
}

/// Consensus gate over the validator pool.
#[derive(Debug, Clone, Default)]
pub struct ConsensusEvaluator {
    pub policy: QuorumPolicy,
}

impl ConsensusEvaluator {
    pub fn new(policy: QuorumPolicy) -> Self {
        Self { policy }
    }

    pub fn threshold(&self) -> f64 {
        self.policy.threshold
    }

    /// Runs every active validator over `tx` and compares the approval ratio
    /// against the threshold.
    ///
    /// An empty pool approves unconditionally. A pool with no active
    /// validators rejects everything.
    pub fn evaluate(&self, tx: &Transaction, pool: &mut ValidatorPool) -> GateVerdict {
        if pool.is_empty() {
            debug!("🗳️ No validators registered, bootstrap approval for [{}]", tx.id());
            return GateVerdict { approved: true, approvals: 0, active: 0, bootstrap: true };
        }

        let mut approvals = 0;
        let mut active = 0;
        for validator in pool.active_mut() {
            active += 1;
            if validator.validate(tx) {
                approvals += 1;
            }
        }

        let approved = active > 0 && approvals as f64 / active as f64 >= self.policy.threshold;

        debug!(
            "🗳️ Transaction [{}]: {}/{} approvals (threshold {}): {}",
            tx.id(),
            approvals,
            active,
            self.policy.threshold,
            if approved { "APPROVED" } else { "REJECTED" }
        );

        GateVerdict { approved, approvals, active, bootstrap: false }
    }
}
