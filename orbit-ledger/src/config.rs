use serde::{Deserialize, Serialize};

use orbit_common::error::{OrbitError, Result};
use orbit_consensus::{QuorumPolicy, DEFAULT_CONSENSUS_THRESHOLD};

use crate::core::orbit::DEFAULT_ORBIT_CAPACITY;

pub const DEFAULT_NETWORK_NAME: &str = "OrbitChain-MainNet";

/// Static ledger configuration. Checked once in `ChainLedger::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_threshold")]
    pub consensus_threshold: f64,
    #[serde(default = "default_capacity")]
    pub orbit_capacity: usize,
}

fn default_name() -> String {
    DEFAULT_NETWORK_NAME.to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_CONSENSUS_THRESHOLD
}

fn default_capacity() -> usize {
    DEFAULT_ORBIT_CAPACITY
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            consensus_threshold: default_threshold(),
            orbit_capacity: default_capacity(),
        }
    }
}

impl LedgerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.orbit_capacity == 0 {
            return Err(OrbitError::Construction("orbit capacity must be at least 1".into()));
        }
        self.quorum_policy().validate()
    }

    pub fn quorum_policy(&self) -> QuorumPolicy {
        QuorumPolicy { threshold: self.consensus_threshold }
    }
}
