use std::fmt;

use serde::{Deserialize, Serialize};

use orbit_common::transactions::{Transaction, TransactionValidator};

pub const DEFAULT_STAKE: f64 = 100.0;
pub const INITIAL_REPUTATION: u32 = 100;

/// A validator node in the pool.
///
/// Stake and reputation are informational; they do not weigh into gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validator {
    name: String,
    stake: f64,
    reputation: u32,
    active: bool,
    /// Degrees on the ring, assigned once by the pool at registration.
    sector_position: u16,
    validated_count: u64,
}

impl Validator {
    pub fn new(name: impl Into<String>, stake: f64) -> Self {
        Self {
            name: name.into(),
            stake,
            reputation: INITIAL_REPUTATION,
            active: true,
            sector_position: 0,
            validated_count: 0,
        }
    }

    /// Judges the transaction's structure. Bumps the validated counter only
    /// when it accepts.
    pub fn validate(&mut self, tx: &Transaction) -> bool {
        match TransactionValidator::validate_structure(tx) {
            Ok(()) => {
                self.validated_count += 1;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_sector_position(&mut self, degrees: u16) {
        self.sector_position = degrees;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stake(&self) -> f64 {
        self.stake
    }

    pub fn reputation(&self) -> u32 {
        self.reputation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn sector_position(&self) -> u16 {
        self.sector_position
    }

    pub fn validated_count(&self) -> u64 {
        self.validated_count
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "ACTIVE" } else { "INACTIVE" };
        write!(
            f,
            "Validator {} | Stake: {} | Rep: {} | {}",
            self.name, self.stake, self.reputation, status
        )
    }
}
