mod audit;
mod genesis;
pub mod status;

use std::time::Instant;

use tracing::{debug, info, warn};

use orbit_common::error::{OrbitError, Result};
use orbit_common::transactions::Transaction;
use orbit_consensus::{ConsensusEvaluator, Validator, ValidatorPool};
use orbit_mempool::PendingQueue;

use crate::config::LedgerConfig;
use crate::core::orbit::{Orbit, OrbitSnapshot};

use status::LedgerStatus;

/// Result of one `process_pending` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Transactions moved from the queue into the open orbit.
    pub admitted: usize,
    /// Transactions that failed the consensus gate and stay queued.
    pub rejected: usize,
    /// Sequence of the orbit sealed during this pass, if any.
    pub sealed: Option<u64>,
}

/// The chain of orbits.
///
/// Owns the orbit sequence, the pending queue and the validator pool. All
/// mutation goes through `&mut self`; wrap it in [`crate::SharedLedger`] for
/// concurrent access.
#[derive(Debug)]
pub struct ChainLedger {
    name: String,
    orbits: Vec<Orbit>,
    current_index: usize,
    pending: PendingQueue,
    validators: ValidatorPool,
    evaluator: ConsensusEvaluator,
    orbit_capacity: usize,
    total_transactions: u64,
    started_at: Instant,
}

impl ChainLedger {
    /// Builds a ledger holding a sealed genesis orbit.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;

        let genesis = genesis::genesis_orbit()?;
        let genesis_txs = genesis.len() as u64;

        Ok(Self {
            evaluator: ConsensusEvaluator::new(config.quorum_policy()),
            name: config.name,
            orbits: vec![genesis],
            current_index: 0,
            pending: PendingQueue::new(),
            validators: ValidatorPool::new(),
            orbit_capacity: config.orbit_capacity,
            total_transactions: genesis_txs,
            started_at: Instant::now(),
        })
    }

    pub fn register_validator(&mut self, validator: Validator) -> Result<()> {
        self.validators.register(validator)
    }

    pub fn set_validator_active(&mut self, name: &str, active: bool) -> Result<()> {
        self.validators.set_active(name, active)
    }

    /// Flips a validator's active flag, returning the new value.
    pub fn toggle_validator(&mut self, name: &str) -> Result<bool> {
        self.validators.toggle(name)
    }

    /// Queues a transaction. No validation, no admission.
    pub fn submit(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Drains what it can from the pending queue into the open orbit.
    ///
    /// Walks the queue in FIFO order, runs the consensus gate on each
    /// transaction and appends approved ones. When the orbit fills it is
    /// sealed and the walk stops; the remainder waits for the next call.
    /// Rejected transactions stay queued and are retried on every call.
    pub fn process_pending(&mut self) -> Result<ProcessReport> {
        let mut report = ProcessReport::default();
        if self.pending.is_empty() {
            return Ok(report);
        }

        let current = &self.orbits[self.current_index];
        if current.is_sealed() || current.is_full() {
            self.open_next_orbit()?;
        }

        let orbit = &mut self.orbits[self.current_index];
        let mut admitted = Vec::new();
        let mut filled = false;

        for (position, tx) in self.pending.iter().enumerate() {
            let verdict = self.evaluator.evaluate(tx, &mut self.validators);
            if let Err(e) = verdict.into_result(tx) {
                debug!("⏳ {}, stays pending", e);
                report.rejected += 1;
                continue;
            }

            if let Err(e) = orbit.try_add(tx.clone()) {
                warn!("⚠️ Could not admit [{}]: {}", tx.id(), e);
                break;
            }
            admitted.push(position);
            self.total_transactions += 1;

            if orbit.is_full() {
                filled = true;
                break;
            }
        }

        report.admitted = admitted.len();
        self.pending.remove_batch(&admitted);

        if filled {
            self.seal_current_orbit()?;
            report.sealed = Some(self.orbits[self.current_index].sequence());
        }

        if report.admitted > 0 {
            info!(
                "📥 Admitted {} transaction(s) into orbit #{} ({} pending)",
                report.admitted,
                self.current_index,
                self.pending.len()
            );
        }
        Ok(report)
    }

    /// Seals the current orbit, linking it to its predecessor's orbital hash.
    /// Also used to close a non-full orbit early.
    pub fn seal_current_orbit(&mut self) -> Result<String> {
        let previous_hash = match self.current_index.checked_sub(1) {
            Some(prev) => self.orbits[prev].orbital_hash().to_string(),
            None => String::new(),
        };

        let orbit = &mut self.orbits[self.current_index];
        let hash = orbit.seal(previous_hash)?.to_string();
        info!("🔒 Orbit #{} sealed (hash: {})", orbit.sequence(), hash);
        Ok(hash)
    }

    fn open_next_orbit(&mut self) -> Result<()> {
        let sequence = self.current_index as u64 + 1;
        let orbit = Orbit::new(sequence, self.orbit_capacity)?;
        self.orbits.push(orbit);
        self.current_index += 1;
        info!("🌍 New orbit #{} opened", sequence);
        Ok(())
    }

    pub fn status(&self) -> LedgerStatus {
        LedgerStatus {
            network_name: self.name.clone(),
            total_orbits: self.orbits.len(),
            total_transactions: self.total_transactions,
            pending_transactions: self.pending.len(),
            active_validators: self.validators.active_count(),
            total_validators: self.validators.len(),
            uptime_seconds: self.started_at.elapsed().as_secs_f64(),
            current_orbit: self.current_index,
            consensus_threshold: self.evaluator.threshold(),
        }
    }

    pub fn orbit_detail(&self, index: usize) -> Result<OrbitSnapshot> {
        self.orbits
            .get(index)
            .map(Orbit::snapshot)
            .ok_or_else(|| OrbitError::NotFound(format!("orbit #{} (have {})", index, self.orbits.len())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn current_orbit(&self) -> &Orbit {
        &self.orbits[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    pub fn validators(&self) -> &ValidatorPool {
        &self.validators
    }

    pub fn consensus_threshold(&self) -> f64 {
        self.evaluator.threshold()
    }

    pub fn total_transactions(&self) -> u64 {
        self.total_transactions
    }
}
