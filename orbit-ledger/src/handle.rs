use std::sync::Arc;

use tokio::sync::RwLock;

use orbit_common::error::Result;
use orbit_common::transactions::Transaction;
use orbit_consensus::Validator;

use crate::core::ledger::{status::LedgerStatus, ChainLedger, ProcessReport};
use crate::core::orbit::OrbitSnapshot;

/// Cloneable handle for sharing one ledger between tasks.
///
/// Every mutating call holds the write lock for its full duration, so there
/// is a single writer at a time. Reads return owned snapshots taken under the
/// read lock; a reader never sees an orbit halfway through an update.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<ChainLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: ChainLedger) -> Self {
        Self { inner: Arc::new(RwLock::new(ledger)) }
    }

    pub async fn submit(&self, tx: Transaction) {
        self.inner.write().await.submit(tx);
    }

    pub async fn process_pending(&self) -> Result<ProcessReport> {
        self.inner.write().await.process_pending()
    }

    /// Submit and process under one write lock.
    pub async fn submit_and_process(&self, tx: Transaction) -> Result<ProcessReport> {
        let mut ledger = self.inner.write().await;
        ledger.submit(tx);
        ledger.process_pending()
    }

    pub async fn register_validator(&self, validator: Validator) -> Result<()> {
        self.inner.write().await.register_validator(validator)
    }

    pub async fn set_validator_active(&self, name: &str, active: bool) -> Result<()> {
        self.inner.write().await.set_validator_active(name, active)
    }

    /// Read-and-flip under one write lock.
    pub async fn toggle_validator(&self, name: &str) -> Result<bool> {
        self.inner.write().await.toggle_validator(name)
    }

    pub async fn seal_current_orbit(&self) -> Result<String> {
        self.inner.write().await.seal_current_orbit()
    }

    pub async fn status(&self) -> LedgerStatus {
        self.inner.read().await.status()
    }

    pub async fn orbit_detail(&self, index: usize) -> Result<OrbitSnapshot> {
        self.inner.read().await.orbit_detail(index)
    }

    pub async fn validators(&self) -> Vec<Validator> {
        self.inner.read().await.validators().iter().cloned().collect()
    }

    pub async fn pending(&self) -> Vec<Transaction> {
        self.inner.read().await.pending().iter().cloned().collect()
    }

    pub async fn verify_chain(&self) -> Result<()> {
        self.inner.read().await.verify_chain()
    }
}
