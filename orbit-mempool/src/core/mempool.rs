use std::collections::{HashSet, VecDeque};

use tracing::debug;

use orbit_common::transactions::Transaction;

/// FIFO holding area for submitted transactions awaiting admission.
///
/// Submission never validates; transactions leave the queue only when the
/// ledger admits them into an orbit. Rejected ones stay here and are retried
/// on every processing pass, with no expiry.
#[derive(Debug, Default, Clone)]
pub struct PendingQueue {
    transactions: VecDeque<Transaction>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self { transactions: VecDeque::new() }
    }

    /// Appends a transaction at the back of the queue.
    pub fn push(&mut self, tx: Transaction) {
        debug!("📤 Queued transaction [{}] {}", tx.id(), tx);
        self.transactions.push_back(tx);
    }

    /// Removes the transactions at the given queue positions (e.g., after
    /// they are included in an orbit). The rest keep their relative order.
    pub fn remove_batch(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        let drop: HashSet<usize> = positions.iter().copied().collect();
        let mut index = 0;
        self.transactions.retain(|_| {
            let keep = !drop.contains(&index);
            index += 1;
            keep
        });
        debug!("Removed {} transactions from pending queue", drop.len());
    }

    pub fn get(&self, position: usize) -> Option<&Transaction> {
        self.transactions.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
