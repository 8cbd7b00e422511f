use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orbit_common::crypto::hash::{short_digest, SHORT_HASH_LEN};
use orbit_common::crypto::merkle::{compute_merkle_root, EMPTY_MERKLE_ROOT};
use orbit_common::error::{OrbitError, Result};
use orbit_common::transactions::Transaction;
use orbit_common::utils::time;

pub const DEFAULT_ORBIT_CAPACITY: usize = 8;
pub const GENESIS_ORBIT_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitState {
    Open,
    Sealed,
}

impl fmt::Display for OrbitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitState::Open => write!(f, "OPEN"),
            OrbitState::Sealed => write!(f, "SEALED"),
        }
    }
}

/// A capacity-bounded, append-only batch of transactions.
///
/// While open, `merkle_root` always matches the transaction list. Sealing is
/// a one-way transition that freezes the list and fixes `previous_hash` and
/// `orbital_hash`.
#[derive(Debug, Clone)]
pub struct Orbit {
    sequence: u64,
    transactions: Vec<Transaction>,
    capacity: usize,
    sealed: bool,
    merkle_root: String,
    previous_hash: String,
    orbital_hash: String,
    created_at: DateTime<Utc>,
}

/// Field order is alphabetical so the serialized form is canonical.
#[derive(Serialize)]
struct SealContent<'a> {
    merkle_root: &'a str,
    orbit_number: u64,
    previous_hash: &'a str,
    timestamp: String,
    transactions: usize,
}

impl Orbit {
    pub fn new(sequence: u64, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(OrbitError::Construction(format!(
                "orbit #{} capacity must be at least 1",
                sequence
            )));
        }

        Ok(Self {
            sequence,
            transactions: Vec::new(),
            capacity,
            sealed: false,
            merkle_root: EMPTY_MERKLE_ROOT.to_string(),
            previous_hash: String::new(),
            orbital_hash: String::new(),
            created_at: time::now(),
        })
    }

    /// Appends a transaction, reporting why it was refused.
    pub fn try_add(&mut self, tx: Transaction) -> Result<()> {
        if self.sealed {
            return Err(OrbitError::SealViolation { sequence: self.sequence });
        }
        if self.transactions.len() >= self.capacity {
            return Err(OrbitError::CapacityExceeded {
                sequence: self.sequence,
                capacity: self.capacity,
            });
        }

        self.transactions.push(tx);
        self.merkle_root = self.compute_merkle_root();
        Ok(())
    }

    /// Appends a transaction. Returns `false`, leaving the orbit untouched,
    /// when it is sealed or full.
    pub fn add(&mut self, tx: Transaction) -> bool {
        self.try_add(tx).is_ok()
    }

    /// Seals the orbit against `previous_hash` and returns the orbital hash.
    pub fn seal(&mut self, previous_hash: impl Into<String>) -> Result<&str> {
        if self.sealed {
            return Err(OrbitError::SealViolation { sequence: self.sequence });
        }

        let previous_hash = previous_hash.into();
        let orbital_hash = self.content_hash(&previous_hash)?;

        self.previous_hash = previous_hash;
        self.orbital_hash = orbital_hash;
        self.sealed = true;
        Ok(&self.orbital_hash)
    }

    /// Hash over sequence, transaction count, merkle root, previous hash and
    /// creation time.
    pub(crate) fn content_hash(&self, previous_hash: &str) -> Result<String> {
        let content = SealContent {
            merkle_root: &self.merkle_root,
            orbit_number: self.sequence,
            previous_hash,
            timestamp: time::canonical(&self.created_at),
            transactions: self.transactions.len(),
        };
        let bytes = serde_json::to_vec(&content)?;
        Ok(short_digest(&bytes, SHORT_HASH_LEN))
    }

    fn compute_merkle_root(&self) -> String {
        let leaves: Vec<&str> = self.transactions.iter().map(|tx| tx.content_tag()).collect();
        compute_merkle_root(&leaves)
    }

    /// True when the stored root matches the current transaction list.
    pub fn verify_merkle_root(&self) -> bool {
        self.compute_merkle_root() == self.merkle_root
    }

    #[cfg(test)]
    pub(crate) fn overwrite_orbital_hash(&mut self, hash: &str) {
        self.orbital_hash = hash.to_string();
    }

    /// Round-robin assignment of transactions to validator indices.
    /// Illustrative only; it carries no validation authority.
    pub fn sectorize(&self, validator_count: usize) -> BTreeMap<usize, Vec<&Transaction>> {
        sectorize(&self.transactions, validator_count)
    }

    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.capacity
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn state(&self) -> OrbitState {
        if self.sealed {
            OrbitState::Sealed
        } else {
            OrbitState::Open
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn merkle_root(&self) -> &str {
        &self.merkle_root
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn orbital_hash(&self) -> &str {
        &self.orbital_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            sequence: self.sequence,
            state: self.state(),
            capacity: self.capacity,
            transactions: self.transactions.clone(),
            merkle_root: self.merkle_root.clone(),
            previous_hash: self.previous_hash.clone(),
            orbital_hash: self.orbital_hash.clone(),
            created_at: self.created_at,
        }
    }
}

/// Owned, read-only copy of an orbit handed out to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSnapshot {
    pub sequence: u64,
    pub state: OrbitState,
    pub capacity: usize,
    pub transactions: Vec<Transaction>,
    pub merkle_root: String,
    pub previous_hash: String,
    pub orbital_hash: String,
    pub created_at: DateTime<Utc>,
}

impl OrbitSnapshot {
    pub fn sectorize(&self, validator_count: usize) -> BTreeMap<usize, Vec<&Transaction>> {
        sectorize(&self.transactions, validator_count)
    }
}

fn sectorize(transactions: &[Transaction], validator_count: usize) -> BTreeMap<usize, Vec<&Transaction>> {
    let mut sectors: BTreeMap<usize, Vec<&Transaction>> =
        (0..validator_count).map(|i| (i, Vec::new())).collect();

    if validator_count == 0 {
        return sectors;
    }

    for (i, tx) in transactions.iter().enumerate() {
        sectors.entry(i % validator_count).or_default().push(tx);
    }
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, count: usize) -> Orbit {
        let mut orbit = Orbit::new(1, capacity).unwrap();
        for i in 0..count {
            assert!(orbit.add(Transaction::create("Alice", "Bob", i.to_string())));
        }
        orbit
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(Orbit::new(1, 0), Err(OrbitError::Construction(_))));
    }

    #[test]
    fn test_empty_orbit_root() {
        let orbit = Orbit::new(1, DEFAULT_ORBIT_CAPACITY).unwrap();
        assert_eq!(orbit.merkle_root(), "0000000000000000");
        assert_eq!(orbit.state(), OrbitState::Open);
        assert!(orbit.previous_hash().is_empty());
        assert!(orbit.orbital_hash().is_empty());
    }

    #[test]
    fn test_merkle_root_tracks_transactions() {
        let orbit = filled(8, 3);
        let tags: Vec<&str> = orbit.transactions().iter().map(|tx| tx.content_tag()).collect();
        assert_eq!(orbit.merkle_root(), compute_merkle_root(&tags));
        assert!(orbit.verify_merkle_root());
    }

    #[test]
    fn test_capacity_bound() {
        let mut orbit = filled(2, 2);
        assert!(orbit.is_full());

        let root = orbit.merkle_root().to_string();
        let err = orbit.try_add(Transaction::create("Alice", "Bob", "overflow")).unwrap_err();
        assert!(matches!(err, OrbitError::CapacityExceeded { sequence: 1, capacity: 2 }));
        assert_eq!(orbit.len(), 2);
        assert_eq!(orbit.merkle_root(), root);
    }

    #[test]
    fn test_add_after_seal_fails_without_mutation() {
        let mut orbit = filled(8, 3);
        orbit.seal("abcdabcdabcdabcd").unwrap();

        let root = orbit.merkle_root().to_string();
        let ids: Vec<String> = orbit.transactions().iter().map(|tx| tx.id().to_string()).collect();

        assert!(!orbit.add(Transaction::create("Alice", "Bob", "late")));
        let err = orbit.try_add(Transaction::create("Alice", "Bob", "late")).unwrap_err();
        assert!(matches!(err, OrbitError::SealViolation { sequence: 1 }));

        assert_eq!(orbit.merkle_root(), root);
        let after: Vec<String> = orbit.transactions().iter().map(|tx| tx.id().to_string()).collect();
        assert_eq!(after, ids);
    }

    #[test]
    fn test_seal_is_one_way() {
        let mut orbit = filled(8, 1);
        let hash = orbit.seal("").unwrap().to_string();
        assert_eq!(hash.len(), SHORT_HASH_LEN);
        assert!(orbit.is_sealed());

        let err = orbit.seal("other").unwrap_err();
        assert!(matches!(err, OrbitError::SealViolation { .. }));
        assert_eq!(orbit.orbital_hash(), hash);
        assert_eq!(orbit.previous_hash(), "");
    }

    #[test]
    fn test_orbital_hash_commits_to_previous_hash() {
        let orbit = filled(8, 2);
        let mut a = orbit.clone();
        let mut b = orbit.clone();
        let ha = a.seal("1111111111111111").unwrap().to_string();
        let hb = b.seal("2222222222222222").unwrap().to_string();
        assert_ne!(ha, hb);
        assert_eq!(a.content_hash("1111111111111111").unwrap(), ha);
    }

    #[test]
    fn test_sectorize_round_robin() {
        let orbit = filled(8, 7);
        let sectors = orbit.sectorize(3);

        assert_eq!(sectors.len(), 3);
        let payloads: Vec<Vec<&str>> = sectors
            .values()
            .map(|txs| txs.iter().map(|tx| tx.payload()).collect())
            .collect();
        assert_eq!(payloads[0], vec!["0", "3", "6"]);
        assert_eq!(payloads[1], vec!["1", "4"]);
        assert_eq!(payloads[2], vec!["2", "5"]);
    }

    #[test]
    fn test_sectorize_edge_counts() {
        let orbit = filled(8, 2);
        assert!(orbit.sectorize(0).is_empty());

        let sectors = orbit.sectorize(4);
        assert_eq!(sectors.len(), 4);
        assert!(sectors[&3].is_empty());
    }

    #[test]
    fn test_snapshot_matches_orbit() {
        let mut orbit = filled(8, 2);
        orbit.seal("").unwrap();
        let snap = orbit.snapshot();

        assert_eq!(snap.sequence, 1);
        assert_eq!(snap.state, OrbitState::Sealed);
        assert_eq!(snap.transactions.len(), 2);
        assert_eq!(snap.merkle_root, orbit.merkle_root());
        assert_eq!(snap.orbital_hash, orbit.orbital_hash());
        assert_eq!(snap.sectorize(2)[&1].len(), 1);
    }
}
