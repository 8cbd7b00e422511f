use orbit_common::error::{OrbitError, Result};

use super::ChainLedger;

impl ChainLedger {
    /// Re-derives every commitment in the chain: content tags, merkle roots,
    /// orbital hashes of sealed orbits and the links between them.
    pub fn verify_chain(&self) -> Result<()> {
        for (index, orbit) in self.orbits.iter().enumerate() {
            let broken = |reason: String| OrbitError::ChainBroken { index, reason };

            if let Some(tx) = orbit.transactions().iter().find(|tx| !tx.verify_content_tag()) {
                return Err(broken(format!("content tag mismatch for transaction {}", tx.id())));
            }
            if !orbit.verify_merkle_root() {
                return Err(broken("merkle root does not match transactions".into()));
            }
            if !orbit.is_sealed() {
                continue;
            }

            let expected_prev = match index.checked_sub(1) {
                Some(prev) => self.orbits[prev].orbital_hash(),
                None => "",
            };
            if orbit.previous_hash() != expected_prev {
                return Err(broken(format!(
                    "previous hash {:?} does not match predecessor {:?}",
                    orbit.previous_hash(),
                    expected_prev
                )));
            }
            if orbit.content_hash(orbit.previous_hash())? != orbit.orbital_hash() {
                return Err(broken("orbital hash does not match contents".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use orbit_common::error::OrbitError;
    use orbit_common::transactions::Transaction;

    use crate::config::LedgerConfig;
    use crate::core::ledger::ChainLedger;
    use crate::core::orbit::Orbit;

    /// Genesis plus two sealed orbits of two transactions each.
    fn sealed_chain() -> ChainLedger {
        let config = LedgerConfig { orbit_capacity: 2, ..LedgerConfig::default() };
        let mut ledger = ChainLedger::new(config).unwrap();
        for i in 0..4 {
            ledger.submit(Transaction::create("Alice", "Bob", i.to_string()));
        }
        ledger.process_pending().unwrap();
        ledger.process_pending().unwrap();
        assert_eq!(ledger.orbits().len(), 3);
        ledger
    }

    fn broken_reason(ledger: &ChainLedger) -> (usize, String) {
        match ledger.verify_chain() {
            Err(OrbitError::ChainBroken { index, reason }) => (index, reason),
            other => panic!("expected ChainBroken, got {:?}", other),
        }
    }

    #[test]
    fn test_fresh_chain_verifies() {
        let ledger = ChainLedger::new(LedgerConfig::default()).unwrap();
        assert!(ledger.verify_chain().is_ok());
    }

    #[test]
    fn test_multi_orbit_chain_verifies() {
        let config = LedgerConfig { orbit_capacity: 2, ..LedgerConfig::default() };
        let mut ledger = ChainLedger::new(config).unwrap();
        for i in 0..7 {
            ledger.submit(Transaction::create("Alice", "Bob", i.to_string()));
            ledger.process_pending().unwrap();
        }
        assert_eq!(ledger.orbits().len(), 5);
        assert!(ledger.verify_chain().is_ok());
    }

    #[test]
    fn test_wrong_previous_hash_detected() {
        let mut ledger = sealed_chain();

        let mut forged = Orbit::new(1, 2).unwrap();
        for tx in ledger.orbits[1].transactions().to_vec() {
            forged.try_add(tx).unwrap();
        }
        forged.seal("ffffffffffffffff").unwrap();
        ledger.orbits[1] = forged;

        let (index, reason) = broken_reason(&ledger);
        assert_eq!(index, 1);
        assert!(reason.contains("previous hash"));
    }

    #[test]
    fn test_tampered_transaction_detected() {
        let mut ledger = sealed_chain();

        let original = ledger.orbits[1].transactions()[0].clone();
        let mut json = serde_json::to_value(&original).unwrap();
        json["payload"] = serde_json::Value::String("1000 OrbitCoins".into());
        let tampered: Transaction = serde_json::from_value(json).unwrap();

        let previous = ledger.orbits[0].orbital_hash().to_string();
        let mut forged = Orbit::new(1, 2).unwrap();
        forged.try_add(tampered).unwrap();
        forged.try_add(ledger.orbits[1].transactions()[1].clone()).unwrap();
        forged.seal(previous).unwrap();
        ledger.orbits[1] = forged;

        let (index, reason) = broken_reason(&ledger);
        assert_eq!(index, 1);
        assert!(reason.contains(&format!("content tag mismatch for transaction {}", original.id())));
    }

    #[test]
    fn test_orbital_hash_mismatch_detected() {
        let mut ledger = sealed_chain();
        ledger.orbits[2].overwrite_orbital_hash("0123456789abcdef");

        let (index, reason) = broken_reason(&ledger);
        assert_eq!(index, 2);
        assert!(reason.contains("orbital hash"));
    }

    #[test]
    fn test_earliest_break_reported() {
        let mut ledger = sealed_chain();
        ledger.orbits[1].overwrite_orbital_hash("0123456789abcdef");

        // Orbit #1 fails its own recomputation before #2's link is checked.
        let (index, reason) = broken_reason(&ledger);
        assert_eq!(index, 1);
        assert!(reason.contains("orbital hash"));
    }
}
