use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use orbit_common::error::Result;
use orbit_consensus::DEFAULT_CONSENSUS_THRESHOLD;
use orbit_ledger::{core::orbit::DEFAULT_ORBIT_CAPACITY, LedgerConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSpec {
    pub name: String,
    pub stake: f64,
}

impl ValidatorSpec {
    pub fn new(name: &str, stake: f64) -> Self {
        Self { name: name.to_string(), stake }
    }
}

/// Network name plus the validators it starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub name: String,
    pub validators: Vec<ValidatorSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub consensus_threshold: f64,
    pub orbit_capacity: usize,
    pub demo_delay_ms: u64,
    pub demo: NetworkProfile,
    pub interactive: NetworkProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
            orbit_capacity: DEFAULT_ORBIT_CAPACITY,
            demo_delay_ms: 800,
            demo: NetworkProfile {
                name: "OrbitChain-Demo".to_string(),
                validators: vec![
                    ValidatorSpec::new("Alice-Node", 1000.0),
                    ValidatorSpec::new("Bob-Node", 750.0),
                    ValidatorSpec::new("Carol-Node", 500.0),
                    ValidatorSpec::new("Dave-Node", 250.0),
                ],
            },
            interactive: NetworkProfile {
                name: "OrbitChain-Interactive".to_string(),
                validators: vec![
                    ValidatorSpec::new("Validator-1", 100.0),
                    ValidatorSpec::new("Validator-2", 100.0),
                ],
            },
        }
    }
}

impl Config {
    pub fn ledger_config(&self, profile: &NetworkProfile) -> LedgerConfig {
        LedgerConfig {
            name: profile.name.clone(),
            consensus_threshold: self.consensus_threshold,
            orbit_capacity: self.orbit_capacity,
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Config>(&data)?)
    }
}
