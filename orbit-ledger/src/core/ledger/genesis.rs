use tracing::info;

use orbit_common::error::Result;
use orbit_common::transactions::{Transaction, GENESIS_TX_TYPE};

use crate::core::orbit::{Orbit, GENESIS_ORBIT_CAPACITY};

pub const GENESIS_SENDER: &str = "SYSTEM";
pub const GENESIS_RECEIVER: &str = "NETWORK";
pub const GENESIS_PAYLOAD: &str = "Genesis orbit created";

/// Orbit #0: a single system transaction, sealed against an empty previous
/// hash.
pub(super) fn genesis_orbit() -> Result<Orbit> {
    let mut genesis = Orbit::new(0, GENESIS_ORBIT_CAPACITY)?;
    let tx = Transaction::create_typed(GENESIS_SENDER, GENESIS_RECEIVER, GENESIS_PAYLOAD, GENESIS_TX_TYPE);
    genesis.try_add(tx)?;

    let hash = genesis.seal("")?;
    info!("🌟 Genesis orbit created (hash: {})", hash);
    Ok(genesis)
}
