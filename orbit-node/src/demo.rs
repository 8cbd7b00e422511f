use std::io::Write;
use std::time::Duration;

use tracing::info;

use orbit_common::error::Result;
use orbit_common::transactions::Transaction;
use orbit_ledger::SharedLedger;

use crate::render::{NetworkView, OrbitDetailView};

/// The scripted sample traffic: (sender, receiver, payload, type).
const DEMO_TRAFFIC: [(&str, &str, &str, &str); 10] = [
    ("Alice", "Bob", "10 OrbitCoins", "payment"),
    ("Bob", "Carol", "Buy a coffee", "purchase"),
    ("Carol", "Dave", "Document #123", "document"),
    ("Dave", "Alice", "Vote #456", "vote"),
    ("Alice", "Carol", "School certificate", "certificate"),
    ("Bob", "Dave", "IoT sensor data", "iot"),
    ("Carol", "Alice", "Smart contract", "contract"),
    ("Dave", "Bob", "Photo backup", "storage"),
    ("Alice", "Dave", "5 OrbitCoins", "payment"),
    ("Bob", "Carol", "Identity check", "identity"),
];

pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_TRAFFIC
        .iter()
        .map(|(from, to, payload, kind)| Transaction::create_typed(*from, *to, *payload, *kind))
        .collect()
}

/// Submits the sample traffic one transaction at a time, processing and
/// rendering the network after each, then shows the final state.
pub async fn run_demo<W: Write>(ledger: &SharedLedger, delay: Duration, out: &mut W) -> Result<()> {
    let transactions = demo_transactions();
    info!("📤 Submitting {} demo transactions...", transactions.len());

    for (i, tx) in transactions.into_iter().enumerate() {
        writeln!(out, "📤 Transaction submitted: {}", tx)?;
        ledger.submit_and_process(tx).await?;

        writeln!(out, "\n--- After transaction #{} ---", i + 1)?;
        write_network(ledger, out).await?;

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    writeln!(out, "\n🎉 FINAL NETWORK STATE")?;
    writeln!(out, "{}", "=".repeat(50))?;
    write_network(ledger, out).await?;

    let status = ledger.status().await;
    if status.total_orbits > 1 {
        let last = ledger.orbit_detail(status.total_orbits - 1).await?;
        writeln!(out, "\n🔍 Detail of the latest orbit:")?;
        write!(out, "{}", OrbitDetailView { orbit: &last, validator_count: status.total_validators })?;
    }
    out.flush()?;
    Ok(())
}

pub(crate) async fn write_network<W: Write>(ledger: &SharedLedger, out: &mut W) -> Result<()> {
    let status = ledger.status().await;
    let validators = ledger.validators().await;
    write!(out, "{}", NetworkView { status: &status, validators: &validators })?;
    Ok(())
}
