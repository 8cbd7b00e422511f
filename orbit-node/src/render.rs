//! Text rendering of ledger snapshots. Pure formatting over data handed in
//! by the caller; nothing here touches the ledger.

use std::fmt;

use orbit_common::transactions::Transaction;
use orbit_consensus::Validator;
use orbit_ledger::{LedgerStatus, OrbitSnapshot};

const RULE_WIDE: usize = 50;
const RULE_NARROW: usize = 40;
const MAX_DRAWN_RINGS: usize = 5;

/// Concentric-ring view of the whole network, followed by validators and
/// statistics.
pub struct NetworkView<'a> {
    pub status: &'a LedgerStatus,
    pub validators: &'a [Validator],
}

impl fmt::Display for NetworkView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "🌌 ORBITCHAIN NETWORK VISUALIZATION")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDE))?;

        write_rings(f, self.status.total_orbits)?;

        writeln!(f)?;
        writeln!(f, "👥 VALIDATORS ({}):", self.validators.len())?;
        for v in self.validators {
            let status = if v.is_active() { "🟢" } else { "🔴" };
            writeln!(
                f,
                "   {} {} (position: {}°, validated: {})",
                status,
                v.name(),
                v.sector_position(),
                v.validated_count()
            )?;
        }

        let s = self.status;
        writeln!(f)?;
        writeln!(f, "📊 NETWORK STATISTICS:")?;
        writeln!(f, "   • Network name: {}", s.network_name)?;
        writeln!(f, "   • Total orbits: {}", s.total_orbits)?;
        writeln!(f, "   • Total transactions: {}", s.total_transactions)?;
        writeln!(f, "   • Pending transactions: {}", s.pending_transactions)?;
        writeln!(f, "   • Active validators: {}/{}", s.active_validators, s.total_validators)?;
        writeln!(f, "   • Current orbit: #{}", s.current_orbit)?;
        writeln!(f, "   • Consensus threshold: {}%", format_percent(s.consensus_threshold))?;
        writeln!(f, "   • Running for {:.1} seconds", s.uptime_seconds)
    }
}

fn write_rings(f: &mut fmt::Formatter<'_>, count: usize) -> fmt::Result {
    if count <= 1 {
        writeln!(f, "         ╭─────╮")?;
        writeln!(f, "         │  ●  │  ← Genesis")?;
        return writeln!(f, "         ╰─────╯");
    }

    if count <= MAX_DRAWN_RINGS {
        // Outermost (newest) ring first.
        for i in (0..count).rev() {
            let padding = "  ".repeat(i);
            let width = 7 + 4 * (count - i - 1);
            let border = "─".repeat(width);
            writeln!(f, "{}╭{}╮", padding, border)?;
            if i == 0 {
                let half = " ".repeat(width / 2);
                writeln!(f, "{}│{}●{}│  ← Orbit {}", padding, half, half, i)?;
            } else {
                writeln!(f, "{}│{}│  ← Orbit {}", padding, " ".repeat(width), i)?;
            }
            writeln!(f, "{}╰{}╯", padding, border)?;
        }
        return Ok(());
    }

    writeln!(f, "    ╭─────────────────────╮")?;
    writeln!(f, "    │    ╭─────────────╮   │")?;
    writeln!(f, "    │    │    ╭─────╮   │   │")?;
    writeln!(f, "    │    │    │  ●  │   │   │  ← Genesis + outer orbits")?;
    writeln!(f, "    │    │    ╰─────╯   │   │")?;
    writeln!(f, "    │    ╰─────────────╯   │")?;
    writeln!(f, "    ╰─────────────────────╯")?;
    writeln!(f, "    {} orbits in total!", count)
}

fn format_percent(ratio: f64) -> String {
    let pct = format!("{:.2}", ratio * 100.0);
    pct.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Detail of a single orbit, including its illustrative sector split.
pub struct OrbitDetailView<'a> {
    pub orbit: &'a OrbitSnapshot,
    pub validator_count: usize,
}

impl fmt::Display for OrbitDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.orbit;
        writeln!(f)?;
        writeln!(f, "🔍 ORBIT #{} DETAIL", o.sequence)?;
        writeln!(f, "{}", "=".repeat(RULE_NARROW))?;
        writeln!(f, "📅 Created: {}", o.created_at.format("%H:%M:%S"))?;
        writeln!(f, "🔒 State: {}", o.state)?;
        writeln!(f, "🔐 Orbital hash: {}", o.orbital_hash)?;
        writeln!(f, "🔗 Previous hash: {}", o.previous_hash)?;
        writeln!(f, "🌳 Merkle root: {}", o.merkle_root)?;
        writeln!(f, "📊 Transactions: {}/{}", o.transactions.len(), o.capacity)?;

        if o.transactions.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "📝 TRANSACTIONS:")?;
        for (i, tx) in o.transactions.iter().enumerate() {
            writeln!(f, "   {}. {} (ID: {})", i + 1, tx, tx.id())?;
            writeln!(f, "      Content tag: {}", tx.content_tag())?;
            writeln!(f, "      Time: {}", tx.timestamp().format("%H:%M:%S%.6f"))?;
        }

        if self.validator_count > 0 {
            writeln!(f)?;
            writeln!(f, "🧭 SECTORS:")?;
            for (index, txs) in o.sectorize(self.validator_count) {
                let ids: Vec<&str> = txs.iter().map(|tx| tx.id()).collect();
                writeln!(f, "   Validator {}: [{}]", index, ids.join(", "))?;
            }
        }
        Ok(())
    }
}

/// The pending queue, front first.
pub struct PendingView<'a> {
    pub pending: &'a [Transaction],
}

impl fmt::Display for PendingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⏳ PENDING ({}):", self.pending.len())?;
        for (i, tx) in self.pending.iter().enumerate() {
            writeln!(f, "   {}. {} [{}] (ID: {})", i + 1, tx, tx.tx_type(), tx.id())?;
        }
        Ok(())
    }
}
