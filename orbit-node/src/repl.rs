use std::io::Write;

use rand::Rng;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use orbit_common::error::Result;
use orbit_common::transactions::Transaction;
use orbit_consensus::Validator;
use orbit_ledger::SharedLedger;

use crate::demo::write_network;
use crate::render::{OrbitDetailView, PendingView};

pub const HELP: &str = "\
📝 Commands:
   • tx <sender> <receiver> <data...>  - submit a transaction
   • status                           - show network state
   • orbit <number>                   - orbit detail
   • validator <name>                 - add a validator
   • toggle <name>                    - activate/deactivate a validator
   • seal                             - seal the current orbit now
   • pending                          - list pending transactions
   • verify                           - audit the hash chain
   • help                             - this list
   • quit | exit                      - leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tx { sender: String, receiver: String, payload: String },
    Status,
    Orbit(usize),
    Validator(String),
    Toggle(String),
    Seal,
    Pending,
    Verify,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Enter an orbit number, got {0:?}")]
    InvalidOrbit(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "status" => Command::Status,
        "seal" => Command::Seal,
        "pending" => Command::Pending,
        "verify" => Command::Verify,
        "help" => Command::Help,
        "tx" => match rest {
            [sender, receiver, payload @ ..] if !payload.is_empty() => Command::Tx {
                sender: sender.to_string(),
                receiver: receiver.to_string(),
                payload: payload.join(" "),
            },
            _ => return Err(ParseError::Usage("tx <sender> <receiver> <data...>")),
        },
        "orbit" => match rest.first() {
            Some(n) => Command::Orbit(n.parse().map_err(|_| ParseError::InvalidOrbit(n.to_string()))?),
            None => return Err(ParseError::Usage("orbit <number>")),
        },
        "validator" => match rest.first() {
            Some(name) => Command::Validator(name.to_string()),
            None => return Err(ParseError::Usage("validator <name>")),
        },
        "toggle" => match rest.first() {
            Some(name) => Command::Toggle(name.to_string()),
            None => return Err(ParseError::Usage("toggle <name>")),
        },
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the ledger. Ledger-level failures (unknown
/// orbit, duplicate validator...) are reported to `out`, not returned.
pub async fn execute<W: Write>(ledger: &SharedLedger, command: Command, out: &mut W) -> Result<Flow> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Status => write_network(ledger, out).await?,
        Command::Tx { sender, receiver, payload } => {
            let tx = Transaction::create(sender, receiver, payload);
            writeln!(out, "📤 Transaction submitted: {}", tx)?;
            let report = ledger.submit_and_process(tx).await?;
            if report.rejected > 0 {
                writeln!(out, "⏳ {} transaction(s) waiting for consensus", report.rejected)?;
            }
            write_network(ledger, out).await?;
        }
        Command::Orbit(index) => match ledger.orbit_detail(index).await {
            Ok(orbit) => {
                let validator_count = ledger.status().await.total_validators;
                write!(out, "{}", OrbitDetailView { orbit: &orbit, validator_count })?;
            }
            Err(_) => writeln!(out, "❌ Orbit #{} does not exist!", index)?,
        },
        Command::Validator(name) => {
            let stake = rand::thread_rng().gen_range(50..=200) as f64;
            match ledger.register_validator(Validator::new(name.clone(), stake)).await {
                Ok(()) => writeln!(out, "✅ Validator {} added (stake: {})", name, stake)?,
                Err(e) => writeln!(out, "❌ {}", e)?,
            }
        }
        Command::Toggle(name) => match ledger.toggle_validator(&name).await {
            Ok(active) => {
                let state = if active { "activated" } else { "deactivated" };
                writeln!(out, "🔁 Validator {} {}", name, state)?;
            }
            Err(_) => writeln!(out, "❌ Unknown validator: {}", name)?,
        },
        Command::Seal => match ledger.seal_current_orbit().await {
            Ok(hash) => writeln!(out, "🔒 Current orbit sealed (hash: {})", hash)?,
            Err(e) => writeln!(out, "❌ {}", e)?,
        },
        Command::Pending => {
            let pending = ledger.pending().await;
            write!(out, "{}", PendingView { pending: &pending })?;
        }
        Command::Verify => match ledger.verify_chain().await {
            Ok(()) => writeln!(out, "✅ Chain verified")?,
            Err(e) => writeln!(out, "❌ {}", e)?,
        },
    }
    Ok(Flow::Continue)
}

/// Reads commands from `input` until `quit` or end of input.
pub async fn run_interactive<R, W>(ledger: &SharedLedger, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "🎮 INTERACTIVE ORBITCHAIN NETWORK")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "\n🌌 Your network is ready!")?;
    write_network(ledger, out).await?;
    writeln!(out, "\n{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(out, "\n➤ Command: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "❌ {}", e)?;
                continue;
            }
        };

        if execute(ledger, command, out).await? == Flow::Quit {
            break;
        }
    }

    writeln!(out, "\n🎉 Thanks for testing OrbitChain!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::setup::build_network;

    #[test]
    fn test_parse_tx_joins_payload() {
        let cmd = parse_command("tx Alice Bob 10 Orbit Coins").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Tx {
                sender: "Alice".into(),
                receiver: "Bob".into(),
                payload: "10 Orbit Coins".into(),
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(parse_command("STATUS").unwrap(), Some(Command::Status));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("orbit 3").unwrap(), Some(Command::Orbit(3)));
        assert_eq!(parse_command("validator Eve").unwrap(), Some(Command::Validator("Eve".into())));
        assert_eq!(parse_command("toggle Eve").unwrap(), Some(Command::Toggle("Eve".into())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("tx Alice Bob"), Err(ParseError::Usage("tx <sender> <receiver> <data...>")));
        assert_eq!(parse_command("orbit x"), Err(ParseError::InvalidOrbit("x".into())));
        assert_eq!(parse_command("orbit"), Err(ParseError::Usage("orbit <number>")));
        assert_eq!(parse_command("launch"), Err(ParseError::Unknown("launch".into())));
    }

    #[tokio::test]
    async fn test_execute_orbit_out_of_range() {
        let config = Config::default();
        let ledger = build_network(&config, &config.interactive).await.unwrap();

        let mut out = Vec::new();
        let flow = execute(&ledger, Command::Orbit(9), &mut out).await.unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(String::from_utf8(out).unwrap().contains("Orbit #9 does not exist!"));
    }

    #[tokio::test]
    async fn test_execute_toggle_and_duplicate_validator() {
        let config = Config::default();
        let ledger = build_network(&config, &config.interactive).await.unwrap();

        let mut out = Vec::new();
        execute(&ledger, Command::Toggle("Validator-1".into()), &mut out).await.unwrap();
        assert_eq!(ledger.status().await.active_validators, 1);

        execute(&ledger, Command::Toggle("Ghost".into()), &mut out).await.unwrap();
        execute(&ledger, Command::Validator("Validator-2".into()), &mut out).await.unwrap();
        assert_eq!(ledger.status().await.total_validators, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Validator Validator-1 deactivated"));
        assert!(text.contains("Unknown validator: Ghost"));
        assert!(text.contains("already registered"));
    }

    #[tokio::test]
    async fn test_interactive_session() {
        let config = Config::default();
        let ledger = build_network(&config, &config.interactive).await.unwrap();

        let script = "tx Alice Bob coffee\n\nbogus\ntx  Bob hi\nseal\norbit 1\nverify\nquit\ntx Never Seen here\n";
        let mut out = Vec::new();
        run_interactive(&ledger, script.as_bytes(), &mut out).await.unwrap();

        let status = ledger.status().await;
        assert_eq!(status.total_transactions, 2);
        assert_eq!(status.pending_transactions, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command: bogus"));
        assert!(text.contains("Usage: tx"));
        assert!(text.contains("Current orbit sealed"));
        assert!(text.contains("State: SEALED"));
        assert!(text.contains("Chain verified"));
        assert!(text.contains("Thanks for testing OrbitChain!"));
        assert!(!text.contains("Never"));
    }
}
