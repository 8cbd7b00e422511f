use std::time::Duration;

use orbit_node::demo::run_demo;
use orbit_node::repl::run_interactive;
use orbit_node::setup::{build_network, ensure_config};

#[tokio::test]
async fn demo_from_fresh_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orbit.json");

    let mut config = ensure_config(&path).unwrap();
    config.orbit_capacity = 4;
    config.save_to_file(&path).unwrap();
    let config = ensure_config(&path).unwrap();

    let ledger = build_network(&config, &config.demo).await.unwrap();
    let mut out = Vec::new();
    run_demo(&ledger, Duration::ZERO, &mut out).await.unwrap();

    // genesis + 4 + 4 + 2
    let status = ledger.status().await;
    assert_eq!(status.total_orbits, 4);
    assert_eq!(status.total_transactions, 11);
    ledger.verify_chain().await.unwrap();
}

#[tokio::test]
async fn interactive_with_queue_waits_for_validators() {
    let config = orbit_node::Config::default();
    let ledger = build_network(&config, &config.interactive).await.unwrap();

    let script = "toggle Validator-1\ntoggle Validator-2\ntx Alice Bob stuck\npending\ntoggle Validator-1\ntx Carol Dave go\nstatus\nquit\n";
    let mut out = Vec::new();
    run_interactive(&ledger, script.as_bytes(), &mut out).await.unwrap();

    // The queued transaction is retried once a validator is back.
    let status = ledger.status().await;
    assert_eq!(status.pending_transactions, 0);
    assert_eq!(status.total_transactions, 3);
    assert_eq!(status.active_validators, 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("PENDING (1)"));
    assert!(text.contains("Alice → Bob: stuck"));
    assert!(text.contains("waiting for consensus"));
}
