use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use orbit_node::{
    cli::{Args, Commands},
    demo::run_demo,
    repl::run_interactive,
    setup::{build_network, ensure_config, init_logging},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Dropping the guard flushes the file log.
    let _guard = init_logging(args.log_dir.as_deref())?;

    info!("--- STARTING ORBITCHAIN NODE ---");
    info!("Config: {}", args.config.display());

    let config = match ensure_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    let mut stdout = std::io::stdout();
    match args.command.unwrap_or(Commands::Demo { delay_ms: None }) {
        Commands::Demo { delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.demo_delay_ms));
            let ledger = build_network(&config, &config.demo).await?;
            run_demo(&ledger, delay, &mut stdout).await?;
        }
        Commands::Interactive => {
            let ledger = build_network(&config, &config.interactive).await?;
            let stdin = BufReader::new(tokio::io::stdin());
            run_interactive(&ledger, stdin, &mut stdout).await?;
        }
    }

    info!("Session finished");
    Ok(())
}
