use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbit-node")]
#[command(about = "OrbitChain ledger node: demo network and interactive shell")]
pub struct Args {
    /// JSON config file, written with defaults when missing
    #[arg(long, value_name = "FILE", default_value = "orbit.json")]
    pub config: PathBuf,

    /// Directory for the ledger audit log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the scripted demo network
    Demo {
        /// Pause between transactions, overrides the config value
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },
    /// Start an interactive network shell
    Interactive,
}
