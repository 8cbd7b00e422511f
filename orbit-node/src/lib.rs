pub mod cli;
pub mod config;
pub mod demo;
pub mod render;
pub mod repl;
pub mod setup;

pub use config::Config;
