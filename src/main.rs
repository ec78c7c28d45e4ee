mod cli;
mod config;
mod engine;
mod models;

use clap::Parser;
use log::{debug, error};
use std::process;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::engine::Runner;

fn init_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter(config.verbose))),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    let config = Config::from_cli(Cli::parse());
    init_logging(&config);

    let mut runner = Runner::new(config.verbose);
    match runner
        .execute(config.input.as_deref(), config.output.as_deref())
        .await
    {
        Ok(()) => debug!("processed {} item(s)", runner.processed_count()),
        Err(err) => {
            error!("Error ({:?}): {err}", err.kind());
            process::exit(1);
        }
    }
}
