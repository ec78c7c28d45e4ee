use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_INPUT: &str = "Sample data for processing";
pub const SUCCESS_MESSAGE: &str = "Data processed successfully";

pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Paths are passed through as given; `Runner` decides what an empty one means.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub verbose: bool,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            verbose: cli.verbose,
            input: cli.input.map(PathBuf::from),
            output: cli.output.map(PathBuf::from),
        }
    }
}
