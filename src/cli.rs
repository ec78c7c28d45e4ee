use clap::Parser;
use std::ffi::OsString;

/// Wrap input text in a timestamped result record and emit it as JSON.
#[derive(Debug, Parser)]
#[command(name = "statechannel", version, about)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Input file path (defaults to built-in sample data)
    #[arg(long, value_name = "PATH", value_parser = clap::value_parser!(OsString))]
    pub input: Option<OsString>,

    /// Output file path (defaults to stdout)
    #[arg(long, value_name = "PATH", value_parser = clap::value_parser!(OsString))]
    pub output: Option<OsString>,
}
