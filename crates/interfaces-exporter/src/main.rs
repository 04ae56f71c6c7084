//! interfaces-exporter: packages Solidity interfaces for distribution.

mod cli;
mod config;
mod error;
mod manifest;
mod orchestrator;
mod output;

use clap::Parser;
use cli::Args;
use env_logger::Env;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG still takes precedence over --verbose
    let env = if args.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let output = args.output;
    match orchestrator::run(args).await {
        Ok(summary) => {
            print!("{}", summary.format(output));
            Ok(())
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
