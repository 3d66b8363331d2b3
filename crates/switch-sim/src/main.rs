use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    sample::{self, SampleArgs},
    simple_probability::{self, SimpleProbabilityArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "switch-sim", about = "Switch-chain graph sampler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample one graph with a prescribed degree sequence and print its edges.
    Sample(SampleArgs),
    /// Estimate how often regular uniform bipartite graphs are H-simple.
    SimpleProbability(SimpleProbabilityArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Sample(args) => sample::run(&args),
        Command::SimpleProbability(args) => simple_probability::run(&args),
    };
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "command failed");
    }
    outcome
}
