use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a batch of rolls and report statistics and probabilities.
    Roll(cmd::roll::RollArgs),
    /// Walk a small fixed batch through the twisted-sum mechanic.
    Demo(cmd::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Roll(args) => cmd::roll::run(args),
        Commands::Demo(args) => cmd::demo::run(args),
    };

    if let Err(e) = outcome {
        error!("{e}");
        process::exit(1);
    }
}
