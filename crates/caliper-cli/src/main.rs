//! Caliper CLI - validation, comparison and envelope tooling for Caliper JSON-LD.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, compare, envelope, validate};

#[derive(Parser)]
#[command(name = "caliper")]
#[command(about = "Caliper JSON-LD validation, comparison and envelope CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Rebuild every node of a document or envelope and report verdicts
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two JSON documents
    Compare {
        /// Expected JSON file
        expected: String,
        /// Actual JSON file
        actual: String,
        /// Compare canonical forms instead of exact member order
        #[arg(long)]
        ignore_order: bool,
    },
    /// Wrap nodes in an envelope
    Envelope {
        /// Input JSON files holding a node or an array of nodes (or stdin if none)
        inputs: Vec<String>,
        /// Sensor IRI (overrides the configured one)
        #[arg(long)]
        sensor: Option<String>,
        /// Send time (default: now)
        #[arg(long)]
        send_time: Option<String>,
        /// Sensor configuration file (TOML)
        #[arg(long)]
        config: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CALIPER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Validate { input, json } => validate::run(input, json),
        Commands::Compare {
            expected,
            actual,
            ignore_order,
        } => compare::run(expected, actual, ignore_order),
        Commands::Envelope {
            inputs,
            sensor,
            send_time,
            config,
        } => envelope::run(envelope::Options {
            inputs,
            sensor,
            send_time,
            config,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
