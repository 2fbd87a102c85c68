mod cli;

use clap::{Parser, Subcommand};
use hostguard_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hostguard",
    version,
    about = "Hostguard: canonical-host redirect policy engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a policy file and exit
    Check {
        /// Path to the policy file
        #[arg(default_value = "hostguard.toml")]
        config: PathBuf,

        /// Plain single-line errors (no colors, no hints)
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Evaluate one request against a policy and print the decision
    Eval {
        /// Path to the policy file
        #[arg(long, default_value = "hostguard.toml")]
        config: PathBuf,

        /// Request URL, e.g. "http://203.0.113.5/old-page?redirect=key"
        url: String,
    },

    /// Write a commented starter policy file
    Init {
        /// Path to the policy file to create
        #[arg(default_value = "hostguard.toml")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { config, plain } => cli::check(config, plain),
        Command::Eval { config, url } => {
            init_logging();
            cli::eval(config, &url)
        }
        Command::Init { config } => cli::init(config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
