//! claw CLI - submit use cases to clawusecase.com.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Submit { args } => commands::submit::run(args, cli.verbose),
        Commands::Credential { token } => commands::credential::run(token, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
