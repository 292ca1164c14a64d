// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atrio - site backend for the AI Solutions marketing website.
//!
//! This is the binary entry point for the Atrio server.

use clap::{Parser, Subcommand};

mod doctor;
mod serve;
mod shutdown;

/// Atrio - site backend for the AI Solutions marketing website.
#[derive(Parser, Debug)]
#[command(name = "atrio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Atrio web server.
    Serve,
    /// Run diagnostic checks against the Atrio environment.
    Doctor {
        /// Run additional intensive checks.
        #[arg(long)]
        deep: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match atrio_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            atrio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Doctor { deep, plain }) => {
            doctor::run_doctor(&config, deep, plain).await
        }
        None => {
            println!("atrio: use --help for available commands");
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
