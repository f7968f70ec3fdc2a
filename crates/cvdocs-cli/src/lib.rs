pub mod cli;
pub mod commands;
pub mod logging;

use clap::Parser;
use cli::Cvdocs;
use commands::handle_command;
use std::process;

/// Run the cvdocs CLI application
pub fn run_main() {
    let args = Cvdocs::parse();
    let result = handle_command(args.commands);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
