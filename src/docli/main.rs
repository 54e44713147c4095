//! The `docli` binary. Argument parsing and dispatch live in `cli/`; this file
//! only runs it and turns an error into a message and exit status.

use colored::*;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
