//! sj - command-line front end for simplejson.
//!
//! Loads JSON files and pretty-prints, validates, or inspects them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use simplejson::load_file;

#[derive(Parser)]
#[command(name = "sj")]
#[command(about = "Parse, validate, and pretty-print JSON files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print a JSON file
    Fmt {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Check that a JSON file parses
    Check {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// List the top-level object keys of a JSON file
    Keys {
        /// Path to the JSON file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { path } => match load_file(&path) {
            Ok(value) => {
                println!("{}", value.dump());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Commands::Check { path } => match load_file(&path) {
            Ok(_) => {
                println!("OK");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Commands::Keys { path } => match load_file(&path) {
            Ok(value) => {
                for key in value.dump_keys() {
                    println!("{key}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}
