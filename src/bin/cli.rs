//! linekv CLI Client
//!
//! Command-line interface for interacting with linekv.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use linekv::Client;
use tracing_subscriber::{fmt, EnvFilter};

/// linekv CLI
#[derive(Parser, Debug)]
#[command(name = "linekv-cli")]
#[command(about = "CLI for the linekv key-value store")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },

    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Delete a key
    #[command(alias = "del")]
    Delete {
        /// The key to delete
        key: String,
    },

    /// Check whether a key exists
    Exists {
        /// The key to check
        key: String,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> linekv::Result<ExitCode> {
    let mut client = Client::connect(args.server.as_str())?;

    match args.command {
        Commands::Set { key, value } => {
            client.set(key.as_bytes(), value.join(" ").as_bytes())?;
            println!("OK");
        }
        Commands::Get { key } => match client.get(key.as_bytes())? {
            Some(value) => println!("{}", String::from_utf8_lossy(&value)),
            None => {
                println!("(not found)");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Delete { key } => {
            if client.delete(key.as_bytes())? {
                println!("OK");
            } else {
                println!("(not found)");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Exists { key } => {
            println!("{}", client.exists(key.as_bytes())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
