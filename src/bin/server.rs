//! linekv Server Binary
//!
//! Starts the TCP server for linekv.

use clap::Parser;
use linekv::config::DEFAULT_PORT;
use linekv::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// linekv Server
#[derive(Parser, Debug)]
#[command(name = "linekv-server")]
#[command(about = "In-memory key-value store with a line-based TCP protocol")]
#[command(version)]
struct Args {
    /// Interface to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bytes requested from the socket per read
    #[arg(short, long, default_value = "4096")]
    buffer_size: usize,

    /// Read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linekv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("linekv Server v{}", linekv::VERSION);

    // Build config from args
    let config = Config::builder()
        .listen_addr(format!("{}:{}", args.host, args.port))
        .read_buffer_size(args.buffer_size)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    // Bind failure is fatal
    let mut server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
