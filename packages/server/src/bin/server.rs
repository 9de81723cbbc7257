//! Real-time messaging server for the municipal complaint portal.
//!
//! Serves the WebSocket endpoint at `/chat` and the HTTP API under `/api`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin madoguchi-server
//! ```

use clap::Parser;

use madoguchi_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(about = "Municipal complaint portal real-time server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = madoguchi_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
