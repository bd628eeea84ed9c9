//! RosterDB Binary
//!
//! Starts the interactive menu over stdin/stdout.

use clap::Parser;
use rosterdb::{Config, Menu, RosterStore};
use tracing_subscriber::{fmt, EnvFilter};

/// RosterDB
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "Interactive student roster manager backed by a flat text file")]
#[command(version)]
struct Args {
    /// Data file path
    #[arg(short, long, default_value = "data.csv")]
    data_file: String,

    /// Maximum number of records (soft limit)
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Graduation credit threshold (inclusive)
    #[arg(short, long, default_value = "400")]
    graduation_credits: u32,
}

fn main() {
    // Initialize tracing/logging on stderr so the menu owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosterdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("RosterDB v{}", rosterdb::VERSION);
    tracing::info!("Data file: {}", args.data_file);

    // Build config from args
    let config = Config::builder()
        .data_path(&args.data_file)
        .capacity(args.capacity)
        .graduation_credits(args.graduation_credits)
        .build();

    // Open the store. A load failure is reported but not fatal: the menu
    // starts over an empty roster.
    let mut store = match RosterStore::open(config.clone()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error while loading file: {e}");
            RosterStore::new(config)
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(&mut store, stdin.lock(), stdout.lock());

    if let Err(e) = menu.run() {
        tracing::error!("Menu loop failed: {e}");
        std::process::exit(1);
    }
}
