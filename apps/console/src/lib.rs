//! # Folio Console Library
//!
//! Core library for the Folio POS operator console.
//! This is the entry point that wires up logging, the data directory, the
//! store, and the prompt loop.
//!
//! ## Module Organization
//! ```text
//! folio_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── Session state (Store + Cart)
//! ├── config.rs       ◄─── Console configuration
//! ├── repl.rs         ◄─── Prompt loop and tokenizer
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── inventory.rs◄─── Catalog commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── sales.rs    ◄─── Checkout and history
//! └── error.rs        ◄─── Status error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod session;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use folio_store::{Store, StoreConfig};
use session::Session;

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Data Directory ─────────────────────────────────────────► │
/// │     • FOLIO_DATA_DIR override, else the platform app-data dir           │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • config.json in the data directory, FOLIO_STORE_NAME override      │
/// │                                                                         │
/// │  4. Open the Store ───────────────────────────────────────────────────► │
/// │     • Both tables created with headers if missing                       │
/// │                                                                         │
/// │  5. Run the Prompt Loop ──────────────────────────────────────────────► │
/// │     • One Session (store + empty cart) until quit/EOF                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let data_dir = resolve_data_dir()?;
    info!(data_dir = %data_dir.display(), "starting Folio POS console");

    let config = ConsoleConfig::load(&data_dir);
    let store = Store::open(StoreConfig::new(&data_dir).with_store_name(&config.store_name))?;

    let mut session = Session::new(store);
    repl::run(&mut session)?;

    info!("console session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they don't interleave with prompt output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=folio=trace` - Show trace for folio crates only
/// - Default: INFO level, DEBUG for folio crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio_store=debug,folio_console=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the data directory based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.folio.pos`
/// - **Windows**: `%APPDATA%\folio\pos\data`
/// - **Linux**: `~/.local/share/folio-pos`
///
/// ## Development Override
/// Set `FOLIO_DATA_DIR` to use a custom directory.
fn resolve_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("FOLIO_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "folio", "pos")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
