//! # Folio Console Entry Point
//!
//! Thin binary wrapper; the actual setup lives in lib.rs for testability.

fn main() {
    if let Err(err) = folio_console::run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
