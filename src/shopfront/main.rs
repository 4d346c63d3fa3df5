//! # Shopfront CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! The terminal plays the part of the browser. The query string argument is
//! the address bar, `browse` renders the product grid, and the refine
//! commands (`toggle`, `add`, `remove`, `clear`, `sort`, `price`) print the
//! next query string the way a filter click would push a new URL.
//!
//! ```text
//! $ shopfront browse "gender=men&sort=price_asc"
//! $ shopfront toggle color red --query "gender=men&sort=price_asc"
//! gender=men&color=red&sort=price_asc
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
