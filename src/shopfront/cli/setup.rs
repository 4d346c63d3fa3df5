use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopfront", version)]
#[command(about = "Browse a product catalog with URL-style filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding products.json, cart.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching a query string (e.g. "gender=men&sort=newest")
    #[command(alias = "ls")]
    Browse {
        /// Query string, with or without the leading '?'
        #[arg(default_value = "")]
        query: String,
    },

    /// Select a filter value, or deselect it if already selected
    #[command(alias = "t")]
    Toggle {
        /// Filter key (gender, size, color, minPrice, maxPrice, sort, page)
        key: String,
        value: String,
        /// Current query string
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Select a filter value
    Add {
        key: String,
        value: String,
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Deselect a filter value, or the whole key when no value is given
    #[command(alias = "rm")]
    Remove {
        key: String,
        value: Option<String>,
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Clear every filter
    Clear {
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Change the ordering (featured, newest, price_asc, price_desc)
    Sort {
        sort: String,
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Select a price range
    Price {
        min: String,
        max: String,
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show the available filter options
    Options,

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartCommands>,
    },

    /// Import products from JSON files or directories
    Import {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Load the demo catalog
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartCommands {
    /// Show the cart
    Show,

    /// Add one unit of a product (name, id or id prefix)
    Add { product: String },

    /// Remove a product's line
    #[command(alias = "rm")]
    Remove { product: String },

    /// Empty the cart
    Clear,
}
