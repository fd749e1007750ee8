use crate::cli::input::{parse_id, parse_name, parse_price, parse_text};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockpile::model::ProductId;

#[derive(Parser, Debug)]
#[command(name = "stockpile")]
#[command(version, about = "Inventory manager for a comma-separated product file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use instead of the configured data-file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default)
    #[command(alias = "m")]
    Menu,

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show one product
    #[command(alias = "v")]
    View {
        /// Product id (e.g. 3 or #3)
        #[arg(value_parser = parse_id)]
        id: ProductId,
    },

    /// Add a product; its id is assigned automatically
    #[command(alias = "a")]
    Add {
        #[arg(long, value_parser = parse_name)]
        name: String,

        #[arg(long, default_value = "", value_parser = parse_text)]
        desc: String,

        #[arg(long, value_parser = parse_price)]
        price: f64,

        #[arg(long, default_value_t = 0)]
        quantity: u32,
    },

    /// Edit a product; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Product id (e.g. 3 or #3)
        #[arg(value_parser = parse_id)]
        id: ProductId,

        #[arg(long, value_parser = parse_name)]
        name: Option<String>,

        #[arg(long, value_parser = parse_text)]
        desc: Option<String>,

        #[arg(long, value_parser = parse_price)]
        price: Option<f64>,

        #[arg(long)]
        quantity: Option<u32>,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove {
        /// Product id (e.g. 3 or #3)
        #[arg(value_parser = parse_id)]
        id: ProductId,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file or currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
