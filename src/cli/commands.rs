use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nichescout", about = "Product research: sourcing, profitability and ranking")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find and rank products for a niche
    Analyze {
        /// Free-text niche, e.g. "gadgets"
        niche: String,
        /// Markup factor applied to total cost (default from config, 3.0)
        #[arg(long)]
        markup: Option<f64>,
        /// Sort by margin, profit, rating or cost
        #[arg(long)]
        sort: Option<String>,
        /// Fail when there is nothing to rank
        #[arg(long)]
        strict: bool,
        /// Drop products below this margin percent
        #[arg(long)]
        min_margin: Option<f64>,
        /// Return at most this many products
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Compute profitability for a single product
    Profit {
        /// Unit price paid to the supplier
        #[arg(allow_negative_numbers = true)]
        price: f64,
        /// Shipping cost per unit
        #[arg(allow_negative_numbers = true)]
        shipping: f64,
        #[arg(long)]
        markup: Option<f64>,
    },
    /// Print the synthetic fallback catalog for a niche
    Fallback { niche: String },
}
