//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    catalog::CatalogCommands,
    completions::CompletionsArgs,
    config::ConfigCommands,
    init::InitArgs,
    order::OrderCommands,
    price::PriceArgs,
    quote::QuoteArgs,
};

#[derive(Parser)]
#[command(name = "vqt")]
#[command(author, version, about = "Ventilation Quoting Toolkit")]
#[command(long_about = "A CLI for quoting ventilation equipment from a product catalog: standalone models priced directly, composite fan units assembled from a base row plus a motor and a transmission, and an order that exports as an email draft.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new VQT project
    Init(InitArgs),

    /// Browse the product catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Price a model without touching the order
    Price(PriceArgs),

    /// Interactive guided quoting session
    Quote(QuoteArgs),

    /// Manage the in-progress order
    #[command(subcommand)]
    Order(OrderCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for lists, pretty for show)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
