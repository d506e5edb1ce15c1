//! `vqt price` command - price a selection without touching the order

use miette::{IntoDiagnostic, Result};

use crate::cli::commands::common::{
    load_project_index, price_selection, print_breakdown, SelectionArgs,
};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::pricing::PricingContext;

#[derive(clap::Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run(args: PriceArgs, global: &GlobalOpts) -> Result<()> {
    let (_project, config, index) = load_project_index(global)?;
    if index.is_empty() {
        println!("Catalog is empty. Nothing to price.");
        return Ok(());
    }

    let ctx = args
        .selection
        .list
        .map(PricingContext::new)
        .unwrap_or_else(|| config.pricing_context());
    let selection = price_selection(&index, &ctx, &args.selection)?;

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&selection).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&selection).into_diagnostic()?);
        }
        _ => print_breakdown(&selection),
    }
    Ok(())
}
