//! `vqt order` commands - the order lifecycle
//!
//! `add` is the only gate between resolution and the persisted order: a
//! composite whose motor did not resolve is refused here, while a missing
//! transmission only warns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::common::{
    load_project_index, price_selection, print_part_status, SelectionArgs,
};
use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Project};
use crate::order::export::{mailto_url, render_body, render_subject, ExportInfo};
use crate::order::{LineItem, Order};
use crate::pricing::PricingContext;

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Price a selection and append it to the order
    Add(AddArgs),

    /// List order line items
    List,

    /// Show per-currency totals
    Totals,

    /// Remove all line items
    Clear(ClearArgs),

    /// Render the order as an email draft
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(clap::Args, Debug)]
pub struct ClearArgs {
    /// Clear without confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Print a mailto URL instead of the plain-text draft
    #[arg(long)]
    pub mailto: bool,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(cmd: OrderCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        OrderCommands::Add(args) => run_add(args, global),
        OrderCommands::List => run_list(global),
        OrderCommands::Totals => run_totals(global),
        OrderCommands::Clear(args) => run_clear(args),
        OrderCommands::Export(args) => run_export(args),
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let (project, config, index) = load_project_index(global)?;
    if index.is_empty() {
        println!("Catalog is empty. Nothing to add.");
        return Ok(());
    }

    let ctx = args
        .selection
        .list
        .map(PricingContext::new)
        .unwrap_or_else(|| config.pricing_context());
    let selection = price_selection(&index, &ctx, &args.selection)?;

    if let Some(result) = &selection.composite {
        print_part_status(result);
        if !result.is_committable() {
            return Err(miette::miette!(
                "Motor not found for the requested HP/phase - '{}' was not added to the order",
                selection.model
            ));
        }
    }

    let mut order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;
    order.add(LineItem::new(
        &selection.model,
        &selection.description,
        &selection.currency,
        &selection.breakdown,
    ));
    order.save(&project).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added ({}) {} - ${:.2} {}",
        style("✓").green(),
        selection.breakdown.quantity,
        style(&selection.model).cyan(),
        selection.breakdown.line_sell,
        selection.currency
    );
    if !global.quiet {
        println!(
            "   Order now has {} line item(s). Use {} to review.",
            style(order.len()).cyan(),
            style("vqt order list").yellow()
        );
    }
    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;

    if order.is_empty() {
        println!("The order is empty.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(order.items()).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&order.items()).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("quantity,model,description,unit_sell,line_sell,line_cost,line_profit,currency");
            for item in order.items() {
                println!(
                    "{},{},{},{:.2},{:.2},{:.2},{:.2},{}",
                    item.quantity,
                    escape_csv(&item.model),
                    escape_csv(&item.description),
                    item.unit_sell,
                    item.line_sell,
                    item.line_cost,
                    item.line_profit,
                    item.currency
                );
            }
        }
        OutputFormat::Md => {
            println!("| # | Qty | Model | Description | Unit | Total | Profit | Currency |");
            println!("|---|---|---|---|---|---|---|---|");
            for (i, item) in order.items().iter().enumerate() {
                println!(
                    "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {} |",
                    i + 1,
                    item.quantity,
                    item.model,
                    item.description.replace('|', "\\|"),
                    item.unit_sell,
                    item.line_sell,
                    item.line_profit,
                    item.currency
                );
            }
        }
        _ => {
            println!(
                "{:<4} {:<5} {:<12} {:<44} {:>12} {:>12} {:<4}",
                style("#").bold().dim(),
                style("QTY").bold(),
                style("MODEL").bold(),
                style("DESCRIPTION").bold(),
                style("TOTAL").bold(),
                style("PROFIT").bold(),
                style("CUR").bold()
            );
            println!("{}", "-".repeat(98));
            for (i, item) in order.items().iter().enumerate() {
                println!(
                    "{:<4} {:<5} {:<12} {:<44} {:>12} {:>12} {:<4}",
                    i + 1,
                    item.quantity,
                    style(truncate_str(&item.model, 10)).cyan(),
                    truncate_str(&item.description, 42),
                    format!("{:.2}", item.line_sell),
                    format!("{:.2}", item.line_profit),
                    item.currency
                );
            }
            if !global.quiet {
                println!();
                println!(
                    "{} line item(s). Use {} for per-currency totals.",
                    style(order.len()).cyan(),
                    style("vqt order totals").yellow()
                );
            }
        }
    }
    Ok(())
}

fn run_totals(global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;

    if order.is_empty() {
        println!("The order is empty.");
        return Ok(());
    }
    let totals = order.totals_by_currency();

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&totals).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&totals).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("currency,sell,cost,profit");
            for (currency, bucket) in &totals {
                println!(
                    "{},{:.2},{:.2},{:.2}",
                    currency, bucket.sell, bucket.cost, bucket.profit
                );
            }
        }
        format => {
            let mut builder = Builder::default();
            builder.push_record(["CURRENCY", "SELL", "COST", "PROFIT"]);
            for (currency, bucket) in &totals {
                builder.push_record([
                    currency.clone(),
                    format!("{:.2}", bucket.sell),
                    format!("{:.2}", bucket.cost),
                    format!("{:.2}", bucket.profit),
                ]);
            }
            let mut table = builder.build();
            if format == OutputFormat::Md {
                table.with(Style::markdown());
            } else {
                table.with(Style::sharp());
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_clear(args: ClearArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let mut order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;

    if order.is_empty() {
        println!("The order is already empty.");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove all {} line item(s)?", order.len()))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Order left untouched.");
            return Ok(());
        }
    }

    let removed = order.len();
    order.clear();
    order.save(&project).map_err(|e| miette::miette!("{}", e))?;

    println!("{} Cleared {} line item(s)", style("✓").green(), removed);
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();
    let order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;

    if order.is_empty() {
        println!("The order is empty. Nothing to export.");
        return Ok(());
    }

    let info = ExportInfo {
        project_name: config.project_name(),
        city: config.city(),
        phone: config.phone(),
        price_list: config.price_list().label(),
    };
    let subject = render_subject(&info);
    let body = render_body(&order, &info);

    let content = if args.mailto {
        format!("{}\n", mailto_url(config.recipient(), &subject, &body))
    } else {
        format!("Subject: {}\n\n{}", subject, body)
    };

    match args.output {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Draft written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
