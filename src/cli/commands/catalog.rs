//! `vqt catalog` commands - browse the indexed catalog

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog::hp::format_hp;
use crate::catalog::{CatalogRow, PriceColumn};
use crate::cli::commands::common::load_project_index;
use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List selectable categories
    Categories,

    /// List models within a category
    Models(ModelsArgs),

    /// Show the authoritative row for a model
    Show(ShowArgs),

    /// List indexed motor components with their extracted HP
    Motors,

    /// List indexed transmission components with their parsed RPM ranges
    Transmissions,
}

#[derive(clap::Args, Debug)]
pub struct ModelsArgs {
    /// Category to list
    pub category: String,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Category of the model
    pub category: String,

    /// Model designation
    pub model: String,
}

pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::Categories => run_categories(global),
        CatalogCommands::Models(args) => run_models(args, global),
        CatalogCommands::Show(args) => run_show(args, global),
        CatalogCommands::Motors => run_motors(global),
        CatalogCommands::Transmissions => run_transmissions(global),
    }
}

fn run_categories(global: &GlobalOpts) -> Result<()> {
    let (_project, _config, index) = load_project_index(global)?;

    let categories = index.categories();
    if categories.is_empty() {
        println!("Catalog is empty. Nothing to select.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&categories).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&categories).into_diagnostic()?);
        }
        _ => {
            for category in &categories {
                println!("{}", category);
            }
            if !global.quiet {
                println!();
                println!("{} categor(ies) found.", style(categories.len()).cyan());
            }
        }
    }
    Ok(())
}

fn run_models(args: ModelsArgs, global: &GlobalOpts) -> Result<()> {
    let (_project, _config, index) = load_project_index(global)?;

    let models = index.models(&args.category);
    if models.is_empty() {
        println!("No models in category '{}'.", args.category);
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&models).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&models).into_diagnostic()?);
        }
        _ => {
            for model in &models {
                println!("{}", model);
            }
            if !global.quiet {
                println!();
                println!(
                    "{} model(s) in {}.",
                    style(models.len()).cyan(),
                    style(&args.category).yellow()
                );
            }
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (_project, _config, index) = load_project_index(global)?;

    let row = index.find(&args.category, &args.model).ok_or_else(|| {
        miette::miette!(
            "No model '{}' in category '{}'",
            args.model,
            args.category
        )
    })?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(row).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(row).into_diagnostic()?);
        }
        _ => print_row(row),
    }
    Ok(())
}

fn print_row(row: &CatalogRow) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Category").bold(), row.category);
    println!("{}: {}", style("Model").bold(), style(&row.model).cyan());
    println!("{}: {}", style("Description").bold(), row.product);
    println!("{}: {}", style("Currency").bold(), row.currency);
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Prices:").bold());
    for column in [
        PriceColumn::Lista,
        PriceColumn::Contratista,
        PriceColumn::Fabrica,
        PriceColumn::Publico,
    ] {
        match row.price(column) {
            Some(price) => println!("  {}: ${:.2}", column.label(), price),
            None => println!("  {}: {}", column.label(), style("-").dim()),
        }
    }
}

fn run_motors(global: &GlobalOpts) -> Result<()> {
    let (_project, _config, index) = load_project_index(global)?;

    let motors = index.motors();
    if motors.is_empty() {
        println!("No motor components in the catalog.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&motors).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("hp,category,model,product");
            for motor in motors {
                println!(
                    "{},{},{},{}",
                    format_hp(motor.hp),
                    escape_csv(&motor.row.category),
                    escape_csv(&motor.row.model),
                    escape_csv(&motor.row.product)
                );
            }
        }
        _ => {
            println!(
                "{:<8} {:<12} {:<12} {:<40}",
                style("HP").bold(),
                style("PHASE").bold(),
                style("MODEL").bold(),
                style("PRODUCT").bold()
            );
            println!("{}", "-".repeat(74));
            for motor in motors {
                // 0 marks a row whose text had no parseable HP
                let hp = if motor.hp > 0.0 {
                    format_hp(motor.hp)
                } else {
                    "-".to_string()
                };
                println!(
                    "{:<8} {:<12} {:<12} {:<40}",
                    hp,
                    motor.row.category,
                    motor.row.model,
                    truncate_str(&motor.row.product, 38)
                );
            }
            if !global.quiet {
                println!();
                println!("{} motor(s) indexed.", style(motors.len()).cyan());
            }
        }
    }
    Ok(())
}

fn run_transmissions(global: &GlobalOpts) -> Result<()> {
    let (_project, _config, index) = load_project_index(global)?;

    let transmissions = index.transmissions();
    if transmissions.is_empty() {
        println!("No transmission components in the catalog.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&transmissions).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("rpm_range,band,model,product");
            for transmission in transmissions {
                println!(
                    "{},{},{},{}",
                    transmission.rpm_range,
                    escape_csv(&transmission.row.category),
                    escape_csv(&transmission.row.model),
                    escape_csv(&transmission.row.product)
                );
            }
        }
        _ => {
            println!(
                "{:<12} {:<12} {:<12} {:<30}",
                style("RPM").bold(),
                style("BAND").bold(),
                style("MODEL").bold(),
                style("PRODUCT").bold()
            );
            println!("{}", "-".repeat(68));
            for transmission in transmissions {
                println!(
                    "{:<12} {:<12} {:<12} {:<30}",
                    transmission.rpm_range.to_string(),
                    transmission.row.category,
                    transmission.row.model,
                    truncate_str(&transmission.row.product, 28)
                );
            }
            if !global.quiet {
                println!();
                println!(
                    "{} transmission(s) indexed.",
                    style(transmissions.len()).cyan()
                );
            }
        }
    }
    Ok(())
}
