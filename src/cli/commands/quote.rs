//! `vqt quote` command - interactive guided quoting session
//!
//! Walks the salesperson through the selection form: category, model,
//! motor/transmission configuration for composites, quantity, then a
//! priced breakdown and an add-to-order confirmation. Loops until the
//! user is done.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::catalog::hp::format_hp;
use crate::catalog::{CatalogIndex, Phase, PriceColumn, COMPOSITE};
use crate::cli::commands::common::{
    load_project_index, parse_hp_arg, price_selection, print_breakdown, SelectionArgs,
};
use crate::cli::GlobalOpts;
use crate::order::{LineItem, Order};
use crate::pricing::{PricingContext, QTY_MAX, QTY_MIN, RPM_MAX, RPM_MIN};

#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// Price list override for this session
    #[arg(long, short = 'l')]
    pub list: Option<PriceColumn>,
}

pub fn run(args: QuoteArgs, global: &GlobalOpts) -> Result<()> {
    let (project, config, index) = load_project_index(global)?;
    if index.is_empty() {
        println!("Catalog is empty. Nothing to select.");
        return Ok(());
    }

    let ctx = args
        .list
        .map(PricingContext::new)
        .unwrap_or_else(|| config.pricing_context());
    let theme = ColorfulTheme::default();

    println!();
    println!(
        "{} Quoting session using {}",
        style("◆").cyan(),
        style(ctx.sell.label()).yellow()
    );
    println!("{}", style("─".repeat(50)).dim());

    let mut order = Order::load(&project).map_err(|e| miette::miette!("{}", e))?;

    loop {
        let categories = index.categories();
        if categories.is_empty() {
            println!("No selectable categories in the catalog.");
            break;
        }
        let category_idx = Select::with_theme(&theme)
            .with_prompt("Category")
            .items(&categories)
            .default(0)
            .interact()
            .into_diagnostic()?;
        let category = categories[category_idx].to_string();

        let models = index.models(&category);
        let model_idx = Select::with_theme(&theme)
            .with_prompt("Model")
            .items(&models)
            .default(0)
            .interact()
            .into_diagnostic()?;
        let model = models[model_idx].to_string();

        let is_composite = index
            .find(&category, &model)
            .map_or(false, |row| row.category == COMPOSITE);

        let (hp, phase, rpm) = if is_composite {
            println!(
                "{} Motor and transmission configuration required.",
                style("◆").cyan()
            );
            (
                Some(prompt_hp(&theme, &index)?),
                Some(prompt_phase(&theme)?),
                Some(prompt_rpm(&theme)?),
            )
        } else {
            (None, None, None)
        };

        let quantity: u32 = Input::with_theme(&theme)
            .with_prompt(format!("Quantity ({}-{})", QTY_MIN, QTY_MAX))
            .default(1)
            .validate_with(|input: &u32| {
                if (QTY_MIN..=QTY_MAX).contains(input) {
                    Ok(())
                } else {
                    Err(format!(
                        "quantity must be between {} and {}",
                        QTY_MIN, QTY_MAX
                    ))
                }
            })
            .interact_text()
            .into_diagnostic()?;

        let selection_args = SelectionArgs {
            category,
            model,
            hp,
            phase,
            rpm,
            quantity,
            list: None,
        };
        let selection = price_selection(&index, &ctx, &selection_args)?;
        print_breakdown(&selection);

        if selection.is_committable() {
            let add = Confirm::with_theme(&theme)
                .with_prompt("Add to order?")
                .default(true)
                .interact()
                .into_diagnostic()?;
            if add {
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
            }
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("Quote another item?")
            .default(true)
            .interact()
            .into_diagnostic()?;
        if !again {
            break;
        }
        println!();
    }

    if !order.is_empty() && !global.quiet {
        println!();
        println!(
            "Order has {} line item(s). Use {} to send it.",
            style(order.len()).cyan(),
            style("vqt order export --mailto").yellow()
        );
    }
    Ok(())
}

fn prompt_hp(theme: &ColorfulTheme, index: &CatalogIndex) -> Result<f64> {
    let hps = index.motor_hps();
    if hps.is_empty() {
        // No motors indexed; accept free text so the miss surfaces as a
        // motor not-found status instead of blocking the session
        let raw: String = Input::with_theme(theme)
            .with_prompt("Power (HP)")
            .validate_with(|input: &String| parse_hp_arg(input).map(|_| ()))
            .interact_text()
            .into_diagnostic()?;
        return parse_hp_arg(&raw).map_err(|e| miette::miette!("{}", e));
    }

    let labels: Vec<String> = hps
        .iter()
        .map(|hp| format!("{} HP", format_hp(*hp)))
        .collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Power (HP)")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(hps[idx])
}

fn prompt_phase(theme: &ColorfulTheme) -> Result<Phase> {
    let phases = [Phase::Monofasico, Phase::Trifasico];
    let labels: Vec<String> = phases.iter().map(|p| p.to_string()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Phase")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(phases[idx])
}

fn prompt_rpm(theme: &ColorfulTheme) -> Result<u32> {
    Input::with_theme(theme)
        .with_prompt(format!("Target RPM ({}-{})", RPM_MIN, RPM_MAX))
        .default(1000)
        .validate_with(|input: &u32| {
            if (RPM_MIN..=RPM_MAX).contains(input) {
                Ok(())
            } else {
                Err(format!("RPM must be between {} and {}", RPM_MIN, RPM_MAX))
            }
        })
        .interact_text()
        .into_diagnostic()
}
