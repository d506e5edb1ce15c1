//! Shared selection and pricing plumbing for the price, quote, and order
//! commands

use console::style;
use miette::Result;
use serde::Serialize;

use crate::catalog::{load_catalog, CatalogIndex, Phase, PriceColumn, COMPOSITE};
use crate::cli::GlobalOpts;
use crate::core::{Config, Project};
use crate::pricing::{
    resolve, CompositeRequest, CompositeResult, MotorStatus, PriceBreakdown, PricingContext,
    TransmissionStatus, QTY_MAX, QTY_MIN, RPM_MAX, RPM_MIN,
};

/// Discover the project, load configuration, and build the catalog index.
///
/// A load failure is reported here, once; an empty catalog is not an error -
/// callers degrade their selection surface instead.
pub fn load_project_index(global: &GlobalOpts) -> Result<(Project, Config, CatalogIndex)> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();
    let path = config.catalog_path(&project);
    let rows = load_catalog(&path).map_err(|e| miette::miette!("{}", e))?;

    if global.verbose {
        eprintln!("Loaded {} catalog rows from {}", rows.len(), path.display());
    }
    Ok((project, config, CatalogIndex::build(rows)))
}

/// Model selection shared by `vqt price` and `vqt order add`.
#[derive(clap::Args, Debug)]
pub struct SelectionArgs {
    /// Category of the model
    #[arg(long, short = 'c')]
    pub category: String,

    /// Model designation
    #[arg(long, short = 'm')]
    pub model: String,

    /// Motor power in HP; fractions like 1/2 or "7 1/2" are accepted
    /// (composite models)
    #[arg(long, value_parser = parse_hp_arg)]
    pub hp: Option<f64>,

    /// Motor phase (composite models)
    #[arg(long, value_enum)]
    pub phase: Option<Phase>,

    /// Target RPM, 301-2600 (composite models)
    #[arg(long, value_parser = parse_rpm_arg)]
    pub rpm: Option<u32>,

    /// Quantity, 1-100
    #[arg(long, short = 'n', default_value_t = 1, value_parser = parse_qty_arg)]
    pub quantity: u32,

    /// Price list override for this invocation
    #[arg(long, short = 'l')]
    pub list: Option<PriceColumn>,
}

/// Parse and validate the --hp flag; fractions go through the catalog's
/// own horsepower parser.
pub fn parse_hp_arg(input: &str) -> Result<f64, String> {
    let hp = crate::catalog::hp::parse_hp(input).map_err(|e| e.to_string())?;
    if hp <= 0.0 {
        return Err("HP must be positive".to_string());
    }
    Ok(hp)
}

/// Parse and validate the --rpm flag against the supported RPM domain.
pub fn parse_rpm_arg(input: &str) -> Result<u32, String> {
    let rpm: u32 = input
        .parse()
        .map_err(|_| format!("invalid RPM: {}", input))?;
    if !(RPM_MIN..=RPM_MAX).contains(&rpm) {
        return Err(format!("RPM must be between {} and {}", RPM_MIN, RPM_MAX));
    }
    Ok(rpm)
}

/// Parse and validate the --quantity flag.
pub fn parse_qty_arg(input: &str) -> Result<u32, String> {
    let quantity: u32 = input
        .parse()
        .map_err(|_| format!("invalid quantity: {}", input))?;
    if !(QTY_MIN..=QTY_MAX).contains(&quantity) {
        return Err(format!(
            "quantity must be between {} and {}",
            QTY_MIN, QTY_MAX
        ));
    }
    Ok(quantity)
}

/// A priced selection, standalone or composite, in a stable serializable
/// shape for JSON/YAML output.
#[derive(Debug, Serialize)]
pub struct PricedSelection {
    pub category: String,
    pub model: String,
    pub description: String,
    pub currency: String,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeResult>,
}

impl PricedSelection {
    /// Whether this selection may be committed to the order. Standalone
    /// selections always commit; composites require a resolved motor.
    pub fn is_committable(&self) -> bool {
        self.composite.as_ref().map_or(true, |c| c.is_committable())
    }
}

/// Resolve and price a selection against the index.
///
/// Composite categories require --hp, --phase, and --rpm; a missing model
/// is an error, while missing parts are carried as statuses on the result.
pub fn price_selection(
    index: &CatalogIndex,
    ctx: &PricingContext,
    args: &SelectionArgs,
) -> Result<PricedSelection> {
    let row = index.find(&args.category, &args.model).ok_or_else(|| {
        miette::miette!(
            "No model '{}' in category '{}'. Try 'vqt catalog models {}'",
            args.model,
            args.category,
            args.category
        )
    })?;

    let composite = if row.category == COMPOSITE {
        let (hp, phase, rpm) = match (args.hp, args.phase, args.rpm) {
            (Some(hp), Some(phase), Some(rpm)) => (hp, phase, rpm),
            _ => {
                return Err(miette::miette!(
                    "'{}' is a composite model; --hp, --phase, and --rpm are required",
                    args.model
                ))
            }
        };
        Some(resolve(index, row, &CompositeRequest { hp, phase, rpm }, ctx))
    } else {
        None
    };

    let breakdown = match &composite {
        Some(result) => PriceBreakdown::for_composite(result, args.quantity),
        None => PriceBreakdown::for_row(row, ctx, args.quantity),
    };

    let description = composite
        .as_ref()
        .map(|c| c.description.clone())
        .unwrap_or_else(|| row.product.clone());

    Ok(PricedSelection {
        category: row.category.clone(),
        model: row.model.clone(),
        description,
        currency: row.currency.clone(),
        breakdown,
        composite,
    })
}

/// Print the per-part status lines for a composite resolution.
pub fn print_part_status(result: &CompositeResult) {
    match result.motor_status {
        MotorStatus::Found => println!(
            "{} Motor: ${:.2}",
            style("✓").green(),
            result.motor_sell
        ),
        MotorStatus::NotFound => println!(
            "{} Motor not available for this HP/phase",
            style("✗").red()
        ),
    }

    match result.transmission_status {
        TransmissionStatus::Found => {
            let band = result.band.map(|b| b.category()).unwrap_or("-");
            println!(
                "{} Transmission ({}): ${:.2}",
                style("✓").green(),
                band,
                result.transmission_sell
            );
        }
        TransmissionStatus::NotFound => println!(
            "{} No transmission covers the requested RPM",
            style("!").yellow()
        ),
        TransmissionStatus::UnsupportedBand => println!(
            "{} No transmission band covers this HP",
            style("!").yellow()
        ),
    }
}

/// Print the full pretty breakdown for a priced selection.
pub fn print_breakdown(selection: &PricedSelection) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Category").bold(), selection.category);
    println!(
        "{}: {}",
        style("Model").bold(),
        style(&selection.model).cyan()
    );
    println!(
        "{}: {}",
        style("Description").bold(),
        selection.description
    );

    if let Some(result) = &selection.composite {
        println!("{}", style("─".repeat(60)).dim());
        print_part_status(result);
    }

    println!("{}", style("─".repeat(60)).dim());
    let b = &selection.breakdown;
    println!(
        "{}: {}",
        style("Unit sell").bold(),
        style(format!("${:.2} {}", b.unit_sell, selection.currency)).green()
    );
    println!(
        "{}: ${:.2} | {}: ${:.2}",
        style("Unit cost").bold(),
        b.unit_cost,
        style("Unit profit").bold(),
        b.unit_profit
    );
    if b.quantity > 1 {
        println!(
            "{}: {} | {}: ${:.2} {} | {}: ${:.2}",
            style("Quantity").bold(),
            b.quantity,
            style("Line sell").bold(),
            b.line_sell,
            selection.currency,
            style("Line profit").bold(),
            b.line_profit
        );
    }

    if !selection.is_committable() {
        println!();
        println!(
            "{} Motor not found - this configuration cannot be added to the order",
            style("✗").red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hp_arg_accepts_fractions() {
        assert_eq!(parse_hp_arg("3"), Ok(3.0));
        assert_eq!(parse_hp_arg("1/2"), Ok(0.5));
        assert_eq!(parse_hp_arg("7 1/2"), Ok(7.5));
        assert!(parse_hp_arg("abc").is_err());
        assert!(parse_hp_arg("0").is_err());
    }

    #[test]
    fn test_parse_rpm_arg_enforces_domain() {
        assert_eq!(parse_rpm_arg("301"), Ok(301));
        assert_eq!(parse_rpm_arg("2600"), Ok(2600));
        assert!(parse_rpm_arg("300").is_err());
        assert!(parse_rpm_arg("2601").is_err());
        assert!(parse_rpm_arg("fast").is_err());
    }

    #[test]
    fn test_parse_qty_arg_enforces_domain() {
        assert_eq!(parse_qty_arg("1"), Ok(1));
        assert_eq!(parse_qty_arg("100"), Ok(100));
        assert!(parse_qty_arg("0").is_err());
        assert!(parse_qty_arg("101").is_err());
    }
}
