//! Price computation for standalone rows and composite results

use serde::Serialize;

use super::composite::CompositeResult;
use super::context::PricingContext;
use crate::catalog::CatalogRow;

/// Valid quantity domain for line items, enforced at the boundary.
pub const QTY_MIN: u32 = 1;
pub const QTY_MAX: u32 = 100;

/// Unit and line totals for one priced selection.
///
/// Profit may be negative; it is surfaced as-is as a signal for the
/// operator, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub quantity: u32,
    pub unit_sell: f64,
    pub unit_cost: f64,
    pub unit_profit: f64,
    pub line_sell: f64,
    pub line_cost: f64,
    pub line_profit: f64,
}

impl PriceBreakdown {
    /// Quantity is assumed pre-validated (1-100) by the caller.
    pub fn compute(unit_sell: f64, unit_cost: f64, quantity: u32) -> Self {
        let unit_profit = unit_sell - unit_cost;
        Self {
            quantity,
            unit_sell,
            unit_cost,
            unit_profit,
            line_sell: unit_sell * quantity as f64,
            line_cost: unit_cost * quantity as f64,
            line_profit: unit_profit * quantity as f64,
        }
    }

    /// Price a standalone catalog row under the given context.
    pub fn for_row(row: &CatalogRow, ctx: &PricingContext, quantity: u32) -> Self {
        Self::compute(ctx.sell_price(row), ctx.cost_price(row), quantity)
    }

    /// Price an already-resolved composite result.
    pub fn for_composite(result: &CompositeResult, quantity: u32) -> Self {
        Self::compute(result.unit_sell, result.unit_cost, quantity)
    }
}
