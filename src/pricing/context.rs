//! Per-session price-column selection

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogRow, PriceColumn};

/// Which price column is "sell" for this session.
///
/// Cost always comes from the factory column regardless of the sell
/// selection. Changing the context affects only subsequent computations;
/// line items already in the order keep their computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingContext {
    pub sell: PriceColumn,
}

impl PricingContext {
    pub const COST_COLUMN: PriceColumn = PriceColumn::Fabrica;

    pub fn new(sell: PriceColumn) -> Self {
        Self { sell }
    }

    /// Sell price of a row under this context; an absent column is 0.
    pub fn sell_price(&self, row: &CatalogRow) -> f64 {
        row.price(self.sell).unwrap_or(0.0)
    }

    /// Cost price of a row (always the factory column); absent is 0.
    pub fn cost_price(&self, row: &CatalogRow) -> f64 {
        row.price(Self::COST_COLUMN).unwrap_or(0.0)
    }
}
