//! Order accumulation and persistence
//!
//! The order is an append-only list of priced line items. Items are never
//! merged or edited after creation; the only mutation besides `add` is
//! clearing the whole order. Totals are always a fresh re-aggregation over
//! the current list - order sizes are small, so simplicity wins over
//! incremental bookkeeping.

pub mod export;

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Project;
use crate::pricing::PriceBreakdown;

/// One priced, quantified entry in the in-progress order.
///
/// A line item keeps the values computed at the moment it was added; a
/// later price-list change does not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub model: String,
    pub description: String,
    pub quantity: u32,
    pub unit_sell: f64,
    pub line_sell: f64,
    pub line_cost: f64,
    pub line_profit: f64,
    pub currency: String,
    pub created: DateTime<Utc>,
}

impl LineItem {
    pub fn new(model: &str, description: &str, currency: &str, breakdown: &PriceBreakdown) -> Self {
        Self {
            model: model.to_string(),
            description: description.to_string(),
            quantity: breakdown.quantity,
            unit_sell: breakdown.unit_sell,
            line_sell: breakdown.line_sell,
            line_cost: breakdown.line_cost,
            line_profit: breakdown.line_profit,
            currency: currency.to_string(),
            created: Utc::now(),
        }
    }
}

/// Summed totals for one currency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CurrencyTotals {
    pub sell: f64,
    pub cost: f64,
    pub profit: f64,
}

/// Append-only collection of priced line items, persisted per project.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    items: Vec<LineItem>,
}

impl Order {
    /// Append a line item. Identical items are kept as distinct entries.
    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group and sum the current items by currency. Always a fresh
    /// aggregation, never incrementally maintained.
    pub fn totals_by_currency(&self) -> BTreeMap<String, CurrencyTotals> {
        let mut totals: BTreeMap<String, CurrencyTotals> = BTreeMap::new();
        for item in &self.items {
            let bucket = totals.entry(item.currency.clone()).or_default();
            bucket.sell += item.line_sell;
            bucket.cost += item.line_cost;
            bucket.profit += item.line_profit;
        }
        totals
    }

    /// Load the project's order; a missing file is an empty order.
    pub fn load(project: &Project) -> Result<Self, OrderError> {
        let path = project.order_path();
        if !path.exists() {
            return Ok(Order::default());
        }
        let contents = std::fs::read_to_string(&path)
            .map_err(|source| OrderError::Io { path: path.clone(), source })?;
        serde_yml::from_str(&contents).map_err(|source| OrderError::Corrupt { path, source })
    }

    /// Persist the order to the project's order file.
    pub fn save(&self, project: &Project) -> Result<(), OrderError> {
        let path = project.order_path();
        let yaml = serde_yml::to_string(self)
            .map_err(|source| OrderError::Corrupt { path: path.clone(), source })?;
        std::fs::write(&path, yaml).map_err(|source| OrderError::Io { path, source })
    }
}

/// Errors from reading or writing the order file
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("cannot access order {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("order file {path:?} is not valid YAML: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}
