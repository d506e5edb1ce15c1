//! Pricing module - band mapping, composite resolution, price computation
//!
//! The composite resolver is the heart of the crate: given a requested HP,
//! phase, and target RPM it consults the catalog index for a matching motor
//! and transmission, composes the final unit price and description, and
//! reports per-part resolution status. Lookup misses are data, not errors -
//! the caller decides whether a miss blocks the order (motor) or merely
//! warns (transmission).

pub mod band;
pub mod composite;
pub mod context;
pub mod engine;

pub use band::Band;
pub use composite::{
    resolve, CompositeRequest, CompositeResult, MotorStatus, TransmissionStatus, RPM_MAX, RPM_MIN,
};
pub use context::PricingContext;
pub use engine::{PriceBreakdown, QTY_MAX, QTY_MIN};
