//! Catalog module - rows, free-text parsing, loading, and indexed views
//!
//! The catalog is a flat sequence of [`CatalogRow`]s read from CSV. A handful
//! of category names are reserved: they mark rows as motor components or
//! transmission components rather than standalone products, and one category
//! marks composite products that are priced by assembling a base row with a
//! motor and a transmission. [`CatalogIndex`] partitions the flat rows into
//! those views.

pub mod hp;
pub mod index;
pub mod loader;
pub mod row;
pub mod rpm;

pub use index::{CatalogIndex, MotorComponent, TransmissionComponent};
pub use loader::{load_catalog, CatalogError};
pub use row::{CatalogRow, Phase, PriceColumn};
pub use rpm::RpmRange;

/// Category of single-phase motor components.
pub const SINGLE_PHASE: &str = "MONOFASICO";

/// Category of three-phase motor components.
pub const THREE_PHASE: &str = "TRIFASICO";

/// Category whose models are priced as composites (base + motor + transmission).
pub const COMPOSITE: &str = "MULTICURVA";

/// Legacy motor category hidden from category browsing. Rows under it are
/// still reachable through an explicit (category, model) lookup.
pub const LEGACY_MOTOR: &str = "MOTOR";

/// The four transmission power-band categories, in ascending HP order.
pub const TRANSMISSION_BANDS: [&str; 4] = ["0.25-2HP", "3-5HP", "7.5-10HP", "15-30HP"];
