//! msw-core: shared foundation for multi-segment well restart encoding.
//!
//! Contains:
//! - error (shared error type for topology and restart encoding)
//! - ids (one-based segment and branch identifiers)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors)
//! - unit_system (SI to output unit conventions)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod unit_system;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MswError, MswResult};
pub use ids::*;
pub use numeric::*;
pub use unit_system::{Measure, UnitConvention, UnitConversion, UnitSystem};
pub use units::*;
