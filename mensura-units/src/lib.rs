//! Mensura Units - category-scoped unit conversion
//!
//! Converts a value between two named units of one measurement
//! category, returning a structured outcome instead of panicking on bad
//! input.
//!
//! Categories:
//! - Length (meters, kilometers, feet, miles, etc.)
//! - Weight (kilograms, grams, pounds, ounces, etc.)
//! - Temperature (celsius, fahrenheit, kelvin)
//!
//! Length and weight conversions are ratios of base-relative factors.
//! Temperature conversions are affine and carried as one rule per
//! directed unit pair.

mod category;
mod convert;
mod registry;

pub use category::Category;
pub use convert::convert;
pub use registry::{CategoryRegistry, Relation, REGISTRY};
