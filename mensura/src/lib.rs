//! Mensura - unit conversion for length, weight, and temperature
//!
//! One entry point, [`convert`], resolves the relationship between two
//! named units of a [`Category`] and returns an [`Outcome`] that either
//! carries the converted value or describes why the pair is invalid.
//! The [`Measurement`] wrapper layers fluent call sites on top.
//!
//! ```
//! use mensura::prelude::*;
//!
//! let out = convert(10.0, "meters", "feet", Category::Length);
//! assert!(out.success);
//!
//! let boiling = Measurement::celsius(100.0).to("fahrenheit");
//! assert_eq!(boiling.value, 212.0);
//! ```

mod measurement;

pub use measurement::Measurement;
pub use mensura_core::{ConvertError, Outcome};
pub use mensura_units::{convert, Category};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{convert, Category, ConvertError, Measurement, Outcome};
}
