//! Measurement type - a value paired with a unit and category

use std::fmt;

use serde::{Deserialize, Serialize};

use mensura_core::Outcome;
use mensura_units::{convert, Category};

/// A numeric value tagged with its unit and category
///
/// Thin sugar over [`convert`]: pairing a value with a unit up front so
/// call sites read as `Measurement::meters(10.0).to("feet")`. Carries no
/// semantics of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
    pub category: Category,
}

impl Measurement {
    /// Pair a value with a unit and category
    pub fn new(value: f64, unit: impl Into<String>, category: Category) -> Self {
        Measurement {
            value,
            unit: unit.into(),
            category,
        }
    }

    pub fn meters(value: f64) -> Self {
        Measurement::new(value, "meters", Category::Length)
    }

    pub fn kilometers(value: f64) -> Self {
        Measurement::new(value, "kilometers", Category::Length)
    }

    pub fn feet(value: f64) -> Self {
        Measurement::new(value, "feet", Category::Length)
    }

    pub fn miles(value: f64) -> Self {
        Measurement::new(value, "miles", Category::Length)
    }

    pub fn kilograms(value: f64) -> Self {
        Measurement::new(value, "kilograms", Category::Weight)
    }

    pub fn pounds(value: f64) -> Self {
        Measurement::new(value, "pounds", Category::Weight)
    }

    pub fn celsius(value: f64) -> Self {
        Measurement::new(value, "celsius", Category::Temperature)
    }

    pub fn fahrenheit(value: f64) -> Self {
        Measurement::new(value, "fahrenheit", Category::Temperature)
    }

    pub fn kelvin(value: f64) -> Self {
        Measurement::new(value, "kelvin", Category::Temperature)
    }

    /// Convert into `target` units, delegating to [`convert`]
    pub fn to(&self, target: &str) -> Outcome {
        convert(self.value, &self.unit, target, self.category)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
