//! Measurement categories

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::REGISTRY;

/// A closed grouping of mutually convertible units
///
/// Length and weight units relate through multiplicative factors on a
/// shared base unit. Temperature units relate through directed affine
/// rules, since their scales share no common zero point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// Every supported category
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Canonical uppercase name, as rendered in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "LENGTH",
            Category::Weight => "WEIGHT",
            Category::Temperature => "TEMPERATURE",
        }
    }

    /// Valid unit names for this category, sorted
    pub fn units(&self) -> Vec<&'static str> {
        REGISTRY.units(*self)
    }

    /// Whether `unit` is a member of this category
    ///
    /// Expects an already-lowercased name; case normalization happens at
    /// the conversion boundary, not here.
    pub fn contains(&self, unit: &str) -> bool {
        REGISTRY.contains(*self, unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
