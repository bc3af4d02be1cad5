//! Static category registry - factor tables and temperature pair rules

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Category;

/// Global category registry
pub static REGISTRY: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::new);

/// Relationship between two units of one category
#[derive(Debug, Clone, Copy)]
pub enum Relation {
    /// Same unit on both sides
    Identity,
    /// Multiplicative factor for linear categories
    Ratio(f64),
    /// Directed affine transform for a temperature pair
    Affine(fn(f64) -> f64),
}

/// Registry of factor tables for linear categories and directed pair
/// rules for temperature
///
/// Built once behind [`REGISTRY`] and never mutated afterwards. Adding a
/// unit means editing the matching `register_*` method.
pub struct CategoryRegistry {
    /// Per linear category: unit name -> how many of that unit equal 1 base unit
    factors: HashMap<Category, HashMap<&'static str, f64>>,
    /// Temperature: from unit -> (to unit -> transform)
    rules: HashMap<&'static str, HashMap<&'static str, fn(f64) -> f64>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let mut registry = CategoryRegistry {
            factors: HashMap::new(),
            rules: HashMap::new(),
        };
        registry.register_length_units();
        registry.register_weight_units();
        registry.register_temperature_rules();
        registry
    }

    /// Resolve the relationship between two lowercase unit names.
    ///
    /// Returns `None` when either unit is unknown to the category, which
    /// includes names valid only in a different category and pairs with
    /// no registered rule.
    pub fn relation(&self, category: Category, from: &str, to: &str) -> Option<Relation> {
        if !self.contains(category, from) || !self.contains(category, to) {
            return None;
        }
        if from == to {
            // Same-unit pairs are not listed in the temperature rule
            // table; identity holds for every category.
            return Some(Relation::Identity);
        }
        match category {
            Category::Length | Category::Weight => {
                let table = self.factors.get(&category)?;
                Some(Relation::Ratio(table.get(to)? / table.get(from)?))
            }
            Category::Temperature => {
                let transform = *self.rules.get(from)?.get(to)?;
                Some(Relation::Affine(transform))
            }
        }
    }

    /// Base-relative factor for a unit of a linear category
    pub fn factor(&self, category: Category, unit: &str) -> Option<f64> {
        self.factors.get(&category)?.get(unit).copied()
    }

    /// Whether `unit` (lowercase) is a member of `category`
    pub fn contains(&self, category: Category, unit: &str) -> bool {
        match category {
            Category::Length | Category::Weight => self
                .factors
                .get(&category)
                .is_some_and(|table| table.contains_key(unit)),
            Category::Temperature => self.rules.contains_key(unit),
        }
    }

    /// All unit names of a category, sorted
    pub fn units(&self, category: Category) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = match category {
            Category::Length | Category::Weight => self
                .factors
                .get(&category)
                .map(|table| table.keys().copied().collect())
                .unwrap_or_default(),
            Category::Temperature => self.rules.keys().copied().collect(),
        };
        names.sort_unstable();
        names
    }

    fn register(&mut self, category: Category, unit: &'static str, factor: f64) {
        self.factors.entry(category).or_default().insert(unit, factor);
    }

    fn rule(&mut self, from: &'static str, to: &'static str, transform: fn(f64) -> f64) {
        self.rules.entry(from).or_default().insert(to, transform);
    }

    fn register_length_units(&mut self) {
        // Factor: how many of this unit equal 1 meter
        self.register(Category::Length, "meters", 1.0);
        self.register(Category::Length, "kilometers", 0.001);
        self.register(Category::Length, "centimeters", 100.0);
        self.register(Category::Length, "millimeters", 1000.0);
        self.register(Category::Length, "inches", 39.3701);
        self.register(Category::Length, "feet", 3.28084);
        self.register(Category::Length, "yards", 1.09361);
        self.register(Category::Length, "miles", 0.000621371);
    }

    fn register_weight_units(&mut self) {
        // Factor: how many of this unit equal 1 kilogram
        self.register(Category::Weight, "kilograms", 1.0);
        self.register(Category::Weight, "grams", 1000.0);
        self.register(Category::Weight, "milligrams", 1_000_000.0);
        self.register(Category::Weight, "tonnes", 0.001);
        self.register(Category::Weight, "pounds", 2.20462);
        self.register(Category::Weight, "ounces", 35.274);
        self.register(Category::Weight, "stones", 0.157473);
    }

    fn register_temperature_rules(&mut self) {
        // Temperature scales share no common zero point, so every
        // directed pair carries its own affine transform instead of a
        // base-relative factor.
        self.rule("celsius", "fahrenheit", |v| v * 1.8 + 32.0);
        self.rule("fahrenheit", "celsius", |v| (v - 32.0) / 1.8);
        self.rule("celsius", "kelvin", |v| v + 273.15);
        self.rule("kelvin", "celsius", |v| v - 273.15);
        self.rule("fahrenheit", "kelvin", |v| (v - 32.0) * (5.0 / 9.0) + 273.15);
        self.rule("kelvin", "fahrenheit", |v| (v - 273.15) * 1.8 + 32.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units_have_factor_one() {
        let reg = CategoryRegistry::new();
        assert_eq!(reg.factor(Category::Length, "meters"), Some(1.0));
        assert_eq!(reg.factor(Category::Weight, "kilograms"), Some(1.0));
    }

    #[test]
    fn test_unknown_unit_lookup() {
        let reg = CategoryRegistry::new();
        assert_eq!(reg.factor(Category::Length, "furlongs"), None);
        assert!(reg.relation(Category::Length, "meters", "furlongs").is_none());
        assert!(reg.relation(Category::Length, "furlongs", "meters").is_none());
    }

    #[test]
    fn test_cross_category_lookup_has_no_rule() {
        let reg = CategoryRegistry::new();
        assert!(reg.relation(Category::Length, "meters", "kilograms").is_none());
        assert!(reg.relation(Category::Weight, "meters", "kilograms").is_none());
        assert!(reg.relation(Category::Temperature, "celsius", "meters").is_none());
    }

    #[test]
    fn test_linear_relation_is_factor_ratio() {
        let reg = CategoryRegistry::new();
        match reg.relation(Category::Length, "kilometers", "meters") {
            Some(Relation::Ratio(r)) => assert!((r - 1000.0).abs() < 1e-9),
            other => panic!("expected ratio, got {:?}", other),
        }
    }

    #[test]
    fn test_same_unit_is_identity() {
        let reg = CategoryRegistry::new();
        for category in Category::ALL {
            for unit in reg.units(category) {
                assert!(
                    matches!(reg.relation(category, unit, unit), Some(Relation::Identity)),
                    "{} to itself in {} should be identity",
                    unit,
                    category
                );
            }
        }
    }

    #[test]
    fn test_all_temperature_pairs_have_rules() {
        let reg = CategoryRegistry::new();
        let units = reg.units(Category::Temperature);
        for from in &units {
            for to in &units {
                if from == to {
                    continue;
                }
                assert!(
                    matches!(
                        reg.relation(Category::Temperature, from, to),
                        Some(Relation::Affine(_))
                    ),
                    "missing rule {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_temperature_anchor_points() {
        let reg = CategoryRegistry::new();
        let Some(Relation::Affine(c_to_f)) =
            reg.relation(Category::Temperature, "celsius", "fahrenheit")
        else {
            panic!("missing celsius -> fahrenheit");
        };
        assert_eq!(c_to_f(0.0), 32.0);
        assert_eq!(c_to_f(100.0), 212.0);

        let Some(Relation::Affine(c_to_k)) =
            reg.relation(Category::Temperature, "celsius", "kelvin")
        else {
            panic!("missing celsius -> kelvin");
        };
        assert_eq!(c_to_k(0.0), 273.15);
    }

    #[test]
    fn test_global_registry_is_populated() {
        assert!(REGISTRY.contains(Category::Length, "miles"));
        assert!(REGISTRY.contains(Category::Weight, "ounces"));
        assert!(REGISTRY.contains(Category::Temperature, "kelvin"));
    }
}
