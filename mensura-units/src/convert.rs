//! The conversion entry point

use mensura_core::{ConvertError, Outcome};
use tracing::{debug, trace};

use crate::registry::{Relation, REGISTRY};
use crate::Category;

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Unit names are matched case-insensitively; both are lowercased here
/// and nowhere else. Failures come back as an [`Outcome`] with
/// `success = false` and a diagnostic message. This function never
/// panics on caller input.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: Category) -> Outcome {
    let from = from_unit.to_lowercase();
    let to = to_unit.to_lowercase();

    match REGISTRY.relation(category, &from, &to) {
        Some(Relation::Identity) => Outcome::ok(value),
        Some(Relation::Ratio(ratio)) => {
            trace!(%category, %from, %to, ratio, "linear conversion");
            Outcome::ok(value * ratio)
        }
        Some(Relation::Affine(transform)) => {
            trace!(%category, %from, %to, "affine conversion");
            Outcome::ok(transform(value))
        }
        None => {
            debug!(%category, %from, %to, "no conversion rule");
            ConvertError::invalid(from, to, category.name()).into()
        }
    }
}
