//! diagnostics — per-field breakdown of an integrated score.
//!
//! Purpose
//! -------
//! Explain *why* a state scored the way it did: for each field, report the
//! raw closure value and the weighted contribution. [`Diagnostics::report`]
//! takes the field slice explicitly rather than a `MaatCore`, so any field
//! set can be inspected against any state without a prior optimization run.

use std::collections::HashMap;

use crate::{
    core::{field::Field, state::State},
    errors::MaatResult,
};

/// Per-field diagnostic record.
///
/// Ephemeral: produced per call, never cached. `weighted_value` is exactly
/// `raw_value * weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    pub name: String,
    pub weight: f64,
    pub raw_value: f64,
    pub weighted_value: f64,
}

/// Small helper for inspecting field contributions.
pub struct Diagnostics;

impl Diagnostics {
    /// Evaluate every field against a state, preserving input order.
    ///
    /// # Errors
    /// Propagates the first error raised by a field closure.
    pub fn report<S: State>(fields: &[Field<S>], state: &S) -> MaatResult<Vec<FieldReport>> {
        let mut out = Vec::with_capacity(fields.len());
        for field in fields {
            let raw = field.raw(state)?;
            out.push(FieldReport {
                name: field.name().to_string(),
                weight: field.weight(),
                raw_value: raw,
                weighted_value: raw * field.weight(),
            });
        }
        Ok(out)
    }

    /// Collapse a report into a name → weighted-value map.
    pub fn as_map(reports: &[FieldReport]) -> HashMap<String, f64> {
        reports.iter().map(|r| (r.name.clone(), r.weighted_value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Readings {
        dissonance: f64,
        level: f64,
    }

    impl State for Readings {}

    #[test]
    fn report_preserves_input_order_and_exact_weighting() {
        let fields = vec![
            Field::new("Harmony", 0.9, |s: &Readings| s.dissonance),
            Field::new("Level", 2.0, |s: &Readings| s.level),
        ];
        let state = Readings { dissonance: 0.25, level: 1.5 };

        let report = Diagnostics::report(&fields, &state).expect("report should succeed");

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].name, "Harmony");
        assert_eq!(report[1].name, "Level");
        for entry in &report {
            assert_eq!(entry.weighted_value, entry.raw_value * entry.weight);
        }
    }

    #[test]
    fn report_is_decoupled_from_any_engine() {
        // A field slice built on the spot, never attached to a MaatCore.
        let fields = vec![Field::new("Standalone", 1.0, |s: &Readings| s.level * 2.0)];
        let state = Readings { dissonance: 0.0, level: 3.0 };
        let report = Diagnostics::report(&fields, &state).expect("report should succeed");
        assert_eq!(report[0].raw_value, 6.0);
    }

    #[test]
    fn as_map_keys_by_name() {
        let fields = vec![
            Field::new("A", 2.0, |s: &Readings| s.level),
            Field::new("B", 1.0, |s: &Readings| s.dissonance),
        ];
        let state = Readings { dissonance: 0.5, level: 1.0 };
        let report = Diagnostics::report(&fields, &state).expect("report should succeed");
        let map = Diagnostics::as_map(&report);
        assert_eq!(map["A"], 2.0);
        assert_eq!(map["B"], 0.5);
    }
}
