//! Derived stat computation.
//!
//! Pure functions of [`BaseAttributes`] and a [`DerivedStatConfig`] table.
//! Nothing is cached here; see [`super::DerivedStatCache`] for that.

use crate::attributes::BaseAttributes;
use crate::stats::config::{DerivedStatConfig, StatCategory};

/// A computed derived stat, ready for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedStat {
    pub name: String,
    pub value: i32,
    pub is_percentage: bool,
    pub formula: String,
    pub description: String,
    pub category: StatCategory,
}

impl DerivedStat {
    /// Computes a single stat from its table row.
    pub fn compute(base: &BaseAttributes, config: &DerivedStatConfig) -> Self {
        Self {
            name: config.name.to_owned(),
            value: calculate_derived_stat(base, config),
            is_percentage: config.is_percentage,
            formula: config.formula(),
            description: config.description.to_owned(),
            category: config.category,
        }
    }
}

/// Applies the soft-cap curve of `config` to `base`.
///
/// Below (or at) the threshold the stat contributes nothing; above it the
/// value grows with the square root of the excess. The guard keeps the
/// square-root argument strictly positive whatever the sign of the weights,
/// and a NaN weighted sum fails the comparison and yields 0.
pub fn calculate_derived_stat(base: &BaseAttributes, config: &DerivedStatConfig) -> i32 {
    let weighted_sum = config.weights.weighted_sum(base);

    if weighted_sum > config.threshold {
        // `as` saturates on overflow
        (config.prefactor * (weighted_sum - config.threshold).sqrt()).floor() as i32
    } else {
        0
    }
}

/// Computes every stat in `table`, preserving table order.
pub fn calculate_all_derived_stats(
    base: &BaseAttributes,
    table: &[DerivedStatConfig],
) -> Vec<DerivedStat> {
    table
        .iter()
        .map(|config| DerivedStat::compute(base, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::config::{DERIVED_STAT_TABLE, StatWeights};

    fn config(prefactor: f64, threshold: f64, weights: StatWeights) -> DerivedStatConfig {
        DerivedStatConfig::new(
            "Test Stat",
            StatCategory::Combat,
            false,
            prefactor,
            threshold,
            weights,
            "",
        )
    }

    #[test]
    fn below_threshold_is_zero() {
        let cfg = config(2.0, 100.0, StatWeights::new(1.0, 0.0, 0.0));

        assert_eq!(calculate_derived_stat(&BaseAttributes::uniform(90), &cfg), 0);
        // Exactly at the threshold is still zero
        assert_eq!(calculate_derived_stat(&BaseAttributes::uniform(100), &cfg), 0);
    }

    #[test]
    fn above_threshold_uses_square_root_curve() {
        let cfg = config(2.0, 100.0, StatWeights::new(1.0, 0.0, 0.5));
        // 125 + 50×0.5 = 150 → 2 × √50 = 14.14 → 14
        let base = BaseAttributes::new(125, 50, 0);

        assert_eq!(calculate_derived_stat(&base, &cfg), 14);
    }

    #[test]
    fn negative_weights_never_take_root_of_negative() {
        let cfg = config(1.0, -50.0, StatWeights::new(-1.0, 0.0, 0.0));
        // -40 > -50 → √10 = 3.16 → 3
        assert_eq!(
            calculate_derived_stat(&BaseAttributes::new(40, 0, 0), &cfg),
            3
        );
    }

    #[test]
    fn nan_prefactor_does_not_panic() {
        let cfg = config(f64::NAN, 0.0, StatWeights::new(1.0, 0.0, 0.0));

        // NaN casts to 0
        assert_eq!(calculate_derived_stat(&BaseAttributes::uniform(10), &cfg), 0);
    }

    #[test]
    fn all_stats_follow_table_order() {
        let stats = calculate_all_derived_stats(&BaseAttributes::uniform(100), DERIVED_STAT_TABLE);

        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<_> = DERIVED_STAT_TABLE.iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn default_attributes_produce_expected_values() {
        let stats = calculate_all_derived_stats(&BaseAttributes::uniform(100), DERIVED_STAT_TABLE);
        let value = |name: &str| {
            stats
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.value)
                .unwrap()
        };

        // 100 + 25 = 125 → 1.5 × √25 = 7.5 → 7
        assert_eq!(value("Health Regen"), 7);
        // 100 is not above the threshold of 100
        assert_eq!(value("Stamina Regen"), 0);
        // 25 + 100 = 125 → 2 × √5 = 4.47 → 4
        assert_eq!(value("Magic Resist"), 4);
        // 50 + 50 = 100 is not above 150
        assert_eq!(value("Critical Chance"), 0);
    }

    #[test]
    fn derived_stat_carries_presentation_fields() {
        let magic_resist = DERIVED_STAT_TABLE
            .iter()
            .find(|c| c.name == "Magic Resist")
            .unwrap();

        let stat = DerivedStat::compute(&BaseAttributes::uniform(100), magic_resist);

        assert!(stat.is_percentage);
        assert_eq!(stat.category, StatCategory::Magic);
        assert_eq!(stat.formula, magic_resist.formula());
        assert_eq!(stat.description, magic_resist.description);
    }
}
