//! Static derived-stat table.

use crate::attributes::{Attribute, BaseAttributes};

/// Grouping used when presenting derived stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatCategory {
    Combat,
    Survival,
    Movement,
    Magic,
}

/// Per-attribute weights of a derived stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatWeights {
    pub health: f64,
    pub magicka: f64,
    pub stamina: f64,
}

impl StatWeights {
    pub const fn new(health: f64, magicka: f64, stamina: f64) -> Self {
        Self {
            health,
            magicka,
            stamina,
        }
    }

    #[inline]
    pub const fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Magicka => self.magicka,
            Attribute::Stamina => self.stamina,
        }
    }

    /// Dot product with the attribute triple.
    pub fn weighted_sum(&self, base: &BaseAttributes) -> f64 {
        f64::from(base.health) * self.health
            + f64::from(base.magicka) * self.magicka
            + f64::from(base.stamina) * self.stamina
    }
}

/// One row of the derived-stat table.
///
/// `value = floor(prefactor × √(weighted_sum − threshold))` when the weighted
/// sum exceeds the threshold, 0 otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedStatConfig {
    pub name: &'static str,
    pub is_percentage: bool,
    pub prefactor: f64,
    pub threshold: f64,
    pub weights: StatWeights,
    pub description: &'static str,
    pub category: StatCategory,
}

impl DerivedStatConfig {
    pub const fn new(
        name: &'static str,
        category: StatCategory,
        is_percentage: bool,
        prefactor: f64,
        threshold: f64,
        weights: StatWeights,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            is_percentage,
            prefactor,
            threshold,
            weights,
            description,
            category,
        }
    }

    /// Human-readable rendering of this stat's formula.
    ///
    /// Only non-zero weights are listed, e.g.
    /// `floor(1.5 * sqrt(1*health + 0.25*stamina - 100))`.
    pub fn formula(&self) -> String {
        let mut terms = String::new();
        for attribute in [Attribute::Health, Attribute::Magicka, Attribute::Stamina] {
            let weight = self.weights.get(attribute);
            if weight == 0.0 {
                continue;
            }
            if terms.is_empty() {
                terms.push_str(&format!("{weight}*{attribute}"));
            } else if weight < 0.0 {
                terms.push_str(&format!(" - {}*{attribute}", -weight));
            } else {
                terms.push_str(&format!(" + {weight}*{attribute}"));
            }
        }
        if terms.is_empty() {
            terms.push('0');
        }

        format!(
            "floor({} * sqrt({terms} - {}))",
            self.prefactor, self.threshold
        )
    }
}

/// Default derived-stat table, in presentation order.
pub const DERIVED_STAT_TABLE: &[DerivedStatConfig] = &[
    DerivedStatConfig::new(
        "Health Regen",
        StatCategory::Survival,
        false,
        1.5,
        100.0,
        StatWeights::new(1.0, 0.0, 0.25),
        "Health restored per second outside of combat.",
    ),
    DerivedStatConfig::new(
        "Stamina Regen",
        StatCategory::Survival,
        false,
        1.5,
        100.0,
        StatWeights::new(0.0, 0.0, 1.0),
        "Stamina restored per second.",
    ),
    DerivedStatConfig::new(
        "Magicka Regen",
        StatCategory::Magic,
        false,
        1.5,
        100.0,
        StatWeights::new(0.0, 1.0, 0.0),
        "Magicka restored per second.",
    ),
    DerivedStatConfig::new(
        "Carry Weight",
        StatCategory::Survival,
        false,
        5.0,
        100.0,
        StatWeights::new(0.5, 0.0, 0.5),
        "Additional weight that can be carried without being encumbered.",
    ),
    DerivedStatConfig::new(
        "Melee Power",
        StatCategory::Combat,
        false,
        3.0,
        100.0,
        StatWeights::new(0.25, 0.0, 1.0),
        "Bonus damage dealt with weapons.",
    ),
    DerivedStatConfig::new(
        "Critical Chance",
        StatCategory::Combat,
        true,
        0.75,
        150.0,
        StatWeights::new(0.0, 0.5, 0.5),
        "Chance for an attack or spell to critically strike.",
    ),
    DerivedStatConfig::new(
        "Spell Power",
        StatCategory::Magic,
        false,
        3.0,
        100.0,
        StatWeights::new(0.0, 1.0, 0.1),
        "Bonus damage and healing dealt with spells.",
    ),
    DerivedStatConfig::new(
        "Magic Resist",
        StatCategory::Magic,
        true,
        2.0,
        120.0,
        StatWeights::new(0.25, 1.0, 0.0),
        "Percentage of incoming spell damage resisted.",
    ),
    DerivedStatConfig::new(
        "Move Speed",
        StatCategory::Movement,
        true,
        1.0,
        110.0,
        StatWeights::new(0.0, 0.0, 1.0),
        "Percentage bonus to movement speed.",
    ),
];
