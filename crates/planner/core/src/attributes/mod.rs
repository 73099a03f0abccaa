//! Base attributes - the first layer of the build computation.
//!
//! Health, stamina and magicka are the only values the planner stores per
//! build (as race + assigned points). Everything else is derived from the
//! resolved [`BaseAttributes`] and recomputed on demand.

mod resolver;

pub use resolver::{
    Build, Race, RaceTable, ResolveError, resolve_base_attributes, resolve_with_default,
    try_resolve_base_attributes, try_resolve_with_default,
};

use crate::error::PlannerError;

/// The three core attributes of a character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Health,
    Magicka,
    Stamina,
}

/// Resolved health/stamina/magicka triple.
///
/// Produced fresh by the resolver on every call and never mutated in place;
/// use [`BaseAttributes::with`] to derive a modified copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub health: i32,
    pub stamina: i32,
    pub magicka: i32,
}

impl BaseAttributes {
    pub const fn new(health: i32, stamina: i32, magicka: i32) -> Self {
        Self {
            health,
            stamina,
            magicka,
        }
    }

    /// All three attributes set to `value`.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Magicka => self.magicka,
            Attribute::Stamina => self.stamina,
        }
    }

    /// Returns a copy with one attribute replaced.
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, value: i32) -> Self {
        match attribute {
            Attribute::Health => self.health = value,
            Attribute::Magicka => self.magicka = value,
            Attribute::Stamina => self.stamina = value,
        }
        self
    }

    /// Adds assigned points on top of these values.
    #[must_use]
    pub const fn apply(self, assignments: &AttributeAssignments) -> Self {
        Self {
            health: self.health.saturating_add(assignments.health),
            stamina: self.stamina.saturating_add(assignments.stamina),
            magicka: self.magicka.saturating_add(assignments.magicka),
        }
    }

    /// Checks that no attribute is negative.
    ///
    /// Attributes are expected to be non-negative, but nothing on the lenient
    /// path enforces it; callers that want the guarantee opt in here.
    pub fn validate(&self) -> Result<(), AttributeError> {
        for attribute in [Attribute::Health, Attribute::Stamina, Attribute::Magicka] {
            let value = self.get(attribute);
            if value < 0 {
                return Err(AttributeError::Negative { attribute, value });
            }
        }
        Ok(())
    }
}

/// Cumulative points a build has assigned to each attribute.
///
/// Missing fields deserialize as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeAssignments {
    pub health: i32,
    pub stamina: i32,
    pub magicka: i32,
}

impl AttributeAssignments {
    pub const fn new(health: i32, stamina: i32, magicka: i32) -> Self {
        Self {
            health,
            stamina,
            magicka,
        }
    }

    #[inline]
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Magicka => self.magicka,
            Attribute::Stamina => self.stamina,
        }
    }

    /// Returns a copy with `points` assigned to `attribute`.
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, points: i32) -> Self {
        match attribute {
            Attribute::Health => self.health = points,
            Attribute::Magicka => self.magicka = points,
            Attribute::Stamina => self.stamina = points,
        }
        self
    }

    /// Total points spent across all attributes.
    pub const fn total(&self) -> i32 {
        self.health
            .saturating_add(self.stamina)
            .saturating_add(self.magicka)
    }
}

/// Validation failure for a resolved attribute triple.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("{attribute} must be non-negative, got {value}")]
    Negative { attribute: Attribute, value: i32 },
}

impl PlannerError for AttributeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Negative { .. } => "negative_attribute",
        }
    }
}
