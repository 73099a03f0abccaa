//! Resolves a build's base attributes from its race and assigned points.
//!
//! `BaseAttributes = race.starting_stats (or default) + assigned points`

use crate::attributes::{AttributeAssignments, AttributeError, BaseAttributes};
use crate::config::PlannerConfig;
use crate::error::PlannerError;

/// A playable race and the attributes it starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Race {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub starting_stats: BaseAttributes,
}

impl Race {
    pub fn new(id: impl Into<String>, name: impl Into<String>, starting_stats: BaseAttributes) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            starting_stats,
        }
    }
}

/// Ordered collection of races, looked up by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RaceTable {
    races: Vec<Race>,
}

impl RaceTable {
    pub fn new(races: Vec<Race>) -> Self {
        Self { races }
    }

    pub fn get(&self, id: &str) -> Option<&Race> {
        self.races.iter().find(|race| race.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Race> {
        self.races.iter()
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

impl FromIterator<Race> for RaceTable {
    fn from_iter<I: IntoIterator<Item = Race>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Snapshot of a character build as edited by the user.
///
/// The planner core never owns builds; the surrounding application keeps the
/// current snapshot and passes it in by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Build {
    pub race: Option<String>,
    pub birthsign: Option<String>,
    pub attribute_assignments: AttributeAssignments,
    pub level: u32,
    pub skills: Vec<String>,
    pub recipes: Vec<String>,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    #[must_use]
    pub fn with_assignments(mut self, assignments: AttributeAssignments) -> Self {
        self.attribute_assignments = assignments;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

impl Default for Build {
    fn default() -> Self {
        Self {
            race: None,
            birthsign: None,
            attribute_assignments: AttributeAssignments::default(),
            level: 1,
            skills: Vec::new(),
            recipes: Vec::new(),
        }
    }
}

/// Strict resolution failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown race '{0}'")]
    UnknownRace(String),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

impl PlannerError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRace(_) => "unknown_race",
            Self::Attribute(inner) => inner.error_code(),
        }
    }
}

/// Resolves base attributes, falling back to 100 in every attribute when no
/// race is selected or the selected race is not in `races`.
pub fn resolve_base_attributes(build: &Build, races: &RaceTable) -> BaseAttributes {
    resolve_with_default(build, races, PlannerConfig::DEFAULT_STARTING_STAT)
}

/// Same as [`resolve_base_attributes`] with a configurable fallback value.
pub fn resolve_with_default(build: &Build, races: &RaceTable, default_stat: i32) -> BaseAttributes {
    let starting = match build.race.as_deref() {
        Some(id) => match races.get(id) {
            Some(race) => race.starting_stats,
            None => {
                tracing::debug!(race = id, "Unknown race, using default starting stats");
                BaseAttributes::uniform(default_stat)
            }
        },
        None => BaseAttributes::uniform(default_stat),
    };

    starting.apply(&build.attribute_assignments)
}

/// Resolves base attributes, rejecting unknown races and negative results.
///
/// A build without a race is not an error; it starts from the defaults.
pub fn try_resolve_base_attributes(
    build: &Build,
    races: &RaceTable,
) -> Result<BaseAttributes, ResolveError> {
    try_resolve_with_default(build, races, PlannerConfig::DEFAULT_STARTING_STAT)
}

/// Same as [`try_resolve_base_attributes`] with a configurable starting
/// value for builds without a race.
pub fn try_resolve_with_default(
    build: &Build,
    races: &RaceTable,
    default_stat: i32,
) -> Result<BaseAttributes, ResolveError> {
    let starting = match build.race.as_deref() {
        Some(id) => {
            races
                .get(id)
                .ok_or_else(|| ResolveError::UnknownRace(id.to_owned()))?
                .starting_stats
        }
        None => BaseAttributes::uniform(default_stat),
    };

    let resolved = starting.apply(&build.attribute_assignments);
    resolved.validate()?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    fn races() -> RaceTable {
        RaceTable::new(vec![
            Race::new("nord", "Nord", BaseAttributes::new(100, 110, 90)),
            Race::new("altmer", "Altmer", BaseAttributes::new(90, 90, 120)),
        ])
    }

    #[test]
    fn no_race_and_no_assignments_defaults_to_100() {
        let resolved = resolve_base_attributes(&Build::new(), &races());

        assert_eq!(resolved, BaseAttributes::uniform(100));
    }

    #[test]
    fn assigned_health_adds_to_race_starting_value() {
        let build = Build::new()
            .with_race("nord")
            .with_assignments(AttributeAssignments::default().with(Attribute::Health, 5));

        let resolved = resolve_base_attributes(&build, &races());

        // 100 base + 5 assigned
        assert_eq!(resolved.health, 105);
        assert_eq!(resolved.stamina, 110);
        assert_eq!(resolved.magicka, 90);
    }

    #[test]
    fn unknown_race_silently_uses_defaults() {
        let build = Build::new()
            .with_race("maormer")
            .with_assignments(AttributeAssignments::new(0, 0, 10));

        let resolved = resolve_base_attributes(&build, &races());

        assert_eq!(resolved, BaseAttributes::new(100, 100, 110));
    }

    #[test]
    fn configurable_default_applies_without_race() {
        let resolved = resolve_with_default(&Build::new(), &RaceTable::default(), 50);

        assert_eq!(resolved, BaseAttributes::uniform(50));
    }

    #[test]
    fn strict_resolution_rejects_unknown_race() {
        let build = Build::new().with_race("maormer");

        let err = try_resolve_base_attributes(&build, &races()).unwrap_err();

        assert_eq!(err, ResolveError::UnknownRace("maormer".into()));
        assert_eq!(err.error_code(), "unknown_race");
    }

    #[test]
    fn strict_resolution_rejects_negative_result() {
        let build = Build::new()
            .with_race("altmer")
            .with_assignments(AttributeAssignments::new(-95, 0, 0));

        let err = try_resolve_base_attributes(&build, &races()).unwrap_err();

        assert_eq!(err.error_code(), "negative_attribute");
    }

    #[test]
    fn strict_resolution_checks_configured_default() {
        let build = Build::new().with_assignments(AttributeAssignments::new(-90, 0, 0));

        assert!(try_resolve_base_attributes(&build, &races()).is_ok());

        let err = try_resolve_with_default(&build, &races(), 80).unwrap_err();
        assert_eq!(err.error_code(), "negative_attribute");
    }

    #[test]
    fn strict_resolution_matches_lenient_on_valid_input() {
        let build = Build::new()
            .with_race("altmer")
            .with_assignments(AttributeAssignments::new(2, 3, 4));

        assert_eq!(
            try_resolve_base_attributes(&build, &races()),
            Ok(resolve_base_attributes(&build, &races()))
        );
    }
}
