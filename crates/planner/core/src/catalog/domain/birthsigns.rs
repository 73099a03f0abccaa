//! Birthsign catalog.

use core::cmp::Ordering;

use crate::catalog::{
    CATEGORY_WEIGHT, CatalogEntity, CatalogPipeline, DESCRIPTION_WEIGHT, LIST_WEIGHT, NAME_WEIGHT,
    SearchField, Sorts, TagFilters, compare_names, priority_of,
};

pub const GROUPS: &str = "Groups";
pub const POWERS: &str = "Powers";

pub const SORT_GROUP: &str = "group";
pub const SORT_POWERS: &str = "powers";

pub const GROUP_PRIORITY: &[&str] = &["Warrior", "Mage", "Thief", "Serpent"];

/// A power or ability granted by a birthsign.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl Power {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BirthsignRecord", rename_all = "camelCase"))]
pub struct Birthsign {
    pub id: String,
    pub name: String,
    /// Guardian constellation (Warrior, Mage, Thief or Serpent).
    pub group: String,
    pub description: String,
    pub powers: Vec<Power>,
    power_count: usize,
}

impl Birthsign {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
            description: String::new(),
            powers: Vec::new(),
            power_count: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_powers(mut self, powers: impl IntoIterator<Item = Power>) -> Self {
        self.powers = powers.into_iter().collect();
        self.power_count = self.powers.len();
        self
    }

    pub fn power_count(&self) -> usize {
        self.power_count
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct BirthsignRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    group: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    powers: Vec<Power>,
}

#[cfg(feature = "serde")]
impl From<BirthsignRecord> for Birthsign {
    fn from(record: BirthsignRecord) -> Self {
        Birthsign::new(record.id, record.name, record.group)
            .with_description(record.description)
            .with_powers(record.powers)
    }
}

impl CatalogEntity for Birthsign {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        let mut fields = vec![
            SearchField::new(self.name.as_str(), NAME_WEIGHT),
            SearchField::new(self.description.as_str(), DESCRIPTION_WEIGHT),
            SearchField::new(self.group.as_str(), CATEGORY_WEIGHT),
        ];
        fields.extend(
            self.powers
                .iter()
                .map(|power| SearchField::new(power.name.as_str(), LIST_WEIGHT)),
        );
        fields
    }
}

fn group_values(birthsign: &Birthsign) -> Vec<&str> {
    vec![birthsign.group.as_str()]
}

fn power_values(birthsign: &Birthsign) -> Vec<&str> {
    birthsign.powers.iter().map(|power| power.name.as_str()).collect()
}

fn has_power(birthsign: &Birthsign, value: &str) -> bool {
    birthsign
        .powers
        .iter()
        .any(|power| power.name.eq_ignore_ascii_case(value))
}

fn by_group(a: &Birthsign, b: &Birthsign) -> Ordering {
    priority_of(GROUP_PRIORITY, &a.group)
        .cmp(&priority_of(GROUP_PRIORITY, &b.group))
        .then_with(|| compare_names(&a.group, &b.group))
}

fn by_power_count(a: &Birthsign, b: &Birthsign) -> Ordering {
    b.power_count.cmp(&a.power_count)
}

pub fn filters() -> TagFilters<Birthsign> {
    TagFilters::new()
        .with(
            GROUPS,
            |birthsign, value| birthsign.group.eq_ignore_ascii_case(value),
            group_values,
        )
        .with(POWERS, has_power, power_values)
}

pub fn sorts() -> Sorts<Birthsign> {
    Sorts::new()
        .with(SORT_GROUP, by_group)
        .with(SORT_POWERS, by_power_count)
}

pub fn pipeline() -> CatalogPipeline<Birthsign> {
    CatalogPipeline::new(filters(), sorts())
}
