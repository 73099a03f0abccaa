//! Skill catalog.

use core::cmp::Ordering;

use crate::attributes::Attribute;
use crate::catalog::{
    CATEGORY_WEIGHT, CatalogEntity, CatalogPipeline, DESCRIPTION_WEIGHT, LIST_WEIGHT, NAME_WEIGHT,
    SearchField, Sorts, TagFilters, compare_names, priority_of,
};

pub const CATEGORIES: &str = "Categories";
pub const ATTRIBUTES: &str = "Attributes";

pub const SORT_CATEGORY: &str = "category";
pub const SORT_ABILITIES: &str = "abilities";

pub const CATEGORY_PRIORITY: &[&str] = &["Combat", "Magic", "Stealth"];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SkillRecord", rename_all = "camelCase"))]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Attribute raised by leveling this skill, if any.
    pub governing_attribute: Option<Attribute>,
    pub abilities: Vec<String>,
    ability_count: usize,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            governing_attribute: None,
            abilities: Vec::new(),
            ability_count: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_governing_attribute(mut self, attribute: Attribute) -> Self {
        self.governing_attribute = Some(attribute);
        self
    }

    #[must_use]
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self.ability_count = self.abilities.len();
        self
    }

    pub fn ability_count(&self) -> usize {
        self.ability_count
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    governing_attribute: Option<Attribute>,
    #[serde(default)]
    abilities: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<SkillRecord> for Skill {
    fn from(record: SkillRecord) -> Self {
        let skill = Skill::new(record.id, record.name, record.category)
            .with_description(record.description)
            .with_abilities(record.abilities);
        match record.governing_attribute {
            Some(attribute) => skill.with_governing_attribute(attribute),
            None => skill,
        }
    }
}

impl CatalogEntity for Skill {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        let mut fields = vec![
            SearchField::new(self.name.as_str(), NAME_WEIGHT),
            SearchField::new(self.description.as_str(), DESCRIPTION_WEIGHT),
            SearchField::new(self.category.as_str(), CATEGORY_WEIGHT),
        ];
        fields.extend(
            self.abilities
                .iter()
                .map(|ability| SearchField::new(ability.as_str(), LIST_WEIGHT)),
        );
        fields
    }
}

fn category_values(skill: &Skill) -> Vec<&str> {
    vec![skill.category.as_str()]
}

fn attribute_values(skill: &Skill) -> Vec<&str> {
    skill
        .governing_attribute
        .as_ref()
        .map(AsRef::<str>::as_ref)
        .into_iter()
        .collect()
}

fn governed_by(skill: &Skill, value: &str) -> bool {
    skill
        .governing_attribute
        .is_some_and(|attribute| attribute.as_ref().eq_ignore_ascii_case(value))
}

fn by_category(a: &Skill, b: &Skill) -> Ordering {
    priority_of(CATEGORY_PRIORITY, &a.category)
        .cmp(&priority_of(CATEGORY_PRIORITY, &b.category))
        .then_with(|| compare_names(&a.category, &b.category))
}

fn by_ability_count(a: &Skill, b: &Skill) -> Ordering {
    b.ability_count.cmp(&a.ability_count)
}

pub fn filters() -> TagFilters<Skill> {
    TagFilters::new()
        .with(
            CATEGORIES,
            |skill, value| skill.category.eq_ignore_ascii_case(value),
            category_values,
        )
        .with(ATTRIBUTES, governed_by, attribute_values)
}

pub fn sorts() -> Sorts<Skill> {
    Sorts::new()
        .with(SORT_CATEGORY, by_category)
        .with(SORT_ABILITIES, by_ability_count)
}

pub fn pipeline() -> CatalogPipeline<Skill> {
    CatalogPipeline::new(filters(), sorts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterState, SelectedTag, SortOrder};

    fn skills() -> Vec<Skill> {
        vec![
            Skill::new("sneak", "Sneak", "Stealth")
                .with_governing_attribute(Attribute::Stamina)
                .with_abilities(["Muffled Movement"]),
            Skill::new("destruction", "Destruction", "Magic")
                .with_governing_attribute(Attribute::Magicka)
                .with_abilities(["Augmented Flames", "Augmented Frost", "Impact"]),
            Skill::new("block", "Block", "Combat")
                .with_governing_attribute(Attribute::Health)
                .with_abilities(["Shield Wall", "Quick Reflexes"]),
            Skill::new("speech", "Speech", "Stealth"),
        ]
    }

    fn sorted_ids(state: &FilterState) -> Vec<String> {
        let skills = skills();
        pipeline()
            .run(&skills, state)
            .sorted
            .into_iter()
            .map(|s| s.id.clone())
            .collect()
    }

    #[test]
    fn attribute_tag_is_case_insensitive() {
        let state = FilterState::default().with_tag(SelectedTag::new(ATTRIBUTES, "Magicka"));

        assert_eq!(sorted_ids(&state), vec!["destruction"]);
    }

    #[test]
    fn category_sort_groups_by_school() {
        let state = FilterState::default().with_sort(SORT_CATEGORY, SortOrder::Ascending);

        assert_eq!(sorted_ids(&state), vec!["block", "destruction", "sneak", "speech"]);
    }

    #[test]
    fn abilities_sort_descending_count() {
        let state = FilterState::default().with_sort(SORT_ABILITIES, SortOrder::Ascending);

        assert_eq!(sorted_ids(&state), vec!["destruction", "block", "sneak", "speech"]);
    }

    #[test]
    fn attribute_values_skip_ungoverned_skills() {
        let skills = skills();

        let groups = filters().available(&skills);

        assert_eq!(groups[1].category, ATTRIBUTES);
        assert_eq!(groups[1].values, vec!["health", "magicka", "stamina"]);
    }
}
