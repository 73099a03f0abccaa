use std::fs;

use planner_content::{ContentFactory, DatasetLoader};
use planner_core::catalog::domain::{recipes, skills};
use planner_core::{Attribute, Catalog, Recipe, SelectedTag, StatSheet, resolve_base_attributes};
use tempfile::TempDir;

#[test]
fn bundled_data_loads() {
    let factory = ContentFactory::bundled();

    let races = factory.load_races().unwrap();
    let recipes = factory.load_recipes().unwrap();
    let birthsigns = factory.load_birthsigns().unwrap();
    let skills = factory.load_skills().unwrap();
    let config = factory.load_config().unwrap();

    assert!(races.get("nord").is_some());
    assert_eq!(recipes.len(), 7);
    assert_eq!(birthsigns.len(), 6);
    assert_eq!(skills.len(), 6);
    assert_eq!(config.page_size, 50);
}

#[test]
fn counts_are_computed_on_load() {
    let factory = ContentFactory::bundled();

    let recipes = factory.load_recipes().unwrap();
    let soup = recipes.iter().find(|r| r.id == "frost-salt-soup").unwrap();
    let birthsigns = factory.load_birthsigns().unwrap();
    let lord = birthsigns.iter().find(|b| b.id == "lord").unwrap();
    let skills = factory.load_skills().unwrap();
    let speech = skills.iter().find(|s| s.id == "speech").unwrap();

    assert_eq!(soup.effect_count(), 3);
    assert_eq!(lord.power_count(), 2);
    assert_eq!(speech.ability_count(), 0);
    assert_eq!(speech.governing_attribute, None);
}

#[test]
fn saved_build_resolves_against_bundled_races() {
    let factory = ContentFactory::bundled();
    let races = factory.load_races().unwrap();

    let build = factory.load_build("builds/altmer-mage.json").unwrap();
    let base = resolve_base_attributes(&build, &races);

    assert_eq!(base.magicka, 170);
    assert_eq!(base.health, 90);
    assert_eq!(base.stamina, 80);

    let mut sheet = StatSheet::new(races);
    assert_eq!(sheet.base_attributes(&build), base);
}

#[test]
fn bundled_recipe_catalog_filters() {
    let recipes = ContentFactory::bundled().load_recipes().unwrap();
    let mut catalog = Catalog::new(recipes, recipes::pipeline());

    catalog.add_tag(SelectedTag::new(recipes::CATEGORIES, "Dessert"));

    let names: Vec<&str> = catalog.display_items().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Apple Pie", "Cherry Tart"]);
}

#[test]
fn bundled_skill_attribute_tags() {
    let skills = ContentFactory::bundled().load_skills().unwrap();
    let catalog = Catalog::new(skills, skills::pipeline());

    let groups = catalog.available_tags();
    let attributes = groups
        .iter()
        .find(|group| group.category == skills::ATTRIBUTES)
        .unwrap();

    assert_eq!(
        attributes.values,
        vec![
            Attribute::Health.to_string(),
            Attribute::Magicka.to_string(),
            Attribute::Stamina.to_string(),
        ]
    );
}

#[test]
fn non_array_dataset_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, r#"{"error": "not found"}"#).unwrap();

    let recipes: Vec<Recipe> = DatasetLoader::load(&path).unwrap();

    assert!(recipes.is_empty());
}

#[test]
fn custom_data_dir_with_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("planner.toml"), "page_size = 2\n").unwrap();
    fs::write(
        dir.path().join("recipes.json"),
        r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}]"#,
    )
    .unwrap();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().unwrap();
    let mut catalog = Catalog::with_config(factory.load_recipes().unwrap(), recipes::pipeline(), &config);

    assert_eq!(catalog.display_items().len(), 2);
    assert!(catalog.load_more());
    assert_eq!(catalog.display_items().len(), 3);
}

#[test]
fn malformed_record_reports_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.json"), r#"[{"name": "Ok"}, 42]"#).unwrap();

    let err = ContentFactory::new(dir.path()).load_skills().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("record 1"));
    assert!(message.contains("skills.json"));
}
