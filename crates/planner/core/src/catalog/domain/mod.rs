//! Catalog entities and their pipelines.
//!
//! Each module contributes the entity type, its tag categories and its named
//! sorts; filtering, search and pagination come from the shared pipeline.

pub mod birthsigns;
pub mod recipes;
pub mod skills;

pub use birthsigns::{Birthsign, Power};
pub use recipes::Recipe;
pub use skills::Skill;

/// Case-insensitive list membership used by list-valued tag categories.
fn contains(values: &[String], value: &str) -> bool {
    values.iter().any(|v| v.eq_ignore_ascii_case(value))
}
