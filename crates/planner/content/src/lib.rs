//! Data-driven planner content and loaders.
//!
//! This crate reads the static datasets the planner works on:
//! - Races (starting attributes, JSON)
//! - Recipes, birthsigns and skills (catalog entities, JSON)
//! - Saved builds (JSON)
//! - Planner configuration (TOML)
//!
//! Loaders produce `planner-core` types directly; the core never touches the
//! filesystem. A sample dataset ships in `data/` (see [`ContentFactory::bundled`]).

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BuildLoader, ConfigLoader, ContentFactory, DatasetLoader, LoadResult};

/// Directory of the sample dataset shipped with this crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
