//! Character build computations shared by the planner front ends.
//!
//! `planner-core` holds the pure parts of the planner: resolving a build's
//! base attributes, deriving secondary stats from them, and running catalog
//! entities (recipes, birthsigns, skills) through the filter/search/sort
//! pipeline. Nothing here performs I/O; datasets are loaded by
//! `planner-content` and handed in as plain values.
//!
//! # Data Flow
//!
//! ```text
//! [ Build + RaceTable ] → resolve_base_attributes → [ BaseAttributes ]
//!                                                        ↓
//!                      calculate_all_derived_stats → [ DerivedStat ]
//!
//! [ Vec<T> + FilterState ] → CatalogPipeline<T> → [ filtered / sorted ] → Paginator
//! ```
pub mod attributes;
pub mod catalog;
pub mod config;
pub mod error;
pub mod memo;
pub mod sheet;
pub mod stats;

pub use attributes::{
    Attribute, AttributeAssignments, AttributeError, BaseAttributes, Build, Race, RaceTable,
    ResolveError, resolve_base_attributes, resolve_with_default, try_resolve_base_attributes,
    try_resolve_with_default,
};
pub use catalog::{
    Catalog, CatalogEntity, CatalogPipeline, FUZZY_SEARCH, FilterState, Paginator,
    PipelineOutput, SearchField, SelectedTag, SortOrder, Sorts, TagFilters, TagGroup,
    domain::{Birthsign, Power, Recipe, Skill},
};
pub use config::{PlannerConfig, SearchConfig};
pub use error::PlannerError;
pub use memo::Memo;
pub use sheet::StatSheet;
pub use stats::{
    CacheStats, DERIVED_STAT_TABLE, DerivedStat, DerivedStatCache, DerivedStatConfig,
    StatCategory, StatWeights, calculate_all_derived_stats, calculate_derived_stat,
};
