//! Derived stats - the second layer of the build computation.
//!
//! ```text
//! [ BaseAttributes ]
//!      ↓  weighted sum per stat
//! [ soft-cap curve: floor(prefactor × √(sum − threshold)) ]
//!      ↓
//! [ DerivedStat ]
//! ```
//!
//! Derived stats are never stored. [`calculate_all_derived_stats`] rebuilds
//! them from scratch; [`DerivedStatCache`] is the opt-in memoization layer.

pub mod cache;
pub mod config;
pub mod derived;

pub use cache::{CacheStats, DerivedStatCache};
pub use config::{DERIVED_STAT_TABLE, DerivedStatConfig, StatCategory, StatWeights};
pub use derived::{DerivedStat, calculate_all_derived_stats, calculate_derived_stat};
