//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use planner_core::{PlannerConfig, SearchConfig};

/// Settings read from the environment (and `.env`).
///
/// Environment variables:
/// - `PLANNER_DATA_DIR` - Dataset directory (default: bundled sample data)
/// - `PLANNER_PAGE_SIZE` - Catalog entries per page, overrides `planner.toml`
/// - `PLANNER_MIN_RELEVANCE` - Fuzzy search cutoff in `[0, 1]`, overrides `planner.toml`
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub min_relevance: Option<f64>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("PLANNER_DATA_DIR"),
            page_size: read_env::<usize>("PLANNER_PAGE_SIZE"),
            min_relevance: read_env::<f64>("PLANNER_MIN_RELEVANCE"),
        }
    }

    /// Applies the environment overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(min_relevance) = self.min_relevance.filter(|v| v.is_finite()) {
            config.search = SearchConfig::new(min_relevance.clamp(0.0, 1.0));
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let cli = CliConfig {
            data_dir: None,
            page_size: Some(0),
            min_relevance: Some(4.0),
        };

        let config = cli.apply(PlannerConfig::default());

        assert_eq!(config.page_size, 1);
        assert_eq!(config.search.min_relevance, 1.0);
    }

    #[test]
    fn no_overrides_keep_config() {
        let config = CliConfig::default().apply(PlannerConfig::default().with_page_size(7));

        assert_eq!(config.page_size, 7);
    }
}
