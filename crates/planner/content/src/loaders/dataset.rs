//! JSON dataset loader.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Loader for JSON datasets holding a top-level array of records.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load every record of the JSON array in `path`.
    ///
    /// A file whose top-level value is not an array yields no records (with a
    /// warning) rather than an error. A record that does not match `T` is an
    /// error naming its index.
    pub fn load<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
        let content = read_file(path)?;
        let records = Self::parse(&content, &path.display().to_string())?;

        tracing::info!(path = %path.display(), count = records.len(), "Loaded dataset");
        Ok(records)
    }

    /// Parse a dataset already in memory; `source` names it in messages.
    pub fn parse<T: DeserializeOwned>(content: &str, source: &str) -> LoadResult<Vec<T>> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dataset JSON {}: {}", source, e))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                tracing::warn!(
                    source,
                    kind = json_kind(&other),
                    "Dataset is not an array, using empty list"
                );
                return Ok(Vec::new());
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| {
                    anyhow::anyhow!("Failed to parse record {} of {}: {}", index, source, e)
                })
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
