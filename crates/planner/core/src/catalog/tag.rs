//! User-selected filter tags.

use core::fmt;
use core::str::FromStr;

/// Reserved tag category carrying free text for fuzzy search.
pub const FUZZY_SEARCH: &str = "Fuzzy Search";

/// A filter criterion: a category (e.g. `Ingredients`) and a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedTag {
    pub category: String,
    pub value: String,
}

impl SelectedTag {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Free-text tag matched by fuzzy search instead of a category predicate.
    pub fn fuzzy(text: impl Into<String>) -> Self {
        Self::new(FUZZY_SEARCH, text)
    }

    pub fn is_fuzzy(&self) -> bool {
        self.category == FUZZY_SEARCH
    }
}

impl fmt::Display for SelectedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagParseError {
    #[error("expected CATEGORY=VALUE, got '{0}'")]
    MissingSeparator(String),

    #[error("tag '{0}' has an empty category or value")]
    Empty(String),
}

/// Parses `Category=Value`; surrounding whitespace is trimmed from both parts.
impl FromStr for SelectedTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once('=')
            .ok_or_else(|| TagParseError::MissingSeparator(s.to_owned()))?;
        let (category, value) = (category.trim(), value.trim());
        if category.is_empty() || value.is_empty() {
            return Err(TagParseError::Empty(s.to_owned()));
        }
        Ok(Self::new(category, value))
    }
}
