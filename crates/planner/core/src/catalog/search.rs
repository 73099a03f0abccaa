//! Weighted fuzzy search over catalog entities.
//!
//! Each field is scored with nucleo's fuzzy matcher and normalized against
//! the query's score on itself, giving a similarity in `[0, 1]`. The field
//! weight (relative to the heaviest field) scales that similarity, and an
//! entity's relevance is its best field.

use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Matcher, Utf32Str};

use crate::catalog::CatalogEntity;
use crate::catalog::tag::SelectedTag;
use crate::config::SearchConfig;

pub const NAME_WEIGHT: f64 = 1.0;
/// Effect, power and ability names.
pub const LIST_WEIGHT: f64 = 0.6;
pub const DESCRIPTION_WEIGHT: f64 = 0.4;
pub const CATEGORY_WEIGHT: f64 = 0.3;

/// Builds the search query: fuzzy tag values, then the free search term.
pub fn search_query(tags: &[SelectedTag], search_term: &str) -> String {
    tags.iter()
        .filter(|tag| tag.is_fuzzy())
        .map(|tag| tag.value.trim())
        .chain(std::iter::once(search_term.trim()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compiled query plus matcher state for one search pass.
pub(crate) struct FuzzySearch {
    pattern: Pattern,
    matcher: Matcher,
    self_score: f64,
    min_relevance: f64,
}

impl FuzzySearch {
    /// Returns `None` for a blank query (nothing to rank).
    pub(crate) fn new(query: &str, config: &SearchConfig) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let pattern = Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
        let mut matcher = Matcher::default();
        let mut buf = Vec::new();
        let self_score = pattern
            .score(Utf32Str::new(query, &mut buf), &mut matcher)
            .filter(|score| *score > 0)
            .map_or(1.0, f64::from);

        Some(Self {
            pattern,
            matcher,
            self_score,
            min_relevance: config.min_relevance,
        })
    }

    /// Relevance of `entity` in `[0, 1]`, or `None` if no field matches.
    pub(crate) fn relevance<T: CatalogEntity>(&mut self, entity: &T) -> Option<f64> {
        let fields = entity.search_fields();
        let max_weight = fields
            .iter()
            .map(|field| field.weight)
            .fold(0.0_f64, f64::max);
        if max_weight <= 0.0 {
            return None;
        }

        let mut buf = Vec::new();
        let mut best: Option<f64> = None;
        for field in &fields {
            let Some(score) = self
                .pattern
                .score(Utf32Str::new(&field.text, &mut buf), &mut self.matcher)
            else {
                continue;
            };
            let similarity = (f64::from(score) / self.self_score).min(1.0);
            let weighted = similarity * field.weight / max_weight;
            best = Some(best.map_or(weighted, |b| b.max(weighted)));
        }
        best
    }

    /// Keeps the candidates relevant to the query, most relevant first.
    ///
    /// Ties keep their input order.
    pub(crate) fn rank<T: CatalogEntity>(&mut self, entities: &[T], candidates: Vec<usize>) -> Vec<usize> {
        let mut scored: Vec<(usize, f64)> = candidates
            .into_iter()
            .filter_map(|index| {
                let relevance = self.relevance(&entities[index])?;
                (relevance >= self.min_relevance).then_some((index, relevance))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().map(|(index, _)| index).collect()
    }
}
