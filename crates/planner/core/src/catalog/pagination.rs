//! Incremental "load more" pagination.

use crate::config::PlannerConfig;

/// Visible window over a list that grows one page at a time.
///
/// The paginator remembers the names of the list it was last synced with.
/// Re-syncing with a list of identical content (same length, same name at
/// every index) keeps the window; any other change resets to the first page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    pages: usize,
    fingerprint: Vec<String>,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: 1,
            fingerprint: Vec::new(),
        }
    }

    /// Updates the tracked list. Returns `true` if the window was reset.
    pub fn sync<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> bool {
        let names: Vec<&str> = names.into_iter().collect();
        let unchanged = names.len() == self.fingerprint.len()
            && names.iter().zip(&self.fingerprint).all(|(a, b)| *a == b.as_str());
        if unchanged {
            return false;
        }

        if self.pages > 1 {
            tracing::debug!(
                pages = self.pages,
                len = names.len(),
                "List content changed, resetting to first page"
            );
        }
        self.fingerprint = names.into_iter().map(str::to_owned).collect();
        self.pages = 1;
        true
    }

    /// Length of the tracked list.
    pub fn len(&self) -> usize {
        self.fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprint.is_empty()
    }

    pub fn page(&self) -> usize {
        self.pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `min(page * page_size, len)`.
    pub fn visible_len(&self) -> usize {
        self.pages.saturating_mul(self.page_size).min(self.len())
    }

    pub fn has_more(&self) -> bool {
        self.visible_len() < self.len()
    }

    /// Extends the window by one page; does nothing when everything is
    /// already visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.pages += 1;
        true
    }

    /// Visible prefix of `items`.
    pub fn window<'a, U>(&self, items: &'a [U]) -> &'a [U] {
        &items[..self.visible_len().min(items.len())]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PlannerConfig::DEFAULT_PAGE_SIZE)
    }
}
