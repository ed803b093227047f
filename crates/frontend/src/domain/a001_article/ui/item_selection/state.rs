use contracts::domain::a001_article::ArticlesPage;

use crate::shared::request_seq::RequestSequencer;

/// User-controlled catalog inputs. Changing either one triggers a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub page: u32,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl CatalogFilter {
    /// New search terms start again from the first page
    pub fn set_search(&mut self, search: String) -> bool {
        if self.search == search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Waiting for inputs (purchase flow without a provider)
    Idle,
    Loading,
    Ready,
}

/// Displayed catalog page and loading state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub status: CatalogStatus,
    pub paginator: Option<ArticlesPage>,
    pub error: Option<String>,
    seq: RequestSequencer,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            status: CatalogStatus::Idle,
            paginator: None,
            error: None,
            seq: RequestSequencer::default(),
        }
    }
}

impl CatalogState {
    /// Mark a new request in flight and return its ticket
    pub fn begin_load(&mut self) -> u64 {
        self.status = CatalogStatus::Loading;
        self.seq.issue()
    }

    /// Drop the displayed page and stop waiting (provider cleared)
    pub fn reset(&mut self) {
        self.seq.issue();
        self.status = CatalogStatus::Idle;
        self.paginator = None;
        self.error = None;
    }

    /// Returns `false` when the ticket is stale and the page was ignored
    pub fn apply_page(&mut self, ticket: u64, page: ArticlesPage) -> bool {
        if !self.seq.is_latest(ticket) {
            return false;
        }
        self.status = CatalogStatus::Ready;
        self.paginator = Some(page);
        self.error = None;
        true
    }

    /// A failed load keeps the last good page on screen
    pub fn apply_failure(&mut self, ticket: u64, message: String) -> bool {
        if !self.seq.is_latest(ticket) {
            return false;
        }
        self.status = CatalogStatus::Ready;
        self.error = Some(message);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Page currently displayed, falling back to the requested one
    pub fn current_page(&self, requested: u32) -> u32 {
        self.paginator.as_ref().map(|p| p.page).unwrap_or(requested)
    }

    pub fn total_pages(&self) -> u32 {
        self.paginator.as_ref().map(|p| p.total_pages).unwrap_or(1)
    }

    pub fn total_records(&self) -> u64 {
        self.paginator.as_ref().map(|p| p.total_records).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::selection::tests::article;
    use super::super::selection::{SelectionSet, StockCapPolicy};
    use super::*;
    use contracts::domain::a001_article::{Article, ArticleQuery};

    fn page_of(query: &ArticleQuery, articles: Vec<Article>, total_pages: u32) -> ArticlesPage {
        let mut page = ArticlesPage::empty(query);
        page.total_records = articles.len() as u64;
        page.total_pages = total_pages;
        page.articles = articles;
        page
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut filter = CatalogFilter::default();
        assert!(filter.set_page(3));
        assert!(filter.set_search("pen".to_string()));
        assert_eq!(filter.page, 1);

        assert!(!filter.set_search("pen".to_string()));
        assert!(!filter.set_page(0));
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_stale_response_discarded() {
        let query = ArticleQuery::new("", None, 1, 5);
        let mut state = CatalogState::default();

        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.apply_page(second, page_of(&query, vec![article(2, 1, None, None)], 1)));
        assert!(!state.apply_page(first, page_of(&query, vec![article(1, 1, None, None)], 1)));
        assert!(!state.apply_failure(first, "late".to_string()));

        let shown = state.paginator.as_ref().unwrap();
        assert_eq!(shown.articles[0].article_id, 2);
        assert_eq!(state.error, None);
        assert_eq!(state.status, CatalogStatus::Ready);
    }

    #[test]
    fn test_failure_keeps_last_page() {
        let query = ArticleQuery::new("", None, 1, 5);
        let mut state = CatalogState::default();

        let ticket = state.begin_load();
        state.apply_page(ticket, page_of(&query, vec![article(1, 1, None, None)], 2));

        let ticket = state.begin_load();
        assert!(state.is_loading());
        assert!(state.apply_failure(ticket, "Network error".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.paginator.as_ref().map(|p| p.articles.len()), Some(1));
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn test_reset_ignores_in_flight_request() {
        let query = ArticleQuery::new("", Some(1), 1, 5);
        let mut state = CatalogState::default();

        let ticket = state.begin_load();
        state.reset();

        assert!(!state.apply_page(ticket, page_of(&query, vec![], 1)));
        assert_eq!(state.status, CatalogStatus::Idle);
        assert_eq!(state.paginator, None);
    }

    #[test]
    fn test_selection_survives_page_and_search_changes() {
        let a = article(1, 5, Some(2.0), Some(3.0));
        let b = article(2, 5, Some(4.0), Some(6.0));
        let mut filter = CatalogFilter::default();
        let mut state = CatalogState::default();
        let mut selection = SelectionSet::new();

        let q1 = ArticleQuery::new(&filter.search, None, filter.page, 5);
        let ticket = state.begin_load();
        state.apply_page(ticket, page_of(&q1, vec![a.clone()], 2));
        selection.toggle(&a, true);
        selection.set_quantity(1, "3", StockCapPolicy::Advisory);

        filter.set_page(2);
        let q2 = ArticleQuery::new(&filter.search, None, filter.page, 5);
        let ticket = state.begin_load();
        state.apply_page(ticket, page_of(&q2, vec![b.clone()], 2));
        selection.toggle(&b, true);

        filter.set_search("zzz".to_string());
        let q3 = ArticleQuery::new(&filter.search, None, filter.page, 5);
        let ticket = state.begin_load();
        state.apply_page(ticket, page_of(&q3, vec![], 1));

        assert_eq!(state.current_page(filter.page), 1);
        assert!(state.paginator.as_ref().unwrap().is_empty());
        assert_eq!(selection.ids(), vec![1, 2]);
        assert_eq!(selection.get(1).map(|e| e.quantity), Some(3));
        assert_eq!(selection.get(2).map(|e| e.quantity), Some(1));
    }
}
