use super::api::{ClientError, ReadingsApi};
use super::stats::ReadingStats;
use super::{Reading, ReadingDraft};
use crate::pagination::PagedResult;

/// What a list view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet
    Loading,
    /// The last attempt to load the first page failed
    Error(String),
    /// Loaded, and there are no readings
    Empty,
    Loaded,
}

/// Accumulates pages of readings in page order.
///
/// Fetches are strictly sequential: the next page is requested only after the
/// previous one arrived. The feed stops once a page reports
/// `page >= totalPages`.
pub struct ReadingsFeed<A> {
    api: A,
    page_size: u64,
    pages: Vec<PagedResult<Reading>>,
    last_error: Option<String>,
}

impl<A: ReadingsApi> ReadingsFeed<A> {
    pub fn new(api: A, page_size: u64) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            pages: Vec::new(),
            last_error: None,
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// True until a fetched page reports itself as the last one.
    pub fn has_next_page(&self) -> bool {
        self.pages.last().is_none_or(|p| !p.is_last_page())
    }

    fn next_page_index(&self) -> u64 {
        self.pages.last().map_or(1, |p| p.page + 1)
    }

    /// Fetch the following page. Returns `Ok(false)` without a request once
    /// the end has been reached.
    ///
    /// If the first page fails nothing is kept; a later page failing keeps
    /// the pages already loaded so the caller can retry.
    ///
    /// # Errors
    ///
    /// Returns the `ClientError` from the underlying request.
    pub async fn fetch_next_page(&mut self) -> Result<bool, ClientError> {
        if !self.has_next_page() {
            return Ok(false);
        }

        let page = self.next_page_index();
        match self.api.fetch_page(page, self.page_size).await {
            Ok(result) => {
                tracing::debug!(
                    page = result.page,
                    total_pages = result.total_pages,
                    items = result.items.len(),
                    "Fetched readings page"
                );
                self.pages.push(result);
                self.last_error = None;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Failed to fetch readings page");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Keep fetching until the last page. Returns the number of readings held.
    ///
    /// # Errors
    ///
    /// Stops at the first failed request and returns its error.
    pub async fn load_all(&mut self) -> Result<usize, ClientError> {
        while self.fetch_next_page().await? {}
        Ok(self.len())
    }

    /// Drop all accumulated pages.
    pub fn invalidate(&mut self) {
        self.pages.clear();
        self.last_error = None;
    }

    /// Discard everything and load the first page again.
    ///
    /// # Errors
    ///
    /// Returns the `ClientError` from the first-page request.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.invalidate();
        self.fetch_next_page().await.map(|_| ())
    }

    /// Create a reading, then reload from the first page so the new row
    /// appears wherever the server ranks it.
    ///
    /// # Errors
    ///
    /// Returns the `ClientError` from the create request. A failed reload is
    /// reported through [`Self::state`] instead.
    pub async fn submit(&mut self, draft: ReadingDraft) -> Result<Reading, ClientError> {
        let created = self.api.create(&draft).await?;
        tracing::info!(id = created.id, "Reading submitted");

        if let Err(e) = self.refresh().await {
            tracing::warn!(error = %e, "Reload after submit failed");
        }
        Ok(created)
    }

    /// All loaded readings, newest first.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Server-side total from the most recent page.
    pub fn total_count(&self) -> Option<u64> {
        self.pages.last().map(|p| p.total_count)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn state(&self) -> ListState {
        match (&self.last_error, self.pages.is_empty()) {
            (Some(e), true) => ListState::Error(e.clone()),
            (None, true) => ListState::Loading,
            (_, false) if self.is_empty() => ListState::Empty,
            (_, false) => ListState::Loaded,
        }
    }

    pub fn stats(&self) -> Option<ReadingStats> {
        ReadingStats::from_readings(self.readings())
    }
}
