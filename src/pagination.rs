//! Offset-based pagination primitives.
//!
//! A page is identified by a 1-based index and a page size. Page `n` skips
//! `(n - 1) * page_size` rows of the globally ordered listing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page must be at least 1 (got {0})")]
    InvalidPage(i64),

    #[error("pageSize must be at least 1 (got {0})")]
    InvalidPageSize(i64),
}

fn at_least_one(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v >= 1)
}

/// A validated page request. Both fields are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validate raw page parameters.
    ///
    /// # Errors
    ///
    /// Returns `PageError` if `page < 1` or `page_size < 1`.
    pub fn new(page: i64, page_size: i64) -> Result<Self, PageError> {
        Self::with_defaults(Some(page), Some(page_size))
    }

    /// Like [`Self::new`], with absent parameters taking `DEFAULT_PAGE` and
    /// `DEFAULT_PAGE_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns `PageError` if a supplied value is below 1.
    pub fn with_defaults(page: Option<i64>, page_size: Option<i64>) -> Result<Self, PageError> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(p) => at_least_one(p).ok_or(PageError::InvalidPage(p))?,
        };
        let page_size = match page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(s) => at_least_one(s).ok_or(PageError::InvalidPageSize(s))?,
        };

        Ok(Self { page, page_size })
    }

    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Rows to skip before this page starts, capped at `i64::MAX` so it can
    /// always be bound as a signed SQL integer.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX.unsigned_abs())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `ceil(total_count / page_size)`, which is 0 for an empty table.
#[must_use]
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// One page of a listing plus the counts needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// Items on this page, at most `pageSize` of them
    pub items: Vec<T>,
    /// 1-based page index that was requested
    pub page: u64,
    /// Page size that was requested
    pub page_size: u64,
    /// Total rows in the table at the time of the read
    pub total_count: u64,
    /// `ceil(totalCount / pageSize)`, 0 when there are no rows
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            page: request.page(),
            page_size: request.page_size(),
            total_count,
            total_pages: total_pages(total_count, request.page_size()),
        }
    }

    /// Convert the item type, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }

    /// True when no page follows this one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_parameters() {
        assert_eq!(PageRequest::new(0, 10), Err(PageError::InvalidPage(0)));
        assert_eq!(PageRequest::new(-3, 10), Err(PageError::InvalidPage(-3)));
        assert_eq!(PageRequest::new(1, 0), Err(PageError::InvalidPageSize(0)));
        assert_eq!(PageRequest::new(1, -1), Err(PageError::InvalidPageSize(-1)));
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(
            PageRequest::new(i64::MAX, i64::MAX).unwrap().offset(),
            i64::MAX.unsigned_abs()
        );
    }

    #[test]
    fn absent_parameters_take_defaults() {
        assert_eq!(
            PageRequest::with_defaults(None, None),
            Ok(PageRequest::default())
        );

        let request = PageRequest::with_defaults(Some(3), None).unwrap();
        assert_eq!(request.page(), 3);
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);

        assert_eq!(
            PageRequest::with_defaults(None, Some(0)),
            Err(PageError::InvalidPageSize(0))
        );
    }

    #[test]
    fn default_request_is_first_page_of_twenty() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 20);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 1), 25);

        for total in 0..200u64 {
            for size in 1..30u64 {
                let expected = (total as f64 / size as f64).ceil() as u64;
                assert_eq!(total_pages(total, size), expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn last_page_detection() {
        let request = PageRequest::new(3, 10).unwrap();
        let page: PagedResult<i32> = PagedResult::new(vec![1, 2, 3, 4, 5], request, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.is_last_page());

        let empty: PagedResult<i32> = PagedResult::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.is_last_page());
    }

    #[test]
    fn paged_result_serializes_camel_case() {
        let page = PagedResult::new(vec![7], PageRequest::new(2, 1).unwrap(), 2).map(|v| v * 2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [14],
                "page": 2,
                "pageSize": 1,
                "totalCount": 2,
                "totalPages": 2,
            })
        );
    }
}
