//! Pagination types
//!
//! [`Page`] is the materialized result of one paged query; it is the only
//! place where total pages and the first/last flags are derived.
//! [`PaginatedResponse`] is the wire shape clients receive.

use serde::{Deserialize, Serialize};

/// One page of a listing, with metadata derived from the total row count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    total_elements: u64,
    total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page from the rows of page `number` (zero-based) of size `size`
    /// and the total number of matching rows.
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            u32::from(total_elements > 0)
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
        };

        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Zero-based page index
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    /// True for the final page, and for any page of an empty result
    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= u64::from(self.total_pages)
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Transform the rows, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        let current_page = page.number();
        let page_size = page.size();
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();

        Self {
            content: page.into_content(),
            current_page,
            page_size,
            total_elements,
            total_pages,
            first,
            last,
        }
    }
}
