//! Page request builder
//!
//! Turns raw listing parameters (page index, page size, sort tokens) into a
//! normalized [`PageRequest`]. Nothing here fails: oversized pages are
//! clamped, malformed sort tokens are dropped and unknown directions read as
//! ascending.

/// Upper bound for the paginated product listings
pub const MAX_PAGE_SIZE: i64 = 50;

/// Upper bound for the generic pageable listing (`/query-sort`)
pub const PAGEABLE_MAX_PAGE_SIZE: i64 = 2000;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

pub const DEFAULT_TOP_LIMIT: i64 = 5;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// `desc` in any letter case is descending, anything else ascending
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Strict keyword match, used to tell a trailing direction from a field name
    fn from_keyword(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One `(field, direction)` criterion of a sort chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Normalized query descriptor for one page of products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Vec<SortOrder>,
    category_id: Option<i64>,
}

impl PageRequest {
    fn unsorted(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
            category_id: None,
        }
    }

    /// Page without ordering (store default order)
    pub fn basic(page: u32, size: i64) -> Self {
        Self::unsorted(page, clamp_page_size(size, MAX_PAGE_SIZE))
    }

    /// Page ordered by a single field
    ///
    /// A blank field yields an unsorted page.
    pub fn single_sort(page: u32, size: i64, field: &str, direction: &str) -> Self {
        let mut request = Self::basic(page, size);
        let field = field.trim();
        if !field.is_empty() {
            request
                .sort
                .push(SortOrder::new(field, Direction::parse_lenient(direction)));
        }
        request
    }

    /// Page ordered by a chain of `"field,direction"` tokens, applied left to right
    pub fn multi_sort<S: AsRef<str>>(page: u32, size: i64, tokens: &[S]) -> Self {
        let mut request = Self::basic(page, size);
        request.sort = tokens
            .iter()
            .filter_map(|token| parse_sort_pair(token.as_ref()))
            .collect();
        request
    }

    /// Page restricted to one category, unsorted
    pub fn by_category(category_id: i64, page: u32, size: i64) -> Self {
        let mut request = Self::basic(page, size);
        request.category_id = Some(category_id);
        request
    }

    /// First `limit` products by descending price
    ///
    /// The limit is not bound by [`MAX_PAGE_SIZE`]; it is only kept positive.
    pub fn top_n(limit: i64) -> Self {
        let size = u32::try_from(limit.max(1)).unwrap_or(u32::MAX);
        let mut request = Self::unsorted(0, size);
        request.sort.push(SortOrder::new("price", Direction::Desc));
        request
    }

    /// Generic pageable listing
    ///
    /// Each token is `field[,field...][,direction]`; a trailing direction
    /// keyword applies to every field before it.
    pub fn pageable<S: AsRef<str>>(page: u32, size: i64, tokens: &[S]) -> Self {
        let mut request = Self::unsorted(page, clamp_page_size(size, PAGEABLE_MAX_PAGE_SIZE));
        for token in tokens {
            request.sort.extend(parse_pageable_token(token.as_ref()));
        }
        request
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    /// Rows to skip before this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

/// Clamp a requested page size into `[1, max]`
pub fn clamp_page_size(size: i64, max: i64) -> u32 {
    u32::try_from(size.clamp(1, max)).unwrap_or(1)
}

/// `"field,direction"` with exactly two parts; anything else is dropped.
///
/// Trailing empty parts are ignored, so `"name,asc,"` still counts as two.
fn parse_sort_pair(token: &str) -> Option<SortOrder> {
    let mut parts: Vec<&str> = token.split(',').collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [field, direction] if !field.trim().is_empty() => Some(SortOrder::new(
            field.trim(),
            Direction::parse_lenient(direction),
        )),
        _ => None,
    }
}

fn parse_pageable_token(token: &str) -> Vec<SortOrder> {
    let elements: Vec<&str> = token
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();

    let (fields, direction) = match elements.split_last() {
        Some((last, rest)) => match Direction::from_keyword(last) {
            Some(direction) => (rest, direction),
            None => (elements.as_slice(), Direction::Asc),
        },
        None => return Vec::new(),
    };

    fields
        .iter()
        .map(|field| SortOrder::new(*field, direction))
        .collect()
}
