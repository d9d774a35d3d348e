//! Product listing pipeline
//!
//! ```text
//! raw params ─► request (PageRequest) ─► listing (store + Page) ─► assembler (PaginatedResponse)
//! ```

pub mod assembler;
pub mod listing;
pub mod request;

pub use listing::{ProductStore, fetch};
pub use request::{
    DEFAULT_PAGE_SIZE, DEFAULT_TOP_LIMIT, Direction, MAX_PAGE_SIZE, PAGEABLE_MAX_PAGE_SIZE,
    PageRequest, SortOrder,
};
