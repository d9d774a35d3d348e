//! Shared types for the catalog service
//!
//! Error types, entity and payload models, and the paginated response
//! structures used by the server and its HTTP clients.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use pagination::{Page, PaginatedResponse};
pub use serde::{Deserialize, Serialize};
