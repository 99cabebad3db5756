//! Shared types used across the API surface.

mod pagination;
mod response;

pub use pagination::{PageQuery, PageRequest};
pub use response::{ApiResponse, Created};
