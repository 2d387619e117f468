//! VLSM planning logic.
//!
//! - `allocator` - contiguous power-of-two subnet allocation
//! - `requirements` - host count list parsing and ordering
//! - `query` - `network` / `hosts` query-string persistence

mod allocator;
mod query;
mod requirements;

// Re-export public functions
pub use allocator::{allocate, allocate_with};
pub use query::QueryParams;
pub use requirements::{parse_host_requirements, parse_host_requirements_with, sort_descending};
