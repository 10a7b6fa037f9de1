//! Domain values shared by the pagination, query and rendering layers.

pub mod page;
pub mod types;
