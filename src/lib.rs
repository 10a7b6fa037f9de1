//! Page-number controls for paginated portfolio and asset lists.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod events;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod query;

#[cfg(feature = "render")]
pub mod models;
#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "data")]
pub use domain::page::{PageDescriptor, PaginationRequest};
#[cfg(feature = "data")]
pub use pagination::{PaginationLinks, generate};
#[cfg(feature = "data")]
pub use query::{QueryContext, QueryParam};
