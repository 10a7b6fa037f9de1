//! DTO modules that bridge list endpoints with templates.

pub mod pagination;
