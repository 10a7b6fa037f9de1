//! Page request/response shapes exchanged with paginated list endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::types::{ItemsPerPage, PageNumber};

/// Page requested by the user interface.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageNumber,
    pub items_per_page: ItemsPerPage,
}

impl PageRequest {
    pub fn new(page: PageNumber, items_per_page: ItemsPerPage) -> Self {
        Self {
            page,
            items_per_page,
        }
    }

    /// Number of items preceding the requested page.
    pub fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.items_per_page.get())
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationResponse {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PaginationResponse {
    /// Derives the page count for `total_items` split by the request page size.
    pub fn new(total_items: usize, request: &PageRequest) -> Self {
        Self {
            total_items,
            total_pages: total_items.div_ceil(request.items_per_page.get()),
            current_page: request.page.get(),
            items_per_page: request.items_per_page.get(),
        }
    }
}
