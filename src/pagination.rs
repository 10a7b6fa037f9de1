//! Page-number controls for paginated lists.
//!
//! [`generate`] turns `(current_page, total_pages)` into the ordered sequence
//! of descriptors to render. Short ranges are shown in full; longer ranges
//! keep the first page, a window around the current page and the last page,
//! and collapse each remaining run of hidden pages into a single ellipsis.
//! An ellipsis never stands in for exactly one page: that page is shown.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::page::{PageDescriptor, PaginationRequest};
use crate::query::QueryContext;

/// Ranges up to this many pages are rendered without ellipses.
pub const COMPACT_THRESHOLD: usize = 6;

/// `true` when `page` would repeat one of the always-present first/last pages.
fn would_duplicate_boundary(page: usize, total_pages: usize) -> bool {
    page <= 1 || page >= total_pages
}

/// `true` when the pages strictly between `left` and `right` are exactly one.
fn would_create_single_gap(left: usize, right: usize) -> bool {
    right.saturating_sub(left) == 2
}

/// Window of pages shown next to the current page for long ranges.
fn middle_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    if current_page < 3 {
        return 2..=3;
    }

    let start = if would_duplicate_boundary(current_page - 1, total_pages) {
        current_page
    } else {
        current_page - 1
    };

    let next = current_page.saturating_add(1);
    let end = if !would_duplicate_boundary(next, total_pages) {
        next
    } else if !would_duplicate_boundary(current_page, total_pages) {
        current_page
    } else {
        current_page - 1
    };

    start..=end
}

/// Emits whatever stands between two visible pages.
fn fill_gap(pages: &mut Vec<PageDescriptor>, left: usize, right: usize, current_page: usize) {
    if would_create_single_gap(left, right) {
        pages.push(PageDescriptor::page(left + 1, current_page));
    } else if right.saturating_sub(left) > 2 {
        pages.push(PageDescriptor::Ellipsis);
    }
}

/// Produces the page descriptors for a pagination control.
///
/// `current_page` is clamped into `[1, total_pages]`; an empty range yields
/// no descriptors.
pub fn generate(current_page: usize, total_pages: usize) -> Vec<PageDescriptor> {
    if total_pages == 0 {
        return Vec::new();
    }

    let request = PaginationRequest::new(current_page, total_pages).clamped();
    if request.current_page != current_page {
        log::debug!(
            "Clamped page {current_page} to {} of {total_pages}",
            request.current_page
        );
    }
    let PaginationRequest {
        current_page,
        total_pages,
    } = request;

    if total_pages <= COMPACT_THRESHOLD {
        return (1..=total_pages)
            .map(|number| PageDescriptor::page(number, current_page))
            .collect();
    }

    let window = middle_window(current_page, total_pages);
    let (start, end) = (*window.start(), *window.end());

    let mut pages = Vec::with_capacity(COMPACT_THRESHOLD + 1);
    pages.push(PageDescriptor::page(1, current_page));
    fill_gap(&mut pages, 1, start, current_page);
    pages.extend(window.map(|number| PageDescriptor::page(number, current_page)));
    fill_gap(&mut pages, end, total_pages, current_page);
    pages.push(PageDescriptor::page(total_pages, current_page));

    pages
}

/// Page descriptor joined with the link that navigates to it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page {
        number: usize,
        is_current: bool,
        href: String,
    },
    Ellipsis,
}

impl PageLink {
    /// Drops the link, keeping only the structural descriptor.
    pub fn descriptor(&self) -> PageDescriptor {
        match self {
            Self::Page {
                number, is_current, ..
            } => PageDescriptor::Page {
                number: *number,
                is_current: *is_current,
            },
            Self::Ellipsis => PageDescriptor::Ellipsis,
        }
    }
}

/// Previous or next control.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub page: usize,
    pub href: String,
}

/// Everything a template needs to draw a pagination control.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationLinks {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: Option<NavLink>,
    pub pages: Vec<PageLink>,
    pub next: Option<NavLink>,
}

impl PaginationLinks {
    /// Builds the page links for `(current_page, total_pages)`, echoing `query`
    /// into every href. Previous/next controls are added only when
    /// `show_previous_next` is set and the target page exists.
    pub fn build(
        current_page: usize,
        total_pages: usize,
        query: &QueryContext,
        show_previous_next: bool,
    ) -> Self {
        let pages = generate(current_page, total_pages)
            .into_iter()
            .map(|descriptor| match descriptor {
                PageDescriptor::Page { number, is_current } => PageLink::Page {
                    number,
                    is_current,
                    href: query.href_for_page(number),
                },
                PageDescriptor::Ellipsis => PageLink::Ellipsis,
            })
            .collect();

        let request = PaginationRequest::new(current_page, total_pages).clamped();

        let previous = if show_previous_next && request.has_previous() {
            let page = request.current_page - 1;
            Some(NavLink {
                page,
                href: query.href_for_page(page),
            })
        } else {
            None
        };

        let next = if show_previous_next && request.has_next() {
            let page = request.current_page + 1;
            Some(NavLink {
                page,
                href: query.href_for_page(page),
            })
        } else {
            None
        };

        Self {
            current_page: request.current_page,
            total_pages,
            previous,
            pages,
            next,
        }
    }

    pub fn descriptors(&self) -> Vec<PageDescriptor> {
        self.pages.iter().map(PageLink::descriptor).collect()
    }
}

/// A page of items together with the controls to reach the other pages.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageDescriptor>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = generate(current_page, total_pages);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }

    /// Builds the linked controls for this page.
    pub fn links(&self, query: &QueryContext, show_previous_next: bool) -> PaginationLinks {
        PaginationLinks::build(self.page, self.total_pages, query, show_previous_next)
    }
}
