use serde::Serialize;

/// One rendered unit of a pagination control.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageDescriptor {
    /// A numbered page. The current page is rendered but not navigable.
    Page { number: usize, is_current: bool },
    /// Marker standing in for two or more omitted page numbers.
    Ellipsis,
}

impl PageDescriptor {
    pub fn page(number: usize, current_page: usize) -> Self {
        Self::Page {
            number,
            is_current: number == current_page,
        }
    }

    /// Page number of a `Page` descriptor, `None` for an ellipsis.
    pub fn number(&self) -> Option<usize> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Inputs of the page-range algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationRequest {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationRequest {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Returns the request with `current_page` pulled into `[1, total_pages]`.
    ///
    /// An empty range (`total_pages == 0`) keeps page 1 as the current page.
    pub fn clamped(self) -> Self {
        let current_page = self.current_page.clamp(1, self.total_pages.max(1));
        Self {
            current_page,
            total_pages: self.total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_accessors() {
        let current = PageDescriptor::page(4, 4);
        let other = PageDescriptor::page(5, 4);

        assert_eq!(current.number(), Some(4));
        assert!(current.is_current());
        assert!(!other.is_current());
        assert_eq!(PageDescriptor::Ellipsis.number(), None);
        assert!(PageDescriptor::Ellipsis.is_ellipsis());
    }

    #[test]
    fn clamped_request_stays_in_range() {
        assert_eq!(PaginationRequest::new(0, 5).clamped().current_page, 1);
        assert_eq!(PaginationRequest::new(9, 5).clamped().current_page, 5);
        assert_eq!(PaginationRequest::new(3, 5).clamped().current_page, 3);
        assert_eq!(PaginationRequest::new(4, 0).clamped().current_page, 1);
    }

    #[test]
    fn previous_and_next_availability() {
        let first = PaginationRequest::new(1, 3);
        let last = PaginationRequest::new(3, 3);

        assert!(!first.has_previous());
        assert!(first.has_next());
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
