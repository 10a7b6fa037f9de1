//! Query parameters selecting a page of a list.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{ItemsPerPage, PageNumber};
use crate::dto::pagination::PageRequest;
use crate::forms::FormError;
use crate::query::QueryContext;

/// Query parameter carrying the page size.
pub const ITEMS_PER_PAGE_PARAM: &str = "itemsPerPage";

/// Largest page size accepted regardless of configuration.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Reads a number the way browsers coerce query strings: surrounding
/// whitespace is ignored, decimal and exponent forms are accepted, and
/// `0x`/`0o`/`0b` prefixes select the radix.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let radix = match raw.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        if digits.starts_with('+') {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    // `f64::from_str` also takes `inf`/`nan` spellings; those are not finite
    // and fall through to the default below.
    raw.parse::<f64>().ok()
}

/// Parses `value` as a positive integer, returning `default` when it is
/// missing, not an integer, or not greater than zero.
///
/// `"2.0"`, `"1e1"` and `"+3"` count as integers; `"2.5"`, `"-3"` and `""`
/// do not. Values beyond `usize::MAX` saturate.
pub fn parse_positive_int(value: Option<&str>, default: usize) -> usize {
    if let Some(n) = value.and_then(|raw| raw.trim().parse::<usize>().ok()) {
        return if n > 0 { n } else { default };
    }

    value
        .and_then(parse_number)
        .filter(|n| n.is_finite() && n.fract() == 0.0 && *n > 0.0)
        .map(|n| n as usize)
        .unwrap_or(default)
}

/// Fallbacks and caps applied to list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationLimits {
    pub default_items_per_page: usize,
    pub max_items_per_page: usize,
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self {
            default_items_per_page: 15,
            max_items_per_page: MAX_ITEMS_PER_PAGE,
        }
    }
}

/// Raw list query as received in the request URL.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryForm {
    pub page: Option<String>,
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: Option<String>,
}

#[derive(Debug, Validate)]
struct ListQueryPayload {
    #[validate(range(min = 1))]
    page: usize,
    #[validate(range(min = 1, max = 100))]
    items_per_page: usize,
}

/// Sanitized list query: the page to fetch and the parameters to keep in
/// pagination links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub request: PageRequest,
    pub query: QueryContext,
}

impl ListQueryForm {
    /// Parses a raw query string, with or without the leading `?`.
    pub fn from_query_str(raw: &str) -> Result<Self, FormError> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Ok(serde_html_form::from_str(raw)?)
    }

    /// Applies fallbacks and caps, producing the page request and the query
    /// context echoed into links.
    pub fn into_list_query(self, limits: &PaginationLimits) -> Result<ListQuery, FormError> {
        let payload = ListQueryPayload {
            page: parse_positive_int(self.page.as_deref(), 1),
            items_per_page: parse_positive_int(
                self.items_per_page.as_deref(),
                limits.default_items_per_page,
            ),
        };

        if let Err(errors) = payload.validate() {
            log::warn!("Rejected list query: {errors}");
            return Err(errors.into());
        }

        let page = PageNumber::new(payload.page)?;
        let items_per_page =
            ItemsPerPage::bounded(payload.items_per_page, limits.max_items_per_page)?;

        let query = QueryContext::new().with(ITEMS_PER_PAGE_PARAM, items_per_page.to_string())?;

        Ok(ListQuery {
            request: PageRequest::new(page, items_per_page),
            query,
        })
    }
}
