//! Query parameters echoed into pagination links.
//!
//! A [`QueryContext`] keeps unrelated request parameters (for example the page
//! size) alive across page navigation. Parameters keep their insertion order
//! and are never deduplicated; the page-range algorithm never looks at them.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::domain::types::{QueryLabel, TypeConstraintError};

/// Name of the query parameter carrying the target page.
pub const PAGE_PARAM: &str = "page";

/// Characters escaped in values: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Single `label=value` pair.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QueryParam {
    pub label: QueryLabel,
    pub value: String,
}

impl QueryParam {
    pub fn new<L, V>(label: L, value: V) -> Result<Self, TypeConstraintError>
    where
        L: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            label: QueryLabel::new(label)?,
            value: value.into(),
        })
    }
}

/// Ordered sequence of query parameters.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct QueryContext(Vec<QueryParam>);

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping any earlier parameter with the same label.
    pub fn push(&mut self, param: QueryParam) {
        self.0.push(param);
    }

    /// Builder-style variant of [`QueryContext::push`].
    pub fn with<L, V>(mut self, label: L, value: V) -> Result<Self, TypeConstraintError>
    where
        L: Into<String>,
        V: Into<String>,
    {
        self.push(QueryParam::new(label, value)?);
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryParam> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the relative link to `page`: `?` followed by every context
    /// parameter and a trailing `page=<page>`, joined by `&`. Labels are
    /// written as given, values are percent-encoded.
    pub fn href_for_page(&self, page: usize) -> String {
        let page = page.to_string();
        let pairs = self
            .0
            .iter()
            .map(|param| (param.label.as_str(), param.value.as_str()))
            .chain(std::iter::once((PAGE_PARAM, page.as_str())))
            .map(|(label, value)| format!("{label}={}", utf8_percent_encode(value, URI_COMPONENT)))
            .collect::<Vec<_>>();

        format!("?{}", pairs.join("&"))
    }
}

impl FromIterator<QueryParam> for QueryContext {
    fn from_iter<I: IntoIterator<Item = QueryParam>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QueryContext {
    type Item = &'a QueryParam;
    type IntoIter = std::slice::Iter<'a, QueryParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
