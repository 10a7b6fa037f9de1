//! HTML rendering of the pagination control with tera.

use tera::{Context, Tera};
use thiserror::Error;

use crate::models::config::{AppConfig, PaginationLabels};
use crate::pagination::PaginationLinks;
use crate::query::QueryContext;

/// Name under which the control template is registered.
pub const PAGINATION_TEMPLATE: &str = "pagination.html";

const BUILTIN_PAGINATION_TEMPLATE: &str = include_str!("../templates/pagination.html");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Renders pagination controls as `<nav>` markup.
pub struct PaginationRenderer {
    tera: Tera,
    labels: PaginationLabels,
    show_previous_next: bool,
}

impl PaginationRenderer {
    /// Renderer using the built-in template.
    pub fn new(labels: PaginationLabels, show_previous_next: bool) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGINATION_TEMPLATE, BUILTIN_PAGINATION_TEMPLATE)?;

        Ok(Self {
            tera,
            labels,
            show_previous_next,
        })
    }

    /// Renderer honoring `templates_dir`, locale and navigation settings.
    ///
    /// Templates found under `templates_dir` replace the built-in one when
    /// they define [`PAGINATION_TEMPLATE`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RenderError> {
        let mut tera = match &config.templates_dir {
            Some(glob) => Tera::new(glob)?,
            None => Tera::default(),
        };

        if !tera.get_template_names().any(|name| name == PAGINATION_TEMPLATE) {
            tera.add_raw_template(PAGINATION_TEMPLATE, BUILTIN_PAGINATION_TEMPLATE)?;
        }

        Ok(Self {
            tera,
            labels: config.labels(),
            show_previous_next: config.show_previous_next,
        })
    }

    /// Renders the control for `(current_page, total_pages)`.
    pub fn render(
        &self,
        current_page: usize,
        total_pages: usize,
        query: &QueryContext,
    ) -> Result<String, RenderError> {
        let links =
            PaginationLinks::build(current_page, total_pages, query, self.show_previous_next);
        self.render_links(&links)
    }

    pub fn render_links(&self, links: &PaginationLinks) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("pagination", links);
        context.insert("labels", &self.labels);

        log::debug!(
            "Rendering {} page control(s) for page {} of {}",
            links.pages.len(),
            links.current_page,
            links.total_pages
        );

        Ok(self.tera.render(PAGINATION_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_template_renders_links_and_ellipses() {
        let renderer = PaginationRenderer::new(PaginationLabels::default(), true).unwrap();

        let html = renderer.render(5, 10, &QueryContext::new()).unwrap();

        assert!(html.contains(r#"aria-current="page" disabled>5</button>"#));
        assert!(html.contains(r#"href="?page=4">4</a>"#));
        assert_eq!(html.matches("pagination-ellipsis").count(), 2);
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn empty_range_renders_empty_list() {
        let renderer = PaginationRenderer::new(PaginationLabels::default(), true).unwrap();

        let html = renderer.render(1, 0, &QueryContext::new()).unwrap();

        assert!(!html.contains("pagination-item"));
    }
}
