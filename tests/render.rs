#![cfg(feature = "render")]

use std::collections::HashMap;
use std::fs;

use portfolio_pager::QueryContext;
use portfolio_pager::models::config::{AppConfig, PaginationLabels};
use portfolio_pager::render::PaginationRenderer;

fn config(templates_dir: Option<String>) -> AppConfig {
    let mut labels = HashMap::new();
    labels.insert(
        "fr".to_string(),
        PaginationLabels {
            previous: "Précédent".to_string(),
            next: "Suivant".to_string(),
            more_pages: "Plus de pages".to_string(),
        },
    );

    AppConfig {
        default_items_per_page: 15,
        max_items_per_page: 100,
        show_previous_next: true,
        templates_dir,
        locale: "fr".to_string(),
        labels,
    }
}

#[test]
fn test_renders_localized_navigation() {
    let renderer = PaginationRenderer::from_config(&config(None)).unwrap();
    let query = QueryContext::new().with("itemsPerPage", "5").unwrap();

    let html = renderer.render(1, 10, &query).unwrap();

    assert!(html.contains("Suivant"));
    assert!(!html.contains("Précédent"));
    assert!(html.contains("Plus de pages"));
    assert!(html.contains(r#"href="?itemsPerPage=5&amp;page=2">2</a>"#));
    assert!(html.contains(r#"aria-current="page" disabled>1</button>"#));
}

#[test]
fn test_last_page_has_no_next_control() {
    let renderer = PaginationRenderer::new(PaginationLabels::default(), true).unwrap();

    let html = renderer.render(10, 10, &QueryContext::new()).unwrap();

    assert!(html.contains("pagination-previous"));
    assert!(!html.contains("pagination-next"));
    assert_eq!(html.matches("pagination-ellipsis").count(), 1);
}

#[test]
fn test_navigation_can_be_disabled() {
    let renderer = PaginationRenderer::new(PaginationLabels::default(), false).unwrap();

    let html = renderer.render(5, 10, &QueryContext::new()).unwrap();

    assert!(!html.contains("pagination-previous"));
    assert!(!html.contains("pagination-next"));
}

#[test]
fn test_templates_dir_overrides_builtin_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pagination.html"),
        "{% for item in pagination.pages %}{% if item.kind == \"page\" %}[{{ item.number }}]{% else %}..{% endif %}{% endfor %}",
    )
    .unwrap();
    let glob = format!("{}/*.html", dir.path().display());

    let renderer = PaginationRenderer::from_config(&config(Some(glob))).unwrap();
    let html = renderer.render(5, 10, &QueryContext::new()).unwrap();

    assert_eq!(html, "[1]..[4][5][6]..[10]");
}
