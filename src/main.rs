//! Renders the pagination control for a list query.
//!
//! Usage: `portfolio-pager <query-string> <total-items> [--json]`

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use portfolio_pager::dto::pagination::PaginationResponse;
use portfolio_pager::forms::pagination::ListQueryForm;
use portfolio_pager::models::config::AppConfig;
use portfolio_pager::pagination::PaginationLinks;
use portfolio_pager::render::PaginationRenderer;

const USAGE: &str = "usage: portfolio-pager <query-string> <total-items> [--json]";

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match AppConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let args = env::args().skip(1).collect::<Vec<_>>();
    let json = args.iter().any(|arg| arg == "--json");
    let positional = args
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .collect::<Vec<_>>();

    let (raw_query, total_items) = match positional.as_slice() {
        [raw_query, total_items] => (raw_query.as_str(), total_items.as_str()),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let total_items = match total_items.parse::<usize>() {
        Ok(total_items) => total_items,
        Err(err) => {
            log::error!("Invalid item total {total_items:?}: {err}");
            std::process::exit(2);
        }
    };

    let list_query = match ListQueryForm::from_query_str(raw_query)
        .and_then(|form| form.into_list_query(&config.limits()))
    {
        Ok(list_query) => list_query,
        Err(err) => {
            log::error!("Invalid list query: {err}");
            std::process::exit(2);
        }
    };

    let response = PaginationResponse::new(total_items, &list_query.request);
    log::info!(
        "Page {} of {} ({} items, {} per page)",
        response.current_page,
        response.total_pages,
        response.total_items,
        response.items_per_page
    );

    let output = if json {
        let links = PaginationLinks::build(
            response.current_page,
            response.total_pages,
            &list_query.query,
            config.show_previous_next,
        );
        serde_json::to_string_pretty(&links).map_err(|err| err.to_string())
    } else {
        PaginationRenderer::from_config(&config)
            .and_then(|renderer| {
                renderer.render(
                    response.current_page,
                    response.total_pages,
                    &list_query.query,
                )
            })
            .map_err(|err| err.to_string())
    };

    match output {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("Failed to render pagination: {err}");
            std::process::exit(1);
        }
    }
}
