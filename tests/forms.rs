use portfolio_pager::dto::pagination::PaginationResponse;
use portfolio_pager::forms::FormError;
use portfolio_pager::forms::pagination::{ListQueryForm, PaginationLimits};

#[test]
fn test_query_string_is_parsed_into_request_and_context() {
    let form = ListQueryForm::from_query_str("?page=3&itemsPerPage=5&theme=dark").unwrap();
    let list = form.into_list_query(&PaginationLimits::default()).unwrap();

    assert_eq!(list.request.page.get(), 3);
    assert_eq!(list.request.items_per_page.get(), 5);
    assert_eq!(list.request.offset(), 10);
    assert_eq!(list.query.href_for_page(4), "?itemsPerPage=5&page=4");
}

#[test]
fn test_invalid_values_fall_back_to_defaults() {
    let limits = PaginationLimits {
        default_items_per_page: 5,
        max_items_per_page: 50,
    };
    let form = ListQueryForm::from_query_str("page=-2&itemsPerPage=abc").unwrap();
    let list = form.into_list_query(&limits).unwrap();

    assert_eq!(list.request.page.get(), 1);
    assert_eq!(list.request.items_per_page.get(), 5);
}

#[test]
fn test_oversized_page_size_is_rejected() {
    let form = ListQueryForm::from_query_str("itemsPerPage=1000").unwrap();

    let result = form.into_list_query(&PaginationLimits::default());

    assert!(matches!(result, Err(FormError::Validation(_))));
}

#[test]
fn test_response_counts_pages_for_request() {
    let list = ListQueryForm::from_query_str("page=2&itemsPerPage=15")
        .unwrap()
        .into_list_query(&PaginationLimits::default())
        .unwrap();

    let response = PaginationResponse::new(31, &list.request);

    assert_eq!(response.total_pages, 3);
    assert_eq!(response.current_page, 2);
}
