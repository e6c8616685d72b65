mod common;

/// One category with 25 SKUs: three pages at the default page size.
fn listing_catalog() -> common::FakeCatalog {
    let mut catalog = common::FakeCatalog::default();

    catalog.categories = vec![
        common::category(3, "Fresh Vegetables"),
        common::category(4, "Empty Aisle"),
    ];
    catalog.skus = (1..=25)
        .map(|i| common::sku(i, 3, 9, &format!("Sku {i:02}")))
        .collect();

    catalog
}

/// Enough SKUs for seven pages, to exercise pager truncation.
fn long_listing_catalog() -> common::FakeCatalog {
    let mut catalog = common::FakeCatalog::default();

    catalog.categories = vec![common::category(3, "Fresh Vegetables")];
    catalog.skus = (1..=65)
        .map(|i| common::sku(i, 3, 9, &format!("Item {i:02}")))
        .collect();

    catalog
}

#[tokio::test]
async fn test_list_first_page_has_ten_newest_skus() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/1").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    // Default sort is newest first: ids 25 down to 16.
    assert!(body.contains("Sku 25"));
    assert!(body.contains("Sku 16"));
    assert!(!body.contains("Sku 15"));
    assert!(body.contains(r#"<span class="pager-current">1</span>"#));
}

#[tokio::test]
async fn test_list_second_page_continues_the_listing() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/2").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("Sku 15"));
    assert!(body.contains("Sku 06"));
    assert!(!body.contains("Sku 16"));
    assert!(body.contains(r#"<span class="pager-current">2</span>"#));
}

#[tokio::test]
async fn test_list_out_of_range_page_serves_first_page() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/9").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("Sku 25"));
    assert!(body.contains(r#"<span class="pager-current">1</span>"#));
}

#[tokio::test]
async fn test_list_garbage_page_index_serves_first_page() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/banana").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("Sku 25"));
    assert!(body.contains(r#"<span class="pager-current">1</span>"#));
}

#[tokio::test]
async fn test_list_sort_by_price_puts_cheapest_first() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/1?sort=price").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    // Prices grow with the id, so the cheapest SKU is the oldest.
    assert!(body.contains("Sku 01"));
    assert!(body.find("Sku 01").unwrap() < body.find("Sku 02").unwrap());
}

#[tokio::test]
async fn test_list_sort_by_hot_puts_best_seller_first() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/1?sort=hot").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.find("Sku 25").unwrap() < body.find("Sku 24").unwrap());
}

#[tokio::test]
async fn test_list_unknown_sort_falls_back_to_default() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/1?sort=banana").await;

    assert_eq!(response.status_code(), 200);

    let body = response.text();
    // Newest first, same as no sort parameter at all.
    assert!(body.contains("Sku 25"));
    assert!(!body.contains("Sku 15"));
}

#[tokio::test]
async fn test_list_pager_links_carry_the_sort() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/3/2?sort=price").await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("/list/3/1?sort=price"));
}

#[tokio::test]
async fn test_list_unknown_category_redirects_home() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/99/1").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_list_non_numeric_category_redirects_home() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/abc/1").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_list_empty_category_renders_empty_state() {
    let app = common::test_app(listing_catalog());

    let response = app.server.get("/list/4/1").await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("No products in this category yet."));
}

#[tokio::test]
async fn test_list_pager_truncates_long_listings() {
    let app = common::test_app(long_listing_catalog());

    // Page 1 of 7: the strip pins to the left edge and hides the tail.
    let response = app.server.get("/list/3/1").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("&hellip;"));
    assert!(!body.contains("/list/3/7?sort=default"));

    // Page 4 of 7 sits in the middle: hidden pages on both sides.
    let response = app.server.get("/list/3/4").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert_eq!(body.matches("&hellip;").count(), 2);
    assert!(body.contains(r#"<span class="pager-current">4</span>"#));
}
