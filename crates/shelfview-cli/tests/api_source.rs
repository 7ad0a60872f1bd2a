mod common;

use common::TestFixture;
use predicates::prelude::*;
use shelfview_testing::{CatalogServer, Reply, numbered_products};

#[test]
fn test_list_fetches_every_page_from_the_api() {
    let server = CatalogServer::spawn(Reply::Catalog(numbered_products(230))).unwrap();
    let fixture = TestFixture::with_products(0);

    fixture
        .command()
        .args(["--api-url", &server.base_url(), "list", "--page", "46"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 230  Product 230"))
        .stdout(predicate::str::contains(
            "Page 46/46 · showing 226–230 of 230 (total 230)",
        ));

    assert_eq!(
        server.requests(),
        vec![
            "/api/v1/products?limit=100&offset=0",
            "/api/v1/products?limit=100&offset=100",
            "/api/v1/products?limit=100&offset=200",
        ]
    );
}

#[test]
fn test_config_base_url_is_used_without_override() {
    let server = CatalogServer::spawn(Reply::Catalog(numbered_products(4))).unwrap();
    let fixture = TestFixture::with_products(0);
    std::fs::write(
        fixture.config_path(),
        format!("[api]\nbase_url = \"{}\"\n", server.base_url()),
    )
    .unwrap();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/1 · showing 1–4 of 4 (total 4)"));
}

#[test]
fn test_server_error_is_data_unavailable() {
    let server = CatalogServer::spawn(Reply::Status(503)).unwrap();
    let fixture = TestFixture::with_products(0);

    fixture
        .command()
        .args(["--api-url", &server.base_url(), "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Data unavailable"))
        .stderr(predicate::str::contains("HTTP 503"));
}

#[test]
fn test_malformed_body_is_data_unavailable() {
    let server = CatalogServer::spawn(Reply::Body("{\"products\": []}".to_string())).unwrap();
    let fixture = TestFixture::with_products(0);

    fixture
        .command()
        .args(["--api-url", &server.base_url(), "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not decode products"));
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let fixture = TestFixture::with_products(0);

    fixture
        .command()
        .args(["--api-url", "ftp://example.test/products", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported scheme 'ftp'"));
}
