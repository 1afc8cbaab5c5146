//! Integration tests for the seed endpoint.

mod helpers;

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

fn listing(results: serde_json::Value) -> serde_json::Value {
    json!({ "count": 1302, "next": null, "previous": null, "results": results })
}

#[tokio::test]
async fn test_seed_replaces_catalog() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(GET).path("/api/v2/pokemon").query_param("limit", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(listing(json!([
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ])));
    });

    let app = helpers::TestApp::with_seed_source(server.url("/api/v2/pokemon"), 2);
    app.insert(&[("missingno", 0)]).await;

    let response = app.request("GET", "/api/v2/seed", None).await;

    upstream.assert();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "seed executed");

    let listing = app.request("GET", "/api/v2/pokemon", None).await;
    assert_eq!(listing.names(), vec!["bulbasaur", "ivysaur"]);
    assert_eq!(listing.body[0]["number"], 1);
    assert_eq!(listing.body[1]["number"], 2);
}

#[tokio::test]
async fn test_seed_upstream_failure_is_bad_gateway() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/pokemon");
        then.status(500);
    });

    let app = helpers::TestApp::with_seed_source(server.url("/api/v2/pokemon"), 650);
    app.insert(&[("pikachu", 25)]).await;

    let response = app.request("GET", "/api/v2/seed", None).await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);

    // The wipe runs before the fetch and is not rolled back.
    let listing = app.request("GET", "/api/v2/pokemon", None).await;
    assert_eq!(listing.body, json!([]));
}

#[tokio::test]
async fn test_seed_malformed_url_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/pokemon");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(listing(json!([
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "glitch", "url": "not-a-url" }
            ])));
    });

    let app = helpers::TestApp::with_seed_source(server.url("/api/v2/pokemon"), 650);

    let response = app.request("GET", "/api/v2/seed", None).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert!(
        response.body["message"]
            .as_str()
            .is_some_and(|m| m.contains("not-a-url"))
    );
}
