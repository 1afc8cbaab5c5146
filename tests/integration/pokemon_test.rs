//! Integration tests for the catalog endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_lowercases_and_hides_version() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v2/pokemon",
            Some(json!({ "name": "Pikachu", "number": 25 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "pikachu");
    assert_eq!(response.body["number"], 25);
    assert!(response.body["id"].is_string());
    assert!(response.body.get("version").is_none());
}

#[tokio::test]
async fn test_create_duplicate_name_is_bad_request() {
    let app = helpers::TestApp::new();
    app.insert(&[("pikachu", 25)]).await;

    let response = app
        .request(
            "POST",
            "/api/v2/pokemon",
            Some(json!({ "name": "PIKACHU", "number": 26 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        r#"Pokemon already exists. {"name":"pikachu"}"#
    );
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let app = helpers::TestApp::new();

    let unknown_field = app
        .request(
            "POST",
            "/api/v2/pokemon",
            Some(json!({ "name": "pikachu", "number": 25, "type": "electric" })),
        )
        .await;
    assert_eq!(unknown_field.status, StatusCode::BAD_REQUEST);

    let bad_number = app
        .request(
            "POST",
            "/api/v2/pokemon",
            Some(json!({ "name": "pikachu", "number": 0 })),
        )
        .await;
    assert_eq!(bad_number.status, StatusCode::BAD_REQUEST);

    let empty_name = app
        .request(
            "POST",
            "/api/v2/pokemon",
            Some(json!({ "name": "", "number": 25 })),
        )
        .await;
    assert_eq!(empty_name.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_create_is_all_or_nothing() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v2/pokemon/bulk",
            Some(json!([
                { "name": "pidgey", "number": 16 },
                { "name": "Pidgey", "number": 17 }
            ])),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let listing = app.request("GET", "/api/v2/pokemon", None).await;
    assert_eq!(listing.body, json!([]));

    let response = app
        .request(
            "POST",
            "/api/v2/pokemon/bulk",
            Some(json!([
                { "name": "pidgey", "number": 16 },
                { "name": "pidgeotto", "number": 17 }
            ])),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.names(), vec!["pidgey", "pidgeotto"]);
}

#[tokio::test]
async fn test_list_window_and_default_limit() {
    let app = helpers::TestApp::new();
    let records: Vec<(String, i32)> = (1..=12).map(|n| (format!("mon{n}"), n)).collect();
    let borrowed: Vec<(&str, i32)> = records.iter().map(|(s, n)| (s.as_str(), *n)).collect();
    app.insert(&borrowed).await;

    let page = app
        .request("GET", "/api/v2/pokemon?limit=2&offset=1", None)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.names(), vec!["mon2", "mon3"]);

    let default_page = app.request("GET", "/api/v2/pokemon", None).await;
    assert_eq!(
        default_page.body.as_array().map(Vec::len),
        Some(app.config.catalog.default_limit as usize)
    );
}

#[tokio::test]
async fn test_list_rejects_bad_pagination() {
    let app = helpers::TestApp::new();

    for query in ["limit=0", "offset=-1", "limit=abc", "page=2"] {
        let response = app
            .request("GET", &format!("/api/v2/pokemon?{query}"), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "query: {query}");
    }
}

#[tokio::test]
async fn test_find_one_by_number_id_and_name() {
    let app = helpers::TestApp::new();
    let created = app.insert(&[("pikachu", 25), ("25", 26)]).await;
    let pikachu = &created[0];

    let by_number = app.request("GET", "/api/v2/pokemon/25", None).await;
    assert_eq!(by_number.status, StatusCode::OK);
    assert_eq!(by_number.body["name"], "pikachu");

    let by_id = app
        .request("GET", &format!("/api/v2/pokemon/{}", pikachu.id), None)
        .await;
    assert_eq!(by_id.body["number"], 25);

    let by_name = app.request("GET", "/api/v2/pokemon/Pikachu", None).await;
    assert_eq!(by_name.body["id"], pikachu.id.to_string());
}

#[tokio::test]
async fn test_find_one_unknown_term() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v2/pokemon/missingno", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "There is no pokemon with id: 'missingno'"
    );
}

#[tokio::test]
async fn test_patch_returns_merged_record() {
    let app = helpers::TestApp::new();
    let created = app.insert(&[("charmander", 4)]).await;

    let response = app
        .request(
            "PATCH",
            "/api/v2/pokemon/charmander",
            Some(json!({ "name": " Charmeleon " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], created[0].id.to_string());
    assert_eq!(response.body["name"], "charmeleon");
    assert_eq!(response.body["number"], 4);

    let reread = app.request("GET", "/api/v2/pokemon/4", None).await;
    assert_eq!(reread.body["name"], "charmeleon");
}

#[tokio::test]
async fn test_patch_duplicate_number() {
    let app = helpers::TestApp::new();
    app.insert(&[("bulbasaur", 1), ("ivysaur", 2)]).await;

    let response = app
        .request("PATCH", "/api/v2/pokemon/ivysaur", Some(json!({ "number": 1 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        r#"Pokemon already exists. {"number":1}"#
    );
}

#[tokio::test]
async fn test_delete() {
    let app = helpers::TestApp::new();
    let created = app.insert(&[("pikachu", 25)]).await;
    let path = format!("/api/v2/pokemon/{}", created[0].id);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let gone = app.request("GET", "/api/v2/pokemon/pikachu", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_valid_id() {
    let app = helpers::TestApp::new();
    app.insert(&[("pikachu", 25)]).await;

    let response = app.request("DELETE", "/api/v2/pokemon/25", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "'25' is not a valid id");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v2/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}
