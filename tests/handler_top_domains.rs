mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

async fn shorten(server: &TestServer, url: &str) {
    server.post("/shorten").json(&json!({ "url": url })).await;
}

#[tokio::test]
async fn test_top_domains_empty() {
    let server = common::create_server(common::create_test_state());

    let response = server.get("/metrics/top-domains").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_top_domains_ranking() {
    let server = common::create_server(common::create_test_state());

    for i in 0..5 {
        shorten(&server, &format!("https://a.com/{}", i)).await;
        shorten(&server, &format!("https://b.com/{}", i)).await;
    }
    for i in 0..3 {
        shorten(&server, &format!("https://c.com/{}", i)).await;
    }
    shorten(&server, "https://d.com/0").await;

    let response = server.get("/metrics/top-domains").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "domain": "a.com", "count": 5 },
            { "domain": "b.com", "count": 5 },
            { "domain": "c.com", "count": 3 },
        ])
    );
}

#[tokio::test]
async fn test_top_domains_explicit_n() {
    let server = common::create_server(common::create_test_state());

    shorten(&server, "https://a.com/1").await;
    shorten(&server, "https://a.com/2").await;
    shorten(&server, "https://b.com/1").await;

    let response = server
        .get("/metrics/top-domains")
        .add_query_param("n", 1)
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!([{ "domain": "a.com", "count": 2 }])
    );

    let response = server
        .get("/metrics/top-domains")
        .add_query_param("n", 10)
        .await;
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_top_domains_non_positive_n() {
    let server = common::create_server(common::create_test_state());
    shorten(&server, "https://a.com/1").await;

    for n in [0, -1] {
        let response = server
            .get("/metrics/top-domains")
            .add_query_param("n", n)
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }
}

#[tokio::test]
async fn test_top_domains_invalid_n() {
    let server = common::create_server(common::create_test_state());

    let response = server
        .get("/metrics/top-domains")
        .add_query_param("n", "three")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_top_domains_counts_distinct_urls_and_merges_www() {
    let server = common::create_server(common::create_test_state());

    shorten(&server, "https://www.example.com/a").await;
    shorten(&server, "https://example.com/b").await;
    shorten(&server, "https://example.com/b").await;

    let response = server.get("/metrics/top-domains").await;

    assert_eq!(
        response.json::<Value>(),
        json!([{ "domain": "example.com", "count": 2 }])
    );
}
