use std::time::Duration;

use reelscore::provider::{MovieProvider, ProviderError, RelayClient, RelayRequest, TmdbClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(page: u32, total_pages: u32, ids: &[u64]) -> serde_json::Value {
    let results: Vec<_> = ids
        .iter()
        .map(|id| json!({ "id": id, "title": format!("Movie {id}"), "genre_ids": [28] }))
        .collect();
    json!({ "page": page, "total_pages": total_pages, "results": results })
}

#[tokio::test]
async fn relay_client_walks_popular_pages_until_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 5, &[1, 2])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, 5, &[3, 4])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelayClient::new(server.uri()).expect("client builds");
    let movies = client.list_popular(3).await.expect("popular loads");

    let ids: Vec<u64> = movies.iter().map(|movie| movie.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn relay_client_stops_when_listing_runs_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, &[7, 8])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelayClient::new(server.uri()).expect("client builds");
    let movies = client.list_popular(60).await.expect("popular loads");
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn relay_client_accepts_unbounded_popular_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, &[11, 12, 13])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelayClient::new(server.uri()).expect("client builds");
    let movies = client.list_popular(usize::MAX).await.expect("popular loads");

    let ids: Vec<u64> = movies.iter().map(|movie| movie.id).collect();
    assert_eq!(ids, vec![11, 12, 13]);
}

#[tokio::test]
async fn relay_client_requests_detail_by_movie_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("movieId", "603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "tagline": "Welcome to the Real World.",
            "runtime": 136,
            "genres": [{ "id": 28, "name": "Action" }],
            "credits": { "cast": [{ "id": 6384, "name": "Keanu Reeves", "character": "Neo" }] }
        })))
        .mount(&server)
        .await;

    let client = RelayClient::new(format!("{}/", server.uri())).expect("client builds");
    let detail = client.detail(603).await.expect("detail loads");

    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.runtime, Some(136));
    assert_eq!(detail.top_cast()[0].name, "Keanu Reeves");
}

#[tokio::test]
async fn relay_client_surfaces_relay_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("query", "heat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Failed to fetch" })),
        )
        .mount(&server)
        .await;

    let client = RelayClient::with_timeout(server.uri(), Duration::from_secs(2))
        .expect("client builds");
    let err = client.search("heat").await.expect_err("relay failure surfaces");
    assert!(matches!(err, ProviderError::Status { status: 500 }));
    assert_eq!(err.code(), "status");
}

#[tokio::test]
async fn relay_client_reports_undecodable_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = RelayClient::new(server.uri()).expect("client builds");
    let err = client.detail(1).await.expect_err("decode fails");
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn tmdb_client_maps_movie_id_to_detail_with_credits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("append_to_response", "credits,images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 603 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TmdbClient::with_config("test-key", server.uri(), Duration::from_secs(2))
        .expect("client builds");
    let request = RelayRequest {
        movie_id: Some(603),
        query: Some("ignored".to_string()),
        ..RelayRequest::default()
    };

    let body = client.forward(&request).await.expect("detail forwarded");
    assert_eq!(body["id"], 603);
}

#[tokio::test]
async fn tmdb_client_forwards_search_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "blade runner"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, 3, &[78])))
        .expect(1)
        .mount(&server)
        .await;

    let client = TmdbClient::with_config("test-key", server.uri(), Duration::from_secs(2))
        .expect("client builds");
    let request = RelayRequest {
        query: Some("blade runner".to_string()),
        page: Some(2),
        ..RelayRequest::default()
    };

    let body = client.forward(&request).await.expect("search forwarded");
    assert_eq!(body["results"][0]["id"], 78);
}

#[tokio::test]
async fn tmdb_client_defaults_to_popular_and_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "status_code": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TmdbClient::with_config("bad-key", server.uri(), Duration::from_secs(2))
        .expect("client builds");
    let err = client
        .forward(&RelayRequest::default())
        .await
        .expect_err("unauthorized upstream");
    assert!(matches!(err, ProviderError::Status { status: 401 }));
}

#[test]
fn tmdb_client_rejects_blank_keys() {
    let err = TmdbClient::with_config("  ", "http://localhost", Duration::from_secs(1))
        .expect_err("blank key rejected");
    assert!(matches!(err, ProviderError::Config(_)));
}
