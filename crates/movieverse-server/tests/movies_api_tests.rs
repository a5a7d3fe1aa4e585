//! Integration tests for the movie list, search and detail endpoints

mod helpers;

use axum::http::StatusCode;
use helpers::*;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_list_returns_popular_movies() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("api_key", TMDB_API_KEY))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            movie(603, "The Matrix", Some("/matrix.jpg"), 8.217),
            movie(604, "The Matrix Reloaded", None, 7.0),
        ])))
        .expect(1)
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert!(body["meta"]["query"].is_null());
    assert_eq!(body["meta"]["count"], 2);

    let cards = body["data"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["id"], 603);
    assert_eq!(cards[0]["title"], "The Matrix");
    assert_eq!(cards[0]["poster_url"], "https://image.test/t/p/w500/matrix.jpg");
    assert_eq!(cards[0]["rating_label"], "8.2");
    assert!(cards[1]["poster_url"].is_null());
    assert_eq!(cards[1]["rating_label"], "7.0");
}

#[tokio::test]
async fn test_blank_query_falls_back_to_popular() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .expect(1)
        .mount(&app.catalog)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .expect(0)
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies?query=%20%20%20").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_search_uses_trimmed_query() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", TMDB_API_KEY))
        .and(query_param("query", "the matrix"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![movie(
            603,
            "The Matrix",
            Some("/matrix.jpg"),
            8.2,
        )])))
        .expect(1)
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies?query=%20the%20matrix%20").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["meta"]["query"], "the matrix");
    assert_eq!(body["data"][0]["title"], "The Matrix");
}

#[tokio::test]
async fn test_search_query_is_encoded_as_one_param() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Tom & Jerry #2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![movie(
            1,
            "Tom & Jerry #2",
            None,
            6.1,
        )])))
        .expect(1)
        .mount(&app.catalog)
        .await;

    let response = app
        .get("/api/v1/movies?query=Tom%20%26%20Jerry%20%232")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["meta"]["query"], "Tom & Jerry #2");

    let received = app.catalog.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let mut keys: Vec<String> = received[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["api_key", "page", "query"]);
    assert_eq!(received[0].url.fragment(), None);
}

#[tokio::test]
async fn test_movie_details_picks_trailer_and_limits_cast() {
    let app = TestApp::new().await;

    // Catalog order is given by `order`, which runs opposite to the ids here.
    let cast = (1..=14).map(|id| cast_member(id, (14 - id) as u32)).collect();
    let videos = vec![
        video("teaser1", "YouTube", "Teaser"),
        video("m8e-FF8MsqU", "YouTube", "Trailer"),
        video("later", "YouTube", "Trailer"),
    ];

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("api_key", TMDB_API_KEY))
        .and(query_param("append_to_response", "videos,credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_details(603, cast, videos)))
        .expect(1)
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies/603").await;

    assert_eq!(response.status, StatusCode::OK);
    let details = &response.json()["data"];
    assert_eq!(details["title"], "The Matrix");
    assert_eq!(details["poster_url"], "https://image.test/t/p/w500/matrix.jpg");
    assert_eq!(details["rating_label"], "8.2");
    assert_eq!(details["release_date"], "1999-03-30");
    assert_eq!(details["trailer"]["key"], "m8e-FF8MsqU");
    assert_eq!(
        details["trailer"]["embed_url"],
        "https://www.youtube.com/embed/m8e-FF8MsqU"
    );

    let cast = details["cast"].as_array().unwrap();
    assert_eq!(cast.len(), 12);
    assert_eq!(cast[0]["id"], 14);
    assert_eq!(cast[0]["profile_url"], "https://image.test/t/p/w185/p14.jpg");
    assert!(cast[1]["profile_url"].is_null());
    assert_eq!(cast[11]["id"], 3);
}

#[tokio::test]
async fn test_details_without_trailer() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_details(
            603,
            vec![],
            vec![video("clip", "YouTube", "Clip")],
        )))
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies/603").await;

    assert_eq!(response.status, StatusCode::OK);
    let details = &response.json()["data"];
    assert!(details["trailer"].is_null());
    assert_eq!(details["cast"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_movie_is_not_found() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies/999999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error("NOT_FOUND"), "Movie 999999 not found");
}

#[tokio::test]
async fn test_invalid_movie_ids_are_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/movies/0").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    response.error("VALIDATION_ERROR");

    let response = app.get("/api/v1/movies/not-a-number").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.headers["content-type"], "application/json");
    assert!(response.error("VALIDATION_ERROR").contains("not-a-number"));

    let response = app.get("/api/v1/movies/99999999999999999999").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    response.error("VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_api_key_is_upstream_error() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })))
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.error("UPSTREAM_ERROR"), "The movie catalog is unavailable");
}

#[tokio::test]
async fn test_rate_limit_is_surfaced_without_retry() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies?query=alien").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    response.error("UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_malformed_catalog_payload_is_upstream_error() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&app.catalog)
        .await;

    let response = app.get("/api/v1/movies").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}
