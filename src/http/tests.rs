//! Tests for the HTTP client module

use super::*;
use crate::auth::{RefreshFn, RefreshedToken, Session, SessionConfig};
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixed_refresher(
    token: &'static str,
    calls: Arc<AtomicUsize>,
) -> RefreshFn<impl Fn(String) -> futures::future::Ready<crate::Result<RefreshedToken>> + Send + Sync>
{
    RefreshFn::new(move |_refresh_token: String| {
        calls.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(Ok::<_, Error>(RefreshedToken::new(token)))
    })
}

fn client_for(server: &MockServer, session: Session) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .build();
    HttpClient::new(config, session).unwrap()
}

fn static_session(token: &str) -> Session {
    Session::new(SessionConfig::new("refresh").access_token(token)).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, SPOTIFY_API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.cache_ttl, Some(Duration::from_secs(30 * 60)));
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("spotify-web/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .cache_ttl(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(5, 2))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.cache_ttl, Some(Duration::from_secs(5)));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(5, 2)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let config = HttpClientConfig::builder().no_cache().no_rate_limit().build();
    assert!(config.cache_ttl.is_none());
    assert!(config.rate_limit.is_none());
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("limit", "10")
        .query("offset", "20")
        .header("X-Request-Id", "abc123")
        .json(json!({"uris": []}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("limit"), Some(&"10".to_string()));
    assert_eq!(config.query.get("offset"), Some(&"20".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_build_url() {
    let client = HttpClient::new(HttpClientConfig::default(), static_session("t")).unwrap();

    assert_eq!(
        client.build_url("/tracks/abc"),
        "https://api.spotify.com/v1/tracks/abc"
    );
    assert_eq!(
        client.build_url("me"),
        "https://api.spotify.com/v1/me"
    );
    assert_eq!(
        client.build_url("https://api.spotify.com/v1/me/playlists?offset=50&limit=50"),
        "https://api.spotify.com/v1/me/playlists?offset=50&limit=50"
    );
}

#[tokio::test]
async fn test_attaches_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "smedjan"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("token-1"));
    let body = client.get("/me").await.unwrap();

    assert_eq!(body["id"], "smedjan");
}

#[tokio::test]
async fn test_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/abc"))
        .and(query_param("market", "SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let body = client
        .get_with_config("/tracks/abc", RequestConfig::new().query("market", "SE"))
        .await
        .unwrap();

    assert_eq!(body["id"], "abc");
}

#[tokio::test]
async fn test_refresh_and_retry_on_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "me"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let session = Session::new(
        SessionConfig::new("refresh")
            .access_token("stale")
            .refresher(fixed_refresher("fresh", calls.clone())),
    )
    .unwrap();

    let client = client_for(&mock_server, session);
    let body = client.get("/me").await.unwrap();

    assert_eq!(body, json!({"id": "me"}));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_second_401_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&mock_server)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let session = Session::new(
        SessionConfig::new("refresh")
            .access_token("stale")
            .refresher(fixed_refresher("still-bad", calls.clone())),
    )
    .unwrap();

    let client = client_for(&mock_server, session);
    let err = client.get("/me").await.unwrap_err();

    assert!(err.is_auth(), "unexpected error: {err}");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_401_without_refresher_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("expired"));
    let err = client.get("/me").await.unwrap_err();

    assert!(err.is_auth());
}

#[tokio::test]
async fn test_client_error_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let err = client.get("/tracks/missing").await.unwrap_err();

    assert!(err.is_http());
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, Error::HttpStatus { ref body, .. } if body == "not found"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let err = client.get("/me").await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_rate_limited_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let err = client.get("/me").await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
}

#[tokio::test]
async fn test_get_responses_are_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    assert!(client.has_cache());

    let first = client.get("/artists/a1").await.unwrap();
    let second = client.get("/artists/a1").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cache_key_includes_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    client
        .get_with_config("/tracks/t1", RequestConfig::new().query("market", "SE"))
        .await
        .unwrap();
    client
        .get_with_config("/tracks/t1", RequestConfig::new().query("market", "US"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_cache_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "me"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .no_cache()
        .build();
    let client = HttpClient::new(config, static_session("t")).unwrap();

    client.get("/me").await.unwrap();
    client.get("/me").await.unwrap();
}

#[tokio::test]
async fn test_post_invalidates_cached_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists/p1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlists/p1/tracks"))
        .and(body_json(json!({"uris": ["spotify:track:t1"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));

    client.get("/playlists/p1/tracks").await.unwrap();
    let snapshot = client
        .post("/playlists/p1/tracks", json!({"uris": ["spotify:track:t1"]}))
        .await
        .unwrap();
    assert_eq!(snapshot["snapshot_id"], "s2");

    client.get("/playlists/p1/tracks").await.unwrap();
}

#[tokio::test]
async fn test_empty_body_decodes_to_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/player/queue"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let body = client
        .post_with_config(
            "/me/player/queue",
            RequestConfig::new().query("uri", "spotify:track:t1"),
        )
        .await
        .unwrap();

    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_get_json_typed() {
    #[derive(serde::Deserialize)]
    struct Snapshot {
        snapshot_id: String,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "abc"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, static_session("t"));
    let snapshot: Snapshot = client.get_json("/snapshot").await.unwrap();
    assert_eq!(snapshot.snapshot_id, "abc");

    let err = client.get_json::<Vec<u32>>("/snapshot").await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Accept-Language", "sv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("Accept-Language", "sv")
        .no_rate_limit()
        .build();
    let client = HttpClient::new(config, static_session("t")).unwrap();

    client.get("/me").await.unwrap();
}

#[test]
fn test_debug_output() {
    let client = HttpClient::new(HttpClientConfig::default(), static_session("secret")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("has_cache: true"));
    assert!(!debug.contains("secret"));
}
