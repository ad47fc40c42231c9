//! Integration tests for `YouTubeClient` against a wiremock server

use playlist_scout::{
    error::UpstreamError,
    services::{
        youtube::{QueryParams, Resource},
        YouTubeApi, YouTubeClient,
    },
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn create_client(mock_server: &MockServer) -> YouTubeClient {
    YouTubeClient::new("secret-key".to_string(), mock_server.uri())
}

#[tokio::test]
async fn get_json_appends_key_and_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PL1"))
        .and(query_param("key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let params: QueryParams = vec![("playlistId", "PL1".to_string())];
    let value = assert_ok!(client.get_json(Resource::PlaylistItems, &params).await);

    assert_eq!(value, json!({ "items": [] }));
}

#[tokio::test]
async fn get_json_keeps_raw_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded: not json"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = assert_err!(client.get_json(Resource::Channels, &vec![]).await);

    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "quotaExceeded: not json");
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn get_json_rejects_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = assert_err!(client.get_json(Resource::Search, &vec![]).await);
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn get_json_truncated_error_body_is_transport_failure() {
    // Error response that promises more body than it sends
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
            .await;
    });

    let client = YouTubeClient::new("secret-key".to_string(), format!("http://{addr}"));
    let err = assert_err!(client.get_json(Resource::Playlists, &vec![]).await);
    assert!(matches!(err, UpstreamError::Transport(_)));
}

#[tokio::test]
async fn get_json_transport_failure() {
    // Nothing listens on the discard port
    let client = YouTubeClient::new("secret-key".to_string(), "http://127.0.0.1:9".to_string());

    let err = assert_err!(client.get_json(Resource::Playlists, &vec![]).await);
    assert!(matches!(err, UpstreamError::Transport(_)));
    assert!(!err.to_string().contains("secret-key"));
}
