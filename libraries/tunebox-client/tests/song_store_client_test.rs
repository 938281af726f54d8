//! Integration tests for the song-store client against a mocked service.

use serde_json::json;
use tunebox_client::{ClientError, SongStoreClient, StoreConfig};
use tunebox_core::NewSongRecord;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SongStoreClient {
    SongStoreClient::new(StoreConfig::new(server.uri(), "test-key")).expect("valid config")
}

fn new_song() -> NewSongRecord {
    NewSongRecord {
        title: "Uploaded".to_string(),
        artist: "Artist".to_string(),
        url: "https://cdn.example.com/upload.mp3".to_string(),
        genre: "Pop".to_string(),
        mood: "Happy".to_string(),
        cover_image: "https://cdn.example.com/cover.jpg".to_string(),
    }
}

#[tokio::test]
async fn list_songs_parses_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/songs"))
        .and(query_param("select", "*"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "X",
                "artist": "Y",
                "url": "u",
                "genre": null,
                "mood": null,
                "cover_image": null
            },
            {
                "id": 2,
                "title": "Full Row",
                "artist": "Artist",
                "url": "https://cdn.example.com/2.mp3",
                "genre": "Afrobeats",
                "mood": "Energetic",
                "cover_image": "https://cdn.example.com/2.jpg"
            }
        ])))
        .mount(&server)
        .await;

    let rows = client_for(&server).list_songs().await.expect("list succeeds");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "X");
    assert!(rows[0].genre.is_none());
    assert_eq!(rows[1].genre.as_deref(), Some("Afrobeats"));
}

#[tokio::test]
async fn list_songs_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/songs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_songs().await.unwrap_err();
    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_songs_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/songs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_songs().await.unwrap_err();
    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn insert_song_posts_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/songs"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .insert_song(new_song())
        .await
        .expect("insert succeeds");
}

#[tokio::test]
async fn insert_failure_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/songs"))
        .respond_with(ResponseTemplate::new(403).set_body_string("row-level security"))
        .mount(&server)
        .await;

    let err = client_for(&server).insert_song(new_song()).await.unwrap_err();
    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("row-level security"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
