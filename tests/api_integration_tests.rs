use tube::api::{ApiError, VideoSource, YoutubeClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> YoutubeClient {
    YoutubeClient::new("test-key".to_string(), Some(server.uri()))
}

fn channels_body() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "id": "UCaaa",
                "snippet": { "title": "Alpha" },
                "statistics": {
                    "subscriberCount": "10",
                    "viewCount": "1000",
                    "videoCount": "3"
                }
            },
            {
                "id": "UCbbb",
                "snippet": { "title": "Bravo" },
                "statistics": {
                    "subscriberCount": "2000000",
                    "viewCount": "900000000",
                    "videoCount": "812"
                }
            }
        ]
    })
}

fn playlist_items_body() -> serde_json::Value {
    serde_json::json!({
        "items": [
            { "snippet": { "resourceId": { "videoId": "vid1" } } },
            { "snippet": { "resourceId": { "videoId": "vid2" } } }
        ]
    })
}

fn videos_body() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "id": "vid1",
                "snippet": {
                    "title": "First upload",
                    "channelTitle": "Alpha",
                    "publishedAt": "2024-05-01T10:00:00Z"
                },
                "statistics": {
                    "viewCount": "1234",
                    "likeCount": "75",
                    "dislikeCount": "25"
                },
                "contentDetails": { "duration": "PT4M13S" }
            },
            {
                "id": "vid2",
                "snippet": {
                    "title": "Second upload",
                    "channelTitle": "Alpha",
                    "publishedAt": "2024-06-02T12:30:00Z"
                },
                "statistics": { "viewCount": "98" },
                "contentDetails": { "duration": "PT1H2M3S" }
            }
        ]
    })
}

// ============================================================================
// Channel Listing
// ============================================================================

#[tokio::test]
async fn test_channels_parses_statistics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("id", "UCaaa,UCbbb"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(channels_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = vec!["UCaaa".to_string(), "UCbbb".to_string()];
    let channels = client.channels(&ids).await.unwrap();

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].title, "Alpha");
    assert_eq!(channels[0].subscriber_count, 10);
    assert_eq!(channels[1].subscriber_count, 2_000_000);
    assert_eq!(channels[1].video_count, 812);
}

#[tokio::test]
async fn test_channels_with_no_ids_skips_the_request() {
    // No mock mounted: any request would 404 and fail the call.
    let server = MockServer::start().await;
    let client = client_for(&server);
    let channels = client.channels(&[]).await.unwrap();
    assert!(channels.is_empty());
}

#[tokio::test]
async fn test_channels_api_error_is_reported_not_panicked() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = vec!["UCaaa".to_string()];
    match client.channels(&ids).await {
        Err(ApiError::Api { status: 403, message }) => {
            assert!(message.contains("quotaExceeded"));
        }
        other => panic!("expected HTTP 403 error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_channels_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = vec!["UCaaa".to_string()];
    assert!(matches!(
        client.channels(&ids).await,
        Err(ApiError::Parse(_))
    ));
}

// ============================================================================
// Video Listing
// ============================================================================

#[tokio::test]
async fn test_videos_for_channel_joins_playlist_and_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "UUaaa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_items_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "vid1,vid2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let videos = client.videos_for_channel("UCaaa").await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].title, "First upload");
    assert_eq!(videos[0].duration_secs, 253);
    assert_eq!(videos[0].like_percentage(), Some(75.0));
    assert_eq!(videos[1].duration_secs, 3_723);
    // No ratings on the second video.
    assert_eq!(videos[1].like_percentage(), None);
}

#[tokio::test]
async fn test_empty_uploads_playlist_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let videos = client.videos_for_channel("UCaaa").await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_playlist_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(404).set_body_string("playlistNotFound"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.videos_for_channel("UCaaa").await,
        Err(ApiError::Api { status: 404, .. })
    ));
}
