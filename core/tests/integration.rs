//! Every photo operation against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port and drives `UnsplashClient` over
//! real HTTP with the default reqwest transport. Checks that requests carry
//! the credential, land on the right paths with the right parameters, and
//! that responses and failures come back unmodified.

use splash_core::{
    ApiError, ClientConfig, DownloadLink, GetOptions, ListOptions, OrderBy, Photo,
    PhotoStatistics, RandomOptions, SearchOptions, SearchResults, StatSeries, StatsOptions,
    UnsplashClient,
};
use tokio::net::TcpListener;

/// Serve `app` on a random local port and return its base URL.
async fn start(app: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, app));
    format!("http://{addr}/")
}

async fn client() -> UnsplashClient {
    let base_url = start(mock_server::app()).await;
    UnsplashClient::new(ClientConfig::new("test-key").with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn search_returns_result_object() {
    let client = client().await;
    let response = client
        .photos()
        .search("city", SearchOptions::new().per_page(30))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let results: SearchResults = response.json().unwrap();
    assert_eq!(results.total, 100);
    assert_eq!(results.total_pages, 4);
    assert_eq!(results.results.len(), 30);
}

#[tokio::test]
async fn list_uses_defaults() {
    let client = client().await;
    let response = client.photos().list(ListOptions::new()).await.unwrap();

    let photos: Vec<Photo> = response.json().unwrap();
    assert_eq!(photos.len(), 10);
    assert!(photos.iter().all(|p| p.id.starts_with("latest-1-")));
}

#[tokio::test]
async fn list_forwards_order_and_page() {
    let client = client().await;
    let response = client
        .photos()
        .list(ListOptions::new().order_by(OrderBy::Popular).page(2).per_page(3))
        .await
        .unwrap();

    let photos: Vec<Photo> = response.json().unwrap();
    let ids: Vec<_> = photos.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["popular-2-0", "popular-2-1", "popular-2-2"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_calls_complete_independently() {
    let client = client().await;
    let photos = client.photos();

    let (listed, curated) = tokio::join!(
        photos.list(ListOptions::new().per_page(4)),
        photos.curated(ListOptions::new().per_page(6)),
    );

    let listed: Vec<Photo> = listed.unwrap().json().unwrap();
    let curated: Vec<Photo> = curated.unwrap().json().unwrap();
    assert_eq!(listed.len(), 4);
    assert!(listed.iter().all(|p| p.id.starts_with("latest-")));
    assert_eq!(curated.len(), 6);
    assert!(curated.iter().all(|p| p.id.starts_with("curated-")));
}

#[tokio::test]
async fn get_returns_photo_object() {
    let client = client().await;
    let response = client
        .photos()
        .get("twukN12EN7c", GetOptions::new().w(800).h(600))
        .await
        .unwrap();

    let photo: Photo = response.json().unwrap();
    assert_eq!(photo.id, "twukN12EN7c");
    assert_eq!((photo.width, photo.height), (800, 600));
}

#[tokio::test]
async fn id_with_slash_reaches_the_photo_route() {
    let client = client().await;
    let response = client.photos().get("a/b", GetOptions::new()).await.unwrap();

    let photo: Photo = response.json().unwrap();
    assert_eq!(photo.id, "a/b");
}

#[tokio::test]
async fn get_unknown_photo_passes_404_through() {
    let client = client().await;
    let err = client
        .photos()
        .get(mock_server::MISSING_PHOTO_ID, GetOptions::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Couldn't find Photo"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn random_shape_depends_on_count() {
    let client = client().await;

    let single = client.photos().random(RandomOptions::new()).await.unwrap();
    let body: serde_json::Value = single.json().unwrap();
    assert!(body.is_object());

    let many = client
        .photos()
        .random(RandomOptions::new().count(5))
        .await
        .unwrap();
    let photos: Vec<Photo> = many.json().unwrap();
    assert_eq!(photos.len(), 5);
}

#[tokio::test]
async fn stats_default_to_thirty_days() {
    let client = client().await;
    let response = client
        .photos()
        .stats("twukN12EN7c", StatsOptions::new())
        .await
        .unwrap();

    let stats: PhotoStatistics = response.json().unwrap();
    assert_eq!(stats.id, "twukN12EN7c");
    let downloads: &StatSeries = &stats.downloads;
    assert_eq!(downloads.historical.quantity, 30);
    assert_eq!(stats.views.historical.values.len(), 30);
}

#[tokio::test]
async fn download_returns_link() {
    let client = client().await;
    let response = client.photos().download("twukN12EN7c").await.unwrap();

    let link: DownloadLink = response.json().unwrap();
    assert_eq!(link.url, "https://images.example.test/twukN12EN7c?dl=1");
    assert!(response.header("content-type").unwrap().starts_with("application/json"));
}

#[tokio::test]
async fn wrong_access_key_passes_401_through() {
    let base_url = start(mock_server::app_with_access_key("expected-key")).await;
    let client =
        UnsplashClient::new(ClientConfig::new("test-key").with_base_url(base_url)).unwrap();

    let err = client.photos().list(ListOptions::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 401, .. }));
}

#[tokio::test]
async fn matching_access_key_is_accepted() {
    let base_url = start(mock_server::app_with_access_key("test-key")).await;
    let client =
        UnsplashClient::new(ClientConfig::new("test-key").with_base_url(base_url)).unwrap();

    let response = client.photos().curated(ListOptions::new()).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        UnsplashClient::new(ClientConfig::new("test-key").with_base_url(format!("http://{addr}")))
            .unwrap();
    let err = client.photos().download("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn argument_errors_do_not_reach_the_server() {
    let client = client().await;
    let err = client.photos().get("", GetOptions::new()).await.unwrap_err();
    assert!(err.is_argument_error());
}
