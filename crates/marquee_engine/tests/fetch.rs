use std::time::Duration;

use marquee_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILMS_BODY: &str = r#"{
    "count": 2,
    "results": [
        {
            "episode_id": 4,
            "title": "A New Hope",
            "opening_crawl": "It is a period...",
            "release_date": "1977-05-25",
            "director": "George Lucas"
        },
        {
            "episode_id": 5,
            "title": "The Empire Strikes Back",
            "opening_crawl": "It is a dark time...",
            "release_date": "1980-05-17"
        }
    ]
}"#;

#[tokio::test]
async fn fetcher_maps_results_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FILMS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/api/films/", server.uri());

    let records = fetcher.fetch(1, &url).await.expect("fetch ok");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].episode_id, 4);
    assert_eq!(records[0].title, "A New Hope");
    assert_eq!(records[0].opening_crawl, "It is a period...");
    assert_eq!(records[0].release_date, "1977-05-25");
    assert_eq!(records[1].episode_id, 5);
    assert_eq!(records[1].title, "The Empire Strikes Back");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/api/films/", server.uri());

    let err = fetcher.fetch(2, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"films": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/api/films/", server.uri());

    let err = fetcher.fetch(3, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetcher_fails_on_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = fetcher.fetch(4, "not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"results": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/api/films/", server.uri());

    let err = fetcher.fetch(5, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}
