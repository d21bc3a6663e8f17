//! End-to-end: `HttpReadingsApi` + `ReadingsFeed` against a live server.
//!
//! Run with: cargo test --test readings_feed_test

mod common;

use chrono::{Duration, Utc};
use tokio::net::TcpListener;

use thermostat_api::client::{
    ClientError, HttpReadingsApi, ListState, ReadingDraft, ReadingsApi, ReadingsFeed,
};
use thermostat_api::common::AppState;
use thermostat_api::services::NewReading;

async fn serve(state: AppState) -> String {
    let app = common::test_app(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

#[tokio::test]
async fn feed_walks_all_pages_newest_first() {
    let state = common::test_state().await;
    let now = Utc::now();
    for i in 1..=7 {
        state
            .readings
            .create_at(NewReading::new(f64::from(i)), now - Duration::minutes(i64::from(i)))
            .await
            .unwrap();
    }
    let base = serve(state).await;

    let mut feed = ReadingsFeed::new(HttpReadingsApi::new(base).unwrap(), 3);
    assert_eq!(feed.state(), ListState::Loading);

    assert_eq!(feed.load_all().await.unwrap(), 7);
    let temps: Vec<f64> = feed.readings().map(|r| r.temperature_c).collect();
    assert_eq!(temps, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert!(!feed.has_next_page());

    let stats = feed.stats().unwrap();
    assert_eq!(stats.current, 1.0);
    assert_eq!(stats.average, 4.0);
    assert_eq!(stats.max, 7.0);
    assert_eq!(stats.min, 1.0);
}

#[tokio::test]
async fn submit_reloads_with_new_reading_first() {
    let base = serve(common::test_state().await).await;
    let mut feed = ReadingsFeed::new(HttpReadingsApi::new(base).unwrap(), 20);

    feed.refresh().await.unwrap();
    assert_eq!(feed.state(), ListState::Empty);

    let mut draft = ReadingDraft::new(22.5);
    draft.location = Some("Office".to_string());
    let created = feed.submit(draft).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.location.as_deref(), Some("Office"));
    assert_eq!(feed.state(), ListState::Loaded);
    assert_eq!(feed.readings().next(), Some(&created));
}

#[tokio::test]
async fn rejected_reading_surfaces_server_message() {
    let base = serve(common::test_state().await).await;
    let api = HttpReadingsApi::new(base).unwrap();

    let err = api.create(&ReadingDraft::new(101.0)).await.unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("out of range"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }

    let page = api.fetch_page(1, 20).await.unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn unreachable_server_is_an_error_state() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpReadingsApi::new(format!("http://{addr}/api/v1")).unwrap();
    let mut feed = ReadingsFeed::new(api, 20);

    assert!(matches!(
        feed.fetch_next_page().await,
        Err(ClientError::Request(_))
    ));
    assert!(matches!(feed.state(), ListState::Error(_)));
    assert!(feed.is_empty());
}
