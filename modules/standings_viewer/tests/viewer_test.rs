use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use standings_viewer::{fallback_standings, StandingsViewer, ViewerConfig};

/// Serve a router on an ephemeral port, returning its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn viewer_for(base_url: String) -> StandingsViewer {
    StandingsViewer::new(ViewerConfig {
        api_base_url: Some(base_url),
        season: Some(2025),
    })
}

#[tokio::test]
async fn live_payload_replaces_fallback() {
    let router = Router::new().route(
        "/league/{year}",
        get(|Path(year): Path<String>| async move {
            assert_eq!(year, "2025");
            Json(json!({
                "PK": "LEAGUE",
                "SK": "YEAR#2025",
                "data": {"standings": [
                    {"name": "Brooklyn Blitz", "wins": 9, "losses": 5, "pointsFor": 1612},
                    {"name": "Harlem Heat", "wins": 8, "losses": 6, "pointsFor": 1540},
                ]},
            }))
        }),
    );
    let base = serve(router).await;

    let viewer = viewer_for(base);
    viewer.refresh().await;

    let state = viewer.state();
    assert!(!state.loading);
    assert_eq!(state.message, None);
    assert_eq!(state.standings.len(), 2);
    assert_eq!(state.standings[0].name, "Brooklyn Blitz");
    assert_eq!(state.standings[0].seed, 1);
    assert_eq!(viewer.total_points(), 1612.0 + 1540.0);
    assert_eq!(viewer.chart_series().len(), 2);
}

#[tokio::test]
async fn http_error_surfaces_status_and_endpoint() {
    let router = Router::new().fallback(|| async {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"})))
    });
    let base = serve(router).await;

    let viewer = viewer_for(base);
    viewer.refresh().await;

    let state = viewer.state();
    assert!(!state.loading);
    assert_eq!(state.standings, fallback_standings());
    let message = state.message.expect("error message expected");
    assert!(message.contains("404"), "message was: {message}");
    assert!(message.contains("/league/2025"), "message was: {message}");
}

#[tokio::test]
async fn unreachable_api_degrades_to_fallback() {
    // Nothing is listening on this port.
    let viewer = viewer_for("http://127.0.0.1:9".to_string());
    viewer.refresh().await;

    let state = viewer.state();
    assert_eq!(state.standings, fallback_standings());
    assert!(state.message.is_some());
}

#[tokio::test]
async fn malformed_json_degrades_to_fallback() {
    let router = Router::new().route(
        "/league/{year}",
        get(|| async {
            ([("content-type", "application/json")], "{not json").into_response()
        }),
    );
    let base = serve(router).await;

    let viewer = viewer_for(base);
    viewer.refresh().await;

    let state = viewer.state();
    assert_eq!(state.standings, fallback_standings());
    assert!(state.message.is_some());
}

#[tokio::test]
async fn empty_team_list_falls_back_without_error() {
    let router = Router::new().route(
        "/league/{year}",
        get(|| async { Json(json!({"data": {"teams": []}})) }),
    );
    let base = serve(router).await;

    let viewer = viewer_for(base);
    viewer.refresh().await;

    let state = viewer.state();
    assert_eq!(state.standings, fallback_standings());
    assert_eq!(state.message, None);
}

#[tokio::test]
async fn aborted_load_leaves_state_untouched() {
    // First request answers immediately, later ones hang long enough to be
    // cancelled mid-flight.
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/league/{year}",
        get(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) > 0 {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                }
                Json(json!({"data": {"standings": [
                    {"name": "Queens Sidewinders", "wins": 10, "losses": 4, "pointsFor": 1665},
                ]}}))
            }
        }),
    );
    let base = serve(router).await;

    let viewer = Arc::new(viewer_for(base));
    viewer.refresh().await;
    let before = viewer.state();
    assert_eq!(before.standings[0].name, "Queens Sidewinders");

    let background = {
        let viewer = viewer.clone();
        tokio::spawn(async move { viewer.refresh().await })
    };
    // Let the second load reach the network before aborting it.
    tokio::time::sleep(Duration::from_millis(100)).await;
    viewer.cancel();

    // The aborted load returns promptly instead of waiting out the server.
    tokio::time::timeout(Duration::from_secs(5), background)
        .await
        .expect("cancelled load should finish quickly")
        .unwrap();

    let after = viewer.state();
    assert_eq!(after.standings, before.standings);
    assert_eq!(after.message, None);
    assert!(!after.loading);
}

#[tokio::test]
async fn new_refresh_supersedes_inflight_load() {
    // First request hangs, second answers immediately.
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/league/{year}",
        get(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                }
                Json(json!({"data": {"standings": [
                    {"name": "Staten Island Sailors", "wins": 12, "losses": 2, "pointsFor": 1780},
                ]}}))
            }
        }),
    );
    let base = serve(router).await;

    let viewer = Arc::new(viewer_for(base));
    let slow = {
        let viewer = viewer.clone();
        tokio::spawn(async move { viewer.refresh().await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    viewer.refresh().await;

    tokio::time::timeout(Duration::from_secs(5), slow)
        .await
        .expect("superseded load should finish quickly")
        .unwrap();

    let state = viewer.state();
    assert_eq!(state.standings.len(), 1);
    assert_eq!(state.standings[0].name, "Staten Island Sailors");
    assert!(!state.loading);
    assert_eq!(state.message, None);
}
