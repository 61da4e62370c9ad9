mod common;

use axum::http::StatusCode;
use common::{
    BROKEN_MOVIE, MISSING_MOVIE, NO_IMAGES_MOVIE, body_json, body_text, get,
    test_app,
};
use tower::ServiceExt;

#[tokio::test]
async fn details_endpoint_returns_assembled_view_model() {
    let response = test_app().oneshot(get("/api/movies/329865")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["core"]["id"], 329865);
    assert_eq!(body["core"]["title"], "Arrival");
    assert_eq!(body["rating_percent"], 76);
    assert_eq!(body["rating_badge"], "high");
    assert_eq!(body["runtime"]["hours"], 1);
    assert_eq!(body["runtime"]["minutes"], 56);
    assert_eq!(body["certification"], "13+");
    assert_eq!(body["cast"][0]["name"], "Amy Adams");

    let backdrops = body["images"]["backdrops"].as_array().unwrap();
    assert_eq!(backdrops.len(), 1);
    assert_eq!(backdrops[0]["path"], "/backdrop-en.jpg");
    assert_eq!(body["images"]["posters"].as_array().unwrap().len(), 1);

    let trailer = body["trailer_embed_url"].as_str().unwrap();
    assert!(trailer.starts_with("https://www.youtube.com/embed/tFMo3UJ4B4g?"));
}

#[tokio::test]
async fn failed_image_lookup_leaves_other_sections_intact() {
    let response = test_app()
        .oneshot(get(&format!("/api/movies/{NO_IMAGES_MOVIE}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["images"]["backdrops"].as_array().unwrap().is_empty());
    assert!(body["images"]["logos"].as_array().unwrap().is_empty());
    assert!(body["images"]["posters"].as_array().unwrap().is_empty());
    assert_eq!(body["cast"].as_array().unwrap().len(), 1);
    assert_eq!(body["certification"], "13+");
}

#[tokio::test]
async fn unknown_movie_maps_to_not_found_envelope() {
    let response = test_app()
        .oneshot(get(&format!("/api/movies/{MISSING_MOVIE}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["message"], "movie 404 not found");
}

#[tokio::test]
async fn upstream_core_failure_maps_to_bad_gateway() {
    let response = test_app()
        .oneshot(get(&format!("/api/movies/{BROKEN_MOVIE}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["status"], 502);
}

#[tokio::test]
async fn non_numeric_movie_id_is_rejected() {
    let response = test_app().oneshot(get("/api/movies/arrival")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["status"], 400);
    assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn non_numeric_events_id_uses_error_envelope() {
    let response = test_app()
        .oneshot(get("/api/movies/arrival/events"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["status"], 400);
}

#[tokio::test(start_paused = true)]
async fn events_stream_sends_details_before_trailer() {
    let response = test_app()
        .oneshot(get("/api/movies/329865/events"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    let details = text.find("event: details").expect("details event");
    let trailer = text.find("event: trailer_ready").expect("trailer event");
    assert!(details < trailer);
    assert!(text.contains("tFMo3UJ4B4g"));
}

#[tokio::test(start_paused = true)]
async fn events_stream_reports_core_failure() {
    let response = test_app()
        .oneshot(get(&format!("/api/movies/{MISSING_MOVIE}/events")))
        .await
        .unwrap();

    let text = body_text(response).await;
    assert!(text.contains("event: error"));
    assert!(!text.contains("event: details"));
    assert!(!text.contains("event: trailer_ready"));
}
