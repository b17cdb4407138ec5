use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use lagoon_api::build_app;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = build_app().await.expect("app should build");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn respond_requires_api_key() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "text": "What time is checkout?"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn respond_returns_reply_text() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-lagoon-key")
        .body(Body::from(
            json!({
                "text": "The sun is shining."
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        parsed.get("reply_text").and_then(|value| value.as_str()),
        Some("The sun is shining.")
    );
}

#[tokio::test]
async fn booking_flow_completes_over_the_api() {
    let app = build_app().await.expect("app should build");

    let start_request = Request::builder()
        .method("POST")
        .uri("/v1/booking/start")
        .header("x-api-key", "dev-lagoon-key")
        .body(Body::empty())
        .unwrap();

    let start_response = app.clone().oneshot(start_request).await.unwrap();
    assert_eq!(start_response.status(), StatusCode::OK);

    let body = to_bytes(start_response.into_body(), usize::MAX).await.unwrap();
    let start: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let booking_id = start
        .get("booking_id")
        .and_then(|value| value.as_str())
        .expect("booking_id should be present")
        .to_string();

    let answers = [
        "Knysna",
        "2",
        "Blue Hut",
        "2026-03-01",
        "2",
        "0123456789",
        "no",
        "yes",
    ];

    let mut last: serde_json::Value = start;
    for answer in answers {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/booking/reply")
            .header("content-type", "application/json")
            .header("x-api-key", "dev-lagoon-key")
            .body(Body::from(
                json!({
                    "booking_id": booking_id,
                    "text": answer
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "answer {answer:?}");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        last = serde_json::from_slice(&body).unwrap();
    }

    assert_eq!(last.get("complete").and_then(|value| value.as_bool()), Some(true));
    let messages = last
        .get("messages")
        .and_then(|value| value.as_array())
        .expect("messages should be present");
    assert!(messages
        .iter()
        .filter_map(|value| value.as_str())
        .any(|line| line.starts_with("Your Booking Reference Number: ")));
}

#[tokio::test]
async fn unknown_booking_id_is_not_found() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/booking/reply")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-lagoon-key")
        .body(Body::from(
            json!({
                "booking_id": "nope",
                "text": "Knysna"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
