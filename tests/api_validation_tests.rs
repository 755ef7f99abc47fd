// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_bike_id_too_long() {
    let (app, _) = common::create_test_app();
    let long_id = "a".repeat(101);

    let (status, body) = common::get_json(app, &format!("/api/bikes/{}", long_id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_location_id_too_long() {
    let (app, _) = common::create_test_app();
    let long_id = "l".repeat(101);

    let (status, _) = common::get_json(app.clone(), &format!("/api/bikes/rental/{}", long_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        common::get_json(app, &format!("/api/routes/location/{}", long_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_type_filter_too_long() {
    let (app, _) = common::create_test_app();
    let long_type = "t".repeat(51);

    let (status, _) =
        common::get_json(app, &format!("/api/bikes/purchase?type={}", long_type)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rental_by_code_requires_code() {
    let (app, _) = common::create_test_app();

    let (status, _) = common::get_json(app.clone(), "/api/bikes/rental").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = common::get_json(app, "/api/bikes/rental?code=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_get_is_routed() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bikes/purchase")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_loopback_but_not_lookalike_hosts() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let (app, _) = common::create_test_app();

    let allow_origin = |origin: &'static str| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .header(header::ORIGIN, origin)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap().to_string())
        }
    };

    assert_eq!(
        allow_origin("http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(allow_origin("http://localhost.evil.example").await, None);
    assert_eq!(allow_origin("http://127.0.0.1.evil.example:8080").await, None);
}
