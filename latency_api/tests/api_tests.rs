use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use latency_api::{create_router, AppState, ErrorResponse, HealthStatus};
use latency_core::{TelemetryDataset, TelemetryRecord};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let dataset = TelemetryDataset::new(vec![
        TelemetryRecord::up("emea", 100),
        TelemetryRecord::up("emea", 200),
        TelemetryRecord::down("emea", 300),
        TelemetryRecord::up("emea", 400),
        TelemetryRecord::up("emea", 500),
        TelemetryRecord::down("amer", 201),
    ]);
    create_router(AppState::new(dataset))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/latency")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthStatus = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.records, 6);
    assert_eq!(health.regions, 2);
}

#[tokio::test]
async fn test_latency_report() {
    let body = json!({"regions": ["emea", "amer"], "threshold_ms": 250}).to_string();

    let response = test_app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        report,
        json!({
            "emea": {"avg_latency": 300.0, "p95_latency": 400, "avg_uptime": 0.8, "breaches": 3},
            "amer": {"avg_latency": 201.0, "p95_latency": 201, "avg_uptime": 0.0, "breaches": 0}
        })
    );
}

#[tokio::test]
async fn test_report_keeps_query_order_and_drops_unknown() {
    let body = json!({"regions": ["amer", "mars", "emea", "amer"], "threshold_ms": 0}).to_string();

    let response = test_app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    let amer = text.find("\"amer\"").unwrap();
    let emea = text.find("\"emea\"").unwrap();
    assert!(amer < emea);
    assert!(!text.contains("mars"));
    assert_eq!(text.matches("\"amer\"").count(), 1);
}

#[tokio::test]
async fn test_empty_regions_returns_empty_object() {
    let body = json!({"regions": [], "threshold_ms": 100}).to_string();

    let response = test_app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"{}");
}

#[tokio::test]
async fn test_schema_mismatch_is_unprocessable() {
    let body = json!({"regions": "emea", "threshold_ms": "fast"}).to_string();

    let response = test_app().oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let response = test_app()
        .oneshot(post_json(r#"{"regions": ["emea"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_threshold_must_be_an_integer() {
    for threshold in [json!(250.0), json!("250")] {
        let body = json!({"regions": ["emea"], "threshold_ms": threshold}).to_string();

        let response = test_app().oneshot(post_json(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let response = test_app()
        .oneshot(post_json(r#"{"regions": ["emea""#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported() {
    let request = Request::builder()
        .uri("/api/latency")
        .method(Method::POST)
        .body(Body::from(r#"{"regions": ["emea"], "threshold_ms": 1}"#))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let request = Request::builder()
        .uri("/api/latency")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/latency")
        .method(Method::OPTIONS)
        .header(header::ORIGIN, "https://dashboard.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("POST"));
}

#[tokio::test]
async fn test_cors_header_on_post() {
    let mut request = post_json(r#"{"regions": ["emea"], "threshold_ms": 1}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://dashboard.example.com".parse().unwrap());

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
