use super::*;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = probe_routes::<()>()
        .oneshot(request(Method::GET, "/healthz"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = probe_routes::<()>()
        .oneshot(request(Method::POST, "/healthz"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_probe_path_is_not_found() {
    let response = probe_routes::<()>()
        .oneshot(request(Method::GET, "/readyz"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
