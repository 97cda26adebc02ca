use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use netlify_teams_relay::config::{RelayConfig, TEAMS_WEBHOOK_URL_ENV};
use netlify_teams_relay::{AppState, build_router};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> axum::Router {
    let config = RelayConfig::from_lookup(|key| {
        (key == TEAMS_WEBHOOK_URL_ENV).then(|| "http://127.0.0.1:1/hook".to_string())
    })
    .unwrap();
    build_router(Arc::new(AppState::from_config(config).unwrap()))
}

#[tokio::test]
async fn root_reports_healthy() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"netlify_teams_relay - healthy");
}

#[tokio::test]
async fn dump_accepts_any_method_with_empty_body() {
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/dump?source=test")
                    .header("X-Netlify-Event", "deploy_created")
                    .body(Body::from("{\"name\":\"My Site\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method {}", method);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn dump_accepts_bodies_over_the_default_limit() {
    let body = vec![b'a'; 3 * 1024 * 1024];
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/dump")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn missing_webhook_url_fails_before_any_state_is_built() {
    let result = RelayConfig::from_lookup(|_| None);
    assert!(result.is_err());
}
