use super::*;
use crate::config::{HostConfig, UpstreamTimeouts};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

fn unconfigured_state() -> AppState {
    AppState::from_config(&HostConfig {
        port: 0,
        api_upstream_url: None,
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve(api_routes(unconfigured_state())).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_paths_reach_forwarder() {
    let base = serve(api_routes(unconfigured_state())).await;
    let resp = reqwest::get(format!("{base}/api/dashboard/stats")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_paths_outside_api_are_not_forwarded() {
    let base = serve(api_routes(unconfigured_state())).await;
    let resp = reqwest::get(format!("{base}/apix")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
