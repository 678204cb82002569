//! End-to-end tests against a local HTTP server.

#![cfg(feature = "transport-reqwest")]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use artemis_rgb::transport::ReqwestTransport;
use artemis_rgb::{Artemis, ArtemisConfig, SuspendState};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    content_type: Option<String>,
    body: Bytes,
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: &'static str,
}

#[derive(Clone)]
struct Mock {
    reply: Reply,
    recorded: Recorder,
}

async fn record(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    mock.recorded.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });

    let mut response = (mock.reply.status, mock.reply.body).into_response();
    response.headers_mut().remove(header::CONTENT_TYPE);
    if let Some(ct) = mock.reply.content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, ct.parse().unwrap());
    }
    response
}

type Recorder = Arc<Mutex<Vec<Recorded>>>;

/// Serves `reply` for every request and returns a client pointed at it.
async fn serve(reply: Reply) -> (Artemis<ReqwestTransport>, Recorder) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(Mock {
        reply,
        recorded: recorded.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Artemis::new(ArtemisConfig::new("127.0.0.1", port)), recorded)
}

fn no_content() -> Reply {
    Reply {
        status: StatusCode::NO_CONTENT,
        content_type: None,
        body: "",
    }
}

fn single(recorded: &Recorder) -> Recorded {
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    recorded[0].clone()
}

fn json_body(request: &Recorded) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn get_profiles_returns_parsed_json() {
    let (artemis, recorded) = serve(Reply {
        status: StatusCode::OK,
        content_type: Some("application/json; charset=utf-8"),
        body: r#"{"a":1}"#,
    })
    .await;

    assert_eq!(artemis.get_profiles().await.unwrap(), json!({"a": 1}));

    let request = single(&recorded);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/profiles");
}

#[tokio::test]
async fn get_profile_categories_hits_categories_path() {
    let (artemis, recorded) = serve(Reply {
        status: StatusCode::OK,
        content_type: Some("application/json"),
        body: r#"[{"Name":"General"}]"#,
    })
    .await;

    let categories = artemis.get_profile_categories().await.unwrap();
    assert_eq!(categories[0]["Name"], "General");
    assert_eq!(single(&recorded).path, "/profiles/categories");
}

#[tokio::test]
async fn get_with_plain_text_fails() {
    let (artemis, _) = serve(Reply {
        status: StatusCode::OK,
        content_type: Some("text/plain"),
        body: r#"{"a":1}"#,
    })
    .await;

    let err = artemis.get_profiles().await.unwrap_err();
    assert!(err.is_cannot_connect());
}

#[tokio::test]
async fn get_not_found_reports_status_and_body() {
    let (artemis, _) = serve(Reply {
        status: StatusCode::NOT_FOUND,
        content_type: Some("text/plain"),
        body: "not found",
    })
    .await;

    let err = artemis.get_profiles().await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("404"), "{msg}");
    assert!(msg.contains("not found"), "{msg}");
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn post_server_error_reports_status_and_body() {
    let (artemis, _) = serve(Reply {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        content_type: Some("text/plain"),
        body: "boom",
    })
    .await;

    let err = artemis.shutdown().await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("500"), "{msg}");
    assert!(msg.contains("boom"), "{msg}");
}

#[tokio::test]
async fn shutdown_posts_empty_body() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis.shutdown().await.unwrap();

    let request = single(&recorded);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/remote/shutdown");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn suspend_profile_sends_string_flag() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis
        .suspend_profile("abc", SuspendState::True)
        .await
        .unwrap();

    let request = single(&recorded);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/profiles/suspend/abc");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(json_body(&request), json!({"suspend": "true"}));
}

#[tokio::test]
async fn restart_without_args_sends_empty_array() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis.restart(&[]).await.unwrap();

    let request = single(&recorded);
    assert_eq!(request.path, "/remote/restart");
    assert_eq!(json_body(&request), json!([]));
}

#[tokio::test]
async fn restart_with_args_sends_them() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis.restart(&["--safe"]).await.unwrap();
    assert_eq!(json_body(&single(&recorded)), json!(["--safe"]));
}

#[tokio::test]
async fn bring_to_foreground_sends_raw_route() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis.bring_to_foreground("settings").await.unwrap();

    let request = single(&recorded);
    assert_eq!(request.path, "/remote/bring-to-foreground");
    assert_eq!(&request.body[..], b"settings");
    assert!(
        request
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/plain"))
    );
}

#[tokio::test]
async fn bring_to_foreground_default_route_is_empty() {
    let (artemis, recorded) = serve(no_content()).await;
    artemis.bring_to_foreground("").await.unwrap();
    assert!(single(&recorded).body.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_cannot_connect() {
    // Bind and drop to get a port with nothing listening on it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let artemis = Artemis::new(ArtemisConfig::new("127.0.0.1", port));

    assert!(artemis.get_profiles().await.unwrap_err().is_cannot_connect());
    assert!(artemis.get_profile_categories().await.unwrap_err().is_cannot_connect());
    assert!(artemis.bring_to_foreground("").await.unwrap_err().is_cannot_connect());
    assert!(artemis.restart(&[]).await.unwrap_err().is_cannot_connect());
    assert!(artemis.shutdown().await.unwrap_err().is_cannot_connect());
    assert!(artemis.suspend_profile("abc", true).await.unwrap_err().is_cannot_connect());
    assert!(!artemis.is_available().await);
}

#[tokio::test]
async fn proxy_environment_is_ignored() {
    let (artemis, recorded) = serve(Reply {
        status: StatusCode::OK,
        content_type: Some("application/json"),
        body: r#"{"a":1}"#,
    })
    .await;

    // Nothing listens on the discard port, so a proxied request would fail.
    // SAFETY: every client in this binary bypasses proxies, so no other test
    // depends on these variables.
    unsafe {
        std::env::set_var("HTTP_PROXY", "http://127.0.0.1:9");
        std::env::set_var("http_proxy", "http://127.0.0.1:9");
        std::env::set_var("ALL_PROXY", "http://127.0.0.1:9");
    }

    assert_eq!(artemis.get_profiles().await.unwrap(), json!({"a": 1}));
    assert_eq!(single(&recorded).path, "/profiles");
}
