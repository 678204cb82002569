//! reqwest transport implementation.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};

use super::{HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport, TransportError};

/// Transport backed by [`reqwest`].
///
/// Each exchange builds its own [`Client`] with idle pooling disabled, so no
/// connection outlives the call that opened it. Proxy environment variables
/// are ignored; requests always go straight to the configured host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport
    }

    fn session() -> Result<Client, reqwest::Error> {
        Client::builder()
            .no_proxy()
            .pool_max_idle_per_host(0)
            .build()
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let session = Self::session()?;

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        let builder = session.request(method, &request.url);
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Raw(text) => builder
                .header(CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(text),
            RequestBody::Json(value) => builder.json(&value),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
