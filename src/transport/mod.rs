//! HTTP transport abstraction.
//!
//! The client describes every exchange as a plain [`HttpRequest`] and hands it
//! to a [`Transport`], which performs the network I/O and returns the status,
//! content type, and body text as an [`HttpResponse`]. Status and content-type
//! checks stay in the client, so any transport gets the same error semantics.
//!
//! # Feature Flags
//!
//! - `transport-reqwest` (default) - Provides [`ReqwestTransport`], used by
//!   [`Artemis::new`](crate::Artemis::new)
//!
//! Without the default feature, implement [`Transport`] yourself and pass it
//! to [`Artemis::with_transport`](crate::Artemis::with_transport).

use std::fmt;
use std::future::Future;

use serde_json::Value;

pub use crate::errors::TransportError;

#[cfg(feature = "transport-reqwest")]
mod reqwest_impl;

#[cfg(feature = "transport-reqwest")]
pub use reqwest_impl::ReqwestTransport;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body at all
    Empty,
    /// Opaque text sent as-is
    Raw(String),
    /// A value sent JSON-encoded with `Content-Type: application/json`
    Json(Value),
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            body: RequestBody::Empty,
        }
    }

    pub fn post(url: String, body: RequestBody) -> Self {
        HttpRequest {
            method: HttpMethod::Post,
            url,
            body,
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Body decoded as text; empty when the server sent none.
    pub body: String,
}

impl HttpResponse {
    /// Whether the `Content-Type` header mentions `application/json`.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must return `Err` only for failures below the HTTP layer
/// (connection refused, DNS, timeouts). Any response the server actually sent,
/// whatever its status, is returned as `Ok`.
pub trait Transport: Send + Sync {
    /// Execute the request and read the full response body.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
