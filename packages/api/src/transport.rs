//! # Transport: how requests reach the backend
//!
//! [`RestClient`](crate::RestClient) speaks in terms of [`HttpRequest`] and
//! [`HttpResponse`] and hands the actual I/O to a [`Transport`]. Two
//! implementations live here:
//!
//! | Transport | Used by |
//! |-----------|---------|
//! | [`HttpTransport`] | The running client. Backed by `reqwest`, which uses the browser's `fetch` on wasm32. |
//! | [`MemoryTransport`] | Tests and demos. Answers from a queue of scripted responses and records every request it saw. |
//!
//! A transport performs exactly one attempt per call: no retry, no timeout, no
//! cancellation.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use reqwest::header::CONTENT_TYPE;
use store::ApiConfig;

use crate::error::FetchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the configured backend.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path such as `/api/v1/customers/42`.
    pub path: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async interface for sending one request to the backend.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, FetchError>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    api: ApiConfig,
}

impl HttpTransport {
    /// Request paths are appended to `api.base_url`.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let url = self.api.url(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        let builder = match request.body {
            Some(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// In-memory transport for tests.
///
/// Responses are consumed in order. Once the queue is empty every request is
/// answered with `200 []`.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, FetchError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Ok(HttpResponse::new(status, body)))
    }

    /// Queue a network-level failure for the next unanswered request.
    pub fn fail(&self, message: impl Into<String>) -> &Self {
        self.push(Err(FetchError::Network(message.into())))
    }

    fn push(&self, response: Result<HttpResponse, FetchError>) -> &Self {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Requests rendered as `"METHOD /path"`, handy for assertions.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests().iter().map(ToString::to_string).collect()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "[]")))
    }
}
