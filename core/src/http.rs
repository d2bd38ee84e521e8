//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the APOD request and response as plain data. The core
//! crate builds an `HttpRequest` and parses an `HttpResponse` without ever
//! touching the network; the host executes the actual I/O with whatever
//! blocking client it has at hand.

/// HTTP method for a request. APOD is read-only, so only `GET` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ApodClient::build_fetch`. The `url` carries the API key in its
/// query string, so hosts must not log it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `ApodClient::parse_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
