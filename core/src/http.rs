//! HTTP request and response types, and the seams the dispatcher talks
//! through.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The network
//! exchange itself sits behind [`HttpTransport`], injected into the
//! dispatcher, so tests can swap in a stub and hosts can bring their own
//! client. [`RequestFactory`] is the second seam: it decides how a request
//! value is assembled from method, URL, headers, body, and protocol version.

use std::fmt;
use std::str::FromStr;

use crate::error::{QueryError, TransportError};

/// The protocol version used when none is given.
pub const DEFAULT_HTTP_VERSION: &str = "1.1";

/// HTTP method for a reporting API request. Only GET and POST are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = QueryError;

    /// Accepts exactly `"GET"` or `"POST"`. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(QueryError::invalid_argument(
                "Only GET and POST requests are allowed.",
            )),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub version: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First value of the named header. Names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs one blocking HTTP exchange.
///
/// Implementations must return non-2xx responses as `Ok` data; only
/// failures to complete the exchange (connection refused, timeouts, broken
/// bodies) are `Err`.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Builds transport-ready request values.
pub trait RequestFactory: Send + Sync {
    fn create_request(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
        version: &str,
    ) -> HttpRequest;

    /// A request with no headers, no body, and protocol version 1.1.
    fn request(&self, method: HttpMethod, url: &str) -> HttpRequest {
        self.create_request(method, url, Vec::new(), None, DEFAULT_HTTP_VERSION)
    }
}

/// Assembles `HttpRequest` values field by field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create_request(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
        version: &str,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
            version: version.to_string(),
        }
    }
}
