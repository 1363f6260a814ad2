//! Stub transports shared by the unit tests.

use std::io;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};

/// Answers every request with the same response and records what was sent.
pub(crate) struct RecordingTransport {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Fails every request as if the connection were refused.
pub(crate) struct FailingTransport;

impl HttpTransport for FailingTransport {
    fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
