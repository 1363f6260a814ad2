//! Blocking `HttpTransport` backed by `ureq`.

use std::fmt;

use tracing::trace;
use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Sends requests with a shared `ureq::Agent`.
///
/// The agent is configured to hand back 4xx/5xx responses as data, since
/// deciding what a status means belongs to `QueryResult`. The request's
/// protocol version is not forwarded; `ureq` speaks HTTP/1.1.
///
/// Response bodies are read in full by default. Bulk reports (for example
/// `Live.getLastVisitsDetails` with `filter_limit=-1`) routinely exceed
/// ureq's own 10 MB read limit, so that limit is lifted unless a cap is set
/// with [`UreqTransport::with_body_limit`].
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::with_agent(agent)
    }

    /// Use a caller-configured agent (timeouts, proxies, TLS).
    pub fn with_agent(agent: Agent) -> Self {
        Self {
            agent,
            body_limit: u64::MAX,
        }
    }

    /// Fail with a transport error when a response body exceeds `limit`
    /// bytes.
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn body_limit(&self) -> u64 {
        self.body_limit
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        trace!(method = %request.method, url = %request.url, "sending with ureq");

        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                let body = request.body.unwrap_or_default();
                builder.send(body.as_bytes())?
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
