//! Blocking HTTP execution for core requests.

use apod_core::{ApodError, HttpMethod, HttpRequest, HttpResponse};

/// Executes a core `HttpRequest` and hands back the raw response.
///
/// Implementations must return non-2xx responses as data; status
/// interpretation belongs to `ApodClient::parse_fetch`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApodError>;
}

/// `Transport` backed by a ureq agent with its default timeouts.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApodError> {
        let mut response = match request.method {
            HttpMethod::Get => self.agent.get(&request.url).call(),
        }
        .map_err(|e| ApodError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApodError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
