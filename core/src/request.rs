//! Immutable description of an outbound call.

use crate::authentication::Authentication;
use crate::http::HttpRequest;
use crate::payload::Payload;

/// Method, URL and the optional decorations applied at dispatch time.
///
/// `with_*` methods return a modified copy; the receiver is left untouched.
/// `method` must be non-empty; this is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub url: String,
    authentication: Option<Authentication>,
    payload: Option<Payload>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            authentication: None,
            payload: None,
        }
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    pub fn with_authentication(&self, authentication: Authentication) -> Request {
        Request {
            authentication: Some(authentication),
            ..self.clone()
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn with_payload(&self, payload: Payload) -> Request {
        Request {
            payload: Some(payload),
            ..self.clone()
        }
    }

    /// Transport-level request: `Authorization` first, then `Content-Type`
    /// and body.
    pub fn to_http_request(&self) -> HttpRequest {
        let mut http_request = HttpRequest::new(self.method.as_str(), self.url.as_str());

        if let Some(authentication) = &self.authentication {
            http_request = http_request.with_header("Authorization", authentication.value.as_str());
        }

        if let Some(payload) = &self.payload {
            http_request = http_request
                .with_header("Content-Type", payload.content_type.as_str())
                .with_body(payload.data.clone());
        }

        http_request
    }
}
