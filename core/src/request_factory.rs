//! Request construction with an ordered chain of request transforms.
//!
//! # Design
//! Middleware are pure `Request -> Request` functions stored under a key.
//! `create` runs them left to right in insertion order. Re-registering a key
//! replaces that middleware in place, keeping its position.

use std::fmt;
use std::sync::Arc;

use crate::authentication::Authentication;
use crate::http::HttpRequest;
use crate::request::Request;

/// A pure transform applied to every request built by a `RequestFactory`.
pub trait RequestMiddleware: Send + Sync {
    fn process(&self, request: Request) -> Request;
}

impl<F> RequestMiddleware for F
where
    F: Fn(Request) -> Request + Send + Sync,
{
    fn process(&self, request: Request) -> Request {
        self(request)
    }
}

/// Middleware attaching `authentication` to every request.
pub fn authentication(authentication: Authentication) -> impl RequestMiddleware {
    move |request: Request| request.with_authentication(authentication.clone())
}

/// Pulls a bearer token out of an inbound request.
pub trait TokenExtractor {
    fn extract(&self, request: &HttpRequest) -> Option<String>;
}

/// Reads the token from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerTokenExtractor;

impl TokenExtractor for BearerTokenExtractor {
    fn extract(&self, request: &HttpRequest) -> Option<String> {
        let header = request.header_line("Authorization");
        let token = header.strip_prefix("Bearer ")?.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

#[derive(Clone, Default)]
pub struct RequestFactory {
    middleware: Vec<(String, Arc<dyn RequestMiddleware>)>,
}

impl RequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_middleware(mut self, key: impl Into<String>, middleware: impl RequestMiddleware + 'static) -> Self {
        let key = key.into();
        let middleware: Arc<dyn RequestMiddleware> = Arc::new(middleware);

        match self.middleware.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = middleware,
            None => self.middleware.push((key, middleware)),
        }
        self
    }

    pub fn create(&self, method: impl Into<String>, url: impl Into<String>) -> Request {
        self.middleware
            .iter()
            .fold(Request::new(method, url), |request, (_, middleware)| {
                middleware.process(request)
            })
    }

    /// Like `create`, then forwards the bearer token found on `inbound`,
    /// if any.
    pub fn create_with_authentication_from(
        &self,
        method: impl Into<String>,
        url: impl Into<String>,
        inbound: &HttpRequest,
        extractor: &impl TokenExtractor,
    ) -> Request {
        let request = self.create(method, url);
        match extractor.extract(inbound) {
            Some(token) => request.with_authentication(Authentication::bearer(token)),
            None => request,
        }
    }
}

impl fmt::Debug for RequestFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.middleware.iter().map(|(key, _)| key.as_str()).collect();
        f.debug_struct("RequestFactory").field("middleware", &keys).finish()
    }
}
