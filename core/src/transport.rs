//! The seam between the client and whatever performs the actual I/O.

use std::sync::Arc;

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and returns the raw `HttpResponse`.
///
/// Implementations own connection handling, redirects, TLS and timeouts.
/// A non-2xx status is still a response, never an `Err`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// The request never produced a response: connection refused, DNS failure,
/// reset mid-transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    pub message: String,
    pub request: HttpRequest,
}

impl NetworkError {
    pub fn new(message: impl Into<String>, request: HttpRequest) -> Self {
        Self {
            message: message.into(),
            request,
        }
    }
}

/// Failures raised by a `Transport` itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The transport rejected the request before sending it.
    #[error("invalid request: {message}")]
    Request { message: String, request: HttpRequest },
}

impl TransportError {
    pub fn request(&self) -> &HttpRequest {
        match self {
            TransportError::Network(error) => &error.request,
            TransportError::Request { request, .. } => request,
        }
    }
}
