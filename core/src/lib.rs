//! Synchronous service client over an injected HTTP transport.
//!
//! # Overview
//! Builds outgoing requests (method, URL, optional authentication, optional
//! payload), hands them to a `Transport`, and classifies what comes back:
//! `application/json` responses become `JsonResponse` with lazily decoded,
//! leniently typed field access; everything else stays a `PlainResponse`.
//!
//! # Design
//! - The transport does all I/O. The crate only builds and classifies plain
//!   data, so it is deterministic and easy to test.
//! - Failures form one closed `ClientError` enum. Network failures with a
//!   `"cURL error N: ..."` message are decoded into `CurlError`.
//! - Status codes are reported, not raised: `Response::is_successful()`,
//!   or `Response::error_for_status()` to opt in to errors.

pub mod accessor;
pub mod authentication;
pub mod client;
pub mod curl;
pub mod decoder;
pub mod error;
pub mod http;
pub mod payload;
pub mod request;
pub mod request_factory;
pub mod response;
pub mod response_factory;
pub mod transport;

pub use authentication::Authentication;
pub use client::Client;
pub use curl::CurlError;
pub use error::ClientError;
pub use http::{HttpRequest, HttpResponse};
pub use payload::Payload;
pub use request::Request;
pub use request_factory::{BearerTokenExtractor, RequestFactory, RequestMiddleware, TokenExtractor};
pub use response::{JsonResponse, PlainResponse, Response};
pub use response_factory::{JsonResponseHandler, ResponseFactory, ResponseHandler};
pub use transport::{NetworkError, Transport, TransportError};
