//! Error types for the service client.
//!
//! # Design
//! One closed enum covers every failure the client reports. Callers branch
//! on the variant, never on the message text. Variants that concern a
//! received response carry that response so the status, headers and body
//! stay available for logging.

use thiserror::Error;

use crate::curl::CurlError;
use crate::http::HttpResponse;
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A transport failure that was not recognised as a cURL error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A network failure decoded into its cURL code and detail text.
    #[error(transparent)]
    Curl(#[from] CurlError),

    /// The server answered 401.
    #[error("401: {}", .response.reason_phrase())]
    Unauthorized { response: Box<HttpResponse> },

    /// The server answered with a status of 300 or above.
    #[error("{}: {}", .response.status, .response.reason_phrase())]
    NonSuccessResponse { response: Box<HttpResponse> },

    #[error("Expected content-type header of \"{expected}\", got \"{actual}\"")]
    InvalidResponseContent {
        expected: String,
        actual: String,
        response: Box<HttpResponse>,
    },

    #[error("Expected payload data type of \"{expected}\", got \"{actual}\"")]
    InvalidResponseData {
        expected: String,
        actual: String,
        response: Box<HttpResponse>,
    },

    /// JSON decoding was requested from a response that was not classified
    /// as JSON.
    #[error("Expected response type of \"{expected}\", got \"{actual}\"")]
    InvalidResponseType {
        expected: String,
        actual: String,
        response: Box<HttpResponse>,
    },

    #[error("Data in response invalid for creating an instance of \"{model}\"")]
    InvalidModelData {
        model: String,
        payload: serde_json::Value,
        response: Box<HttpResponse>,
    },

    #[error("failed to encode JSON payload: {0}")]
    PayloadEncoding(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status for response errors, cURL code for decoded network
    /// failures.
    pub fn code(&self) -> Option<u16> {
        match self {
            ClientError::Curl(error) => Some(error.code),
            _ => self.response().map(|response| response.status),
        }
    }

    /// The response that caused the error, if one was received.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ClientError::Unauthorized { response }
            | ClientError::NonSuccessResponse { response }
            | ClientError::InvalidResponseContent { response, .. }
            | ClientError::InvalidResponseData { response, .. }
            | ClientError::InvalidResponseType { response, .. }
            | ClientError::InvalidModelData { response, .. } => Some(&**response),
            ClientError::Transport(_) | ClientError::Curl(_) | ClientError::PayloadEncoding(_) => None,
        }
    }
}
