//! Content-typed request bodies.

use serde::Serialize;

use crate::error::ClientError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A content-typed request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Payload {
    pub fn new(content_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Serialize `value` to JSON with content type `application/json`.
    ///
    /// Accepts maps as well as any type with a `Serialize` impl. A value that
    /// cannot be represented as JSON (e.g. a map with non-string keys) is an
    /// error rather than an empty body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        let data = serde_json::to_vec(value).map_err(ClientError::PayloadEncoding)?;
        Ok(Self::new(JSON_CONTENT_TYPE, data))
    }
}
