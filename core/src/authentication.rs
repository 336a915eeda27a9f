//! Values for the `Authorization` request header.

/// A raw `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub value: String,
}

impl Authentication {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// `Authorization: Bearer <token>`.
    pub fn bearer(token: impl AsRef<str>) -> Self {
        Self::new(format!("Bearer {}", token.as_ref()))
    }
}
