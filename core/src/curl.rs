//! Recover the cURL error code from a transport's network failure message.
//!
//! Transports backed by libcurl report failures as
//! `"cURL error <code>: <detail>"`. This is a best-effort match: anything
//! else yields `None` and the original failure is reported unchanged.

use thiserror::Error;

use crate::http::HttpRequest;
use crate::transport::NetworkError;

const CURL_CODE_PREFIX: &str = "cURL error ";
const MAX_CODE_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cURL error {code}: {message}")]
pub struct CurlError {
    pub request: HttpRequest,
    pub code: u16,
    pub message: String,
    #[source]
    pub source: NetworkError,
}

impl CurlError {
    pub fn from_network_error(error: &NetworkError) -> Option<CurlError> {
        let remainder = error.message.strip_prefix(CURL_CODE_PREFIX)?;

        let digits = remainder
            .bytes()
            .take(MAX_CODE_DIGITS)
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }

        let code = remainder[..digits].parse().ok()?;
        let message = remainder[digits..].trim_start_matches([':', ' ']);

        Some(CurlError {
            request: error.request.clone(),
            code,
            message: message.to_string(),
            source: error.clone(),
        })
    }
}
