//! Classified responses.
//!
//! # Design
//! `Response` is a closed enum over the body formats the client knows how to
//! decode. Each variant owns the raw `HttpResponse` it was built from.
//! `JsonResponse` decodes its body at most once: the first successful
//! `data()` call fills a `OnceLock`, later calls reuse it. Decode errors are
//! not cached, so a failing response fails the same way every time.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::accessor;
use crate::decoder::decode_json_response;
use crate::error::ClientError;
use crate::http::HttpResponse;

/// A response whose body is left opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainResponse {
    http_response: HttpResponse,
}

impl PlainResponse {
    pub fn new(http_response: HttpResponse) -> Self {
        Self { http_response }
    }

    pub fn http_response(&self) -> &HttpResponse {
        &self.http_response
    }
}

/// A response declared as `application/json`, with lazily decoded data.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    http_response: HttpResponse,
    data: OnceLock<Value>,
}

impl JsonResponse {
    pub fn new(http_response: HttpResponse) -> Self {
        Self {
            http_response,
            data: OnceLock::new(),
        }
    }

    pub fn http_response(&self) -> &HttpResponse {
        &self.http_response
    }

    /// The decoded body: a JSON object or array.
    pub fn data(&self) -> Result<&Value, ClientError> {
        if let Some(data) = self.data.get() {
            return Ok(data);
        }
        let data = decode_json_response(&self.http_response)?;
        Ok(self.data.get_or_init(|| data))
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(accessor::get_string(self.data()?, key).map(str::to_string))
    }

    pub fn get_integer(&self, key: &str) -> Result<Option<i64>, ClientError> {
        Ok(accessor::get_integer(self.data()?, key))
    }

    pub fn get_non_empty_string(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(accessor::get_non_empty_string(self.data()?, key))
    }

    pub fn get_non_empty_string_collection(&self, key: &str) -> Result<Vec<String>, ClientError> {
        Ok(accessor::get_non_empty_string_collection(self.data()?, key))
    }

    pub fn get_positive_integer(&self, key: &str) -> Result<Option<i64>, ClientError> {
        Ok(accessor::get_positive_integer(self.data()?, key))
    }

    /// Deserialize the decoded data into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let data = self.data()?;
        T::deserialize(data).map_err(|_| self.invalid_model_data::<T>())
    }

    /// The error for data that does not describe a valid `T`.
    ///
    /// Yields the decode error instead if the body is not valid JSON data.
    pub fn invalid_model_data<T>(&self) -> ClientError {
        match self.data() {
            Ok(payload) => ClientError::InvalidModelData {
                model: std::any::type_name::<T>().to_string(),
                payload: payload.clone(),
                response: Box::new(self.http_response.clone()),
            },
            Err(err) => err,
        }
    }
}

impl PartialEq for JsonResponse {
    fn eq(&self, other: &Self) -> bool {
        self.http_response == other.http_response
    }
}

/// A raw response classified by its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Plain(PlainResponse),
    Json(JsonResponse),
}

impl Response {
    pub fn http_response(&self) -> &HttpResponse {
        match self {
            Response::Plain(response) => response.http_response(),
            Response::Json(response) => response.http_response(),
        }
    }

    pub fn into_http_response(self) -> HttpResponse {
        match self {
            Response::Plain(response) => response.http_response,
            Response::Json(response) => response.http_response,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.http_response().status < 300
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Response::Plain(_) => "plain",
            Response::Json(_) => "json",
        }
    }

    pub fn into_json(self) -> Result<JsonResponse, ClientError> {
        match self {
            Response::Json(response) => Ok(response),
            other => Err(ClientError::InvalidResponseType {
                expected: "json".to_string(),
                actual: other.kind().to_string(),
                response: Box::new(other.into_http_response()),
            }),
        }
    }

    /// Turn a 401 into `Unauthorized` and any other status of 300 or above
    /// into `NonSuccessResponse`.
    pub fn error_for_status(self) -> Result<Response, ClientError> {
        let status = self.http_response().status;
        match status {
            401 => Err(ClientError::Unauthorized {
                response: Box::new(self.into_http_response()),
            }),
            300.. => Err(ClientError::NonSuccessResponse {
                response: Box::new(self.into_http_response()),
            }),
            _ => Ok(self),
        }
    }
}
