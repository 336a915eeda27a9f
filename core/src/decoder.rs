//! Content-type gate and JSON body decoding.

use serde_json::Value;

use crate::error::ClientError;
use crate::http::HttpResponse;
use crate::payload::JSON_CONTENT_TYPE;

#[cfg(test)]
thread_local! {
    pub(crate) static DECODE_COUNT: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Decode the body of a JSON response into an object or array.
///
/// The `content-type` header must be exactly `application/json`; parameters
/// such as `; charset=utf-8` are rejected. A body that fails to parse is
/// reported as a `"NULL"` data type.
pub fn decode_json_response(response: &HttpResponse) -> Result<Value, ClientError> {
    let actual_content_type = response.content_type();
    if actual_content_type != JSON_CONTENT_TYPE {
        return Err(ClientError::InvalidResponseContent {
            expected: JSON_CONTENT_TYPE.to_string(),
            actual: actual_content_type,
            response: Box::new(response.clone()),
        });
    }

    #[cfg(test)]
    DECODE_COUNT.with(|count| count.set(count.get() + 1));

    let data = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    match data {
        Value::Object(_) | Value::Array(_) => Ok(data),
        other => Err(ClientError::InvalidResponseData {
            expected: "array".to_string(),
            actual: data_type(&other).to_string(),
            response: Box::new(response.clone()),
        }),
    }
}

/// Name of a decoded value's kind as reported in `InvalidResponseData`.
pub fn data_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "array",
    }
}
