//! Dispatcher from `Request` values to classified `Response` values.
//!
//! # Design
//! `Client` holds the injected transport and a response factory and carries
//! no mutable state between calls. Status codes are never turned into errors
//! here: callers inspect `Response::is_successful()` or opt in with
//! `Response::error_for_status()`.

use log::debug;
use serde_json::Value;

use crate::curl::CurlError;
use crate::error::ClientError;
use crate::request::Request;
use crate::response::{JsonResponse, Response};
use crate::response_factory::ResponseFactory;
use crate::transport::{Transport, TransportError};

#[derive(Debug)]
pub struct Client<T> {
    transport: T,
    response_factory: ResponseFactory,
}

impl<T: Transport> Client<T> {
    /// A client classifying `application/json` responses as JSON.
    pub fn new(transport: T) -> Self {
        Self::with_response_factory(transport, ResponseFactory::default())
    }

    pub fn with_response_factory(transport: T, response_factory: ResponseFactory) -> Self {
        Self {
            transport,
            response_factory,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and classify the response.
    ///
    /// Network failures whose message has the cURL shape become
    /// `ClientError::Curl`; any other transport failure is returned
    /// unchanged as `ClientError::Transport`.
    pub fn send_request(&self, request: &Request) -> Result<Response, ClientError> {
        debug!("{} {}", request.method, request.url);

        match self.transport.send(request.to_http_request()) {
            Ok(http_response) => {
                debug!("{} {} -> {}", request.method, request.url, http_response.status);
                Ok(self.response_factory.create(http_response))
            }
            Err(TransportError::Network(network_error)) => {
                match CurlError::from_network_error(&network_error) {
                    Some(curl_error) => {
                        debug!("{} {} failed with cURL code {}", request.method, request.url, curl_error.code);
                        Err(curl_error.into())
                    }
                    None => Err(TransportError::Network(network_error).into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Send `request`, requiring a JSON response.
    pub fn send_request_for_json(&self, request: &Request) -> Result<JsonResponse, ClientError> {
        self.send_request(request)?.into_json()
    }

    /// Send `request` and return its decoded JSON body.
    pub fn send_request_for_json_encoded_data(&self, request: &Request) -> Result<Value, ClientError> {
        let response = self.send_request_for_json(request)?;
        response.data().cloned()
    }
}
