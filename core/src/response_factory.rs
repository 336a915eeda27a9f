//! Content negotiation: pick a `Response` variant by `content-type`.

use log::debug;

use crate::http::HttpResponse;
use crate::payload::JSON_CONTENT_TYPE;
use crate::response::{JsonResponse, PlainResponse, Response};

/// Wraps raw responses of the content types it claims.
pub trait ResponseHandler: Send + Sync {
    fn handles(&self, content_type: &str) -> bool;

    fn create(&self, http_response: HttpResponse) -> Response;
}

/// Exactly `application/json`, no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseHandler;

impl ResponseHandler for JsonResponseHandler {
    fn handles(&self, content_type: &str) -> bool {
        content_type == JSON_CONTENT_TYPE
    }

    fn create(&self, http_response: HttpResponse) -> Response {
        Response::Json(JsonResponse::new(http_response))
    }
}

/// Ordered handler registry. The first handler that claims the content type
/// wins; unclaimed responses become `Response::Plain`.
pub struct ResponseFactory {
    handlers: Vec<Box<dyn ResponseHandler>>,
}

impl ResponseFactory {
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: impl ResponseHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn create(&self, http_response: HttpResponse) -> Response {
        let content_type = http_response.content_type();

        match self.handlers.iter().find(|handler| handler.handles(&content_type)) {
            Some(handler) => {
                let response = handler.create(http_response);
                debug!("classified {content_type:?} response as {}", response.kind());
                response
            }
            None => Response::Plain(PlainResponse::new(http_response)),
        }
    }
}

impl Default for ResponseFactory {
    fn default() -> Self {
        Self::empty().with_handler(JsonResponseHandler)
    }
}

impl std::fmt::Debug for ResponseFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseFactory")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
