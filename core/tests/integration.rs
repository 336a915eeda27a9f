//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client through
//! a ureq-backed `Transport`. Validates header/body construction, content
//! negotiation and error classification over real HTTP.

use std::net::SocketAddr;

use serde_json::json;
use service_client::{
    Authentication, Client, ClientError, HttpRequest, HttpResponse, NetworkError, Payload, Request,
    Response, Transport, TransportError,
};

/// Executes requests with ureq.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses are
/// returned as data, letting the client decide what a status means.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = match &request.body {
            Some(body) => self.agent.run(builder.body(body.as_slice()).expect("valid request"))?,
            None => self.agent.run(builder.body(()).expect("valid request"))?,
        };

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        Ok(HttpResponse {
            status: response.status().as_u16(),
            headers,
            body: response.body_mut().read_to_vec()?,
        })
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.execute(&request)
            .map_err(|e| NetworkError::new(e.to_string(), request).into())
    }
}

/// Reports failures the way libcurl-based transports do, as
/// CURLE_COULDNT_CONNECT (7).
struct CurlStyleTransport(UreqTransport);

impl Transport for CurlStyleTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.0
            .execute(&request)
            .map_err(|e| NetworkError::new(format!("cURL error 7: {e}"), request).into())
    }
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// An address nothing is listening on.
fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

#[test]
fn json_document_end_to_end() {
    let addr = start_server();
    let client = Client::new(UreqTransport::new());
    let request = Request::new("GET", format!("http://{addr}/json"));

    let response = client.send_request_for_json(&request).unwrap();
    assert_eq!(response.http_response().status, 200);
    assert_eq!(response.data().unwrap()["name"], "x");
    assert_eq!(response.get_positive_integer("id").unwrap(), Some(42));
    assert_eq!(
        response.get_non_empty_string_collection("tags").unwrap(),
        vec!["one", "two", "three with trailing whitespace"]
    );
}

#[test]
fn content_negotiation_over_http() {
    let addr = start_server();
    let client = Client::new(UreqTransport::new());

    let text = client
        .send_request(&Request::new("GET", format!("http://{addr}/text")))
        .unwrap();
    assert!(matches!(text, Response::Plain(_)));
    assert_eq!(text.http_response().body, b"text plain content");

    let charset = client
        .send_request(&Request::new("GET", format!("http://{addr}/json-charset")))
        .unwrap();
    assert!(matches!(charset, Response::Plain(_)));

    let err = client
        .send_request_for_json(&Request::new("GET", format!("http://{addr}/text")))
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponseType { .. }));
}

#[test]
fn malformed_json_is_invalid_data() {
    let addr = start_server();
    let client = Client::new(UreqTransport::new());

    let err = client
        .send_request_for_json_encoded_data(&Request::new("GET", format!("http://{addr}/malformed")))
        .unwrap_err();
    match err {
        ClientError::InvalidResponseData { expected, actual, .. } => {
            assert_eq!(expected, "array");
            assert_eq!(actual, "NULL");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn authentication_and_payload_reach_the_server() {
    let addr = start_server();
    let client = Client::new(UreqTransport::new());
    let request = Request::new("POST", format!("http://{addr}/echo"))
        .with_authentication(Authentication::bearer("authentication value"))
        .with_payload(Payload::json(&json!({"key1": "value1", "key2": "value2"})).unwrap());

    let echo = client.send_request_for_json_encoded_data(&request).unwrap();

    assert_eq!(
        echo,
        json!({
            "method": "POST",
            "authorization": "Bearer authentication value",
            "content_type": "application/json",
            "body": r#"{"key1":"value1","key2":"value2"}"#,
        })
    );
}

#[test]
fn status_is_reported_then_raised_on_request() {
    let addr = start_server();
    let client = Client::new(UreqTransport::new());

    let response = client
        .send_request(&Request::new("GET", format!("http://{addr}/status/404")))
        .unwrap();
    assert!(!response.is_successful());
    let err = response.error_for_status().unwrap_err();
    assert!(matches!(err, ClientError::NonSuccessResponse { .. }));
    assert_eq!(err.code(), Some(404));

    let response = client
        .send_request(&Request::new("GET", format!("http://{addr}/status/401")))
        .unwrap();
    assert!(matches!(
        response.error_for_status(),
        Err(ClientError::Unauthorized { .. })
    ));

    let response = client
        .send_request(&Request::new("GET", format!("http://{addr}/status/204")))
        .unwrap();
    assert!(response.error_for_status().unwrap().is_successful());
}

#[test]
fn connection_refused_passes_through() {
    let client = Client::new(UreqTransport::new());
    let url = format!("http://{}/json", closed_addr());

    match client.send_request(&Request::new("GET", url.as_str())).unwrap_err() {
        ClientError::Transport(TransportError::Network(err)) => {
            assert_eq!(err.request.url, url);
            assert!(!err.message.starts_with("cURL error "));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn curl_style_connection_failure_is_translated() {
    let client = Client::new(CurlStyleTransport(UreqTransport::new()));
    let url = format!("http://{}/json", closed_addr());

    match client.send_request(&Request::new("GET", url.as_str())).unwrap_err() {
        ClientError::Curl(err) => {
            assert_eq!(err.code, 7);
            assert_eq!(err.request.url, url);
            assert!(err.source.message.starts_with("cURL error 7: "));
            assert!(!err.message.starts_with("cURL error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
