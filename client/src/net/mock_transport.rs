//! Recording transports for native tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};
use crate::util::storage::MemoryStorage;

/// Replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no queued response".to_owned())))
    }
}

/// Answers every request with its own body, like a backend that stores and
/// returns what it was given.
#[derive(Debug, Default)]
pub struct EchoTransport;

impl Transport for EchoTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse {
            status: 201,
            body: request.body.unwrap_or(serde_json::Value::Null).to_string(),
        })
    }
}

pub const TEST_BASE_URL: &str = "http://api.test/api";

pub fn test_client(transport: MockTransport) -> ApiClient<MockTransport, MemoryStorage> {
    ApiClient::new(TEST_BASE_URL, transport, MemoryStorage::new())
}

pub fn echo_client() -> ApiClient<EchoTransport, MemoryStorage> {
    ApiClient::new(TEST_BASE_URL, EchoTransport, MemoryStorage::new())
}
