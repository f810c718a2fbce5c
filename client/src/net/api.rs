//! REST client for the gym-tracking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport answers `ApiError::Unavailable` since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx answer is logged and surfaced as `ApiError::Status` with the
//! server's `message` when it sent one. A 401 also drops the stored token;
//! redirecting is left to the UI.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, Storage};

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Session token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw response: status code plus undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Message the backend attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Text shown to the user: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Sends a resolved request and returns the raw response.
///
/// Futures are not `Send`; everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .header("Content-Type", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }

            let sent = match &request.body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Backend client bound to a base URL, a transport, and the session store
/// that supplies the bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    session: SessionStore<S>,
}

/// The client used by pages in the browser.
pub type BrowserApi = ApiClient<HttpTransport, BrowserStorage>;

/// Build the browser client against the configured base URL.
pub fn browser_api() -> BrowserApi {
    ApiClient::new(crate::config::api_base_url(), HttpTransport, BrowserStorage)
}

impl<T: Transport, S: Storage> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, storage: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session: SessionStore::new(storage),
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: self.session.token(),
            body,
        };
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("request error: {} {path}: {e}", method.as_str());
                return Err(e);
            }
        };
        if response.is_success() {
            return Ok(response);
        }

        log::error!("response error: {} {path} -> {} {}", method.as_str(), response.status, response.body);
        if response.status == 401 {
            self.session.clear_token();
        }
        Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body),
        })
    }

    /// `GET path`, decoding the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that does not decode as `R`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(Method::Get, path, None).await?;
        decode(&response.body)
    }

    /// `POST path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let response = self.execute(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response.body)
    }

    /// `PUT path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let response = self.execute(Method::Put, path, Some(encode(body)?)).await?;
        decode(&response.body)
    }

    /// `PUT path` where only success matters and the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    pub async fn put_discarding<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(Method::Put, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await?;
        Ok(())
    }
}
