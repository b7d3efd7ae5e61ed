//! HTTP Transport
//!
//! Thin reqwest wrapper for the `/api/v1` backend. Every successful body is
//! wrapped as `{ "data": ... }`; error bodies may carry a `message`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// REST client for boards, tasks and users
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and unwrap the `data` envelope
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ApiResult<T> {
        let response = self.send(self.client.get(self.url(path)), Method::GET, path, fallback).await?;
        decode(response, fallback).await
    }

    /// Send a JSON body and unwrap the `data` envelope of the reply
    pub(crate) async fn send_data<B, T>(&self, method: Method, path: &str, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.client.request(method.clone(), self.url(path)).json(body);
        let response = self.send(builder, method, path, fallback).await?;
        decode(response, fallback).await
    }

    /// Send a JSON body, ignoring whatever the server replies on success
    pub(crate) async fn send_unit<B>(&self, method: Method, path: &str, body: &B, fallback: &str) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.client.request(method.clone(), self.url(path)).json(body);
        self.send(builder, method, path, fallback).await?;
        Ok(())
    }

    async fn send(&self, builder: RequestBuilder, method: Method, path: &str, fallback: &str) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            log::error!("[API] {} {} failed: {}", method, path, e);
            with_fallback(e.to_string(), fallback)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("[API] {} {} -> {} {}", method, path, status, body);
        Err(error_from_body(&body, fallback))
    }
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let envelope: Envelope<T> = response.json().await.map_err(|e| {
        log::error!("[API] undecodable response: {}", e);
        with_fallback(e.to_string(), fallback)
    })?;
    Ok(envelope.data)
}

/// Server `message` if present, otherwise the endpoint's fallback text
pub(crate) fn error_from_body(body: &str, fallback: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.message {
        Some(message) if !message.trim().is_empty() => ApiError::Failed(message),
        _ => ApiError::failed(fallback),
    }
}

fn with_fallback(message: String, fallback: &str) -> ApiError {
    if message.trim().is_empty() {
        ApiError::failed(fallback)
    } else {
        ApiError::Failed(message)
    }
}
