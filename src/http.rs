//! HTTP Plumbing
//!
//! Request building and response decoding against the REST API. Every call
//! goes through [`send`], which attaches the bearer token from storage and
//! maps the JS boundary into [`ApiError`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::session;

/// Fallback shown on write paths when the server sent no usable message.
pub const GENERIC_SAVE_MESSAGE: &str = "Gagal menyimpan";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Failure of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The fetch itself failed (network down, CORS, no window object).
    Network(String),
    /// Non-2xx status, with the server's error body message when present.
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not decode.
    Decode(String),
}

impl ApiError {
    /// Message the server put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server-provided message, or the given fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Inline form error for save paths.
    pub fn save_message(&self) -> String {
        self.message_or(GENERIC_SAVE_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Status { status, message } => match message {
                Some(msg) => write!(f, "HTTP {status}: {msg}"),
                None => write!(f, "HTTP {status}"),
            },
            ApiError::Decode(detail) => write!(f, "decode error: {detail}"),
        }
    }
}

/// API response wrapper: `data` plus an optional `count`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> Envelope<Vec<T>> {
    /// The listed records; absent or null `data` degrades to empty.
    pub fn list(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }

    /// Statistic value: `count` when the server sends one, else list length.
    pub fn counted(&self) -> u64 {
        self.count
            .unwrap_or_else(|| self.data.as_ref().map(|d| d.len() as u64).unwrap_or(0))
    }
}

/// Pull `error` or `message` out of a JSON error body.
fn error_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    None
}

fn base_url() -> String {
    // Deployments may inject `window.API_BASE_URL` before the bundle loads.
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(w.as_ref(), &JsValue::from_str("API_BASE_URL")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(json) = &body {
        opts.set_body(&JsValue::from_str(json));
    }

    let url = format!("{}{}", base_url(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }
    if let Some(token) = session::stored_token() {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text.as_string().unwrap_or_default();

    if !resp.ok() {
        web_sys::console::warn_1(
            &format!("[HTTP] {} {} -> {}", method, path, resp.status()).into(),
        );
        return Err(ApiError::Status {
            status: resp.status(),
            message: error_body_message(&text),
        });
    }
    Ok(text)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(&send("GET", path, None).await?)
}

/// List fetch through the envelope; `data` absent means an empty list.
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    Ok(get::<Envelope<Vec<T>>>(path).await?.list())
}

/// Envelope fetch for callers that need `count` as well.
pub async fn get_envelope<T: DeserializeOwned>(path: &str) -> Result<Envelope<Vec<T>>, ApiError> {
    get(path).await
}

/// Single-record fetch through the envelope.
pub async fn get_one<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get::<Envelope<T>>(path)
        .await?
        .data
        .ok_or_else(|| ApiError::Decode("response envelope missing data".to_string()))
}

pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send("POST", path, Some(encode(body)?)).await.map(|_| ())
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(&send("POST", path, Some(encode(body)?)).await?)
}

pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    send("POST", path, None).await.map(|_| ())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send("PUT", path, Some(encode(body)?)).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send("DELETE", path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_data_and_count() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data":[1,2,3],"count":40}"#).unwrap();
        assert_eq!(env.counted(), 40);
        assert_eq!(env.list(), vec![1, 2, 3]);
    }

    #[test]
    fn envelope_missing_data_degrades_to_empty() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"count":7}"#).unwrap();
        assert_eq!(env.clone().list(), Vec::<u32>::new());
        assert_eq!(env.counted(), 7);

        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(env.clone().list(), Vec::<u32>::new());
        assert_eq!(env.counted(), 0);
    }

    #[test]
    fn envelope_malformed_data_is_a_decode_error() {
        let res: Result<Envelope<Vec<u32>>, _> = serde_json::from_str(r#"{"data":"oops"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        assert_eq!(
            error_body_message(r#"{"error":"Stok tidak cukup","message":"lain"}"#),
            Some("Stok tidak cukup".to_string())
        );
        assert_eq!(
            error_body_message(r#"{"message":"Produk tidak ditemukan"}"#),
            Some("Produk tidak ditemukan".to_string())
        );
        assert_eq!(error_body_message("not json"), None);
        assert_eq!(error_body_message(r#"{"error":""}"#), None);
    }

    #[test]
    fn save_message_falls_back_when_server_is_silent() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.save_message(), GENERIC_SAVE_MESSAGE);

        let err = ApiError::Status {
            status: 422,
            message: Some("Harga tidak valid".to_string()),
        };
        assert_eq!(err.save_message(), "Harga tidak valid");

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.message_or("Login gagal"), "Login gagal");
    }
}
