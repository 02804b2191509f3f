use std::error::Error;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Transport-level outcome of a provider call, mapped into each port's error type.
#[derive(Debug)]
pub(crate) enum HttpFailure {
    Unreachable(String),
    RateLimited,
    Request(String),
    Status(StatusCode, String),
    Decode(String),
}

impl HttpFailure {
    pub(crate) fn message(&self) -> String {
        match self {
            HttpFailure::Unreachable(m) | HttpFailure::Request(m) | HttpFailure::Decode(m) => {
                m.clone()
            }
            HttpFailure::RateLimited => "rate limited".to_string(),
            HttpFailure::Status(status, body) => format!("status {}: {}", status, body),
        }
    }
}

/// True when `error`, or anything in its source chain, is a failure to connect.
pub(crate) fn is_connect_failure(error: &(dyn Error + 'static)) -> bool {
    let mut current: Option<&(dyn Error + 'static)> = Some(error);
    while let Some(e) = current {
        if let Some(req) = e.downcast_ref::<reqwest::Error>() {
            if req.is_connect() {
                return true;
            }
        }
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::NotConnected
            ) {
                return true;
            }
        }
        current = e.source();
    }
    false
}

fn classify(error: reqwest::Error) -> HttpFailure {
    if is_connect_failure(&error) {
        HttpFailure::Unreachable(error.to_string())
    } else {
        HttpFailure::Request(error.to_string())
    }
}

pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
    body: &B,
) -> Result<Response, HttpFailure> {
    let mut request = client.post(url).json(body);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }
    let response = request.send().await.map_err(classify)?;
    check_status(response).await
}

pub(crate) async fn get(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<Response, HttpFailure> {
    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }
    let response = request.send().await.map_err(classify)?;
    check_status(response).await
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpFailure> {
    response
        .json()
        .await
        .map_err(|e| HttpFailure::Decode(format!("parse response: {}", e)))
}

async fn check_status(response: Response) -> Result<Response, HttpFailure> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(HttpFailure::RateLimited);
    }
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(HttpFailure::Status(status, body));
    }
    Ok(response)
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
