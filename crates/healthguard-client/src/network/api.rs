use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Result};

/// How a non-success response is turned into an error message
#[derive(Debug, Clone, Copy)]
pub(crate) enum OnFailure<'a> {
    /// Read the JSON error body and use its `message`, else the fallback
    ServerMessage { fallback: &'a str },
    /// Ignore the body and use this message
    Fixed(&'a str),
}

pub(crate) async fn get<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: Option<&str>,
    on_failure: OnFailure<'_>,
) -> Result<T> {
    let mut request = client.get(url);

    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    send(request, url, on_failure).await
}

pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
    on_failure: OnFailure<'_>,
) -> Result<T> {
    // `.json` sets `Content-Type: application/json`
    let request = client.post(url).json(body);
    send(request, url, on_failure).await
}

async fn send<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
    on_failure: OnFailure<'_>,
) -> Result<T> {
    tracing::debug!("Sending request to {}", url);

    let response = request.send().await?;

    if !response.status().is_success() {
        let error = rejection(response, on_failure).await?;
        tracing::warn!("Request to {} failed: {}", url, error);
        return Err(error);
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build the error for a non-success response.
///
/// The outer `Result` carries failures while reading the error body itself.
async fn rejection(response: Response, on_failure: OnFailure<'_>) -> Result<ApiError> {
    let status = response.status();

    let message = match on_failure {
        OnFailure::Fixed(message) => message.to_string(),
        OnFailure::ServerMessage { fallback } => {
            let bytes = response.bytes().await?;
            let body: serde_json::Value = serde_json::from_slice(&bytes)?;
            healthguard_protocol::error_message(&body)
                .unwrap_or(fallback)
                .to_string()
        }
    };

    Ok(ApiError::Rejected { status, message })
}
