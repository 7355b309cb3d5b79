use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::models::{ApiResponse, CampingPost};

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:5000",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

/// Текст для баннера ошибки: любой неуспешный HTTP-статус сворачивается
/// в фиксированное сообщение, остальное показывается своим текстом.
pub(crate) fn view_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => "Failed to fetch camping post".to_string(),
        other => other.to_string(),
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let message = if text.trim().is_empty() {
        format!("http status {status}")
    } else {
        text
    };

    ApiError::Http { status, message }
}

pub(crate) async fn get_camp(slug: &str) -> Result<Option<CampingPost>, ApiError> {
    let response = Request::get(&endpoint(&format!("/api/camps/{slug}")))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let envelope: ApiResponse = parse_json(response).await?;
    Ok(envelope.data)
}
