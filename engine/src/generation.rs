use std::time::Duration;

use color_eyre::{Result, eyre::WrapErr};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

mod error;
pub use error::GenerationApiError;

pub const MAX_TOKENS: usize = 1200;
pub const TEMPERATURE: f64 = 0.8;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60 * 3);

#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct RequestBody {
    pub model: String,
    pub prompt: String,
    pub max_tokens: usize,
    pub temperature: f64,
}

impl GenerationClient {
    pub fn new(api_key: String, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Sends one generation request and returns the response body as an
    /// untyped JSON tree. The caller decides what shape to accept.
    pub async fn generate(&self, prompt: &str) -> Result<Value> {
        let body = RequestBody {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!("Json-data: {}", serde_json::to_string(&body)?);
        let res = self
            .client
            .post(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .wrap_err("sending generation request")?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(GenerationApiError::from_status(status.as_u16(), error_message(&text)).into());
        }

        debug!("Response body: {text}");
        serde_json::from_str(&text).wrap_err("generation response was not JSON")
    }
}

/// Pulls `error.message` out of an error body when the provider sends one,
/// otherwise keeps the whole body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
