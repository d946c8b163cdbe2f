use super::types::ApiErrorBody;
use crate::config::DEFAULT_API_URL;
use crate::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Minimal REST client for one Hugging Face model endpoint.
pub struct HuggingFaceHttpClient {
    pub(crate) client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl HuggingFaceHttpClient {
    /// Construct a client for `model`, a repository ID such as
    /// `black-forest-labs/FLUX.1-schnell`.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, model, timeout, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        client: Client,
    ) -> Self {
        let model = model.trim_matches('/').to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_API_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    /// POST a JSON body to the model endpoint and return the raw response body.
    pub async fn post_for_bytes<Req: Serialize>(&self, request: &Req) -> Result<Vec<u8>> {
        let url = self.endpoint();
        tracing::debug!("Sending inference request to {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Hugging Face: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Hugging Face API error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "received non-OK response (status {}): {}",
                status,
                describe_error_body(&error_text)
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error,
            estimated_time: Some(secs),
        }) => format!("{} (model loading, estimated {:.0}s)", error, secs),
        Ok(ApiErrorBody { error, .. }) => error,
        Err(_) => body.to_string(),
    }
}
