use super::client::HuggingFaceHttpClient;
use super::types::ImageRequest;
use crate::ai::{detect_image_mime, ImageGenerationService};
use crate::config::Config;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Text-to-image client for a hosted Hugging Face model.
pub struct HuggingFaceImageClient {
    http: HuggingFaceHttpClient,
}

impl HuggingFaceImageClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, model, timeout, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: HuggingFaceHttpClient::new_with_client(api_key, model, timeout, client),
        }
    }

    pub fn from_config(config: &Config, client: reqwest::Client) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self::new_with_client(api_key, config.model.clone(), config.timeout, client)
            .with_base_url(config.api_url.clone()))
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn endpoint(&self) -> String {
        self.http.endpoint()
    }
}

#[async_trait]
impl ImageGenerationService for HuggingFaceImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let request = ImageRequest {
            inputs: prompt.to_string(),
        };

        let image_bytes = self.http.post_for_bytes(&request).await?;

        if image_bytes.is_empty() {
            return Err(Error::AiProvider(format!(
                "Empty image returned by model {}",
                self.http.model()
            )));
        }

        tracing::debug!(
            "Model {} returned {} bytes ({})",
            self.http.model(),
            image_bytes.len(),
            detect_image_mime(&image_bytes)
        );

        Ok(image_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "black-forest-labs/FLUX.1-schnell";
    const MODEL_PATH: &str = "/models/black-forest-labs/FLUX.1-schnell";

    fn make_client(server: &MockServer) -> HuggingFaceImageClient {
        HuggingFaceImageClient::new(
            "hf_test".to_string(),
            MODEL.to_string(),
            Duration::from_secs(5),
        )
        .with_base_url(format!("{}/models", server.uri()))
    }

    #[tokio::test]
    async fn test_generate_image_returns_raw_body() {
        let server = MockServer::start().await;
        let fake_image = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("Authorization", "Bearer hf_test"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({ "inputs": "a quiet harbor" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "image/png")
                    .set_body_bytes(fake_image.clone()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client.generate_image("a quiet harbor").await.unwrap();
        assert_eq!(result, fake_image);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "error": "Model black-forest-labs/FLUX.1-schnell is currently loading",
                "estimated_time": 42.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.generate_image("a dream").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));

        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("currently loading"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.generate_image("a dream").await.unwrap_err();
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_slow_response_times_out_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0x89, 0x50, 0x4E, 0x47])
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HuggingFaceImageClient::new(
            "hf_test".to_string(),
            MODEL.to_string(),
            Duration::from_secs(1),
        )
        .with_base_url(format!("{}/models", server.uri()));

        let err = client.generate_image("a dream").await.unwrap_err();
        match err {
            Error::Http(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.generate_image("a dream").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = Config::from_lookup(|_| None).unwrap();
        let result = HuggingFaceImageClient::from_config(&config, reqwest::Client::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_config_uses_model_and_url() {
        let config = Config::from_lookup(|key| match key {
            "HUGGINGFACE_API_KEY" => Some("hf_key".to_string()),
            "HUGGINGFACE_API_URL" => Some("http://localhost:1234/models".to_string()),
            _ => None,
        })
        .unwrap()
        .with_model("stabilityai/stable-diffusion-xl-base-1.0".to_string());

        let client = HuggingFaceImageClient::from_config(&config, reqwest::Client::new()).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/models/stabilityai/stable-diffusion-xl-base-1.0"
        );
    }
}
