use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::error;

/// Opaque generative-model boundary: prompt string in, reply text out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: Value = response.json().await?;
        let text = reply["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                error!("gemini reply missing candidate text");
                anyhow::anyhow!("model reply has no text candidate")
            })?;
        Ok(text.to_string())
    }
}

/// Stand-in used when no API key is configured.
pub struct ModelDisabled;

#[async_trait]
impl GenerativeModel for ModelDisabled {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("GEMINI_API_KEY is not set")
    }
}
