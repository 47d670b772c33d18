use crate::error::GenAiError;
use crate::types::*;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

static CLIENT: OnceLock<GenAiClient> = OnceLock::new();

pub struct GenAiClient {
    client: Client,
    config: GenAiConfig,
    model: ModelRef,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let model: ModelRef = config.default_model.parse()?;
        if model.provider != config.plugin.name() {
            return Err(GenAiError::InvalidModel(format!(
                "{} is not served by plugin {}",
                model,
                config.plugin.name()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(
            "AI client ready (plugin: {}, model: {})",
            config.plugin.name(),
            model
        );
        Ok(Self {
            client,
            config,
            model,
        })
    }

    /// Send one prompt to the default model and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.generate_with(&self.model, prompt).await
    }

    /// Send one prompt to an explicit model of the bound plugin.
    pub async fn generate_with(&self, model: &ModelRef, prompt: &str) -> Result<String, GenAiError> {
        if model.provider != self.config.plugin.name() {
            return Err(GenAiError::InvalidModel(model.to_string()));
        }

        tracing::debug!("generateContent -> {} ({} chars)", model, prompt.len());
        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.config.plugin.base_url(),
                model.name
            ))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest::user_prompt(prompt))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!("generateContent failed with {}", status);
            return Err(GenAiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = resp.json().await?;
        body.first_text().ok_or(GenAiError::EmptyResponse)
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    pub fn model(&self) -> &ModelRef {
        &self.model
    }
}

/// Validate the environment and create the shared client.
///
/// Repeated calls return the handle created by the first successful call.
pub fn init() -> Result<&'static GenAiClient, GenAiError> {
    init_with(|var| std::env::var(var).ok())
}

/// Like [`init`], reading settings through `lookup` instead of the process
/// environment. Nothing is stored when validation or construction fails.
pub fn init_with<F>(lookup: F) -> Result<&'static GenAiClient, GenAiError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(existing) = CLIENT.get() {
        return Ok(existing);
    }
    let config = GenAiConfig::from_lookup(lookup)?;
    let client = GenAiClient::new(config)?;
    // A concurrent init may have won; keep whichever landed first.
    Ok(CLIENT.get_or_init(|| client))
}

/// Shared client, if [`init`] has succeeded.
pub fn client() -> Option<&'static GenAiClient> {
    CLIENT.get()
}
