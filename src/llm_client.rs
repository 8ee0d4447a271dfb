use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::errors::AppError;
use crate::models::request;
use crate::models::response::ChatCompletion;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user message and returns the first choice's text.
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, AppError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }

    async fn request_chat_completion(
        &self,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, AppError> {
        let response = self
            .client
            .post(format!("{}{}", self.config.api_base, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AppError::LlmError(format!(
                "error: status {status}, text {text}"
            )));
        }

        response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| AppError::LlmError(format!("malformed response: {e}")))
    }
}

#[async_trait]
impl CompletionClient for LLMClient {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, AppError> {
        let request =
            request::ChatCompletionCreate::single_turn(&self.config.model, prompt, temperature);

        log::debug!(
            "chat completion: model {}, temperature {}, prompt {} chars",
            request.model,
            temperature,
            prompt.chars().count()
        );

        let completion = self.request_chat_completion(&request).await?;

        completion
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| AppError::LlmError("response has no message content".to_string()))
    }
}
