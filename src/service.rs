use std::sync::Arc;

use crate::consts;
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::prompts;
use crate::text_window;

/// Windows the input text, builds the task prompt and forwards it to the model.
///
/// The model's reply is returned verbatim; it is expected to be JSON but is not
/// parsed or validated here.
pub struct AnalysisService {
    llm: Arc<dyn CompletionClient>,
}

impl AnalysisService {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }

    pub async fn analyze_characters(&self, text: &str) -> Result<String, AppError> {
        let excerpt = text_window::select_window(text, consts::WINDOW_LENGTH);
        let prompt = prompts::build_character_prompt(excerpt);
        self.llm
            .complete(&prompt, consts::CHARACTER_TEMPERATURE)
            .await
    }

    pub async fn extract_quotes(&self, text: &str) -> Result<String, AppError> {
        let excerpt = text_window::select_window(text, consts::WINDOW_LENGTH);
        let prompt = prompts::build_quote_prompt(excerpt);
        self.llm.complete(&prompt, consts::QUOTE_TEMPERATURE).await
    }
}
