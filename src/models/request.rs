use serde::{self, Deserialize, Serialize};

use super::Role;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f64>,
}

impl ChatCompletionCreate {
    /// Single-turn request carrying one user message.
    pub fn single_turn(model: &str, prompt: &str, temperature: f64) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::user(prompt)],
            temperature: Some(temperature),
        }
    }
}
