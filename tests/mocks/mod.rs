#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use book_analyzer::book_fetcher::BookSource;
use book_analyzer::errors::AppError;
use book_analyzer::llm_client::CompletionClient;
use book_analyzer::models::api::Book;

#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub prompt: String,
    pub temperature: f64,
}

/// Records every call and answers with a fixed reply.
pub struct RecordingCompletionClient {
    reply: String,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl RecordingCompletionClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for RecordingCompletionClient {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(CompletionCall {
            prompt: prompt.to_string(),
            temperature,
        });
        Ok(self.reply.clone())
    }
}

pub struct FailingCompletionClient {
    message: String,
}

impl FailingCompletionClient {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(&self, _prompt: &str, _temperature: f64) -> Result<String, AppError> {
        Err(AppError::LlmError(self.message.clone()))
    }
}

/// Book source that never touches the network.
pub struct StaticBookSource {
    content: Option<String>,
}

impl StaticBookSource {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

#[async_trait]
impl BookSource for StaticBookSource {
    async fn fetch_book(&self, id: u64) -> Result<Book, AppError> {
        match &self.content {
            Some(content) => Ok(Book {
                book_id: id,
                content: content.clone(),
            }),
            None => Err(AppError::NotFound(format!("book {id}"))),
        }
    }
}
