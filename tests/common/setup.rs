use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use book_analyzer::book_fetcher::{BookFetcher, BookSource};
use book_analyzer::config::{BookSourceConfig, LlmConfig};
use book_analyzer::llm_client::{CompletionClient, LLMClient};
use book_analyzer::service::AnalysisService;

pub fn create_llm_config(api_base: String) -> LlmConfig {
    LlmConfig {
        api_key: "test-key".to_string(),
        api_base,
        model: "test-model".to_string(),
    }
}

pub fn create_book_fetcher(base_url: String) -> BookFetcher {
    BookFetcher::new(Client::new(), &BookSourceConfig { base_url })
}

pub fn create_book_fetcher_with_timeout(base_url: String, timeout: Duration) -> BookFetcher {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build http client");
    BookFetcher::new(client, &BookSourceConfig { base_url })
}

pub fn create_llm_client(api_base: String) -> LLMClient {
    LLMClient::new(Client::new(), create_llm_config(api_base))
}

pub fn create_book_source(base_url: String) -> Arc<dyn BookSource> {
    Arc::new(create_book_fetcher(base_url))
}

pub fn create_analysis_service(llm: Arc<dyn CompletionClient>) -> Arc<AnalysisService> {
    Arc::new(AnalysisService::new(llm))
}
