use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::BookSourceConfig;
use crate::consts;
use crate::errors::AppError;
use crate::models::api::Book;
use crate::text_window;

#[async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_book(&self, id: u64) -> Result<Book, AppError>;
}

pub struct BookFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl BookFetcher {
    pub fn new(client: reqwest::Client, config: &BookSourceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Plain-text locations tried in order: two raw-text paths, then the UTF-8 ebook path.
    pub fn candidate_urls(&self, id: u64) -> [String; 3] {
        let base = &self.base_url;
        [
            format!("{base}/files/{id}/{id}-0.txt"),
            format!("{base}/files/{id}/{id}.txt"),
            format!("{base}/ebooks/{id}.txt.utf-8"),
        ]
    }

    async fn try_candidate(&self, url: &str) -> Result<Option<String>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("rejected {url}: status {status}");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(e.to_string()))?;

        if is_html_page(&body) {
            log::warn!("rejected {url}: html page");
            return Ok(None);
        }

        Ok(Some(body))
    }
}

#[async_trait]
impl BookSource for BookFetcher {
    async fn fetch_book(&self, id: u64) -> Result<Book, AppError> {
        for url in self.candidate_urls(id) {
            log::debug!("fetching book {id} from {url}");

            // A transport failure only rules out this candidate.
            match self.try_candidate(&url).await {
                Ok(Some(body)) => {
                    let content = text_window::truncate_chars(&body, consts::MAX_BOOK_CHARS);
                    log::info!("fetched book {id} from {url}");
                    return Ok(Book {
                        book_id: id,
                        content: content.to_string(),
                    });
                }
                Ok(None) => {}
                Err(e) => log::warn!("failed {url}: {e}"),
            }
        }

        Err(AppError::NotFound(format!(
            "book {id} not found in any known format"
        )))
    }
}

fn is_html_page(body: &str) -> bool {
    body.starts_with(consts::HTML_MARKER)
}
