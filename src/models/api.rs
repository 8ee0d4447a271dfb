//! Request and response bodies of the public HTTP surface.

use std::num::NonZeroU64;

use serde::{self, Deserialize, Serialize};

/// Book identifiers are positive; `id=0` is rejected by the extractor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookQuery {
    pub id: NonZeroU64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Book {
    pub book_id: u64,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CharacterGraphResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuoteResponse {
    pub quotes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}
