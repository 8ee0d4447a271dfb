pub mod app;
pub mod book_fetcher;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod llm_client;
pub mod models;
pub mod prompts;
pub mod service;
pub mod text_window;
