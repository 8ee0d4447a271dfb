use std::sync::Arc;
use std::time::Duration;

use book_analyzer::app::create_app;
use book_analyzer::book_fetcher::{BookFetcher, BookSource};
use book_analyzer::config;
use book_analyzer::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use book_analyzer::llm_client::{CompletionClient, LLMClient};
use book_analyzer::service::AnalysisService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Book Analyzer service...");

    let config = config::load_config().map_err(|e| {
        log::error!("failed to load config: {e}");
        std::io::Error::other(e)
    })?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let books: Arc<dyn BookSource> =
        Arc::new(BookFetcher::new(http_client.clone(), &config.book_source));
    let llm: Arc<dyn CompletionClient> = Arc::new(LLMClient::new(http_client, config.llm.clone()));
    let analysis_service = Arc::new(AnalysisService::new(llm));

    log::info!(
        "model {} at {}, books from {}",
        config.llm.model,
        config.llm.api_base,
        config.book_source.base_url
    );
    log::info!("listening on {}:{}", config.server.host, config.server.port);

    let app_factory = move || create_app(books.clone(), analysis_service.clone());

    actix_web::HttpServer::new(app_factory)
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
