use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, Query};
use actix_web::{HttpResponse, Responder};

use crate::book_fetcher::BookSource;
use crate::consts;
use crate::errors::AppError;
use crate::models::api;
use crate::service::AnalysisService;

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::LlmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::NetworkError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &AppError, detail: String) -> HttpResponse {
    HttpResponse::build(status_for(error)).json(api::ErrorDetail { detail })
}

pub async fn get_book(
    books: Data<dyn BookSource>,
    query: Query<api::BookQuery>,
) -> impl Responder {
    match books.fetch_book(query.id.get()).await {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(e) => {
            log::error!("get_book error: {:?}", e);
            let detail = match e {
                AppError::NotFound(_) => consts::BOOK_NOT_FOUND_DETAIL.to_string(),
                _ => e.to_string(),
            };
            error_response(&e, detail)
        }
    }
}

pub async fn analyze(
    service: Data<AnalysisService>,
    request: Json<api::AnalysisRequest>,
) -> impl Responder {
    match service.analyze_characters(&request.text).await {
        Ok(result) => HttpResponse::Ok().json(api::CharacterGraphResponse { result }),
        Err(e) => {
            log::error!("analyze error: {:?}", e);
            error_response(&e, format!("LLM error: {}", e.message()))
        }
    }
}

pub async fn quotes(
    service: Data<AnalysisService>,
    request: Json<api::AnalysisRequest>,
) -> impl Responder {
    match service.extract_quotes(&request.text).await {
        Ok(quotes) => HttpResponse::Ok().json(api::QuoteResponse { quotes }),
        Err(e) => {
            log::error!("quotes error: {:?}", e);
            error_response(&e, format!("Quote sentiment error: {}", e.message()))
        }
    }
}
