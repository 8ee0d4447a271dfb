use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::book_fetcher::BookSource;
use crate::service::AnalysisService;
use crate::{consts, handlers};

/// Any origin, method and header; credentials allowed with the origin mirrored.
fn cors() -> Cors {
    Cors::permissive()
}

pub fn create_app(
    books: Arc<dyn BookSource>,
    analysis_service: Arc<AnalysisService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(cors())
        .wrap(Logger::default())
        .app_data(Data::from(books))
        .app_data(Data::from(analysis_service))
        .app_data(web::JsonConfig::default().limit(consts::MAX_JSON_PAYLOAD_BYTES))
        .service(
            web::scope("/api")
                .route("/book", web::get().to(handlers::get_book))
                .route("/analyze", web::post().to(handlers::analyze))
                .route("/quotes", web::post().to(handlers::quotes)),
        )
}
