use actix_web::web::{self, JsonConfig, QueryConfig, ServiceConfig};
use actix_web::{HttpResponse, ResponseError};

use crate::campaign;
use crate::chat;
use crate::error::Error;

/// Route table shared by the server binary and the endpoint tests. Each path
/// carries an any-method fallback so unsupported methods answer 405 instead of
/// falling through to the 404 default.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
        // format json errors with custom format
        Error::InvalidJson(err).into()
    }))
    .app_data(QueryConfig::default().error_handler(|err, _req| {
        // format query errors with custom format
        Error::InvalidQuery(err).into()
    }))
    .service(
        web::resource("/api/flower")
            .route(web::post().to(campaign::endpoints::create_campaign))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/flowers")
            .route(web::get().to(campaign::endpoints::get_campaigns))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/flower/show")
            .route(web::get().to(campaign::endpoints::get_campaign_by_id))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/message")
            .route(web::post().to(chat::endpoints::post_message))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(path_does_not_exist));
}

async fn method_not_allowed() -> HttpResponse {
    Error::MethodNotAllowed.error_response()
}

async fn path_does_not_exist() -> HttpResponse {
    Error::PathDoesNotExist.error_response()
}
