//! app.rs
use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::handlers::{
    business_handler, campaign_handler, contact_handler, health_handler, send_handler,
};

/// Malformed bodies and query strings get the same `{"detail": ...}` shape as
/// domain errors.
fn invalid_input(err: impl std::fmt::Display) -> error::Error {
    let detail = err.to_string();
    log::debug!("(invalid_input) Rejected request: {}", detail);
    let response = HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }));
    error::InternalError::from_response(detail, response).into()
}

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| invalid_input(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| invalid_input(err)))
        .route("/health", web::get().to(health_handler::health_endpoint))
        .service(
            web::scope("/businesses")
                .route(
                    "",
                    web::post().to(business_handler::create_business_endpoint),
                )
                .route("", web::get().to(business_handler::list_businesses_endpoint))
                .route(
                    "/{id}",
                    web::get().to(business_handler::get_business_endpoint),
                ),
        )
        .service(
            web::scope("/contacts")
                .route("", web::post().to(contact_handler::create_contact_endpoint))
                .route("", web::get().to(contact_handler::list_contacts_endpoint))
                .route("/{id}", web::get().to(contact_handler::get_contact_endpoint)),
        )
        .service(
            web::scope("/campaigns")
                .route(
                    "",
                    web::post().to(campaign_handler::create_campaign_endpoint),
                )
                .route("", web::get().to(campaign_handler::list_campaigns_endpoint))
                .route(
                    "/{id}",
                    web::get().to(campaign_handler::get_campaign_endpoint),
                ),
        )
        .route("/send", web::post().to(send_handler::send_endpoint))
        .service(
            web::scope("/send-logs")
                .route("", web::get().to(send_handler::list_send_logs_endpoint))
                .route("/{id}", web::get().to(send_handler::get_send_log_endpoint)),
        );
}
