//! handlers/send_handler.rs
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::ServiceError;
use crate::models::send_log_model::SendRequest;
use crate::services::dispatch_service::DispatchService;

#[derive(Deserialize)]
pub struct CampaignFilterQuery {
    campaign_id: Option<String>,
}

/// POST /send
///
/// On a missing contact the whole request fails, even though logs for the
/// contacts before it were already recorded (see GET /send-logs).
pub async fn send_endpoint(
    dispatch_service: web::Data<DispatchService>,
    body: web::Json<SendRequest>,
) -> Result<HttpResponse, ServiceError> {
    let logs = dispatch_service.send(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(logs))
}

/// GET /send-logs?campaign_id=
pub async fn list_send_logs_endpoint(
    dispatch_service: web::Data<DispatchService>,
    query: web::Query<CampaignFilterQuery>,
) -> HttpResponse {
    let logs = dispatch_service
        .list_send_logs(query.campaign_id.as_deref())
        .await;
    HttpResponse::Ok().json(logs)
}

/// GET /send-logs/{id}
pub async fn get_send_log_endpoint(
    dispatch_service: web::Data<DispatchService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let log_entry = dispatch_service.get_send_log(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(log_entry))
}
