//! handlers/campaign_handler.rs
use actix_web::{web, HttpResponse};

use crate::errors::ServiceError;
use crate::handlers::contact_handler::BusinessFilterQuery;
use crate::models::campaign_model::CreateCampaignRequest;
use crate::services::campaign_service::CampaignService;

/// POST /campaigns
pub async fn create_campaign_endpoint(
    campaign_service: web::Data<CampaignService>,
    body: web::Json<CreateCampaignRequest>,
) -> Result<HttpResponse, ServiceError> {
    let campaign = campaign_service.create_campaign(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(campaign))
}

/// GET /campaigns?business_id=
pub async fn list_campaigns_endpoint(
    campaign_service: web::Data<CampaignService>,
    query: web::Query<BusinessFilterQuery>,
) -> HttpResponse {
    let campaigns = campaign_service
        .list_campaigns(query.business_id.as_deref())
        .await;
    HttpResponse::Ok().json(campaigns)
}

/// GET /campaigns/{id}
pub async fn get_campaign_endpoint(
    campaign_service: web::Data<CampaignService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let campaign = campaign_service.get_campaign(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(campaign))
}
