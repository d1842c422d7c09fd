//! handlers/business_handler.rs
use actix_web::{web, HttpResponse};

use crate::errors::ServiceError;
use crate::models::business_model::CreateBusinessRequest;
use crate::services::business_service::BusinessService;

/// POST /businesses
pub async fn create_business_endpoint(
    business_service: web::Data<BusinessService>,
    body: web::Json<CreateBusinessRequest>,
) -> Result<HttpResponse, ServiceError> {
    let business = business_service.create_business(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(business))
}

/// GET /businesses
pub async fn list_businesses_endpoint(
    business_service: web::Data<BusinessService>,
) -> HttpResponse {
    HttpResponse::Ok().json(business_service.list_businesses().await)
}

/// GET /businesses/{id}
pub async fn get_business_endpoint(
    business_service: web::Data<BusinessService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let business = business_service.get_business(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(business))
}
