//! handlers/contact_handler.rs
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::ServiceError;
use crate::models::contact_model::CreateContactRequest;
use crate::services::contact_service::ContactService;

#[derive(Deserialize)]
pub struct BusinessFilterQuery {
    pub business_id: Option<String>,
}

/// POST /contacts
pub async fn create_contact_endpoint(
    contact_service: web::Data<ContactService>,
    body: web::Json<CreateContactRequest>,
) -> Result<HttpResponse, ServiceError> {
    let contact = contact_service.create_contact(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(contact))
}

/// GET /contacts?business_id=
pub async fn list_contacts_endpoint(
    contact_service: web::Data<ContactService>,
    query: web::Query<BusinessFilterQuery>,
) -> HttpResponse {
    let contacts = contact_service
        .list_contacts(query.business_id.as_deref())
        .await;
    HttpResponse::Ok().json(contacts)
}

/// GET /contacts/{id}
pub async fn get_contact_endpoint(
    contact_service: web::Data<ContactService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let contact = contact_service.get_contact(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(contact))
}
