//! tests/dispatch_tests.rs
//! `DispatchService::send`: rendering, truncation and the partial-failure rules.

#[cfg(test)]
mod tests {
    use actix_rt::test;

    use crate::errors::ServiceError;
    use crate::models::business_model::CreateBusinessRequest;
    use crate::models::campaign_model::{Campaign, CreateCampaignRequest};
    use crate::models::contact_model::{Contact, CreateContactRequest};
    use crate::models::send_log_model::{SendRequest, SendStatus};
    use crate::services::business_service::BusinessService;
    use crate::services::campaign_service::CampaignService;
    use crate::services::contact_service::ContactService;
    use crate::services::dispatch_service::{DispatchService, MESSAGE_PREVIEW_MAX_CHARS};
    use crate::services::store::EntityStore;

    struct Fixture {
        business_id: String,
        contacts: ContactService,
        campaigns: CampaignService,
        dispatch: DispatchService,
    }

    async fn create_fixture() -> Fixture {
        let store = EntityStore::new();
        let business = BusinessService::new(store.clone())
            .create_business(CreateBusinessRequest {
                name: "Corner Cafe".to_string(),
                address: None,
                google_place_id: Some("ChIJ-test".to_string()),
            })
            .await
            .expect("business should be created");

        Fixture {
            business_id: business.id,
            contacts: ContactService::new(store.clone()),
            campaigns: CampaignService::new(store.clone()),
            dispatch: DispatchService::new(store),
        }
    }

    impl Fixture {
        async fn contact(&self, first_name: &str) -> Contact {
            self.contacts
                .create_contact(CreateContactRequest::test_new(&self.business_id, first_name))
                .await
                .expect("contact should be created")
        }

        async fn campaign(&self, template: &str) -> Campaign {
            self.campaigns
                .create_campaign(CreateCampaignRequest::test_new(&self.business_id, template))
                .await
                .expect("campaign should be created")
        }
    }

    fn send_request(campaign_id: &str, contact_ids: &[&str]) -> SendRequest {
        SendRequest {
            campaign_id: campaign_id.to_string(),
            contact_ids: contact_ids.iter().map(|id| id.to_string()).collect(),
            review_link: "http://x/r1".to_string(),
        }
    }

    #[test]
    async fn test_send_renders_personalised_message() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;
        let campaign = fx.campaign("Hi {first_name}, review us: {review_link}").await;

        let logs = fx
            .dispatch
            .send(send_request(&campaign.id, &[&ana.id]))
            .await
            .unwrap();

        assert_eq!(logs.len(), 1);
        let entry = &logs[0];
        assert_eq!(entry.message_preview, "Hi Ana, review us: http://x/r1");
        assert_eq!(entry.campaign_id, campaign.id);
        assert_eq!(entry.contact_id, ana.id);
        assert_eq!(entry.channel, campaign.channel);
        assert_eq!(entry.status, SendStatus::Queued);
    }

    #[test]
    async fn test_send_keeps_contact_order_and_duplicates() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;
        let bruno = fx.contact("Bruno").await;
        let campaign = fx.campaign("Thanks {first_name}!").await;

        let logs = fx
            .dispatch
            .send(send_request(&campaign.id, &[&bruno.id, &ana.id, &bruno.id]))
            .await
            .unwrap();

        let previews: Vec<&str> = logs.iter().map(|l| l.message_preview.as_str()).collect();
        assert_eq!(previews, vec!["Thanks Bruno!", "Thanks Ana!", "Thanks Bruno!"]);
        assert_eq!(fx.dispatch.list_send_logs(Some(&campaign.id)).await, logs);
    }

    #[test]
    async fn test_send_with_no_contacts_is_empty() {
        let fx = create_fixture().await;
        let campaign = fx.campaign("Hi {first_name}").await;

        let logs = fx.dispatch.send(send_request(&campaign.id, &[])).await.unwrap();
        assert!(logs.is_empty());
        assert!(fx.dispatch.list_send_logs(None).await.is_empty());
    }

    #[test]
    async fn test_send_unknown_campaign_has_no_side_effects() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;

        let err = fx
            .dispatch
            .send(send_request("missing", &[&ana.id]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Campaign not found"));
        assert!(fx.dispatch.list_send_logs(None).await.is_empty());
    }

    #[test]
    async fn test_send_aborts_on_unknown_contact_but_keeps_earlier_logs() {
        let fx = create_fixture().await;
        let first = fx.contact("Ana").await;
        let last = fx.contact("Bruno").await;
        let campaign = fx.campaign("Hi {first_name}: {review_link}").await;

        let err = fx
            .dispatch
            .send(send_request(&campaign.id, &[&first.id, "ghost", &last.id]))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Contact ghost not found");

        let logs = fx.dispatch.list_send_logs(Some(&campaign.id)).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].contact_id, first.id);
    }

    #[test]
    async fn test_send_rejects_unsupported_placeholder() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;
        let campaign = fx.campaign("Hi {first_name}, use {coupon_code}").await;

        let err = fx
            .dispatch
            .send(send_request(&campaign.id, &[&ana.id]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Template(_)));
        assert!(fx.dispatch.list_send_logs(None).await.is_empty());
    }

    #[test]
    async fn test_send_truncates_preview_to_prefix() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;
        let template = format!("Hi {{first_name}} {} {{review_link}}", "ñ".repeat(300));
        let campaign = fx.campaign(&template).await;

        let logs = fx
            .dispatch
            .send(send_request(&campaign.id, &[&ana.id]))
            .await
            .unwrap();

        let full = format!("Hi Ana {} http://x/r1", "ñ".repeat(300));
        let preview = &logs[0].message_preview;
        assert_eq!(preview.chars().count(), MESSAGE_PREVIEW_MAX_CHARS);
        assert!(full.starts_with(preview.as_str()));
    }

    #[test]
    async fn test_send_logs_filter_by_campaign() {
        let fx = create_fixture().await;
        let ana = fx.contact("Ana").await;
        let spring = fx.campaign("Spring {first_name}").await;
        let autumn = fx.campaign("Autumn {first_name}").await;

        fx.dispatch.send(send_request(&spring.id, &[&ana.id])).await.unwrap();
        let autumn_logs = fx
            .dispatch
            .send(send_request(&autumn.id, &[&ana.id, &ana.id]))
            .await
            .unwrap();

        assert_eq!(fx.dispatch.list_send_logs(None).await.len(), 3);
        assert_eq!(fx.dispatch.list_send_logs(Some(&autumn.id)).await, autumn_logs);

        let fetched = fx.dispatch.get_send_log(&autumn_logs[0].id).await.unwrap();
        assert_eq!(fetched, autumn_logs[0]);
        assert!(matches!(
            fx.dispatch.get_send_log("missing").await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
