#![allow(dead_code)]

use async_trait::async_trait;
use ems_demo::domain::messages::*;
use ems_demo::domain::model::*;
use ems_demo::utils::error::{EmsError, Result};
use ems_demo::{AssetStorage, EmsService};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory eMS: canned answers in, recorded requests out.
///
/// `None` answers are null responses.
#[derive(Default)]
pub struct MockEms {
    pub profiles: Vec<Profile>,
    pub subscriber_fields: Option<Vec<Field>>,
    pub imported_ids: Vec<Uuid>,
    pub campaigns: Vec<Campaign>,
    pub copy_guid: Option<Uuid>,
    pub update_ok: bool,
    pub definitions: Option<Vec<SectionDefinition>>,
    pub mdb_files: Vec<MdbFile>,
    pub upload_id: Option<Uuid>,
    pub section_guid: Option<Uuid>,
    pub recipients: Option<i64>,
    pub trigger_ids: Option<Vec<Uuid>>,
    pub statistics: Option<CampaignStatistics>,
    pub bounces: Vec<Uuid>,
    pub links: Vec<StatisticLink>,
    pub openings: Vec<StatisticOpenedMail>,
    pub client_types: Vec<MailClientTypeStatistic>,

    pub calls: Mutex<Vec<&'static str>>,
    pub campaign_requests: Mutex<Vec<CampaignsRequest>>,
    pub imports: Mutex<Vec<SubscriberImportRequest>>,
    pub updates: Mutex<Vec<UpdateCampaignRequest>>,
    pub sections: Mutex<Vec<CreateSectionRequest>>,
    pub uploads: Mutex<Vec<FileUploadRequest>>,
    pub sends: Mutex<Vec<SendCampaignRequest>>,
    pub trigger_mails: Mutex<Vec<SendTriggerMailsRequest>>,
}

impl MockEms {
    async fn record(&self, operation: &'static str) {
        self.calls.lock().await.push(operation);
    }

    pub async fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| **call == operation)
            .count()
    }
}

#[async_trait]
impl EmsService for MockEms {
    async fn get_profiles(&self, _request: ProfilesRequest) -> Result<Option<ProfilesResponse>> {
        self.record("GetProfiles").await;
        Ok(Some(ProfilesResponse {
            profiles: self.profiles.clone(),
        }))
    }

    async fn get_subscriber_fields(
        &self,
        _request: SubscriberFieldRequest,
    ) -> Result<Option<SubscriberFieldResponse>> {
        self.record("GetSubscriberFields").await;
        Ok(self
            .subscriber_fields
            .clone()
            .map(|fields| SubscriberFieldResponse { fields }))
    }

    async fn import_subscribers(
        &self,
        request: SubscriberImportRequest,
    ) -> Result<Option<SubscriberImportResponse>> {
        self.record("ImportSubscribers").await;
        let imported = request.subscribers.len() as i64;
        self.imports.lock().await.push(request);
        Ok(Some(SubscriberImportResponse {
            imported,
            updated: 0,
            errors: 0,
            first_error_message: None,
            imported_subscribers: self.imported_ids.clone(),
        }))
    }

    async fn get_campaigns(&self, request: CampaignsRequest) -> Result<Option<CampaignsResponse>> {
        self.record("GetCampaigns").await;
        let campaigns = self
            .campaigns
            .iter()
            .filter(|campaign| request.id.map_or(true, |id| campaign.guid == id))
            .cloned()
            .collect();
        self.campaign_requests.lock().await.push(request);
        Ok(Some(CampaignsResponse { campaigns }))
    }

    async fn copy_campaign(
        &self,
        _request: CopyCampaignRequest,
    ) -> Result<Option<CopyCampaignResponse>> {
        self.record("CopyCampaign").await;
        Ok(self.copy_guid.map(|new_campaign_guid| CopyCampaignResponse { new_campaign_guid }))
    }

    async fn update_campaign(
        &self,
        request: UpdateCampaignRequest,
    ) -> Result<Option<UpdateCampaignResponse>> {
        self.record("UpdateCampaign").await;
        self.updates.lock().await.push(request);
        Ok(self.update_ok.then_some(UpdateCampaignResponse))
    }

    async fn get_section_definitions(
        &self,
        _request: SectionDefinitionRequest,
    ) -> Result<Option<SectionDefinitionResponse>> {
        self.record("GetSectionDefinitions").await;
        Ok(self
            .definitions
            .clone()
            .map(|section_definitions| SectionDefinitionResponse {
                section_definitions,
            }))
    }

    async fn create_section(
        &self,
        request: CreateSectionRequest,
    ) -> Result<Option<CreateSectionResponse>> {
        self.record("CreateSection").await;
        self.sections.lock().await.push(request);
        Ok(self.section_guid.map(|guid| CreateSectionResponse { guid }))
    }

    async fn get_mdb_files(&self, _request: MediaDbRequest) -> Result<Option<FileResponse>> {
        self.record("GetMDBFiles").await;
        Ok(Some(FileResponse {
            files: self.mdb_files.clone(),
        }))
    }

    async fn upload_file_to_mdb(
        &self,
        request: FileUploadRequest,
    ) -> Result<Option<FileUploadResponse>> {
        self.record("UploadFileToMDB").await;
        self.uploads.lock().await.push(request);
        Ok(self.upload_id.map(|file_id| FileUploadResponse { file_id }))
    }

    async fn send_campaign(
        &self,
        request: SendCampaignRequest,
    ) -> Result<Option<SendCampaignResponse>> {
        self.record("SendCampaign").await;
        self.sends.lock().await.push(request);
        Ok(self
            .recipients
            .map(|recipients_effective| SendCampaignResponse {
                recipients_effective,
            }))
    }

    async fn send_trigger_mails(
        &self,
        request: SendTriggerMailsRequest,
    ) -> Result<Option<SendTriggerMailsResponse>> {
        self.record("SendTriggerMails").await;
        self.trigger_mails.lock().await.push(request);
        Ok(self
            .trigger_ids
            .clone()
            .map(|trigger_mail_ids| SendTriggerMailsResponse { trigger_mail_ids }))
    }

    async fn get_campaign_statistics(
        &self,
        _request: CampaignStatisticsRequest,
    ) -> Result<Option<CampaignStatisticsResponse>> {
        self.record("GetCampaignStatistics").await;
        Ok(self.statistics.clone())
    }

    async fn get_bounces_of_campaign(
        &self,
        _request: CampaignBounceRequest,
    ) -> Result<Option<CampaignBounceResponse>> {
        self.record("GetBouncesOfCampaign").await;
        Ok(Some(CampaignBounceResponse {
            subscribers: self.bounces.clone(),
        }))
    }

    async fn get_click_rates_of_campaign(
        &self,
        _request: CampaignClickRatesRequest,
    ) -> Result<Option<CampaignClickRatesResponse>> {
        self.record("GetClickRatesOfCampaign").await;
        Ok(Some(CampaignClickRatesResponse {
            clicked_links: self.links.clone(),
        }))
    }

    async fn get_opening_rates_of_campaign(
        &self,
        _request: CampaignOpeningRatesRequest,
    ) -> Result<Option<CampaignOpeningRatesResponse>> {
        self.record("GetOpeningRatesOfCampaign").await;
        Ok(Some(CampaignOpeningRatesResponse {
            openings: self.openings.clone(),
        }))
    }

    async fn get_mail_client_types_of_campaign(
        &self,
        _request: MailClientTypesRequest,
    ) -> Result<Option<MailClientTypesResponse>> {
        self.record("GetMailClientTypesOfCampaign").await;
        Ok(Some(MailClientTypesResponse {
            mail_client_types: self.client_types.clone(),
        }))
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Storage holding every demo image.
    pub async fn with_demo_assets() -> Self {
        let storage = Self::default();
        for name in ["email.png", "logo.png", "messaging.png", "events.png"] {
            storage.put(name, name.as_bytes()).await;
        }
        storage
    }

    pub async fn put(&self, path: &str, data: &[u8]) {
        self.files
            .lock()
            .await
            .insert(path.to_string(), data.to_vec());
    }
}

impl AssetStorage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| EmsError::AssetError {
            path: path.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    }
}

pub fn field(name: &str, kind: FieldKind) -> Field {
    Field {
        internal_name: name.to_string(),
        untyped_value: None,
        kind,
    }
}

pub fn definition(name: &str, fields: &[(&str, FieldKind)]) -> SectionDefinition {
    SectionDefinition {
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(name, kind)| field(name, kind.clone()))
            .collect(),
    }
}

/// The section definitions of the demo template.
pub fn demo_definitions() -> Vec<SectionDefinition> {
    vec![
        definition(
            "Artikel",
            &[
                ("a_hl", FieldKind::Text),
                ("a_text", FieldKind::Text),
                ("a_img", FieldKind::Mdb),
            ],
        ),
        definition(
            "Banner",
            &[("t_img", FieldKind::Mdb), ("t_text", FieldKind::Text)],
        ),
        definition(
            "2 spaltiger Beitrag",
            &[
                ("c2_l_img", FieldKind::Mdb),
                ("c2_l_text", FieldKind::Text),
                ("c2_r_img", FieldKind::Mdb),
                ("c2_r_text", FieldKind::Text),
            ],
        ),
    ]
}

pub fn campaign(name: &str, guid: Uuid, template_guid: Uuid, culture: &str) -> Campaign {
    Campaign {
        guid,
        name: name.to_string(),
        template_guid,
        culture: culture.to_string(),
        ..Default::default()
    }
}
