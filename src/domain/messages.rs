//! Request and response messages of the eMS service agent.
//!
//! Security context and language are not part of these structs; the service
//! agent attaches them to every outgoing request.

use crate::domain::model::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilesRequest {
    pub profile_type: ProfileType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilesResponse {
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriberFieldRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriberFieldResponse {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberImportRequest {
    pub profile_guid: Uuid,
    /// Internal name of the field used to detect existing subscribers.
    pub duplicate_criteria: String,
    pub subscribers: Vec<Subscriber>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriberImportResponse {
    pub imported: i64,
    pub updated: i64,
    pub errors: i64,
    pub first_error_message: Option<String>,
    pub imported_subscribers: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignsRequest {
    pub id: Option<Uuid>,
    pub campaign_type: Option<CampaignType>,
    pub response_detail: Option<CampaignResponseDetailInfo>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignsResponse {
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyCampaignRequest {
    pub campaign_to_copy: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyCampaignResponse {
    pub new_campaign_guid: Uuid,
}

/// Every string must be set: the service resets unset strings to empty.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCampaignRequest {
    pub campaign_guid: Uuid,
    pub language: String,
    pub profile_guid: Uuid,
    pub name: String,
    pub sender_address: String,
    pub sender_name: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCampaignResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDefinitionRequest {
    pub template_guid: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionDefinitionResponse {
    pub section_definitions: Vec<SectionDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSectionRequest {
    pub campaign_guid: Uuid,
    pub section: Section,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSectionResponse {
    pub guid: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaDbRequest {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileResponse {
    pub files: Vec<MdbFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadRequest {
    pub file: Vec<u8>,
    /// File name including its extension.
    pub name: String,
    /// Location in the media database; must already exist.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadResponse {
    pub file_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendCampaignRequest {
    pub campaign_id: Uuid,
    pub ignore_culture: bool,
    pub send_type: CampaignSendType,
    pub settings: ManualSendSettings,
    pub use_irated: bool,
    pub use_rtr: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendCampaignResponse {
    pub recipients_effective: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendTriggerMailsRequest {
    pub campaign_id: Uuid,
    pub trigger_mails: Vec<TriggerMail>,
    pub use_irated: bool,
    pub ignore_culture: bool,
    pub use_rtr: bool,
    pub consider_subscriber_exclusion_criterias: bool,
    pub consider_doi_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendTriggerMailsResponse {
    pub trigger_mail_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignStatisticsRequest {
    pub campaign_guid: Uuid,
}

pub type CampaignStatisticsResponse = CampaignStatistics;

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBounceRequest {
    pub campaign_guid: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignBounceResponse {
    pub subscribers: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignClickRatesRequest {
    pub campaign_guid: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignClickRatesResponse {
    pub clicked_links: Vec<StatisticLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignOpeningRatesRequest {
    pub campaign_guid: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignOpeningRatesResponse {
    pub openings: Vec<StatisticOpenedMail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailClientTypesRequest {
    pub campaign_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MailClientTypesResponse {
    pub mail_client_types: Vec<MailClientTypeStatistic>,
}
