use crate::domain::messages::*;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads the local files (images) that get uploaded to the media database.
pub trait AssetStorage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// The remote eMS operations used by the demos.
///
/// `Ok(None)` is a null response from the service; transport failures and
/// SOAP faults are errors.
#[async_trait]
pub trait EmsService: Send + Sync {
    async fn get_profiles(&self, request: ProfilesRequest) -> Result<Option<ProfilesResponse>>;

    async fn get_subscriber_fields(
        &self,
        request: SubscriberFieldRequest,
    ) -> Result<Option<SubscriberFieldResponse>>;

    async fn import_subscribers(
        &self,
        request: SubscriberImportRequest,
    ) -> Result<Option<SubscriberImportResponse>>;

    async fn get_campaigns(&self, request: CampaignsRequest) -> Result<Option<CampaignsResponse>>;

    async fn copy_campaign(
        &self,
        request: CopyCampaignRequest,
    ) -> Result<Option<CopyCampaignResponse>>;

    async fn update_campaign(
        &self,
        request: UpdateCampaignRequest,
    ) -> Result<Option<UpdateCampaignResponse>>;

    async fn get_section_definitions(
        &self,
        request: SectionDefinitionRequest,
    ) -> Result<Option<SectionDefinitionResponse>>;

    async fn create_section(
        &self,
        request: CreateSectionRequest,
    ) -> Result<Option<CreateSectionResponse>>;

    async fn get_mdb_files(&self, request: MediaDbRequest) -> Result<Option<FileResponse>>;

    async fn upload_file_to_mdb(
        &self,
        request: FileUploadRequest,
    ) -> Result<Option<FileUploadResponse>>;

    async fn send_campaign(
        &self,
        request: SendCampaignRequest,
    ) -> Result<Option<SendCampaignResponse>>;

    async fn send_trigger_mails(
        &self,
        request: SendTriggerMailsRequest,
    ) -> Result<Option<SendTriggerMailsResponse>>;

    async fn get_campaign_statistics(
        &self,
        request: CampaignStatisticsRequest,
    ) -> Result<Option<CampaignStatisticsResponse>>;

    async fn get_bounces_of_campaign(
        &self,
        request: CampaignBounceRequest,
    ) -> Result<Option<CampaignBounceResponse>>;

    async fn get_click_rates_of_campaign(
        &self,
        request: CampaignClickRatesRequest,
    ) -> Result<Option<CampaignClickRatesResponse>>;

    async fn get_opening_rates_of_campaign(
        &self,
        request: CampaignOpeningRatesRequest,
    ) -> Result<Option<CampaignOpeningRatesResponse>>;

    async fn get_mail_client_types_of_campaign(
        &self,
        request: MailClientTypesRequest,
    ) -> Result<Option<MailClientTypesResponse>>;
}

/// One runnable console demo.
#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self) -> Result<()>;
}
