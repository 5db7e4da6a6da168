use crate::adapters::codec::SoapOperation;
use crate::adapters::soap::{SoapTransport, DEFAULT_SERVICE_NAMESPACE};
use crate::adapters::xml::XmlElement;
use crate::config::toml_config::{EmsConfig, DEFAULT_SERVICE_URL};
use crate::domain::messages::*;
use crate::domain::model::SecurityContext;
use crate::domain::ports::EmsService;
use crate::utils::error::{EmsError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Connection to the eMS webservice.
///
/// Holds the security context and language, which every request has to carry.
#[derive(Debug)]
pub struct EmsServiceAgent {
    transport: SoapTransport,
    security_context: Option<SecurityContext>,
    language: String,
}

impl EmsServiceAgent {
    pub fn new() -> Result<Self> {
        Ok(Self {
            transport: SoapTransport::new(
                DEFAULT_SERVICE_URL,
                DEFAULT_SERVICE_NAMESPACE,
                Duration::from_secs(60),
            )?,
            security_context: None,
            language: "EN".to_string(),
        })
    }

    pub fn from_config(config: &EmsConfig) -> Result<Self> {
        let transport = SoapTransport::new(
            &config.service.url,
            &config.service.namespace,
            Duration::from_secs(config.service.timeout_seconds),
        )?;

        Ok(Self {
            transport,
            security_context: config.credentials.security_context(),
            language: config.service.language.clone(),
        })
    }

    /// Sets the login data for all requests.
    pub fn use_credentials(
        mut self,
        account: &str,
        username: &str,
        password: &str,
        application: &str,
    ) -> Self {
        self.security_context = Some(SecurityContext {
            account: account.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            source: application.to_string(),
        });
        self
    }

    pub fn use_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn use_service_url(mut self, service_url: &str) -> Self {
        self.transport.set_endpoint(service_url);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn service_url(&self) -> &str {
        self.transport.endpoint()
    }

    /// Builds the operation element with security context and language set.
    pub fn create_request<R: SoapOperation>(&self, request: &R) -> Result<XmlElement> {
        let context = self
            .security_context
            .as_ref()
            .ok_or(EmsError::MissingCredentials)?;

        let mut security = XmlElement::new("SecurityContext");
        security
            .push_text("Account", &context.account)
            .push_text("Username", &context.username)
            .push_text("Password", &context.password)
            .push_text("Source", &context.source);

        let mut body = XmlElement::new("request");
        body.push(security);
        body.push_text(
            "Language",
            request.language_override().unwrap_or(&self.language),
        );
        request.write_request(&mut body);

        Ok(XmlElement::new(R::NAME)
            .with_attr("xmlns", self.transport.namespace())
            .with_child(body))
    }

    /// Sends a request; `Ok(None)` is a null response.
    pub async fn invoke<R: SoapOperation>(&self, request: R) -> Result<Option<R::Response>> {
        let payload = self.create_request(&request)?;

        match self.transport.call(R::NAME, payload).await? {
            Some(result) => R::read_response(&result).map(Some),
            None => {
                tracing::warn!("⚠️ {} returned no result", R::NAME);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl EmsService for EmsServiceAgent {
    async fn get_profiles(&self, request: ProfilesRequest) -> Result<Option<ProfilesResponse>> {
        self.invoke(request).await
    }

    async fn get_subscriber_fields(
        &self,
        request: SubscriberFieldRequest,
    ) -> Result<Option<SubscriberFieldResponse>> {
        self.invoke(request).await
    }

    async fn import_subscribers(
        &self,
        request: SubscriberImportRequest,
    ) -> Result<Option<SubscriberImportResponse>> {
        self.invoke(request).await
    }

    async fn get_campaigns(&self, request: CampaignsRequest) -> Result<Option<CampaignsResponse>> {
        self.invoke(request).await
    }

    async fn copy_campaign(
        &self,
        request: CopyCampaignRequest,
    ) -> Result<Option<CopyCampaignResponse>> {
        self.invoke(request).await
    }

    async fn update_campaign(
        &self,
        request: UpdateCampaignRequest,
    ) -> Result<Option<UpdateCampaignResponse>> {
        self.invoke(request).await
    }

    async fn get_section_definitions(
        &self,
        request: SectionDefinitionRequest,
    ) -> Result<Option<SectionDefinitionResponse>> {
        self.invoke(request).await
    }

    async fn create_section(
        &self,
        request: CreateSectionRequest,
    ) -> Result<Option<CreateSectionResponse>> {
        self.invoke(request).await
    }

    async fn get_mdb_files(&self, request: MediaDbRequest) -> Result<Option<FileResponse>> {
        self.invoke(request).await
    }

    async fn upload_file_to_mdb(
        &self,
        request: FileUploadRequest,
    ) -> Result<Option<FileUploadResponse>> {
        self.invoke(request).await
    }

    async fn send_campaign(
        &self,
        request: SendCampaignRequest,
    ) -> Result<Option<SendCampaignResponse>> {
        self.invoke(request).await
    }

    async fn send_trigger_mails(
        &self,
        request: SendTriggerMailsRequest,
    ) -> Result<Option<SendTriggerMailsResponse>> {
        self.invoke(request).await
    }

    async fn get_campaign_statistics(
        &self,
        request: CampaignStatisticsRequest,
    ) -> Result<Option<CampaignStatisticsResponse>> {
        self.invoke(request).await
    }

    async fn get_bounces_of_campaign(
        &self,
        request: CampaignBounceRequest,
    ) -> Result<Option<CampaignBounceResponse>> {
        self.invoke(request).await
    }

    async fn get_click_rates_of_campaign(
        &self,
        request: CampaignClickRatesRequest,
    ) -> Result<Option<CampaignClickRatesResponse>> {
        self.invoke(request).await
    }

    async fn get_opening_rates_of_campaign(
        &self,
        request: CampaignOpeningRatesRequest,
    ) -> Result<Option<CampaignOpeningRatesResponse>> {
        self.invoke(request).await
    }

    async fn get_mail_client_types_of_campaign(
        &self,
        request: MailClientTypesRequest,
    ) -> Result<Option<MailClientTypesResponse>> {
        self.invoke(request).await
    }
}
