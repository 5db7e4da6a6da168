use crate::config::toml_config::CampaignConfig;
use crate::domain::messages::{CampaignsRequest, CopyCampaignRequest, UpdateCampaignRequest};
use crate::domain::model::{Campaign, CampaignType};
use crate::domain::ports::EmsService;
use crate::utils::error::Result;
use crate::utils::validation::require_guid;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedCampaign {
    pub campaign_id: Uuid,
    pub template_id: Uuid,
}

impl From<&Campaign> for CreatedCampaign {
    fn from(campaign: &Campaign) -> Self {
        Self {
            campaign_id: campaign.guid,
            template_id: campaign.template_guid,
        }
    }
}

/// Prepares the campaign that gets sent, by copying an existing in-work campaign.
pub struct CampaignCreator<'a, E: EmsService> {
    service: &'a E,
    settings: &'a CampaignConfig,
}

impl<'a, E: EmsService> CampaignCreator<'a, E> {
    pub fn new(service: &'a E, settings: &'a CampaignConfig) -> Self {
        Self { service, settings }
    }

    /// Looks up the in-work campaign `campaign_name` (ignoring case).
    ///
    /// An exact name match is copied and the copy gets the profile, sender and
    /// subject; a match differing only in case is returned as it is.
    pub async fn create_campaign(
        &self,
        profile_id: Uuid,
        campaign_name: &str,
    ) -> Result<Option<CreatedCampaign>> {
        require_guid("profileId", profile_id)?;

        let Some(original) = self.load_campaign(campaign_name, None).await? else {
            tracing::warn!("⚠️ No in-work campaign named '{}'", campaign_name);
            return Ok(None);
        };

        if original.name != campaign_name {
            tracing::info!("📧 Reusing existing campaign {} ({})", original.name, original.guid);
            return Ok(Some(CreatedCampaign::from(&original)));
        }

        let Some(copy) = self.copy_campaign(original.guid).await? else {
            tracing::warn!("⚠️ Copy of campaign {} could not be loaded", original.guid);
            return Ok(None);
        };

        if self.update_campaign(&copy, profile_id, campaign_name).await? {
            tracing::info!("📧 Campaign {} copied to {}", original.guid, copy.guid);
            Ok(Some(CreatedCampaign::from(&copy)))
        } else {
            Ok(None)
        }
    }

    /// By id when given, otherwise the first in-work campaign named `campaign_name`.
    async fn load_campaign(
        &self,
        campaign_name: &str,
        campaign_id: Option<Uuid>,
    ) -> Result<Option<Campaign>> {
        let response = self
            .service
            .get_campaigns(CampaignsRequest {
                id: campaign_id,
                campaign_type: Some(CampaignType::InWork),
                response_detail: None,
            })
            .await?;

        let Some(response) = response else {
            return Ok(None);
        };

        let campaign = match campaign_id {
            Some(_) => response.campaigns.into_iter().next(),
            None => response
                .campaigns
                .into_iter()
                .find(|campaign| campaign.name.to_lowercase() == campaign_name.to_lowercase()),
        };
        Ok(campaign)
    }

    async fn copy_campaign(&self, campaign_id: Uuid) -> Result<Option<Campaign>> {
        let response = self
            .service
            .copy_campaign(CopyCampaignRequest {
                campaign_to_copy: campaign_id,
            })
            .await?;

        match response {
            Some(copy) => self.load_campaign("", Some(copy.new_campaign_guid)).await,
            None => Ok(None),
        }
    }

    // 所有字串欄位都要給值，否則會被更新成空字串
    async fn update_campaign(&self, campaign: &Campaign, profile_id: Uuid, name: &str) -> Result<bool> {
        let response = self
            .service
            .update_campaign(UpdateCampaignRequest {
                campaign_guid: campaign.guid,
                language: campaign.culture.clone(),
                profile_guid: profile_id,
                name: name.to_string(),
                sender_address: self.settings.sender_address.clone(),
                sender_name: self.settings.sender_name.clone(),
                subject: self.settings.subject.clone(),
            })
            .await?;

        Ok(response.is_some())
    }
}
