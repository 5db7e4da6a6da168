use super::DemoContext;
use crate::core::campaign_creator::CampaignCreator;
use crate::core::section_creator::SectionCreator;
use crate::core::subscriber_import::SubscriberImport;
use crate::domain::messages::SendCampaignRequest;
use crate::domain::model::{CampaignSendType, ManualSendSettings};
use crate::domain::ports::{AssetStorage, Demo, EmsService};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Local;

/// Imports subscribers, prepares a campaign with sections and sends it.
pub struct SendCampaignDemo<E, S> {
    ctx: DemoContext<E, S>,
}

impl<E: EmsService, S: AssetStorage> SendCampaignDemo<E, S> {
    pub fn new(ctx: DemoContext<E, S>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<E: EmsService, S: AssetStorage> Demo for SendCampaignDemo<E, S> {
    fn name(&self) -> &'static str {
        "Send a campaign"
    }

    async fn run(&self) -> Result<()> {
        let service = self.ctx.service.as_ref();
        let console = self.ctx.console.as_ref();
        let config = self.ctx.config.as_ref();
        console.println("")?;

        // Step 1: import
        let imported = SubscriberImport::new(service)
            .import_subscribers(&config.campaign.profile_name)
            .await?;
        if imported.is_empty() {
            tracing::warn!("⚠️ No subscribers imported, campaign is not sent");
            return Ok(());
        }

        // Step 2: campaign
        let created = CampaignCreator::new(service, &config.campaign)
            .create_campaign(imported.profile_id, &config.campaign.name)
            .await?;
        let Some(created) = created.filter(|c| !c.campaign_id.is_nil() && !c.template_id.is_nil())
        else {
            tracing::warn!("⚠️ No campaign to send");
            return Ok(());
        };

        // Step 3: sections
        let sections = SectionCreator::new(
            service,
            self.ctx.storage.as_ref(),
            &config.media.mdb_path,
            console,
        );
        if !sections
            .generate_sections(created.template_id, created.campaign_id)
            .await?
        {
            tracing::warn!("⚠️ Not all sections were created, campaign is not sent");
            return Ok(());
        }

        // Step 4: send
        let response = service
            .send_campaign(SendCampaignRequest {
                campaign_id: created.campaign_id,
                // 只寄給語言與活動相同的訂閱者
                ignore_culture: false,
                send_type: CampaignSendType::Manual,
                settings: ManualSendSettings {
                    send_time: Local::now().naive_local(),
                },
                use_irated: false,
                use_rtr: true,
            })
            .await?;

        match response {
            Some(response) => {
                console.println(&format!(
                    "Effective subscribers: {}",
                    response.recipients_effective
                ))?;
                tracing::info!("📨 Campaign {} is being sent", created.campaign_id);
            }
            None => console.println("Something went wrong.")?,
        }

        Ok(())
    }
}
