use super::DemoContext;
use crate::core::report;
use crate::domain::messages::CampaignsRequest;
use crate::domain::model::{CampaignResponseDetailInfo, CampaignType};
use crate::domain::ports::{AssetStorage, Demo, EmsService};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Lists the campaigns of one type, as text or JSON.
pub struct ListCampaignsDemo<E, S> {
    ctx: DemoContext<E, S>,
    campaign_type: CampaignType,
    json: bool,
}

impl<E: EmsService, S: AssetStorage> ListCampaignsDemo<E, S> {
    pub fn new(ctx: DemoContext<E, S>, campaign_type: CampaignType, json: bool) -> Self {
        Self {
            ctx,
            campaign_type,
            json,
        }
    }
}

#[async_trait]
impl<E: EmsService, S: AssetStorage> Demo for ListCampaignsDemo<E, S> {
    fn name(&self) -> &'static str {
        "List campaigns"
    }

    async fn run(&self) -> Result<()> {
        let response = self
            .ctx
            .service
            .get_campaigns(CampaignsRequest {
                id: None,
                campaign_type: Some(self.campaign_type),
                response_detail: Some(CampaignResponseDetailInfo::BasicInformation),
            })
            .await?;
        let campaigns = response.map(|r| r.campaigns).unwrap_or_default();

        tracing::debug!(
            "Loaded {} {} campaigns",
            campaigns.len(),
            self.campaign_type.as_str()
        );

        let output = if self.json {
            format!("{}\n", serde_json::to_string_pretty(&campaigns)?)
        } else {
            report::campaign_list(&campaigns)
        };
        self.ctx.console.print(&output)
    }
}
