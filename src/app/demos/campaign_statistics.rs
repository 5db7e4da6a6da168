use super::DemoContext;
use crate::core::report;
use crate::domain::messages::*;
use crate::domain::model::{Campaign, CampaignResponseDetailInfo};
use crate::domain::ports::{AssetStorage, Demo, EmsService};
use crate::utils::error::Result;
use crate::utils::validation::validate_guid;
use async_trait::async_trait;

/// Prints general info and all statistics of one campaign.
pub struct CampaignStatisticsDemo<E, S> {
    ctx: DemoContext<E, S>,
}

impl<E: EmsService, S: AssetStorage> CampaignStatisticsDemo<E, S> {
    pub fn new(ctx: DemoContext<E, S>) -> Self {
        Self { ctx }
    }

    async fn print_statistics(&self, campaign: &Campaign) -> Result<()> {
        let service = self.ctx.service.as_ref();
        let console = self.ctx.console.as_ref();
        let guid = campaign.guid;
        let name = campaign.name.as_str();

        console.print(&report::general_info(campaign))?;

        let statistics = service
            .get_campaign_statistics(CampaignStatisticsRequest {
                campaign_guid: guid,
            })
            .await?;
        console.print(&report::statistics(name, statistics.as_ref()))?;

        let bounces = service
            .get_bounces_of_campaign(CampaignBounceRequest {
                campaign_guid: guid,
            })
            .await?
            .map(|r| r.subscribers)
            .unwrap_or_default();
        console.print(&report::bounces(name, &bounces))?;

        let clicks = service
            .get_click_rates_of_campaign(CampaignClickRatesRequest {
                campaign_guid: guid,
            })
            .await?
            .map(|r| r.clicked_links)
            .unwrap_or_default();
        console.print(&report::click_rates(name, &clicks))?;

        let openings = service
            .get_opening_rates_of_campaign(CampaignOpeningRatesRequest {
                campaign_guid: guid,
            })
            .await?
            .map(|r| r.openings)
            .unwrap_or_default();
        console.print(&report::opening_rates(name, &openings))?;

        let client_types = service
            .get_mail_client_types_of_campaign(MailClientTypesRequest { campaign_id: guid })
            .await?
            .map(|r| r.mail_client_types)
            .unwrap_or_default();
        console.print(&report::mail_client_types(name, &client_types))?;

        Ok(())
    }
}

#[async_trait]
impl<E: EmsService, S: AssetStorage> Demo for CampaignStatisticsDemo<E, S> {
    fn name(&self) -> &'static str {
        "Read campaign statistics"
    }

    async fn run(&self) -> Result<()> {
        let console = self.ctx.console.as_ref();
        let campaign_id = validate_guid(
            "statistics.campaign_id",
            &self.ctx.config.statistics.campaign_id,
        )?;
        console.println("")?;

        // BasicInformation: 不含 sections 與 links
        let response = self
            .ctx
            .service
            .get_campaigns(CampaignsRequest {
                id: Some(campaign_id),
                campaign_type: None,
                response_detail: Some(CampaignResponseDetailInfo::BasicInformation),
            })
            .await?;

        match response.and_then(|r| r.campaigns.into_iter().next()) {
            Some(campaign) => self.print_statistics(&campaign).await,
            None => {
                console.println(&format!("No campaign found with id {}", campaign_id))?;
                Ok(())
            }
        }
    }
}
