use super::DemoContext;
use crate::core::section_creator::{find_definition, FieldValue, SectionCreator, SectionTemplate};
use crate::domain::messages::{CampaignsRequest, SectionDefinitionRequest, SendTriggerMailsRequest};
use crate::domain::model::{CampaignResponseDetailInfo, TriggerMail, TriggerMailData};
use crate::domain::ports::{AssetStorage, Demo, EmsService};
use crate::utils::error::Result;
use crate::utils::validation::validate_guid;
use async_trait::async_trait;
use uuid::Uuid;

// [%mwtm:description%] 會被 key 為 description 的資料取代
const TRIGGER_ARTICLE: SectionTemplate = SectionTemplate {
    definition_name: "Artikel",
    statistic_name: "Trigger mail",
    fields: &[
        (
            "a_text",
            FieldValue::Text("This is some text in the trigger mail: [%mwtm:description%]"),
        ),
        (
            "a_img",
            FieldValue::Image {
                asset: "email.png",
                file_name: "email.png",
            },
        ),
    ],
};

pub fn trigger_mail_data() -> Vec<TriggerMailData> {
    vec![
        TriggerMailData {
            key: "description".to_string(),
            value: "This text will be inserted in the trigger mail".to_string(),
        },
        TriggerMailData {
            key: "mailsubject".to_string(),
            value: "Testbetreff".to_string(),
        },
    ]
}

/// Sends one trigger mail with custom data to a single subscriber.
pub struct TriggerMailDemo<E, S> {
    ctx: DemoContext<E, S>,
}

impl<E: EmsService, S: AssetStorage> TriggerMailDemo<E, S> {
    pub fn new(ctx: DemoContext<E, S>) -> Self {
        Self { ctx }
    }

    async fn template_of(&self, campaign_id: Uuid) -> Result<Option<Uuid>> {
        let response = self
            .ctx
            .service
            .get_campaigns(CampaignsRequest {
                id: Some(campaign_id),
                campaign_type: None,
                response_detail: Some(CampaignResponseDetailInfo::Sections),
            })
            .await?;

        Ok(response
            .and_then(|r| r.campaigns.into_iter().next())
            .map(|campaign| campaign.template_guid)
            .filter(|template_id| !template_id.is_nil()))
    }
}

#[async_trait]
impl<E: EmsService, S: AssetStorage> Demo for TriggerMailDemo<E, S> {
    fn name(&self) -> &'static str {
        "Send a trigger mail"
    }

    async fn run(&self) -> Result<()> {
        let config = &self.ctx.config.trigger_mail;
        let campaign_id = validate_guid("trigger_mail.campaign_id", &config.campaign_id)?;
        let subscriber_id = validate_guid("trigger_mail.subscriber_id", &config.subscriber_id)?;
        let service = self.ctx.service.as_ref();
        let console = self.ctx.console.as_ref();
        console.println("")?;

        let Some(template_id) = self.template_of(campaign_id).await? else {
            console.println(&format!("No campaign found with id {}", campaign_id))?;
            return Ok(());
        };

        let definitions = service
            .get_section_definitions(SectionDefinitionRequest {
                template_guid: template_id,
            })
            .await?
            .map(|r| r.section_definitions)
            .unwrap_or_default();

        let Some(definition) = find_definition(&definitions, TRIGGER_ARTICLE.definition_name)
        else {
            console.println("The template has no 'Artikel' section definition.")?;
            return Ok(());
        };

        let creator = SectionCreator::new(
            service,
            self.ctx.storage.as_ref(),
            &self.ctx.config.media.mdb_path,
            console,
        );
        let section = creator.build_section(&TRIGGER_ARTICLE, definition).await?;

        let response = service
            .send_trigger_mails(SendTriggerMailsRequest {
                campaign_id,
                trigger_mails: vec![TriggerMail {
                    subscriber_id,
                    sections: vec![section],
                    data: trigger_mail_data(),
                }],
                use_irated: true,
                ignore_culture: true,
                use_rtr: false,
                consider_subscriber_exclusion_criterias: false,
                consider_doi_status: true,
            })
            .await?;

        match response {
            Some(response) => {
                tracing::info!("📨 Trigger mail ids: {:?}", response.trigger_mail_ids);
                console.println("Trigger mail was sent successfully.")?;
            }
            None => console.println("Something went wrong.")?,
        }
        console.println("")?;

        Ok(())
    }
}
