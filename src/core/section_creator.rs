use crate::core::media::MediaUploader;
use crate::core::report::{self, Console};
use crate::domain::messages::{CreateSectionRequest, SectionDefinitionRequest};
use crate::domain::model::{Field, Section, SectionDefinition};
use crate::domain::ports::{AssetStorage, EmsService};
use crate::utils::error::Result;
use crate::utils::validation::require_guid;
use chrono::Local;
use uuid::Uuid;

/// Value source for one field of a generated section.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue {
    Text(&'static str),
    /// Local asset uploaded to the media database under `file_name`.
    Image {
        asset: &'static str,
        file_name: &'static str,
    },
}

/// Content of a section built from a definition of the campaign template.
#[derive(Debug, Clone, Copy)]
pub struct SectionTemplate {
    pub definition_name: &'static str,
    pub statistic_name: &'static str,
    pub fields: &'static [(&'static str, FieldValue)],
}

// 文字中的雙引號必須 HTML 編碼，連結只能用 <a href>
const ARTICLE_TEXT: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy &quot;eirmod tempor&quot; invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. \
At vero eos et accusam et <a href=\"www.mailworx.info\">justo</a> duo dolores et ea rebum. Stet clita kasd gubergren, no sea takimata sanctus est Lorem ipsum dolor sit amet. \
Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. \
At vero eos et accusam et justo duo dolores et ea rebum. <a href=\"http://sys.mailworx.info/sys/Form.aspx?frm=4bf54eb6-97a6-4f95-a803-5013f0c62b35\">Stet</a> clita kasd gubergren, no sea takimata sanctus est Lorem ipsum dolor sit amet.";

const BANNER_TEXT: &str = "Developed in the <a href=\"http://www.mailworx.info/en/\">mailworx</a> laboratory the intelligent and auto-adaptive algorithm <a href=\"http://www.mailworx.info/en/irated-technology\">iRated®</a> \
brings real progress to your email marketing. It is more than a target group oriented approach. \
iRated® sorts the sections of your emails automatically depending on the current preferences of every single subscriber. \
This helps you send individual emails even when you don't know much about the person behind the email address.";

const LEFT_COLUMN_TEXT: &str = "Ut wisi enim ad minim veniam, quis nostrud exerci tation ullamcorper suscipit lobortis nisl ut aliquip ex ea commodo consequat. \
Duis autem vel eum iriure dolor in hendrerit in vulputate velit esse molestie consequat, vel illum dolore eu feugiat nulla facilisis at vero eros et accumsan et iusto odio dignissim, \
qui blandit praesent luptatum zzril delenit augue duis dolore te feugait nulla facilisi.";

const RIGHT_COLUMN_TEXT: &str = "Nam liber tempor cum soluta nobis eleifend option congue nihil imperdiet doming id quod mazim placerat facer possim assum. Lorem ipsum dolor sit amet, consectetuer adipiscing elit, \
sed diam nonummy nibh euismod tincidunt ut laoreet dolore magna aliquam erat volutpat. Ut wisi enim ad minim veniam, quis nostrud exerci tation ullamcorper suscipit lobortis nisl ut aliquip ex ea commodo.";

pub const ARTICLE: SectionTemplate = SectionTemplate {
    definition_name: "Artikel",
    statistic_name: "my first article",
    fields: &[
        ("a_text", FieldValue::Text(ARTICLE_TEXT)),
        (
            "a_img",
            FieldValue::Image {
                asset: "email.png",
                file_name: "email.png",
            },
        ),
        ("a_hl", FieldValue::Text("[%mwr:briefanrede%]")),
    ],
};

pub const BANNER: SectionTemplate = SectionTemplate {
    definition_name: "banner",
    statistic_name: "banner",
    fields: &[
        (
            "t_img",
            FieldValue::Image {
                asset: "logo.png",
                file_name: "eMS-logo.png",
            },
        ),
        ("t_text", FieldValue::Text(BANNER_TEXT)),
    ],
};

pub const TWO_COLUMNS: SectionTemplate = SectionTemplate {
    definition_name: "2 Spaltiger Beitrag",
    statistic_name: "section with two columns",
    fields: &[
        (
            "c2_l_img",
            FieldValue::Image {
                asset: "messaging.png",
                file_name: "messaging.png",
            },
        ),
        ("c2_l_text", FieldValue::Text(LEFT_COLUMN_TEXT)),
        (
            "c2_r_img",
            FieldValue::Image {
                asset: "events.png",
                file_name: "events.png",
            },
        ),
        ("c2_r_text", FieldValue::Text(RIGHT_COLUMN_TEXT)),
    ],
};

/// Case-insensitive lookup of a section definition by name.
pub fn find_definition<'d>(
    definitions: &'d [SectionDefinition],
    name: &str,
) -> Option<&'d SectionDefinition> {
    definitions
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name))
}

/// Adds sections to a campaign, based on the section definitions of its template.
pub struct SectionCreator<'a, E: EmsService, S: AssetStorage> {
    service: &'a E,
    media: MediaUploader<'a, E, S>,
    console: &'a Console,
}

impl<'a, E: EmsService, S: AssetStorage> SectionCreator<'a, E, S> {
    pub fn new(service: &'a E, storage: &'a S, mdb_path: &'a str, console: &'a Console) -> Self {
        Self {
            service,
            media: MediaUploader::new(service, storage, mdb_path),
            console,
        }
    }

    /// Creates the article, banner and two column sections in the campaign.
    ///
    /// Returns `true` only if the template has section definitions and every
    /// created section got a GUID back.
    pub async fn generate_sections(&self, template_id: Uuid, campaign_id: Uuid) -> Result<bool> {
        require_guid("templateId", template_id)?;
        require_guid("campaignId", campaign_id)?;

        let definitions = match self.load_section_definitions(template_id).await? {
            Some(definitions) if !definitions.is_empty() => definitions,
            _ => {
                tracing::warn!("⚠️ No section definitions for template {}", template_id);
                return Ok(false);
            }
        };

        let mut sections_created = true;
        for template in [ARTICLE, BANNER, TWO_COLUMNS] {
            let Some(definition) = find_definition(&definitions, template.definition_name) else {
                tracing::debug!("Template has no '{}' definition", template.definition_name);
                continue;
            };

            let section = self.build_section(&template, definition).await?;
            let response = self
                .service
                .create_section(CreateSectionRequest {
                    campaign_guid: campaign_id,
                    section,
                })
                .await?;

            let created = response.map_or(false, |r| !r.guid.is_nil());
            tracing::info!(
                "🧩 Section '{}' created: {}",
                template.statistic_name,
                created
            );
            sections_created = sections_created && created;
        }

        Ok(sections_created)
    }

    /// Loads the section definitions of a template and prints their structure.
    pub async fn load_section_definitions(
        &self,
        template_id: Uuid,
    ) -> Result<Option<Vec<SectionDefinition>>> {
        let response = self
            .service
            .get_section_definitions(SectionDefinitionRequest {
                template_guid: template_id,
            })
            .await?;

        match response {
            Some(response) => {
                self.console
                    .print(&report::section_definitions(&response.section_definitions))?;
                Ok(Some(response.section_definitions))
            }
            None => Ok(None),
        }
    }

    /// Fills the fields the definition actually has; images without an id are left out.
    pub async fn build_section(
        &self,
        template: &SectionTemplate,
        definition: &SectionDefinition,
    ) -> Result<Section> {
        let mut fields = Vec::new();

        for field in &definition.fields {
            let Some((_, value)) = template
                .fields
                .iter()
                .find(|(name, _)| *name == field.internal_name)
            else {
                continue;
            };

            match *value {
                FieldValue::Text(text) => fields.push(Field::text(&field.internal_name, text)),
                FieldValue::Image { asset, file_name } => {
                    let file_id = self.media.upload_file(asset, file_name).await?;
                    if !file_id.is_nil() {
                        fields.push(Field::mdb(&field.internal_name, file_id));
                    }
                }
            }
        }

        Ok(Section {
            created: Some(Local::now().naive_local()),
            section_definition_name: definition.name.clone(),
            statistic_name: template.statistic_name.to_string(),
            fields,
        })
    }
}
