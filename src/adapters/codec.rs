//! Mapping between the domain messages and the eMS document/literal XML.

use crate::adapters::xml::{local_part, XmlElement};
use crate::domain::messages::*;
use crate::domain::model::*;
use crate::utils::error::{EmsError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDateTime};
use uuid::Uuid;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A remote operation: its WSDL name, how the request body is written and how
/// the `…Result` element is read.
pub trait SoapOperation: Send + Sync {
    const NAME: &'static str;
    type Response: Send;

    /// Writes the operation specific children of `<request>`.
    fn write_request(&self, request: &mut XmlElement);

    fn read_response(result: &XmlElement) -> Result<Self::Response>;

    /// Replaces the agent language for this request.
    fn language_override(&self) -> Option<&str> {
        None
    }
}

// ─── Value helpers ──────────────────────────────────────────────────

fn text_or_empty(el: &XmlElement, name: &str) -> String {
    el.child_text(name).unwrap_or_default().to_string()
}

fn parse_guid_text(element: &str, text: &str) -> Result<Uuid> {
    Uuid::parse_str(text.trim()).map_err(|e| EmsError::decode(element, e.to_string()))
}

/// Missing GUIDs read as nil, like the .NET value type default.
fn read_guid(el: &XmlElement, name: &str) -> Result<Uuid> {
    match el.child_text(name) {
        Some(text) if !text.trim().is_empty() => parse_guid_text(name, text),
        _ => Ok(Uuid::nil()),
    }
}

fn read_i64(el: &XmlElement, name: &str) -> Result<i64> {
    match el.child_text(name) {
        Some(text) if !text.trim().is_empty() => text
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| EmsError::decode(name, e.to_string())),
        _ => Ok(0),
    }
}

pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn read_datetime(el: &XmlElement, name: &str) -> Result<Option<NaiveDateTime>> {
    match el.child_text(name) {
        Some(text) if !text.trim().is_empty() => parse_datetime(text)
            .map(Some)
            .ok_or_else(|| EmsError::decode(name, format!("invalid xs:dateTime '{}'", text))),
        _ => Ok(None),
    }
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// All children of a wrapper element such as `<Campaigns>`, regardless of
/// the item element name.
fn items<'a>(el: &'a XmlElement, container: &str) -> impl Iterator<Item = &'a XmlElement> + 'a {
    el.child(container)
        .into_iter()
        .flat_map(|c| c.children.iter())
        .filter(|item| !item.is_nil())
}

fn guid_ref(name: &str, guid: Uuid) -> XmlElement {
    XmlElement::new(name).with_child(XmlElement::new("Guid").with_text(guid.to_string()))
}

// ─── DTO mapping ────────────────────────────────────────────────────

pub fn write_field(field: &Field) -> XmlElement {
    let mut el = XmlElement::new("Field").with_attr("xsi:type", field.kind.type_name());
    el.push_text("InternalName", &field.internal_name);
    if let Some(value) = &field.untyped_value {
        el.push_text("UntypedValue", value);
    }
    el
}

pub fn read_field(el: &XmlElement) -> Result<Field> {
    let type_name = el.attr("type").map(local_part).unwrap_or("Field");
    let mut kind = FieldKind::from_type_name(type_name);

    if let FieldKind::Selection(objects) = &mut kind {
        for option in items(el, "SelectionObjects") {
            objects.push(SelectionFieldElement {
                caption: text_or_empty(option, "Caption"),
                internal_name: text_or_empty(option, "InternalName"),
            });
        }
    }

    Ok(Field {
        internal_name: text_or_empty(el, "InternalName"),
        untyped_value: el.child_text("UntypedValue").map(str::to_string),
        kind,
    })
}

fn read_fields(el: &XmlElement) -> Result<Vec<Field>> {
    items(el, "Fields").map(read_field).collect()
}

pub fn write_section(section: &Section) -> XmlElement {
    let mut el = XmlElement::new("Section");
    if let Some(created) = &section.created {
        el.push_text("Created", format_datetime(created));
    }
    el.push_text("SectionDefinitionName", &section.section_definition_name);
    el.push_text("StatisticName", &section.statistic_name);

    let mut fields = XmlElement::new("Fields");
    for field in &section.fields {
        fields.push(write_field(field));
    }
    el.push(fields);
    el
}

pub fn read_section(el: &XmlElement) -> Result<Section> {
    Ok(Section {
        created: read_datetime(el, "Created")?,
        section_definition_name: text_or_empty(el, "SectionDefinitionName"),
        statistic_name: text_or_empty(el, "StatisticName"),
        fields: read_fields(el)?,
    })
}

pub fn read_campaign(el: &XmlElement) -> Result<Campaign> {
    Ok(Campaign {
        guid: read_guid(el, "Guid")?,
        name: text_or_empty(el, "Name"),
        subject: text_or_empty(el, "Subject"),
        template_guid: read_guid(el, "TemplateGuid")?,
        template_name: text_or_empty(el, "TemplateName"),
        sender_address: text_or_empty(el, "SenderAddress"),
        sender_name: text_or_empty(el, "SenderName"),
        profile_name: text_or_empty(el, "ProfileName"),
        culture: text_or_empty(el, "Culture"),
        notify_address: text_or_empty(el, "NotifyAddress"),
        created: read_datetime(el, "Created")?,
        sections: items(el, "Sections").map(read_section).collect::<Result<_>>()?,
    })
}

fn write_trigger_mail(mail: &TriggerMail) -> XmlElement {
    let mut el = XmlElement::new("TriggerMail");
    el.push_text("SubscriberId", mail.subscriber_id);

    let mut sections = XmlElement::new("Sections");
    for section in &mail.sections {
        sections.push(write_section(section));
    }
    el.push(sections);

    let mut data = XmlElement::new("Data");
    for entry in &mail.data {
        let mut item = XmlElement::new("TriggerMailData");
        item.push_text("Key", &entry.key).push_text("Value", &entry.value);
        data.push(item);
    }
    el.push(data);
    el
}

fn write_subscriber(subscriber: &Subscriber) -> XmlElement {
    let mut fields = XmlElement::new("Fields");
    for field in &subscriber.fields {
        fields.push(write_field(field));
    }
    XmlElement::new("Subscriber").with_child(fields)
}

// ─── Operations ─────────────────────────────────────────────────────

impl SoapOperation for ProfilesRequest {
    const NAME: &'static str = "GetProfiles";
    type Response = ProfilesResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("Type", self.profile_type.as_str());
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let profiles = items(result, "Profiles")
            .map(|p| {
                Ok(Profile {
                    guid: read_guid(p, "Guid")?,
                    name: text_or_empty(p, "Name"),
                    profile_type: text_or_empty(p, "Type"),
                })
            })
            .collect::<Result<_>>()?;
        Ok(ProfilesResponse { profiles })
    }
}

impl SoapOperation for SubscriberFieldRequest {
    const NAME: &'static str = "GetSubscriberFields";
    type Response = SubscriberFieldResponse;

    fn write_request(&self, _request: &mut XmlElement) {}

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(SubscriberFieldResponse {
            fields: read_fields(result)?,
        })
    }
}

impl SoapOperation for SubscriberImportRequest {
    const NAME: &'static str = "ImportSubscribers";
    type Response = SubscriberImportResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push(guid_ref("Profile", self.profile_guid));
        request.push_text("DuplicateCriteria", &self.duplicate_criteria);

        let mut subscribers = XmlElement::new("Subscribers");
        for subscriber in &self.subscribers {
            subscribers.push(write_subscriber(subscriber));
        }
        request.push(subscribers);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(SubscriberImportResponse {
            imported: read_i64(result, "Imported")?,
            updated: read_i64(result, "Updated")?,
            errors: read_i64(result, "Errors")?,
            first_error_message: result
                .child_text("FirstErrorMessage")
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            imported_subscribers: items(result, "ImportedSubscribers")
                .map(|g| parse_guid_text("ImportedSubscribers", &g.text))
                .collect::<Result<_>>()?,
        })
    }
}

impl SoapOperation for CampaignsRequest {
    const NAME: &'static str = "GetCampaigns";
    type Response = CampaignsResponse;

    fn write_request(&self, request: &mut XmlElement) {
        if let Some(id) = self.id {
            request.push_text("Id", id);
        }
        if let Some(campaign_type) = self.campaign_type {
            request.push_text("Type", campaign_type.as_str());
        }
        if let Some(detail) = self.response_detail {
            request.push_text("ResponseDetail", detail.as_str());
        }
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(CampaignsResponse {
            campaigns: items(result, "Campaigns")
                .map(read_campaign)
                .collect::<Result<_>>()?,
        })
    }
}

impl SoapOperation for CopyCampaignRequest {
    const NAME: &'static str = "CopyCampaign";
    type Response = CopyCampaignResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignToCopy", self.campaign_to_copy);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(CopyCampaignResponse {
            new_campaign_guid: read_guid(result, "NewCampaignGuid")?,
        })
    }
}

impl SoapOperation for UpdateCampaignRequest {
    const NAME: &'static str = "UpdateCampaign";
    type Response = UpdateCampaignResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request
            .push_text("CampaignGuid", self.campaign_guid)
            .push_text("ProfileGuid", self.profile_guid)
            .push_text("Name", &self.name)
            .push_text("SenderAddress", &self.sender_address)
            .push_text("SenderName", &self.sender_name)
            .push_text("Subject", &self.subject);
    }

    fn read_response(_result: &XmlElement) -> Result<Self::Response> {
        Ok(UpdateCampaignResponse)
    }

    // 更新時沿用 campaign 本身的語系
    fn language_override(&self) -> Option<&str> {
        Some(self.language.as_str()).filter(|l| !l.is_empty())
    }
}

impl SoapOperation for SectionDefinitionRequest {
    const NAME: &'static str = "GetSectionDefinitions";
    type Response = SectionDefinitionResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push(guid_ref("Template", self.template_guid));
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let section_definitions = items(result, "SectionDefinitions")
            .map(|d| {
                Ok(SectionDefinition {
                    name: text_or_empty(d, "Name"),
                    fields: read_fields(d)?,
                })
            })
            .collect::<Result<_>>()?;
        Ok(SectionDefinitionResponse {
            section_definitions,
        })
    }
}

impl SoapOperation for CreateSectionRequest {
    const NAME: &'static str = "CreateSection";
    type Response = CreateSectionResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push(guid_ref("Campaign", self.campaign_guid));
        request.push(write_section(&self.section));
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(CreateSectionResponse {
            guid: read_guid(result, "Guid")?,
        })
    }
}

impl SoapOperation for MediaDbRequest {
    const NAME: &'static str = "GetMDBFiles";
    type Response = FileResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("Path", &self.path);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let files = items(result, "Files")
            .map(|f| {
                Ok(MdbFile {
                    id: read_guid(f, "Id")?,
                    name: text_or_empty(f, "Name"),
                    path: text_or_empty(f, "Path"),
                })
            })
            .collect::<Result<_>>()?;
        Ok(FileResponse { files })
    }
}

impl SoapOperation for FileUploadRequest {
    const NAME: &'static str = "UploadFileToMDB";
    type Response = FileUploadResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request
            .push_text("File", STANDARD.encode(&self.file))
            .push_text("Name", &self.name)
            .push_text("Path", &self.path);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(FileUploadResponse {
            file_id: read_guid(result, "FileId")?,
        })
    }
}

impl SoapOperation for SendCampaignRequest {
    const NAME: &'static str = "SendCampaign";
    type Response = SendCampaignResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request
            .push_text("CampaignId", self.campaign_id)
            .push_text("IgnoreCulture", self.ignore_culture)
            .push_text("SendType", self.send_type.as_str());

        let mut settings = XmlElement::new("Settings").with_attr("xsi:type", "ManualSendSettings");
        settings.push_text("SendTime", format_datetime(&self.settings.send_time));
        request.push(settings);

        request
            .push_text("UseIRated", self.use_irated)
            .push_text("UseRTR", self.use_rtr);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(SendCampaignResponse {
            recipients_effective: read_i64(result, "RecipientsEffective")?,
        })
    }
}

impl SoapOperation for SendTriggerMailsRequest {
    const NAME: &'static str = "SendTriggerMails";
    type Response = SendTriggerMailsResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignId", self.campaign_id);

        let mut mails = XmlElement::new("TriggerMails");
        for mail in &self.trigger_mails {
            mails.push(write_trigger_mail(mail));
        }
        request.push(mails);

        request
            .push_text("UseIRated", self.use_irated)
            .push_text("IgnoreCulture", self.ignore_culture)
            .push_text("UseRTR", self.use_rtr)
            .push_text(
                "ConsiderSubscriberExclusionCriterias",
                self.consider_subscriber_exclusion_criterias,
            )
            .push_text("ConsiderDOIStatus", self.consider_doi_status);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(SendTriggerMailsResponse {
            trigger_mail_ids: items(result, "TriggerMailIds")
                .map(|g| parse_guid_text("TriggerMailIds", &g.text))
                .collect::<Result<_>>()?,
        })
    }
}

impl SoapOperation for CampaignStatisticsRequest {
    const NAME: &'static str = "GetCampaignStatistics";
    type Response = CampaignStatisticsResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignGuid", self.campaign_guid);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(CampaignStatistics {
            total_mails: read_i64(result, "TotalMails")?,
            opened_mails: read_i64(result, "OpenedMails")?,
            bounce_mails: read_i64(result, "BounceMails")?,
            clicks: read_i64(result, "Clicks")?,
        })
    }
}

impl SoapOperation for CampaignBounceRequest {
    const NAME: &'static str = "GetBouncesOfCampaign";
    type Response = CampaignBounceResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignGuid", self.campaign_guid);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        Ok(CampaignBounceResponse {
            subscribers: items(result, "Subscribers")
                .map(|g| parse_guid_text("Subscribers", &g.text))
                .collect::<Result<_>>()?,
        })
    }
}

impl SoapOperation for CampaignClickRatesRequest {
    const NAME: &'static str = "GetClickRatesOfCampaign";
    type Response = CampaignClickRatesResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignGuid", self.campaign_guid);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let clicked_links = items(result, "ClickedLinks")
            .map(|l| {
                Ok(StatisticLink {
                    link_name: text_or_empty(l, "LinkName"),
                    clicks: read_i64(l, "Clicks")?,
                    url: text_or_empty(l, "Url"),
                })
            })
            .collect::<Result<_>>()?;
        Ok(CampaignClickRatesResponse { clicked_links })
    }
}

impl SoapOperation for CampaignOpeningRatesRequest {
    const NAME: &'static str = "GetOpeningRatesOfCampaign";
    type Response = CampaignOpeningRatesResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignGuid", self.campaign_guid);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let openings = items(result, "Openings")
            .map(|o| {
                Ok(StatisticOpenedMail {
                    reading_state: o
                        .child_text("ReadingState")
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                    opened_at: read_datetime(o, "OpenedAt")?,
                })
            })
            .collect::<Result<_>>()?;
        Ok(CampaignOpeningRatesResponse { openings })
    }
}

impl SoapOperation for MailClientTypesRequest {
    const NAME: &'static str = "GetMailClientTypesOfCampaign";
    type Response = MailClientTypesResponse;

    fn write_request(&self, request: &mut XmlElement) {
        request.push_text("CampaignId", self.campaign_id);
    }

    fn read_response(result: &XmlElement) -> Result<Self::Response> {
        let mail_client_types = items(result, "MailClientTypes")
            .map(|t| {
                Ok(MailClientTypeStatistic {
                    client_type: text_or_empty(t, "Type"),
                    amount: read_i64(t, "Amount")?,
                })
            })
            .collect::<Result<_>>()?;
        Ok(MailClientTypesResponse { mail_client_types })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request_of<R: SoapOperation>(request: &R) -> XmlElement {
        let mut el = XmlElement::new("request");
        request.write_request(&mut el);
        el
    }

    #[test]
    fn test_read_campaign() {
        let xml = r#"<GetCampaignsResult xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
          <Campaigns>
            <Campaign>
              <Guid>0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21</Guid>
              <Name>Spring</Name>
              <Subject>Hello</Subject>
              <TemplateGuid>5e5f8b3c-2a1d-4e7f-8c9b-0a1b2c3d4e5f</TemplateGuid>
              <Culture>de-AT</Culture>
              <Created>2024-03-01T09:30:00</Created>
              <Sections>
                <Section>
                  <SectionDefinitionName>Artikel</SectionDefinitionName>
                  <Fields><Field xsi:type="TextField"><InternalName>a_text</InternalName><UntypedValue>Hi</UntypedValue></Field></Fields>
                </Section>
              </Sections>
            </Campaign>
          </Campaigns>
        </GetCampaignsResult>"#;

        let result = XmlElement::parse(xml).unwrap();
        let response = CampaignsRequest::read_response(&result).unwrap();
        let campaign = &response.campaigns[0];

        assert_eq!(campaign.name, "Spring");
        assert_eq!(campaign.culture, "de-AT");
        assert_eq!(
            campaign.template_guid.to_string(),
            "5e5f8b3c-2a1d-4e7f-8c9b-0a1b2c3d4e5f"
        );
        assert_eq!(
            campaign.created,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(campaign.notify_address, "");
        assert_eq!(campaign.sections[0].fields[0], Field::text("a_text", "Hi"));
    }

    #[test]
    fn test_read_selection_field_definition() {
        let xml = r#"<GetSectionDefinitionsResult xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
          <SectionDefinitions>
            <SectionDefinition>
              <Name>banner</Name>
              <Fields>
                <Field xsi:type="SelectionField">
                  <InternalName>t_align</InternalName>
                  <SelectionObjects>
                    <SelectionFieldElement><Caption>Left</Caption><InternalName>l</InternalName></SelectionFieldElement>
                    <SelectionFieldElement><Caption>Right</Caption><InternalName>r</InternalName></SelectionFieldElement>
                  </SelectionObjects>
                </Field>
                <Field xsi:type="MdbField"><InternalName>t_img</InternalName></Field>
              </Fields>
            </SectionDefinition>
          </SectionDefinitions>
        </GetSectionDefinitionsResult>"#;

        let result = XmlElement::parse(xml).unwrap();
        let response = SectionDefinitionRequest::read_response(&result).unwrap();
        let definition = &response.section_definitions[0];

        assert_eq!(definition.name, "banner");
        assert_eq!(definition.fields.len(), 2);
        assert_eq!(definition.fields[0].selection_objects().len(), 2);
        assert_eq!(definition.fields[0].selection_objects()[1].caption, "Right");
        assert_eq!(definition.fields[1].kind, FieldKind::Mdb);
        assert_eq!(definition.fields[1].untyped_value, None);
    }

    #[test]
    fn test_write_create_section_request() {
        let campaign_guid = Uuid::parse_str("0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21").unwrap();
        let request = CreateSectionRequest {
            campaign_guid,
            section: Section {
                created: None,
                section_definition_name: "Artikel".to_string(),
                statistic_name: "my first article".to_string(),
                fields: vec![Field::text("a_hl", "[%mwr:briefanrede%]")],
            },
        };

        let xml = request_of(&request).to_xml_string();
        assert!(xml.contains("<Campaign><Guid>0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21</Guid></Campaign>"));
        assert!(xml.contains(
            "<Field xsi:type=\"TextField\"><InternalName>a_hl</InternalName><UntypedValue>[%mwr:briefanrede%]</UntypedValue></Field>"
        ));
        assert!(!xml.contains("<Created>"));
    }

    #[test]
    fn test_write_upload_encodes_base64() {
        let request = FileUploadRequest {
            file: b"PNG".to_vec(),
            name: "email.png".to_string(),
            path: "marketing-suite".to_string(),
        };

        let el = request_of(&request);
        assert_eq!(el.child_text("File"), Some("UE5H"));
        assert_eq!(el.child_text("Path"), Some("marketing-suite"));
    }

    #[test]
    fn test_write_send_campaign_settings() {
        let send_time = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let request = SendCampaignRequest {
            campaign_id: Uuid::nil(),
            ignore_culture: false,
            send_type: CampaignSendType::Manual,
            settings: ManualSendSettings { send_time },
            use_irated: false,
            use_rtr: true,
        };

        let el = request_of(&request);
        let settings = el.child("Settings").unwrap();
        assert_eq!(settings.attr("xsi:type"), Some("ManualSendSettings"));
        assert_eq!(settings.child_text("SendTime"), Some("2024-05-06T07:08:09"));
        assert_eq!(el.child_text("SendType"), Some("Manual"));
        assert_eq!(el.child_text("UseRTR"), Some("true"));
        assert_eq!(el.child_text("IgnoreCulture"), Some("false"));
    }

    #[test]
    fn test_update_campaign_language_override() {
        let mut request = UpdateCampaignRequest {
            campaign_guid: Uuid::new_v4(),
            language: "de-AT".to_string(),
            profile_guid: Uuid::new_v4(),
            name: "n".to_string(),
            sender_address: "s@example.com".to_string(),
            sender_name: "s".to_string(),
            subject: "x".to_string(),
        };
        assert_eq!(request.language_override(), Some("de-AT"));

        request.language.clear();
        assert_eq!(request.language_override(), None);
        assert!(request_of(&request).child("Language").is_none());
    }

    #[test]
    fn test_read_opening_without_reading_state() {
        let xml = r#"<GetOpeningRatesOfCampaignResult>
          <Openings>
            <StatisticOpenedMail><ReadingState>Read</ReadingState><OpenedAt>2024-01-02T03:04:05.123+01:00</OpenedAt></StatisticOpenedMail>
            <StatisticOpenedMail><OpenedAt>2024-01-02T03:04:05</OpenedAt></StatisticOpenedMail>
          </Openings>
        </GetOpeningRatesOfCampaignResult>"#;

        let result = XmlElement::parse(xml).unwrap();
        let response = CampaignOpeningRatesRequest::read_response(&result).unwrap();
        assert_eq!(response.openings[0].reading_state.as_deref(), Some("Read"));
        assert!(response.openings[0].opened_at.is_some());
        assert_eq!(response.openings[1].reading_state, None);
    }

    #[test]
    fn test_read_invalid_guid_is_decode_error() {
        let result = XmlElement::parse(
            "<CopyCampaignResult><NewCampaignGuid>not-a-guid</NewCampaignGuid></CopyCampaignResult>",
        )
        .unwrap();
        assert!(matches!(
            CopyCampaignRequest::read_response(&result),
            Err(EmsError::DecodeError { .. })
        ));
    }

    #[test]
    fn test_read_bounces_and_statistics() {
        let bounces = XmlElement::parse(
            "<R><Subscribers><guid>9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a</guid></Subscribers></R>",
        )
        .unwrap();
        let response = CampaignBounceRequest::read_response(&bounces).unwrap();
        assert_eq!(response.subscribers.len(), 1);

        let stats = XmlElement::parse(
            "<R><TotalMails>120</TotalMails><OpenedMails>80</OpenedMails><BounceMails>3</BounceMails><Clicks>17</Clicks></R>",
        )
        .unwrap();
        let statistics = CampaignStatisticsRequest::read_response(&stats).unwrap();
        assert_eq!(statistics.total_mails, 120);
        assert_eq!(statistics.clicks, 17);
    }

    #[test]
    fn test_write_send_trigger_mails_request() {
        let subscriber_id = Uuid::parse_str("9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a").unwrap();
        let image_id = Uuid::parse_str("5e5f8b3c-2a1d-4e7f-8c9b-0a1b2c3d4e5f").unwrap();
        let request = SendTriggerMailsRequest {
            campaign_id: Uuid::nil(),
            trigger_mails: vec![TriggerMail {
                subscriber_id,
                sections: vec![Section {
                    created: None,
                    section_definition_name: "Artikel".to_string(),
                    statistic_name: "Trigger mail".to_string(),
                    fields: vec![
                        Field::text("a_text", "[%mwtm:description%]"),
                        Field::mdb("a_img", image_id),
                    ],
                }],
                data: vec![
                    TriggerMailData {
                        key: "description".to_string(),
                        value: "Trigger mail text".to_string(),
                    },
                    TriggerMailData {
                        key: "mailsubject".to_string(),
                        value: "Testbetreff".to_string(),
                    },
                ],
            }],
            use_irated: true,
            ignore_culture: true,
            use_rtr: false,
            consider_subscriber_exclusion_criterias: false,
            consider_doi_status: true,
        };

        let el = request_of(&request);
        let mail = el
            .child("TriggerMails")
            .and_then(|m| m.child("TriggerMail"))
            .unwrap();
        assert_eq!(
            mail.child_text("SubscriberId"),
            Some("9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a")
        );

        let section = mail.child("Sections").and_then(|s| s.child("Section")).unwrap();
        assert_eq!(section.child_text("SectionDefinitionName"), Some("Artikel"));
        let fields: Vec<_> = section.child("Fields").unwrap().children_named("Field").collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].attr("xsi:type"), Some("TextField"));
        assert_eq!(fields[1].attr("xsi:type"), Some("MdbField"));
        assert_eq!(fields[1].child_text("UntypedValue"), Some("5e5f8b3c-2a1d-4e7f-8c9b-0a1b2c3d4e5f"));

        let data: Vec<_> = mail.child("Data").unwrap().children_named("TriggerMailData").collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].child_text("Key"), Some("mailsubject"));
        assert_eq!(data[1].child_text("Value"), Some("Testbetreff"));

        assert_eq!(el.child_text("UseIRated"), Some("true"));
        assert_eq!(el.child_text("IgnoreCulture"), Some("true"));
        assert_eq!(el.child_text("UseRTR"), Some("false"));
        assert_eq!(el.child_text("ConsiderSubscriberExclusionCriterias"), Some("false"));
        assert_eq!(el.child_text("ConsiderDOIStatus"), Some("true"));

        let xml = el.to_xml_string();
        assert!(xml.contains(
            "<TriggerMailData><Key>description</Key><Value>Trigger mail text</Value></TriggerMailData>"
        ));
    }

    #[test]
    fn test_write_import_subscribers_request() {
        let profile_guid = Uuid::parse_str("0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21").unwrap();
        let request = SubscriberImportRequest {
            profile_guid,
            duplicate_criteria: "email".to_string(),
            subscribers: vec![
                Subscriber {
                    fields: vec![
                        Field::text("email", "max.mustermann@example.com"),
                        Field::text("FirstName", "Max"),
                    ],
                },
                Subscriber {
                    fields: vec![Field::text("email", "john.doe@example.com")],
                },
            ],
        };

        let el = request_of(&request);
        assert_eq!(
            el.child("Profile").and_then(|p| p.child_text("Guid")),
            Some("0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21")
        );
        assert_eq!(el.child_text("DuplicateCriteria"), Some("email"));

        let subscribers: Vec<_> = el.child("Subscribers").unwrap().children_named("Subscriber").collect();
        assert_eq!(subscribers.len(), 2);

        let xml = el.to_xml_string();
        assert!(xml.starts_with(
            "<request><Profile><Guid>0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21</Guid></Profile><DuplicateCriteria>email</DuplicateCriteria>"
        ));
        assert!(xml.contains(
            "<Subscriber><Fields><Field xsi:type=\"TextField\"><InternalName>email</InternalName><UntypedValue>max.mustermann@example.com</UntypedValue></Field>"
        ));
        assert!(xml.contains(
            "<Field xsi:type=\"TextField\"><InternalName>FirstName</InternalName><UntypedValue>Max</UntypedValue></Field>"
        ));
    }

    #[test]
    fn test_read_profiles_and_subscriber_fields() {
        let profiles = XmlElement::parse(
            r#"<GetProfilesResult>
              <Profiles>
                <Profile><Guid>0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21</Guid><Name>Newsletter</Name><Type>Static</Type></Profile>
                <Profile><Guid>9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a</Guid><Name>VIP</Name><Type>Static</Type></Profile>
              </Profiles>
            </GetProfilesResult>"#,
        )
        .unwrap();
        let response = ProfilesRequest::read_response(&profiles).unwrap();
        assert_eq!(response.profiles.len(), 2);
        assert_eq!(response.profiles[0].name, "Newsletter");
        assert_eq!(response.profiles[0].profile_type, "Static");
        assert_eq!(
            response.profiles[1].guid.to_string(),
            "9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a"
        );

        let fields = XmlElement::parse(
            r#"<GetSubscriberFieldsResult xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
              <Fields>
                <Field xsi:type="TextField"><InternalName>email</InternalName></Field>
                <Field xsi:type="q1:BooleanField"><InternalName>newsletter</InternalName></Field>
                <Field xsi:type="GeoField"><InternalName>location</InternalName></Field>
              </Fields>
            </GetSubscriberFieldsResult>"#,
        )
        .unwrap();
        let response = SubscriberFieldRequest::read_response(&fields).unwrap();
        assert_eq!(response.fields.len(), 3);
        assert_eq!(response.fields[0].internal_name, "email");
        assert_eq!(response.fields[1].kind, FieldKind::Boolean);
        assert_eq!(response.fields[2].kind, FieldKind::Other("GeoField".to_string()));
    }

    #[test]
    fn test_read_click_rates_and_mail_client_types() {
        let clicks = XmlElement::parse(
            r#"<GetClickRatesOfCampaignResult>
              <ClickedLinks>
                <StatisticLink><LinkName>Homepage</LinkName><Clicks>12</Clicks><Url>https://www.mailworx.info</Url></StatisticLink>
                <StatisticLink><LinkName>Blog</LinkName><Clicks>3</Clicks><Url>https://www.mailworx.info/blog</Url></StatisticLink>
              </ClickedLinks>
            </GetClickRatesOfCampaignResult>"#,
        )
        .unwrap();
        let response = CampaignClickRatesRequest::read_response(&clicks).unwrap();
        assert_eq!(response.clicked_links.len(), 2);
        assert_eq!(response.clicked_links[0].link_name, "Homepage");
        assert_eq!(response.clicked_links[0].clicks, 12);
        assert_eq!(response.clicked_links[1].url, "https://www.mailworx.info/blog");

        let types = XmlElement::parse(
            r#"<GetMailClientTypesOfCampaignResult>
              <MailClientTypes>
                <MailClientTypeStatistic><Type>Desktop</Type><Amount>5</Amount></MailClientTypeStatistic>
                <MailClientTypeStatistic><Type>Mobile</Type><Amount>7</Amount></MailClientTypeStatistic>
              </MailClientTypes>
            </GetMailClientTypesOfCampaignResult>"#,
        )
        .unwrap();
        let response = MailClientTypesRequest::read_response(&types).unwrap();
        assert_eq!(response.mail_client_types.len(), 2);
        assert_eq!(response.mail_client_types[1].client_type, "Mobile");
        assert_eq!(response.mail_client_types[1].amount, 7);

        let request = request_of(&MailClientTypesRequest {
            campaign_id: Uuid::nil(),
        });
        assert_eq!(
            request.child_text("CampaignId"),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }
}
