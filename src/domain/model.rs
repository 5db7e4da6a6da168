use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Login data sent with every request.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityContext {
    /// Account name (Mandant) of the eMS.
    pub account: String,
    pub username: String,
    pub password: String,
    /// Name of the registered application.
    pub source: String,
}

impl fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityContext")
            .field("account", &self.account)
            .field("username", &self.username)
            .field("password", &"***")
            .field("source", &self.source)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignType {
    InWork,
    Sent,
    All,
}

impl CampaignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::InWork => "InWork",
            CampaignType::Sent => "Sent",
            CampaignType::All => "All",
        }
    }
}

/// How much of a campaign `GetCampaigns` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignResponseDetailInfo {
    /// Almost all details, without links and sections.
    BasicInformation,
    Sections,
    Links,
    /// Which sections are restricted to which target groups.
    SectionProfiles,
}

impl CampaignResponseDetailInfo {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignResponseDetailInfo::BasicInformation => "BasicInformation",
            CampaignResponseDetailInfo::Sections => "Sections",
            CampaignResponseDetailInfo::Links => "Links",
            CampaignResponseDetailInfo::SectionProfiles => "SectionProfiles",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub guid: Uuid,
    pub name: String,
    pub subject: String,
    pub template_guid: Uuid,
    pub template_name: String,
    pub sender_address: String,
    pub sender_name: String,
    pub profile_name: String,
    pub culture: String,
    pub notify_address: String,
    pub created: Option<NaiveDateTime>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub created: Option<NaiveDateTime>,
    pub section_definition_name: String,
    pub statistic_name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFieldElement {
    pub caption: String,
    pub internal_name: String,
}

/// The field types defined by the eMS template. The wire name is the `xsi:type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    /// Reference to a file in the media database; the value is the file GUID.
    Mdb,
    Selection(Vec<SelectionFieldElement>),
    Boolean,
    DateTime,
    Number,
    Other(String),
}

impl FieldKind {
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Text => "TextField",
            FieldKind::Mdb => "MdbField",
            FieldKind::Selection(_) => "SelectionField",
            FieldKind::Boolean => "BooleanField",
            FieldKind::DateTime => "DateTimeField",
            FieldKind::Number => "NumberField",
            FieldKind::Other(name) => name,
        }
    }

    pub fn from_type_name(name: &str) -> Self {
        match name {
            "TextField" => FieldKind::Text,
            "MdbField" => FieldKind::Mdb,
            "SelectionField" => FieldKind::Selection(Vec::new()),
            "BooleanField" => FieldKind::Boolean,
            "DateTimeField" => FieldKind::DateTime,
            "NumberField" => FieldKind::Number,
            other => FieldKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Must match the internal name of the field in the section definition.
    pub internal_name: String,
    pub untyped_value: Option<String>,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(internal_name: &str, value: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.to_string(),
            untyped_value: Some(value.into()),
            kind: FieldKind::Text,
        }
    }

    pub fn mdb(internal_name: &str, file_id: Uuid) -> Self {
        Self {
            internal_name: internal_name.to_string(),
            untyped_value: Some(file_id.to_string()),
            kind: FieldKind::Mdb,
        }
    }

    pub fn selection_objects(&self) -> &[SelectionFieldElement] {
        match &self.kind {
            FieldKind::Selection(objects) => objects,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdbFile {
    pub id: Uuid,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMailData {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerMail {
    pub subscriber_id: Uuid,
    pub sections: Vec<Section>,
    pub data: Vec<TriggerMailData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignSendType {
    Manual,
    AbSplit,
}

impl CampaignSendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignSendType::Manual => "Manual",
            CampaignSendType::AbSplit => "ABSplit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSendSettings {
    pub send_time: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStatistics {
    pub total_mails: i64,
    pub opened_mails: i64,
    pub bounce_mails: i64,
    pub clicks: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticLink {
    pub link_name: String,
    pub clicks: i64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticOpenedMail {
    /// `None` when the service did not report a reading state.
    pub reading_state: Option<String>,
    pub opened_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailClientTypeStatistic {
    pub client_type: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileType {
    Static,
    Dynamic,
    All,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Static => "Static",
            ProfileType::Dynamic => "Dynamic",
            ProfileType::All => "All",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub guid: Uuid,
    pub name: String,
    pub profile_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub fields: Vec<Field>,
}
