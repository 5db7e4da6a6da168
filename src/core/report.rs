//! Console output of the demos.

use crate::domain::model::*;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const STARS: &str = "************************************************************";
const DASHES: &str = "------------------------------------------------------------";

/// Destination of everything the demos print.
pub struct Console {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }

    pub fn print(&self, text: &str) -> Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "console lock poisoned"))?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    pub fn println(&self, line: &str) -> Result<()> {
        self.print(&format!("{}\n", line))
    }
}

/// In-memory console sink, cloned handles share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "buffer lock poisoned"))?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn format_created(created: &Option<chrono::NaiveDateTime>) -> String {
    created
        .map(|c| c.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Joins the lines of a block, every line ends with a newline.
fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Title and star line of a statistics block.
fn titled(title: String) -> Vec<String> {
    vec![title, STARS.to_string()]
}

// 區塊結尾：星號加一行空白
fn close(mut lines: Vec<String>) -> String {
    lines.push(STARS.to_string());
    lines.push(String::new());
    block(lines)
}

pub fn general_info(campaign: &Campaign) -> String {
    let mut lines = titled(format!(
        "General info of {}, created {}",
        campaign.name,
        format_created(&campaign.created)
    ));
    lines.extend([
        format!("Subject: {}", campaign.subject),
        format!("Template name: {}", campaign.template_name),
        format!("Sender: {}", campaign.sender_address),
        format!("Profile name: {}", campaign.profile_name),
        format!("Culture: {}", campaign.culture),
        format!("Notify address: {}", campaign.notify_address),
    ]);
    close(lines)
}

pub fn statistics(campaign_name: &str, statistics: Option<&CampaignStatistics>) -> String {
    let mut lines = titled(format!("Campaign statistics of {}", campaign_name));
    match statistics {
        Some(stats) => lines.extend([
            format!("Sent mails: {}", stats.total_mails),
            format!("Opened mails: {}", stats.opened_mails),
            format!("Bounce mails: {}", stats.bounce_mails),
            format!("Amount of clicks: {}", stats.clicks),
        ]),
        None => lines.push("No statistics available.".to_string()),
    }
    close(lines)
}

pub fn bounces(campaign_name: &str, subscribers: &[Uuid]) -> String {
    let mut lines = titled(format!("Bounces statistics of {}", campaign_name));
    lines.push("Subscribers:".to_string());
    lines.extend(
        subscribers
            .iter()
            .map(|subscriber_id| format!("Guid of the subscriber: {}", subscriber_id)),
    );
    close(lines)
}

pub fn click_rates(campaign_name: &str, links: &[StatisticLink]) -> String {
    let mut lines = titled(format!("Click rates statistics of {}", campaign_name));
    lines.push("Clicked links:".to_string());
    for link in links {
        lines.extend([
            format!("Linkname: {}", link.link_name),
            format!("Clicks: {}", link.clicks),
            format!("Url: {}", link.url),
            DASHES.to_string(),
        ]);
    }
    close(lines)
}

pub fn opening_rates(campaign_name: &str, openings: &[StatisticOpenedMail]) -> String {
    let mut lines = titled(format!("Opening rates statistics of {}", campaign_name));
    lines.push("Opened mails:".to_string());
    for opening in openings {
        lines.extend([
            format!(
                "State: {}",
                opening.reading_state.as_deref().unwrap_or_default()
            ),
            format!("Opened at: {}", format_created(&opening.opened_at)),
            format!(
                "Reading state specified: {}",
                opening.reading_state.is_some()
            ),
            DASHES.to_string(),
        ]);
    }
    close(lines)
}

pub fn mail_client_types(campaign_name: &str, types: &[MailClientTypeStatistic]) -> String {
    let mut lines = titled(format!("Mail client types info of {}", campaign_name));
    for statistic in types {
        lines.extend([
            format!("Type: {}", statistic.client_type),
            format!("Amount of openings: {}", statistic.amount),
            DASHES.to_string(),
        ]);
    }
    close(lines)
}

/// Structure of each section definition; needed to build sections by hand.
pub fn section_definitions(definitions: &[SectionDefinition]) -> String {
    let mut lines =
        vec!["-------------------------------Section definitions----------------------".to_string()];

    for (i, definition) in definitions.iter().enumerate() {
        lines.push(format!(
            "    +++++++++++++++ Section definition {} +++++++++++++++    ",
            i + 1
        ));
        lines.push(format!("    Name:{}", definition.name));

        if definition.fields.is_empty() {
            lines.push("    No fields found".to_string());
        }

        for (j, field) in definition.fields.iter().enumerate() {
            lines.push(format!("        *********** Field {} ***********", j + 1));
            lines.push(format!("        Name: {}", field.internal_name));
            lines.push(format!("        Type: {}", field.kind.type_name()));

            if let FieldKind::Selection(options) = &field.kind {
                lines.push("                Selections:".to_string());
                for option in options {
                    lines.push(format!("                  Name:{}", option.caption));
                    lines.push(format!("                  Value:{}", option.internal_name));
                }
                lines.push("        *****************************".to_string());
            }
        }

        lines.push("    +++++++++++++++++++++++++++++++++++++++    ".to_string());
    }

    lines.push(
        "------------------------------------------------------------------------".to_string(),
    );
    block(lines)
}

pub fn campaign_list(campaigns: &[Campaign]) -> String {
    if campaigns.is_empty() {
        return block(vec!["No campaigns found.".to_string()]);
    }

    let mut lines = Vec::with_capacity(campaigns.len() * 3 + 1);
    for campaign in campaigns {
        lines.push(format!("{}  {}", campaign.guid, campaign.name));
        lines.push(format!("    Subject: {}", campaign.subject));
        lines.push(format!(
            "    Template: {} ({})",
            campaign.template_name, campaign.template_guid
        ));
    }
    lines.push(format!("{} campaign(s)", campaigns.len()));
    block(lines)
}
