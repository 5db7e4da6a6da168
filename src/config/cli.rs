use crate::config::toml_config::EmsConfig;
use crate::domain::model::CampaignType;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "ems-demo")]
#[command(about = "Demo client for the eworx Marketing Suite (eMS) SOAP API")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./ems-config.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "EMS_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Account name (Mandant) of the eMS to login
    #[arg(long, env = "EMS_ACCOUNT")]
    pub account: Option<String>,

    #[arg(long, env = "EMS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "EMS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Name of the registered application
    #[arg(long, env = "EMS_APPLICATION")]
    pub application: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    /// Directory with the demo images
    #[arg(long)]
    pub assets: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive console menu (default)
    Menu,
    /// Import subscribers, create a campaign with sections and send it
    SendCampaign,
    /// Print the statistics of a campaign
    Statistics {
        #[arg(long)]
        campaign_id: Option<String>,
    },
    /// Send a trigger mail to one subscriber
    TriggerMail {
        #[arg(long)]
        campaign_id: Option<String>,
        #[arg(long)]
        subscriber_id: Option<String>,
    },
    /// List campaigns
    Campaigns {
        #[arg(long = "type", value_enum, default_value = "in-work")]
        campaign_type: CampaignTypeArg,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CampaignTypeArg {
    InWork,
    Sent,
    All,
}

impl From<CampaignTypeArg> for CampaignType {
    fn from(arg: CampaignTypeArg) -> Self {
        match arg {
            CampaignTypeArg::InWork => CampaignType::InWork,
            CampaignTypeArg::Sent => CampaignType::Sent,
            CampaignTypeArg::All => CampaignType::All,
        }
    }
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_to(&self, config: &mut EmsConfig) {
        if let Some(url) = &self.service_url {
            config.service.url = url.clone();
        }
        if let Some(language) = &self.language {
            config.service.language = language.clone();
        }
        if let Some(assets) = &self.assets {
            config.media.assets_path = assets.clone();
        }

        let credentials = &mut config.credentials;
        for (target, value) in [
            (&mut credentials.account, &self.account),
            (&mut credentials.username, &self.username),
            (&mut credentials.password, &self.password),
            (&mut credentials.application, &self.application),
        ] {
            if value.is_some() {
                *target = value.clone();
            }
        }

        match &self.command {
            Some(Command::Statistics {
                campaign_id: Some(id),
            }) => config.statistics.campaign_id = id.clone(),
            Some(Command::TriggerMail {
                campaign_id,
                subscriber_id,
            }) => {
                if let Some(id) = campaign_id {
                    config.trigger_mail.campaign_id = id.clone();
                }
                if let Some(id) = subscriber_id {
                    config.trigger_mail.subscriber_id = id.clone();
                }
            }
            _ => {}
        }
    }
}
