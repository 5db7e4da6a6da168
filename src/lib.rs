pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::storage::LocalStorage;
pub use app::demos::{
    CampaignStatisticsDemo, DemoContext, ListCampaignsDemo, SendCampaignDemo, TriggerMailDemo,
};
pub use config::EmsConfig;
pub use core::agent::EmsServiceAgent;
pub use core::report::Console;
pub use domain::ports::{AssetStorage, Demo, EmsService};
pub use utils::error::{EmsError, Result};
